// Domain layer: models and ports. No transport details live here.

pub mod model;
pub mod ports;
