pub mod engine;
pub mod join;

pub use crate::domain::model::{Film, Gender, Height, Person, PersonInfo, Planet};
pub use crate::domain::ports::{Aggregator, JsonSource};
pub use crate::utils::error::Result;
