use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Divers,
}

/// API 回傳的人物資料
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub gender: Gender,
    pub homeworld: String,
    pub films: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Planet {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub director: String,
    pub release_date: String,
}

/// Height in centimetres. `None` marks a value that was not a number
/// (e.g. `"unknown"`) and serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Height(pub Option<i64>);

impl Height {
    pub const NAN: Height = Height(None);

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }

    pub fn value(&self) -> Option<i64> {
        self.0
    }
}

/// 聚合後的結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub height: Height,
    pub gender: Gender,
    pub homeworld: String,
    pub films: Vec<Film>,
}
