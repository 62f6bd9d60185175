use crate::domain::model::{Film, Height, Person, PersonInfo, Planet};
use crate::utils::error::{AggregateError, Result, Stage};

/// 從人物資料推導出的相依請求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependencies {
    pub homeworld: String,
    pub films: Vec<String>,
}

pub fn expand(person: &Person) -> Dependencies {
    Dependencies {
        homeworld: person.homeworld.clone(),
        films: person.films.clone(),
    }
}

/// Parses a base-10 integer prefix the way the API's consumers expect:
/// leading whitespace and a sign are accepted and trailing garbage is
/// ignored (`"172cm"` is 172). No digits at all, or a value that overflows
/// `i64`, yields [`Height::NAN`].
pub fn parse_height(raw: &str) -> Height {
    let trimmed = raw.trim_start();
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };

    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Height::NAN;
    }

    trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .map(|value| Height(Some(value)))
        .unwrap_or(Height::NAN)
}

/// 組合最終結果，三種管道共用
pub fn join(person: &Person, planet: Planet, films: Vec<Film>) -> PersonInfo {
    PersonInfo {
        name: person.name.clone(),
        height: parse_height(&person.height),
        gender: person.gender,
        homeworld: planet.name,
        films: films
            .into_iter()
            .map(|film| Film {
                title: film.title,
                director: film.director,
                release_date: film.release_date,
            })
            .collect(),
    }
}

/// Fixed-size result slots filled by index, so completion order never
/// leaks into result order.
#[derive(Debug)]
pub struct IndexedSlots<T> {
    slots: Vec<Option<T>>,
}

impl<T> IndexedSlots<T> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| None).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn fill(&mut self, index: usize, value: T) {
        self.slots[index] = Some(value);
    }

    /// Returns the values in index order. An unfilled slot is reported with
    /// the stage produced by `stage_of`.
    pub fn into_vec(self, stage_of: impl Fn(usize) -> Stage) -> Result<Vec<T>> {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| AggregateError::EmptyStream {
                    stage: stage_of(index),
                })
            })
            .collect()
    }
}
