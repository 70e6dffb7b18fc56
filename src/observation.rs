use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub use self::parse_float::parse_float;
use crate::form::FormData;

mod parse_float;

/// Numeric feature vector submitted for prediction.
///
/// Keeps the form's field order. Re-inserting a name overwrites the value in place.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Observation(Vec<(String, f64)>);

impl Observation {
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&FormData> for Observation {
    /// Parses every field as a float. Unparseable values become `NaN`.
    fn from(form: &FormData) -> Self {
        let mut observation = Self::default();
        for (name, value) in form.iter() {
            observation.insert(name, parse_float(value));
        }
        observation
    }
}

impl Serialize for Observation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, &JsonNumber(*value))?;
        }
        map.end()
    }
}

/// Writes a float the way `JSON.stringify` does: integers without a fraction, non-finite as `null`.
struct JsonNumber(f64);

impl JsonNumber {
    /// 2⁵³ − 1, the largest integer a double holds exactly.
    const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;
}

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if !value.is_finite() {
            serializer.serialize_none()
        } else if value.fract() == 0.0 && value.abs() <= Self::MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}
