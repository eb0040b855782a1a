use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// The in-process view of a session: string keys mapped to JSON values.
///
/// This is the one type passed both into [`write`](crate::SessionHandler::write)
/// and out of [`read`](crate::SessionHandler::read). It serializes as a plain
/// JSON object, which is exactly what ends up in the cache.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionMap(Map<String, Value>);

impl SessionMap {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Deserializes the value stored under `field`.
    ///
    /// Returns `Ok(None)` when the field is absent.
    pub fn get<T>(&self, field: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.0.get(field) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::Decode(e.to_string())),
            None => Ok(None),
        }
    }

    /// Returns the raw JSON value stored under `field`.
    pub fn get_value(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Sets `field` to `value`, returning the previous value if there was one.
    pub fn insert<T>(&mut self, field: impl Into<String>, value: &T) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| Error::Encode(e.to_string()))?;
        Ok(self.0.insert(field.into(), value))
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for SessionMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for SessionMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SessionMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
