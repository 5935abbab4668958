#![allow(clippy::module_name_repetitions)]
//! An ordered batch of music items, as returned by a paged response.

use std::{ops::Index, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    errors::{CodingPath, DecodingError},
    item::UserMusicItem,
};

/// The key holding the items of a response document.
pub const DATA_KEY: &str = "data";
/// The key holding the href of the next batch of a response document.
pub const NEXT_KEY: &str = "next";

/// An ordered collection of music items.
///
/// Items keep the order they were received in, and duplicates are kept.
/// `next` is the href of the following batch, if there is one; nothing here fetches it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MusicItemCollection<T> {
    #[serde(rename = "data")]
    items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<Arc<str>>,
}

/// A collection of user music items.
pub type UserMusicItems = MusicItemCollection<UserMusicItem>;

impl<T> MusicItemCollection<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, next: Option<Arc<str>>) -> Self {
        Self { items, next }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn next_href(&self) -> Option<&str> {
        self.next.as_deref()
    }

    #[must_use]
    pub const fn has_next_batch(&self) -> bool {
        self.next.is_some()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl MusicItemCollection<UserMusicItem> {
    /// Decode a response document of the form `{"data": [...], "next": "..."}`.
    ///
    /// Every element of `data` is decoded with [`UserMusicItem::decode`].
    /// Decoding stops at the first element that fails.
    ///
    /// # Errors
    ///
    /// - [`DecodingError::TypeMismatch`] if the document is not an object, `data` is not an array, or `next` is not a string.
    /// - [`DecodingError::KeyNotFound`] if `data` is missing.
    /// - any error from [`UserMusicItem::decode`], with the path of the failing element.
    pub fn decode(document: &Value) -> Result<Self, DecodingError> {
        let root = CodingPath::root();
        let Some(object) = document.as_object() else {
            return Err(DecodingError::TypeMismatch {
                target: "UserMusicItems",
                description: format!("Expected an object, found {}.", describe(document)),
                path: root,
            });
        };

        let data_path = root.push_key(DATA_KEY);
        let data = match object.get(DATA_KEY) {
            Some(Value::Array(data)) => data,
            None | Some(Value::Null) => {
                return Err(DecodingError::KeyNotFound {
                    key: DATA_KEY,
                    path: root,
                });
            }
            Some(other) => {
                return Err(DecodingError::TypeMismatch {
                    target: "UserMusicItems",
                    description: format!("Expected an array, found {}.", describe(other)),
                    path: data_path,
                });
            }
        };

        let next = match object.get(NEXT_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(next)) => Some(Arc::from(next.as_str())),
            Some(other) => {
                return Err(DecodingError::TypeMismatch {
                    target: "UserMusicItems",
                    description: format!("Expected a string, found {}.", describe(other)),
                    path: root.push_key(NEXT_KEY),
                });
            }
        };

        let items = data
            .iter()
            .enumerate()
            .map(|(index, payload)| UserMusicItem::decode(payload, &data_path.push_index(index)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { items, next })
    }
}

/// Goes through [`MusicItemCollection::decode`], so element errors carry their `$.data[i]` path.
impl<'de> Deserialize<'de> for MusicItemCollection<UserMusicItem> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Value::deserialize(deserializer)?;
        Self::decode(&document).map_err(serde::de::Error::custom)
    }
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<T> Default for MusicItemCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next: None,
        }
    }
}

impl<T> From<Vec<T>> for MusicItemCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, next: None }
    }
}

impl<T> FromIterator<T> for MusicItemCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> IntoIterator for MusicItemCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MusicItemCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for MusicItemCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}
