//! Modifier sets.
//!
//! A modifier set is either a map of names to flags or a list of candidate
//! names. Both keep their order, and both drop falsy entries: a map entry
//! whose value is not truthy, or a list entry that is missing or empty.

use crate::error::AbemError;
use crate::value::Value;
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Modifiers {
    /// Names paired with flags, in insertion order.
    Map(Vec<(String, Value)>),

    /// Candidate names in positional order.
    List(Vec<Option<String>>),
}

impl Modifiers {
    /// Build a map-shaped set from `(name, value)` pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        entries.into_iter().collect()
    }

    /// Build a list-shaped set from candidate names.
    pub fn list<I, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoCandidate,
    {
        Modifiers::List(
            entries
                .into_iter()
                .map(IntoCandidate::into_candidate)
                .collect(),
        )
    }

    /// Raw names that contribute a class, in order.
    pub fn active(&self) -> Vec<&str> {
        match self {
            Modifiers::Map(entries) => entries
                .iter()
                .filter(|(_, value)| value.is_truthy())
                .map(|(name, _)| name.as_str())
                .collect(),
            Modifiers::List(entries) => entries
                .iter()
                .filter_map(|entry| entry.as_deref())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    /// Reject active names that would split into several classes.
    pub fn validate(&self) -> Result<(), AbemError> {
        match self
            .active()
            .into_iter()
            .find(|name| name.chars().any(char::is_whitespace))
        {
            Some(name) => Err(AbemError::InvalidName {
                name: name.to_string(),
                reason: "modifier names must not contain whitespace".to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Modifiers::Map(entries) => entries.is_empty(),
            Modifiers::List(entries) => entries.is_empty(),
        }
    }
}

/// Conversion into a list entry. `None` and `""` are kept as absent slots.
pub trait IntoCandidate {
    fn into_candidate(self) -> Option<String>;
}

impl IntoCandidate for &str {
    fn into_candidate(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoCandidate for String {
    fn into_candidate(self) -> Option<String> {
        Some(self)
    }
}

impl IntoCandidate for &String {
    fn into_candidate(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: IntoCandidate> IntoCandidate for Option<T> {
    fn into_candidate(self) -> Option<String> {
        self.and_then(IntoCandidate::into_candidate)
    }
}

/// A repeated name keeps its first position and takes the last value.
fn insert_entry(entries: &mut Vec<(String, Value)>, name: String, value: Value) {
    match entries.iter_mut().find(|(existing, _)| *existing == name) {
        Some(slot) => slot.1 = value,
        None => entries.push((name, value)),
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Modifiers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Vec::new();
        for (name, value) in iter {
            insert_entry(&mut entries, name.into(), value.into());
        }
        Modifiers::Map(entries)
    }
}

impl From<&Modifiers> for Modifiers {
    fn from(mods: &Modifiers) -> Self {
        mods.clone()
    }
}

impl<const N: usize> From<[&str; N]> for Modifiers {
    fn from(names: [&str; N]) -> Self {
        Modifiers::list(names)
    }
}

impl From<Vec<&str>> for Modifiers {
    fn from(names: Vec<&str>) -> Self {
        Modifiers::list(names)
    }
}

impl From<Vec<String>> for Modifiers {
    fn from(names: Vec<String>) -> Self {
        Modifiers::list(names)
    }
}

impl From<Vec<Option<String>>> for Modifiers {
    fn from(names: Vec<Option<String>>) -> Self {
        Modifiers::List(names)
    }
}

/// Build a [`Modifiers`] set.
///
/// `name => value` pairs produce a map, bare entries produce a list:
///
/// ```
/// use abem_core::{Modifiers, modifiers};
///
/// let map = modifiers! { "isOpen" => true, "count" => 0, "label" => "x" };
/// assert_eq!(map.active(), vec!["isOpen", "label"]);
///
/// let list = modifiers!["large", None::<&str>, ""];
/// assert_eq!(list.active(), vec!["large"]);
/// ```
#[macro_export]
macro_rules! modifiers {
    ($($name:expr => $value:expr),* $(,)?) => {
        $crate::Modifiers::map(::std::vec::Vec::<(::std::string::String, $crate::Value)>::from([
            $((::std::string::String::from($name), $crate::Value::from($value))),*
        ]))
    };
    ($($entry:expr),+ $(,)?) => {
        $crate::Modifiers::List(::std::vec![
            $($crate::modifiers::IntoCandidate::into_candidate($entry)),+
        ])
    };
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Modifiers::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (name, value) in entries {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Modifiers::List(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for entry in entries {
                    seq.serialize_element(entry)?;
                }
                seq.end()
            }
        }
    }
}

struct ModifiersVisitor;

impl<'de> Visitor<'de> for ModifiersVisitor {
    type Value = Modifiers;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of modifier flags or a list of modifier names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Modifiers, A::Error> {
        let mut entries: Vec<(String, Value)> = Vec::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            insert_entry(&mut entries, name, value);
        }
        Ok(Modifiers::Map(entries))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Modifiers, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_element::<Option<String>>()? {
            entries.push(entry);
        }
        Ok(Modifiers::List(entries))
    }
}

impl<'de> Deserialize<'de> for Modifiers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ModifiersVisitor)
    }
}

impl Modifiers {
    /// Read a set from a JSON value, keeping object key order.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Modifiers::deserialize(value)
    }
}
