//! Domain DTOs for the todo service.
//!
//! # Design
//! `Todo` is the stored record and always carries an assigned id. Request
//! bodies decode into `TodoInput`, whose id stays signed and optional so that
//! business validation (not the decoder) decides what a negative or non-zero
//! id means. The id decoder accepts integral floats and integer strings but
//! rejects anything that would lose information, such as `1.5`. Bodies must
//! be JSON objects; the positional array form serde would otherwise accept
//! is refused.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// A single todo item held by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_done: bool,
}

/// Request body for both creating and updating a todo.
///
/// `None` means the caller did not send the field (or sent `null`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoInput {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub is_done: Option<bool>,
}

#[derive(Deserialize)]
struct TodoInputFields {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<i64>,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    is_done: Option<bool>,
}

impl<'de> Deserialize<'de> for TodoInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TodoInputVisitor)
    }
}

struct TodoInputVisitor;

impl<'de> Visitor<'de> for TodoInputVisitor {
    type Value = TodoInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a todo object")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let fields = TodoInputFields::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(TodoInput {
            id: fields.id,
            title: fields.title,
            description: fields.description,
            is_done: fields.is_done,
        })
    }
}

impl TodoInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_done(mut self, is_done: bool) -> Self {
        self.is_done = Some(is_done);
        self
    }

    /// True when the id is absent or `0`, i.e. not yet assigned.
    pub fn is_unassigned(&self) -> bool {
        matches!(self.id, None | Some(0))
    }
}

/// The whole collection, as returned by `GET /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    pub title: String,
    pub todos: Vec<Todo>,
}

/// Envelope pairing an optional todo with a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoMessage {
    pub todo: Option<Todo>,
    pub message: String,
}

impl TodoMessage {
    pub fn new(todo: Todo, message: impl Into<String>) -> Self {
        Self {
            todo: Some(todo),
            message: message.into(),
        }
    }
}

/// Plain `{ "message": ... }` body used by the status probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}

pub const INVALID_INTEGER: &str = "Input should be a valid integer";

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientIdVisitor)
}

struct LenientIdVisitor;

impl<'de> Visitor<'de> for LenientIdVisitor {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INVALID_INTEGER)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(Some)
            .map_err(|_| E::custom(format!("{INVALID_INTEGER}, got {v}")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() || v.fract() != 0.0 {
            return Err(E::custom(format!(
                "{INVALID_INTEGER}, got a number with a fractional part: {v}"
            )));
        }
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if v < i64::MIN as f64 || v >= i64::MAX as f64 {
            return Err(E::custom(format!("{INVALID_INTEGER}, {v} is out of range")));
        }
        Ok(Some(v as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| E::custom(format!("{INVALID_INTEGER}, unable to parse string {v:?}")))
    }
}
