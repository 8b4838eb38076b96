//! Serde helpers for submitted form fields.
//!
//! HTML forms send every field as a string: blank inputs arrive as `""` and
//! multi-selects are flattened to one comma-separated value. JSON clients send
//! typed values. The helpers here accept both so one DTO serves both
//! encodings.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::types::DbId;

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw<T> {
    Text(String),
    Value(T),
}

/// Deserialize an optional field, treating blank strings as absent.
///
/// Strings are trimmed and parsed with [`FromStr`]; typed values are taken
/// as-is. Use with `#[serde(default, deserialize_with = "...")]`.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: fmt::Display,
{
    match Option::<Raw<T>>::deserialize(de)? {
        None => Ok(None),
        Some(Raw::Value(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse().map(Some).map_err(de::Error::custom)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIds {
    Text(String),
    List(Vec<DbId>),
}

/// Deserialize an optional id list from either `[1, 2]` or `"1,2"`.
///
/// A blank string yields an empty list, which lets a form clear every
/// selection. An absent field stays `None` (leave the selection unchanged).
pub fn id_list<'de, D>(de: D) -> Result<Option<Vec<DbId>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawIds>::deserialize(de)? {
        None => Ok(None),
        Some(RawIds::List(ids)) => Ok(Some(ids)),
        Some(RawIds::Text(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<DbId>()
                    .map_err(|_| de::Error::custom(format!("invalid id '{part}'")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
    }
}
