//! Textual representation of sets: `{a, b, c}`.

use crate::Set;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSetError {
    #[error("a set must start with `{{`")]
    MissingOpeningBrace,
    #[error("a set must end with `}}`")]
    MissingClosingBrace,
    #[error("empty element at position {position}")]
    EmptyElement { position: usize },
    #[error("invalid element `{token}` at position {position}: {reason}")]
    InvalidElement {
        position: usize,
        token: String,
        reason: String,
    },
}

/// Members are separated by `", "`, in no particular order.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.into_iter().format(", "))
    }
}

/// Parses a set from the `{a, b, c}` form produced by [`Display`].
///
/// Whitespace around elements is ignored, as is a single trailing comma.
/// Elements are split on commas and thus cannot contain one.
///
/// ```
/// use gset::Set;
/// let set: Set<u32> = "{3, 1, 2, 3}".parse().unwrap();
/// assert_eq!(set, Set::from_array([1, 2, 3]));
/// ```
impl<T> FromStr for Set<T>
where
    T: FromStr + Eq + Hash,
    T::Err: Display,
{
    type Err = ParseSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .ok_or(ParseSetError::MissingOpeningBrace)?
            .strip_suffix('}')
            .ok_or(ParseSetError::MissingClosingBrace)?
            .trim();

        let mut set = Set::empty();
        if inner.is_empty() {
            return Ok(set);
        }
        let inner = inner.strip_suffix(',').unwrap_or(inner);
        for (position, token) in inner.split(',').enumerate() {
            let token = token.trim();
            if token.is_empty() {
                return Err(ParseSetError::EmptyElement { position });
            }
            let value = token.parse::<T>().map_err(|err| ParseSetError::InvalidElement {
                position,
                token: token.to_string(),
                reason: err.to_string(),
            })?;
            set.insert(value);
        }
        Ok(set)
    }
}
