//! Favor specification parsing and per-prop favor resolution.
//!
//! A gift row carries one favor spec per affection level:
//!
//! ```text
//! 10|300_10$301_12$302_15$303_18$304_20
//! ^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//! |  ordered exceptions: <tag_list_id>_<favor>, separated by '$'
//! default favor
//! ```
//!
//! Exceptions are keyed by *tag-list* ids (a prop's `Tag_List`), which is a
//! different namespace from the gift-tag ids used to pick candidate props.

use std::str::FromStr;

use thiserror::Error;

use crate::types::Favor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("favor spec '{0}' has no '|' separator")]
    MissingSeparator(String),
    #[error("favor exception '{0}' is not of the form <tag_list_id>_<favor>")]
    BadException(String),
    #[error("'{0}' is not an integer favor value")]
    BadFavor(String),
}

/// One override entry of a favor spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavorException {
    pub tag_list_id: String,
    pub favor: Favor,
}

/// A parsed favor spec: default value plus ordered overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavorSpec {
    pub default: Favor,
    pub exceptions: Vec<FavorException>,
}

impl FavorSpec {
    /// Favor for a prop carrying the given tag-list ids.
    ///
    /// Exceptions are checked in declared order; the first one whose id is
    /// among `tag_list_ids` wins. No match yields the default.
    pub fn resolve<S: AsRef<str>>(&self, tag_list_ids: &[S]) -> Favor {
        self.exceptions
            .iter()
            .find(|exc| tag_list_ids.iter().any(|t| t.as_ref() == exc.tag_list_id))
            .map(|exc| exc.favor)
            .unwrap_or(self.default)
    }
}

impl FromStr for FavorSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (default, rest) = s
            .split_once('|')
            .ok_or_else(|| ParseError::MissingSeparator(s.to_string()))?;

        let default = parse_favor(default)?;
        let mut exceptions = Vec::new();
        for entry in rest.split('$').map(str::trim).filter(|e| !e.is_empty()) {
            let (tag_list_id, favor) = entry
                .split_once('_')
                .ok_or_else(|| ParseError::BadException(entry.to_string()))?;
            let tag_list_id = tag_list_id.trim();
            if tag_list_id.is_empty() {
                return Err(ParseError::BadException(entry.to_string()));
            }
            exceptions.push(FavorException {
                tag_list_id: tag_list_id.to_string(),
                favor: parse_favor(favor)?,
            });
        }

        Ok(Self {
            default,
            exceptions,
        })
    }
}

fn parse_favor(s: &str) -> Result<Favor, ParseError> {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .parse::<i32>()
        .map(Favor)
        .map_err(|_| ParseError::BadFavor(s.to_string()))
}
