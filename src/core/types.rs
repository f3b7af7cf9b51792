use std::fmt;

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// One level of a hierarchical key.
///
/// Segments are totally ordered: numbers sort before text, numbers by their
/// IEEE total order and text lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl PathSegment {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.0),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{}", value.0),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PathSegment {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for PathSegment {
    fn from(value: i32) -> Self {
        Self::number(f64::from(value))
    }
}

/// Root-to-node ordered key. Most hierarchies are shallow, so short paths
/// stay inline.
pub type HierarchyPath = SmallVec<[PathSegment; 4]>;

/// Builds a [`HierarchyPath`] from anything convertible into segments.
#[must_use]
pub fn hierarchy_path<I, S>(segments: I) -> HierarchyPath
where
    I: IntoIterator<Item = S>,
    S: Into<PathSegment>,
{
    segments.into_iter().map(Into::into).collect()
}

/// Returns `true` when `prefix` is non-empty and `path` starts with it.
#[must_use]
pub fn path_starts_with(path: &[PathSegment], prefix: &[PathSegment]) -> bool {
    !prefix.is_empty() && path.len() >= prefix.len() && path[..prefix.len()] == *prefix
}

/// Input rows consumed by the hierarchy builder expose an ordered key.
pub trait KeyedRecord {
    fn key(&self) -> &[PathSegment];
}

/// Default input row: hierarchical key plus one numeric measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyRecord {
    pub key: HierarchyPath,
    pub value: f64,
}

impl HierarchyRecord {
    #[must_use]
    pub fn new<I, S>(key: I, value: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self {
            key: hierarchy_path(key),
            value,
        }
    }

    /// Converts a decimal measure (e.g. currency totals) into a record.
    pub fn from_decimal<I, S>(key: I, value: Decimal) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Ok(Self::new(key, decimal_to_f64(value, "record value")?))
    }
}

impl KeyedRecord for HierarchyRecord {
    fn key(&self) -> &[PathSegment] {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::{PathSegment, hierarchy_path, path_starts_with};

    #[test]
    fn numbers_sort_before_text() {
        let mut segments = vec![
            PathSegment::text("b"),
            PathSegment::number(10.0),
            PathSegment::text("a"),
            PathSegment::number(2.0),
        ];
        segments.sort();
        assert_eq!(
            segments,
            vec![
                PathSegment::number(2.0),
                PathSegment::number(10.0),
                PathSegment::text("a"),
                PathSegment::text("b"),
            ]
        );
    }

    #[test]
    fn empty_prefix_never_matches() {
        let path = hierarchy_path(["US", "NY"]);
        assert!(!path_starts_with(&path, &[]));
        assert!(path_starts_with(&path, &hierarchy_path(["US"])));
        assert!(path_starts_with(&path, &path));
        assert!(!path_starts_with(&hierarchy_path(["US"]), &path));
    }
}
