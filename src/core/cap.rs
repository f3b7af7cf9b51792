use serde::{Deserialize, Serialize};

use crate::core::primitives::non_negative_or_zero;
use crate::core::types::{HierarchyPath, HierarchyRecord, PathSegment};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_OTHERS_LABEL: &str = "Others";

/// Top-N limiting applied to records before the hierarchy is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapConfig {
    /// Number of records kept; `None` keeps everything.
    #[serde(default)]
    pub cap: Option<usize>,
    /// Keep the largest records when `true`, the smallest otherwise.
    #[serde(default = "default_take_front")]
    pub take_front: bool,
    #[serde(default = "default_others_label")]
    pub others_label: String,
    /// Fold the capped-away records into one `[others_label]` record.
    #[serde(default = "default_group_others")]
    pub group_others: bool,
}

impl Default for CapConfig {
    fn default() -> Self {
        Self {
            cap: None,
            take_front: default_take_front(),
            others_label: default_others_label(),
            group_others: default_group_others(),
        }
    }
}

fn default_take_front() -> bool {
    true
}

fn default_others_label() -> String {
    DEFAULT_OTHERS_LABEL.to_owned()
}

fn default_group_others() -> bool {
    true
}

impl CapConfig {
    #[must_use]
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = Some(cap);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.group_others && self.others_label.is_empty() {
            return Err(ChartError::InvalidConfiguration(
                "cap others label must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Records folded away by capping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OthersBucket {
    pub keys: Vec<HierarchyPath>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CappedRecords {
    pub records: Vec<HierarchyRecord>,
    pub others: Option<OthersBucket>,
}

/// Ranks records by their measured value (descending, stable) and keeps
/// `config.cap` of them.
///
/// With `group_others`, the remainder becomes one record keyed
/// `[others_label]` when its total is positive.
#[must_use]
pub fn cap_records(records: &[HierarchyRecord], config: &CapConfig) -> CappedRecords {
    let Some(cap) = config.cap else {
        return CappedRecords {
            records: records.to_vec(),
            others: None,
        };
    };

    let mut ranked: Vec<&HierarchyRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));

    let (kept, rest) = if config.take_front {
        let split = cap.min(ranked.len());
        let (kept, rest) = ranked.split_at(split);
        (kept.to_vec(), rest.to_vec())
    } else {
        let split = ranked.len().saturating_sub(cap);
        let (rest, kept) = ranked.split_at(split);
        (kept.to_vec(), rest.to_vec())
    };

    let mut records: Vec<HierarchyRecord> = kept.into_iter().cloned().collect();
    if !config.group_others || rest.is_empty() {
        return CappedRecords {
            records,
            others: None,
        };
    }

    let value: f64 = rest
        .iter()
        .map(|record| non_negative_or_zero(record.value))
        .sum();
    let keys: Vec<HierarchyPath> = rest.iter().map(|record| record.key.clone()).collect();
    if value <= 0.0 {
        return CappedRecords {
            records,
            others: None,
        };
    }

    let mut others_key = HierarchyPath::new();
    others_key.push(PathSegment::text(config.others_label.clone()));
    records.push(HierarchyRecord {
        key: others_key,
        value,
    });
    CappedRecords {
        records,
        others: Some(OthersBucket { keys, value }),
    }
}
