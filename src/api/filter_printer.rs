use std::sync::Arc;

use crate::core::{FilterSet, PathSegment};

/// Formats the active filters for display (e.g. a "current filter" caption).
pub type FilterPrinterFn = Arc<dyn Fn(&FilterSet) -> String + Send + Sync + 'static>;

/// Single-segment paths print bare; deeper paths print as `[A -> B]`.
#[must_use]
pub fn print_filter(path: &[PathSegment]) -> String {
    match path {
        [] => String::new(),
        [single] => single.to_string(),
        segments => {
            let joined = segments
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> ");
            format!("[{joined}]")
        }
    }
}

#[must_use]
pub fn print_filters(filters: &FilterSet) -> String {
    filters
        .iter()
        .map(|filter| print_filter(filter.path()))
        .collect::<Vec<_>>()
        .join(", ")
}
