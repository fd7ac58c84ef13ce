// crates/mangle_preprocess/src/marker.rs

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Token that opens every substitution marker.
pub const MARKER_TOKEN: &str = "_mangle_";

/// `_mangle_(<ignored>, "<argument>")`
///
/// The first field may hold anything but a comma. The argument is everything
/// between the first pair of double quotes after the comma; no escapes are
/// recognised.
static MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"_mangle_\([^,]*,\s*"([^"]*)"\)"#).expect("marker pattern is a valid regex")
});

/// A single marker found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerOccurrence<'a> {
    /// Byte range of the whole marker, wrapper included.
    pub span: Range<usize>,
    /// Text between the quotes, verbatim.
    pub argument: &'a str,
}

/// Returns every non-overlapping marker in `document`, in document order.
pub fn find_markers(document: &str) -> Vec<MarkerOccurrence<'_>> {
    MARKER_PATTERN
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let argument = caps.get(1)?;
            Some(MarkerOccurrence {
                span: whole.range(),
                argument: argument.as_str(),
            })
        })
        .collect()
}
