use serde::{Deserialize, Serialize};

/// One row of a deck listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSummary {
    /// 1-indexed slide number
    pub number: usize,
    /// Text of the first heading, or "Untitled"
    pub title: String,
    /// Leading characters of the slide, with "..." when truncated
    pub preview: String,
}
