use std::ops::Range;

/// Result of applying an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// The complete document after the edit
    pub document: String,
    /// Byte range of the rewritten or inserted slide in `document` as `locate` reports it,
    /// `None` for a no-op
    pub changed: Option<Range<usize>>,
}

impl Patch {
    pub fn unchanged(document: &str) -> Self {
        Self {
            document: document.to_string(),
            changed: None,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.changed.is_some()
    }

    pub fn into_document(self) -> String {
        self.document
    }
}
