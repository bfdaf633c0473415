use serde::{Deserialize, Serialize};

/// Layout name that needs no frontmatter entry
pub const DEFAULT_LAYOUT: &str = "default";

/// Fields of a slide to be created. Every field is optional; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSlide {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
}

impl NewSlide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn content(&self) -> Option<&str> {
        non_empty(&self.content)
    }

    pub fn background(&self) -> Option<&str> {
        non_empty(&self.background)
    }

    /// Layout to write into frontmatter; `None` for the default layout
    pub fn custom_layout(&self) -> Option<&str> {
        non_empty(&self.layout).filter(|layout| *layout != DEFAULT_LAYOUT)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
