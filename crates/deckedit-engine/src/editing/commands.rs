use serde::{Deserialize, Serialize};

use crate::editing::{self, EditError, Patch, element};
use crate::models::{NewSlide, SlideSummary};
use crate::parsing;

/// Edit commands accepted by the engine, one variant per operation.
///
/// Serialized with an `action` tag so that request layers can map JSON or TOML payloads
/// straight onto a variant:
///
/// ```json
/// { "action": "change_color", "slide_number": 2, "element_id": "subtitle", "color": "red" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Cmd {
    ListSlides {
        #[serde(default = "default_preview_chars")]
        preview_chars: usize,
    },
    UpdateText {
        slide_number: usize,
        element_id: String,
        new_text: String,
    },
    ChangeColor {
        slide_number: usize,
        element_id: String,
        color: String,
    },
    SetBackground {
        slide_number: usize,
        color: String,
    },
    AddSlide {
        #[serde(default)]
        position: Option<usize>,
        #[serde(flatten)]
        slide: NewSlide,
    },
}

fn default_preview_chars() -> usize {
    parsing::DEFAULT_PREVIEW_CHARS
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdOutput {
    Slides(Vec<SlideSummary>),
    Edited(Patch),
}

impl CmdOutput {
    /// The edited document, if this was an edit
    pub fn into_patch(self) -> Option<Patch> {
        match self {
            CmdOutput::Edited(patch) => Some(patch),
            CmdOutput::Slides(_) => None,
        }
    }
}

impl Cmd {
    /// Reject commands whose fields can never address anything.
    pub fn validate(&self) -> Result<(), EditError> {
        match self {
            Cmd::ListSlides { .. } | Cmd::AddSlide { .. } => Ok(()),
            Cmd::UpdateText { element_id, .. } => require("element_id", element_id),
            Cmd::ChangeColor {
                element_id, color, ..
            } => {
                require("element_id", element_id)?;
                require("color", color)
            }
            Cmd::SetBackground { color, .. } => require("color", color),
        }
    }

    /// Validate and run the command against `document`.
    ///
    /// Rewrites that match nothing succeed with an unchanged [`Patch`].
    pub fn apply(&self, document: &str) -> Result<CmdOutput, EditError> {
        self.validate()?;

        let patch = match self {
            Cmd::ListSlides { preview_chars } => {
                return Ok(CmdOutput::Slides(parsing::list_slides(
                    document,
                    *preview_chars,
                )));
            }
            Cmd::UpdateText {
                slide_number,
                element_id,
                new_text,
            } => editing::update_element_content(document, *slide_number, element_id, new_text)?,
            Cmd::ChangeColor {
                slide_number,
                element_id,
                color,
            } => editing::update_element_color(document, *slide_number, element_id, color)?,
            Cmd::SetBackground {
                slide_number,
                color,
            } => editing::update_slide_background(document, *slide_number, color)?,
            Cmd::AddSlide { position, slide } => {
                editing::create_new_slide(document, *position, slide)
            }
        };

        Ok(CmdOutput::Edited(patch))
    }

    /// Like [`Cmd::apply`], but a text edit addressing no element on its slide is an
    /// [`EditError::ElementNotFound`]. Rewriting an element with the text it already has
    /// is still a success.
    pub fn apply_strict(&self, document: &str) -> Result<CmdOutput, EditError> {
        let output = self.apply(document)?;

        if let CmdOutput::Edited(patch) = &output
            && !patch.is_changed()
            && let Cmd::UpdateText {
                slide_number,
                element_id,
                ..
            } = self
        {
            let slide = parsing::get_slide_content(document, *slide_number)?;
            if !element::has_element(slide, element_id) {
                return Err(EditError::ElementNotFound {
                    slide_number: *slide_number,
                    element_id: element_id.clone(),
                });
            }
        }

        Ok(output)
    }
}

fn require(field: &str, value: &str) -> Result<(), EditError> {
    if value.trim().is_empty() {
        return Err(EditError::InvalidCommand(format!("{field} must not be empty")));
    }
    Ok(())
}
