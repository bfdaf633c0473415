use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Presentation not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Deck written when a presentation file does not exist yet
pub const DEFAULT_PRESENTATION: &str = r#"# Welcome

<p id="welcome-text">Start your presentation here</p>

---

# Content

<div id="main-content">
  Add your content here
</div>

---

# Thank You

<p id="thank-you">Thanks for watching!</p>
"#;

/// Read a presentation file and return its content
pub fn read_presentation(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a presentation file, creating parent directories as needed
pub fn write_presentation(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Read a presentation, creating it from [`DEFAULT_PRESENTATION`] if missing
pub fn load_or_create(path: &Path) -> Result<String, IoError> {
    match read_presentation(path) {
        Err(IoError::NotFound(_)) => {
            log::info!("Creating default presentation at {}", path.display());
            write_presentation(path, DEFAULT_PRESENTATION)?;
            Ok(DEFAULT_PRESENTATION.to_string())
        }
        result => result,
    }
}
