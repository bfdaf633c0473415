
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Three-slide deck exercising tagged elements and an existing style block
pub const SAMPLE_DECK: &str = r#"# Welcome to My Presentation

<p id="intro-text">This is the introduction slide</p>

<div id="main-content">
  Learn about amazing things
</div>

---

# Second Slide

<h2 id="subtitle">Key Features</h2>

<ul id="feature-list">
  <li>Feature 1</li>
  <li>Feature 2</li>
</ul>

---

# Third Slide

<div id="code-example">
  This slide has code examples
</div>

<style>
#code-example {
  font-family: monospace;
}
</style>
"#;

/// Create a temporary directory for deck files
pub fn create_test_deck_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a deck file with content
pub fn create_test_file(deck_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = deck_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
