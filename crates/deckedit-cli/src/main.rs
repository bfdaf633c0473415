mod args;
mod browse;

use anyhow::{Context, Result, anyhow};
use args::{Action, Invocation, USAGE};
use deckedit_config::Config;
use deckedit_engine::{Cmd, CmdOutput, SlideSummary, io, parsing};
use serde::Deserialize;
use std::{env, fs, path::Path, process};

/// A TOML file of `[[command]]` tables
#[derive(Debug, Deserialize)]
struct Batch {
    #[serde(rename = "command", default)]
    commands: Vec<Cmd>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let invocation = match args::parse_args(env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(invocation) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(invocation: Invocation) -> Result<()> {
    let config = match invocation.file {
        Some(path) => Config::new(path),
        None => Config::load()?.ok_or_else(|| {
            anyhow!(
                "No presentation given and no config file found. Pass --file <deck.md> or create {}",
                Config::config_path().display()
            )
        })?,
    };

    if let Some(output) = execute(
        invocation.action,
        &config.presentation_path,
        config.preview_chars,
    )? {
        println!("{output}");
    }
    Ok(())
}

/// Run one action against the deck at `path`, returning anything to print.
fn execute(action: Action, path: &Path, preview_chars: usize) -> Result<Option<String>> {
    let document = io::load_or_create(path)
        .with_context(|| format!("Failed to load presentation {}", path.display()))?;

    match action {
        Action::List => Ok(Some(format_listing(&parsing::list_slides(
            &document,
            preview_chars,
        )))),
        Action::Show {
            slide_number,
            preview,
        } => {
            let text = if preview {
                parsing::slide_preview(&document, slide_number, parsing::SLIDE_PREVIEW_CHARS)?
            } else {
                parsing::get_slide_content(&document, slide_number)?.to_string()
            };
            Ok(Some(text))
        }
        Action::Edit(cmd) => {
            let output = cmd.apply_strict(&document)?;
            let Some(patch) = output.into_patch() else {
                return Ok(None);
            };
            if !patch.is_changed() {
                return Ok(Some("No changes needed".to_string()));
            }
            io::write_presentation(path, &patch.document)?;
            log::info!("Updated {}", path.display());
            Ok(Some(describe(&cmd)))
        }
        Action::Apply(batch_path) => apply_batch(&document, path, &batch_path),
        Action::Browse => {
            browse::run(&document, preview_chars)?;
            Ok(None)
        }
    }
}

fn apply_batch(document: &str, path: &Path, batch_path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(batch_path)
        .with_context(|| format!("Failed to read command file {}", batch_path.display()))?;
    let batch: Batch = toml::from_str(&content)
        .with_context(|| format!("Failed to parse command file {}", batch_path.display()))?;

    let mut document = document.to_string();
    let mut changed = false;
    let mut report = Vec::new();

    for (i, cmd) in batch.commands.iter().enumerate() {
        let output = cmd
            .apply_strict(&document)
            .with_context(|| format!("Command {} failed", i + 1))?;
        match output {
            CmdOutput::Slides(slides) => report.push(format_listing(&slides)),
            CmdOutput::Edited(patch) => {
                if patch.is_changed() {
                    changed = true;
                    document = patch.into_document();
                }
                report.push(describe(cmd));
            }
        }
    }

    if changed {
        io::write_presentation(path, &document)?;
        log::info!(
            "Applied {} commands to {}",
            batch.commands.len(),
            path.display()
        );
    }

    Ok(Some(report.join("\n")))
}

fn format_listing(slides: &[SlideSummary]) -> String {
    slides
        .iter()
        .map(|slide| {
            format!(
                "{:>3}. {}\n     {}",
                slide.number,
                slide.title,
                slide.preview.replace('\n', " ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(cmd: &Cmd) -> String {
    match cmd {
        Cmd::ListSlides { .. } => "Listed slides".to_string(),
        Cmd::UpdateText {
            slide_number,
            element_id,
            ..
        } => format!("Updated text of '{element_id}' on slide {slide_number}"),
        Cmd::ChangeColor {
            slide_number,
            element_id,
            color,
        } => format!("Set color of '{element_id}' on slide {slide_number} to {color}"),
        Cmd::SetBackground {
            slide_number,
            color,
        } => format!("Set background of slide {slide_number} to {color}"),
        Cmd::AddSlide {
            position: Some(position),
            ..
        } => format!("Inserted slide at position {position}"),
        Cmd::AddSlide { position: None, .. } => "Appended slide".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckedit_engine::NewSlide;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const DECK: &str = "# Intro\n\n<p id=\"lead\">Hello</p>\n---\n# Outro\n";

    fn deck_file(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("slides.md");
        fs::write(&path, DECK).unwrap();
        path
    }

    #[test]
    fn test_missing_deck_is_created_from_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("talks").join("new.md");

        let output = execute(Action::List, &path, 20).unwrap().unwrap();

        assert!(output.contains("1. Welcome"));
        assert!(output.contains("3. Thank You"));
        assert_eq!(fs::read_to_string(&path).unwrap(), io::DEFAULT_PRESENTATION);
    }

    #[test]
    fn test_edit_writes_back() {
        let dir = TempDir::new().unwrap();
        let path = deck_file(&dir);
        let cmd = Cmd::UpdateText {
            slide_number: 1,
            element_id: "lead".to_string(),
            new_text: "Hi there".to_string(),
        };

        let output = execute(Action::Edit(cmd), &path, 20).unwrap();

        assert_eq!(
            output.as_deref(),
            Some("Updated text of 'lead' on slide 1")
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Intro\n\n<p id=\"lead\">Hi there</p>\n---\n# Outro\n"
        );
    }

    #[test]
    fn test_unmatched_text_edit_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = deck_file(&dir);
        let cmd = Cmd::UpdateText {
            slide_number: 2,
            element_id: "lead".to_string(),
            new_text: "Hi there".to_string(),
        };

        let err = execute(Action::Edit(cmd), &path, 20).unwrap_err();

        assert_eq!(err.to_string(), "Element 'lead' not found on slide 2");
        assert_eq!(fs::read_to_string(&path).unwrap(), DECK);
    }

    #[test]
    fn test_show_slide() {
        let dir = TempDir::new().unwrap();
        let path = deck_file(&dir);

        let action = Action::Show {
            slide_number: 2,
            preview: false,
        };
        let output = execute(action, &path, 20).unwrap();

        assert_eq!(output.as_deref(), Some("# Outro\n"));
    }

    #[test]
    fn test_batch_applies_in_order() {
        let dir = TempDir::new().unwrap();
        let path = deck_file(&dir);
        let batch_path = dir.path().join("commands.toml");
        fs::write(
            &batch_path,
            r#"
[[command]]
action = "add_slide"
position = 2
title = "Middle"

[[command]]
action = "set_background"
slide_number = 3
color = "black"

[[command]]
action = "list_slides"
preview_chars = 5
"#,
        )
        .unwrap();

        let output = execute(Action::Apply(batch_path), &path, 20)
            .unwrap()
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# Middle"));
        assert!(written.contains("background: \"black\""));
        assert!(output.starts_with("Inserted slide at position 2\nSet background of slide 3"));
        assert!(output.contains("2. Middle"));
    }

    #[test]
    fn test_failing_batch_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = deck_file(&dir);
        let batch_path = dir.path().join("commands.toml");
        fs::write(
            &batch_path,
            r#"
[[command]]
action = "change_color"
slide_number = 1
element_id = "lead"
color = "red"

[[command]]
action = "change_color"
slide_number = 7
element_id = "lead"
color = "red"
"#,
        )
        .unwrap();

        let err = execute(Action::Apply(batch_path), &path, 20).unwrap_err();

        assert!(format!("{err:#}").contains("Command 2 failed"));
        assert_eq!(fs::read_to_string(&path).unwrap(), DECK);
    }

    #[test]
    fn test_describe_add() {
        let cmd = Cmd::AddSlide {
            position: None,
            slide: NewSlide::new(),
        };
        assert_eq!(describe(&cmd), "Appended slide");
    }
}
