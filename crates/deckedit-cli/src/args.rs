use anyhow::{Context, Result, anyhow, bail};
use deckedit_engine::{Cmd, NewSlide};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: deckedit [--file <deck.md>] <command>

Commands:
  list                                 List slides with titles and previews
  show <slide> [--preview]             Print one slide, or its first 200 characters
  set-text <slide> <element-id> <text> Replace an element's text
  set-color <slide> <element-id> <color>
                                       Set an element's CSS color
  set-background <slide> <color>       Set a slide's frontmatter background
  add [--position <n>] [--title <t>] [--content <c>] [--background <b>] [--layout <l>]
                                       Insert a slide (appends without --position)
  apply <commands.toml>                Apply a batch of [[command]] tables
  browse                               Browse slides in the terminal";

/// What the user asked for
#[derive(Debug, PartialEq)]
pub enum Action {
    List,
    Show { slide_number: usize, preview: bool },
    Edit(Cmd),
    Apply(PathBuf),
    Browse,
}

#[derive(Debug, PartialEq)]
pub struct Invocation {
    /// Deck path from `--file`, overriding the config file
    pub file: Option<PathBuf>,
    pub action: Action,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();

    let mut file = None;
    if args.peek().map(String::as_str) == Some("--file") {
        args.next();
        file = Some(PathBuf::from(required(&mut args, "--file")?));
    }

    let command = args.next().ok_or_else(|| anyhow!("No command given"))?;
    let action = match command.as_str() {
        "list" => Action::List,
        "show" => {
            let slide_number = slide_number(&mut args)?;
            let preview = args.next_if(|arg| arg == "--preview").is_some();
            Action::Show {
                slide_number,
                preview,
            }
        }
        "set-text" => Action::Edit(Cmd::UpdateText {
            slide_number: slide_number(&mut args)?,
            element_id: required(&mut args, "element-id")?,
            new_text: required(&mut args, "text")?,
        }),
        "set-color" => Action::Edit(Cmd::ChangeColor {
            slide_number: slide_number(&mut args)?,
            element_id: required(&mut args, "element-id")?,
            color: required(&mut args, "color")?,
        }),
        "set-background" => Action::Edit(Cmd::SetBackground {
            slide_number: slide_number(&mut args)?,
            color: required(&mut args, "color")?,
        }),
        "add" => parse_add(&mut args)?,
        "apply" => Action::Apply(PathBuf::from(required(&mut args, "commands file")?)),
        "browse" => Action::Browse,
        other => bail!("Unknown command: {other}"),
    };

    if let Some(extra) = args.next() {
        bail!("Unexpected argument: {extra}");
    }

    Ok(Invocation { file, action })
}

fn parse_add(args: &mut impl Iterator<Item = String>) -> Result<Action> {
    let mut position = None;
    let mut slide = NewSlide::new();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--position" => {
                let value = required(args, "--position")?;
                position = Some(
                    value
                        .parse()
                        .with_context(|| format!("Invalid position: {value}"))?,
                );
            }
            "--title" => slide.title = Some(required(args, "--title")?),
            "--content" => slide.content = Some(required(args, "--content")?),
            "--background" => slide.background = Some(required(args, "--background")?),
            "--layout" => slide.layout = Some(required(args, "--layout")?),
            other => bail!("Unknown option for add: {other}"),
        }
    }

    Ok(Action::Edit(Cmd::AddSlide { position, slide }))
}

fn required(args: &mut impl Iterator<Item = String>, name: &str) -> Result<String> {
    args.next().ok_or_else(|| anyhow!("Missing {name}"))
}

fn slide_number(args: &mut impl Iterator<Item = String>) -> Result<usize> {
    let value = required(args, "slide number")?;
    value
        .parse()
        .with_context(|| format!("Invalid slide number: {value}"))
}
