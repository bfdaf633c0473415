use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use deckedit_engine::{SlideSummary, parsing};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

/// Read-only slide browser state
struct App {
    slides: Vec<SlideSummary>,
    texts: Vec<String>,
    slide_list_state: ListState,
}

impl App {
    fn new(document: &str, preview_chars: usize) -> Self {
        let slides = parsing::list_slides(document, preview_chars);
        let texts = if slides.is_empty() {
            Vec::new()
        } else {
            parsing::split(document)
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        let mut slide_list_state = ListState::default();
        if !slides.is_empty() {
            slide_list_state.select(Some(0));
        }

        Self {
            slides,
            texts,
            slide_list_state,
        }
    }

    fn next_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        let i = match self.slide_list_state.selected() {
            Some(i) => (i + 1) % self.slides.len(),
            None => 0,
        };
        self.slide_list_state.select(Some(i));
    }

    fn previous_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        let i = match self.slide_list_state.selected() {
            Some(0) | None => self.slides.len() - 1,
            Some(i) => i - 1,
        };
        self.slide_list_state.select(Some(i));
    }

    fn selected_text(&self) -> Option<&str> {
        self.slide_list_state
            .selected()
            .and_then(|i| self.texts.get(i))
            .map(String::as_str)
    }
}

pub fn run(document: &str, preview_chars: usize) -> Result<()> {
    let mut app = App::new(document, preview_chars);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_slide(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_slide(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let slide_items: Vec<ListItem> = app
        .slides
        .iter()
        .map(|slide| ListItem::new(Line::from(format!("{:>3}. {}", slide.number, slide.title))))
        .collect();

    let slide_list = List::new(slide_items)
        .block(Block::default().borders(Borders::ALL).title("Slides"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(slide_list, chunks[0], &mut app.slide_list_state);

    let content_text: Vec<Line> = match app.selected_text() {
        Some(text) => text.lines().map(|line| Line::from(line.to_string())).collect(),
        None => vec![Line::from("This deck has no slides")],
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Slide"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);
    f.render_widget(Paragraph::new(help_text), rows[1]);
}
