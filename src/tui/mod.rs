//! Ratatui-based applicant form.
//!
//! The form lists the eleven applicant fields on the left and the loan-to-income
//! preview plus the last risk assessment on the right. Scoring only happens
//! when the user asks for it (`c`).

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::domain::{ApplicantInput, Rating, ScoreResult};
use crate::error::AppError;
use crate::report::fmt_percent;
use crate::scoring::ScoringEngine;

pub mod form;

use form::Field;

/// Start the form.
pub fn run(engine: ScoringEngine) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::internal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(engine);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::internal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::internal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    engine: ScoringEngine,
    input: ApplicantInput,
    selected_field: usize,
    /// Text buffer while a numeric field is being typed.
    editing: Option<String>,
    result: Option<ScoreResult>,
    status: String,
}

impl App {
    fn new(engine: ScoringEngine) -> Self {
        Self {
            engine,
            input: ApplicantInput::default(),
            selected_field: 0,
            editing: None,
            result: None,
            status: "Fill in the applicant details, then press c.".to_string(),
        }
    }

    fn field(&self) -> Field {
        Field::ALL.get(self.selected_field).copied().unwrap_or(Field::Age)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::internal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::internal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::internal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing.is_some() {
            self.handle_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_field + 1 < Field::ALL.len() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.step_field(false),
            KeyCode::Right => self.step_field(true),
            KeyCode::Enter => {
                let field = self.field();
                if field.is_numeric() {
                    self.editing = Some(field.value(&self.input));
                    self.status = format!("Editing {}. Enter to apply, Esc to cancel.", field.label());
                } else {
                    self.step_field(true);
                }
            }
            KeyCode::Char('c') => self.calculate(),
            _ => {}
        }

        false
    }

    fn handle_edit(&mut self, code: KeyCode) {
        let Some(buffer) = self.editing.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                self.editing = None;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                let text = std::mem::take(buffer);
                self.editing = None;
                let field = self.field();
                match field.set_from_text(&mut self.input, &text) {
                    Ok(()) => {
                        self.result = None;
                        self.status = format!("{}: {}", field.label(), field.value(&self.input));
                    }
                    Err(err) => self.status = err.to_string(),
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                buffer.push(c);
            }
            _ => {}
        }
    }

    fn step_field(&mut self, forward: bool) {
        let field = self.field();
        field.step(&mut self.input, forward);
        self.result = None;
        self.status = format!("{}: {}", field.label(), field.value(&self.input));
    }

    fn calculate(&mut self) {
        match crate::app::pipeline::score_applicant(&self.engine, &self.input) {
            Ok(result) => {
                self.result = Some(result);
                self.status = "Prediction completed.".to_string();
            }
            Err(err) => {
                self.result = None;
                self.status = err.to_string();
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let model_name = self
            .engine
            .artifact()
            .metadata()
            .name
            .clone()
            .unwrap_or_else(|| "-".to_string());

        let lines = vec![
            Line::from(vec![
                Span::styled("CrediSure", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(" · credit risk modeling for lending decisions"),
            ]),
            Line::from(Span::styled(
                format!(
                    "model: {model_name} | features: {}",
                    self.engine.artifact().features().len()
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.draw_form(frame, chunks[0]);
        self.draw_result(frame, chunks[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = Field::ALL
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let value = match &self.editing {
                    Some(buffer) if idx == self.selected_field => format!("{buffer}_"),
                    _ => field.value(&self.input),
                };
                ListItem::new(format!("{:<30} {value}", field.label()))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Applicant Details").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::raw("Loan to income ratio: "),
            Span::styled(
                format!("{:.2}", self.input.loan_to_income()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));

        match &self.result {
            Some(result) => {
                lines.push(Line::from(format!("Default probability: {}", fmt_percent(result.probability))));
                lines.push(Line::from(format!("Credit score:        {}", result.credit_score)));
                lines.push(Line::from(vec![
                    Span::raw("Rating:              "),
                    Span::styled(
                        result.rating.display_name(),
                        Style::default().fg(rating_color(result.rating)).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "Press c to calculate risk.",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Risk Assessment").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter edit  c calculate  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn rating_color(rating: Rating) -> Color {
    match rating {
        Rating::Poor => Color::Red,
        Rating::Average => Color::Yellow,
        Rating::Good => Color::Green,
        Rating::Excellent => Color::Cyan,
    }
}
