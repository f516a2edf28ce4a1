use chrono::Local;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::error::Result;
use crate::fmt::{quickbooks_text, summary_text};
use crate::ledger::Ledger;
use crate::models::{FormData, FormField};
use crate::tui::{self, Screen, ScreenAction, FOOTER_STYLE, HEADER_STYLE, SELECTED_STYLE};

const MAX_SUGGESTIONS: usize = 8;
const LABEL_WIDTH: usize = 22;

/// Entry form with type-ahead suggestions drawn from the option store.
pub struct EntryForm<'c> {
    ledger: Ledger<'c>,
    form: FormData,
    active: usize,
    selection: Option<usize>,
    status_message: Option<String>,
    saved: usize,
}

impl<'c> EntryForm<'c> {
    pub fn new(ledger: Ledger<'c>) -> Self {
        Self {
            ledger,
            form: FormData::default(),
            active: 0,
            selection: None,
            status_message: None,
            saved: 0,
        }
    }

    /// Run the form; returns how many records were saved.
    pub fn run(&mut self) -> Result<usize> {
        tui::run_screen(self)?;
        Ok(self.saved)
    }

    fn active_field(&self) -> FormField {
        FormField::ALL[self.active]
    }

    /// Known values for the active field containing what's typed so far.
    fn suggestions(&self) -> Vec<&str> {
        let field = self.active_field();
        let Some(category) = field.category() else {
            return vec![];
        };
        let typed = self.form.field(field);
        let needle = typed.to_lowercase();
        self.ledger
            .options()
            .get(category)
            .iter()
            .filter(|opt| opt.as_str() != typed && opt.to_lowercase().contains(&needle))
            .map(String::as_str)
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// Leaving a field adds a newly typed value to its suggestions.
    fn blur(&mut self) {
        let field = self.active_field();
        if let Some(category) = field.category() {
            let value = self.form.field(field).to_string();
            if let Err(e) = self.ledger.add_option(category, &value) {
                self.status_message = Some(format!("Could not save option: {e}"));
            }
        }
        self.selection = None;
    }

    fn focus(&mut self, index: usize) {
        self.blur();
        self.active = index % FormField::ALL.len();
    }

    fn next_field(&mut self) {
        self.focus(self.active + 1);
    }

    fn prev_field(&mut self) {
        self.focus(self.active + FormField::ALL.len() - 1);
    }

    fn submit(&mut self) {
        self.blur();
        match self.ledger.submit(&self.form) {
            Ok(record) => {
                self.saved += 1;
                self.status_message = Some(format!("Saved record #{}", record.id));
                self.form.reset();
                self.active = 0;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.active = 0;
        self.selection = None;
        self.status_message = Some("Form cleared".to_string());
    }

    fn accept_suggestion(&mut self) -> bool {
        let Some(idx) = self.selection else {
            return false;
        };
        let Some(value) = self.suggestions().get(idx).map(|s| s.to_string()) else {
            return false;
        };
        *self.form.field_mut(self.active_field()) = value;
        self.selection = None;
        true
    }

    pub fn handle_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) -> ScreenAction {
        self.status_message = None;

        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('t') if self.active_field() == FormField::Date => {
                    self.form.date = Local::now().format("%Y-%m-%d").to_string();
                }
                _ => {}
            }
            return ScreenAction::Continue;
        }

        match code {
            KeyCode::Esc => {
                if self.selection.is_some() {
                    self.selection = None;
                } else {
                    self.blur();
                    return ScreenAction::Close;
                }
            }
            KeyCode::Tab => self.next_field(),
            KeyCode::BackTab => self.prev_field(),
            KeyCode::Down => {
                let count = self.suggestions().len();
                self.selection = match self.selection {
                    _ if count == 0 => None,
                    None => Some(0),
                    Some(i) => Some((i + 1).min(count - 1)),
                };
            }
            KeyCode::Up => {
                self.selection = match self.selection {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
            }
            KeyCode::Enter => {
                if !self.accept_suggestion() {
                    self.next_field();
                }
            }
            KeyCode::Backspace => {
                self.form.field_mut(self.active_field()).pop();
                self.selection = None;
            }
            KeyCode::Char(c) => {
                self.form.field_mut(self.active_field()).push(c);
                self.selection = None;
            }
            _ => {}
        }
        ScreenAction::Continue
    }

    pub fn draw_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let suggestions = self.suggestions();
        let suggestion_height = suggestions.len() as u16;
        let [title_area, fields_area, suggest_area, preview_area, status_area, keys_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(FormField::ALL.len() as u16),
                Constraint::Length(suggestion_height),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        frame.render_widget(Paragraph::new("New Billing Record").style(HEADER_STYLE), title_area);

        let field_lines: Vec<Line> = FormField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let label = format!("{:>width$}: ", field.label(), width = LABEL_WIDTH);
                let value = self.form.field(*field);
                if i == self.active {
                    Line::from(vec![
                        Span::styled(label, HEADER_STYLE),
                        Span::raw(format!("{value}\u{2588}")),
                    ])
                } else {
                    Line::from(vec![Span::styled(label, FOOTER_STYLE), Span::raw(value.to_string())])
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(field_lines), fields_area);

        let indent = " ".repeat(LABEL_WIDTH + 2);
        let suggestion_lines: Vec<Line> = suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if Some(i) == self.selection {
                    Line::from(Span::styled(format!("{indent}> {s}"), SELECTED_STYLE))
                } else {
                    Line::from(Span::styled(
                        format!("{indent}  {s}"),
                        Style::default().fg(Color::Gray),
                    ))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(suggestion_lines), suggest_area);

        let preview_width = preview_area.width as usize;
        let (summary, _) = tui::wrap_text(&summary_text(&self.form), preview_width.saturating_sub(2));
        let mut preview = vec![Line::from(""), Line::from(Span::styled("Record", HEADER_STYLE))];
        preview.extend(summary.lines().map(|l| Line::from(format!("  {l}"))));
        preview.push(Line::from(Span::styled("QuickBooks", HEADER_STYLE)));
        preview.push(Line::from(format!("  {}", quickbooks_text(&self.form))));
        frame.render_widget(Paragraph::new(preview), preview_area);

        let status = match &self.status_message {
            Some(msg) => msg.clone(),
            None if !self.form.can_submit() => "Enter a date to enable submit".to_string(),
            None => format!("Ready to submit | {} saved this session", self.saved),
        };
        frame.render_widget(Paragraph::new(status).style(FOOTER_STYLE), status_area);

        let keys = if self.active_field() == FormField::Date {
            "Tab/S-Tab:field  ^T:today  ^S:submit  ^R:reset  Esc:quit"
        } else {
            "Tab/S-Tab:field  \u{2191}/\u{2193}:suggest  Enter:accept  ^S:submit  ^R:reset  Esc:quit"
        };
        frame.render_widget(Paragraph::new(keys).style(FOOTER_STYLE), keys_area);
    }
}

impl Screen for EntryForm<'_> {
    fn draw(&mut self, frame: &mut Frame) {
        self.draw_frame(frame);
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> ScreenAction {
        self.handle_key_event(code, modifiers)
    }
}
