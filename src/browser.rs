use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::clipboard;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::search::SearchQuery;
use crate::tui::{
    self, Screen, ScreenAction, FOOTER_STYLE, HEADER_STYLE, INVOICED_STYLE, PAID_STYLE,
    SELECTED_STYLE,
};

const PAGE_SIZE: usize = 20;

enum BrowseMode {
    Normal,
    SearchDate(String),
    SearchKeyword(String),
    ConfirmDelete(i64),
}

pub enum BrowseAction {
    Continue,
    Close,
    Copy(String),
}

/// Interactive, filterable view over the record store.
pub struct RecordBrowser<'c> {
    ledger: Ledger<'c>,
    query: SearchQuery,
    visible_ids: Vec<i64>,
    offset: usize,
    visible_count: usize,
    selected: usize,
    mode: BrowseMode,
    status_message: Option<String>,
    table_state: TableState,
}

impl<'c> RecordBrowser<'c> {
    pub fn new(ledger: Ledger<'c>, query: SearchQuery) -> Self {
        let mut browser = Self {
            ledger,
            query,
            visible_ids: Vec::new(),
            offset: 0,
            visible_count: PAGE_SIZE,
            selected: 0,
            mode: BrowseMode::Normal,
            status_message: None,
            table_state: TableState::default(),
        };
        browser.refresh();
        browser
    }

    pub fn run(&mut self) -> Result<()> {
        if self.ledger.records().is_empty() {
            println!("No records yet. Add one with `mqbill add` or `mqbill entry`.");
            return Ok(());
        }
        tui::run_screen(self)
    }

    /// Recompute the filtered view, keeping the selection in range.
    fn refresh(&mut self) {
        self.visible_ids = self.ledger.search(&self.query).iter().map(|r| r.id).collect();
        let len = self.visible_ids.len();
        if self.offset >= len {
            self.offset = len.saturating_sub(PAGE_SIZE);
        }
        if self.offset + self.selected >= len {
            self.selected = len.saturating_sub(self.offset + 1);
        }
    }

    fn selected_id(&self) -> Option<i64> {
        self.visible_ids.get(self.offset + self.selected).copied()
    }

    pub fn draw_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, table_area, status_area, keys_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new("Billing Records").style(HEADER_STYLE), title_area);

        // paid + invoiced + date + spacing
        let fixed_cols: u16 = 1 + 1 + 10 + 3;
        let text_width = table_area.width.saturating_sub(fixed_cols).max(10) as usize;

        let header_overhead = 2u16;
        let available_height = table_area.height.saturating_sub(header_overhead) as usize;
        let mut rendered_rows = Vec::new();
        let mut total_height = 0usize;
        let mut vis = 0usize;

        for id in self.visible_ids.iter().skip(self.offset) {
            let Some(record) = self.ledger.get(*id) else {
                continue;
            };
            let (wrapped, line_count) = tui::wrap_text(&record.text, text_width);
            let h = line_count as usize;
            if total_height + h > available_height && vis > 0 {
                break;
            }
            rendered_rows.push(
                Row::new(vec![
                    Cell::from(tui::flag_span(record.paid, "$", PAID_STYLE)),
                    Cell::from(tui::flag_span(record.invoiced, "@", INVOICED_STYLE)),
                    Cell::from(record.date.clone()),
                    Cell::from(wrapped),
                ])
                .height(line_count),
            );
            total_height += h;
            vis += 1;
        }
        self.visible_count = vis.max(1);

        let widths = [
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(10),
            Constraint::Fill(1),
        ];
        self.table_state.select(Some(self.selected));
        let table = Table::new(rendered_rows, widths)
            .header(Row::new(vec!["$", "@", "Date", "Record"]).style(HEADER_STYLE).bottom_margin(1))
            .column_spacing(1)
            .row_highlight_style(SELECTED_STYLE);
        frame.render_stateful_widget(table, table_area, &mut self.table_state);

        frame.render_widget(
            Paragraph::new(self.status_line()).style(FOOTER_STYLE),
            status_area,
        );

        let keys = match &self.mode {
            BrowseMode::Normal => Paragraph::new(
                "\u{2191}/\u{2193}:select  space:paid  i:invoiced  c:copy  b:copy QB  D:delete  d:date  /:keyword  x:clear  q:quit",
            )
            .style(FOOTER_STYLE),
            BrowseMode::SearchDate(input) => {
                Paragraph::new(format!("Search by date (YYYY-MM-DD, empty for any): {input}\u{2588}"))
            }
            BrowseMode::SearchKeyword(input) => {
                Paragraph::new(format!("Search by keyword: {input}\u{2588}"))
            }
            BrowseMode::ConfirmDelete(id) => Paragraph::new(Line::from(vec![
                Span::styled(format!("Delete record #{id}? "), HEADER_STYLE),
                Span::raw("y/n"),
            ])),
        };
        frame.render_widget(keys, keys_area);
    }

    fn status_line(&self) -> String {
        let total = self.visible_ids.len();
        let range = if total == 0 {
            "No matching records".to_string()
        } else {
            let end = (self.offset + self.visible_count).min(total);
            format!("Rows {}-{} of {}", self.offset + 1, end, total)
        };
        let mut status = range;
        let filters = self.query.describe();
        if !filters.is_empty() {
            status.push_str(&format!(" | {filters}"));
        }
        if let Some(ref msg) = self.status_message {
            status.push_str(&format!(" | {msg}"));
        }
        status
    }

    pub fn handle_key_event(&mut self, code: KeyCode) -> BrowseAction {
        self.status_message = None;

        match &self.mode {
            BrowseMode::Normal => match code {
                KeyCode::Char('q') | KeyCode::Esc => return BrowseAction::Close,
                KeyCode::Down => {
                    let len = self.visible_ids.len();
                    if self.selected + 1 < self.visible_count.min(len.saturating_sub(self.offset)) {
                        self.selected += 1;
                    } else if self.offset + self.visible_count < len {
                        self.offset += 1;
                    }
                }
                KeyCode::Up => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    } else if self.offset > 0 {
                        self.offset -= 1;
                    }
                }
                KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
                    self.scroll_down();
                    self.selected = 0;
                }
                KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
                    self.scroll_up();
                    self.selected = 0;
                }
                KeyCode::Home => {
                    self.offset = 0;
                    self.selected = 0;
                }
                KeyCode::End => {
                    self.offset = self.visible_ids.len().saturating_sub(PAGE_SIZE);
                    self.selected = 0;
                }
                KeyCode::Char(' ') => self.toggle_paid(),
                KeyCode::Char('i') => self.toggle_invoiced(),
                KeyCode::Char('c') => {
                    if let Some(record) = self.selected_id().and_then(|id| self.ledger.get(id)) {
                        return BrowseAction::Copy(record.text.clone());
                    }
                }
                KeyCode::Char('b') => {
                    if let Some(record) = self.selected_id().and_then(|id| self.ledger.get(id)) {
                        return BrowseAction::Copy(record.quickbooks_text.clone());
                    }
                }
                KeyCode::Char('D') | KeyCode::Delete => {
                    if let Some(id) = self.selected_id() {
                        self.mode = BrowseMode::ConfirmDelete(id);
                    }
                }
                KeyCode::Char('d') => {
                    self.mode = BrowseMode::SearchDate(self.query.date.clone());
                }
                KeyCode::Char('/') => {
                    self.mode = BrowseMode::SearchKeyword(self.query.keyword.clone());
                }
                KeyCode::Char('x') => {
                    self.query.clear();
                    self.offset = 0;
                    self.selected = 0;
                    self.refresh();
                }
                _ => {}
            },
            BrowseMode::SearchDate(_) | BrowseMode::SearchKeyword(_) => match code {
                KeyCode::Esc => self.mode = BrowseMode::Normal,
                KeyCode::Enter => self.submit_search(),
                KeyCode::Backspace => {
                    if let BrowseMode::SearchDate(s) | BrowseMode::SearchKeyword(s) = &mut self.mode {
                        s.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let BrowseMode::SearchDate(s) | BrowseMode::SearchKeyword(s) = &mut self.mode {
                        s.push(c);
                    }
                }
                _ => {}
            },
            BrowseMode::ConfirmDelete(id) => {
                let id = *id;
                self.mode = BrowseMode::Normal;
                if matches!(code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                    self.delete(id);
                }
            }
        }
        BrowseAction::Continue
    }

    fn submit_search(&mut self) {
        let mode = std::mem::replace(&mut self.mode, BrowseMode::Normal);
        match mode {
            BrowseMode::SearchDate(input) => self.query.date = input.trim().to_string(),
            BrowseMode::SearchKeyword(input) => self.query.keyword = input,
            _ => return,
        }
        self.offset = 0;
        self.selected = 0;
        self.refresh();
    }

    fn scroll_down(&mut self) {
        let new_offset = self.offset + self.visible_count;
        if new_offset < self.visible_ids.len() {
            self.offset = new_offset;
        }
    }

    fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.visible_count);
    }

    fn toggle_paid(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.status_message = Some(match self.ledger.toggle_paid(id) {
            Ok(true) => format!("Record #{id} marked paid"),
            Ok(false) => format!("Record #{id} marked unpaid"),
            Err(e) => format!("Update failed: {e}"),
        });
    }

    fn toggle_invoiced(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.status_message = Some(match self.ledger.toggle_invoiced(id) {
            Ok(true) => format!("Record #{id} marked invoiced"),
            Ok(false) => format!("Record #{id} marked not invoiced"),
            Err(e) => format!("Update failed: {e}"),
        });
    }

    fn delete(&mut self, id: i64) {
        self.status_message = Some(match self.ledger.delete(id) {
            Ok(_) => format!("Deleted record #{id}"),
            Err(e) => format!("Delete failed: {e}"),
        });
        self.refresh();
    }
}

impl Screen for RecordBrowser<'_> {
    fn draw(&mut self, frame: &mut Frame) {
        self.draw_frame(frame);
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> ScreenAction {
        match self.handle_key_event(code) {
            BrowseAction::Close => ScreenAction::Close,
            BrowseAction::Continue => ScreenAction::Continue,
            BrowseAction::Copy(text) => {
                self.status_message = Some(match clipboard::copy_text(&text) {
                    Ok(()) => "Copied to clipboard".to_string(),
                    Err(e) => format!("Copy failed: {e}"),
                });
                ScreenAction::Continue
            }
        }
    }
}
