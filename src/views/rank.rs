//! Ranked table of items, fetched a page at a time.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::View;
use crate::api::{RankingQuery, RankingType};
use crate::app::{AppMessage, Command, Ticket};
use crate::error::SelectionError;
use crate::models::{RankEntry, RankedList};
use crate::ui::components::render_spinner_line;
use crate::ui::layout::Dimensions;
use crate::ui::theme::Theme;

/// Header label and width of each table column.
pub const RANK_COLUMNS: [(&str, u16); 3] = [("Rank", 4), ("Title", 40), ("Japanese Title", 40)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Ready,
    /// The last fetch failed; re-entering the view retries it.
    Failed,
}

#[derive(Debug)]
pub struct RankView {
    entries: Vec<RankEntry>,
    index: HashMap<u32, RankEntry>,
    rows: Vec<[String; 3]>,
    table_state: TableState,
    status: FetchStatus,
    focused: bool,
    spinner_frame: usize,
    ranking_type: RankingType,
    page_size: i64,
    page: u32,
    /// Type and page of the list currently held in `entries`.
    shown: Option<(RankingType, u32)>,
    ticket: Ticket,
    size: Dimensions,
}

impl RankView {
    pub fn new(ranking_type: RankingType, page_size: i64) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            rows: Vec::new(),
            table_state: TableState::default(),
            status: FetchStatus::Loading,
            focused: false,
            spinner_frame: 0,
            ranking_type,
            page_size,
            page: 0,
            shown: None,
            ticket: Ticket::default(),
            size: Dimensions::default(),
        }
    }

    /// First fetch: configured ranking type and page size, no offset.
    pub fn init(&mut self) -> Vec<Command> {
        self.page = 0;
        self.request()
    }

    /// Called whenever the view becomes active again.
    pub fn on_enter(&mut self) -> Vec<Command> {
        if self.status == FetchStatus::Failed {
            tracing::info!("retrying ranking fetch");
            self.request()
        } else {
            Vec::new()
        }
    }

    pub fn query(&self) -> RankingQuery {
        RankingQuery::new(self.ranking_type)
            .with_limit(self.page_size)
            .with_offset(i64::from(self.page).saturating_mul(self.page_size))
    }

    fn request(&mut self) -> Vec<Command> {
        self.ticket = self.ticket.next();
        self.status = FetchStatus::Loading;
        vec![Command::FetchRanking {
            query: self.query(),
            ticket: self.ticket,
        }]
    }

    /// Replace the list wholesale. Returns false for a superseded result.
    pub fn on_data(&mut self, ticket: Ticket, list: RankedList) -> bool {
        if ticket != self.ticket {
            tracing::debug!(?ticket, current = ?self.ticket, "dropping stale ranking");
            return false;
        }

        self.entries = list.entries();
        self.index = self
            .entries
            .iter()
            .map(|entry| (entry.rank, entry.clone()))
            .collect();
        self.rows = self
            .entries
            .iter()
            .map(|entry| {
                [
                    entry.rank.to_string(),
                    entry.display_title.clone(),
                    entry.japanese_title.clone(),
                ]
            })
            .collect();
        self.table_state
            .select(if self.rows.is_empty() { None } else { Some(0) });
        self.shown = Some((self.ranking_type, self.page));
        self.status = FetchStatus::Ready;
        true
    }

    /// Returns false for a superseded result.
    ///
    /// When a list is already on screen the failed page or type change is
    /// rolled back and that list stays usable. Only a failed first load
    /// leaves the view in `Failed`.
    pub fn on_failed(&mut self, ticket: Ticket) -> bool {
        if ticket != self.ticket {
            return false;
        }
        match self.shown {
            Some((ranking_type, page)) => {
                tracing::info!(%ranking_type, page, "keeping previously loaded ranking");
                self.ranking_type = ranking_type;
                self.page = page;
                self.status = FetchStatus::Ready;
            }
            None => self.status = FetchStatus::Failed,
        }
        true
    }

    /// Map a rank cell to the detail navigation, or to an error.
    pub fn select_rank(&self, raw: &str) -> Command {
        let message = match self.resolve(raw) {
            Ok(id) => AppMessage::NavigateToDetail { id },
            Err(e) => AppMessage::Failed(e.into()),
        };
        Command::emit(message)
    }

    fn resolve(&self, raw: &str) -> Result<u64, SelectionError> {
        let rank: u32 = raw
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| SelectionError::UnparsableRank {
                value: raw.to_string(),
                message: e.to_string(),
            })?;
        self.index
            .get(&rank)
            .map(|entry| entry.item_id)
            .ok_or(SelectionError::UnknownRank { rank })
    }

    fn select_current(&self) -> Command {
        match self.table_state.selected().and_then(|i| self.rows.get(i)) {
            Some(row) => self.select_rank(&row[0]),
            None => Command::emit(AppMessage::Failed(SelectionError::NothingSelected.into())),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let current = self.table_state.selected().unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(last);
        self.table_state.select(Some(target));
    }

    fn visible_rows(&self) -> isize {
        // header and caption
        self.size.height.saturating_sub(2).max(1) as isize
    }

    fn cycle_ranking_type(&mut self) -> Vec<Command> {
        self.ranking_type = self.ranking_type.next();
        self.page = 0;
        self.request()
    }

    fn next_page(&mut self) -> Vec<Command> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        self.page += 1;
        self.request()
    }

    fn prev_page(&mut self) -> Vec<Command> {
        if self.page == 0 {
            return Vec::new();
        }
        self.page -= 1;
        self.request()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// True while a fetch is in flight or before any page has been shown.
    pub fn is_loading(&self) -> bool {
        self.status != FetchStatus::Ready
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn rows(&self) -> &[[String; 3]] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn ranking_type(&self) -> RankingType {
        self.ranking_type
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn size(&self) -> Dimensions {
        self.size
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let header = Row::new(RANK_COLUMNS.iter().map(|(title, _)| Cell::from(*title)))
            .style(Style::default().fg(theme.normal).add_modifier(Modifier::BOLD));
        let rows = self
            .rows
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));
        let widths = RANK_COLUMNS.map(|(_, width)| Constraint::Length(width));

        let highlight = if self.focused {
            theme.selected_row()
        } else {
            Style::default().fg(theme.normal).bg(theme.subtle)
        };

        let table = Table::new(rows, widths)
            .header(header)
            .style(theme.text())
            .row_highlight_style(highlight);
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn caption(&self) -> String {
        format!(
            "{} · page {} · {} items   t: type  [ ]: page  enter: details",
            self.ranking_type,
            self.page + 1,
            self.entries.len()
        )
    }
}

impl View for RankView {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn on_resize(&mut self, size: Dimensions) -> Vec<Command> {
        self.size = size;
        Vec::new()
    }

    fn on_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if !self.focused || self.status != FetchStatus::Ready {
            return Vec::new();
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-self.visible_rows()),
            KeyCode::PageDown => self.move_selection(self.visible_rows()),
            KeyCode::Home | KeyCode::Char('g') => self.move_selection(isize::MIN),
            KeyCode::End | KeyCode::Char('G') => self.move_selection(isize::MAX),
            KeyCode::Enter | KeyCode::Char(' ') => return vec![self.select_current()],
            KeyCode::Char('t') => return self.cycle_ranking_type(),
            KeyCode::Char(']') => return self.next_page(),
            KeyCode::Char('[') => return self.prev_page(),
            _ => {}
        }
        Vec::new()
    }

    fn on_tick(&mut self) -> bool {
        if self.status == FetchStatus::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            true
        } else {
            false
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        match self.status {
            FetchStatus::Loading => {
                let message = format!("Loading {} ranking...", self.ranking_type);
                frame.render_widget(
                    Paragraph::new(render_spinner_line(&message, self.spinner_frame, theme)),
                    area,
                );
            }
            FetchStatus::Failed => {
                let message = format!(
                    "Loading {} ranking failed. Leave and re-enter this tab to retry.",
                    self.ranking_type
                );
                frame.render_widget(
                    Paragraph::new(render_spinner_line(&message, self.spinner_frame, theme))
                        .style(Style::default().fg(theme.error)),
                    area,
                );
            }
            FetchStatus::Ready => {
                let table_area = Rect {
                    height: area.height.saturating_sub(1),
                    ..area
                };
                self.render_table(frame, table_area, theme);
                if area.height >= 2 {
                    let caption_area = Rect {
                        y: area.y + area.height - 1,
                        height: 1,
                        ..area
                    };
                    frame.render_widget(
                        Paragraph::new(Line::styled(self.caption(), Style::default().fg(theme.dim))),
                        caption_area,
                    );
                }
            }
        }
    }
}
