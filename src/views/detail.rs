//! Scrollable detail document for one item.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::detail_content::{render_detail, SectionKind};
use super::{View, Viewport};
use crate::app::{AppMessage, Command, Ticket};
use crate::models::DetailDocument;
use crate::ui::layout::{centered_rect, text_width, viewport_dimensions, Dimensions};
use crate::ui::theme::Theme;

pub const PLACEHOLDER_TEXT: &str = "You need to choose an anime first in the Rank page";

const MOUSE_SCROLL_LINES: usize = 3;

#[derive(Debug)]
pub struct DetailView {
    viewport: Viewport,
    document: Option<DetailDocument>,
    sections: Vec<SectionKind>,
    focused: bool,
    /// Ticket of the most recent navigation; only its result is accepted.
    ticket: Ticket,
    current_id: Option<u64>,
    /// Body rect from the last frame; wheel events outside it are ignored.
    body: Option<Rect>,
    theme: Theme,
}

impl DetailView {
    pub fn new(theme: Theme) -> Self {
        Self {
            viewport: Viewport::new(),
            document: None,
            sections: Vec::new(),
            focused: false,
            ticket: Ticket::default(),
            current_id: None,
            body: None,
            theme,
        }
    }

    /// Start showing `id`: scroll to the top and fetch it.
    ///
    /// The previous document stays on screen until the new one arrives.
    pub fn on_navigate(&mut self, id: u64) -> Vec<Command> {
        self.viewport.goto_top();
        self.ticket = self.ticket.next();
        self.current_id = Some(id);
        tracing::info!(id, ticket = self.ticket.0, "fetching detail");
        vec![Command::FetchDetail {
            id,
            ticket: self.ticket,
        }]
    }

    /// Returns false when `ticket` belongs to a superseded navigation.
    pub fn on_data(&mut self, ticket: Ticket, document: DetailDocument) -> bool {
        if ticket != self.ticket {
            tracing::debug!(
                ?ticket,
                current = ?self.ticket,
                id = document.id,
                "dropping stale detail"
            );
            return false;
        }
        self.document = Some(document);
        self.rebuild();
        true
    }

    /// Returns false for a superseded navigation. The document already on
    /// screen, if any, is kept.
    pub fn on_failed(&mut self, ticket: Ticket) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.current_id = self.document.as_ref().map(|document| document.id);
        true
    }

    fn rebuild(&mut self) {
        if let Some(document) = &self.document {
            let content = render_detail(
                document,
                text_width(self.viewport.width()),
                &self.theme,
            );
            self.sections = content.sections;
            self.viewport.set_content(content.lines);
        }
    }

    pub fn document(&self) -> Option<&DetailDocument> {
        self.document.as_ref()
    }

    pub fn sections(&self) -> &[SectionKind] {
        &self.sections
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current_id
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Rendered document as plain text.
    pub fn content_text(&self) -> String {
        self.viewport
            .lines()
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn footer(&self, width: u16) -> Line<'static> {
        let info = format!("{:3.0}%", self.viewport.scroll_percent() * 100.0);
        let rule = "─".repeat(usize::from(width).saturating_sub(info.width()));
        Line::from(vec![
            Span::styled(rule, self.theme.rule()),
            Span::styled(info, self.theme.text()),
        ])
    }
}

impl View for DetailView {
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
        let size = viewport_dimensions(size);
        let width_changed = self.viewport.width() != size.width;
        self.viewport.resize(size);
        if width_changed {
            self.rebuild();
        }
        Vec::new()
    }

    fn on_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if !self.focused {
            return Vec::new();
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('d') if ctrl => {
                self.viewport.half_page_down();
            }
            KeyCode::Char('u') if ctrl => {
                self.viewport.half_page_up();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.viewport.scroll_up(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.viewport.scroll_down(1);
            }
            KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Char('f') => {
                self.viewport.page_down();
            }
            KeyCode::PageUp | KeyCode::Char('b') => {
                self.viewport.page_up();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.viewport.goto_top();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.viewport.goto_bottom();
            }
            KeyCode::Backspace => return vec![Command::emit(AppMessage::NavigateToRank)],
            _ => {}
        }
        Vec::new()
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Vec<Command> {
        let inside = self
            .body
            .is_some_and(|body| body.contains(Position::new(mouse.column, mouse.row)));
        if !inside {
            return Vec::new();
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.viewport.scroll_down(MOUSE_SCROLL_LINES);
            }
            MouseEventKind::ScrollUp => {
                self.viewport.scroll_up(MOUSE_SCROLL_LINES);
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.body = None;
        if self.document.is_none() || !self.viewport.is_ready() {
            frame.render_widget(
                Paragraph::new(PLACEHOLDER_TEXT)
                    .style(theme.text())
                    .alignment(Alignment::Center),
                centered_rect(area, area.width, 1),
            );
            return;
        }
        if area.height == 0 {
            return;
        }

        let header = Rect { height: 1, ..area };
        frame.render_widget(
            Paragraph::new(Line::styled(
                "─".repeat(usize::from(area.width)),
                theme.rule(),
            )),
            header,
        );

        let body = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(2),
            ..area
        };
        frame.render_widget(Paragraph::new(self.viewport.visible_lines().to_vec()), body);
        self.body = Some(body);

        if area.height >= 2 {
            let footer = Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            };
            frame.render_widget(Paragraph::new(self.footer(area.width)), footer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn doc(id: u64, title: &str) -> DetailDocument {
        DetailDocument {
            id,
            title: title.to_string(),
            synopsis: (0..60)
                .map(|i| format!("Sentence number {i} of a long synopsis."))
                .collect::<Vec<_>>()
                .join(" "),
            ..Default::default()
        }
    }

    fn ready_view() -> DetailView {
        let mut view = DetailView::new(Theme::default());
        view.on_resize(Dimensions::new(60, 12));
        view
    }

    fn ticket_of(commands: &[Command]) -> Ticket {
        match commands {
            [Command::FetchDetail { ticket, .. }] => *ticket,
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn test_navigate_issues_one_fetch() {
        let mut view = ready_view();
        let commands = view.on_navigate(42);
        assert!(matches!(
            &commands[..],
            [Command::FetchDetail { id: 42, .. }]
        ));
        assert_eq!(view.current_id(), Some(42));
    }

    #[test]
    fn test_data_renders_title() {
        let mut view = ready_view();
        let ticket = ticket_of(&view.on_navigate(42));
        assert!(view.on_data(ticket, doc(42, "Example")));
        assert!(view.content_text().contains("Example"));
    }

    #[test]
    fn test_late_result_does_not_overwrite_newer_navigation() {
        let mut view = ready_view();
        let a = ticket_of(&view.on_navigate(1));
        let b = ticket_of(&view.on_navigate(2));

        assert!(view.on_data(b, doc(2, "Second")));
        assert!(!view.on_data(a, doc(1, "First")));

        assert_eq!(view.document().map(|d| d.id), Some(2));
        assert!(view.content_text().contains("Second"));
        assert!(!view.content_text().contains("First"));
    }

    #[test]
    fn test_stale_failure_is_not_current() {
        let mut view = ready_view();
        let a = ticket_of(&view.on_navigate(1));
        let b = ticket_of(&view.on_navigate(2));
        assert!(!view.on_failed(a));
        assert!(view.on_failed(b));
    }

    #[test]
    fn test_viewport_subtracts_header_and_footer() {
        let view = ready_view();
        assert_eq!(view.viewport().height(), 10);
        assert_eq!(view.viewport().width(), 60);
    }

    #[test]
    fn test_navigate_resets_scroll() {
        let mut view = ready_view();
        view.focus();
        let t = ticket_of(&view.on_navigate(1));
        view.on_data(t, doc(1, "One"));
        view.on_key(key(KeyCode::PageDown));
        assert!(view.viewport().offset() > 0);

        view.on_navigate(2);
        assert_eq!(view.viewport().offset(), 0);
    }

    #[test]
    fn test_resize_rewraps_and_keeps_offset() {
        let mut view = ready_view();
        view.focus();
        let t = ticket_of(&view.on_navigate(1));
        view.on_data(t, doc(1, "One"));
        let narrow_lines = view.viewport().total_lines();
        view.on_key(key(KeyCode::Char('j')));
        view.on_key(key(KeyCode::Char('j')));

        view.on_resize(Dimensions::new(120, 12));
        assert!(view.viewport().total_lines() < narrow_lines);
        assert_eq!(view.viewport().offset(), 2);
    }

    #[test]
    fn test_scroll_keys_ignored_when_blurred() {
        let mut view = ready_view();
        let t = ticket_of(&view.on_navigate(1));
        view.on_data(t, doc(1, "One"));
        view.on_key(key(KeyCode::PageDown));
        assert_eq!(view.viewport().offset(), 0);
    }

    #[test]
    fn test_half_page_and_bottom_keys() {
        let mut view = ready_view();
        view.focus();
        let t = ticket_of(&view.on_navigate(1));
        view.on_data(t, doc(1, "One"));

        view.on_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(view.viewport().offset(), 5);
        view.on_key(key(KeyCode::Char('G')));
        assert_eq!(view.viewport().offset(), view.viewport().max_offset());
        view.on_key(key(KeyCode::Home));
        assert_eq!(view.viewport().offset(), 0);
    }

    #[test]
    fn test_backspace_navigates_to_rank() {
        let mut view = ready_view();
        view.focus();
        let commands = view.on_key(key(KeyCode::Backspace));
        assert!(matches!(
            &commands[..],
            [Command::Emit(AppMessage::NavigateToRank)]
        ));
    }

    fn wheel(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Draw the view into a 60x12 area placed at row 3 of the screen.
    fn draw(view: &mut DetailView) {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 3, 60, 12);
                view.render(frame, area, &Theme::default());
            })
            .unwrap();
    }

    #[test]
    fn test_mouse_wheel_scrolls_inside_body() {
        let mut view = ready_view();
        let t = ticket_of(&view.on_navigate(1));
        view.on_data(t, doc(1, "One"));
        draw(&mut view);

        view.on_mouse(wheel(MouseEventKind::ScrollDown, 10, 4));
        assert_eq!(view.viewport().offset(), 3);
        view.on_mouse(wheel(MouseEventKind::ScrollUp, 59, 13));
        assert_eq!(view.viewport().offset(), 0);
    }

    #[test]
    fn test_mouse_wheel_outside_body_is_ignored() {
        let mut view = ready_view();
        let t = ticket_of(&view.on_navigate(1));
        view.on_data(t, doc(1, "One"));

        // nothing drawn yet
        view.on_mouse(wheel(MouseEventKind::ScrollDown, 10, 4));
        assert_eq!(view.viewport().offset(), 0);

        draw(&mut view);
        // header rule, footer rule and the tab bar above the view
        for row in [3, 14, 0] {
            view.on_mouse(wheel(MouseEventKind::ScrollDown, 10, row));
        }
        assert_eq!(view.viewport().offset(), 0);
    }

    #[test]
    fn test_failed_navigation_keeps_previous_document() {
        let mut view = ready_view();
        view.focus();
        let a = ticket_of(&view.on_navigate(1));
        assert!(view.on_data(a, doc(1, "Alpha")));
        let b = ticket_of(&view.on_navigate(2));
        assert_eq!(view.current_id(), Some(2));

        assert!(view.on_failed(b));
        assert_eq!(view.current_id(), Some(1));
        assert!(view.content_text().contains("Alpha"));
        view.on_key(key(KeyCode::Char('j')));
        assert_eq!(view.viewport().offset(), 1);
    }
}
