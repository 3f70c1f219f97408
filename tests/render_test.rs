//! Full-screen rendering through `ui::render` on a TestBackend.

mod common;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use anitui::app::{App, AppEvent, AppMessage, Command};
use anitui::error::{ApiError, AppError, FetchTarget};
use anitui::models::DetailDocument;
use anitui::ui;
use anitui::views::PLACEHOLDER_TEXT;

use common::{ranking_json, TestAppBuilder};

fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn server_error(target: FetchTarget) -> AppError {
    ApiError::Status {
        target,
        status: 500,
        message: "internal error".to_string(),
    }
    .into()
}

fn press(app: &mut App, code: crossterm::event::KeyCode) -> Vec<Command> {
    app.handle_event(AppEvent::Key(crossterm::event::KeyEvent::new(
        code,
        crossterm::event::KeyModifiers::NONE,
    )))
}

fn load_ranking(app: &mut App, body: &str) {
    app.init();
    let ticket = app.rank.ticket();
    app.handle_message(AppMessage::RankingLoaded {
        ticket,
        list: serde_json::from_str(body).unwrap(),
    });
}

#[test]
fn test_loading_screen_shows_spinner_line() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.init();
    let screen = rows(&draw(&mut app, 100, 30)).join("\n");
    assert!(screen.contains("Loading airing ranking..."));
}

#[test]
fn test_rank_table_rows_in_order() {
    let (mut app, _) = TestAppBuilder::new().build();
    load_ranking(
        &mut app,
        &ranking_json(&[(1, 10, "First", ""), (2, 20, "Second", "Second EN")]),
    );
    let screen = rows(&draw(&mut app, 100, 30));

    let header = screen.iter().position(|l| l.contains("Japanese Title"));
    let first = screen.iter().position(|l| l.contains("First"));
    let second = screen.iter().position(|l| l.contains("Second EN"));
    assert!(header.is_some());
    assert!(header < first);
    assert!(first < second);
}

#[test]
fn test_detail_placeholder_before_selection() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.handle_event(AppEvent::Key(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Right,
        crossterm::event::KeyModifiers::NONE,
    )));
    let screen = rows(&draw(&mut app, 100, 30)).join("\n");
    assert!(screen.contains(PLACEHOLDER_TEXT));
}

#[test]
fn test_detail_document_and_scroll_footer() {
    let (mut app, _) = TestAppBuilder::new().build();
    let commands = app.handle_message(AppMessage::NavigateToDetail { id: 5 });
    let ticket = match commands.as_slice() {
        [anitui::app::Command::FetchDetail { ticket, .. }] => *ticket,
        other => panic!("expected one detail fetch, got {other:?}"),
    };
    app.handle_message(AppMessage::DetailLoaded {
        ticket,
        detail: Box::new(DetailDocument {
            id: 5,
            title: "Example".to_string(),
            start_date: "2001-01-01".to_string(),
            ..Default::default()
        }),
    });

    let screen = rows(&draw(&mut app, 100, 30));
    let joined = screen.join("\n");
    assert!(joined.contains("# Example"));
    assert!(joined.contains("> Released : 2001-01-01"));
    assert!(joined.contains("100%"));
    assert!(!joined.contains(PLACEHOLDER_TEXT));
}

#[test]
fn test_error_overlay_only() {
    let (mut app, _) = TestAppBuilder::new().build();
    load_ranking(&mut app, &ranking_json(&[(1, 10, "First", "")]));
    app.handle_message(AppMessage::Failed(
        anitui::error::SelectionError::UnknownRank { rank: 4 }.into(),
    ));

    let screen = rows(&draw(&mut app, 100, 30)).join("\n");
    assert!(screen.contains("Invalid selection"));
    assert!(screen.contains("item not found (rank 4)"));
    assert!(!screen.contains("First"));
}

#[test]
fn test_resize_then_render_uses_new_size() {
    let (mut app, _) = TestAppBuilder::new().with_size(60, 20).build();
    load_ranking(&mut app, &ranking_json(&[(1, 10, "First", "")]));
    app.handle_event(AppEvent::Resize(anitui::ui::layout::Dimensions::new(140, 40)));
    let buffer = draw(&mut app, 140, 40);
    assert_eq!(buffer[(10, 0)].symbol(), "╭");
    assert_eq!(buffer[(129, 0)].symbol(), "╮");
}

#[test]
fn test_rank_table_shown_after_failed_page_is_dismissed() {
    use crossterm::event::KeyCode;

    let (mut app, _) = TestAppBuilder::new().build();
    load_ranking(&mut app, &ranking_json(&[(1, 10, "First", "")]));
    press(&mut app, KeyCode::Enter);
    let commands = press(&mut app, KeyCode::Char(']'));
    let ticket = match commands.as_slice() {
        [Command::FetchRanking { ticket, .. }] => *ticket,
        other => panic!("expected one ranking fetch, got {other:?}"),
    };
    app.handle_message(AppMessage::RankingFailed {
        ticket,
        error: server_error(FetchTarget::Ranking),
    });
    press(&mut app, KeyCode::Esc);

    let screen = rows(&draw(&mut app, 100, 30)).join("\n");
    assert!(screen.contains("First"));
    assert!(screen.contains("page 1 · 1 items"));
    assert!(!screen.contains("failed"));
}

#[test]
fn test_previous_detail_shown_after_failed_navigation_is_dismissed() {
    let (mut app, _) = TestAppBuilder::new().build();
    let fetch_ticket = |commands: Vec<Command>| match commands.as_slice() {
        [Command::FetchDetail { ticket, .. }] => *ticket,
        other => panic!("expected one detail fetch, got {other:?}"),
    };

    let first = fetch_ticket(app.handle_message(AppMessage::NavigateToDetail { id: 1 }));
    app.handle_message(AppMessage::DetailLoaded {
        ticket: first,
        detail: Box::new(DetailDocument {
            id: 1,
            title: "Alpha".to_string(),
            ..Default::default()
        }),
    });
    let second = fetch_ticket(app.handle_message(AppMessage::NavigateToDetail { id: 2 }));
    app.handle_message(AppMessage::DetailFailed {
        ticket: second,
        error: server_error(FetchTarget::Detail { id: 2 }),
    });
    press(&mut app, crossterm::event::KeyCode::Esc);

    let screen = rows(&draw(&mut app, 100, 30)).join("\n");
    assert!(screen.contains("# Alpha"));
    assert!(!screen.contains(PLACEHOLDER_TEXT));
}
