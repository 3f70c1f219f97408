//! Tests for the dirty flag mechanism.
//!
//! The dirty flag (`needs_redraw`) makes the runtime loop draw only after
//! state changes. These tests check which events set it.

mod common;

use anitui::app::{AppEvent, AppMessage};
use anitui::error::SelectionError;
use anitui::ui::layout::Dimensions;

use common::test_app;

#[test]
fn test_app_initializes_with_needs_redraw_true() {
    let app = test_app();
    assert!(app.needs_redraw, "App should start dirty to force the first draw");
}

#[test]
fn test_mark_dirty_sets_flag() {
    let mut app = test_app();
    app.needs_redraw = false;
    app.mark_dirty();
    assert!(app.needs_redraw);
}

#[test]
fn test_resize_marks_dirty() {
    let mut app = test_app();
    app.needs_redraw = false;
    app.handle_event(AppEvent::Resize(Dimensions::new(90, 25)));
    assert!(app.needs_redraw);
}

#[test]
fn test_messages_mark_dirty() {
    let mut app = test_app();
    app.needs_redraw = false;
    app.handle_message(AppMessage::Failed(SelectionError::NothingSelected.into()));
    assert!(app.needs_redraw);

    app.needs_redraw = false;
    app.dismiss_error();
    assert!(app.needs_redraw, "dismissing the overlay should mark dirty");
}

#[test]
fn test_tick_without_animation_stays_clean() {
    let mut app = test_app();
    let ticket = app.rank.ticket();
    app.init();
    let current = app.rank.ticket();
    assert_ne!(ticket, current);
    app.handle_message(AppMessage::RankingLoaded {
        ticket: current,
        list: Default::default(),
    });

    app.needs_redraw = false;
    app.handle_event(AppEvent::Tick);
    assert!(!app.needs_redraw, "a loaded table has nothing to animate");
}
