//! Pure view functions for the viewer.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects. The reducer reuses
//! `body_line_count` so scroll clamping and drawing agree on geometry.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use hookwatch_core::events::EventRecord;

use crate::common::truncate_with_ellipsis;
use crate::state::{AppState, ViewState};

/// Height of the header row.
const HEADER_HEIGHT: u16 = 1;

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Horizontal padding around the card list (each side).
const BODY_MARGIN: u16 = 1;

/// Title shown in the header.
const HEADER_TITLE: &str = "Webhook Events";

/// Placeholder shown while the list is empty.
pub const EMPTY_PLACEHOLDER: &str = "No events received yet.";

/// Renders the entire viewer to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_header(state, frame, chunks[0]);
    render_body(state, frame, chunks[1]);
    render_status_line(state, frame, chunks[2]);
}

/// Rows available to the card list for a given terminal height.
///
/// The runtime feeds this into the frame event so the reducer clamps scroll
/// against the same geometry the renderer uses.
pub fn body_height(terminal_height: u16) -> usize {
    terminal_height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT) as usize
}

/// Total line count of the rendered card list.
pub fn body_line_count(view: &ViewState) -> usize {
    view.events().iter().map(card_line_count).sum()
}

// ============================================================================
// Header / status line
// ============================================================================

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let room = (area.width as usize).saturating_sub(HEADER_TITLE.width() + 3);
    let endpoint = truncate_with_ellipsis(&state.endpoint, room);

    let line = Line::from(vec![
        Span::styled(
            HEADER_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(endpoint, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let count = state.view.len();
    let count_label = if count == 1 {
        "1 event".to_string()
    } else {
        format!("{count} events")
    };

    let updated = match state.view.last_updated() {
        Some(at) => format!("updated {}", at.format("%H:%M:%S")),
        None => "waiting for first poll".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(count_label, Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(updated, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("q", Style::default().fg(Color::DarkGray)),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

// ============================================================================
// Card list
// ============================================================================

fn render_body(state: &AppState, frame: &mut Frame, area: Rect) {
    let body_area = Rect {
        x: area.x + BODY_MARGIN,
        y: area.y,
        width: area.width.saturating_sub(BODY_MARGIN * 2),
        height: area.height,
    };

    if state.view.is_empty() {
        let placeholder = Line::from(Span::styled(
            EMPTY_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(placeholder), body_area);
        return;
    }

    let lines = card_lines(&state.view, body_area.width as usize);
    let viewport = body_area.height as usize;
    let mut offset = state.scroll.offset();
    // state and frame sizes can briefly disagree during a resize
    offset = offset.min(lines.len().saturating_sub(viewport));

    let visible: Vec<Line<'static>> = lines.into_iter().skip(offset).take(viewport).collect();
    frame.render_widget(Paragraph::new(visible), body_area);
}

/// Pre-renders every card to styled lines; the scroll offset selects a
/// window out of this buffer. Labels are truncated to the card width;
/// payload lines are clipped at the right edge.
pub fn card_lines(view: &ViewState, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for record in view.events() {
        push_card(&mut lines, record, width);
    }
    lines
}

fn push_card(lines: &mut Vec<Line<'static>>, record: &EventRecord, width: usize) {
    let border = Style::default().fg(Color::DarkGray);

    // "┌ " plus the "Event: " label
    let label_room = width.saturating_sub(9);
    lines.push(Line::from(vec![
        Span::styled("┌ ", border),
        Span::styled(
            "Event: ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate_with_ellipsis(&record.event, label_room),
            Style::default().fg(Color::Cyan),
        ),
    ]));

    for payload_line in record.payload_pretty().lines() {
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(payload_line.to_string(), Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(Span::styled("└", border)));
    lines.push(Line::from(""));
}

/// Lines one card occupies: title, payload, closing border, separator.
fn card_line_count(record: &EventRecord) -> usize {
    record.payload_pretty().lines().count() + 3
}
