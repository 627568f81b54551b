//! Full-screen layout: header, phrase text, status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

use super::phrases::phrase_text;
use super::theme::Theme;

/// Render the whole screen and record the text area on the app for hit testing
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Theme::text()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Text
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_phrases(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Tap", Theme::title()),
        Span::styled(
            "Text",
            Theme::title().remove_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .style(Theme::text());
    frame.render_widget(header, area);
}

fn render_phrases(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .style(Theme::text());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.set_text_area(inner);

    let text = phrase_text(&app.view, app.wrapped(), app.focus);
    let paragraph = Paragraph::new(text).scroll((app.scroll_offset(), 0));
    frame.render_widget(paragraph, inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let sound = if app.view.has_sound() {
        Span::styled(" ♪ SOUND ", Theme::sound_on())
    } else {
        Span::styled(" ♪ MUTED ", Theme::sound_off())
    };

    let last = match app.view.last_tapped().and_then(|id| app.view.phrase(id)) {
        Some(phrase) => Span::styled(format!(" {} ", phrase.trim()), Theme::text().fg(Theme::TAPPED)),
        None => Span::styled(" Click a phrase ", Theme::dimmed()),
    };

    let mut spans = vec![sound, last, Span::raw("│")];
    for (keys, action) in [("click/↵", "tap"), ("⇥", "next"), ("↑↓", "scroll"), ("q", "quit")] {
        spans.push(Span::styled(format!(" {}", keys), Theme::keybind()));
        spans.push(Span::styled(format!(":{}", action), Theme::dimmed()));
    }

    let status_line = Line::from(spans);
    let status = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(status, area);
}
