//! Top-level dashboard layout

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::{Mode, Overlay};
use crate::theme::{BG_PRIMARY, TEXT_MUTED, TEXT_SECONDARY};
use crate::ui::{charts, overlay, stories, summary};

/// Render the whole dashboard: header, summary cards, charts, story list,
/// key hints, and any active overlay.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let Some(report) = app.report.clone() else {
        render_missing_report(frame, app);
        return;
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(4),  // Summary cards
            Constraint::Length(10), // Charts
            Constraint::Min(5),     // Story list
            Constraint::Length(1),  // Key hints
        ])
        .split(area);

    summary::render_header(main_layout[0], &report.metadata, app.calibration_hours, frame);
    summary::render_summary_cards(main_layout[1], &report, frame);

    let chart_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_layout[2]);
    charts::render_hours_chart(chart_layout[0], &report, frame);
    charts::render_complexity_distribution(chart_layout[1], &report, frame);

    stories::render_story_list(main_layout[3], app, frame);

    render_key_hints(main_layout[4], app, frame);

    match app.overlay {
        Overlay::StoryDetail => overlay::render_story_detail(app, frame),
        Overlay::None => {}
    }
    if app.mode == Mode::Recalibrate {
        overlay::render_recalibrate_input(app, frame);
    }
}

fn render_key_hints(area: Rect, app: &App, frame: &mut Frame) {
    let hints = match (app.mode, app.overlay) {
        (Mode::Recalibrate, _) => " Enter: apply · Esc: cancel ",
        (_, Overlay::StoryDetail) => " Esc/Enter: close · ↑/↓: story ",
        _ => " q: Quit · ↑/↓: select · Enter: details · s: sort · c: recalibrate · r: reload ",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(TEXT_MUTED));
    frame.render_widget(bar, area);
}

fn render_missing_report(frame: &mut Frame, app: &App) {
    let message = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Could not load report: {}", app.report_path.display()),
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Waiting for the file to appear or change. q quits.",
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(message), frame.area());
}
