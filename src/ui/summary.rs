//! Report header and summary metric cards

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{Metadata, Report};
use crate::theme::{
    BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::utils::{format_hours, friendly_sprint_name, org_url, project_url};

/// Render the report header: title line plus sprint identification with
/// Azure DevOps links and the active calibration.
pub fn render_header(area: Rect, metadata: &Metadata, calibration_hours: f64, frame: &mut Frame) {
    let title_line = Line::from(vec![
        Span::styled(
            " Sprint Estimation Report ",
            Style::default()
                .fg(TEAL_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· calibration {}h @ complexity 5", format_hours(calibration_hours)),
            Style::default().fg(TEXT_MUTED),
        ),
    ]);

    let meta_line = Line::from(vec![
        Span::styled(" Org ", Style::default().fg(TEXT_MUTED)),
        Span::styled(
            metadata.organization.clone(),
            Style::default().fg(TEXT_PRIMARY),
        ),
        Span::styled(
            format!(" ({})", org_url(&metadata.organization)),
            Style::default().fg(TEXT_MUTED),
        ),
        Span::styled("  Project ", Style::default().fg(TEXT_MUTED)),
        Span::styled(metadata.project.clone(), Style::default().fg(TEXT_PRIMARY)),
        Span::styled(
            format!(
                " ({})",
                project_url(&metadata.organization, &metadata.project)
            ),
            Style::default().fg(TEXT_MUTED),
        ),
        Span::styled("  Sprint ", Style::default().fg(TEXT_MUTED)),
        Span::styled(
            friendly_sprint_name(&metadata.sprint),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);

    let paragraph = Paragraph::new(vec![title_line, meta_line]);
    frame.render_widget(paragraph, area);
}

/// Render the three summary metric cards: story count, total estimated
/// hours, weighted average complexity.
pub fn render_summary_cards(area: Rect, report: &Report, frame: &mut Frame) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let cards = [
        (report.stories.len().to_string(), "TOTAL STORIES"),
        (format_hours(report.total_estimated_hours()), "ESTIMATED HOURS"),
        (
            format!("{:.2}", report.weighted_avg_complexity()),
            "AVG COMPLEXITY",
        ),
    ];

    for ((value, label), &slot) in cards.into_iter().zip(card_layout.iter()) {
        render_stat_card(slot, &value, label, frame);
    }
}

fn render_stat_card(area: Rect, value: &str, label: &str, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let content = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(TEAL_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label.to_string(), Style::default().fg(TEXT_MUTED))),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
