//! Popup overlays: story detail and recalibration input

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::models::{ComplexityBand, InvestCriterion, Story};
use crate::theme::{
    complexity_color, AMBER_ACCENT, BG_TERTIARY, RED_DANGER, ROUNDED_BORDERS, TEAL_DIM,
    TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::{centered_rect, wrap_text};
use crate::utils::{format_complexity, format_hours};

const MAX_INVEST_SCORE: u8 = 5;

/// Render the story detail popup: badges, INVEST breakdown with score
/// gauges, and improvement suggestions.
pub fn render_story_detail(app: &App, frame: &mut Frame) {
    let Some(story) = app.selected_story() else {
        return;
    };

    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" HU {}: {} ", story.id, story.title))
        .title_style(Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(TEAL_DIM))
        .style(Style::default().bg(BG_TERTIARY));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2) as usize;
    let mut lines = detail_lines(story, width);

    // Clip to the popup, dropping from the top is never needed since the
    // summary lines lead; overflow simply truncates the improvements tail.
    lines.truncate(inner.height as usize);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn detail_lines(story: &Story, width: usize) -> Vec<Line<'static>> {
    let band_color = complexity_color(ComplexityBand::from_complexity(story.complexity));
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!(" Estimated {}h ", format_hours(story.estimated_hours)),
            Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" Complexity {} ", format_complexity(story.complexity)),
            Style::default().fg(band_color).add_modifier(Modifier::BOLD),
        ),
        if story.is_problematic() {
            Span::styled(" needs attention ", Style::default().fg(RED_DANGER))
        } else {
            Span::raw("")
        },
    ]));

    if let Some(url) = &story.url {
        lines.push(Line::from(Span::styled(
            format!(" {}", url),
            Style::default().fg(TEXT_MUTED),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " INVEST Evaluation",
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    )));

    if story.invest.criteria.is_empty() {
        lines.push(Line::from(Span::styled(
            " (not evaluated)",
            Style::default().fg(TEXT_MUTED),
        )));
    }
    for criterion in &story.invest.criteria {
        lines.extend(criterion_lines(criterion, width));
    }

    if !story.improvements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Suggested Improvements",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )));
        for improvement in &story.improvements {
            for (i, wrapped) in wrap_text(improvement, width.saturating_sub(3)).iter().enumerate() {
                let bullet = if i == 0 { " • " } else { "   " };
                lines.push(Line::from(vec![
                    Span::styled(bullet.to_string(), Style::default().fg(AMBER_ACCENT)),
                    Span::styled(wrapped.clone(), Style::default().fg(TEXT_SECONDARY)),
                ]));
            }
        }
    }

    lines
}

/// One criterion: name plus score gauge on the first line, wrapped
/// justification below.
fn criterion_lines(criterion: &InvestCriterion, width: usize) -> Vec<Line<'static>> {
    let score_color = match criterion.score {
        0..=2 => RED_DANGER,
        3 => AMBER_ACCENT,
        _ => TEAL_PRIMARY,
    };
    let filled = criterion.score.min(MAX_INVEST_SCORE) as usize;
    let empty = MAX_INVEST_SCORE as usize - filled;

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {:12} ", criterion.name),
            Style::default().fg(TEXT_PRIMARY),
        ),
        Span::styled("█".repeat(filled * 2), Style::default().fg(score_color)),
        Span::styled("░".repeat(empty * 2), Style::default().fg(TEXT_MUTED)),
        Span::styled(
            format!(" {}/{}", criterion.score, MAX_INVEST_SCORE),
            Style::default().fg(score_color),
        ),
    ])];

    if !criterion.justification.is_empty() {
        for wrapped in wrap_text(&criterion.justification, width.saturating_sub(15)) {
            lines.push(Line::from(Span::styled(
                format!("              {}", wrapped),
                Style::default().fg(TEXT_MUTED),
            )));
        }
    }

    lines
}

/// Render the recalibration input popup.
pub fn render_recalibrate_input(app: &App, frame: &mut Frame) {
    let area = centered_rect(50, 30, frame.area());
    let area = Rect {
        height: area.height.min(7),
        ..area
    };
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Recalibrate ")
        .title_style(Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(TEAL_DIM))
        .style(Style::default().bg(BG_TERTIARY));

    let error_line = match &app.input_error {
        Some(error) => Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(RED_DANGER),
        )),
        None => Line::from(""),
    };

    let content = vec![
        Line::from(Span::styled(
            " Hours of real work for a complexity-5 story:",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(TEAL_PRIMARY)),
            Span::styled(app.input_buffer.clone(), Style::default().fg(TEXT_PRIMARY)),
            Span::styled("▋", Style::default().fg(TEAL_PRIMARY)),
        ]),
        error_line,
        Line::from(Span::styled(
            " Enter: apply · Esc: cancel",
            Style::default().fg(TEXT_MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(content).block(block), area);
}
