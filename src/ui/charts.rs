//! Chart rendering: estimated hours per story and complexity distribution

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::models::{ComplexityBand, Report};
use crate::theme::{
    complexity_color, BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::utils::{format_complexity, format_hours};

/// Bar chart of estimated hours per story, bars colored by complexity band.
pub fn render_hours_chart(area: Rect, report: &Report, frame: &mut Frame) {
    let block = Block::default()
        .title(" Estimated Hours per Story ")
        .title_style(Style::default().fg(TEXT_SECONDARY))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    // Bar values are in tenths of an hour so one decimal place survives the
    // integer bar API; the text label shows the real value.
    let bars: Vec<Bar> = report
        .stories
        .iter()
        .map(|story| {
            let color = complexity_color(ComplexityBand::from_complexity(story.complexity));
            Bar::default()
                .value((story.estimated_hours * 10.0).round().max(0.0) as u64)
                .text_value(format_hours(story.estimated_hours))
                .label(Line::from(format!("#{}", story.id)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(BG_SECONDARY).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(6)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Horizontal breakdown of how many stories sit at each complexity value,
/// ascending. The textual equivalent of the report's doughnut chart.
pub fn render_complexity_distribution(area: Rect, report: &Report, frame: &mut Frame) {
    let block = Block::default()
        .title(" Complexity Distribution ")
        .title_style(Style::default().fg(TEXT_SECONDARY))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let distribution = report.complexity_distribution();
    let max_count = distribution.iter().map(|&(_, n)| n).max().unwrap_or(1);
    let bar_budget = inner.width.saturating_sub(14) as usize;

    let lines: Vec<Line> = distribution
        .iter()
        .map(|&(complexity, count)| {
            let color = complexity_color(ComplexityBand::from_complexity(complexity));
            let bar_len = if max_count > 0 {
                (bar_budget * count).div_ceil(max_count)
            } else {
                0
            };
            Line::from(vec![
                Span::styled(
                    format!(" c{:<4}", format_complexity(complexity)),
                    Style::default().fg(TEXT_SECONDARY),
                ),
                Span::styled("█".repeat(bar_len), Style::default().fg(color)),
                Span::styled(format!(" {}", count), Style::default().fg(TEXT_MUTED)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
