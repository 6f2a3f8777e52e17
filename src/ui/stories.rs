//! Story card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::{ComplexityBand, Story};
use crate::theme::{
    complexity_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, RED_DANGER, ROUNDED_BORDERS,
    TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::truncate_with_ellipsis;
use crate::utils::{format_complexity, format_hours};

/// Height of one story card in terminal rows (border + content + border).
const CARD_HEIGHT: u16 = 3;

/// Render the scrollable story card list. Keeps the selected card visible
/// by adjusting the scroll offset stored on the app.
pub fn render_story_list(area: Rect, app: &mut App, frame: &mut Frame) {
    let flagged = match &app.report {
        Some(report) => report.problematic_count(),
        None => return,
    };
    let title = if flagged > 0 {
        format!(
            " User Stories · sort: {} · {} flagged ",
            app.story_sort_mode.label(),
            flagged
        )
    } else {
        format!(" User Stories · sort: {} ", app.story_sort_mode.label())
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(TEXT_SECONDARY))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indices = app.sorted_story_indices();
    if indices.is_empty() {
        let empty = Paragraph::new(" No stories in this report ")
            .style(Style::default().fg(TEXT_MUTED));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;

    // Scroll the selection into view
    if app.selected_story_index < app.story_scroll_offset {
        app.story_scroll_offset = app.selected_story_index;
    } else if app.selected_story_index >= app.story_scroll_offset + visible {
        app.story_scroll_offset = app.selected_story_index + 1 - visible;
    }
    let offset = app.story_scroll_offset.min(indices.len().saturating_sub(1));

    let Some(report) = &app.report else {
        return;
    };
    for (row, display_pos) in (offset..indices.len()).take(visible).enumerate() {
        let card_area = Rect::new(
            inner.x,
            inner.y + (row as u16) * CARD_HEIGHT,
            inner.width,
            CARD_HEIGHT,
        )
        .intersection(inner);
        if card_area.height == 0 {
            break;
        }
        let story = &report.stories[indices[display_pos]];
        render_story_card(
            card_area,
            story,
            display_pos == app.selected_story_index,
            frame,
        );
    }
}

/// Render a single user story card: id, truncated title, and hours and
/// complexity badges. Problematic stories get a red border.
pub fn render_story_card(area: Rect, story: &Story, selected: bool, frame: &mut Frame) {
    let border_color = if selected {
        TEAL_PRIMARY
    } else if story.is_problematic() {
        RED_DANGER
    } else {
        BORDER_SUBTLE
    };
    let bg_color = if selected { BG_TERTIARY } else { BG_SECONDARY };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let badges = format!(
        " {}h · c{} ",
        format_hours(story.estimated_hours),
        format_complexity(story.complexity)
    );
    let id_prefix = format!("#{} ", story.id);

    let inner_width = area.width.saturating_sub(4) as usize;
    let title_budget = inner_width
        .saturating_sub(id_prefix.chars().count())
        .saturating_sub(badges.chars().count());
    let title = truncate_with_ellipsis(&story.title, title_budget);

    // Pad the title so the badges sit on the right edge
    let pad = title_budget.saturating_sub(title.chars().count());
    let band_color = complexity_color(ComplexityBand::from_complexity(story.complexity));

    let line = Line::from(vec![
        Span::styled(
            id_prefix,
            Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(title, Style::default().fg(TEXT_PRIMARY)),
        Span::raw(" ".repeat(pad)),
        Span::styled(badges, Style::default().fg(band_color)),
    ]);

    let paragraph = Paragraph::new(vec![line]).block(card_block);
    frame.render_widget(paragraph, area);
}
