//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::browser::Row;
use crate::tree::NodeKind;

use super::app::{App, Mode};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    render_tree_area(app, frame, tree_area(area, app.show_footer));
    if app.show_footer {
        render_footer(app, frame, footer_area(area));
    }

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

/// Area occupied by the bordered tree view.
pub fn tree_area(area: Rect, show_footer: bool) -> Rect {
    if show_footer {
        Rect {
            height: area.height.saturating_sub(1),
            ..area
        }
    } else {
        area
    }
}

fn footer_area(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    }
}

fn tree_block(app: &App) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", app.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = tree_block(app);
    let rows = app.browser.surface().rows();

    if rows.is_empty() {
        let paragraph = Paragraph::new("Empty tree")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = inner_area.height as usize;
    let scroll_offset = calculate_scroll_offset(app.selected, visible_height, rows.len());

    for (i, row) in rows
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .enumerate()
    {
        let y = inner_area.y + i as u16;
        let is_selected = scroll_offset + i == app.selected;
        let line = row_line(row, &app.highlight_symbol, is_selected);
        frame.render_widget(
            Paragraph::new(line),
            Rect::new(inner_area.x, y, inner_area.width, 1),
        );
    }
}

fn row_line<'a>(row: &Row<'a>, highlight_symbol: &str, is_selected: bool) -> Line<'a> {
    let gutter = if is_selected {
        highlight_symbol.to_string()
    } else {
        " ".repeat(highlight_symbol.chars().count())
    };

    let style = match row.kind {
        NodeKind::Folder => Style::default().fg(Color::Blue).bold(),
        NodeKind::File => Style::default().fg(Color::White),
    };

    let line = Line::from(vec![
        Span::raw(gutter),
        Span::raw(" ".repeat(row.indent)),
        Span::styled(row.label, style),
    ]);

    if is_selected {
        line.style(Style::default().bg(Color::DarkGray))
    } else {
        line
    }
}

/// Keep the selection visible with a little context above and below.
pub fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        selected
            .saturating_sub(padding)
            .min(total.saturating_sub(visible_height))
    }
}

/// Map a screen position to a row index, if it lands on a rendered row.
pub fn row_at(app: &App, area: Rect, column: u16, screen_row: u16) -> Option<usize> {
    let inner_area = tree_block(app).inner(tree_area(area, app.show_footer));
    if !inner_area.contains(Position::new(column, screen_row)) {
        return None;
    }

    let total = app.row_count();
    let scroll_offset = calculate_scroll_offset(app.selected, inner_area.height as usize, total);
    let index = scroll_offset + (screen_row - inner_area.y) as usize;
    (index < total).then_some(index)
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => "[↑↓] Navigate  [Enter] Open file  [?] Help  [q] Quit",
        Mode::Help => "[Esc] Close",
    };

    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(50, 12, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from("↑/k  ↓/j     Move selection"),
        Line::from("g/Home G/End First / last row"),
        Line::from("PgUp PgDn    Move by page"),
        Line::from("Enter Space  Open selected file"),
        Line::from("Click        Open clicked file"),
        Line::from("?            Toggle help"),
        Line::from("q Esc        Quit"),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
