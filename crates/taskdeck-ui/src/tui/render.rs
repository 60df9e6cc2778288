//! Frame rendering.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use taskdeck_core::Flag;

use crate::list_view::{self, priority_indicator};

use super::{App, Focus};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let has_error = app.controller.error().is_some();
    let mut constraints = vec![Constraint::Length(3), Constraint::Length(3)];
    if has_error {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(1));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::vertical(constraints).split(area);

    render_header(frame, app, chunks[0]);
    render_composer(frame, app, chunks[1]);

    let mut next = 2;
    if has_error {
        render_error(frame, app, chunks[next]);
        next += 1;
    }
    render_body(frame, app, chunks[next]);
    render_footer(frame, app, chunks[next + 1]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title = Line::from(Span::styled(
        "Taskdeck · To-Do",
        Style::default()
            .fg(theme.text_bright)
            .add_modifier(Modifier::BOLD),
    ));
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim)),
    );
    frame.render_widget(header, area);
}

fn render_composer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Composer && app.list.editing().is_none();

    let mut spans = Vec::new();
    if app.composer.text().is_empty() && !focused {
        spans.push(Span::styled(
            "Enter a new task...",
            Style::default().fg(theme.dim),
        ));
    } else {
        spans.push(Span::styled(
            app.composer.text().to_string(),
            Style::default().fg(theme.text_bright),
        ));
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }
    }

    if app.flags.is_enabled(Flag::PriorityTasks) {
        let indicator = priority_indicator(Some(app.composer.priority()));
        spans.push(Span::styled(
            format!("  [{} {}]", indicator.symbol, indicator.label),
            Style::default().fg(indicator.color),
        ));
    }
    if app.flags.is_enabled(Flag::TaskCategories) {
        spans.push(Span::styled(
            format!("  [{}]", app.composer.category().label()),
            Style::default().fg(theme.dim),
        ));
    }

    let border = if focused { theme.input_border } else { theme.dim };
    let composer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Add New Task ")
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(composer, area);
}

fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let message = app.controller.error().unwrap_or_default();
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Error: {message}"),
            Style::default().fg(theme.error),
        ),
        Span::styled("  (x to dismiss)", Style::default().fg(theme.dim)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error)),
    );
    frame.render_widget(banner, area);
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if app.controller.is_loading() {
        let loading = Paragraph::new(Span::styled(
            "Loading tasks...",
            Style::default().fg(theme.dim),
        ));
        frame.render_widget(loading, area);
        return;
    }

    if app.controller.tasks().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No tasks yet!",
                Style::default()
                    .fg(theme.text_bright)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Add your first task above to get started.",
                Style::default().fg(theme.dim),
            )),
        ]);
        frame.render_widget(empty, area);
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(area);
    render_stats(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let stats = list_view::stats(app.controller.tasks());

    let mut spans = vec![Span::styled(
        format!(
            "Total {}  ·  Completed {}  ·  Remaining {}",
            stats.total, stats.completed, stats.remaining
        ),
        Style::default().fg(theme.text),
    )];

    if app.flags.is_enabled(Flag::PriorityTasks) {
        let counts = list_view::priority_counts(app.controller.tasks());
        for (symbol, count, color) in [
            ("▲", counts.high, priority_indicator(Some(taskdeck_client::Priority::High)).color),
            ("■", counts.medium, priority_indicator(None).color),
            ("▼", counts.low, priority_indicator(Some(taskdeck_client::Priority::Low)).color),
        ] {
            spans.push(Span::styled(
                format!("   {symbol} {count}"),
                Style::default().fg(color),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let tasks = app.controller.tasks();
    let order = app.display_order();
    let show_priority = app.flags.is_enabled(Flag::PriorityTasks);
    let show_category = app.flags.is_enabled(Flag::TaskCategories);

    // Keep the cursor row on screen.
    let height = area.height as usize;
    let offset = if height == 0 {
        0
    } else {
        app.cursor.saturating_sub(height.saturating_sub(1))
    };

    let mut lines = Vec::new();
    for (pos, &idx) in order.iter().enumerate().skip(offset).take(height.max(1)) {
        let task = &tasks[idx];
        let selected = pos == app.cursor;
        let mut spans = Vec::new();

        spans.push(Span::styled(
            if task.completed { "[x] " } else { "[ ] " },
            Style::default().fg(if task.completed { theme.done } else { theme.text }),
        ));

        if show_priority {
            let indicator = priority_indicator(task.priority);
            spans.push(Span::styled(
                format!("{} ", indicator.symbol),
                Style::default().fg(indicator.color),
            ));
        }

        if app.list.is_editing(&task.id) {
            let buffer = app
                .list
                .editing()
                .map(|e| e.buffer.clone())
                .unwrap_or_default();
            spans.push(Span::styled(
                format!("{buffer}▏"),
                Style::default().fg(theme.accent),
            ));
        } else {
            let text_style = if task.completed {
                Style::default()
                    .fg(theme.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(theme.text_bright)
            };
            spans.push(Span::styled(task.text.clone(), text_style));

            if show_category {
                spans.push(Span::styled(
                    format!("  [{}]", task.category_or_default().label()),
                    Style::default().fg(theme.dim),
                ));
            }
            spans.push(Span::styled(
                format!("  {}", task.created_at.format("%Y-%m-%d")),
                Style::default().fg(theme.dim),
            ));
        }

        let mut line = Line::from(spans);
        if selected && app.focus == Focus::List {
            line = line.style(Style::default().bg(theme.selection_bg));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let hints = if app.list.editing().is_some() {
        "Enter save · Esc cancel"
    } else if app.focus == Focus::Composer {
        "Enter add · Esc back · Tab priority · Shift-Tab category"
    } else {
        "↑↓ move · Space toggle · e edit · d delete · i new · r refresh · x dismiss · q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(theme.dim))),
        area,
    );
}
