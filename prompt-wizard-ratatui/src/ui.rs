use prompt_wizard::view::{Body, StepView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::Theme;

pub(crate) fn draw(frame: &mut Frame, view: &StepView, title: &str, theme: &Theme) {
    let area = frame.area();

    let header_height = if title.is_empty() { 0 } else { 2 };
    let history_height = if view.history.is_empty() {
        0
    } else {
        view.history.len() as u16 + 2
    };

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(header_height),  // Title
            Constraint::Length(2),              // Progress
            Constraint::Length(history_height), // Previous answers
            Constraint::Length(3),              // Prompt
            Constraint::Min(3),                 // Widget
            Constraint::Length(2),              // Help
        ])
        .split(area);

    if !title.is_empty() {
        let header = Paragraph::new(title.to_string())
            .style(Style::default().fg(theme.primary).bold())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(header, chunks[0]);
    }

    draw_progress(frame, chunks[1], view, theme);

    if !view.history.is_empty() {
        let lines: Vec<Line> = view
            .history
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!("{}: ", entry.title), Style::default().fg(theme.text)),
                    Span::styled(entry.answer.clone(), Style::default().fg(theme.muted)),
                ])
            })
            .collect();
        let history = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Previous ")
                .title_style(Style::default().fg(theme.muted)),
        );
        frame.render_widget(history, chunks[2]);
    }

    let mut heading = vec![Span::styled(
        view.title.clone(),
        Style::default().fg(theme.text),
    )];
    if let Some(description) = &view.description {
        heading.push(Span::styled(
            format!(" ({description})"),
            Style::default().fg(theme.muted),
        ));
    }
    let prompt = Paragraph::new(Line::from(heading))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Question ")
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(prompt, chunks[3]);

    draw_body(frame, chunks[4], &view.body, theme);

    let help = Paragraph::new(view.hints.clone())
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[5]);
}

/// Thin bar with `Step N of M` centered below it.
fn draw_progress(frame: &mut Frame, area: Rect, view: &StepView, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let label = view.position_label();
    let bar_width = area.width.saturating_sub(2);
    let text_width = (label.chars().count() as u16).min(area.width);

    let ratio = view.position as f32 / view.total.max(1) as f32;
    let filled_width = (ratio * bar_width as f32) as u16;

    let bar_x = area.x + 1;
    let track = Paragraph::new("─".repeat(bar_width as usize))
        .style(Style::default().fg(theme.border));
    frame.render_widget(track, Rect::new(bar_x, area.y, bar_width, 1));

    if filled_width > 0 {
        let filled = Paragraph::new("━".repeat(filled_width as usize))
            .style(Style::default().fg(theme.primary));
        frame.render_widget(filled, Rect::new(bar_x, area.y, filled_width, 1));
    }

    if area.height > 1 {
        let text_x = area.x + area.width.saturating_sub(text_width) / 2;
        let text = Paragraph::new(label).style(Style::default().fg(theme.secondary).bold());
        frame.render_widget(text, Rect::new(text_x, area.y + 1, text_width, 1));
    }
}

fn draw_body(frame: &mut Frame, area: Rect, body: &Body, theme: &Theme) {
    match body {
        Body::Input {
            text,
            is_placeholder,
        } => {
            let style = if *is_placeholder {
                Style::default().fg(theme.muted)
            } else {
                Style::default().fg(theme.text)
            };
            let input = Paragraph::new(text.clone()).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .title(" Input ")
                    .title_style(Style::default().fg(theme.secondary)),
            );
            frame.render_widget(input, area);

            if area.height >= 3 && area.width >= 3 {
                let typed = if *is_placeholder {
                    0
                } else {
                    text.chars().count() as u16
                };
                let cursor_x = (area.x + 1 + typed).min(area.right().saturating_sub(2));
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }
        Body::Select { options, cursor } => {
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(i, opt)| {
                    let style = if i == *cursor {
                        Style::default().fg(theme.highlight).bold()
                    } else {
                        Style::default().fg(theme.muted)
                    };
                    ListItem::new(opt.clone()).style(style)
                })
                .collect();
            draw_list(frame, area, items, *cursor, " Select Option ".to_string(), theme);
        }
        Body::Confirm { yes } => {
            let (yes_style, no_style) = if *yes {
                (
                    Style::default().fg(theme.yes).bold().reversed(),
                    Style::default().fg(theme.muted),
                )
            } else {
                (
                    Style::default().fg(theme.muted),
                    Style::default().fg(theme.no).bold().reversed(),
                )
            };
            let choice = Paragraph::new(Line::from(vec![
                Span::styled(" Yes ", yes_style),
                Span::raw("   "),
                Span::styled(" No ", no_style),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Confirm ")
                    .title_style(Style::default().fg(theme.secondary)),
            );
            frame.render_widget(choice, area);
        }
        Body::MultiSelect { options, cursor } => {
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(i, (opt, checked))| {
                    let mark = if *checked { "✓" } else { "•" };
                    let style = match (i == *cursor, *checked) {
                        (true, true) => Style::default().fg(theme.primary).bold(),
                        (true, false) => Style::default().fg(theme.highlight).bold(),
                        (false, true) => Style::default().fg(theme.primary),
                        (false, false) => Style::default().fg(theme.muted),
                    };
                    ListItem::new(format!("{mark} {opt}")).style(style)
                })
                .collect();
            let selected = options.iter().filter(|(_, checked)| *checked).count();
            draw_list(
                frame,
                area,
                items,
                *cursor,
                format!(" Multi-Select ({selected} selected) "),
                theme,
            );
        }
    }
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    cursor: usize,
    title: String,
    theme: &Theme,
) {
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(title)
                .title_style(Style::default().fg(theme.secondary)),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}
