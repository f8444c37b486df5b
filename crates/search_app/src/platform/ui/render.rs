use ratatui::layout::{Alignment, Position};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use search_core::{AppViewModel, ResultRowView};

use super::constants::*;
use super::layout::ScreenLayout;

pub fn draw(frame: &mut Frame, view: &AppViewModel, layout: &ScreenLayout, list_state: &mut ListState) {
    draw_header(frame, layout);
    draw_input(frame, view, layout);
    draw_button(frame, view, layout);
    draw_status(frame, view, layout);
    draw_results(frame, view, layout, list_state);
}

fn draw_header(frame: &mut Frame, layout: &ScreenLayout) {
    let header = Text::from(vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(APP_HINT, Style::new().fg(Color::DarkGray))),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);
}

fn draw_input(frame: &mut Frame, view: &AppViewModel, layout: &ScreenLayout) {
    let line = if view.query.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(view.query.as_str())
    };
    let block = Block::bordered().title(format!(" {INPUT_TITLE} "));
    frame.render_widget(Paragraph::new(line).block(block), layout.input);

    // The input stays editable while loading, so the cursor is always shown.
    let typed = u16::try_from(Line::from(view.query.as_str()).width()).unwrap_or(u16::MAX);
    let max_x = layout.input.right().saturating_sub(2);
    let x = layout.input.x.saturating_add(1).saturating_add(typed).min(max_x);
    frame.set_cursor_position(Position::new(x, layout.input.y.saturating_add(1)));
}

fn draw_button(frame: &mut Frame, view: &AppViewModel, layout: &ScreenLayout) {
    let style = if view.submit_enabled {
        Style::new().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(Color::DarkGray)
    };
    let button = Paragraph::new(Line::from(view.submit_label()))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered().border_style(style));
    frame.render_widget(button, layout.button);
}

fn draw_status(frame: &mut Frame, view: &AppViewModel, layout: &ScreenLayout) {
    if let Some(status) = &view.status {
        let line = Line::from(Span::styled(status.message, Style::new().fg(Color::Gray)));
        frame.render_widget(Paragraph::new(line), layout.status);
    }
}

fn draw_results(
    frame: &mut Frame,
    view: &AppViewModel,
    layout: &ScreenLayout,
    list_state: &mut ListState,
) {
    let items: Vec<ListItem> = view.results.iter().map(result_item).collect();
    let block = Block::bordered()
        .title(format!(" {RESULTS_TITLE} ({}) ", view.results.len()))
        .title_bottom(KEY_HINTS);
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().bg(Color::Rgb(40, 40, 60)));

    list_state.select(view.selected);
    frame.render_stateful_widget(list, layout.results, list_state);
}

fn result_item(row: &ResultRowView) -> ListItem<'static> {
    let mut heading = vec![
        Span::styled(
            row.source_tag(),
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            row.title.clone(),
            Style::new()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ];
    if let Some(score) = &row.score {
        heading.push(Span::styled(
            format!("  score: {score}"),
            Style::new().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Text::from(vec![
        Line::from(heading),
        Line::from(Span::styled(row.url.clone(), Style::new().fg(Color::DarkGray))),
        Line::from(row.text.clone()),
    ]))
}
