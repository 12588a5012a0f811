//! Dashboard scan component
//!
//! Renders the location selector, the trigger and the status line

use super::super::state::DashboardState;
use super::super::utils::{spinner_frame, tone_color};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{
    Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap,
};

pub fn render_scan_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("SCAN")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

    let panel = &state.scan;
    let items: Vec<ListItem> = panel
        .selector
        .options()
        .iter()
        .map(|option| {
            let style = if option.value.is_some() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(option.label.clone()).style(style)
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(panel.selector.selected_index()));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let trigger_text = if panel.trigger.busy {
        format!("[ {} {} ]", spinner_frame(state.tick), panel.trigger.label())
    } else {
        format!("[ {} ]", panel.trigger.label())
    };
    let trigger_style = if panel.trigger.enabled {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(trigger_text).style(trigger_style), chunks[1]);

    let status = Paragraph::new(panel.status.text.as_str())
        .style(Style::default().fg(tone_color(panel.status.tone)))
        .wrap(Wrap { trim: true });
    f.render_widget(status, chunks[2]);
}
