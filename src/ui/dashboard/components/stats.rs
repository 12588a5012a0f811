//! Dashboard statistics component
//!
//! Renders the total document count and the category bar chart

use super::super::state::DashboardState;
use super::super::utils::chart_color;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

pub fn render_stats_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Fill(1)])
        .split(area);

    render_total(f, chunks[0], state);
    render_category_chart(f, chunks[1], state);
}

fn render_total(f: &mut Frame, area: Rect, state: &DashboardState) {
    let total = Paragraph::new(vec![
        Line::from(""),
        Line::from(state.stats.total_label()).style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from("documents").style(Style::default().fg(Color::Gray)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title("TOTAL")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(total, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("BY CATEGORY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(chart) = state.stats.chart.as_ref().filter(|c| !c.bars().is_empty()) else {
        let empty = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    // Server order, one colour per position
    let bars: Vec<Bar> = chart
        .bars()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let color = chart_color(i);
            Bar::default()
                .value(entry.count)
                .label(Line::from(entry.category.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let widget = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(widget, area);
}
