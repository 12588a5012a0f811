//! Dashboard info panel component
//!
//! Renders the service connection panel

use super::super::state::DashboardState;
use super::super::utils::format_compact_timestamp;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use std::time::Duration;

fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!(
            "Uptime: {}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    } else {
        format!("Uptime: {}m {}s", secs / 60, secs % 60)
    }
}

fn last_refresh(label: &str, at: Option<&String>) -> Line<'static> {
    let text = at
        .map(|t| format_compact_timestamp(t))
        .unwrap_or_else(|| "Never".to_string());
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(text, Style::default().fg(Color::Yellow)),
    ])
}

/// Render the service info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let info_lines = vec![
        Line::from(vec![Span::styled(
            format!("Server: {}", state.server_url),
            Style::default().fg(Color::LightBlue),
        )]),
        Line::from(vec![Span::styled(
            format!("Version: {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(vec![Span::styled(
            format_uptime(state.start_time.elapsed()),
            Style::default().fg(Color::LightGreen),
        )]),
        last_refresh("Stats", state.last_stats_at.as_ref()),
        last_refresh("Documents", state.last_documents_at.as_ref()),
    ];

    let info_block = Block::default()
        .title("SERVICE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_units() {
        assert_eq!(format_uptime(Duration::from_secs(75)), "Uptime: 1m 15s");
        assert_eq!(format_uptime(Duration::from_secs(3725)), "Uptime: 1h 2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(90061)), "Uptime: 1d 1h 1m");
    }
}
