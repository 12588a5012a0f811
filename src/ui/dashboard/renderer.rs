//! Dashboard main renderer

use super::components::{documents, footer, header, info_panel, logs, scan, stats};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Fill(1)])
        .split(content_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Fill(1)])
        .split(content_chunks[1]);

    info_panel::render_info_panel(f, left_chunks[0], state);
    scan::render_scan_panel(f, left_chunks[1], state);
    stats::render_stats_section(f, right_chunks[0], state);
    documents::render_documents_table(f, right_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::super::components::{documents, logs, scan, stats};
    use crate::events::Event;
    use crate::gateway::MockGateway;
    use crate::snapshot::{CategoryCount, DocumentRecord, Statistics};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::DashboardState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::sync::Arc;
    use std::time::Instant;

    fn test_state() -> DashboardState {
        let mut gateway = MockGateway::new();
        gateway
            .expect_server_url()
            .return_const("http://localhost:5000".to_string());
        DashboardState::new(
            Arc::new(gateway),
            Instant::now(),
            UIConfig::new(false, 5000),
        )
    }

    fn snapshot_events() -> Vec<Event> {
        vec![
            Event::stats_received(Statistics {
                total_documents: 3,
                by_category: vec![
                    CategoryCount::new("Invoice", 2),
                    CategoryCount::new("Contract", 1),
                ],
            }),
            Event::documents_received(vec![DocumentRecord {
                filename: "/data/in/a.pdf".to_string(),
                predicted_category: "Invoice".to_string(),
                confidence_score: 0.91,
                language: "en".to_string(),
                modified_date: "2024-05-01 10:00:00".to_string(),
            }]),
        ]
    }

    fn draw(state: &DashboardState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                let half = area.height / 2;
                let top = ratatui::layout::Rect { height: half, ..area };
                let bottom = ratatui::layout::Rect {
                    y: area.y + half,
                    height: area.height - half,
                    ..area
                };
                stats::render_stats_section(f, top, state);
                documents::render_documents_table(f, bottom, state);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn same_snapshot_twice_renders_identically() {
        let mut once = test_state();
        for event in snapshot_events() {
            once.add_event(event);
        }
        once.update();

        let mut twice = test_state();
        for event in snapshot_events().into_iter().chain(snapshot_events()) {
            twice.add_event(event);
        }
        twice.update();

        assert_eq!(draw(&once), draw(&twice));
        assert_eq!(twice.stats.chart.as_ref().unwrap().revision(), 1);
        let rendered = text(&draw(&twice));
        assert!(rendered.contains("a.pdf"));
        assert!(rendered.contains("91.0%"));
        assert!(rendered.contains("2024-05-01 10:00:00"));
        assert!(rendered.contains("Invoice"));
    }

    #[test]
    fn empty_document_list_shows_placeholder() {
        let mut state = test_state();
        state.add_event(Event::documents_received(Vec::new()));
        state.update();
        let rendered = text(&draw(&state));
        assert!(rendered.contains("No documents processed yet."));
    }

    #[test]
    fn scan_panel_shows_trigger_and_locations() {
        let mut state = test_state();
        state.add_event(Event::locations_loaded(Ok(vec!["/srv/inbox".to_string()])));
        state.update();

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| scan::render_scan_panel(f, f.area(), &state))
            .unwrap();
        let rendered = text(terminal.backend().buffer());
        assert!(rendered.contains("/srv/inbox"));
        assert!(rendered.contains("Scan Selected Directory"));
    }

    #[test]
    fn log_panel_survives_long_polling() {
        let mut state = test_state();
        state.add_event(Event::locations_loaded(Ok(vec!["/data/a".to_string()])));
        for total in 0..120 {
            state.add_event(Event::stats_received(Statistics {
                total_documents: total,
                by_category: Vec::new(),
            }));
            state.add_event(Event::documents_received(Vec::new()));
        }
        state.update();

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|f| logs::render_logs_panel(f, f.area(), &state))
            .unwrap();
        let rendered = text(terminal.backend().buffer());
        assert!(rendered.contains("Loaded 1 scan locations"));
        assert!(!rendered.contains("Connecting..."));
    }
}
