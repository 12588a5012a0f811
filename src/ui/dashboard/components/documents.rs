//! Dashboard documents component
//!
//! Renders the classified documents table

use super::super::state::DashboardState;
use super::super::utils::severity_color;
use super::super::views::TableRow;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

const COLUMNS: [&str; 5] = ["File", "Category", "Confidence", "Language", "Modified"];

pub fn render_documents_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!("DOCUMENTS ({})", state.documents.document_count()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let mut rows = Vec::new();
    for row in state.documents.rows() {
        match row {
            TableRow::Placeholder(text) => {
                // The placeholder spans the table
                let placeholder = Paragraph::new(text.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                f.render_widget(placeholder, area);
                return;
            }
            TableRow::Document(doc) => {
                let badge = Span::styled(
                    format!(" {} ", doc.confidence.label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(severity_color(doc.confidence.severity))
                        .add_modifier(Modifier::BOLD),
                );
                rows.push(Row::new(vec![
                    Cell::from(doc.name.clone()),
                    Cell::from(doc.category.clone()),
                    Cell::from(badge),
                    Cell::from(doc.language.clone()),
                    Cell::from(doc.modified.clone()),
                ]));
            }
        }
    }

    let header = Row::new(COLUMNS).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(19),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    f.render_widget(table, area);
}
