//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use super::views::Severity;
use crate::events::Worker;
use crate::scan::StatusTone;
use ratatui::prelude::Color;

/// Colours cycled through by the category chart.
pub const CHART_PALETTE: [Color; 6] = [
    Color::Rgb(255, 99, 132),
    Color::Rgb(54, 162, 235),
    Color::Rgb(255, 206, 86),
    Color::Rgb(75, 192, 192),
    Color::Rgb(153, 102, 255),
    Color::Rgb(255, 159, 64),
];

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::StatsPoller | Worker::DocumentPoller => Color::Cyan,
        Worker::LocationLoader => Color::LightBlue,
        Worker::ScanSubmitter => Color::Green,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Green,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Gray,
    }
}

pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Neutral => Color::White,
        StatusTone::Error => Color::LightRed,
    }
}

pub fn chart_color(index: usize) -> Color {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM:SS from time
            if let (Some(month_day), Some(clock)) = (date_part.get(5..10), time_part.get(0..8)) {
                return format!("{} {}", month_day, clock);
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("connect") {
        return "Service unreachable".to_string();
    }
    msg.to_string()
}
