//! Statistics panel view model

use crate::snapshot::{CategoryCount, Statistics};

/// The category distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChart {
    bars: Vec<CategoryCount>,
    /// Number of in-place dataset replacements since construction.
    revision: u64,
}

impl CategoryChart {
    pub fn new(bars: Vec<CategoryCount>) -> Self {
        Self { bars, revision: 0 }
    }

    /// Swaps the dataset, keeping the chart itself.
    pub fn replace_dataset(&mut self, bars: Vec<CategoryCount>) {
        self.bars = bars;
        self.revision += 1;
    }

    pub fn bars(&self) -> &[CategoryCount] {
        &self.bars
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsPanel {
    /// `None` until the first snapshot arrives.
    pub total_documents: Option<u64>,
    pub chart: Option<CategoryChart>,
}

impl StatsPanel {
    pub fn total_label(&self) -> String {
        match self.total_documents {
            Some(total) => total.to_string(),
            None => "-".to_string(),
        }
    }
}

/// Shows a statistics snapshot. Categories keep the server's order.
pub fn render_stats(panel: &mut StatsPanel, stats: &Statistics) {
    panel.total_documents = Some(stats.total_documents);
    match panel.chart.as_mut() {
        Some(chart) => chart.replace_dataset(stats.by_category.clone()),
        None => panel.chart = Some(CategoryChart::new(stats.by_category.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u64, bars: &[(&str, u64)]) -> Statistics {
        Statistics {
            total_documents: total,
            by_category: bars
                .iter()
                .map(|(name, count)| CategoryCount::new(*name, *count))
                .collect(),
        }
    }

    #[test]
    fn first_snapshot_builds_chart() {
        let mut panel = StatsPanel::default();
        assert_eq!(panel.total_label(), "-");

        render_stats(&mut panel, &stats(5, &[("Legal", 3), ("HR", 2)]));

        assert_eq!(panel.total_label(), "5");
        let chart = panel.chart.as_ref().unwrap();
        assert_eq!(chart.revision(), 0);
        assert_eq!(chart.bars().len(), 2);
    }

    #[test]
    fn later_snapshots_update_chart_in_place() {
        let mut panel = StatsPanel::default();
        render_stats(&mut panel, &stats(5, &[("Legal", 3), ("HR", 2)]));
        render_stats(&mut panel, &stats(6, &[("HR", 2), ("Legal", 4)]));

        let chart = panel.chart.as_ref().unwrap();
        assert_eq!(chart.revision(), 1);
        // Server order wins, no sorting.
        assert_eq!(chart.bars()[0].category, "HR");
        assert_eq!(panel.total_documents, Some(6));
    }

    #[test]
    fn same_snapshot_twice_shows_the_same_data() {
        let snapshot = stats(5, &[("Legal", 3), ("HR", 2)]);
        let mut once = StatsPanel::default();
        render_stats(&mut once, &snapshot);
        let mut twice = StatsPanel::default();
        render_stats(&mut twice, &snapshot);
        render_stats(&mut twice, &snapshot);

        assert_eq!(once.total_documents, twice.total_documents);
        assert_eq!(
            once.chart.as_ref().unwrap().bars(),
            twice.chart.as_ref().unwrap().bars()
        );
    }

    #[test]
    fn empty_distribution_keeps_empty_chart() {
        let mut panel = StatsPanel::default();
        render_stats(&mut panel, &stats(0, &[]));
        assert!(panel.chart.as_ref().unwrap().bars().is_empty());
        assert_eq!(panel.total_label(), "0");
    }
}
