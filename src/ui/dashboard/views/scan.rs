//! Scan controls: location selector, trigger and status line

use crate::consts::cli_consts::messages;
use crate::scan::StatusTone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub label: String,
    /// `None` for informational placeholders.
    pub value: Option<String>,
}

impl SelectorOption {
    pub fn location(path: &str) -> Self {
        Self {
            label: path.to_string(),
            value: Some(path.to_string()),
        }
    }

    pub fn placeholder(text: &str) -> Self {
        Self {
            label: text.to_string(),
            value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSelector {
    options: Vec<SelectorOption>,
    selected: usize,
    pub enabled: bool,
}

impl Default for LocationSelector {
    fn default() -> Self {
        Self {
            options: vec![SelectorOption::placeholder(messages::LOADING_LOCATIONS)],
            selected: 0,
            enabled: false,
        }
    }
}

impl LocationSelector {
    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Value of the highlighted option, if it has one.
    pub fn selected_value(&self) -> Option<String> {
        self.options.get(self.selected).and_then(|o| o.value.clone())
    }

    pub fn select_next(&mut self) {
        if self.enabled && self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.enabled {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    fn replace_options(&mut self, options: Vec<SelectorOption>) {
        self.options = options;
        self.selected = 0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerControl {
    pub enabled: bool,
    pub busy: bool,
}

impl TriggerControl {
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disables the trigger and shows the busy indicator.
    pub fn set_busy(&mut self) {
        self.enabled = false;
        self.busy = true;
    }

    /// Back to enabled with the default label.
    pub fn restore(&mut self) {
        self.enabled = true;
        self.busy = false;
    }

    pub fn label(&self) -> &'static str {
        if self.busy {
            messages::TRIGGER_BUSY_LABEL
        } else {
            messages::TRIGGER_LABEL
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub fn show(&mut self, text: String, tone: StatusTone) {
        self.text = text;
        self.tone = tone;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPanel {
    pub selector: LocationSelector,
    pub trigger: TriggerControl,
    pub status: StatusLine,
}

impl ScanPanel {
    /// Populates the selector from the bootstrap fetch.
    ///
    /// Only a non-empty list arms the controls; both stay disabled otherwise.
    pub fn apply_locations(&mut self, result: &Result<Vec<String>, String>) {
        match result {
            Ok(locations) if !locations.is_empty() => {
                self.selector.replace_options(
                    locations
                        .iter()
                        .map(|path| SelectorOption::location(path))
                        .collect(),
                );
                self.selector.enabled = true;
                self.trigger.enable();
            }
            Ok(_) => self
                .selector
                .replace_options(vec![SelectorOption::placeholder(messages::NO_LOCATIONS)]),
            Err(_) => self
                .selector
                .replace_options(vec![SelectorOption::placeholder(messages::LOCATIONS_ERROR)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_start_disabled() {
        let panel = ScanPanel::default();
        assert!(!panel.selector.enabled);
        assert!(!panel.trigger.enabled);
        assert_eq!(panel.selector.selected_value(), None);
    }

    #[test]
    fn two_locations_arm_both_controls() {
        let mut panel = ScanPanel::default();
        panel.apply_locations(&Ok(vec!["/data/a".to_string(), "/data/b".to_string()]));

        assert_eq!(panel.selector.options().len(), 2);
        assert!(panel.selector.enabled);
        assert!(panel.trigger.enabled);
        assert_eq!(panel.selector.selected_value().as_deref(), Some("/data/a"));

        panel.selector.select_next();
        panel.selector.select_next();
        assert_eq!(panel.selector.selected_value().as_deref(), Some("/data/b"));
        panel.selector.select_previous();
        assert_eq!(panel.selector.selected_index(), 0);
    }

    #[test]
    fn empty_list_shows_placeholder_and_stays_disabled() {
        let mut panel = ScanPanel::default();
        panel.apply_locations(&Ok(vec![]));

        assert_eq!(
            panel.selector.options(),
            &[SelectorOption::placeholder(
                "No scannable drives found in docker-compose.yml"
            )]
        );
        assert!(!panel.selector.enabled);
        assert!(!panel.trigger.enabled);
        assert_eq!(panel.selector.selected_value(), None);
    }

    #[test]
    fn failure_shows_error_placeholder_and_stays_disabled() {
        let mut panel = ScanPanel::default();
        panel.apply_locations(&Err("connection refused".to_string()));

        assert_eq!(panel.selector.options()[0].label, "Error loading locations");
        assert!(!panel.selector.enabled);
        assert!(!panel.trigger.enabled);
    }

    #[test]
    fn disabled_selector_ignores_navigation() {
        let mut panel = ScanPanel::default();
        panel.selector.select_next();
        assert_eq!(panel.selector.selected_index(), 0);
    }

    #[test]
    fn trigger_busy_and_restore() {
        let mut trigger = TriggerControl::default();
        trigger.enable();
        trigger.set_busy();
        assert!(!trigger.enabled);
        assert_eq!(trigger.label(), "Scanning...");
        trigger.restore();
        assert!(trigger.enabled);
        assert_eq!(trigger.label(), "Scan Selected Directory");
    }
}
