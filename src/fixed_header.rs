//! Fixed Header State
//!
//! Settings record for the sticky header and the scroll tracking that
//! decides when it sticks or hides.

use crate::models::{FixedHeaderConfig, FixedStatus};

/// Default header settings
pub fn create_data() -> FixedHeaderConfig {
    FixedHeaderConfig {
        threshold: 0,
        header_class: "vue-fixed-header".to_string(),
        fixed_class: "vue-fixed-header--isFixed".to_string(),
        hide_scroll_up: false,
    }
}

/// Initial state of the navigation view.
/// `props_data` drives the header, `form_data` backs the settings form.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub fixed_status: FixedStatus,
    pub props_data: FixedHeaderConfig,
    pub form_data: FixedHeaderConfig,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            fixed_status: FixedStatus::default(),
            props_data: create_data(),
            form_data: create_data(),
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Scroll tracking for one header
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderScroll {
    last_y: f64,
    pub is_fixed: bool,
    pub hidden: bool,
}

impl HeaderScroll {
    /// Feed a new vertical scroll offset
    pub fn on_scroll(&mut self, config: &FixedHeaderConfig, y: f64) {
        let scrolling_up = y < self.last_y;
        self.is_fixed = y > f64::from(config.threshold);
        self.hidden = config.hide_scroll_up && self.is_fixed && scrolling_up;
        self.last_y = y;
    }
}
