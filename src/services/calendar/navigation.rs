use chrono::Duration;

use super::CalendarController;
use crate::models::ui::ViewMode;
use crate::utils::date::shift_month;

impl CalendarController {
    /// Month view jumps to the 1st of the previous month, week view one week back.
    pub fn navigate_previous(&mut self) {
        self.anchor = match self.view_mode {
            ViewMode::Month => shift_month(self.anchor, -1),
            ViewMode::Week => self.anchor - Duration::weeks(1),
        };
        log::debug!("Navigated back to {}", self.anchor);
    }

    pub fn navigate_next(&mut self) {
        self.anchor = match self.view_mode {
            ViewMode::Month => shift_month(self.anchor, 1),
            ViewMode::Week => self.anchor + Duration::weeks(1),
        };
        log::debug!("Navigated forward to {}", self.anchor);
    }
}
