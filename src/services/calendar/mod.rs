//! Calendar controller: the single owner of all calendar state.
//!
//! Holds the displayed period, the recorded shifts, the shift settings and
//! the form of the currently selected day. A presentation layer reads from
//! it and forwards user actions to its methods.

mod navigation;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::settings::{SettingsError, ShiftSettings};
use crate::models::shift::{ShiftCategory, ShiftRecord, ShiftTimes};
use crate::models::ui::ViewMode;
use crate::services::config::AppConfig;
use crate::services::shift::{ShiftForm, ShiftFormError, ShiftRegistry};
use crate::utils::date::{
    days_in_month, first_of_month, first_weekday_of_month, month_label, week_dates,
    week_range_label,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("no day is selected")]
    NothingSelected,
    #[error(transparent)]
    Form(#[from] ShiftFormError),
}

pub struct CalendarController {
    anchor: NaiveDate,
    view_mode: ViewMode,
    registry: ShiftRegistry,
    settings: ShiftSettings,
    form: Option<ShiftForm>,
}

impl CalendarController {
    pub fn new(anchor: NaiveDate, view_mode: ViewMode, settings: ShiftSettings) -> Self {
        Self {
            anchor,
            view_mode,
            registry: ShiftRegistry::new(),
            settings,
            form: None,
        }
    }

    pub fn from_config(config: &AppConfig, today: NaiveDate) -> Self {
        Self::new(today, config.view_mode, config.shift_times.clone())
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        self.anchor = anchor;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        log::debug!("View mode {:?} -> {:?}", self.view_mode, view_mode);
        self.view_mode = view_mode;
    }

    pub fn registry(&self) -> &ShiftRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &ShiftSettings {
        &self.settings
    }

    /// Header text for the displayed period.
    pub fn period_label(&self) -> String {
        match self.view_mode {
            ViewMode::Month => month_label(self.anchor.year(), self.anchor.month0()),
            ViewMode::Week => week_range_label(self.anchor),
        }
    }

    /// Cells of the month grid: blanks before the 1st (weeks start on
    /// Monday) followed by every day of the month.
    pub fn month_grid(&self) -> Vec<Option<NaiveDate>> {
        let (year, month0) = (self.anchor.year(), self.anchor.month0());
        let leading = first_weekday_of_month(year, month0) as usize;
        let first = first_of_month(year, month0);

        let days = first.iter_days().take(days_in_month(year, month0) as usize);

        let mut cells = vec![None; leading];
        cells.extend(days.map(Some));
        cells
    }

    /// Every date shown by the current view.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        match self.view_mode {
            ViewMode::Month => self.month_grid().into_iter().flatten().collect(),
            ViewMode::Week => week_dates(self.anchor).to_vec(),
        }
    }

    pub fn shift_for(&self, date: NaiveDate) -> Option<&ShiftRecord> {
        self.registry.get(date)
    }

    /// Select a day and open its form, pre-filled when a shift exists.
    pub fn select_date(&mut self, date: NaiveDate) -> &mut ShiftForm {
        let form = match self.registry.get(date) {
            Some(existing) => ShiftForm::from_record(existing),
            None => ShiftForm::new(date),
        };
        log::debug!("Selected {} (editing: {})", form.date, form.is_editing());
        self.form.insert(form)
    }

    pub fn form(&self) -> Option<&ShiftForm> {
        self.form.as_ref()
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Store the selected day's shift and close the form.
    ///
    /// When the form is incomplete nothing changes and the form stays open.
    pub fn save_shift(&mut self) -> Result<ShiftRecord, SaveError> {
        let form = self.form.as_ref().ok_or(SaveError::NothingSelected)?;
        let record = form.build_record(&self.settings)?;

        log::info!(
            "Saving {} shift for {} {}",
            record.category.as_str(),
            record.date,
            record.time_range()
        );
        self.registry.upsert(record.date, record.clone());
        self.form = None;
        Ok(record)
    }

    /// Delete the selected day's shift and close the form.
    pub fn delete_selected_shift(&mut self) -> Option<ShiftRecord> {
        let form = self.form.take()?;
        let removed = self.registry.remove(form.date);
        if removed.is_some() {
            log::info!("Deleted shift for {}", form.date);
        }
        removed
    }

    pub fn update_shift_times(
        &mut self,
        category: ShiftCategory,
        times: ShiftTimes,
    ) -> Result<(), SettingsError> {
        self.settings.set(category, times)?;
        log::info!("Default times for {} set to {}", category.as_str(), times);
        Ok(())
    }
}
