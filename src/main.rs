// Shift Calendar
// Prints the month or week of recorded shifts
//
// Usage: shift-calendar [--week | --month | --settings] [YYYY-MM-DD]

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};

use shift_calendar::models::ui::ViewMode;
use shift_calendar::services::calendar::CalendarController;
use shift_calendar::services::config::AppConfig;
use shift_calendar::ui;
use shift_calendar::utils::date::parse_date_key;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Shift Calendar");

    let config = AppConfig::load_or_default();
    let today = Local::now().date_naive();

    let mut view_mode = config.view_mode;
    let mut anchor = today;
    let mut show_settings = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--week" => view_mode = ViewMode::Week,
            "--month" => view_mode = ViewMode::Month,
            "--settings" => show_settings = true,
            other => anchor = parse_anchor(other)?,
        }
    }

    let mut calendar = CalendarController::from_config(&config, anchor);
    calendar.set_view_mode(view_mode);

    if show_settings {
        print!("{}", ui::text::render_settings(calendar.settings()));
    } else {
        print!("{}", ui::render(&calendar, today));
    }
    Ok(())
}

fn parse_anchor(arg: &str) -> Result<NaiveDate> {
    match parse_date_key(arg) {
        Some(date) => Ok(date),
        None => bail!("expected a date as YYYY-MM-DD, got '{}'", arg),
    }
}
