//! Plain-text rendering of the month grid, the week list, the open shift
//! form and the configured shift times.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::models::settings::ShiftSettings;
use crate::models::shift::{format_time, ShiftCategory, ShiftRecord};
use crate::models::ui::ViewMode;
use crate::services::calendar::CalendarController;
use crate::services::shift::ShiftForm;
use crate::utils::date::{date_key, short_month_name, week_dates, WEEKDAY_NAMES};

const CELL_WIDTH: usize = 4;
const EMPTY_DAY: &str = "Sin turno";
const MISSING_TIME: &str = "--:--";

/// Render whichever view the controller is in, followed by the form of the
/// selected day when one is open.
pub fn render(calendar: &CalendarController, today: NaiveDate) -> String {
    let mut out = match calendar.view_mode() {
        ViewMode::Month => render_month(calendar, today),
        ViewMode::Week => render_week(calendar, today),
    };
    if let Some(form) = calendar.form() {
        out.push('\n');
        out.push_str(&render_form(form, calendar.settings()));
    }
    out
}

/// Month grid: one cell per day with the shift marker, `*` on today.
pub fn render_month(calendar: &CalendarController, today: NaiveDate) -> String {
    let mut lines = vec![calendar.period_label()];
    lines.push(
        WEEKDAY_NAMES
            .iter()
            .map(|name| format!("{:<width$}", name, width = CELL_WIDTH))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string(),
    );

    for week in calendar.month_grid().chunks(7) {
        let row = week
            .iter()
            .map(|cell| match cell {
                Some(date) => month_cell(*date, calendar.shift_for(*date), *date == today),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(row.trim_end().to_string());
    }

    finish(lines)
}

/// Week list: one line per day with the full shift details.
pub fn render_week(calendar: &CalendarController, today: NaiveDate) -> String {
    let mut lines = vec![calendar.period_label()];

    for (name, date) in WEEKDAY_NAMES.iter().zip(week_dates(calendar.anchor())) {
        let mark = if date == today { '*' } else { ' ' };
        let body = calendar
            .shift_for(date)
            .map(describe_shift)
            .unwrap_or_else(|| EMPTY_DAY.to_string());
        lines.push(format!(
            "{} {} {:>2} {}  {}",
            mark,
            name,
            date.day(),
            short_month_name(date.month0()),
            body
        ));
    }

    finish(lines)
}

/// `"M Mañana  T Tarde  ..."`
pub fn legend() -> String {
    ShiftCategory::ALL
        .iter()
        .map(|category| format!("{} {}", category.marker(), category.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Panel for the selected day's form.
///
/// In custom mode the category the times classify as is shown once both
/// times are filled in.
pub fn render_form(form: &ShiftForm, settings: &ShiftSettings) -> String {
    let title = if form.is_editing() { "Editar Turno" } else { "Nuevo Turno" };
    let mut lines = vec![format!("{} {}", title, date_key(form.date))];

    if form.use_custom_time {
        lines.push(format!(
            "Horario: {}-{}",
            time_or_placeholder(form.start_time),
            time_or_placeholder(form.end_time)
        ));
        if let Some(category) = form.detected_category() {
            lines.push(format!("Tipo de turno detectado: {}", category.label()));
        }
    } else {
        let mut line = format!("Turno: {}", form.category.label());
        if let Some(times) = settings.get(form.category) {
            line.push(' ');
            line.push_str(&times.to_string());
        }
        lines.push(line);
    }

    if !form.notes.trim().is_empty() {
        lines.push(format!("Anotaciones: {}", form.notes.trim()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Configured default times of every editable category.
pub fn render_settings(settings: &ShiftSettings) -> String {
    let mut lines = vec!["Horarios de turnos".to_string()];
    for category in ShiftSettings::EDITABLE {
        if let Some(times) = settings.get(category) {
            lines.push(format!("{:<7} {}", category.label(), times));
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn time_or_placeholder(time: Option<NaiveTime>) -> String {
    time.map(format_time).unwrap_or_else(|| MISSING_TIME.to_string())
}

fn month_cell(date: NaiveDate, shift: Option<&ShiftRecord>, is_today: bool) -> String {
    let marker = shift.map(|s| s.category.marker()).unwrap_or(' ');
    let today = if is_today { '*' } else { ' ' };
    format!("{:>2}{}{}", date.day(), marker, today)
}

fn describe_shift(shift: &ShiftRecord) -> String {
    let mut text = shift.category.label().to_string();
    let range = shift.time_range();
    if !range.is_empty() {
        text.push(' ');
        text.push_str(&range);
    }
    if let Some(notes) = &shift.notes {
        text.push_str("  ");
        text.push_str(notes);
    }
    text
}

fn finish(mut lines: Vec<String>) -> String {
    lines.push(String::new());
    lines.push(legend());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
