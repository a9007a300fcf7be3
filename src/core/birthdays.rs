use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Moves a birthday into `year`. Returns `None` for 29 February in a
/// non-leap year.
pub fn reanchor(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
}

/// Whether `birthday`, moved into the year of `today`, falls inside
/// `[today, today + window_days)`. Birthdays already passed this year are
/// not carried into the next one.
pub fn occurrence_in_window(
    birthday: NaiveDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = reanchor(birthday, today.year())?;
    let window_end = today + Duration::days(i64::from(window_days));
    (today <= occurrence && occurrence < window_end).then_some(occurrence)
}

/// Names grouped by the weekday of their upcoming birthday. Weekdays are kept
/// in order of their earliest date; names keep the order in which the store
/// yielded them, even when a wide window puts several dates on one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    days: Vec<(String, Vec<String>)>,
}

impl UpcomingBirthdays {
    pub(crate) fn from_occurrences<'a>(
        occurrences: impl IntoIterator<Item = (NaiveDate, &'a str)>,
    ) -> Self {
        // (星期名稱, 最早日期, 名字)
        let mut grouped: Vec<(String, NaiveDate, Vec<String>)> = Vec::new();

        for (date, name) in occurrences {
            let day = date.format("%A").to_string();
            match grouped.iter_mut().find(|(d, _, _)| *d == day) {
                Some((_, first, names)) => {
                    *first = (*first).min(date);
                    names.push(name.to_string());
                }
                None => grouped.push((day, date, vec![name.to_string()])),
            }
        }

        grouped.sort_by_key(|(_, first, _)| *first);

        Self {
            days: grouped
                .into_iter()
                .map(|(day, _, names)| (day, names))
                .collect(),
        }
    }

    /// Names whose birthday falls on `weekday` ("Monday", "Tuesday", ...).
    pub fn get(&self, weekday: &str) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(day, _)| day == weekday)
            .map(|(_, names)| names.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.days
            .iter()
            .map(|(day, names)| (day.as_str(), names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(day, names)| format!("{}: {}", day, names.join(", ")))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}
