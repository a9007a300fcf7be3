use crate::core::birthdays::{occurrence_in_window, UpcomingBirthdays, DEFAULT_WINDOW_DAYS};
use crate::domain::Record;
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    NotFound,
}

/// All contacts, keyed by name. Iteration follows first-insertion order and
/// replacing a contact keeps its slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.name().as_str() == name)
    }

    /// Stores `record` under its name, discarding any previous record with
    /// that name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::debug!("Replacing contact {}", record.name());
                self.records[index] = record;
            }
            None => {
                tracing::debug!("Adding contact {}", record.name());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let index = self.position(name)?;
        Some(&mut self.records[index])
    }

    pub fn delete(&mut self, name: &str) -> Deletion {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                tracing::debug!("Deleted contact {}", name);
                Deletion::Deleted
            }
            None => Deletion::NotFound,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays within the next seven days, counting from the local date.
    pub fn birthdays_in_next_week(&self) -> UpcomingBirthdays {
        self.upcoming_birthdays(Local::now().date_naive(), DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays in `[today, today + window_days)`, with each birthday moved
    /// into the year of `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> UpcomingBirthdays {
        let occurrences = self.records.iter().filter_map(|record| {
            let birthday = record.birthday()?;
            occurrence_in_window(birthday.date(), today, window_days)
                .map(|date| (date, record.name().as_str()))
        });

        let upcoming = UpcomingBirthdays::from_occurrences(occurrences);
        tracing::debug!(
            "Found birthdays on {} day(s) within {} day(s) of {}",
            upcoming.len(),
            window_days,
            today
        );
        upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration};

    fn contact(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    fn with_birthday(name: &str, birthday: NaiveDate) -> Record {
        let mut record = Record::new(name).unwrap();
        record
            .add_birthday(&birthday.format("%d.%m.%Y").to_string())
            .unwrap();
        record
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        let mut record = contact("John", "1234567890");
        record.add_birthday("01.02.1990").unwrap();
        book.add_record(record.clone());

        assert_eq!(book.find("John"), Some(&record));
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_record_overwrites_without_merge() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", "1111111111"));
        book.add_record(contact("Jane", "2222222222"));
        book.add_record(contact("John", "3333333333"));

        assert_eq!(book.len(), 2);
        let john = book.find("John").unwrap();
        assert_eq!(john.phones().len(), 1);
        assert_eq!(john.phones()[0].as_str(), "3333333333");

        // 覆寫後位置不變
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", "1234567890"));

        assert_eq!(book.delete("John"), Deletion::Deleted);
        assert!(book.find("John").is_none());
        assert_eq!(book.delete("John"), Deletion::NotFound);
        assert!(book.is_empty());
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", "1234567890"));

        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "5555555555")
            .unwrap();
        assert_eq!(
            book.find("John").unwrap().first_phone().unwrap().as_str(),
            "5555555555"
        );
    }

    #[test]
    fn test_today_included_and_ten_days_out_excluded() {
        let today = date(2025, 6, 12);
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Alice", date(1990, 6, 12)));
        book.add_record(with_birthday("Bob", date(1985, 6, 22)));
        book.add_record(contact("Carol", "1234567890"));

        let upcoming = book.upcoming_birthdays(today, 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming.get("Thursday").unwrap(), ["Alice"]);
    }

    #[test]
    fn test_same_day_keeps_insertion_order() {
        let today = date(2025, 6, 12);
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Zed", date(2001, 6, 14)));
        book.add_record(with_birthday("Amy", date(1970, 6, 14)));

        let upcoming = book.upcoming_birthdays(today, 7);
        assert_eq!(upcoming.get("Saturday").unwrap(), ["Zed", "Amy"]);
    }

    #[test]
    fn test_year_boundary_not_rolled_forward() {
        let today = date(2025, 12, 29);
        let mut book = AddressBook::new();
        book.add_record(with_birthday("NewYear", date(1999, 1, 1)));
        book.add_record(with_birthday("Eve", date(1999, 12, 31)));

        let upcoming = book.upcoming_birthdays(today, 7);
        assert!(upcoming.get("Thursday").is_none());
        assert_eq!(upcoming.get("Wednesday").unwrap(), ["Eve"]);
    }

    #[test]
    fn test_leap_day_skipped_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Leap", date(2000, 2, 29)));

        assert!(book.upcoming_birthdays(date(2025, 2, 25), 7).is_empty());
        assert_eq!(
            book.upcoming_birthdays(date(2024, 2, 25), 7)
                .get("Thursday")
                .unwrap(),
            ["Leap"]
        );
    }

    #[test]
    fn test_wide_window_groups_in_store_order() {
        let today = date(2025, 6, 12);
        let mut book = AddressBook::new();
        book.add_record(with_birthday("A", date(1990, 6, 20)));
        book.add_record(with_birthday("B", date(1991, 6, 13)));

        let upcoming = book.upcoming_birthdays(today, 14);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming.get("Friday").unwrap(), ["A", "B"]);
    }

    #[test]
    fn test_birthdays_in_next_week_uses_local_date() {
        let today = Local::now().date_naive();
        let past_year = today.year() - 30;
        let alice = today.with_year(past_year).unwrap_or(today);
        let bob = (today + Duration::days(10))
            .with_year(past_year)
            .unwrap_or(today + Duration::days(10));

        let mut book = AddressBook::new();
        book.add_record(with_birthday("Alice", alice));
        book.add_record(with_birthday("Bob", bob));

        let upcoming = book.birthdays_in_next_week();
        // 跨過午夜時兩次讀取的日期不同，此時不比對
        if Local::now().date_naive() != today {
            return;
        }
        let names: Vec<&String> = upcoming.iter().flat_map(|(_, names)| names).collect();

        assert!(names.iter().any(|n| n.as_str() == "Alice"));
        assert!(names.iter().all(|n| n.as_str() != "Bob"));
    }
}
