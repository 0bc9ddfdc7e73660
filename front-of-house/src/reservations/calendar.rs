//! Month pages for the date picker
//!
//! Covers every month from the earliest to the latest reservation date.
//! Weeks start on Sunday.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// One day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub has_reservations: bool,
    pub is_selected: bool,
}

/// One month of day cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthPage {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
    /// Empty cells before the 1st (Sunday = 0)
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl MonthPage {
    fn build(first: NaiveDate, dates: &[NaiveDate], selected: Option<NaiveDate>) -> Self {
        let days = first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(|date| CalendarDay {
                date,
                has_reservations: dates.binary_search(&date).is_ok(),
                is_selected: selected == Some(date),
            })
            .collect();
        Self {
            year: first.year(),
            month: first.month(),
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.year == date.year() && self.month == date.month()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Month pages spanning `dates`
///
/// `dates` must be sorted ascending, as returned by `available_dates`.
pub fn calendar_months(dates: &[NaiveDate], selected: Option<NaiveDate>) -> Vec<MonthPage> {
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return Vec::new();
    };
    let end = first_of_month(*last);

    let mut pages = Vec::new();
    let mut cursor = first_of_month(*first);
    while cursor <= end {
        pages.push(MonthPage::build(cursor, dates, selected));
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    pages
}

/// Which month page is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    index: usize,
    len: usize,
}

impl MonthCursor {
    /// Start on the page holding `selected`, or the first page
    pub fn new(pages: &[MonthPage], selected: Option<NaiveDate>) -> Self {
        let index = selected
            .and_then(|date| pages.iter().position(|p| p.contains(date)))
            .unwrap_or(0);
        Self {
            index,
            len: pages.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Step back one month; stays put on the first page
    pub fn previous_month(&mut self) -> usize {
        if self.has_previous() {
            self.index -= 1;
        }
        self.index
    }

    /// Step forward one month; stays put on the last page
    pub fn next_month(&mut self) -> usize {
        if self.has_next() {
            self.index += 1;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_dates_no_pages() {
        assert!(calendar_months(&[], None).is_empty());
    }

    #[test]
    fn test_spans_months_inclusive() {
        let dates = [date(2024, 5, 20), date(2024, 7, 2)];
        let pages = calendar_months(&dates, None);
        let months: Vec<_> = pages.iter().map(|p| (p.year, p.month)).collect();
        assert_eq!(months, vec![(2024, 5), (2024, 6), (2024, 7)]);
        assert!(pages[1].days.iter().all(|d| !d.has_reservations));
    }

    #[test]
    fn test_crosses_year_boundary() {
        let dates = [date(2024, 12, 31), date(2025, 1, 1)];
        let pages = calendar_months(&dates, None);
        assert_eq!(pages.len(), 2);
        assert_eq!((pages[1].year, pages[1].month), (2025, 1));
    }

    #[test]
    fn test_month_page_layout() {
        let dates = [date(2024, 5, 20)];
        let pages = calendar_months(&dates, Some(date(2024, 5, 20)));
        let may = &pages[0];
        // 2024-05-01 is a Wednesday
        assert_eq!(may.leading_blanks, 3);
        assert_eq!(may.days.len(), 31);
        let marked: Vec<_> = may.days.iter().filter(|d| d.has_reservations).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].is_selected);
        assert_eq!(may.days.iter().filter(|d| d.is_selected).count(), 1);
    }

    #[test]
    fn test_february_leap_year() {
        let pages = calendar_months(&[date(2024, 2, 10)], None);
        assert_eq!(pages[0].days.len(), 29);
    }

    #[test]
    fn test_cursor_starts_on_selected_and_clamps() {
        let dates = [date(2024, 5, 20), date(2024, 6, 3), date(2024, 7, 2)];
        let pages = calendar_months(&dates, None);

        let mut cursor = MonthCursor::new(&pages, Some(date(2024, 6, 3)));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.next_month(), 2);
        assert_eq!(cursor.next_month(), 2);
        assert!(!cursor.has_next());
        assert_eq!(cursor.previous_month(), 1);
        assert_eq!(cursor.previous_month(), 0);
        assert_eq!(cursor.previous_month(), 0);

        let unknown = MonthCursor::new(&pages, Some(date(2023, 1, 1)));
        assert_eq!(unknown.index(), 0);
    }
}
