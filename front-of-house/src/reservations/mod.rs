//! Reservation views: the per-date list and the calendar

pub mod calendar;
pub mod schedule;

pub use calendar::{CalendarDay, MonthCursor, MonthPage, calendar_months};
pub use schedule::{
    DaySummary, DatedReservation, available_dates, default_date, reservations_on, summarize_day,
};
