use time::{Date, Month};

/// Inclusive calendar window resolved from a term's month/year components.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateWindow {
	pub start: Date,
	pub end: Date,
}
impl DateWindow {
	pub fn contains(&self, date: Date) -> bool {
		self.start <= date && date <= self.end
	}
}

pub fn month_from_name(name: &str) -> Option<Month> {
	let month = match name.trim().to_ascii_lowercase().as_str() {
		"january" => Month::January,
		"february" => Month::February,
		"march" => Month::March,
		"april" => Month::April,
		"may" => Month::May,
		"june" => Month::June,
		"july" => Month::July,
		"august" => Month::August,
		"september" => Month::September,
		"october" => Month::October,
		"november" => Month::November,
		"december" => Month::December,
		_ => return None,
	};

	Some(month)
}

pub fn month_name(month: Month) -> &'static str {
	match month {
		Month::January => "January",
		Month::February => "February",
		Month::March => "March",
		Month::April => "April",
		Month::May => "May",
		Month::June => "June",
		Month::July => "July",
		Month::August => "August",
		Month::September => "September",
		Month::October => "October",
		Month::November => "November",
		Month::December => "December",
	}
}

pub fn month_window(year: i32, month: Month) -> Option<DateWindow> {
	let start = Date::from_calendar_date(year, month, 1).ok()?;
	let end = match month.next() {
		Month::January => Date::from_calendar_date(year, Month::December, 31).ok()?,
		next => Date::from_calendar_date(year, next, 1).ok()?.previous_day()?,
	};

	Some(DateWindow { start, end })
}

pub fn month_range_window(year: i32, start_month: Month, end_month: Month) -> Option<DateWindow> {
	if u8::from(start_month) > u8::from(end_month) {
		return None;
	}

	let start = month_window(year, start_month)?.start;
	let end = month_window(year, end_month)?.end;

	Some(DateWindow { start, end })
}

pub fn year_window(year: i32) -> Option<DateWindow> {
	let start = Date::from_calendar_date(year, Month::January, 1).ok()?;
	let end = Date::from_calendar_date(year, Month::December, 31).ok()?;

	Some(DateWindow { start, end })
}
