//! Typed grammar for the ampersand-delimited positional search term. Each
//! search type parses its term into one of these structs at the request
//! boundary; nothing downstream touches positional indices.

use time::Month;
use uuid::Uuid;

use crate::{offering::Currency, window};

pub type Result<T, E = TermError> = std::result::Result<T, E>;

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TermError {
	#[error("Term must not be empty.")]
	Empty,
	#[error("Term expects {expected} '&'-separated values, got {actual}.")]
	Arity { expected: usize, actual: usize },
	#[error("Term position {position} ({label}) is not a valid id.")]
	InvalidId { position: usize, label: &'static str },
	#[error("Term position {position} is not a known month name.")]
	InvalidMonth { position: usize },
	#[error("Term position {position} is not a year between 1900 and 2100.")]
	InvalidYear { position: usize },
	#[error("Term position {position} is not a known currency.")]
	InvalidCurrency { position: usize },
	#[error("Term position {position} (district) must not be empty.")]
	EmptyDistrict { position: usize },
	#[error("Term month range is inverted: {start} comes after {end}.")]
	InvertedMonthRange { start: &'static str, end: &'static str },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChurchTerm {
	pub church_id: Uuid,
}
impl ChurchTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 1)?;

		Ok(Self { church_id: parse_id(&parts, 0, "church")? })
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChurchYearTerm {
	pub church_id: Uuid,
	pub year: i32,
}
impl ChurchYearTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 2)?;

		Ok(Self { church_id: parse_id(&parts, 0, "church")?, year: parse_year(&parts, 1)? })
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChurchMonthYearTerm {
	pub church_id: Uuid,
	pub month: Month,
	pub year: i32,
}
impl ChurchMonthYearTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 3)?;

		Ok(Self {
			church_id: parse_id(&parts, 0, "church")?,
			month: parse_month(&parts, 1)?,
			year: parse_year(&parts, 2)?,
		})
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChurchZoneMonthYearTerm {
	pub church_id: Uuid,
	pub zone_id: Uuid,
	pub month: Month,
	pub year: i32,
}
impl ChurchZoneMonthYearTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 4)?;

		Ok(Self {
			church_id: parse_id(&parts, 0, "church")?,
			zone_id: parse_id(&parts, 1, "zone")?,
			month: parse_month(&parts, 2)?,
			year: parse_year(&parts, 3)?,
		})
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChurchZoneTerm {
	pub church_id: Uuid,
	pub zone_id: Uuid,
}
impl ChurchZoneTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 2)?;

		Ok(Self {
			church_id: parse_id(&parts, 0, "church")?,
			zone_id: parse_id(&parts, 1, "zone")?,
		})
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChurchCopastorTerm {
	pub church_id: Uuid,
	pub copastor_id: Uuid,
}
impl ChurchCopastorTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 2)?;

		Ok(Self {
			church_id: parse_id(&parts, 0, "church")?,
			copastor_id: parse_id(&parts, 1, "copastor")?,
		})
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChurchDistrictTerm {
	pub church_id: Uuid,
	pub district: String,
}
impl ChurchDistrictTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 2)?;

		if parts[1].is_empty() {
			return Err(TermError::EmptyDistrict { position: 2 });
		}

		Ok(Self { church_id: parse_id(&parts, 0, "church")?, district: parts[1].to_string() })
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChurchMonthRangeYearTerm {
	pub church_id: Uuid,
	pub start_month: Month,
	pub end_month: Month,
	pub year: i32,
}
impl ChurchMonthRangeYearTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 4)?;
		let church_id = parse_id(&parts, 0, "church")?;
		let start_month = parse_month(&parts, 1)?;
		let end_month = parse_month(&parts, 2)?;
		let year = parse_year(&parts, 3)?;

		if u8::from(start_month) > u8::from(end_month) {
			return Err(TermError::InvertedMonthRange {
				start: window::month_name(start_month),
				end: window::month_name(end_month),
			});
		}

		Ok(Self { church_id, start_month, end_month, year })
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChurchCurrencyYearTerm {
	pub church_id: Uuid,
	pub currency: Currency,
	pub year: i32,
}
impl ChurchCurrencyYearTerm {
	pub fn parse(term: &str) -> Result<Self> {
		let parts = split(term, 3)?;
		let church_id = parse_id(&parts, 0, "church")?;
		let currency =
			Currency::parse(parts[1]).ok_or(TermError::InvalidCurrency { position: 2 })?;

		Ok(Self { church_id, currency, year: parse_year(&parts, 2)? })
	}
}

fn split(term: &str, expected: usize) -> Result<Vec<&str>> {
	if term.trim().is_empty() {
		return Err(TermError::Empty);
	}

	let parts = term.split('&').map(str::trim).collect::<Vec<_>>();

	if parts.len() != expected {
		return Err(TermError::Arity { expected, actual: parts.len() });
	}

	Ok(parts)
}

fn parse_id(parts: &[&str], index: usize, label: &'static str) -> Result<Uuid> {
	parts[index].parse().map_err(|_| TermError::InvalidId { position: index + 1, label })
}

fn parse_month(parts: &[&str], index: usize) -> Result<Month> {
	window::month_from_name(parts[index]).ok_or(TermError::InvalidMonth { position: index + 1 })
}

fn parse_year(parts: &[&str], index: usize) -> Result<i32> {
	let year: i32 =
		parts[index].parse().map_err(|_| TermError::InvalidYear { position: index + 1 })?;

	if !YEAR_RANGE.contains(&year) {
		return Err(TermError::InvalidYear { position: index + 1 });
	}

	Ok(year)
}
