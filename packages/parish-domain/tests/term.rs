use time::Month;
use uuid::Uuid;

use parish_domain::{
	Currency,
	term::{
		ChurchCurrencyYearTerm, ChurchDistrictTerm, ChurchMonthRangeYearTerm, ChurchMonthYearTerm,
		ChurchTerm, ChurchYearTerm, ChurchZoneMonthYearTerm, TermError,
	},
};

fn id(n: u128) -> Uuid {
	Uuid::from_u128(n)
}

#[test]
fn parses_church_term() {
	let term = format!("{}", id(1));
	let parsed = ChurchTerm::parse(&term).expect("Failed to parse church term.");

	assert_eq!(parsed.church_id, id(1));
}

#[test]
fn parses_church_month_year_term() {
	let term = format!("{}&June&2024", id(1));
	let parsed = ChurchMonthYearTerm::parse(&term).expect("Failed to parse term.");

	assert_eq!(parsed.church_id, id(1));
	assert_eq!(parsed.month, Month::June);
	assert_eq!(parsed.year, 2_024);
}

#[test]
fn month_names_are_case_insensitive() {
	let term = format!("{}&jUnE&2024", id(1));

	assert!(ChurchMonthYearTerm::parse(&term).is_ok());
}

#[test]
fn parses_month_range_term() {
	let term = format!("{}&March&July&2023", id(2));
	let parsed = ChurchMonthRangeYearTerm::parse(&term).expect("Failed to parse term.");

	assert_eq!(parsed.start_month, Month::March);
	assert_eq!(parsed.end_month, Month::July);
	assert_eq!(parsed.year, 2_023);
}

#[test]
fn rejects_inverted_month_range() {
	let term = format!("{}&July&March&2023", id(2));

	assert_eq!(
		ChurchMonthRangeYearTerm::parse(&term),
		Err(TermError::InvertedMonthRange { start: "July", end: "March" }),
	);
}

#[test]
fn parses_currency_year_term() {
	let term = format!("{}&USD&2024", id(3));
	let parsed = ChurchCurrencyYearTerm::parse(&term).expect("Failed to parse term.");

	assert_eq!(parsed.currency, Currency::Usd);
}

#[test]
fn rejects_unknown_currency() {
	let term = format!("{}&GBP&2024", id(3));

	assert_eq!(
		ChurchCurrencyYearTerm::parse(&term),
		Err(TermError::InvalidCurrency { position: 2 }),
	);
}

#[test]
fn rejects_empty_term() {
	assert_eq!(ChurchTerm::parse("   "), Err(TermError::Empty));
}

#[test]
fn rejects_wrong_arity() {
	let term = format!("{}&June", id(1));

	assert_eq!(
		ChurchMonthYearTerm::parse(&term),
		Err(TermError::Arity { expected: 3, actual: 2 }),
	);
}

#[test]
fn rejects_malformed_ids() {
	assert_eq!(
		ChurchYearTerm::parse("not-a-uuid&2024"),
		Err(TermError::InvalidId { position: 1, label: "church" }),
	);

	let term = format!("{}&also-not-a-uuid&June&2024", id(1));

	assert_eq!(
		ChurchZoneMonthYearTerm::parse(&term),
		Err(TermError::InvalidId { position: 2, label: "zone" }),
	);
}

#[test]
fn rejects_unknown_month_name() {
	let term = format!("{}&Juneteenth&2024", id(1));

	assert_eq!(ChurchMonthYearTerm::parse(&term), Err(TermError::InvalidMonth { position: 2 }));
}

#[test]
fn rejects_out_of_range_years() {
	for year in ["1899", "2101", "24", "twenty"] {
		let term = format!("{}&{year}", id(1));

		assert_eq!(
			ChurchYearTerm::parse(&term),
			Err(TermError::InvalidYear { position: 2 }),
			"year {year} should be rejected",
		);
	}
}

#[test]
fn rejects_empty_district() {
	let term = format!("{}&", id(1));

	assert_eq!(ChurchDistrictTerm::parse(&term), Err(TermError::EmptyDistrict { position: 2 }));
}

#[test]
fn trims_whitespace_around_positions() {
	let term = format!(" {} & June & 2024 ", id(1));

	assert!(ChurchMonthYearTerm::parse(&term).is_ok());
}
