use time::{Date, Month};

use parish_domain::{
	MetricsSearchType, SortDirection,
	member::{self, MemberAgeCategory},
	service_time, window,
};

fn date(year: i32, month: Month, day: u8) -> Date {
	Date::from_calendar_date(year, month, day).expect("Failed to build date.")
}

#[test]
fn resolves_month_window() {
	let window = window::month_window(2_024, Month::June).expect("Failed to resolve window.");

	assert_eq!(window.start, date(2_024, Month::June, 1));
	assert_eq!(window.end, date(2_024, Month::June, 30));
}

#[test]
fn resolves_leap_february_window() {
	let window = window::month_window(2_024, Month::February).expect("Failed to resolve window.");

	assert_eq!(window.end, date(2_024, Month::February, 29));

	let window = window::month_window(2_023, Month::February).expect("Failed to resolve window.");

	assert_eq!(window.end, date(2_023, Month::February, 28));
}

#[test]
fn resolves_december_window() {
	let window = window::month_window(2_024, Month::December).expect("Failed to resolve window.");

	assert_eq!(window.end, date(2_024, Month::December, 31));
}

#[test]
fn resolves_month_range_window() {
	let window = window::month_range_window(2_024, Month::March, Month::May)
		.expect("Failed to resolve window.");

	assert_eq!(window.start, date(2_024, Month::March, 1));
	assert_eq!(window.end, date(2_024, Month::May, 31));
	assert!(window.contains(date(2_024, Month::April, 15)));
	assert!(!window.contains(date(2_024, Month::June, 1)));
}

#[test]
fn rejects_inverted_month_range_window() {
	assert!(window::month_range_window(2_024, Month::May, Month::March).is_none());
}

#[test]
fn converts_service_time_to_minutes() {
	assert_eq!(service_time::service_time_minutes("17:00"), Some(1_020));
	assert_eq!(service_time::service_time_minutes("00:05"), Some(5));
	assert_eq!(service_time::service_time_minutes(" 9:30 "), Some(570));
	assert_eq!(service_time::service_time_minutes("24:00"), None);
	assert_eq!(service_time::service_time_minutes("12:60"), None);
	assert_eq!(service_time::service_time_minutes("noon"), None);
}

#[test]
fn computes_age_at_date() {
	let birth = date(1_990, Month::June, 15);

	assert_eq!(member::age_on(birth, date(2_024, Month::June, 14)), 33);
	assert_eq!(member::age_on(birth, date(2_024, Month::June, 15)), 34);
	assert_eq!(member::age_on(birth, date(1_989, Month::January, 1)), 0);
}

#[test]
fn buckets_age_categories() {
	assert_eq!(MemberAgeCategory::from_age(0), MemberAgeCategory::Child);
	assert_eq!(MemberAgeCategory::from_age(12), MemberAgeCategory::Child);
	assert_eq!(MemberAgeCategory::from_age(13), MemberAgeCategory::Teenager);
	assert_eq!(MemberAgeCategory::from_age(18), MemberAgeCategory::Youth);
	assert_eq!(MemberAgeCategory::from_age(30), MemberAgeCategory::Adult);
	assert_eq!(MemberAgeCategory::from_age(50), MemberAgeCategory::MiddleAged);
	assert_eq!(MemberAgeCategory::from_age(65), MemberAgeCategory::Senior);
	assert_eq!(MemberAgeCategory::from_age(90), MemberAgeCategory::Senior);
}

#[test]
fn search_types_use_kebab_case_on_the_wire() {
	let json = serde_json::to_string(&MetricsSearchType::OperationalOfferingExpenses)
		.expect("Failed to serialize search type.");

	assert_eq!(json, "\"operational-offering-expenses\"");

	let parsed: MetricsSearchType = serde_json::from_str("\"top-family-groups-offerings\"")
		.expect("Failed to deserialize search type.");

	assert_eq!(parsed, MetricsSearchType::TopFamilyGroupsOfferings);
	assert_eq!(parsed.as_str(), "top-family-groups-offerings");
}

#[test]
fn sort_direction_defaults_to_desc() {
	assert_eq!(SortDirection::default(), SortDirection::Desc);
	assert_eq!(SortDirection::Asc.as_sql(), "ASC");
}
