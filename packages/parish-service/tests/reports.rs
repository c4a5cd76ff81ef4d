use time::{Date, Month, OffsetDateTime};

use parish_domain::MetricsSearchType;
use parish_service::{
	metrics::{CurrencySums, MetricsResponse, SundayOfferingMetric},
	report,
};

fn sunday(date: Date, day_pen: f64, afternoon_pen: f64) -> SundayOfferingMetric {
	SundayOfferingMetric {
		date,
		day_pen,
		day_usd: 0.0,
		day_eur: 0.0,
		afternoon_pen,
		afternoon_usd: 0.0,
		afternoon_eur: 0.0,
		accumulated: CurrencySums {
			accumulated_offering_pen: day_pen + afternoon_pen,
			accumulated_offering_usd: 0.0,
			accumulated_offering_eur: 0.0,
		},
	}
}

fn date(year: i32, month: Month, day: u8) -> Date {
	Date::from_calendar_date(year, month, day).expect("Failed to build date.")
}

#[test]
fn sunday_report_totals_match_row_sums() {
	let response = MetricsResponse::SundayOfferings(vec![
		sunday(date(2_024, Month::June, 9), 40.0, 10.5),
		sunday(date(2_024, Month::June, 16), 20.0, 0.0),
	]);
	let document = report::build_metrics_report(
		MetricsSearchType::OfferingIncomeBySundayService,
		&response,
		OffsetDateTime::UNIX_EPOCH,
	);

	assert_eq!(document.sections.len(), 1);

	let table = &document.sections[0].table;

	assert_eq!(table.columns[0], "Sunday");
	assert_eq!(table.rows.len(), 2);
	assert_eq!(table.rows[0][1], "40.00");

	let footer = table.footer.as_ref().expect("Sunday table should carry totals.");

	assert_eq!(footer[1], "70.50");
	assert_eq!(footer[2], "0.00");
}

#[test]
fn headings_are_humanized_search_types() {
	let response = MetricsResponse::MembersByProportion(Vec::new());
	let document = report::build_metrics_report(
		MetricsSearchType::MembersByProportion,
		&response,
		OffsetDateTime::UNIX_EPOCH,
	);

	assert_eq!(document.sections[0].heading, "Members by proportion");
	assert_eq!(document.subtitle, "Members by proportion");
}

#[test]
fn empty_responses_produce_empty_tables_not_errors() {
	let response = MetricsResponse::ExpenseTypeTotals(Vec::new());
	let document = report::build_metrics_report(
		MetricsSearchType::ComparativeOfferingExpensesByType,
		&response,
		OffsetDateTime::UNIX_EPOCH,
	);
	let table = &document.sections[0].table;

	assert!(table.rows.is_empty());
	assert_eq!(table.columns, ["Type", "PEN", "USD", "EUR"]);
}

#[test]
fn document_serializes_with_rfc3339_timestamp() {
	let response = MetricsResponse::MembersByProportion(Vec::new());
	let document = report::build_metrics_report(
		MetricsSearchType::MembersByProportion,
		&response,
		OffsetDateTime::UNIX_EPOCH,
	);
	let json = serde_json::to_value(&document).expect("Failed to serialize document.");

	assert_eq!(json["generated_at"], "1970-01-01T00:00:00Z");
}
