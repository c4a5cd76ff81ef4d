use time::{Date, Month, OffsetDateTime};
use uuid::Uuid;

use parish_domain::{
	DateWindow, OfferingIncomeSubtype, RecordStatus, SortDirection, window,
};
use parish_storage::{
	churches, db::Db, family_groups,
	models::{ChurchRow, OfferingIncomeRow, ZoneRow},
	offerings,
};
use parish_testkit::TestDatabase;

fn now() -> OffsetDateTime {
	OffsetDateTime::now_utc()
}

fn church_row(church_id: Uuid) -> ChurchRow {
	ChurchRow {
		church_id,
		church_name: format!("Church {church_id}"),
		abbreviated_church_name: "ICUP".to_string(),
		district: "Independencia".to_string(),
		urban_sector: "Payet".to_string(),
		is_anexe: false,
		record_status: "active".to_string(),
		created_at: now(),
		updated_at: now(),
	}
}

fn zone_row(zone_id: Uuid, church_id: Uuid, zone_name: &str) -> ZoneRow {
	ZoneRow {
		zone_id,
		zone_name: zone_name.to_string(),
		district: "Independencia".to_string(),
		supervisor_id: None,
		church_id,
		record_status: "active".to_string(),
		created_at: now(),
		updated_at: now(),
	}
}

fn income_row(
	church_id: Uuid,
	subtype: OfferingIncomeSubtype,
	amount: f64,
	currency: &str,
	date: Date,
) -> OfferingIncomeRow {
	OfferingIncomeRow {
		offering_income_id: Uuid::new_v4(),
		subtype: subtype.as_str().to_string(),
		category: None,
		amount,
		currency: currency.to_string(),
		date,
		shift: None,
		comments: None,
		church_id,
		family_group_id: None,
		zone_id: None,
		member_id: None,
		record_status: "active".to_string(),
		created_at: now(),
		updated_at: now(),
	}
}

async fn connect(test_db: &TestDatabase) -> Db {
	let cfg =
		parish_config::Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to test database.");

	db.ensure_schema().await.expect("Failed to apply schema.");

	db
}

fn date(year: i32, month: Month, day: u8) -> Date {
	Date::from_calendar_date(year, month, day).expect("Failed to build date.")
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn schema_applies_idempotently_and_churches_round_trip() {
	let Some(base_dsn) = parish_testkit::env_dsn() else {
		eprintln!("Skipping db smoke tests; set PARISH_PG_DSN to run this test.");

		return;
	};
	let test_db =
		TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;

	db.ensure_schema().await.expect("Failed to re-apply schema.");

	let church_id = Uuid::new_v4();

	churches::insert_church(&db, &church_row(church_id))
		.await
		.expect("Failed to insert church.");

	let found = churches::find_active_church(&db, church_id)
		.await
		.expect("Failed to query church.");

	assert!(found.is_some());

	let missing = churches::find_active_church(&db, Uuid::new_v4())
		.await
		.expect("Failed to query missing church.");

	assert!(missing.is_none());

	drop(db);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn duplicate_zone_name_is_a_unique_violation() {
	let Some(base_dsn) = parish_testkit::env_dsn() else {
		eprintln!("Skipping db smoke tests; set PARISH_PG_DSN to run this test.");

		return;
	};
	let test_db =
		TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;
	let church_id = Uuid::new_v4();

	churches::insert_church(&db, &church_row(church_id))
		.await
		.expect("Failed to insert church.");
	family_groups::insert_zone(&db, &zone_row(Uuid::new_v4(), church_id, "Zone A"))
		.await
		.expect("Failed to insert zone.");

	let err = family_groups::insert_zone(&db, &zone_row(Uuid::new_v4(), church_id, "Zone A"))
		.await
		.expect_err("Duplicate zone name should be rejected.");

	assert!(err.is_unique_violation());

	drop(db);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn income_queries_scope_by_window_subtype_and_status() {
	let Some(base_dsn) = parish_testkit::env_dsn() else {
		eprintln!("Skipping db smoke tests; set PARISH_PG_DSN to run this test.");

		return;
	};
	let test_db =
		TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;
	let church_id = Uuid::new_v4();

	churches::insert_church(&db, &church_row(church_id))
		.await
		.expect("Failed to insert church.");

	let june = window::month_window(2_024, Month::June).expect("Failed to resolve window.");

	offerings::insert_income(
		&db,
		&income_row(church_id, OfferingIncomeSubtype::YouthService, 40.0, "PEN", date(
			2_024,
			Month::June,
			9,
		)),
	)
	.await
	.expect("Failed to insert income.");
	offerings::insert_income(
		&db,
		&income_row(church_id, OfferingIncomeSubtype::YouthService, 25.5, "USD", date(
			2_024,
			Month::June,
			23,
		)),
	)
	.await
	.expect("Failed to insert income.");
	// Outside the window.
	offerings::insert_income(
		&db,
		&income_row(church_id, OfferingIncomeSubtype::YouthService, 99.0, "PEN", date(
			2_024,
			Month::July,
			7,
		)),
	)
	.await
	.expect("Failed to insert income.");
	// Different subtype.
	offerings::insert_income(
		&db,
		&income_row(church_id, OfferingIncomeSubtype::Special, 15.0, "PEN", date(
			2_024,
			Month::June,
			16,
		)),
	)
	.await
	.expect("Failed to insert income.");

	// Soft-deleted row inside the window.
	let mut inactive = income_row(church_id, OfferingIncomeSubtype::YouthService, 77.0, "PEN", date(
		2_024,
		Month::June,
		2,
	));

	inactive.record_status = "inactive".to_string();

	offerings::insert_income(&db, &inactive).await.expect("Failed to insert income.");

	let rows = offerings::list_income_detail(
		&db,
		church_id,
		&[OfferingIncomeSubtype::YouthService],
		june,
		SortDirection::Asc,
		None,
		None,
	)
	.await
	.expect("Failed to list income.");

	assert_eq!(rows.len(), 2);
	assert!(rows.iter().all(|row| row.subtype == "youth_service"));
	assert!(rows.iter().all(|row| june.contains(row.date)));

	let sums = offerings::currency_income_sums(
		&db,
		church_id,
		june,
		Some(&[OfferingIncomeSubtype::YouthService]),
	)
	.await
	.expect("Failed to sum income.");
	let pen = sums.iter().find(|row| row.currency == "PEN").expect("Missing PEN sum.");
	let usd = sums.iter().find(|row| row.currency == "USD").expect("Missing USD sum.");

	assert_eq!(pen.total, 40.0);
	assert_eq!(usd.total, 25.5);

	let counts = offerings::income_count_by_status(&db, church_id, RecordStatus::Inactive)
		.await
		.expect("Failed to count income.");

	assert_eq!(counts, 1);

	drop(db);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[test]
fn schema_renders_every_table() {
	let sql = parish_storage::schema::render_schema();

	for table in [
		"churches",
		"pastors",
		"copastors",
		"supervisors",
		"zones",
		"preachers",
		"family_groups",
		"disciples",
		"offering_income",
		"offering_expenses",
	] {
		assert!(
			sql.contains(&format!("CREATE TABLE IF NOT EXISTS {table}")),
			"schema is missing table {table}",
		);
	}

	assert!(!sql.contains("\\ir "), "schema still contains unexpanded includes");
}

#[test]
fn window_helper_is_inclusive() {
	let june = window::month_window(2_024, Month::June).expect("Failed to resolve window.");

	assert_eq!(june, DateWindow {
		start: date(2_024, Month::June, 1),
		end: date(2_024, Month::June, 30),
	});
}
