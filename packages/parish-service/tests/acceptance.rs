use time::{Date, Month, OffsetDateTime};
use uuid::Uuid;

use parish_config::Config;
use parish_domain::{MetricsSearchType, OfferingIncomeSubtype, SortDirection};
use parish_service::{MetricsRequest, MetricsResponse, ParishService};
use parish_storage::{
	churches, db::Db, family_groups,
	models::{ChurchRow, FamilyGroupRow, OfferingExpenseRow, OfferingIncomeRow, ZoneRow},
	offerings,
};
use parish_testkit::TestDatabase;

fn now() -> OffsetDateTime {
	OffsetDateTime::now_utc()
}

fn date(year: i32, month: Month, day: u8) -> Date {
	Date::from_calendar_date(year, month, day).expect("Failed to build date.")
}

fn test_config(dsn: String) -> Config {
	Config {
		service: parish_config::Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		storage: parish_config::Storage {
			postgres: parish_config::Postgres { dsn, pool_max_conns: 2 },
		},
		metrics: Default::default(),
		security: Default::default(),
	}
}

struct Fixture {
	service: ParishService,
	church_id: Uuid,
	zone_id: Uuid,
	group_a: Uuid,
	group_b: Uuid,
}

async fn seed(test_db: &TestDatabase) -> Fixture {
	let cfg = test_config(test_db.dsn().to_string());
	let db = Db::connect(&cfg.storage.postgres).await.expect("Failed to connect.");

	db.ensure_schema().await.expect("Failed to apply schema.");

	let church_id = Uuid::new_v4();
	let zone_id = Uuid::new_v4();
	let group_a = Uuid::new_v4();
	let group_b = Uuid::new_v4();

	churches::insert_church(&db, &ChurchRow {
		church_id,
		church_name: "Iglesia Central".to_string(),
		abbreviated_church_name: "ICUP".to_string(),
		district: "Independencia".to_string(),
		urban_sector: "Payet".to_string(),
		is_anexe: false,
		record_status: "active".to_string(),
		created_at: now(),
		updated_at: now(),
	})
	.await
	.expect("Failed to insert church.");

	family_groups::insert_zone(&db, &ZoneRow {
		zone_id,
		zone_name: "Zone A".to_string(),
		district: "Independencia".to_string(),
		supervisor_id: None,
		church_id,
		record_status: "active".to_string(),
		created_at: now(),
		updated_at: now(),
	})
	.await
	.expect("Failed to insert zone.");

	for (group_id, code, number) in [(group_a, "A-1", 1), (group_b, "A-2", 2)] {
		family_groups::insert_family_group(&db, &FamilyGroupRow {
			family_group_id: group_id,
			family_group_name: format!("Group {code}"),
			family_group_code: code.to_string(),
			family_group_number: number,
			service_time: "17:00".to_string(),
			district: "Independencia".to_string(),
			urban_sector: "Payet".to_string(),
			zone_id,
			preacher_id: None,
			church_id,
			record_status: "active".to_string(),
			created_at: now(),
			updated_at: now(),
		})
		.await
		.expect("Failed to insert family group.");
	}

	Fixture { service: ParishService::new(cfg, db), church_id, zone_id, group_a, group_b }
}

fn expense(
	church_id: Uuid,
	expense_type: &str,
	amount: f64,
	date: Date,
	record_status: &str,
) -> OfferingExpenseRow {
	OfferingExpenseRow {
		offering_expense_id: Uuid::new_v4(),
		expense_type: expense_type.to_string(),
		subtype: None,
		amount,
		currency: "PEN".to_string(),
		date,
		comments: None,
		church_id,
		record_status: record_status.to_string(),
		created_at: now(),
		updated_at: now(),
	}
}

fn group_income(
	church_id: Uuid,
	group_id: Uuid,
	zone_id: Uuid,
	amount: f64,
	currency: &str,
	date: Date,
) -> OfferingIncomeRow {
	OfferingIncomeRow {
		offering_income_id: Uuid::new_v4(),
		subtype: OfferingIncomeSubtype::FamilyGroup.as_str().to_string(),
		category: None,
		amount,
		currency: currency.to_string(),
		date,
		shift: None,
		comments: None,
		church_id,
		family_group_id: Some(group_id),
		zone_id: Some(zone_id),
		member_id: None,
		record_status: "active".to_string(),
		created_at: now(),
		updated_at: now(),
	}
}

fn request(term: String, search_type: MetricsSearchType) -> MetricsRequest {
	MetricsRequest { term, search_type, order: SortDirection::Asc, limit: None, offset: None }
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn operational_expenses_are_scoped_to_type_window_and_status() {
	let Some(base_dsn) = parish_testkit::env_dsn() else {
		eprintln!("Skipping acceptance tests; set PARISH_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let fixture = seed(&test_db).await;
	let db = &fixture.service.db;

	offerings::insert_expense(
		db,
		&expense(fixture.church_id, "operational_expenses", 100.0, date(2_024, Month::June, 5), "active"),
	)
	.await
	.expect("Failed to insert expense.");
	offerings::insert_expense(
		db,
		&expense(fixture.church_id, "operational_expenses", 50.0, date(2_024, Month::June, 20), "active"),
	)
	.await
	.expect("Failed to insert expense.");
	// Wrong type, outside window, and soft-deleted rows must all be excluded.
	offerings::insert_expense(
		db,
		&expense(fixture.church_id, "decoration_expenses", 10.0, date(2_024, Month::June, 5), "active"),
	)
	.await
	.expect("Failed to insert expense.");
	offerings::insert_expense(
		db,
		&expense(fixture.church_id, "operational_expenses", 10.0, date(2_024, Month::July, 5), "active"),
	)
	.await
	.expect("Failed to insert expense.");
	offerings::insert_expense(
		db,
		&expense(fixture.church_id, "operational_expenses", 10.0, date(2_024, Month::June, 6), "inactive"),
	)
	.await
	.expect("Failed to insert expense.");

	let term = format!("{}&June&2024", fixture.church_id);
	let response = fixture
		.service
		.metrics(request(term, MetricsSearchType::OperationalOfferingExpenses))
		.await
		.expect("Metrics request failed.");
	let MetricsResponse::OfferingExpenseRecords(records) = response else {
		panic!("Expected expense records.");
	};

	assert_eq!(records.len(), 2);
	assert!(records.iter().all(|record| record.expense_type == "operational_expenses"));
	assert_eq!(records.iter().map(|record| record.amount).sum::<f64>(), 150.0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn top_family_groups_rank_by_accumulated_offerings() {
	let Some(base_dsn) = parish_testkit::env_dsn() else {
		eprintln!("Skipping acceptance tests; set PARISH_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let fixture = seed(&test_db).await;
	let db = &fixture.service.db;

	for (group, amount) in [(fixture.group_a, 30.0), (fixture.group_b, 75.0)] {
		offerings::insert_income(
			db,
			&group_income(fixture.church_id, group, fixture.zone_id, amount, "PEN", date(
				2_024,
				Month::March,
				3,
			)),
		)
		.await
		.expect("Failed to insert income.");
	}

	// A prior-year offering must not leak into the ranking.
	offerings::insert_income(
		db,
		&group_income(fixture.church_id, fixture.group_a, fixture.zone_id, 500.0, "PEN", date(
			2_023,
			Month::March,
			3,
		)),
	)
	.await
	.expect("Failed to insert income.");

	let term = format!("{}&2024", fixture.church_id);
	let response = fixture
		.service
		.metrics(request(term, MetricsSearchType::TopFamilyGroupsOfferings))
		.await
		.expect("Metrics request failed.");
	let MetricsResponse::TopFamilyGroupOfferings(groups) = response else {
		panic!("Expected top family groups.");
	};

	assert_eq!(groups.len(), 2);
	assert_eq!(groups[0].family_group_code, "A-2");
	assert_eq!(groups[0].accumulated.accumulated_offering_pen, 75.0);
	assert_eq!(groups[1].accumulated.accumulated_offering_pen, 30.0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn unknown_church_yields_empty_results_for_every_branch_shape() {
	let Some(base_dsn) = parish_testkit::env_dsn() else {
		eprintln!("Skipping acceptance tests; set PARISH_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let fixture = seed(&test_db).await;
	let unknown = Uuid::new_v4();
	let cases = vec![
		(format!("{unknown}"), MetricsSearchType::MembersByProportion),
		(format!("{unknown}&2024"), MetricsSearchType::MembersFluctuationByYear),
		(format!("{unknown}&June&2024"), MetricsSearchType::OfferingIncomeBySundayService),
		(format!("{unknown}&June&2024"), MetricsSearchType::OperationalOfferingExpenses),
		(format!("{unknown}&March&July&2024"), MetricsSearchType::GeneralComparativeOfferingIncome),
		(format!("{unknown}"), MetricsSearchType::LastSundaysOfferings),
		(format!("{unknown}&2024"), MetricsSearchType::TopFamilyGroupsOfferings),
	];

	for (term, search_type) in cases {
		let response = fixture
			.service
			.metrics(request(term, search_type))
			.await
			.expect("Unknown church should not error.");
		let json = serde_json::to_value(&response).expect("Failed to serialize response.");

		assert_eq!(
			json["data"].as_array().map(Vec::len),
			Some(0),
			"search type {search_type:?} should yield an empty result",
		);
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn date_window_aggregation_is_idempotent() {
	let Some(base_dsn) = parish_testkit::env_dsn() else {
		eprintln!("Skipping acceptance tests; set PARISH_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let fixture = seed(&test_db).await;
	let db = &fixture.service.db;
	let mut sunday = group_income(
		fixture.church_id,
		fixture.group_a,
		fixture.zone_id,
		42.5,
		"PEN",
		date(2_024, Month::June, 9),
	);

	sunday.subtype = OfferingIncomeSubtype::SundayService.as_str().to_string();
	sunday.family_group_id = None;
	sunday.zone_id = None;
	sunday.shift = Some("day".to_string());

	offerings::insert_income(db, &sunday).await.expect("Failed to insert income.");

	let term = format!("{}&June&2024", fixture.church_id);
	let first = fixture
		.service
		.metrics(request(term.clone(), MetricsSearchType::OfferingIncomeBySundayService))
		.await
		.expect("Metrics request failed.");
	let second = fixture
		.service
		.metrics(request(term, MetricsSearchType::OfferingIncomeBySundayService))
		.await
		.expect("Metrics request failed.");
	let as_json =
		|response: &MetricsResponse| serde_json::to_value(response).expect("Failed to serialize.");

	assert_eq!(as_json(&first), as_json(&second));

	let MetricsResponse::SundayOfferings(sundays) = first else {
		panic!("Expected sunday offerings.");
	};

	assert_eq!(sundays.len(), 1);
	assert_eq!(sundays[0].day_pen, 42.5);
	assert_eq!(sundays[0].accumulated.accumulated_offering_pen, 42.5);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
