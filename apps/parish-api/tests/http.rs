use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use tower::util::ServiceExt;
use uuid::Uuid;

use parish_api::{routes, state::AppState};
use parish_config::Config;
use parish_testkit::TestDatabase;

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

async fn test_env() -> Option<TestDatabase> {
	let base_dsn = match parish_testkit::env_dsn() {
		Some(value) => value,
		None => {
			eprintln!("Skipping HTTP tests; set PARISH_PG_DSN to run this test.");

			return None;
		},
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");

	Some(test_db)
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn health_ok() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let response = app
		.oneshot(
			Request::builder()
				.uri("/health")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn malformed_term_is_a_bad_request() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let uri = "/v1/metrics?term=not-a-uuid&search-type=members-by-proportion";
	let response = app
		.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request."))
		.await
		.expect("Failed to call /v1/metrics.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&bytes).expect("Failed to parse body.");

	assert_eq!(json["error_code"], "invalid_request");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn unknown_church_returns_an_empty_result() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let uri = format!(
		"/v1/metrics?term={}&search-type=last-sundays-offerings",
		Uuid::new_v4(),
	);
	let response = app
		.oneshot(
			Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /v1/metrics.");

	assert_eq!(response.status(), StatusCode::OK);

	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&bytes).expect("Failed to parse body.");

	assert_eq!(json["kind"], "last-sundays-offerings");
	assert_eq!(json["data"].as_array().map(Vec::len), Some(0));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PARISH_PG_DSN to run."]
async fn report_route_wraps_the_same_query() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let uri = format!(
		"/v1/reports/metrics?term={}&search-type=members-by-proportion",
		Uuid::new_v4(),
	);
	let response = app
		.oneshot(
			Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /v1/reports/metrics.");

	assert_eq!(response.status(), StatusCode::OK);

	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&bytes).expect("Failed to parse body.");

	assert_eq!(json["title"], "Metrics report");
	assert_eq!(json["sections"].as_array().map(Vec::len), Some(1));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
