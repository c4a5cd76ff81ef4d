use std::sync::Arc;

use parish_service::ParishService;
use parish_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<ParishService>,
}
impl AppState {
	pub async fn new(config: parish_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = ParishService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
