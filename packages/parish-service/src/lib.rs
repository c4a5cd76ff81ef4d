pub mod metrics;
pub mod report;
pub mod time_serde;

mod error;

pub use error::{Error, Result};
pub use metrics::{MetricsRequest, MetricsResponse};
pub use report::{ReportDocument, ReportSection, ReportTable};

use parish_config::Config;
use parish_storage::db::Db;

pub struct ParishService {
	pub cfg: Config,
	pub db: Db,
}
impl ParishService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}
}
