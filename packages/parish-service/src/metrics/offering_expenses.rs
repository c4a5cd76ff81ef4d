use serde::{Deserialize, Serialize};
use time::Date;

use parish_domain::{
	OfferingExpenseType, RecordStatus,
	term::{ChurchMonthYearTerm, ChurchTerm},
};
use parish_storage::{churches, models::OfferingExpenseRow, offerings};

use crate::{
	ParishService, Result,
	metrics::{MetricsResponse, ProportionMetric, QueryOptions, month_window_or_invalid},
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OfferingExpenseRecordMetric {
	#[serde(with = "crate::time_serde::date")]
	pub date: Date,
	pub expense_type: String,
	pub subtype: Option<String>,
	pub amount: f64,
	pub currency: String,
	pub comments: Option<String>,
}

impl ParishService {
	pub(crate) async fn offering_expenses_by_proportion(
		&self,
		term: ChurchTerm,
	) -> Result<MetricsResponse> {
		let Some(church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::OfferingExpenseProportion(Vec::new()));
		};
		let (active, inactive) = tokio::try_join!(
			offerings::expense_count_by_status(&self.db, term.church_id, RecordStatus::Active),
			offerings::expense_count_by_status(&self.db, term.church_id, RecordStatus::Inactive),
		)?;

		Ok(MetricsResponse::OfferingExpenseProportion(vec![ProportionMetric {
			church_name: church.abbreviated_church_name,
			total: active + inactive,
			active,
			inactive,
		}]))
	}

	/// One branch serves the eight expense search types; the type is the only
	/// thing that varies.
	pub(crate) async fn offering_expense_records(
		&self,
		term: ChurchMonthYearTerm,
		expense_type: OfferingExpenseType,
		opts: &QueryOptions,
	) -> Result<MetricsResponse> {
		let window = month_window_or_invalid(term.year, term.month)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::OfferingExpenseRecords(Vec::new()));
		};
		let rows = offerings::list_expense_detail(
			&self.db,
			term.church_id,
			expense_type,
			window,
			opts.order,
			opts.limit,
			opts.offset,
		)
		.await?;

		Ok(MetricsResponse::OfferingExpenseRecords(format_expense_records(&rows)))
	}
}

pub fn format_expense_records(rows: &[OfferingExpenseRow]) -> Vec<OfferingExpenseRecordMetric> {
	rows.iter()
		.map(|row| OfferingExpenseRecordMetric {
			date: row.date,
			expense_type: row.expense_type.clone(),
			subtype: row.subtype.clone(),
			amount: row.amount,
			currency: row.currency.clone(),
			comments: row.comments.clone(),
		})
		.collect()
}
