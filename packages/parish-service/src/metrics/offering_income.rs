use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use parish_domain::{
	Currency, OfferingIncomeSubtype, RecordStatus,
	term::{ChurchMonthYearTerm, ChurchTerm, ChurchZoneMonthYearTerm},
};
use parish_storage::{
	churches, family_groups, offerings,
	models::{FamilyGroupOfferingRow, OfferingIncomeDetailRow, SundayOfferingRow},
};

use crate::{
	ParishService, Result,
	metrics::{
		MetricsResponse, ProportionMetric, QueryOptions, full_name, month_window_or_invalid,
	},
};

const SHIFT_DAY: &str = "day";
const SHIFT_AFTERNOON: &str = "afternoon";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CurrencySums {
	pub accumulated_offering_pen: f64,
	pub accumulated_offering_usd: f64,
	pub accumulated_offering_eur: f64,
}
impl CurrencySums {
	pub fn add(&mut self, currency: &str, amount: f64) {
		match Currency::parse(currency) {
			Some(Currency::Pen) => self.accumulated_offering_pen += amount,
			Some(Currency::Usd) => self.accumulated_offering_usd += amount,
			Some(Currency::Eur) => self.accumulated_offering_eur += amount,
			None => {},
		}
	}
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SundayOfferingMetric {
	#[serde(with = "crate::time_serde::date")]
	pub date: Date,
	pub day_pen: f64,
	pub day_usd: f64,
	pub day_eur: f64,
	pub afternoon_pen: f64,
	pub afternoon_usd: f64,
	pub afternoon_eur: f64,
	#[serde(flatten)]
	pub accumulated: CurrencySums,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FamilyGroupOfferingMetric {
	pub family_group_code: String,
	pub family_group_name: String,
	pub zone_name: String,
	pub preacher: Option<String>,
	#[serde(flatten)]
	pub accumulated: CurrencySums,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OfferingIncomeRecordMetric {
	#[serde(with = "crate::time_serde::date")]
	pub date: Date,
	pub subtype: String,
	pub category: Option<String>,
	pub shift: Option<String>,
	pub amount: f64,
	pub currency: String,
	pub family_group_code: Option<String>,
	pub family_group_name: Option<String>,
	pub zone_name: Option<String>,
	pub comments: Option<String>,
}

impl ParishService {
	pub(crate) async fn offering_income_by_proportion(
		&self,
		term: ChurchTerm,
	) -> Result<MetricsResponse> {
		let Some(church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::OfferingIncomeProportion(Vec::new()));
		};
		let (active, inactive) = tokio::try_join!(
			offerings::income_count_by_status(&self.db, term.church_id, RecordStatus::Active),
			offerings::income_count_by_status(&self.db, term.church_id, RecordStatus::Inactive),
		)?;

		Ok(MetricsResponse::OfferingIncomeProportion(vec![ProportionMetric {
			church_name: church.abbreviated_church_name,
			total: active + inactive,
			active,
			inactive,
		}]))
	}

	/// Shared by the Sunday service and Sunday school branches; the shape is
	/// identical, only the subtype differs.
	pub(crate) async fn sunday_offerings(
		&self,
		term: ChurchMonthYearTerm,
		subtype: OfferingIncomeSubtype,
	) -> Result<MetricsResponse> {
		let window = month_window_or_invalid(term.year, term.month)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::SundayOfferings(Vec::new()));
		};
		let rows = offerings::sunday_sums(&self.db, term.church_id, subtype, window).await?;

		Ok(MetricsResponse::SundayOfferings(format_sundays(&rows)))
	}

	pub(crate) async fn offering_income_by_family_group(
		&self,
		term: ChurchZoneMonthYearTerm,
	) -> Result<MetricsResponse> {
		let window = month_window_or_invalid(term.year, term.month)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupOfferings(Vec::new()));
		};
		let Some(_zone) = family_groups::find_active_zone(&self.db, term.zone_id).await? else {
			return Ok(MetricsResponse::FamilyGroupOfferings(Vec::new()));
		};
		let rows = offerings::list_family_group_income(
			&self.db,
			term.church_id,
			Some(term.zone_id),
			window,
		)
		.await?;

		Ok(MetricsResponse::FamilyGroupOfferings(format_family_group_offerings(&rows)))
	}

	pub(crate) async fn offering_income_records(
		&self,
		term: ChurchMonthYearTerm,
		subtypes: &[OfferingIncomeSubtype],
		opts: &QueryOptions,
	) -> Result<MetricsResponse> {
		let window = month_window_or_invalid(term.year, term.month)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::OfferingIncomeRecords(Vec::new()));
		};
		let rows = offerings::list_income_detail(
			&self.db,
			term.church_id,
			subtypes,
			window,
			opts.order,
			opts.limit,
			opts.offset,
		)
		.await?;

		Ok(MetricsResponse::OfferingIncomeRecords(format_income_records(&rows)))
	}
}

/// Groups the (date, shift, currency) sums into one row per date with
/// day/afternoon splits and per-currency accumulated totals.
pub fn format_sundays(rows: &[SundayOfferingRow]) -> Vec<SundayOfferingMetric> {
	let mut dates: BTreeMap<Date, SundayOfferingMetric> = BTreeMap::new();

	for row in rows {
		let entry = dates.entry(row.date).or_insert_with(|| SundayOfferingMetric {
			date: row.date,
			day_pen: 0.0,
			day_usd: 0.0,
			day_eur: 0.0,
			afternoon_pen: 0.0,
			afternoon_usd: 0.0,
			afternoon_eur: 0.0,
			accumulated: CurrencySums::default(),
		});

		match (row.shift.as_deref(), Currency::parse(&row.currency)) {
			(Some(SHIFT_DAY), Some(Currency::Pen)) => entry.day_pen += row.total,
			(Some(SHIFT_DAY), Some(Currency::Usd)) => entry.day_usd += row.total,
			(Some(SHIFT_DAY), Some(Currency::Eur)) => entry.day_eur += row.total,
			(Some(SHIFT_AFTERNOON), Some(Currency::Pen)) => entry.afternoon_pen += row.total,
			(Some(SHIFT_AFTERNOON), Some(Currency::Usd)) => entry.afternoon_usd += row.total,
			(Some(SHIFT_AFTERNOON), Some(Currency::Eur)) => entry.afternoon_eur += row.total,
			_ => {},
		}

		entry.accumulated.add(&row.currency, row.total);
	}

	dates.into_values().collect()
}

pub fn format_family_group_offerings(
	rows: &[FamilyGroupOfferingRow],
) -> Vec<FamilyGroupOfferingMetric> {
	let mut groups: BTreeMap<Uuid, FamilyGroupOfferingMetric> = BTreeMap::new();

	for row in rows {
		let entry =
			groups.entry(row.family_group_id).or_insert_with(|| FamilyGroupOfferingMetric {
				family_group_code: row.family_group_code.clone(),
				family_group_name: row.family_group_name.clone(),
				zone_name: row.zone_name.clone(),
				preacher: full_name(
					row.preacher_first_names.as_deref(),
					row.preacher_last_names.as_deref(),
				),
				accumulated: CurrencySums::default(),
			});

		entry.accumulated.add(&row.currency, row.amount);
	}

	let mut metrics = groups.into_values().collect::<Vec<_>>();

	metrics.sort_by(|a, b| a.family_group_code.cmp(&b.family_group_code));

	metrics
}

pub fn format_income_records(rows: &[OfferingIncomeDetailRow]) -> Vec<OfferingIncomeRecordMetric> {
	rows.iter()
		.map(|row| OfferingIncomeRecordMetric {
			date: row.date,
			subtype: row.subtype.clone(),
			category: row.category.clone(),
			shift: row.shift.clone(),
			amount: row.amount,
			currency: row.currency.clone(),
			family_group_code: row.family_group_code.clone(),
			family_group_name: row.family_group_name.clone(),
			zone_name: row.zone_name.clone(),
			comments: row.comments.clone(),
		})
		.collect()
}
