use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use uuid::Uuid;

use parish_domain::{
	DateWindow, OfferingIncomeSubtype,
	term::{ChurchTerm, ChurchYearTerm},
};
use parish_storage::{
	churches,
	models::{FamilyGroupOfferingRow, SundayOfferingRow},
	offerings,
};

use crate::{
	ParishService, Result,
	metrics::{
		CurrencySums, MetricsResponse, SundayOfferingMetric, full_name,
		offering_income::format_sundays, year_window_or_invalid,
	},
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopFamilyGroupOfferingMetric {
	pub family_group_code: String,
	pub family_group_name: String,
	pub zone_name: String,
	pub preacher: Option<String>,
	#[serde(flatten)]
	pub accumulated: CurrencySums,
}

impl ParishService {
	pub(crate) async fn last_sundays_offerings(
		&self,
		term: ChurchTerm,
		today: Date,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::LastSundaysOfferings(Vec::new()));
		};
		let count = self.cfg.metrics.last_sundays_count;
		let window =
			DateWindow { start: today - Duration::days(7 * i64::from(count)), end: today };
		let rows = offerings::sunday_sums(
			&self.db,
			term.church_id,
			OfferingIncomeSubtype::SundayService,
			window,
		)
		.await?;

		Ok(MetricsResponse::LastSundaysOfferings(format_last_sundays(&rows, count as usize)))
	}

	pub(crate) async fn top_family_groups_offerings(
		&self,
		term: ChurchYearTerm,
	) -> Result<MetricsResponse> {
		let window = year_window_or_invalid(term.year)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::TopFamilyGroupOfferings(Vec::new()));
		};
		let rows =
			offerings::list_family_group_income(&self.db, term.church_id, None, window).await?;
		let limit = self.cfg.metrics.top_family_groups_limit as usize;

		Ok(MetricsResponse::TopFamilyGroupOfferings(format_top_family_groups(&rows, limit)))
	}
}

/// Most recent Sundays first, trimmed to `count` distinct dates.
pub fn format_last_sundays(rows: &[SundayOfferingRow], count: usize) -> Vec<SundayOfferingMetric> {
	let mut metrics = format_sundays(rows);

	metrics.reverse();
	metrics.truncate(count);

	metrics
}

/// Groups ranked by their summed offerings across the three currencies,
/// trimmed to `limit`.
pub fn format_top_family_groups(
	rows: &[FamilyGroupOfferingRow],
	limit: usize,
) -> Vec<TopFamilyGroupOfferingMetric> {
	let mut groups: BTreeMap<Uuid, TopFamilyGroupOfferingMetric> = BTreeMap::new();

	for row in rows {
		let entry =
			groups.entry(row.family_group_id).or_insert_with(|| TopFamilyGroupOfferingMetric {
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

	metrics.sort_by(|a, b| {
		let a_total = a.accumulated.accumulated_offering_pen
			+ a.accumulated.accumulated_offering_usd
			+ a.accumulated.accumulated_offering_eur;
		let b_total = b.accumulated.accumulated_offering_pen
			+ b.accumulated.accumulated_offering_usd
			+ b.accumulated.accumulated_offering_eur;

		b_total.total_cmp(&a_total)
	});
	metrics.truncate(limit);

	metrics
}
