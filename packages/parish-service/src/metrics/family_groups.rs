use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use parish_domain::{
	Gender, RecordStatus, service_time,
	term::{ChurchCopastorTerm, ChurchDistrictTerm, ChurchTerm, ChurchYearTerm, ChurchZoneTerm},
	SortDirection,
};
use parish_storage::{
	churches, family_groups, members,
	models::{FamilyGroupDetailRow, GroupGenderRow, ZoneStatusCountRow},
};

use crate::{
	ParishService, Result,
	metrics::{
		MetricsResponse, ProportionMetric, QueryOptions, full_name,
		members::format_fluctuation, year_window_or_invalid,
	},
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FamilyGroupGenderMetric {
	pub family_group_code: String,
	pub family_group_name: String,
	pub men: i64,
	pub women: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FamilyGroupDetailMetric {
	pub family_group_code: String,
	pub family_group_name: String,
	pub family_group_number: i32,
	pub service_time: String,
	pub urban_sector: String,
	pub zone_name: String,
	pub preacher: Option<String>,
	pub disciple_count: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceTimeMetric {
	pub service_time: String,
	pub family_group_code: String,
	pub family_group_name: String,
	pub zone_name: String,
	pub disciple_count: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneGroupCountMetric {
	pub zone_name: String,
	pub group_count: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DistrictGroupCountMetric {
	pub urban_sector: String,
	pub group_count: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneRecordStatusMetric {
	pub zone_name: String,
	pub active: i64,
	pub inactive: i64,
}

impl ParishService {
	pub(crate) async fn family_groups_by_proportion(
		&self,
		term: ChurchTerm,
	) -> Result<MetricsResponse> {
		let Some(church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByProportion(Vec::new()));
		};
		let (active, inactive) = tokio::try_join!(
			family_groups::count_by_status(&self.db, term.church_id, RecordStatus::Active),
			family_groups::count_by_status(&self.db, term.church_id, RecordStatus::Inactive),
		)?;

		Ok(MetricsResponse::FamilyGroupsByProportion(vec![ProportionMetric {
			church_name: church.abbreviated_church_name,
			total: active + inactive,
			active,
			inactive,
		}]))
	}

	pub(crate) async fn family_groups_fluctuation_by_year(
		&self,
		term: ChurchYearTerm,
	) -> Result<MetricsResponse> {
		let window = year_window_or_invalid(term.year)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsFluctuation(Vec::new()));
		};
		let (created, inactivated) = tokio::try_join!(
			family_groups::created_in_window(&self.db, term.church_id, window),
			family_groups::inactivated_in_window(&self.db, term.church_id, window),
		)?;

		Ok(MetricsResponse::FamilyGroupsFluctuation(format_fluctuation(&created, &inactivated)))
	}

	pub(crate) async fn family_groups_by_code(&self, term: ChurchTerm) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByCode(Vec::new()));
		};
		let rows = family_groups::list_group_genders(&self.db, term.church_id).await?;

		Ok(MetricsResponse::FamilyGroupsByCode(format_group_genders(&rows)))
	}

	pub(crate) async fn family_groups_by_zone(
		&self,
		term: ChurchZoneTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByZone(Vec::new()));
		};
		let Some(_zone) = family_groups::find_active_zone(&self.db, term.zone_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByZone(Vec::new()));
		};
		let rows = family_groups::list_detail_by_zone(&self.db, term.zone_id).await?;

		Ok(MetricsResponse::FamilyGroupsByZone(format_group_details(&rows)))
	}

	pub(crate) async fn family_groups_by_copastor_and_zone(
		&self,
		term: ChurchCopastorTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByCopastorAndZone(Vec::new()));
		};
		let Some(_copastor) = members::find_active_copastor(&self.db, term.copastor_id).await?
		else {
			return Ok(MetricsResponse::FamilyGroupsByCopastorAndZone(Vec::new()));
		};
		let rows =
			family_groups::zone_group_counts(&self.db, term.church_id, term.copastor_id).await?;
		let metrics = rows
			.into_iter()
			.map(|row| ZoneGroupCountMetric {
				zone_name: row.zone_name,
				group_count: row.group_count,
			})
			.collect();

		Ok(MetricsResponse::FamilyGroupsByCopastorAndZone(metrics))
	}

	pub(crate) async fn family_groups_by_district(
		&self,
		term: ChurchDistrictTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByDistrict(Vec::new()));
		};
		let rows =
			family_groups::district_group_counts(&self.db, term.church_id, &term.district).await?;
		let metrics = rows
			.into_iter()
			.map(|row| DistrictGroupCountMetric {
				urban_sector: row.urban_sector,
				group_count: row.group_count,
			})
			.collect();

		Ok(MetricsResponse::FamilyGroupsByDistrict(metrics))
	}

	pub(crate) async fn family_groups_by_service_time(
		&self,
		term: ChurchZoneTerm,
		opts: &QueryOptions,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByServiceTime(Vec::new()));
		};
		let Some(_zone) = family_groups::find_active_zone(&self.db, term.zone_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByServiceTime(Vec::new()));
		};
		let rows = family_groups::list_detail_by_zone(&self.db, term.zone_id).await?;

		Ok(MetricsResponse::FamilyGroupsByServiceTime(format_service_times(&rows, opts.order)))
	}

	pub(crate) async fn family_groups_by_record_status(
		&self,
		term: ChurchZoneTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::FamilyGroupsByRecordStatus(Vec::new()));
		};
		let rows = family_groups::zone_status_counts(&self.db, term.zone_id).await?;

		Ok(MetricsResponse::FamilyGroupsByRecordStatus(format_zone_statuses(&rows)))
	}
}

pub fn format_group_genders(rows: &[GroupGenderRow]) -> Vec<FamilyGroupGenderMetric> {
	let mut groups: BTreeMap<&str, (&str, i64, i64)> = BTreeMap::new();

	for row in rows {
		let entry =
			groups.entry(row.family_group_code.as_str()).or_insert((&row.family_group_name, 0, 0));

		match row.gender.as_deref() {
			Some(gender) if gender == Gender::Male.as_str() => entry.1 += 1,
			Some(_) => entry.2 += 1,
			None => {},
		}
	}

	groups
		.into_iter()
		.map(|(code, (name, men, women))| FamilyGroupGenderMetric {
			family_group_code: code.to_string(),
			family_group_name: name.to_string(),
			men,
			women,
		})
		.collect()
}

pub fn format_group_details(rows: &[FamilyGroupDetailRow]) -> Vec<FamilyGroupDetailMetric> {
	rows.iter()
		.map(|row| FamilyGroupDetailMetric {
			family_group_code: row.family_group_code.clone(),
			family_group_name: row.family_group_name.clone(),
			family_group_number: row.family_group_number,
			service_time: row.service_time.clone(),
			urban_sector: row.urban_sector.clone(),
			zone_name: row.zone_name.clone(),
			preacher: full_name(
				row.preacher_first_names.as_deref(),
				row.preacher_last_names.as_deref(),
			),
			disciple_count: row.disciple_count,
		})
		.collect()
}

/// Sorted by the service time converted to minutes; groups with a malformed
/// time sort last.
pub fn format_service_times(
	rows: &[FamilyGroupDetailRow],
	order: SortDirection,
) -> Vec<ServiceTimeMetric> {
	let mut metrics = rows
		.iter()
		.map(|row| ServiceTimeMetric {
			service_time: row.service_time.clone(),
			family_group_code: row.family_group_code.clone(),
			family_group_name: row.family_group_name.clone(),
			zone_name: row.zone_name.clone(),
			disciple_count: row.disciple_count,
		})
		.collect::<Vec<_>>();

	metrics.sort_by_key(|metric| {
		service_time::service_time_minutes(&metric.service_time).unwrap_or(u32::MAX)
	});

	if order == SortDirection::Desc {
		metrics.reverse();
	}

	metrics
}

pub fn format_zone_statuses(rows: &[ZoneStatusCountRow]) -> Vec<ZoneRecordStatusMetric> {
	let mut zones: BTreeMap<&str, (i64, i64)> = BTreeMap::new();

	for row in rows {
		let entry = zones.entry(row.zone_name.as_str()).or_default();

		if row.record_status == RecordStatus::Active.as_str() {
			entry.0 += row.group_count;
		} else {
			entry.1 += row.group_count;
		}
	}

	zones
		.into_iter()
		.map(|(zone_name, (active, inactive))| ZoneRecordStatusMetric {
			zone_name: zone_name.to_string(),
			active,
			inactive,
		})
		.collect()
}
