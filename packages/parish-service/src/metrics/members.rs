use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use parish_domain::{
	Gender, MaritalStatus, MemberAgeCategory, MemberRole, RecordStatus, member,
	term::{ChurchCopastorTerm, ChurchDistrictTerm, ChurchTerm, ChurchYearTerm},
	window,
};
use parish_storage::{
	churches, members,
	models::{ChurchRow, MemberWithRoleRow, SectorGenderRow, ZoneGenderRow},
};

use crate::{
	ParishService, Result,
	metrics::{MONTHS, MetricsResponse, MonthlyFluctuationMetric, year_window_or_invalid},
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemberProportionMetric {
	pub church_name: String,
	pub total: i64,
	pub active: i64,
	pub inactive: i64,
	pub men: i64,
	pub women: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BirthMonthMetric {
	pub month: String,
	pub count: i64,
	pub average_age: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryMetric {
	pub category: MemberAgeCategory,
	pub count: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryGenderMetric {
	pub category: MemberAgeCategory,
	pub men: i64,
	pub women: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoleGenderMetric {
	pub role: MemberRole,
	pub men: i64,
	pub women: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MaritalStatusMetric {
	pub marital_status: MaritalStatus,
	pub count: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneGenderMetric {
	pub zone_name: String,
	pub men: i64,
	pub women: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DistrictGenderMetric {
	pub urban_sector: String,
	pub men: i64,
	pub women: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoleRecordStatusMetric {
	pub role: MemberRole,
	pub active: i64,
	pub inactive: i64,
}

impl ParishService {
	pub(crate) async fn members_by_proportion(&self, term: ChurchTerm) -> Result<MetricsResponse> {
		let Some(church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByProportion(Vec::new()));
		};
		let (active_members, inactive) = tokio::try_join!(
			members::list_active_with_roles(&self.db, term.church_id),
			inactive_member_total(self, term.church_id),
		)?;

		Ok(MetricsResponse::MembersByProportion(format_member_proportion(
			&church,
			&active_members,
			inactive,
		)))
	}

	pub(crate) async fn members_fluctuation_by_year(
		&self,
		term: ChurchYearTerm,
	) -> Result<MetricsResponse> {
		let window = year_window_or_invalid(term.year)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersFluctuation(Vec::new()));
		};
		let (created, inactivated) = tokio::try_join!(
			members::created_in_window(&self.db, term.church_id, window),
			members::inactivated_in_window(&self.db, term.church_id, window),
		)?;

		Ok(MetricsResponse::MembersFluctuation(format_fluctuation(&created, &inactivated)))
	}

	pub(crate) async fn members_by_birth_month(
		&self,
		term: ChurchTerm,
		today: Date,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByBirthMonth(Vec::new()));
		};
		let rows = members::list_active_with_roles(&self.db, term.church_id).await?;

		Ok(MetricsResponse::MembersByBirthMonth(format_birth_months(&rows, today)))
	}

	pub(crate) async fn members_by_category(
		&self,
		term: ChurchTerm,
		today: Date,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByCategory(Vec::new()));
		};
		let rows = members::list_active_with_roles(&self.db, term.church_id).await?;

		Ok(MetricsResponse::MembersByCategory(format_categories(&rows, today)))
	}

	pub(crate) async fn members_by_category_and_gender(
		&self,
		term: ChurchTerm,
		today: Date,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByCategoryAndGender(Vec::new()));
		};
		let rows = members::list_active_with_roles(&self.db, term.church_id).await?;

		Ok(MetricsResponse::MembersByCategoryAndGender(format_category_genders(&rows, today)))
	}

	pub(crate) async fn members_by_role_and_gender(
		&self,
		term: ChurchTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByRoleAndGender(Vec::new()));
		};
		let rows = members::list_active_with_roles(&self.db, term.church_id).await?;

		Ok(MetricsResponse::MembersByRoleAndGender(format_role_genders(&rows)))
	}

	pub(crate) async fn members_by_marital_status(
		&self,
		term: ChurchTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByMaritalStatus(Vec::new()));
		};
		let rows = members::list_active_with_roles(&self.db, term.church_id).await?;

		Ok(MetricsResponse::MembersByMaritalStatus(format_marital_statuses(&rows)))
	}

	pub(crate) async fn members_by_zone_and_gender(
		&self,
		term: ChurchCopastorTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByZoneAndGender(Vec::new()));
		};
		let Some(_copastor) = members::find_active_copastor(&self.db, term.copastor_id).await?
		else {
			return Ok(MetricsResponse::MembersByZoneAndGender(Vec::new()));
		};
		let rows = members::list_zone_genders(&self.db, term.church_id, term.copastor_id).await?;

		Ok(MetricsResponse::MembersByZoneAndGender(format_zone_genders(&rows)))
	}

	pub(crate) async fn members_by_district_and_gender(
		&self,
		term: ChurchDistrictTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByDistrictAndGender(Vec::new()));
		};
		let rows =
			members::list_district_genders(&self.db, term.church_id, &term.district).await?;

		Ok(MetricsResponse::MembersByDistrictAndGender(format_district_genders(&rows)))
	}

	pub(crate) async fn members_by_record_status(
		&self,
		term: ChurchTerm,
	) -> Result<MetricsResponse> {
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MembersByRecordStatus(Vec::new()));
		};
		// The five role tables are independent; count them concurrently.
		let (pastors, copastors, supervisors, preachers, disciples) = tokio::try_join!(
			role_status_counts(self, term.church_id, MemberRole::Pastor),
			role_status_counts(self, term.church_id, MemberRole::Copastor),
			role_status_counts(self, term.church_id, MemberRole::Supervisor),
			role_status_counts(self, term.church_id, MemberRole::Preacher),
			role_status_counts(self, term.church_id, MemberRole::Disciple),
		)?;

		Ok(MetricsResponse::MembersByRecordStatus(vec![
			pastors, copastors, supervisors, preachers, disciples,
		]))
	}
}

async fn inactive_member_total(
	svc: &ParishService,
	church_id: Uuid,
) -> parish_storage::Result<i64> {
	let (pastors, copastors, supervisors, preachers, disciples) = tokio::try_join!(
		members::count_by_status(&svc.db, church_id, MemberRole::Pastor, RecordStatus::Inactive),
		members::count_by_status(&svc.db, church_id, MemberRole::Copastor, RecordStatus::Inactive),
		members::count_by_status(
			&svc.db,
			church_id,
			MemberRole::Supervisor,
			RecordStatus::Inactive,
		),
		members::count_by_status(&svc.db, church_id, MemberRole::Preacher, RecordStatus::Inactive),
		members::count_by_status(&svc.db, church_id, MemberRole::Disciple, RecordStatus::Inactive),
	)?;

	Ok(pastors + copastors + supervisors + preachers + disciples)
}

async fn role_status_counts(
	svc: &ParishService,
	church_id: Uuid,
	role: MemberRole,
) -> parish_storage::Result<RoleRecordStatusMetric> {
	let (active, inactive) = tokio::try_join!(
		members::count_by_status(&svc.db, church_id, role, RecordStatus::Active),
		members::count_by_status(&svc.db, church_id, role, RecordStatus::Inactive),
	)?;

	Ok(RoleRecordStatusMetric { role, active, inactive })
}

pub fn format_member_proportion(
	church: &ChurchRow,
	active_members: &[MemberWithRoleRow],
	inactive: i64,
) -> Vec<MemberProportionMetric> {
	let active = active_members.len() as i64;
	let men = active_members.iter().filter(|row| row.gender == Gender::Male.as_str()).count() as i64;

	vec![MemberProportionMetric {
		church_name: church.abbreviated_church_name.clone(),
		total: active + inactive,
		active,
		inactive,
		men,
		women: active - men,
	}]
}

pub fn format_fluctuation(
	created: &[OffsetDateTime],
	inactivated: &[OffsetDateTime],
) -> Vec<MonthlyFluctuationMetric> {
	MONTHS
		.iter()
		.map(|&month| MonthlyFluctuationMetric {
			month: window::month_name(month).to_string(),
			new: created.iter().filter(|ts| ts.month() == month).count() as i64,
			inactive: inactivated.iter().filter(|ts| ts.month() == month).count() as i64,
		})
		.collect()
}

pub fn format_birth_months(rows: &[MemberWithRoleRow], today: Date) -> Vec<BirthMonthMetric> {
	MONTHS
		.iter()
		.map(|&month| {
			let ages = rows
				.iter()
				.filter(|row| row.birth_date.month() == month)
				.map(|row| member::age_on(row.birth_date, today))
				.collect::<Vec<_>>();
			let count = ages.len() as i64;
			let average_age = if ages.is_empty() {
				0.0
			} else {
				f64::from(ages.iter().sum::<i32>()) / ages.len() as f64
			};

			BirthMonthMetric { month: window::month_name(month).to_string(), count, average_age }
		})
		.collect()
}

pub fn format_categories(rows: &[MemberWithRoleRow], today: Date) -> Vec<CategoryMetric> {
	MemberAgeCategory::ALL
		.into_iter()
		.map(|category| CategoryMetric {
			category,
			count: rows
				.iter()
				.filter(|row| age_category(row, today) == category)
				.count() as i64,
		})
		.collect()
}

pub fn format_category_genders(
	rows: &[MemberWithRoleRow],
	today: Date,
) -> Vec<CategoryGenderMetric> {
	MemberAgeCategory::ALL
		.into_iter()
		.map(|category| {
			let in_category =
				rows.iter().filter(|row| age_category(row, today) == category).collect::<Vec<_>>();
			let men =
				in_category.iter().filter(|row| row.gender == Gender::Male.as_str()).count() as i64;

			CategoryGenderMetric { category, men, women: in_category.len() as i64 - men }
		})
		.collect()
}

pub fn format_role_genders(rows: &[MemberWithRoleRow]) -> Vec<RoleGenderMetric> {
	MemberRole::ALL
		.into_iter()
		.map(|role| {
			let in_role =
				rows.iter().filter(|row| row.role == role.as_str()).collect::<Vec<_>>();
			let men =
				in_role.iter().filter(|row| row.gender == Gender::Male.as_str()).count() as i64;

			RoleGenderMetric { role, men, women: in_role.len() as i64 - men }
		})
		.collect()
}

pub fn format_marital_statuses(rows: &[MemberWithRoleRow]) -> Vec<MaritalStatusMetric> {
	MaritalStatus::ALL
		.into_iter()
		.map(|marital_status| MaritalStatusMetric {
			marital_status,
			count: rows
				.iter()
				.filter(|row| row.marital_status == marital_status.as_str())
				.count() as i64,
		})
		.collect()
}

pub fn format_zone_genders(rows: &[ZoneGenderRow]) -> Vec<ZoneGenderMetric> {
	let mut zones: BTreeMap<&str, (i64, i64)> = BTreeMap::new();

	for row in rows {
		let entry = zones.entry(row.zone_name.as_str()).or_default();

		if row.gender == Gender::Male.as_str() {
			entry.0 += 1;
		} else {
			entry.1 += 1;
		}
	}

	zones
		.into_iter()
		.map(|(zone_name, (men, women))| ZoneGenderMetric {
			zone_name: zone_name.to_string(),
			men,
			women,
		})
		.collect()
}

pub fn format_district_genders(rows: &[SectorGenderRow]) -> Vec<DistrictGenderMetric> {
	let mut sectors: BTreeMap<&str, (i64, i64)> = BTreeMap::new();

	for row in rows {
		let entry = sectors.entry(row.urban_sector.as_str()).or_default();

		if row.gender == Gender::Male.as_str() {
			entry.0 += 1;
		} else {
			entry.1 += 1;
		}
	}

	sectors
		.into_iter()
		.map(|(urban_sector, (men, women))| DistrictGenderMetric {
			urban_sector: urban_sector.to_string(),
			men,
			women,
		})
		.collect()
}

fn age_category(row: &MemberWithRoleRow, today: Date) -> MemberAgeCategory {
	MemberAgeCategory::from_age(member::age_on(row.birth_date, today))
}
