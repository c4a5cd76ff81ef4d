use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChurchRow {
	pub church_id: Uuid,
	pub church_name: String,
	pub abbreviated_church_name: String,
	pub district: String,
	pub urban_sector: String,
	pub is_anexe: bool,
	pub record_status: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

/// Columns shared by the five role tables; role-specific hierarchy columns
/// stay in the specialized projections below.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberRow {
	pub member_id: Uuid,
	pub first_names: String,
	pub last_names: String,
	pub gender: String,
	pub birth_date: Date,
	pub marital_status: String,
	pub district: String,
	pub urban_sector: String,
	pub origin_country: String,
	pub conversion_date: Option<Date>,
	pub church_id: Uuid,
	pub record_status: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ZoneRow {
	pub zone_id: Uuid,
	pub zone_name: String,
	pub district: String,
	pub supervisor_id: Option<Uuid>,
	pub church_id: Uuid,
	pub record_status: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FamilyGroupRow {
	pub family_group_id: Uuid,
	pub family_group_name: String,
	pub family_group_code: String,
	pub family_group_number: i32,
	pub service_time: String,
	pub district: String,
	pub urban_sector: String,
	pub zone_id: Uuid,
	pub preacher_id: Option<Uuid>,
	pub church_id: Uuid,
	pub record_status: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OfferingIncomeRow {
	pub offering_income_id: Uuid,
	pub subtype: String,
	pub category: Option<String>,
	pub amount: f64,
	pub currency: String,
	pub date: Date,
	pub shift: Option<String>,
	pub comments: Option<String>,
	pub church_id: Uuid,
	pub family_group_id: Option<Uuid>,
	pub zone_id: Option<Uuid>,
	pub member_id: Option<Uuid>,
	pub record_status: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OfferingExpenseRow {
	pub offering_expense_id: Uuid,
	pub expense_type: String,
	pub subtype: Option<String>,
	pub amount: f64,
	pub currency: String,
	pub date: Date,
	pub comments: Option<String>,
	pub church_id: Uuid,
	pub record_status: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberWithRoleRow {
	pub member_id: Uuid,
	pub role: String,
	pub first_names: String,
	pub last_names: String,
	pub gender: String,
	pub birth_date: Date,
	pub marital_status: String,
	pub district: String,
	pub urban_sector: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ZoneGenderRow {
	pub zone_name: String,
	pub gender: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SectorGenderRow {
	pub urban_sector: String,
	pub gender: String,
}

/// LEFT JOIN projection; `gender` is absent for groups without disciples.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GroupGenderRow {
	pub family_group_code: String,
	pub family_group_name: String,
	pub gender: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FamilyGroupDetailRow {
	pub family_group_id: Uuid,
	pub family_group_name: String,
	pub family_group_code: String,
	pub family_group_number: i32,
	pub service_time: String,
	pub urban_sector: String,
	pub zone_name: String,
	pub preacher_first_names: Option<String>,
	pub preacher_last_names: Option<String>,
	pub disciple_count: i64,
	pub record_status: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ZoneGroupCountRow {
	pub zone_id: Uuid,
	pub zone_name: String,
	pub group_count: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SectorGroupCountRow {
	pub urban_sector: String,
	pub group_count: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ZoneStatusCountRow {
	pub zone_name: String,
	pub record_status: String,
	pub group_count: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OfferingIncomeDetailRow {
	pub offering_income_id: Uuid,
	pub subtype: String,
	pub category: Option<String>,
	pub amount: f64,
	pub currency: String,
	pub date: Date,
	pub shift: Option<String>,
	pub comments: Option<String>,
	pub member_id: Option<Uuid>,
	pub family_group_code: Option<String>,
	pub family_group_name: Option<String>,
	pub zone_name: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FamilyGroupOfferingRow {
	pub family_group_id: Uuid,
	pub family_group_name: String,
	pub family_group_code: String,
	pub zone_name: String,
	pub preacher_first_names: Option<String>,
	pub preacher_last_names: Option<String>,
	pub amount: f64,
	pub currency: String,
	pub date: Date,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SundayOfferingRow {
	pub date: Date,
	pub shift: Option<String>,
	pub currency: String,
	pub total: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MonthlyTotalRow {
	pub month: i32,
	pub currency: String,
	pub total: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubtypeTotalRow {
	pub subtype: String,
	pub currency: String,
	pub total: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TypeTotalRow {
	pub expense_type: String,
	pub currency: String,
	pub total: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CurrencyTotalRow {
	pub currency: String,
	pub total: f64,
}
