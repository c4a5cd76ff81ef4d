pub mod comparative;
pub mod dashboard;
pub mod family_groups;
pub mod members;
pub mod offering_expenses;
pub mod offering_income;

use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};

use parish_domain::{
	DateWindow, MetricsSearchType, OfferingExpenseType, OfferingIncomeSubtype, SortDirection,
	term::{
		ChurchCopastorTerm, ChurchCurrencyYearTerm, ChurchDistrictTerm, ChurchMonthRangeYearTerm,
		ChurchMonthYearTerm, ChurchTerm, ChurchYearTerm, ChurchZoneMonthYearTerm, ChurchZoneTerm,
	},
	window,
};

use crate::{Error, ParishService, Result};

pub use comparative::{
	IncomeExpenseProportionMetric, MonthlyComparativeMetric, MonthlyCurrencyTotalsMetric,
	SubtypeCurrencyTotalsMetric, TypeCurrencyTotalsMetric,
};
pub use dashboard::TopFamilyGroupOfferingMetric;
pub use family_groups::{
	DistrictGroupCountMetric, FamilyGroupDetailMetric, FamilyGroupGenderMetric, ServiceTimeMetric,
	ZoneGroupCountMetric, ZoneRecordStatusMetric,
};
pub use members::{
	BirthMonthMetric, CategoryGenderMetric, CategoryMetric, DistrictGenderMetric,
	MaritalStatusMetric, MemberProportionMetric, RoleGenderMetric, RoleRecordStatusMetric,
	ZoneGenderMetric,
};
pub use offering_expenses::OfferingExpenseRecordMetric;
pub use offering_income::{
	CurrencySums, FamilyGroupOfferingMetric, OfferingIncomeRecordMetric, SundayOfferingMetric,
};

pub(crate) const MONTHS: [Month; 12] = [
	Month::January,
	Month::February,
	Month::March,
	Month::April,
	Month::May,
	Month::June,
	Month::July,
	Month::August,
	Month::September,
	Month::October,
	Month::November,
	Month::December,
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsRequest {
	pub term: String,
	pub search_type: MetricsSearchType,
	#[serde(default)]
	pub order: SortDirection,
	#[serde(default)]
	pub limit: Option<i64>,
	#[serde(default)]
	pub offset: Option<i64>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct QueryOptions {
	pub(crate) order: SortDirection,
	pub(crate) limit: Option<i64>,
	pub(crate) offset: Option<i64>,
	pub(crate) today: Date,
}

/// Shared shape of the record-count proportion metrics (family groups,
/// offering income, offering expenses).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProportionMetric {
	pub church_name: String,
	pub total: i64,
	pub active: i64,
	pub inactive: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthlyFluctuationMetric {
	pub month: String,
	pub new: i64,
	pub inactive: i64,
}

/// One variant per formatter shape; the serialized form carries the shape
/// under `kind` so consumers never have to sniff field names.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum MetricsResponse {
	MembersByProportion(Vec<MemberProportionMetric>),
	MembersFluctuation(Vec<MonthlyFluctuationMetric>),
	MembersByBirthMonth(Vec<BirthMonthMetric>),
	MembersByCategory(Vec<CategoryMetric>),
	MembersByCategoryAndGender(Vec<CategoryGenderMetric>),
	MembersByRoleAndGender(Vec<RoleGenderMetric>),
	MembersByMaritalStatus(Vec<MaritalStatusMetric>),
	MembersByZoneAndGender(Vec<ZoneGenderMetric>),
	MembersByDistrictAndGender(Vec<DistrictGenderMetric>),
	MembersByRecordStatus(Vec<RoleRecordStatusMetric>),
	FamilyGroupsByProportion(Vec<ProportionMetric>),
	FamilyGroupsFluctuation(Vec<MonthlyFluctuationMetric>),
	FamilyGroupsByCode(Vec<FamilyGroupGenderMetric>),
	FamilyGroupsByZone(Vec<FamilyGroupDetailMetric>),
	FamilyGroupsByCopastorAndZone(Vec<ZoneGroupCountMetric>),
	FamilyGroupsByDistrict(Vec<DistrictGroupCountMetric>),
	FamilyGroupsByServiceTime(Vec<ServiceTimeMetric>),
	FamilyGroupsByRecordStatus(Vec<ZoneRecordStatusMetric>),
	OfferingIncomeProportion(Vec<ProportionMetric>),
	SundayOfferings(Vec<SundayOfferingMetric>),
	FamilyGroupOfferings(Vec<FamilyGroupOfferingMetric>),
	OfferingIncomeRecords(Vec<OfferingIncomeRecordMetric>),
	OfferingExpenseProportion(Vec<ProportionMetric>),
	OfferingExpenseRecords(Vec<OfferingExpenseRecordMetric>),
	IncomeAndExpensesProportion(Vec<IncomeExpenseProportionMetric>),
	IncomeAndExpensesComparative(Vec<MonthlyComparativeMetric>),
	MonthlyIncomeTotals(Vec<MonthlyCurrencyTotalsMetric>),
	IncomeSubtypeTotals(Vec<SubtypeCurrencyTotalsMetric>),
	MonthlyExpenseTotals(Vec<MonthlyCurrencyTotalsMetric>),
	ExpenseTypeTotals(Vec<TypeCurrencyTotalsMetric>),
	LastSundaysOfferings(Vec<SundayOfferingMetric>),
	TopFamilyGroupOfferings(Vec<TopFamilyGroupOfferingMetric>),
}

impl ParishService {
	/// Parses the positional term for the requested search type, runs the
	/// matching query branch, and hands the rows to that branch's formatter.
	/// An unknown church/copastor/zone id yields the branch's empty result.
	pub async fn metrics(&self, req: MetricsRequest) -> Result<MetricsResponse> {
		if req.limit.is_some_and(|limit| limit < 0) {
			return Err(Error::InvalidRequest {
				message: "limit must be zero or greater.".to_string(),
			});
		}
		if req.offset.is_some_and(|offset| offset < 0) {
			return Err(Error::InvalidRequest {
				message: "offset must be zero or greater.".to_string(),
			});
		}

		let opts = QueryOptions {
			order: req.order,
			limit: req.limit,
			offset: req.offset,
			today: OffsetDateTime::now_utc().date(),
		};
		let term = req.term.as_str();

		tracing::debug!(search_type = req.search_type.as_str(), "Dispatching metrics query.");

		match req.search_type {
			MetricsSearchType::MembersByProportion =>
				self.members_by_proportion(ChurchTerm::parse(term)?).await,
			MetricsSearchType::MembersFluctuationByYear =>
				self.members_fluctuation_by_year(ChurchYearTerm::parse(term)?).await,
			MetricsSearchType::MembersByBirthMonth =>
				self.members_by_birth_month(ChurchTerm::parse(term)?, opts.today).await,
			MetricsSearchType::MembersByCategory =>
				self.members_by_category(ChurchTerm::parse(term)?, opts.today).await,
			MetricsSearchType::MembersByCategoryAndGender =>
				self.members_by_category_and_gender(ChurchTerm::parse(term)?, opts.today).await,
			MetricsSearchType::MembersByRoleAndGender =>
				self.members_by_role_and_gender(ChurchTerm::parse(term)?).await,
			MetricsSearchType::MembersByMaritalStatus =>
				self.members_by_marital_status(ChurchTerm::parse(term)?).await,
			MetricsSearchType::MembersByZoneAndGender =>
				self.members_by_zone_and_gender(ChurchCopastorTerm::parse(term)?).await,
			MetricsSearchType::MembersByDistrictAndGender =>
				self.members_by_district_and_gender(ChurchDistrictTerm::parse(term)?).await,
			MetricsSearchType::MembersByRecordStatus =>
				self.members_by_record_status(ChurchTerm::parse(term)?).await,
			MetricsSearchType::FamilyGroupsByProportion =>
				self.family_groups_by_proportion(ChurchTerm::parse(term)?).await,
			MetricsSearchType::FamilyGroupsFluctuationByYear =>
				self.family_groups_fluctuation_by_year(ChurchYearTerm::parse(term)?).await,
			MetricsSearchType::FamilyGroupsByCode =>
				self.family_groups_by_code(ChurchTerm::parse(term)?).await,
			MetricsSearchType::FamilyGroupsByZone =>
				self.family_groups_by_zone(ChurchZoneTerm::parse(term)?).await,
			MetricsSearchType::FamilyGroupsByCopastorAndZone =>
				self.family_groups_by_copastor_and_zone(ChurchCopastorTerm::parse(term)?).await,
			MetricsSearchType::FamilyGroupsByDistrict =>
				self.family_groups_by_district(ChurchDistrictTerm::parse(term)?).await,
			MetricsSearchType::FamilyGroupsByServiceTime =>
				self.family_groups_by_service_time(ChurchZoneTerm::parse(term)?, &opts).await,
			MetricsSearchType::FamilyGroupsByRecordStatus =>
				self.family_groups_by_record_status(ChurchZoneTerm::parse(term)?).await,
			MetricsSearchType::OfferingIncomeByProportion =>
				self.offering_income_by_proportion(ChurchTerm::parse(term)?).await,
			MetricsSearchType::OfferingIncomeBySundayService =>
				self.sunday_offerings(
					ChurchMonthYearTerm::parse(term)?,
					OfferingIncomeSubtype::SundayService,
				)
				.await,
			MetricsSearchType::OfferingIncomeByFamilyGroup =>
				self.offering_income_by_family_group(ChurchZoneMonthYearTerm::parse(term)?).await,
			MetricsSearchType::OfferingIncomeBySundaySchool =>
				self.sunday_offerings(
					ChurchMonthYearTerm::parse(term)?,
					OfferingIncomeSubtype::SundaySchool,
				)
				.await,
			MetricsSearchType::OfferingIncomeByFastingAndVigilAndEvangelism =>
				self.offering_income_records(
					ChurchMonthYearTerm::parse(term)?,
					&OfferingIncomeSubtype::GATHERINGS,
					&opts,
				)
				.await,
			MetricsSearchType::OfferingIncomeByYouthService =>
				self.offering_income_records(
					ChurchMonthYearTerm::parse(term)?,
					&[OfferingIncomeSubtype::YouthService],
					&opts,
				)
				.await,
			MetricsSearchType::OfferingIncomeBySpecialOffering =>
				self.offering_income_records(
					ChurchMonthYearTerm::parse(term)?,
					&[OfferingIncomeSubtype::Special],
					&opts,
				)
				.await,
			MetricsSearchType::OfferingIncomeByChurchGround =>
				self.offering_income_records(
					ChurchMonthYearTerm::parse(term)?,
					&[OfferingIncomeSubtype::ChurchGround],
					&opts,
				)
				.await,
			MetricsSearchType::OfferingIncomeByUnitedService =>
				self.offering_income_records(
					ChurchMonthYearTerm::parse(term)?,
					&[OfferingIncomeSubtype::UnitedService],
					&opts,
				)
				.await,
			MetricsSearchType::OfferingIncomeByActivities =>
				self.offering_income_records(
					ChurchMonthYearTerm::parse(term)?,
					&[OfferingIncomeSubtype::Activities],
					&opts,
				)
				.await,
			MetricsSearchType::OfferingIncomeAdjustment =>
				self.offering_income_records(
					ChurchMonthYearTerm::parse(term)?,
					&[OfferingIncomeSubtype::IncomeAdjustment],
					&opts,
				)
				.await,
			MetricsSearchType::OfferingExpensesByProportion =>
				self.offering_expenses_by_proportion(ChurchTerm::parse(term)?).await,
			MetricsSearchType::OperationalOfferingExpenses =>
				self.offering_expense_records(
					ChurchMonthYearTerm::parse(term)?,
					OfferingExpenseType::OperationalExpenses,
					&opts,
				)
				.await,
			MetricsSearchType::MaintenanceAndRepairOfferingExpenses =>
				self.offering_expense_records(
					ChurchMonthYearTerm::parse(term)?,
					OfferingExpenseType::MaintenanceAndRepairExpenses,
					&opts,
				)
				.await,
			MetricsSearchType::DecorationOfferingExpenses =>
				self.offering_expense_records(
					ChurchMonthYearTerm::parse(term)?,
					OfferingExpenseType::DecorationExpenses,
					&opts,
				)
				.await,
			MetricsSearchType::EquipmentAndTechnologyOfferingExpenses =>
				self.offering_expense_records(
					ChurchMonthYearTerm::parse(term)?,
					OfferingExpenseType::EquipmentAndTechnologyExpenses,
					&opts,
				)
				.await,
			MetricsSearchType::SuppliesOfferingExpenses =>
				self.offering_expense_records(
					ChurchMonthYearTerm::parse(term)?,
					OfferingExpenseType::SuppliesExpenses,
					&opts,
				)
				.await,
			MetricsSearchType::PlanningEventsOfferingExpenses =>
				self.offering_expense_records(
					ChurchMonthYearTerm::parse(term)?,
					OfferingExpenseType::PlanningEventsExpenses,
					&opts,
				)
				.await,
			MetricsSearchType::OtherOfferingExpenses =>
				self.offering_expense_records(
					ChurchMonthYearTerm::parse(term)?,
					OfferingExpenseType::OtherExpenses,
					&opts,
				)
				.await,
			MetricsSearchType::OfferingExpensesAdjustment =>
				self.offering_expense_records(
					ChurchMonthYearTerm::parse(term)?,
					OfferingExpenseType::ExpensesAdjustment,
					&opts,
				)
				.await,
			MetricsSearchType::OfferingExpensesAndOfferingIncomeByProportion =>
				self.income_and_expenses_proportion(ChurchTerm::parse(term)?).await,
			MetricsSearchType::IncomeAndExpensesComparativeByYear =>
				self.income_and_expenses_comparative_by_year(ChurchCurrencyYearTerm::parse(term)?)
					.await,
			MetricsSearchType::GeneralComparativeOfferingIncome =>
				self.general_comparative_offering_income(ChurchMonthRangeYearTerm::parse(term)?)
					.await,
			MetricsSearchType::ComparativeOfferingIncomeBySubtype =>
				self.comparative_offering_income_by_subtype(ChurchMonthRangeYearTerm::parse(term)?)
					.await,
			MetricsSearchType::GeneralComparativeOfferingExpenses =>
				self.general_comparative_offering_expenses(ChurchMonthRangeYearTerm::parse(term)?)
					.await,
			MetricsSearchType::ComparativeOfferingExpensesByType =>
				self.comparative_offering_expenses_by_type(ChurchMonthRangeYearTerm::parse(term)?)
					.await,
			MetricsSearchType::LastSundaysOfferings =>
				self.last_sundays_offerings(ChurchTerm::parse(term)?, opts.today).await,
			MetricsSearchType::TopFamilyGroupsOfferings =>
				self.top_family_groups_offerings(ChurchYearTerm::parse(term)?).await,
		}
	}
}

pub(crate) fn month_window_or_invalid(year: i32, month: Month) -> Result<DateWindow> {
	window::month_window(year, month).ok_or_else(|| Error::InvalidRequest {
		message: format!("No calendar window for {} {year}.", window::month_name(month)),
	})
}

pub(crate) fn month_range_window_or_invalid(
	year: i32,
	start_month: Month,
	end_month: Month,
) -> Result<DateWindow> {
	window::month_range_window(year, start_month, end_month).ok_or_else(|| Error::InvalidRequest {
		message: format!(
			"No calendar window for {}-{} {year}.",
			window::month_name(start_month),
			window::month_name(end_month),
		),
	})
}

pub(crate) fn year_window_or_invalid(year: i32) -> Result<DateWindow> {
	window::year_window(year)
		.ok_or_else(|| Error::InvalidRequest { message: format!("No calendar window for {year}.") })
}

pub(crate) fn full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
	match (first, last) {
		(Some(first), Some(last)) => Some(format!("{first} {last}")),
		(Some(first), None) => Some(first.to_string()),
		(None, Some(last)) => Some(last.to_string()),
		(None, None) => None,
	}
}
