use serde::{Deserialize, Serialize};

/// Selects which metrics query/formatter pair the dispatcher runs. Wire
/// format is kebab-case, e.g. `members-by-proportion`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricsSearchType {
	// Members.
	MembersByProportion,
	MembersFluctuationByYear,
	MembersByBirthMonth,
	MembersByCategory,
	MembersByCategoryAndGender,
	MembersByRoleAndGender,
	MembersByMaritalStatus,
	MembersByZoneAndGender,
	MembersByDistrictAndGender,
	MembersByRecordStatus,
	// Family groups.
	FamilyGroupsByProportion,
	FamilyGroupsFluctuationByYear,
	FamilyGroupsByCode,
	FamilyGroupsByZone,
	FamilyGroupsByCopastorAndZone,
	FamilyGroupsByDistrict,
	FamilyGroupsByServiceTime,
	FamilyGroupsByRecordStatus,
	// Offering income.
	OfferingIncomeByProportion,
	OfferingIncomeBySundayService,
	OfferingIncomeByFamilyGroup,
	OfferingIncomeBySundaySchool,
	OfferingIncomeByFastingAndVigilAndEvangelism,
	OfferingIncomeByYouthService,
	OfferingIncomeBySpecialOffering,
	OfferingIncomeByChurchGround,
	OfferingIncomeByUnitedService,
	OfferingIncomeByActivities,
	OfferingIncomeAdjustment,
	// Offering expenses.
	OfferingExpensesByProportion,
	OperationalOfferingExpenses,
	MaintenanceAndRepairOfferingExpenses,
	DecorationOfferingExpenses,
	EquipmentAndTechnologyOfferingExpenses,
	SuppliesOfferingExpenses,
	PlanningEventsOfferingExpenses,
	OtherOfferingExpenses,
	OfferingExpensesAdjustment,
	// Comparatives.
	OfferingExpensesAndOfferingIncomeByProportion,
	IncomeAndExpensesComparativeByYear,
	GeneralComparativeOfferingIncome,
	ComparativeOfferingIncomeBySubtype,
	GeneralComparativeOfferingExpenses,
	ComparativeOfferingExpensesByType,
	// Dashboard.
	LastSundaysOfferings,
	TopFamilyGroupsOfferings,
}
impl MetricsSearchType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::MembersByProportion => "members-by-proportion",
			Self::MembersFluctuationByYear => "members-fluctuation-by-year",
			Self::MembersByBirthMonth => "members-by-birth-month",
			Self::MembersByCategory => "members-by-category",
			Self::MembersByCategoryAndGender => "members-by-category-and-gender",
			Self::MembersByRoleAndGender => "members-by-role-and-gender",
			Self::MembersByMaritalStatus => "members-by-marital-status",
			Self::MembersByZoneAndGender => "members-by-zone-and-gender",
			Self::MembersByDistrictAndGender => "members-by-district-and-gender",
			Self::MembersByRecordStatus => "members-by-record-status",
			Self::FamilyGroupsByProportion => "family-groups-by-proportion",
			Self::FamilyGroupsFluctuationByYear => "family-groups-fluctuation-by-year",
			Self::FamilyGroupsByCode => "family-groups-by-code",
			Self::FamilyGroupsByZone => "family-groups-by-zone",
			Self::FamilyGroupsByCopastorAndZone => "family-groups-by-copastor-and-zone",
			Self::FamilyGroupsByDistrict => "family-groups-by-district",
			Self::FamilyGroupsByServiceTime => "family-groups-by-service-time",
			Self::FamilyGroupsByRecordStatus => "family-groups-by-record-status",
			Self::OfferingIncomeByProportion => "offering-income-by-proportion",
			Self::OfferingIncomeBySundayService => "offering-income-by-sunday-service",
			Self::OfferingIncomeByFamilyGroup => "offering-income-by-family-group",
			Self::OfferingIncomeBySundaySchool => "offering-income-by-sunday-school",
			Self::OfferingIncomeByFastingAndVigilAndEvangelism =>
				"offering-income-by-fasting-and-vigil-and-evangelism",
			Self::OfferingIncomeByYouthService => "offering-income-by-youth-service",
			Self::OfferingIncomeBySpecialOffering => "offering-income-by-special-offering",
			Self::OfferingIncomeByChurchGround => "offering-income-by-church-ground",
			Self::OfferingIncomeByUnitedService => "offering-income-by-united-service",
			Self::OfferingIncomeByActivities => "offering-income-by-activities",
			Self::OfferingIncomeAdjustment => "offering-income-adjustment",
			Self::OfferingExpensesByProportion => "offering-expenses-by-proportion",
			Self::OperationalOfferingExpenses => "operational-offering-expenses",
			Self::MaintenanceAndRepairOfferingExpenses =>
				"maintenance-and-repair-offering-expenses",
			Self::DecorationOfferingExpenses => "decoration-offering-expenses",
			Self::EquipmentAndTechnologyOfferingExpenses =>
				"equipment-and-technology-offering-expenses",
			Self::SuppliesOfferingExpenses => "supplies-offering-expenses",
			Self::PlanningEventsOfferingExpenses => "planning-events-offering-expenses",
			Self::OtherOfferingExpenses => "other-offering-expenses",
			Self::OfferingExpensesAdjustment => "offering-expenses-adjustment",
			Self::OfferingExpensesAndOfferingIncomeByProportion =>
				"offering-expenses-and-offering-income-by-proportion",
			Self::IncomeAndExpensesComparativeByYear => "income-and-expenses-comparative-by-year",
			Self::GeneralComparativeOfferingIncome => "general-comparative-offering-income",
			Self::ComparativeOfferingIncomeBySubtype => "comparative-offering-income-by-subtype",
			Self::GeneralComparativeOfferingExpenses => "general-comparative-offering-expenses",
			Self::ComparativeOfferingExpensesByType => "comparative-offering-expenses-by-type",
			Self::LastSundaysOfferings => "last-sundays-offerings",
			Self::TopFamilyGroupsOfferings => "top-family-groups-offerings",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
	Asc,
	#[default]
	Desc,
}
impl SortDirection {
	pub fn as_sql(self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}
