use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
	Pen,
	Usd,
	Eur,
}
impl Currency {
	pub const ALL: [Self; 3] = [Self::Pen, Self::Usd, Self::Eur];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Pen => "PEN",
			Self::Usd => "USD",
			Self::Eur => "EUR",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"PEN" => Some(Self::Pen),
			"USD" => Some(Self::Usd),
			"EUR" => Some(Self::Eur),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferingIncomeSubtype {
	SundayService,
	FamilyGroup,
	GeneralFasting,
	ZonalFasting,
	GeneralVigil,
	ZonalVigil,
	GeneralEvangelism,
	ZonalEvangelism,
	SundaySchool,
	YouthService,
	UnitedService,
	Activities,
	ChurchGround,
	Special,
	IncomeAdjustment,
}
impl OfferingIncomeSubtype {
	pub const ALL: [Self; 15] = [
		Self::SundayService,
		Self::FamilyGroup,
		Self::GeneralFasting,
		Self::ZonalFasting,
		Self::GeneralVigil,
		Self::ZonalVigil,
		Self::GeneralEvangelism,
		Self::ZonalEvangelism,
		Self::SundaySchool,
		Self::YouthService,
		Self::UnitedService,
		Self::Activities,
		Self::ChurchGround,
		Self::Special,
		Self::IncomeAdjustment,
	];
	/// The six general/zonal subtypes reported together by the
	/// fasting-vigil-evangelism metric.
	pub const GATHERINGS: [Self; 6] = [
		Self::GeneralFasting,
		Self::ZonalFasting,
		Self::GeneralVigil,
		Self::ZonalVigil,
		Self::GeneralEvangelism,
		Self::ZonalEvangelism,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::SundayService => "sunday_service",
			Self::FamilyGroup => "family_group",
			Self::GeneralFasting => "general_fasting",
			Self::ZonalFasting => "zonal_fasting",
			Self::GeneralVigil => "general_vigil",
			Self::ZonalVigil => "zonal_vigil",
			Self::GeneralEvangelism => "general_evangelism",
			Self::ZonalEvangelism => "zonal_evangelism",
			Self::SundaySchool => "sunday_school",
			Self::YouthService => "youth_service",
			Self::UnitedService => "united_service",
			Self::Activities => "activities",
			Self::ChurchGround => "church_ground",
			Self::Special => "special",
			Self::IncomeAdjustment => "income_adjustment",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|subtype| subtype.as_str() == value)
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferingExpenseType {
	OperationalExpenses,
	MaintenanceAndRepairExpenses,
	DecorationExpenses,
	EquipmentAndTechnologyExpenses,
	SuppliesExpenses,
	PlanningEventsExpenses,
	OtherExpenses,
	ExpensesAdjustment,
}
impl OfferingExpenseType {
	pub const ALL: [Self; 8] = [
		Self::OperationalExpenses,
		Self::MaintenanceAndRepairExpenses,
		Self::DecorationExpenses,
		Self::EquipmentAndTechnologyExpenses,
		Self::SuppliesExpenses,
		Self::PlanningEventsExpenses,
		Self::OtherExpenses,
		Self::ExpensesAdjustment,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::OperationalExpenses => "operational_expenses",
			Self::MaintenanceAndRepairExpenses => "maintenance_and_repair_expenses",
			Self::DecorationExpenses => "decoration_expenses",
			Self::EquipmentAndTechnologyExpenses => "equipment_and_technology_expenses",
			Self::SuppliesExpenses => "supplies_expenses",
			Self::PlanningEventsExpenses => "planning_events_expenses",
			Self::OtherExpenses => "other_expenses",
			Self::ExpensesAdjustment => "expenses_adjustment",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|expense_type| expense_type.as_str() == value)
	}
}
