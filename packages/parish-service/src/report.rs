//! Declarative report documents consumed by the PDF renderer. Builders map a
//! metrics response into column/row string matrices; nothing here touches the
//! rendering engine itself.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use parish_domain::MetricsSearchType;

use crate::{
	ParishService, Result,
	metrics::{CurrencySums, MetricsRequest, MetricsResponse},
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportDocument {
	pub title: String,
	pub subtitle: String,
	#[serde(with = "crate::time_serde")]
	pub generated_at: OffsetDateTime,
	pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportSection {
	pub heading: String,
	pub table: ReportTable,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportTable {
	pub columns: Vec<String>,
	pub rows: Vec<Vec<String>>,
	pub footer: Option<Vec<String>>,
}

impl ParishService {
	/// Runs the metrics branch for the request and wraps the formatted rows
	/// into the report document for that search type.
	pub async fn metrics_report(&self, req: MetricsRequest) -> Result<ReportDocument> {
		let search_type = req.search_type;
		let response = self.metrics(req).await?;

		Ok(build_metrics_report(search_type, &response, OffsetDateTime::now_utc()))
	}
}

pub fn build_metrics_report(
	search_type: MetricsSearchType,
	response: &MetricsResponse,
	generated_at: OffsetDateTime,
) -> ReportDocument {
	let heading = heading_for(search_type);
	let table = match response {
		MetricsResponse::MembersByProportion(items) => table(
			&["Church", "Total", "Active", "Inactive", "Men", "Women"],
			items
				.iter()
				.map(|item| {
					vec![
						item.church_name.clone(),
						item.total.to_string(),
						item.active.to_string(),
						item.inactive.to_string(),
						item.men.to_string(),
						item.women.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::MembersFluctuation(items)
		| MetricsResponse::FamilyGroupsFluctuation(items) => table(
			&["Month", "New", "Inactive"],
			items
				.iter()
				.map(|item| {
					vec![item.month.clone(), item.new.to_string(), item.inactive.to_string()]
				})
				.collect(),
			None,
		),
		MetricsResponse::MembersByBirthMonth(items) => table(
			&["Month", "Members", "Average age"],
			items
				.iter()
				.map(|item| {
					vec![
						item.month.clone(),
						item.count.to_string(),
						format!("{:.1}", item.average_age),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::MembersByCategory(items) => table(
			&["Category", "Members"],
			items
				.iter()
				.map(|item| vec![item.category.as_str().to_string(), item.count.to_string()])
				.collect(),
			None,
		),
		MetricsResponse::MembersByCategoryAndGender(items) => table(
			&["Category", "Men", "Women"],
			items
				.iter()
				.map(|item| {
					vec![
						item.category.as_str().to_string(),
						item.men.to_string(),
						item.women.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::MembersByRoleAndGender(items) => table(
			&["Role", "Men", "Women"],
			items
				.iter()
				.map(|item| {
					vec![
						item.role.as_str().to_string(),
						item.men.to_string(),
						item.women.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::MembersByMaritalStatus(items) => table(
			&["Marital status", "Members"],
			items
				.iter()
				.map(|item| {
					vec![item.marital_status.as_str().to_string(), item.count.to_string()]
				})
				.collect(),
			None,
		),
		MetricsResponse::MembersByZoneAndGender(items) => table(
			&["Zone", "Men", "Women"],
			items
				.iter()
				.map(|item| {
					vec![item.zone_name.clone(), item.men.to_string(), item.women.to_string()]
				})
				.collect(),
			None,
		),
		MetricsResponse::MembersByDistrictAndGender(items) => table(
			&["Urban sector", "Men", "Women"],
			items
				.iter()
				.map(|item| {
					vec![item.urban_sector.clone(), item.men.to_string(), item.women.to_string()]
				})
				.collect(),
			None,
		),
		MetricsResponse::MembersByRecordStatus(items) => table(
			&["Role", "Active", "Inactive"],
			items
				.iter()
				.map(|item| {
					vec![
						item.role.as_str().to_string(),
						item.active.to_string(),
						item.inactive.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::FamilyGroupsByProportion(items)
		| MetricsResponse::OfferingIncomeProportion(items)
		| MetricsResponse::OfferingExpenseProportion(items) => table(
			&["Church", "Total", "Active", "Inactive"],
			items
				.iter()
				.map(|item| {
					vec![
						item.church_name.clone(),
						item.total.to_string(),
						item.active.to_string(),
						item.inactive.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::FamilyGroupsByCode(items) => table(
			&["Code", "Family group", "Men", "Women"],
			items
				.iter()
				.map(|item| {
					vec![
						item.family_group_code.clone(),
						item.family_group_name.clone(),
						item.men.to_string(),
						item.women.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::FamilyGroupsByZone(items) => table(
			&["Code", "Family group", "Zone", "Urban sector", "Service time", "Preacher", "Disciples"],
			items
				.iter()
				.map(|item| {
					vec![
						item.family_group_code.clone(),
						item.family_group_name.clone(),
						item.zone_name.clone(),
						item.urban_sector.clone(),
						item.service_time.clone(),
						item.preacher.clone().unwrap_or_default(),
						item.disciple_count.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::FamilyGroupsByCopastorAndZone(items) => table(
			&["Zone", "Family groups"],
			items
				.iter()
				.map(|item| vec![item.zone_name.clone(), item.group_count.to_string()])
				.collect(),
			None,
		),
		MetricsResponse::FamilyGroupsByDistrict(items) => table(
			&["Urban sector", "Family groups"],
			items
				.iter()
				.map(|item| vec![item.urban_sector.clone(), item.group_count.to_string()])
				.collect(),
			None,
		),
		MetricsResponse::FamilyGroupsByServiceTime(items) => table(
			&["Service time", "Code", "Family group", "Zone", "Disciples"],
			items
				.iter()
				.map(|item| {
					vec![
						item.service_time.clone(),
						item.family_group_code.clone(),
						item.family_group_name.clone(),
						item.zone_name.clone(),
						item.disciple_count.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::FamilyGroupsByRecordStatus(items) => table(
			&["Zone", "Active", "Inactive"],
			items
				.iter()
				.map(|item| {
					vec![item.zone_name.clone(), item.active.to_string(), item.inactive.to_string()]
				})
				.collect(),
			None,
		),
		MetricsResponse::SundayOfferings(items)
		| MetricsResponse::LastSundaysOfferings(items) => {
			let rows = items
				.iter()
				.map(|item| {
					vec![
						item.date.to_string(),
						money(item.day_pen),
						money(item.afternoon_pen),
						money(item.day_usd),
						money(item.afternoon_usd),
						money(item.day_eur),
						money(item.afternoon_eur),
					]
				})
				.collect();
			let footer = currency_footer("Total", items.iter().map(|item| &item.accumulated));

			table(
				&[
					"Sunday",
					"Day PEN",
					"Afternoon PEN",
					"Day USD",
					"Afternoon USD",
					"Day EUR",
					"Afternoon EUR",
				],
				rows,
				Some(footer),
			)
		},
		MetricsResponse::FamilyGroupOfferings(items) => {
			let rows = items
				.iter()
				.map(|item| {
					vec![
						item.family_group_code.clone(),
						item.family_group_name.clone(),
						item.zone_name.clone(),
						item.preacher.clone().unwrap_or_default(),
						money(item.accumulated.accumulated_offering_pen),
						money(item.accumulated.accumulated_offering_usd),
						money(item.accumulated.accumulated_offering_eur),
					]
				})
				.collect();
			let footer = currency_footer("Total", items.iter().map(|item| &item.accumulated));

			table(
				&["Code", "Family group", "Zone", "Preacher", "PEN", "USD", "EUR"],
				rows,
				Some(footer),
			)
		},
		MetricsResponse::OfferingIncomeRecords(items) => table(
			&["Date", "Subtype", "Shift", "Amount", "Currency", "Family group", "Zone", "Comments"],
			items
				.iter()
				.map(|item| {
					vec![
						item.date.to_string(),
						item.subtype.clone(),
						item.shift.clone().unwrap_or_default(),
						money(item.amount),
						item.currency.clone(),
						item.family_group_code.clone().unwrap_or_default(),
						item.zone_name.clone().unwrap_or_default(),
						item.comments.clone().unwrap_or_default(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::OfferingExpenseRecords(items) => table(
			&["Date", "Type", "Subtype", "Amount", "Currency", "Comments"],
			items
				.iter()
				.map(|item| {
					vec![
						item.date.to_string(),
						item.expense_type.clone(),
						item.subtype.clone().unwrap_or_default(),
						money(item.amount),
						item.currency.clone(),
						item.comments.clone().unwrap_or_default(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::IncomeAndExpensesProportion(items) => table(
			&["Church", "Income records", "Expense records"],
			items
				.iter()
				.map(|item| {
					vec![
						item.church_name.clone(),
						item.income_records.to_string(),
						item.expense_records.to_string(),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::IncomeAndExpensesComparative(items) => table(
			&["Month", "Currency", "Income", "Expenses", "Difference"],
			items
				.iter()
				.map(|item| {
					vec![
						item.month.clone(),
						item.currency.as_str().to_string(),
						money(item.total_income),
						money(item.total_expenses),
						money(item.difference),
					]
				})
				.collect(),
			None,
		),
		MetricsResponse::MonthlyIncomeTotals(items)
		| MetricsResponse::MonthlyExpenseTotals(items) => {
			let rows = items
				.iter()
				.map(|item| {
					vec![
						item.month.clone(),
						money(item.accumulated.accumulated_offering_pen),
						money(item.accumulated.accumulated_offering_usd),
						money(item.accumulated.accumulated_offering_eur),
					]
				})
				.collect();
			let footer = currency_footer("Total", items.iter().map(|item| &item.accumulated));

			table(&["Month", "PEN", "USD", "EUR"], rows, Some(footer))
		},
		MetricsResponse::IncomeSubtypeTotals(items) => {
			let rows = items
				.iter()
				.map(|item| {
					vec![
						item.subtype.clone(),
						money(item.accumulated.accumulated_offering_pen),
						money(item.accumulated.accumulated_offering_usd),
						money(item.accumulated.accumulated_offering_eur),
					]
				})
				.collect();
			let footer = currency_footer("Total", items.iter().map(|item| &item.accumulated));

			table(&["Subtype", "PEN", "USD", "EUR"], rows, Some(footer))
		},
		MetricsResponse::ExpenseTypeTotals(items) => {
			let rows = items
				.iter()
				.map(|item| {
					vec![
						item.expense_type.clone(),
						money(item.accumulated.accumulated_offering_pen),
						money(item.accumulated.accumulated_offering_usd),
						money(item.accumulated.accumulated_offering_eur),
					]
				})
				.collect();
			let footer = currency_footer("Total", items.iter().map(|item| &item.accumulated));

			table(&["Type", "PEN", "USD", "EUR"], rows, Some(footer))
		},
		MetricsResponse::TopFamilyGroupOfferings(items) => {
			let rows = items
				.iter()
				.map(|item| {
					vec![
						item.family_group_code.clone(),
						item.family_group_name.clone(),
						item.zone_name.clone(),
						item.preacher.clone().unwrap_or_default(),
						money(item.accumulated.accumulated_offering_pen),
						money(item.accumulated.accumulated_offering_usd),
						money(item.accumulated.accumulated_offering_eur),
					]
				})
				.collect();
			let footer = currency_footer("Total", items.iter().map(|item| &item.accumulated));

			table(
				&["Code", "Family group", "Zone", "Preacher", "PEN", "USD", "EUR"],
				rows,
				Some(footer),
			)
		},
	};

	ReportDocument {
		title: "Metrics report".to_string(),
		subtitle: heading.clone(),
		generated_at,
		sections: vec![ReportSection { heading, table }],
	}
}

fn heading_for(search_type: MetricsSearchType) -> String {
	let mut heading = search_type.as_str().replace('-', " ");

	if let Some(first) = heading.get_mut(..1) {
		first.make_ascii_uppercase();
	}

	heading
}

fn table(columns: &[&str], rows: Vec<Vec<String>>, footer: Option<Vec<String>>) -> ReportTable {
	ReportTable {
		columns: columns.iter().map(|column| column.to_string()).collect(),
		rows,
		footer,
	}
}

fn currency_footer<'a>(
	label: &str,
	sums: impl Iterator<Item = &'a CurrencySums>,
) -> Vec<String> {
	let mut pen = 0.0;
	let mut usd = 0.0;
	let mut eur = 0.0;

	for sum in sums {
		pen += sum.accumulated_offering_pen;
		usd += sum.accumulated_offering_usd;
		eur += sum.accumulated_offering_eur;
	}

	vec![label.to_string(), money(pen), money(usd), money(eur)]
}

fn money(value: f64) -> String {
	format!("{value:.2}")
}
