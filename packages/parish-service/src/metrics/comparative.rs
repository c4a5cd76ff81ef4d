use serde::{Deserialize, Serialize};
use time::Month;

use parish_domain::{
	Currency, RecordStatus,
	term::{ChurchCurrencyYearTerm, ChurchMonthRangeYearTerm, ChurchTerm},
	window,
};
use parish_storage::{
	churches,
	models::{MonthlyTotalRow, SubtypeTotalRow, TypeTotalRow},
	offerings,
};

use crate::{
	ParishService, Result,
	metrics::{
		CurrencySums, MONTHS, MetricsResponse, month_range_window_or_invalid,
		year_window_or_invalid,
	},
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IncomeExpenseProportionMetric {
	pub church_name: String,
	pub income_records: i64,
	pub expense_records: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthlyComparativeMetric {
	pub month: String,
	pub currency: Currency,
	pub total_income: f64,
	pub total_expenses: f64,
	pub difference: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthlyCurrencyTotalsMetric {
	pub month: String,
	#[serde(flatten)]
	pub accumulated: CurrencySums,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubtypeCurrencyTotalsMetric {
	pub subtype: String,
	#[serde(flatten)]
	pub accumulated: CurrencySums,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeCurrencyTotalsMetric {
	pub expense_type: String,
	#[serde(flatten)]
	pub accumulated: CurrencySums,
}

impl ParishService {
	pub(crate) async fn income_and_expenses_proportion(
		&self,
		term: ChurchTerm,
	) -> Result<MetricsResponse> {
		let Some(church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::IncomeAndExpensesProportion(Vec::new()));
		};
		let (income_records, expense_records) = tokio::try_join!(
			offerings::income_count_by_status(&self.db, term.church_id, RecordStatus::Active),
			offerings::expense_count_by_status(&self.db, term.church_id, RecordStatus::Active),
		)?;

		Ok(MetricsResponse::IncomeAndExpensesProportion(vec![IncomeExpenseProportionMetric {
			church_name: church.abbreviated_church_name,
			income_records,
			expense_records,
		}]))
	}

	pub(crate) async fn income_and_expenses_comparative_by_year(
		&self,
		term: ChurchCurrencyYearTerm,
	) -> Result<MetricsResponse> {
		let window = year_window_or_invalid(term.year)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::IncomeAndExpensesComparative(Vec::new()));
		};
		let (income, expenses) = tokio::try_join!(
			offerings::monthly_income_sums(&self.db, term.church_id, window, Some(term.currency)),
			offerings::monthly_expense_sums(&self.db, term.church_id, window, Some(term.currency)),
		)?;

		Ok(MetricsResponse::IncomeAndExpensesComparative(format_monthly_comparative(
			&income,
			&expenses,
			term.currency,
		)))
	}

	pub(crate) async fn general_comparative_offering_income(
		&self,
		term: ChurchMonthRangeYearTerm,
	) -> Result<MetricsResponse> {
		let window = month_range_window_or_invalid(term.year, term.start_month, term.end_month)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MonthlyIncomeTotals(Vec::new()));
		};
		let rows =
			offerings::monthly_income_sums(&self.db, term.church_id, window, None).await?;

		Ok(MetricsResponse::MonthlyIncomeTotals(format_monthly_totals(
			&rows,
			term.start_month,
			term.end_month,
		)))
	}

	pub(crate) async fn comparative_offering_income_by_subtype(
		&self,
		term: ChurchMonthRangeYearTerm,
	) -> Result<MetricsResponse> {
		let window = month_range_window_or_invalid(term.year, term.start_month, term.end_month)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::IncomeSubtypeTotals(Vec::new()));
		};
		let rows = offerings::subtype_income_sums(&self.db, term.church_id, window).await?;

		Ok(MetricsResponse::IncomeSubtypeTotals(format_subtype_totals(&rows)))
	}

	pub(crate) async fn general_comparative_offering_expenses(
		&self,
		term: ChurchMonthRangeYearTerm,
	) -> Result<MetricsResponse> {
		let window = month_range_window_or_invalid(term.year, term.start_month, term.end_month)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::MonthlyExpenseTotals(Vec::new()));
		};
		let rows =
			offerings::monthly_expense_sums(&self.db, term.church_id, window, None).await?;

		Ok(MetricsResponse::MonthlyExpenseTotals(format_monthly_totals(
			&rows,
			term.start_month,
			term.end_month,
		)))
	}

	pub(crate) async fn comparative_offering_expenses_by_type(
		&self,
		term: ChurchMonthRangeYearTerm,
	) -> Result<MetricsResponse> {
		let window = month_range_window_or_invalid(term.year, term.start_month, term.end_month)?;
		let Some(_church) = churches::find_active_church(&self.db, term.church_id).await? else {
			return Ok(MetricsResponse::ExpenseTypeTotals(Vec::new()));
		};
		let rows = offerings::type_expense_sums(&self.db, term.church_id, window).await?;

		Ok(MetricsResponse::ExpenseTypeTotals(format_type_totals(&rows)))
	}
}

/// One row per calendar month of the year, in a single currency, with the
/// income/expense difference precomputed.
pub fn format_monthly_comparative(
	income: &[MonthlyTotalRow],
	expenses: &[MonthlyTotalRow],
	currency: Currency,
) -> Vec<MonthlyComparativeMetric> {
	MONTHS
		.iter()
		.map(|&month| {
			let number = i32::from(u8::from(month));
			let total_income = sum_for_month(income, number);
			let total_expenses = sum_for_month(expenses, number);

			MonthlyComparativeMetric {
				month: window::month_name(month).to_string(),
				currency,
				total_income,
				total_expenses,
				difference: total_income - total_expenses,
			}
		})
		.collect()
}

/// One row per month inside the requested range, with per-currency totals.
pub fn format_monthly_totals(
	rows: &[MonthlyTotalRow],
	start_month: Month,
	end_month: Month,
) -> Vec<MonthlyCurrencyTotalsMetric> {
	MONTHS
		.iter()
		.filter(|&&month| {
			(u8::from(start_month)..=u8::from(end_month)).contains(&u8::from(month))
		})
		.map(|&month| {
			let number = i32::from(u8::from(month));
			let mut accumulated = CurrencySums::default();

			for row in rows.iter().filter(|row| row.month == number) {
				accumulated.add(&row.currency, row.total);
			}

			MonthlyCurrencyTotalsMetric {
				month: window::month_name(month).to_string(),
				accumulated,
			}
		})
		.collect()
}

pub fn format_subtype_totals(rows: &[SubtypeTotalRow]) -> Vec<SubtypeCurrencyTotalsMetric> {
	let mut metrics: Vec<SubtypeCurrencyTotalsMetric> = Vec::new();

	for row in rows {
		match metrics.iter_mut().find(|metric| metric.subtype == row.subtype) {
			Some(metric) => metric.accumulated.add(&row.currency, row.total),
			None => {
				let mut accumulated = CurrencySums::default();

				accumulated.add(&row.currency, row.total);

				metrics.push(SubtypeCurrencyTotalsMetric { subtype: row.subtype.clone(), accumulated });
			},
		}
	}

	metrics
}

pub fn format_type_totals(rows: &[TypeTotalRow]) -> Vec<TypeCurrencyTotalsMetric> {
	let mut metrics: Vec<TypeCurrencyTotalsMetric> = Vec::new();

	for row in rows {
		match metrics.iter_mut().find(|metric| metric.expense_type == row.expense_type) {
			Some(metric) => metric.accumulated.add(&row.currency, row.total),
			None => {
				let mut accumulated = CurrencySums::default();

				accumulated.add(&row.currency, row.total);

				metrics.push(TypeCurrencyTotalsMetric {
					expense_type: row.expense_type.clone(),
					accumulated,
				});
			},
		}
	}

	metrics
}

fn sum_for_month(rows: &[MonthlyTotalRow], month: i32) -> f64 {
	rows.iter().filter(|row| row.month == month).map(|row| row.total).sum()
}
