use parish_domain::{
	Currency, DateWindow, OfferingExpenseType, OfferingIncomeSubtype, RecordStatus, SortDirection,
};
use uuid::Uuid;

use crate::{
	Result,
	db::Db,
	models::{
		CurrencyTotalRow, FamilyGroupOfferingRow, MonthlyTotalRow, OfferingExpenseRow,
		OfferingIncomeDetailRow, OfferingIncomeRow, SubtypeTotalRow, SundayOfferingRow,
		TypeTotalRow,
	},
};

pub async fn income_count_by_status(db: &Db, church_id: Uuid, status: RecordStatus) -> Result<i64> {
	let count = sqlx::query_scalar::<_, i64>(
		"SELECT COUNT(*) FROM offering_income WHERE church_id = $1 AND record_status = $2",
	)
	.bind(church_id)
	.bind(status.as_str())
	.fetch_one(&db.pool)
	.await?;

	Ok(count)
}

pub async fn expense_count_by_status(
	db: &Db,
	church_id: Uuid,
	status: RecordStatus,
) -> Result<i64> {
	let count = sqlx::query_scalar::<_, i64>(
		"SELECT COUNT(*) FROM offering_expenses WHERE church_id = $1 AND record_status = $2",
	)
	.bind(church_id)
	.bind(status.as_str())
	.fetch_one(&db.pool)
	.await?;

	Ok(count)
}

/// Active income rows of the given subtypes inside the window, with their
/// family group and zone context eager-loaded.
pub async fn list_income_detail(
	db: &Db,
	church_id: Uuid,
	subtypes: &[OfferingIncomeSubtype],
	window: DateWindow,
	order: SortDirection,
	limit: Option<i64>,
	offset: Option<i64>,
) -> Result<Vec<OfferingIncomeDetailRow>> {
	let mut builder = sqlx::QueryBuilder::new(
		"SELECT oi.offering_income_id, oi.subtype, oi.category, oi.amount, oi.currency, oi.date, \
		 oi.shift, oi.comments, oi.member_id, fg.family_group_code, fg.family_group_name, \
		 z.zone_name \
         FROM offering_income oi \
         LEFT JOIN family_groups fg ON oi.family_group_id = fg.family_group_id \
         LEFT JOIN zones z ON oi.zone_id = z.zone_id \
         WHERE oi.church_id = ",
	);

	builder.push_bind(church_id);
	builder.push(" AND oi.record_status = 'active' AND oi.subtype IN (");

	let mut separated = builder.separated(", ");

	for subtype in subtypes {
		separated.push_bind(subtype.as_str());
	}

	separated.push_unseparated(")");

	builder.push(" AND oi.date BETWEEN ");
	builder.push_bind(window.start);
	builder.push(" AND ");
	builder.push_bind(window.end);
	builder.push(format!(" ORDER BY oi.date {0}, oi.created_at {0}", order.as_sql()));

	if let Some(limit) = limit {
		builder.push(" LIMIT ");
		builder.push_bind(limit);
	}
	if let Some(offset) = offset {
		builder.push(" OFFSET ");
		builder.push_bind(offset);
	}

	let rows = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

/// Family-group-subtype income inside the window, joined with group, zone,
/// and preacher context; optionally restricted to one zone.
pub async fn list_family_group_income(
	db: &Db,
	church_id: Uuid,
	zone_id: Option<Uuid>,
	window: DateWindow,
) -> Result<Vec<FamilyGroupOfferingRow>> {
	let mut builder = sqlx::QueryBuilder::new(
		"SELECT fg.family_group_id, fg.family_group_name, fg.family_group_code, z.zone_name, \
		 p.first_names AS preacher_first_names, p.last_names AS preacher_last_names, oi.amount, \
		 oi.currency, oi.date \
         FROM offering_income oi \
         JOIN family_groups fg ON oi.family_group_id = fg.family_group_id \
         JOIN zones z ON fg.zone_id = z.zone_id \
         LEFT JOIN preachers p ON fg.preacher_id = p.member_id \
         WHERE oi.church_id = ",
	);

	builder.push_bind(church_id);
	builder.push(" AND oi.subtype = 'family_group' AND oi.record_status = 'active'");
	builder.push(" AND oi.date BETWEEN ");
	builder.push_bind(window.start);
	builder.push(" AND ");
	builder.push_bind(window.end);

	if let Some(zone_id) = zone_id {
		builder.push(" AND fg.zone_id = ");
		builder.push_bind(zone_id);
	}

	builder.push(" ORDER BY oi.date");

	let rows = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

/// Per (date, shift, currency) sums of one subtype inside the window; feeds
/// the Sunday-shaped formatters.
pub async fn sunday_sums(
	db: &Db,
	church_id: Uuid,
	subtype: OfferingIncomeSubtype,
	window: DateWindow,
) -> Result<Vec<SundayOfferingRow>> {
	let rows = sqlx::query_as::<_, SundayOfferingRow>(
		"\
SELECT oi.date, oi.shift, oi.currency, SUM(oi.amount) AS total
FROM offering_income oi
WHERE oi.church_id = $1
	AND oi.subtype = $2
	AND oi.record_status = 'active'
	AND oi.date BETWEEN $3 AND $4
GROUP BY oi.date, oi.shift, oi.currency
ORDER BY oi.date",
	)
	.bind(church_id)
	.bind(subtype.as_str())
	.bind(window.start)
	.bind(window.end)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn currency_income_sums(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
	subtypes: Option<&[OfferingIncomeSubtype]>,
) -> Result<Vec<CurrencyTotalRow>> {
	let mut builder = sqlx::QueryBuilder::new(
		"SELECT currency, SUM(amount) AS total FROM offering_income WHERE church_id = ",
	);

	builder.push_bind(church_id);
	builder.push(" AND record_status = 'active' AND date BETWEEN ");
	builder.push_bind(window.start);
	builder.push(" AND ");
	builder.push_bind(window.end);

	if let Some(subtypes) = subtypes {
		builder.push(" AND subtype IN (");

		let mut separated = builder.separated(", ");

		for subtype in subtypes {
			separated.push_bind(subtype.as_str());
		}

		separated.push_unseparated(")");
	}

	builder.push(" GROUP BY currency ORDER BY currency");

	let rows = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn currency_expense_sums(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
	expense_type: Option<OfferingExpenseType>,
) -> Result<Vec<CurrencyTotalRow>> {
	let mut builder = sqlx::QueryBuilder::new(
		"SELECT currency, SUM(amount) AS total FROM offering_expenses WHERE church_id = ",
	);

	builder.push_bind(church_id);
	builder.push(" AND record_status = 'active' AND date BETWEEN ");
	builder.push_bind(window.start);
	builder.push(" AND ");
	builder.push_bind(window.end);

	if let Some(expense_type) = expense_type {
		builder.push(" AND type = ");
		builder.push_bind(expense_type.as_str());
	}

	builder.push(" GROUP BY currency ORDER BY currency");

	let rows = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn monthly_income_sums(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
	currency: Option<Currency>,
) -> Result<Vec<MonthlyTotalRow>> {
	monthly_sums(db, "offering_income", church_id, window, currency).await
}

pub async fn monthly_expense_sums(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
	currency: Option<Currency>,
) -> Result<Vec<MonthlyTotalRow>> {
	monthly_sums(db, "offering_expenses", church_id, window, currency).await
}

async fn monthly_sums(
	db: &Db,
	table: &str,
	church_id: Uuid,
	window: DateWindow,
	currency: Option<Currency>,
) -> Result<Vec<MonthlyTotalRow>> {
	let mut builder = sqlx::QueryBuilder::new(format!(
		"SELECT EXTRACT(MONTH FROM date)::int AS month, currency, SUM(amount) AS total FROM \
		 {table} WHERE church_id = ",
	));

	builder.push_bind(church_id);
	builder.push(" AND record_status = 'active' AND date BETWEEN ");
	builder.push_bind(window.start);
	builder.push(" AND ");
	builder.push_bind(window.end);

	if let Some(currency) = currency {
		builder.push(" AND currency = ");
		builder.push_bind(currency.as_str());
	}

	builder.push(" GROUP BY month, currency ORDER BY month, currency");

	let rows = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn subtype_income_sums(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
) -> Result<Vec<SubtypeTotalRow>> {
	let rows = sqlx::query_as::<_, SubtypeTotalRow>(
		"\
SELECT subtype, currency, SUM(amount) AS total
FROM offering_income
WHERE church_id = $1
	AND record_status = 'active'
	AND date BETWEEN $2 AND $3
GROUP BY subtype, currency
ORDER BY subtype, currency",
	)
	.bind(church_id)
	.bind(window.start)
	.bind(window.end)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn type_expense_sums(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
) -> Result<Vec<TypeTotalRow>> {
	let rows = sqlx::query_as::<_, TypeTotalRow>(
		"\
SELECT type AS expense_type, currency, SUM(amount) AS total
FROM offering_expenses
WHERE church_id = $1
	AND record_status = 'active'
	AND date BETWEEN $2 AND $3
GROUP BY type, currency
ORDER BY type, currency",
	)
	.bind(church_id)
	.bind(window.start)
	.bind(window.end)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Active expense rows of one type inside the window.
pub async fn list_expense_detail(
	db: &Db,
	church_id: Uuid,
	expense_type: OfferingExpenseType,
	window: DateWindow,
	order: SortDirection,
	limit: Option<i64>,
	offset: Option<i64>,
) -> Result<Vec<OfferingExpenseRow>> {
	let mut builder = sqlx::QueryBuilder::new(
		"SELECT offering_expense_id, type AS expense_type, subtype, amount, currency, date, \
		 comments, church_id, record_status, created_at, updated_at \
         FROM offering_expenses WHERE church_id = ",
	);

	builder.push_bind(church_id);
	builder.push(" AND type = ");
	builder.push_bind(expense_type.as_str());
	builder.push(" AND record_status = 'active' AND date BETWEEN ");
	builder.push_bind(window.start);
	builder.push(" AND ");
	builder.push_bind(window.end);
	builder.push(format!(" ORDER BY date {0}, created_at {0}", order.as_sql()));

	if let Some(limit) = limit {
		builder.push(" LIMIT ");
		builder.push_bind(limit);
	}
	if let Some(offset) = offset {
		builder.push(" OFFSET ");
		builder.push_bind(offset);
	}

	let rows = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn insert_income(db: &Db, income: &OfferingIncomeRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO offering_income (
	offering_income_id,
	subtype,
	category,
	amount,
	currency,
	date,
	shift,
	comments,
	church_id,
	family_group_id,
	zone_id,
	member_id,
	record_status,
	created_at,
	updated_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
	)
	.bind(income.offering_income_id)
	.bind(income.subtype.as_str())
	.bind(income.category.as_deref())
	.bind(income.amount)
	.bind(income.currency.as_str())
	.bind(income.date)
	.bind(income.shift.as_deref())
	.bind(income.comments.as_deref())
	.bind(income.church_id)
	.bind(income.family_group_id)
	.bind(income.zone_id)
	.bind(income.member_id)
	.bind(income.record_status.as_str())
	.bind(income.created_at)
	.bind(income.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn insert_expense(db: &Db, expense: &OfferingExpenseRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO offering_expenses (
	offering_expense_id,
	type,
	subtype,
	amount,
	currency,
	date,
	comments,
	church_id,
	record_status,
	created_at,
	updated_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
	)
	.bind(expense.offering_expense_id)
	.bind(expense.expense_type.as_str())
	.bind(expense.subtype.as_deref())
	.bind(expense.amount)
	.bind(expense.currency.as_str())
	.bind(expense.date)
	.bind(expense.comments.as_deref())
	.bind(expense.church_id)
	.bind(expense.record_status.as_str())
	.bind(expense.created_at)
	.bind(expense.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}
