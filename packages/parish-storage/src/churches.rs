use uuid::Uuid;

use crate::{Result, db::Db, models::ChurchRow};

pub async fn find_active_church(db: &Db, church_id: Uuid) -> Result<Option<ChurchRow>> {
	let row = sqlx::query_as::<_, ChurchRow>(
		"\
SELECT
	church_id,
	church_name,
	abbreviated_church_name,
	district,
	urban_sector,
	is_anexe,
	record_status,
	created_at,
	updated_at
FROM churches
WHERE church_id = $1
	AND record_status = 'active'",
	)
	.bind(church_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row)
}

pub async fn insert_church(db: &Db, church: &ChurchRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO churches (
	church_id,
	church_name,
	abbreviated_church_name,
	district,
	urban_sector,
	is_anexe,
	record_status,
	created_at,
	updated_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
	)
	.bind(church.church_id)
	.bind(church.church_name.as_str())
	.bind(church.abbreviated_church_name.as_str())
	.bind(church.district.as_str())
	.bind(church.urban_sector.as_str())
	.bind(church.is_anexe)
	.bind(church.record_status.as_str())
	.bind(church.created_at)
	.bind(church.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}
