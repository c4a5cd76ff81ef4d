use parish_domain::{DateWindow, RecordStatus};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
	Result,
	db::Db,
	models::{
		FamilyGroupDetailRow, FamilyGroupRow, GroupGenderRow, SectorGroupCountRow, ZoneGroupCountRow,
		ZoneRow, ZoneStatusCountRow,
	},
};

const DETAIL_COLUMNS: &str = "\
fg.family_group_id,
	fg.family_group_name,
	fg.family_group_code,
	fg.family_group_number,
	fg.service_time,
	fg.urban_sector,
	z.zone_name,
	p.first_names AS preacher_first_names,
	p.last_names AS preacher_last_names,
	COUNT(d.member_id) AS disciple_count,
	fg.record_status";

pub async fn count_by_status(db: &Db, church_id: Uuid, status: RecordStatus) -> Result<i64> {
	let count = sqlx::query_scalar::<_, i64>(
		"SELECT COUNT(*) FROM family_groups WHERE church_id = $1 AND record_status = $2",
	)
	.bind(church_id)
	.bind(status.as_str())
	.fetch_one(&db.pool)
	.await?;

	Ok(count)
}

/// One row per (group, active disciple); groups without disciples appear once
/// with a null gender.
pub async fn list_group_genders(db: &Db, church_id: Uuid) -> Result<Vec<GroupGenderRow>> {
	let rows = sqlx::query_as::<_, GroupGenderRow>(
		"\
SELECT fg.family_group_code, fg.family_group_name, d.gender
FROM family_groups fg
LEFT JOIN disciples d ON d.family_group_id = fg.family_group_id AND d.record_status = 'active'
WHERE fg.church_id = $1
	AND fg.record_status = 'active'
ORDER BY fg.family_group_code",
	)
	.bind(church_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn list_detail_by_zone(db: &Db, zone_id: Uuid) -> Result<Vec<FamilyGroupDetailRow>> {
	let sql = format!(
		"\
SELECT
	{DETAIL_COLUMNS}
FROM family_groups fg
JOIN zones z ON fg.zone_id = z.zone_id
LEFT JOIN preachers p ON fg.preacher_id = p.member_id
LEFT JOIN disciples d ON d.family_group_id = fg.family_group_id AND d.record_status = 'active'
WHERE fg.zone_id = $1
	AND fg.record_status = 'active'
GROUP BY
	fg.family_group_id,
	fg.family_group_name,
	fg.family_group_code,
	fg.family_group_number,
	fg.service_time,
	fg.urban_sector,
	z.zone_name,
	p.first_names,
	p.last_names,
	fg.record_status
ORDER BY fg.family_group_number",
	);
	let rows =
		sqlx::query_as::<_, FamilyGroupDetailRow>(&sql).bind(zone_id).fetch_all(&db.pool).await?;

	Ok(rows)
}

/// Zones under the copastor with their active group counts.
pub async fn zone_group_counts(
	db: &Db,
	church_id: Uuid,
	copastor_id: Uuid,
) -> Result<Vec<ZoneGroupCountRow>> {
	let rows = sqlx::query_as::<_, ZoneGroupCountRow>(
		"\
SELECT z.zone_id, z.zone_name, COUNT(fg.family_group_id) AS group_count
FROM zones z
JOIN supervisors s ON z.supervisor_id = s.member_id
LEFT JOIN family_groups fg ON fg.zone_id = z.zone_id AND fg.record_status = 'active'
WHERE z.church_id = $1
	AND s.copastor_id = $2
	AND z.record_status = 'active'
GROUP BY z.zone_id, z.zone_name
ORDER BY z.zone_name",
	)
	.bind(church_id)
	.bind(copastor_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn district_group_counts(
	db: &Db,
	church_id: Uuid,
	district: &str,
) -> Result<Vec<SectorGroupCountRow>> {
	let rows = sqlx::query_as::<_, SectorGroupCountRow>(
		"\
SELECT urban_sector, COUNT(*) AS group_count
FROM family_groups
WHERE church_id = $1
	AND district = $2
	AND record_status = 'active'
GROUP BY urban_sector
ORDER BY urban_sector",
	)
	.bind(church_id)
	.bind(district)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn zone_status_counts(db: &Db, zone_id: Uuid) -> Result<Vec<ZoneStatusCountRow>> {
	let rows = sqlx::query_as::<_, ZoneStatusCountRow>(
		"\
SELECT z.zone_name, fg.record_status, COUNT(*) AS group_count
FROM family_groups fg
JOIN zones z ON fg.zone_id = z.zone_id
WHERE fg.zone_id = $1
GROUP BY z.zone_name, fg.record_status
ORDER BY fg.record_status",
	)
	.bind(zone_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn created_in_window(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
) -> Result<Vec<OffsetDateTime>> {
	let rows = sqlx::query_scalar::<_, OffsetDateTime>(
		"\
SELECT created_at
FROM family_groups
WHERE church_id = $1
	AND created_at::date BETWEEN $2 AND $3",
	)
	.bind(church_id)
	.bind(window.start)
	.bind(window.end)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn inactivated_in_window(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
) -> Result<Vec<OffsetDateTime>> {
	let rows = sqlx::query_scalar::<_, OffsetDateTime>(
		"\
SELECT updated_at
FROM family_groups
WHERE church_id = $1
	AND record_status = 'inactive'
	AND updated_at::date BETWEEN $2 AND $3",
	)
	.bind(church_id)
	.bind(window.start)
	.bind(window.end)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn find_active_zone(db: &Db, zone_id: Uuid) -> Result<Option<ZoneRow>> {
	let row = sqlx::query_as::<_, ZoneRow>(
		"\
SELECT zone_id, zone_name, district, supervisor_id, church_id, record_status, created_at, updated_at
FROM zones
WHERE zone_id = $1
	AND record_status = 'active'",
	)
	.bind(zone_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row)
}

pub async fn insert_zone(db: &Db, zone: &ZoneRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO zones (
	zone_id,
	zone_name,
	district,
	supervisor_id,
	church_id,
	record_status,
	created_at,
	updated_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
	)
	.bind(zone.zone_id)
	.bind(zone.zone_name.as_str())
	.bind(zone.district.as_str())
	.bind(zone.supervisor_id)
	.bind(zone.church_id)
	.bind(zone.record_status.as_str())
	.bind(zone.created_at)
	.bind(zone.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn insert_family_group(db: &Db, group: &FamilyGroupRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO family_groups (
	family_group_id,
	family_group_name,
	family_group_code,
	family_group_number,
	service_time,
	district,
	urban_sector,
	zone_id,
	preacher_id,
	church_id,
	record_status,
	created_at,
	updated_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
	)
	.bind(group.family_group_id)
	.bind(group.family_group_name.as_str())
	.bind(group.family_group_code.as_str())
	.bind(group.family_group_number)
	.bind(group.service_time.as_str())
	.bind(group.district.as_str())
	.bind(group.urban_sector.as_str())
	.bind(group.zone_id)
	.bind(group.preacher_id)
	.bind(group.church_id)
	.bind(group.record_status.as_str())
	.bind(group.created_at)
	.bind(group.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}
