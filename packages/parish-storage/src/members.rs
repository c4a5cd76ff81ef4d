use parish_domain::{DateWindow, MemberRole, RecordStatus};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
	Result,
	db::Db,
	models::{MemberRow, MemberWithRoleRow, SectorGenderRow, ZoneGenderRow},
};

const MEMBER_COLUMNS: &str = "\
member_id, first_names, last_names, gender, birth_date, marital_status, district, urban_sector, \
origin_country, conversion_date, church_id, record_status, created_at, updated_at";

fn table(role: MemberRole) -> &'static str {
	match role {
		MemberRole::Pastor => "pastors",
		MemberRole::Copastor => "copastors",
		MemberRole::Supervisor => "supervisors",
		MemberRole::Preacher => "preachers",
		MemberRole::Disciple => "disciples",
	}
}

fn parent_column(role: MemberRole) -> Option<&'static str> {
	match role {
		MemberRole::Pastor => None,
		MemberRole::Copastor => Some("pastor_id"),
		MemberRole::Supervisor => Some("copastor_id"),
		MemberRole::Preacher => Some("supervisor_id"),
		MemberRole::Disciple => Some("family_group_id"),
	}
}

pub async fn count_by_status(
	db: &Db,
	church_id: Uuid,
	role: MemberRole,
	status: RecordStatus,
) -> Result<i64> {
	let sql = format!(
		"SELECT COUNT(*) FROM {} WHERE church_id = $1 AND record_status = $2",
		table(role),
	);
	let count = sqlx::query_scalar::<_, i64>(&sql)
		.bind(church_id)
		.bind(status.as_str())
		.fetch_one(&db.pool)
		.await?;

	Ok(count)
}

/// All active members of the church across the five role tables, labeled with
/// their role.
pub async fn list_active_with_roles(db: &Db, church_id: Uuid) -> Result<Vec<MemberWithRoleRow>> {
	let sql = MemberRole::ALL
		.map(|role| {
			format!(
				"SELECT member_id, '{}' AS role, first_names, last_names, gender, birth_date, \
				 marital_status, district, urban_sector FROM {} WHERE church_id = $1 AND \
				 record_status = 'active'",
				role.as_str(),
				table(role),
			)
		})
		.join("\nUNION ALL\n");
	let rows =
		sqlx::query_as::<_, MemberWithRoleRow>(&sql).bind(church_id).fetch_all(&db.pool).await?;

	Ok(rows)
}

/// Creation timestamps of members created inside the window, across the five
/// role tables. Feeds the fluctuation formatter's monthly buckets.
pub async fn created_in_window(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
) -> Result<Vec<OffsetDateTime>> {
	let sql = MemberRole::ALL
		.map(|role| {
			format!(
				"SELECT created_at FROM {} WHERE church_id = $1 AND created_at::date BETWEEN $2 \
				 AND $3",
				table(role),
			)
		})
		.join("\nUNION ALL\n");
	let rows = sqlx::query_scalar::<_, OffsetDateTime>(&sql)
		.bind(church_id)
		.bind(window.start)
		.bind(window.end)
		.fetch_all(&db.pool)
		.await?;

	Ok(rows)
}

/// Update timestamps of members flipped to inactive inside the window.
pub async fn inactivated_in_window(
	db: &Db,
	church_id: Uuid,
	window: DateWindow,
) -> Result<Vec<OffsetDateTime>> {
	let sql = MemberRole::ALL
		.map(|role| {
			format!(
				"SELECT updated_at FROM {} WHERE church_id = $1 AND record_status = 'inactive' \
				 AND updated_at::date BETWEEN $2 AND $3",
				table(role),
			)
		})
		.join("\nUNION ALL\n");
	let rows = sqlx::query_scalar::<_, OffsetDateTime>(&sql)
		.bind(church_id)
		.bind(window.start)
		.bind(window.end)
		.fetch_all(&db.pool)
		.await?;

	Ok(rows)
}

/// Active disciples under the copastor's zones, labeled with the zone name.
pub async fn list_zone_genders(
	db: &Db,
	church_id: Uuid,
	copastor_id: Uuid,
) -> Result<Vec<ZoneGenderRow>> {
	let rows = sqlx::query_as::<_, ZoneGenderRow>(
		"\
SELECT z.zone_name, d.gender
FROM disciples d
JOIN family_groups fg ON d.family_group_id = fg.family_group_id
JOIN zones z ON fg.zone_id = z.zone_id
JOIN supervisors s ON z.supervisor_id = s.member_id
WHERE d.church_id = $1
	AND s.copastor_id = $2
	AND d.record_status = 'active'
	AND z.record_status = 'active'
ORDER BY z.zone_name",
	)
	.bind(church_id)
	.bind(copastor_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Active members of the district across the five role tables, labeled with
/// their urban sector.
pub async fn list_district_genders(
	db: &Db,
	church_id: Uuid,
	district: &str,
) -> Result<Vec<SectorGenderRow>> {
	let sql = MemberRole::ALL
		.map(|role| {
			format!(
				"SELECT urban_sector, gender FROM {} WHERE church_id = $1 AND district = $2 AND \
				 record_status = 'active'",
				table(role),
			)
		})
		.join("\nUNION ALL\n");
	let rows = sqlx::query_as::<_, SectorGenderRow>(&sql)
		.bind(church_id)
		.bind(district)
		.fetch_all(&db.pool)
		.await?;

	Ok(rows)
}

pub async fn find_active_copastor(db: &Db, copastor_id: Uuid) -> Result<Option<MemberRow>> {
	let sql = format!(
		"SELECT {MEMBER_COLUMNS} FROM copastors WHERE member_id = $1 AND record_status = 'active'",
	);
	let row = sqlx::query_as::<_, MemberRow>(&sql).bind(copastor_id).fetch_optional(&db.pool).await?;

	Ok(row)
}

pub async fn insert_member(
	db: &Db,
	role: MemberRole,
	member: &MemberRow,
	parent_id: Option<Uuid>,
) -> Result<()> {
	let sql = match parent_column(role) {
		Some(parent) => format!(
			"INSERT INTO {} (member_id, first_names, last_names, gender, birth_date, \
			 marital_status, district, urban_sector, origin_country, conversion_date, {parent}, \
			 church_id, record_status, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, \
			 $7, $8, $9, $10, $11, $12, $13, $14, $15)",
			table(role),
		),
		None => format!(
			"INSERT INTO {} (member_id, first_names, last_names, gender, birth_date, \
			 marital_status, district, urban_sector, origin_country, conversion_date, church_id, \
			 record_status, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, \
			 $10, $11, $12, $13, $14)",
			table(role),
		),
	};
	let mut query = sqlx::query(&sql)
		.bind(member.member_id)
		.bind(member.first_names.as_str())
		.bind(member.last_names.as_str())
		.bind(member.gender.as_str())
		.bind(member.birth_date)
		.bind(member.marital_status.as_str())
		.bind(member.district.as_str())
		.bind(member.urban_sector.as_str())
		.bind(member.origin_country.as_str())
		.bind(member.conversion_date);

	if parent_column(role).is_some() {
		query = query.bind(parent_id);
	}

	query
		.bind(member.church_id)
		.bind(member.record_status.as_str())
		.bind(member.created_at)
		.bind(member.updated_at)
		.execute(&db.pool)
		.await?;

	Ok(())
}
