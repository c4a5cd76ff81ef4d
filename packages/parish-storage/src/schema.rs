pub fn render_schema() -> String {
	expand_includes(include_str!("../../../sql/init.sql"))
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_churches.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_churches.sql")),
				"tables/002_pastors.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_pastors.sql")),
				"tables/003_copastors.sql" =>
					out.push_str(include_str!("../../../sql/tables/003_copastors.sql")),
				"tables/004_supervisors.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_supervisors.sql")),
				"tables/005_zones.sql" =>
					out.push_str(include_str!("../../../sql/tables/005_zones.sql")),
				"tables/006_preachers.sql" =>
					out.push_str(include_str!("../../../sql/tables/006_preachers.sql")),
				"tables/007_family_groups.sql" =>
					out.push_str(include_str!("../../../sql/tables/007_family_groups.sql")),
				"tables/008_disciples.sql" =>
					out.push_str(include_str!("../../../sql/tables/008_disciples.sql")),
				"tables/009_offering_income.sql" =>
					out.push_str(include_str!("../../../sql/tables/009_offering_income.sql")),
				"tables/010_offering_expenses.sql" =>
					out.push_str(include_str!("../../../sql/tables/010_offering_expenses.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}
