pub fn render_schema() -> String {
	expand_includes(include_str!("../../../sql/init.sql"))
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"00_extensions.sql" => out.push_str(include_str!("../../../sql/00_extensions.sql")),
				"tables/001_colleges.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_colleges.sql")),
				"tables/002_users.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_users.sql")),
				"tables/003_agendas.sql" =>
					out.push_str(include_str!("../../../sql/tables/003_agendas.sql")),
				"tables/004_projects.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_projects.sql")),
				"tables/005_notifications.sql" =>
					out.push_str(include_str!("../../../sql/tables/005_notifications.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}

#[cfg(test)]
mod tests {
	#[test]
	fn includes_are_expanded() {
		let sql = super::render_schema();

		assert!(!sql.contains("\\ir "));

		for table in ["colleges", "users", "agendas", "projects", "notifications"] {
			assert!(
				sql.contains(&format!("CREATE TABLE IF NOT EXISTS {table} (")),
				"Missing table {table}."
			);
		}
	}
}
