//! Minimal HTML for the archive landing page.

use archive_domain::page::ArchivePage;

pub fn archive_page(page: &ArchivePage) -> String {
	let mut html = String::new();
	let role = page.user_role.unwrap_or("");

	html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
	html.push_str("<title>Project Archive</title>\n</head>\n");
	html.push_str(&format!(
		"<body data-layout=\"{}\" data-user-role=\"{}\" data-unread-notifications=\"{}\">\n",
		escape(page.base_template),
		escape(role),
		page.unread_notifications_count,
	));
	html.push_str("<h1>Project Archive</h1>\n<select id=\"archive-category\" name=\"category\">\n");

	for item in &page.categories {
		let selected = if item.value == page.default_category { " selected" } else { "" };

		html.push_str(&format!(
			"<option value=\"{}\"{selected}>{}</option>\n",
			escape(item.value),
			escape(item.label),
		));
	}

	html.push_str("</select>\n<div id=\"archive-results\"></div>\n</body>\n</html>\n");

	html
}

fn escape(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());

	for ch in raw.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}

	out
}

#[cfg(test)]
mod tests {
	use archive_domain::{Actor, Role, page::ArchivePage};
	use uuid::Uuid;

	use crate::render::{archive_page, escape};

	#[test]
	fn landing_page_lists_categories_in_order() {
		let html = archive_page(&ArchivePage::for_actor(&Actor::anonymous(), 0));
		let year = html.find("value=\"start_year\" selected").expect("Default category missing.");
		let college = html.find("College/CORD").expect("College option missing.");

		assert!(year < college);
		assert!(html.contains("data-layout=\"base_public.html\""));
		assert!(html.contains("data-unread-notifications=\"0\""));
		assert!(html.contains("<option value=\"college\">College/CORD</option>\n"));
		assert!(html.ends_with("</body>\n</html>\n"));
	}

	#[test]
	fn internal_roles_get_internal_layout() {
		let actor = Actor::user(Uuid::new_v4(), Some(Role::Coordinator), None);
		let html = archive_page(&ArchivePage::for_actor(&actor, 4));

		assert!(html.contains("data-layout=\"base_internal.html\""));
		assert!(html.contains("data-user-role=\"COORDINATOR\""));
		assert!(html.contains("data-unread-notifications=\"4\""));
	}

	#[test]
	fn escapes_markup() {
		assert_eq!(escape("<a href=\"x\">R&D</a>"), "&lt;a href=&quot;x&quot;&gt;R&amp;D&lt;/a&gt;");
	}
}
