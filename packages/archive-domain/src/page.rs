use serde::Serialize;

use crate::{category::Category, role::Actor};

pub const INTERNAL_LAYOUT: &str = "base_internal.html";
pub const PUBLIC_LAYOUT: &str = "base_public.html";
pub const DEFAULT_CATEGORY: Category = Category::StartYear;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMenuItem {
	pub value: &'static str,
	pub label: &'static str,
}

/// Everything the archive landing page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivePage {
	pub base_template: &'static str,
	pub categories: Vec<CategoryMenuItem>,
	pub default_category: &'static str,
	pub user_role: Option<&'static str>,
	pub unread_notifications_count: i64,
}
impl ArchivePage {
	pub fn for_actor(actor: &Actor, unread_notifications_count: i64) -> Self {
		Self {
			base_template: if actor.is_internal() { INTERNAL_LAYOUT } else { PUBLIC_LAYOUT },
			categories: category_menu(),
			default_category: DEFAULT_CATEGORY.as_str(),
			user_role: actor.role.map(|role| role.as_str()),
			unread_notifications_count,
		}
	}
}

pub fn category_menu() -> Vec<CategoryMenuItem> {
	Category::ALL
		.into_iter()
		.map(|category| CategoryMenuItem { value: category.as_str(), label: category.label() })
		.collect()
}
