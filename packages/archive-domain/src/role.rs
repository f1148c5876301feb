use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	Ueso,
	Director,
	Vp,
	Faculty,
	ProgramHead,
	Coordinator,
	Dean,
	Client,
	Implementer,
	Guest,
}
impl Role {
	pub const ALL: [Self; 10] = [
		Self::Ueso,
		Self::Director,
		Self::Vp,
		Self::Faculty,
		Self::ProgramHead,
		Self::Coordinator,
		Self::Dean,
		Self::Client,
		Self::Implementer,
		Self::Guest,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ueso => "UESO",
			Self::Director => "DIRECTOR",
			Self::Vp => "VP",
			Self::Faculty => "FACULTY",
			Self::ProgramHead => "PROGRAM_HEAD",
			Self::Coordinator => "COORDINATOR",
			Self::Dean => "DEAN",
			Self::Client => "CLIENT",
			Self::Implementer => "IMPLEMENTER",
			Self::Guest => "GUEST",
		}
	}

	pub fn tier(self) -> VisibilityTier {
		match self {
			Self::Ueso | Self::Director | Self::Vp => VisibilityTier::Unrestricted,
			Self::Faculty | Self::ProgramHead | Self::Coordinator | Self::Dean =>
				VisibilityTier::Affiliated,
			Self::Client | Self::Implementer | Self::Guest => VisibilityTier::CompletedOnly,
		}
	}

	/// Staff roles that get the internal page layout. Faculty is not among them.
	pub fn is_internal(self) -> bool {
		matches!(
			self,
			Self::Vp | Self::Director | Self::Ueso | Self::ProgramHead | Self::Dean | Self::Coordinator
		)
	}
}
impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for Role {
	type Err = UnknownRole;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|role| role.as_str().eq_ignore_ascii_case(raw.trim()))
			.ok_or_else(|| UnknownRole(raw.to_string()))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}.")]
pub struct UnknownRole(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityTier {
	/// Sees every project.
	Unrestricted,
	/// Sees completed projects plus in-progress projects led from the actor's college.
	Affiliated,
	/// Sees completed projects only.
	CompletedOnly,
}

/// The requester of one archive operation.
///
/// Built once per request by the caller and passed explicitly; nothing in the archive reads the
/// current user from ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
	pub user_id: Option<Uuid>,
	pub role: Option<Role>,
	pub college_id: Option<Uuid>,
}
impl Actor {
	pub fn anonymous() -> Self {
		Self::default()
	}

	pub fn user(user_id: Uuid, role: Option<Role>, college_id: Option<Uuid>) -> Self {
		Self { user_id: Some(user_id), role, college_id }
	}

	pub fn is_authenticated(&self) -> bool {
		self.user_id.is_some()
	}

	pub fn tier(&self) -> VisibilityTier {
		self.role.map(Role::tier).unwrap_or(VisibilityTier::CompletedOnly)
	}

	pub fn is_internal(&self) -> bool {
		self.role.is_some_and(Role::is_internal)
	}
}
