use crate::{
	predicate::{FieldValue, Predicate, ProjectField},
	project::ProjectStatus,
	role::{Actor, VisibilityTier},
};

/// Projects the actor may see in the archive.
///
/// Depends only on the actor's role and college. An affiliated actor without a college sees the
/// same projects as the completed-only tier.
pub fn resolve(actor: &Actor) -> Predicate {
	match actor.tier() {
		VisibilityTier::Unrestricted => Predicate::All,
		VisibilityTier::Affiliated => match actor.college_id {
			Some(college_id) => Predicate::Or(vec![
				status_is(ProjectStatus::Completed),
				Predicate::And(vec![
					status_is(ProjectStatus::InProgress),
					Predicate::eq(ProjectField::LeaderCollegeId, FieldValue::Id(college_id)),
				]),
			]),
			None => status_is(ProjectStatus::Completed),
		},
		VisibilityTier::CompletedOnly => status_is(ProjectStatus::Completed),
	}
}

fn status_is(status: ProjectStatus) -> Predicate {
	Predicate::eq(ProjectField::Status, FieldValue::text(status.as_str()))
}
