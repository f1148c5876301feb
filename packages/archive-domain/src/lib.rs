//! Request-independent rules of the project archive.
//!
//! Nothing here performs I/O. Storage renders [`predicate::Predicate`] values into SQL, and the
//! same values evaluate in memory against [`project::ProjectFacts`].

pub mod category;
pub mod listing;
pub mod page;
pub mod predicate;
pub mod project;
pub mod role;
pub mod visibility;

pub use category::{Category, CategoryError, CategoryFilter, NOT_AVAILABLE};
pub use predicate::{FieldValue, Predicate, ProjectField};
pub use project::{ProjectFacts, ProjectStatus, ProjectType};
pub use role::{Actor, Role, VisibilityTier};
