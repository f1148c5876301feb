#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
}
impl From<archive_domain::project::UnknownEnumValue> for Error {
	fn from(err: archive_domain::project::UnknownEnumValue) -> Self {
		Self::InvalidArgument(err.to_string())
	}
}
