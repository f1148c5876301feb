use archive_domain::{CategoryError, listing::PageError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid category specified: {category}.")]
	InvalidCategory { category: String },
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	/// The message is safe to show to clients; the underlying cause is only logged.
	#[error("{message}")]
	DataAccessFailure { message: String },
}
impl Error {
	pub(crate) fn data_access(
		operation: &'static str,
		public_message: &str,
		err: archive_storage::Error,
	) -> Self {
		tracing::error!(error = %err, operation, "Archive data access failed.");

		Self::DataAccessFailure { message: public_message.to_string() }
	}
}
impl From<CategoryError> for Error {
	fn from(err: CategoryError) -> Self {
		match err {
			CategoryError::InvalidCategory { category } => Self::InvalidCategory { category },
			err @ CategoryError::InvalidFilterValue { .. } =>
				Self::InvalidRequest { message: err.to_string() },
		}
	}
}
impl From<PageError> for Error {
	fn from(err: PageError) -> Self {
		Self::NotFound { message: err.to_string() }
	}
}

#[cfg(test)]
mod tests {
	use archive_domain::{Category, CategoryError, listing::PageError};

	use crate::{Error, aggregate::AGGREGATION_FAILED};

	#[test]
	fn data_access_hides_the_cause() {
		let err = Error::data_access(
			"aggregate",
			AGGREGATION_FAILED,
			archive_storage::Error::InvalidArgument("connection refused".to_string()),
		);

		assert_eq!(err.to_string(), AGGREGATION_FAILED);
		assert!(!err.to_string().contains("refused"));
	}

	#[test]
	fn domain_errors_map_to_request_errors() {
		let err = Error::from(CategoryError::InvalidCategory { category: "bogus".to_string() });

		assert!(matches!(err, Error::InvalidCategory { ref category } if category == "bogus"));

		let err = Error::from(CategoryError::InvalidFilterValue {
			category: Category::StartYear,
			value: "soon".to_string(),
		});

		assert!(matches!(err, Error::InvalidRequest { .. }));
		assert!(matches!(Error::from(PageError::InvalidPage), Error::NotFound { .. }));
	}
}
