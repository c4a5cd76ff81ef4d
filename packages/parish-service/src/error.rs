use parish_domain::TermError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Conflict: {message}")]
	Conflict { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<TermError> for Error {
	fn from(err: TermError) -> Self {
		Self::InvalidRequest { message: err.to_string() }
	}
}

impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<parish_storage::Error> for Error {
	fn from(err: parish_storage::Error) -> Self {
		if err.is_unique_violation() {
			return Self::Conflict {
				message: "A record with the same unique fields already exists.".to_string(),
			};
		}

		match err {
			parish_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			parish_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			parish_storage::Error::NotFound(message) => Self::NotFound { message },
			parish_storage::Error::Conflict(message) => Self::Conflict { message },
		}
	}
}
