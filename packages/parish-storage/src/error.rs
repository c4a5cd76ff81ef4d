#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Not found: {0}")]
	NotFound(String),
	#[error("Conflict: {0}")]
	Conflict(String),
}
impl Error {
	/// A Postgres unique-constraint violation (SQLSTATE 23505); mapped to a
	/// client error at the service boundary.
	pub fn is_unique_violation(&self) -> bool {
		match self {
			Self::Sqlx(sqlx::Error::Database(err)) => err.code().as_deref() == Some("23505"),
			_ => false,
		}
	}
}
