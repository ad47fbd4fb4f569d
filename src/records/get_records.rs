//! This module implements functionality to list records.

use {
	super::{MAX_RECORDS, Record, RecordService},
	crate::{database::DatabaseError, http::problem_details::Problem},
	problem_details::AsProblemDetails,
	std::panic::Location,
};

pub(crate) type Result<T = Response, E = Error> = std::result::Result<T, E>;

/// Response for listing records.
pub(crate) type Response = Vec<Record>;

impl RecordService
{
	/// Returns up to [`MAX_RECORDS`] records in the order the database returns them.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub(crate) async fn get_records(&self) -> Result
	{
		let records = self.store.find_many(MAX_RECORDS).await?;

		Ok(records)
	}
}

/// Errors that can occur when listing records.
#[derive(Debug, Error)]
pub(crate) enum Error
{
	#[error("something went wrong; please report this incident")]
	Database(#[source] DatabaseError),
}

impl From<DatabaseError> for Error
{
	#[track_caller]
	fn from(error: DatabaseError) -> Self
	{
		tracing::error!(loc = %Location::caller(), %error, "failed to fetch records");
		Self::Database(error)
	}
}

impl AsProblemDetails for Error
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		match self {
			Self::Database(_) => Problem::Internal,
		}
	}
}

impl_into_response!(Error);
