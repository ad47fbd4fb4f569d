//! This module implements functionality to fetch a single record by its ID.

use {
	super::{Record, RecordId, RecordService},
	crate::{database::DatabaseError, http::problem_details::Problem},
	problem_details::AsProblemDetails,
	std::panic::Location,
};

pub(crate) type Result<T = Response, E = Error> = std::result::Result<T, E>;

/// Response for fetching a single record.
pub(crate) type Response = Record;

impl RecordService
{
	/// Gets a specific record by its ID.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub(crate) async fn get_record(&self, record_id: RecordId) -> Result
	{
		self.store
			.find_by_id(record_id)
			.await?
			.ok_or(Error::NotFound)
	}
}

/// Errors that can occur when fetching a single record.
#[derive(Debug, Error)]
pub(crate) enum Error
{
	#[error("record not found")]
	NotFound,

	#[error("something went wrong; please report this incident")]
	Database(#[source] DatabaseError),
}

impl From<DatabaseError> for Error
{
	#[track_caller]
	fn from(error: DatabaseError) -> Self
	{
		tracing::error!(loc = %Location::caller(), %error, "failed to fetch record");
		Self::Database(error)
	}
}

impl AsProblemDetails for Error
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		match self {
			Self::NotFound => Problem::ResourceNotFound,
			Self::Database(_) => Problem::Internal,
		}
	}
}

impl_into_response!(Error);
