//! This module implements functionality to create new records.

use {
	super::{NewRecord, Record, RecordId, RecordService},
	crate::{database::DatabaseError, http::problem_details::Problem},
	problem_details::AsProblemDetails,
	std::panic::Location,
};

pub(crate) type Result<T = Response, E = Error> = std::result::Result<T, E>;

/// Request for creating a new record.
pub(crate) type Request = NewRecord;

/// Response for creating a new record.
///
/// This is the record as read back from the database after inserting it.
pub(crate) type Response = Record;

impl RecordService
{
	/// Persists a new record and reads it back.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub(crate) async fn submit_record(&self, request: Request) -> Result
	{
		let record_id = self.store.insert(&request).await?;

		tracing::info!(id = %record_id, "created record");

		self.store
			.find_by_id(record_id)
			.await?
			.ok_or_else(|| Error::missing_after_insert(record_id))
	}
}

/// Errors that can occur when creating a new record.
#[derive(Debug, Error)]
pub(crate) enum Error
{
	/// The record could not be found right after inserting it.
	#[error("something went wrong; please report this incident")]
	MissingAfterInsert
	{
		id: RecordId,
	},

	#[error("something went wrong; please report this incident")]
	Database(#[source] DatabaseError),
}

impl Error
{
	#[track_caller]
	fn missing_after_insert(id: RecordId) -> Self
	{
		tracing::error!(loc = %Location::caller(), %id, "created record could not be read back");
		Self::MissingAfterInsert { id }
	}
}

impl From<DatabaseError> for Error
{
	#[track_caller]
	fn from(error: DatabaseError) -> Self
	{
		tracing::error!(loc = %Location::caller(), %error, "failed to create record");
		Self::Database(error)
	}
}

impl AsProblemDetails for Error
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		match self {
			Self::MissingAfterInsert { .. } | Self::Database(_) => Problem::Internal,
		}
	}
}

impl_into_response!(Error);
