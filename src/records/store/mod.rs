//! Persistence for [`Record`]s.

use {
	super::{NewRecord, Record, RecordId},
	crate::database::DatabaseResult,
	futures_util::future::BoxFuture,
	std::fmt,
};

pub(crate) use self::mongo::MongoRecordStore;

#[cfg(test)]
pub(crate) use self::memory::InMemoryRecordStore;

mod mongo;

#[cfg(test)]
mod memory;

/// A place records can be written to and read from.
pub(crate) trait RecordStore: fmt::Debug + Send + Sync + 'static
{
	/// Returns up to `limit` records in the store's natural order.
	fn find_many(&self, limit: u32) -> BoxFuture<'_, DatabaseResult<Vec<Record>>>;

	/// Persists a new record and returns the ID assigned to it.
	fn insert<'a>(&'a self, record: &'a NewRecord) -> BoxFuture<'a, DatabaseResult<RecordId>>;

	/// Looks up a single record by its ID.
	fn find_by_id(&self, id: RecordId) -> BoxFuture<'_, DatabaseResult<Option<Record>>>;
}
