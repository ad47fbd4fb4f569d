//! On/off intervals of a device, as reported by its frontend.

use std::sync::Arc;

pub(crate) use self::{
	id::RecordId,
	models::{NewRecord, Record},
	store::RecordStore,
};

mod id;
mod models;

pub(crate) mod get_record;
pub(crate) mod get_records;
pub(crate) mod http;
pub(crate) mod store;
pub(crate) mod submit_record;

/// The maximum number of records returned by [`RecordService::get_records()`].
pub(crate) const MAX_RECORDS: u32 = 1024;

/// A service to list and create records.
#[derive(Debug, Clone)]
pub(crate) struct RecordService
{
	store: Arc<dyn RecordStore>,
}

impl RecordService
{
	pub(crate) fn new(store: impl RecordStore) -> Self
	{
		Self { store: Arc::new(store) }
	}
}
