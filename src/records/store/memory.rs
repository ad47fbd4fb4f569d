use {
	super::RecordStore,
	crate::{
		database::{DatabaseError, DatabaseResult},
		records::{NewRecord, Record, RecordId},
	},
	futures_util::future::{self, BoxFuture, FutureExt},
	std::sync::{
		Arc,
		Mutex,
		PoisonError,
		atomic::{self, AtomicBool, AtomicUsize},
	},
};

/// A [`RecordStore`] that keeps everything in memory.
///
/// It can be switched into a failing mode, in which every operation returns an error.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryRecordStore
{
	records: Arc<Mutex<Vec<Record>>>,
	writes: Arc<AtomicUsize>,
	failing: Arc<AtomicBool>,
}

impl InMemoryRecordStore
{
	pub(crate) fn new() -> Self
	{
		Self::default()
	}

	/// Makes every subsequent operation fail (or succeed again).
	pub(crate) fn set_failing(&self, failing: bool)
	{
		self.failing.store(failing, atomic::Ordering::SeqCst);
	}

	/// How many times [`RecordStore::insert()`] was called successfully.
	pub(crate) fn write_count(&self) -> usize
	{
		self.writes.load(atomic::Ordering::SeqCst)
	}

	fn check_available(&self) -> DatabaseResult<()>
	{
		if self.failing.load(atomic::Ordering::SeqCst) {
			return Err(DatabaseError::Unavailable);
		}

		Ok(())
	}

	fn with_records<R>(&self, op: impl FnOnce(&mut Vec<Record>) -> R) -> R
	{
		let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
		op(&mut records)
	}
}

impl RecordStore for InMemoryRecordStore
{
	fn find_many(&self, limit: u32) -> BoxFuture<'_, DatabaseResult<Vec<Record>>>
	{
		let result = self.check_available().map(|()| {
			self.with_records(|records| {
				records
					.iter()
					.take(usize::try_from(limit).unwrap_or(usize::MAX))
					.cloned()
					.collect()
			})
		});

		future::ready(result).boxed()
	}

	fn insert<'a>(&'a self, record: &'a NewRecord) -> BoxFuture<'a, DatabaseResult<RecordId>>
	{
		let result = self.check_available().map(|()| {
			let id = RecordId::new();

			self.with_records(|records| records.push(Record::from_new(id, record.clone())));
			self.writes.fetch_add(1, atomic::Ordering::SeqCst);

			id
		});

		future::ready(result).boxed()
	}

	fn find_by_id(&self, id: RecordId) -> BoxFuture<'_, DatabaseResult<Option<Record>>>
	{
		let result = self.check_available().map(|()| {
			self.with_records(|records| records.iter().find(|record| record.id == id).cloned())
		});

		future::ready(result).boxed()
	}
}
