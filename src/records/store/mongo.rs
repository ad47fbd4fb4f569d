use {
	super::RecordStore,
	crate::{
		database::{DatabaseError, DatabaseResult},
		records::{NewRecord, Record, RecordId, models::RecordDocument},
	},
	derive_more::Debug,
	futures_util::{FutureExt, TryStreamExt, future::BoxFuture},
	mongodb::{
		Collection,
		Database,
		bson::{doc, oid::ObjectId},
	},
};

/// A [`RecordStore`] backed by a MongoDB collection.
#[derive(Debug, Clone)]
pub(crate) struct MongoRecordStore
{
	#[debug("{:?}", collection.name())]
	collection: Collection<RecordDocument>,
}

impl MongoRecordStore
{
	pub(crate) fn new(database: &Database, collection_name: &str) -> Self
	{
		Self { collection: database.collection(collection_name) }
	}

	#[tracing::instrument(level = "debug", err(level = "debug"))]
	async fn find_many_impl(&self, limit: u32) -> DatabaseResult<Vec<Record>>
	{
		let records = self
			.collection
			.find(doc! {})
			.limit(i64::from(limit))
			.await?
			.map_ok(Record::from)
			.try_collect::<Vec<_>>()
			.await?;

		tracing::debug!(count = records.len(), "fetched records");

		Ok(records)
	}

	#[tracing::instrument(level = "debug", err(level = "debug"))]
	async fn insert_impl(&self, record: &NewRecord) -> DatabaseResult<RecordId>
	{
		let result = self
			.collection
			.clone_with_type::<NewRecord>()
			.insert_one(record)
			.await?;

		let id = result
			.inserted_id
			.as_object_id()
			.ok_or_else(|| DatabaseError::UnexpectedId(result.inserted_id.clone()))?;

		tracing::debug!(%id, "inserted record");

		Ok(RecordId::from(id))
	}

	#[tracing::instrument(level = "debug", err(level = "debug"))]
	async fn find_by_id_impl(&self, id: RecordId) -> DatabaseResult<Option<Record>>
	{
		let record = self
			.collection
			.find_one(doc! { "_id": ObjectId::from(id) })
			.await?;

		Ok(record.map(Record::from))
	}
}

impl RecordStore for MongoRecordStore
{
	fn find_many(&self, limit: u32) -> BoxFuture<'_, DatabaseResult<Vec<Record>>>
	{
		self.find_many_impl(limit).boxed()
	}

	fn insert<'a>(&'a self, record: &'a NewRecord) -> BoxFuture<'a, DatabaseResult<RecordId>>
	{
		self.insert_impl(record).boxed()
	}

	fn find_by_id(&self, id: RecordId) -> BoxFuture<'_, DatabaseResult<Option<Record>>>
	{
		self.find_by_id_impl(id).boxed()
	}
}
