use {
	super::RecordId,
	crate::time::Timestamp,
	mongodb::bson::oid::ObjectId,
	serde::{Deserialize, Serialize},
	utoipa::ToSchema,
};

/// A single on/off interval of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Record
{
	#[serde(rename = "_id")]
	pub id: RecordId,

	/// When the device was turned on.
	#[schema(value_type = String, format = DateTime, example = "2024-01-01T08:00:00Z")]
	pub turned_on_at: Timestamp,

	/// When the device was turned off.
	#[schema(value_type = String, format = DateTime, example = "2024-01-01T17:00:00Z")]
	pub turned_off_at: Timestamp,
}

/// The payload for creating a new [`Record`].
///
/// The ID is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewRecord
{
	/// When the device was turned on.
	#[schema(value_type = String, format = DateTime, example = "2024-01-01T08:00:00Z")]
	pub turned_on_at: Timestamp,

	/// When the device was turned off.
	#[schema(value_type = String, format = DateTime, example = "2024-01-01T17:00:00Z")]
	pub turned_off_at: Timestamp,
}

/// How a [`Record`] is laid out in the `records` collection.
///
/// Timestamps are stored as RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordDocument
{
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub turned_on_at: Timestamp,
	pub turned_off_at: Timestamp,
}

impl From<RecordDocument> for Record
{
	fn from(RecordDocument { id, turned_on_at, turned_off_at }: RecordDocument) -> Self
	{
		Self { id: RecordId::from(id), turned_on_at, turned_off_at }
	}
}

impl Record
{
	/// Attaches an ID to a [`NewRecord`].
	#[cfg(test)]
	pub(crate) fn from_new(id: RecordId, NewRecord { turned_on_at, turned_off_at }: NewRecord) -> Self
	{
		Self { id, turned_on_at, turned_off_at }
	}
}
