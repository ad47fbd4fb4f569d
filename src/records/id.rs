use {
	derive_more::{From, Into},
	mongodb::bson::oid::{self, ObjectId},
	serde::{Deserialize, Deserializer, Serialize, Serializer, de},
	std::{fmt, str::FromStr},
	utoipa::ToSchema,
};

/// The unique identifier of a [`Record`].
///
/// This is assigned by the database when a record is inserted and rendered as a 24 character
/// lowercase hex string everywhere outside of the database.
///
/// [`Record`]: super::Record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, ToSchema)]
#[schema(value_type = String, example = "65920a1b2c3d4e5f6a7b8c9d")]
pub(crate) struct RecordId(ObjectId);

#[derive(Debug, Error)]
#[error("invalid record ID: {0}")]
pub(crate) struct ParseRecordIdError(#[from] oid::Error);

impl RecordId
{
	#[cfg(test)]
	pub(crate) fn new() -> Self
	{
		Self(ObjectId::new())
	}
}

impl fmt::Display for RecordId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.write_str(&self.0.to_hex())
	}
}

impl FromStr for RecordId
{
	type Err = ParseRecordIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		ObjectId::parse_str(value).map(Self).map_err(ParseRecordIdError)
	}
}

impl Serialize for RecordId
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for RecordId
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		<String as Deserialize<'de>>::deserialize(deserializer)?
			.parse::<Self>()
			.map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests
{
	use {super::RecordId, crate::testing};

	#[test]
	fn serializes_as_hex_string() -> testing::Result
	{
		let id = "65920a1b2c3d4e5f6a7b8c9d".parse::<RecordId>()?;
		let json = serde_json::to_value(id)?;

		testing::assert_eq!(json, serde_json::json!("65920a1b2c3d4e5f6a7b8c9d"));
		testing::assert_eq!(serde_json::from_value::<RecordId>(json)?, id);

		Ok(())
	}

	#[test]
	fn rejects_malformed_ids()
	{
		std::assert!("not-an-object-id".parse::<RecordId>().is_err());
		std::assert!("65920a1b2c3d4e5f6a7b8c9".parse::<RecordId>().is_err());
	}
}
