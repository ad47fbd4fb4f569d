use {derive_more::Debug, serde::Deserialize};

/// Connection settings for the MongoDB deployment holding the records.
///
/// Every value except `collection` must be set, either here or through the environment.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DatabaseConfig
{
	/// Connection string, e.g. `mongodb://localhost:27017`.
	pub uri: String,

	pub username: Option<String>,

	#[debug(skip)]
	pub password: Option<String>,

	/// Name of the database.
	pub name: Option<String>,

	/// Name of the collection inside [`name`](Self::name).
	pub collection: String,
}

impl DatabaseConfig
{
	/// Returns the environment variable corresponding to the first required value that is
	/// missing, if any.
	pub fn missing_value(&self) -> Option<&'static str>
	{
		if self.uri.is_empty() {
			return Some("MONGO_URI");
		}

		[
			("MONGO_USERNAME", &self.username),
			("MONGO_PASSWORD", &self.password),
			("DB_NAME", &self.name),
		]
		.into_iter()
		.find_map(|(env_var, value)| value.as_deref().is_none_or(str::is_empty).then_some(env_var))
	}
}

impl Default for DatabaseConfig
{
	fn default() -> Self
	{
		Self {
			uri: String::from("mongodb://localhost:27017"),
			username: None,
			password: None,
			name: None,
			collection: String::from("records"),
		}
	}
}
