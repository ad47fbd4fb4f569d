//! MongoDB connection handling.

use {
	crate::config::DatabaseConfig,
	mongodb::{
		Client,
		Database,
		bson::doc,
		options::ClientOptions,
	},
};

pub(crate) use self::error::{DatabaseError, DatabaseResult};

mod error;

const DEFAULT_NAME: &str = "uptime";

/// Establishes a connection to the configured database and makes sure it is reachable.
///
/// Credentials from `config` take precedence over any embedded in the connection string. The
/// caller is expected to have checked [`DatabaseConfig::missing_value()`] beforehand.
#[tracing::instrument(skip_all, fields(db.name = config.name.as_deref()), err)]
pub(crate) async fn connect(config: &DatabaseConfig) -> mongodb::error::Result<Database>
{
	let mut options = ClientOptions::parse(config.uri.as_str()).await?;
	let mut credential = options.credential.take().unwrap_or_default();

	if config.username.is_some() {
		credential.username.clone_from(&config.username);
	}

	if config.password.is_some() {
		credential.password.clone_from(&config.password);
	}

	options.credential = Some(credential);
	options.app_name = Some(String::from(env!("CARGO_PKG_NAME")));

	let client = Client::with_options(options)?;
	let database = client.database(config.name.as_deref().unwrap_or(DEFAULT_NAME));

	database.run_command(doc! { "ping": 1_i32 }).await?;

	tracing::info!(db.name = database.name(), "connected to database");

	Ok(database)
}
