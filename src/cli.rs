use {
	std::{
		net::IpAddr,
		path::{Path, PathBuf},
	},
	uptime_api::Config,
};

/* NOTE:
 * We expose a free function here so callers don't need to have
 * `clap::Parser` in-scope.
 */

/// Parses the command line and loads the `.env` file it points at (or `./.env`).
pub(crate) fn args() -> Result<Args, dotenvy::Error>
{
	let args = <Args as clap::Parser>::parse();
	let loaded_env_file = match args.env_file() {
		Some(path) => {
			dotenvy::from_filename(path)?;
			true
		},
		// a missing `.env` file is fine; the environment may be set up some other way
		None => dotenvy::dotenv().is_ok(),
	};

	if !loaded_env_file {
		return Ok(args);
	}

	// `clap` has already read the environment, so we parse again to pick up the new variables
	Ok(<Args as clap::Parser>::parse())
}

/// This is the HTTP server storing device uptime records.
///
/// The API requires a running MongoDB deployment it can connect to.
///
/// Running it without a subcommand is the same as running `serve`.
#[derive(Debug, clap::Parser)]
#[command(version, args_conflicts_with_subcommands = true)]
pub(crate) struct Args
{
	#[command(subcommand)]
	pub action: Option<Action>,

	#[command(flatten)]
	pub serve: ServeArgs,
}

impl Args
{
	fn env_file(&self) -> Option<&Path>
	{
		match &self.action {
			None => self.serve.env_file.as_deref(),
			Some(Action::Serve(args)) => args.env_file.as_deref(),
			Some(Action::Openapi { .. }) => None,
		}
	}
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Action
{
	/// Run the HTTP server (the default)
	Serve(ServeArgs),

	/// Print the API's OpenAPI schema as JSON
	Openapi
	{
		/// Do not print the schema, only diff it against an existing file.
		///
		/// This will exit with code 1 if any differences are found.
		#[arg(long, value_name = "FILE")]
		check: Option<PathBuf>,
	},
}

#[derive(Debug, clap::Args)]
pub(crate) struct ServeArgs
{
	/// Path to the configuration file.
	///
	/// Defaults to `./uptime-api.toml` if that file exists.
	#[arg(long = "config", value_name = "FILE")]
	pub config_path: Option<PathBuf>,

	/// Use a custom `.env` file.
	#[arg(long, value_name = "FILE")]
	pub env_file: Option<PathBuf>,

	/// The IP address to listen on.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long)]
	pub ip: Option<IpAddr>,

	/// The port to listen on.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long)]
	pub port: Option<u16>,

	#[command(flatten)]
	pub database: DatabaseArgs,
}

/// Database settings that are usually supplied through the environment.
#[derive(Debug, clap::Args)]
pub(crate) struct DatabaseArgs
{
	/// MongoDB connection string.
	#[arg(long, env = "MONGO_URI", hide_env_values = true)]
	pub mongo_uri: Option<String>,

	#[arg(long, env = "MONGO_USERNAME", hide_env_values = true)]
	pub mongo_username: Option<String>,

	#[arg(long, env = "MONGO_PASSWORD", hide_env_values = true)]
	pub mongo_password: Option<String>,

	/// Name of the database holding the records.
	#[arg(long, env = "DB_NAME")]
	pub db_name: Option<String>,
}

impl ServeArgs
{
	/// The configuration file to load, if any.
	///
	/// An explicitly passed path must exist; the default one is optional.
	pub(crate) fn config_path(&self) -> Option<&Path>
	{
		self.config_path.as_deref().or_else(|| {
			let default_path = Path::new("./uptime-api.toml");
			default_path.exists().then_some(default_path)
		})
	}

	/// Applies any relevant config overrides specified as CLI flags or environment variables in
	/// the given `config` object.
	pub(crate) fn apply_to_config(self, config: &mut Config)
	{
		if let Some(ip) = self.ip {
			config.http.ip = ip;
		}

		if let Some(port) = self.port {
			config.http.port = port;
		}

		if let Some(uri) = self.database.mongo_uri {
			config.database.uri = uri;
		}

		if let Some(username) = self.database.mongo_username {
			config.database.username = Some(username);
		}

		if let Some(password) = self.database.mongo_password {
			config.database.password = Some(password);
		}

		if let Some(name) = self.database.db_name {
			config.database.name = Some(name);
		}
	}
}
