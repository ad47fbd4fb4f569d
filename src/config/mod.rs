//! Runtime configuration.
//!
//! Configuration is read from a TOML file. Database settings may also come from the environment,
//! which takes precedence over the file.

use {
	serde::Deserialize,
	std::{fs, io, path::Path},
};

pub use self::{
	database::DatabaseConfig,
	http::{CorsConfig, HttpConfig},
	runtime::RuntimeConfig,
	tracing::{FilesConfig, StderrConfig, TracingConfig},
};

mod database;
mod http;
mod runtime;
mod tracing;

/// The global configuration for the API.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	pub runtime: RuntimeConfig,
	pub http: HttpConfig,
	pub tracing: TracingConfig,
	pub database: DatabaseConfig,
}

/// Errors that can occur when loading the [`Config`] from a file.
#[derive(Debug, Error)]
pub enum LoadFromFileError
{
	#[error("failed to read configuration file: {0}")]
	ReadFile(#[source] io::Error),

	#[error("failed to parse configuration file: {0}")]
	Deserialize(#[source] toml::de::Error),
}

impl Config
{
	/// Loads a file into memory and parses it into a [`Config`] object.
	pub fn load_from_file(path: &Path) -> Result<Self, LoadFromFileError>
	{
		fs::read_to_string(path)
			.map(|file_contents| toml::from_str(&file_contents))
			.map_err(LoadFromFileError::ReadFile)?
			.map_err(LoadFromFileError::Deserialize)
	}
}
