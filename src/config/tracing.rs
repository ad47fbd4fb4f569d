use {
	serde::Deserialize,
	std::path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig
{
	/// Whether to install a tracing subscriber at all.
	pub enable: bool,

	/// Record HTTP request and response headers.
	pub include_http_headers: bool,

	pub stderr: StderrConfig,
	pub files: FilesConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct StderrConfig
{
	pub enable: bool,

	/// Emit ANSI escape codes for colors and other formatting.
	pub ansi: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilesConfig
{
	pub enable: bool,

	/// Directory to store (daily rotated) log files in.
	pub directory: Box<Path>,
}

impl Default for TracingConfig
{
	fn default() -> Self
	{
		Self {
			enable: true,
			include_http_headers: false,
			stderr: StderrConfig::default(),
			files: FilesConfig::default(),
		}
	}
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true }
	}
}

impl Default for FilesConfig
{
	fn default() -> Self
	{
		Self {
			enable: false,
			directory: PathBuf::from("./logs").into_boxed_path(),
		}
	}
}
