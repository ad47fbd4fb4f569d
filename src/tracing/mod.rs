use {
	crate::config::TracingConfig,
	std::io,
	tracing_appender::non_blocking::WorkerGuard,
	tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt},
};

mod files;
mod stderr;

/// Directives used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "uptime_api=info,tower_http=info,mongodb=warn,warn";

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the file writer when dropped, so it must be kept alive for as long
/// as the process should write logs.
pub(crate) fn init(config: &TracingConfig) -> io::Result<Option<WorkerGuard>>
{
	if !config.enable {
		return Ok(None);
	}

	let stderr = stderr::layer(&config.stderr);
	let (files, guard) = files::layer(&config.files)?.unzip();
	let layer = Layer::and_then(stderr, files);

	tracing_subscriber::registry()
		.with(layer.with_filter(env_filter()))
		.init();

	tracing::info!("initialized tracing");

	Ok(guard)
}

fn env_filter() -> EnvFilter
{
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
