use {std::error::Error, tokio::signal::ctrl_c};

/// Resolves once the OS asks the process to shut down.
pub(crate) async fn shutdown()
{
	tokio::select! {
		ctrl_c_result = ctrl_c() => match ctrl_c_result {
			Ok(()) => tracing::warn!("received SIGINT"),
			Err(err) => {
				tracing::error!(error = &err as &dyn Error, "failed listening for SIGINT");
			},
		},

		() = sigterm() => {},
	}
}

#[cfg(unix)]
async fn sigterm()
{
	use tokio::signal::unix::{SignalKind, signal};

	match signal(SignalKind::terminate()) {
		Ok(mut signal) => match signal.recv().await {
			Some(()) => tracing::warn!("received SIGTERM"),
			None => tracing::warn!("cannot receive more SIGTERM signals"),
		},
		Err(err) => {
			tracing::error!(error = &err as &dyn Error, "failed listening for SIGTERM");
		},
	}
}

#[cfg(not(unix))]
async fn sigterm()
{
	std::future::pending().await
}
