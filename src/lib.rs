//! A small HTTP API storing on/off intervals of devices in MongoDB.
//!
//! See [`run()`] for the entry point.

/*
 * Uptime API
 *
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use {
	self::records::{RecordService, store::MongoRecordStore},
	std::io,
};

#[macro_use]
extern crate thiserror as _;

#[macro_use]
extern crate tracing as _;

#[cfg(test)]
mod testing;

#[macro_use]
mod macros;

mod database;
mod http;
mod records;
mod signals;
mod time;
mod tracing;

pub mod config;
pub use config::Config;

pub mod openapi;

/// Runs the HTTP server until the process receives a shutdown signal.
pub async fn run(config: Config) -> Result<(), RunError>
{
	let tracing_guard = tracing::init(&config.tracing).map_err(RunError::InitTracing)?;

	if let Some(env_var) = config.database.missing_value() {
		return Err(RunError::MissingDatabaseValue { env_var });
	}

	let database = database::connect(&config.database).await?;
	let record_store = MongoRecordStore::new(&database, &config.database.collection);
	let record_service = RecordService::new(record_store);
	let router = http::router(record_service, &config.http, config.tracing.include_http_headers);

	let tcp_listener = tokio::net::TcpListener::bind(config.http.socket_addr()).await?;
	let addr = tcp_listener.local_addr()?;

	info!(%addr, "listening for http requests");

	axum::serve(tcp_listener, router)
		.with_graceful_shutdown(signals::shutdown())
		.await?;

	warn!("shutting down");

	drop(tracing_guard);

	Ok(())
}

/// Errors returned by [`run()`].
#[derive(Debug, Error)]
pub enum RunError
{
	#[error("failed to initialize tracing: {0}")]
	InitTracing(#[source] io::Error),

	/// A required database setting was neither configured nor found in the environment.
	#[error("missing database configuration; set `{env_var}`")]
	MissingDatabaseValue
	{
		env_var: &'static str,
	},

	/// The database could not be reached.
	#[error("failed to connect to database: {0}")]
	ConnectDatabase(#[from] mongodb::error::Error),

	#[error(transparent)]
	Io(#[from] io::Error),
}
