//! Uptime API
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use {
	self::cli::{Action, ServeArgs},
	color_eyre::eyre::{self, WrapErr},
	similar::TextDiff,
	std::{fs, path::Path, process::ExitCode},
	uptime_api::Config,
};

mod cli;

fn main() -> eyre::Result<ExitCode>
{
	color_eyre::install()?;

	let args = cli::args().wrap_err("failed to load `.env` file")?;

	match args.action {
		None => serve(args.serve),
		Some(Action::Serve(args)) => serve(args),
		Some(Action::Openapi { check }) => openapi(check.as_deref()),
	}
}

fn serve(args: ServeArgs) -> eyre::Result<ExitCode>
{
	let mut config = match args.config_path() {
		Some(path) => Config::load_from_file(path).wrap_err("failed to load configuration")?,
		None => Config::default(),
	};

	args.apply_to_config(&mut config);

	let mut runtime = tokio::runtime::Builder::new_multi_thread();

	if let Some(worker_threads) = config.runtime.worker_threads {
		runtime.worker_threads(worker_threads.get());
	}

	runtime
		.enable_all()
		.build()
		.wrap_err("failed to build tokio runtime")?
		.block_on(uptime_api::run(config))
		.wrap_err("failed to run API")?;

	Ok(ExitCode::SUCCESS)
}

/// Prints the OpenAPI schema, or diffs it against the file at `check`.
///
/// Any differences are printed to stderr and result in a non-zero exit code.
#[expect(clippy::print_stdout, clippy::print_stderr)]
fn openapi(check: Option<&Path>) -> eyre::Result<ExitCode>
{
	let schema = uptime_api::openapi::Schema::json().wrap_err("failed to serialize schema")?;

	let Some(path) = check else {
		println!("{schema}");
		return Ok(ExitCode::SUCCESS);
	};

	let file = fs::read_to_string(path).wrap_err_with(|| format!("failed to read {path:?}"))?;
	let exit_code = TextDiff::from_lines(&file, &schema)
		.unified_diff()
		.iter_hunks()
		.fold(ExitCode::SUCCESS, |_, hunk| {
			eprintln!("{hunk}");
			ExitCode::FAILURE
		});

	Ok(exit_code)
}
