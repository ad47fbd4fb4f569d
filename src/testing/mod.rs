//! Utilities for unit tests.

mod macros;

#[allow(unused_imports)]
pub(crate) use macros::*;

pub(crate) type Error = anyhow::Error;
pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;
