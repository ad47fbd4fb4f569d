//! Time-related types.

use {
	serde::{Deserialize, Serialize},
	std::{fmt, str::FromStr},
	time::format_description::well_known::Rfc3339,
};

/// A timezone-aware point in time.
///
/// Serialized as an RFC 3339 string. Values without an explicit UTC offset are rejected.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Timestamp(#[serde(with = "time::serde::rfc3339")] time::OffsetDateTime);

impl fmt::Display for Timestamp
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self.0.format(&Rfc3339) {
			Ok(formatted) => fmt.write_str(&formatted),

			// years outside of 0..=9999 have no RFC 3339 representation
			Err(_) => fmt::Display::fmt(&self.0, fmt),
		}
	}
}

impl fmt::Debug for Timestamp
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(self, fmt)
	}
}

impl FromStr for Timestamp
{
	type Err = time::error::Parse;

	fn from_str(input: &str) -> Result<Self, Self::Err>
	{
		time::OffsetDateTime::parse(input, &Rfc3339).map(Self)
	}
}

#[cfg(test)]
impl PartialEq<time::OffsetDateTime> for Timestamp
{
	fn eq(&self, other: &time::OffsetDateTime) -> bool
	{
		self.0.eq(other)
	}
}
