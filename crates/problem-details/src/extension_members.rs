//! The [`ExtensionMembers`] type.

use std::fmt;

use serde::Serialize;

/// Extra fields to include in a [`ProblemDetails`] document.
///
/// This corresponds to [Section 3.2] of the RFC.
///
/// [`ProblemDetails`]: crate::ProblemDetails
/// [Section 3.2]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.2
#[derive(Default, Clone, PartialEq, Eq)]
pub struct ExtensionMembers
{
	fields: serde_json::Map<String, serde_json::Value>,
}

impl ExtensionMembers
{
	/// Creates an empty set of extension members.
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Returns the number of extension members.
	pub fn count(&self) -> usize
	{
		self.fields.len()
	}

	/// Returns the value of the extension member called `name`, if any.
	pub fn get(&self, name: &str) -> Option<&serde_json::Value>
	{
		self.fields.get(name)
	}

	/// Adds a new extension member.
	///
	/// If there already was a member called `name`, its old value is returned.
	pub fn add<V>(
		&mut self,
		name: impl Into<String>,
		value: &V,
	) -> Result<Option<serde_json::Value>, serde_json::Error>
	where
		V: Serialize + ?Sized,
	{
		serde_json::to_value(value).map(|value| self.fields.insert(name.into(), value))
	}

	/// Returns an iterator over all `(name, value)` pairs.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)>
	{
		self.fields.iter().map(|(name, value)| (name.as_str(), value))
	}
}

impl fmt::Debug for ExtensionMembers
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.debug_map().entries(&self.fields).finish()
	}
}
