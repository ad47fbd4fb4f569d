//! # [RFC 9457][rfc] - Problem Details for HTTP APIs
//!
//! This crate provides an implementation of [RFC 9457][rfc] that can be used with the [`http`]
//! crate and compatible frameworks.
//!
//! [rfc]: https://www.rfc-editor.org/rfc/rfc9457.html

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use mime::Mime;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub use self::as_problem_details::AsProblemDetails;
pub use self::extension_members::ExtensionMembers;
pub use self::problem_type::ProblemType;

mod as_problem_details;
pub mod extension_members;
mod problem_type;

/// Returns the [`Content-Type`] value used in responses.
///
/// [`Content-Type`]: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Content-Type
pub fn content_type() -> Mime
{
	"application/problem+json"
		.parse::<Mime>()
		.unwrap_or_else(|err| panic!("hard-coded string should always be valid: {err}"))
}

/// [RFC 9457][rfc] - Problem Details
///
/// [rfc]: https://www.rfc-editor.org/rfc/rfc9457.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDetails<T: ProblemType>
{
	/// Determines the [`type`], [`status`] and [`title`] members.
	///
	/// [`type`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.1
	/// [`status`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.2
	/// [`title`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.3
	problem_type: T,

	/// The [`detail`] member.
	///
	/// [`detail`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.4
	detail: Option<Cow<'static, str>>,

	/// The [`instance`] member.
	///
	/// [`instance`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.5
	instance: Option<Cow<'static, str>>,

	extension_members: ExtensionMembers,
}

impl<T: ProblemType> ProblemDetails<T>
{
	/// Creates a new [`ProblemDetails`] object for the given [`ProblemType`].
	pub fn new(problem_type: T) -> Self
	{
		Self {
			problem_type,
			detail: None,
			instance: None,
			extension_members: ExtensionMembers::new(),
		}
	}

	/// Returns a shared reference to the [`ProblemType`] value.
	pub fn problem_type(&self) -> &T
	{
		&self.problem_type
	}

	/// Returns the value of the `detail` member, if any.
	pub fn detail(&self) -> Option<&str>
	{
		self.detail.as_deref()
	}

	/// Returns the value of the `instance` member, if any.
	pub fn instance(&self) -> Option<&str>
	{
		self.instance.as_deref()
	}

	/// Returns a shared reference to the [`ExtensionMembers`].
	pub fn extension_members(&self) -> &ExtensionMembers
	{
		&self.extension_members
	}

	/// Returns an exclusive reference to the [`ExtensionMembers`].
	pub fn extension_members_mut(&mut self) -> &mut ExtensionMembers
	{
		&mut self.extension_members
	}

	/// Populates the `detail` member.
	pub fn set_detail(&mut self, detail: impl Into<Cow<'static, str>>)
	{
		self.detail = Some(detail.into());
	}

	/// Populates the `instance` member.
	pub fn set_instance(&mut self, instance: impl Into<Cow<'static, str>>)
	{
		self.instance = Some(instance.into());
	}

	/// Adds an [extension member].
	///
	/// # Panics
	///
	/// This function will panic if `value` cannot be serialized into a JSON value.
	///
	/// [extension member]: ExtensionMembers
	#[track_caller]
	pub fn add_extension_member<V>(&mut self, name: impl Into<String>, value: &V)
	where
		V: ?Sized + Serialize,
	{
		if let Err(error) = self.extension_members.add(name, value) {
			panic!("failed to serialize extension member of type `{}`: {error}", type_name::<V>());
		}
	}
}

/// Adapter so [`ProblemType::title()`] can be used with `format_args!()`.
struct Title<'a, T>(&'a T);

impl<T: ProblemType> fmt::Display for Title<'_, T>
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		self.0.title(fmt)
	}
}

impl<T: ProblemType> Serialize for ProblemDetails<T>
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		// type + status + title
		let field_count = 3
			+ usize::from(self.detail.is_some())
			+ usize::from(self.instance.is_some())
			+ self.extension_members.count();

		let mut serializer = serializer.serialize_map(Some(field_count))?;

		serializer.serialize_entry("type", &format_args!("{}", self.problem_type.uri()))?;
		serializer.serialize_entry("status", &self.problem_type.status().as_u16())?;
		serializer.serialize_entry("title", &format_args!("{}", Title(&self.problem_type)))?;

		if let Some(detail) = self.detail() {
			serializer.serialize_entry("detail", detail)?;
		}

		if let Some(instance) = self.instance() {
			serializer.serialize_entry("instance", instance)?;
		}

		for (name, value) in self.extension_members.iter() {
			serializer.serialize_entry(name, value)?;
		}

		serializer.end()
	}
}

impl<T: ProblemType, B> From<&ProblemDetails<T>> for http::Response<B>
where
	Vec<u8>: Into<B>,
{
	fn from(problem_details: &ProblemDetails<T>) -> Self
	{
		let body = serde_json::to_vec(problem_details).unwrap_or_else(|err| {
			panic!("failed to serialize `ProblemDetails<{}>` into JSON: {err}", type_name::<T>());
		});

		let mut response = http::Response::new(body.into());
		*response.status_mut() = problem_details.problem_type.status();

		if let Ok(content_type) = http::HeaderValue::from_str(content_type().as_ref()) {
			response
				.headers_mut()
				.insert(http::header::CONTENT_TYPE, content_type);
		}

		response
	}
}

impl<T: ProblemType, B> From<ProblemDetails<T>> for http::Response<B>
where
	Vec<u8>: Into<B>,
{
	fn from(problem_details: ProblemDetails<T>) -> Self
	{
		(&problem_details).into()
	}
}

#[cfg(feature = "axum")]
impl<T: ProblemType> axum_core::response::IntoResponse for ProblemDetails<T>
{
	fn into_response(self) -> axum_core::response::Response
	{
		self.into()
	}
}

#[cfg(feature = "utoipa")]
mod utoipa_impls
{
	use std::borrow::Cow;

	use serde_json::json;
	use utoipa::openapi::schema::{AdditionalProperties, KnownFormat, Object, Schema, Type};
	use utoipa::openapi::{RefOr, SchemaFormat};
	use utoipa::{PartialSchema, ToSchema};

	use crate::{ProblemDetails, ProblemType};

	impl<T: ProblemType> ToSchema for ProblemDetails<T>
	{
		fn name() -> Cow<'static, str>
		{
			Cow::Borrowed("ProblemDetails")
		}
	}

	impl<T: ProblemType> PartialSchema for ProblemDetails<T>
	{
		fn schema() -> RefOr<Schema>
		{
			let example = json!({
				"type": "/docs/problems/invalid-request-body",
				"status": 422_u16,
				"title": "invalid request body",
				"detail": "missing field `turnedOffAt` at line 1 column 38"
			});

			Object::builder()
				.description(Some("RFC 9457 - Problem Details for HTTP APIs"))
				.schema_type(Type::Object)
				.property(
					"type",
					Object::builder()
						.schema_type(Type::String)
						.format(Some(SchemaFormat::KnownFormat(KnownFormat::UriReference))),
				)
				.required("type")
				.property("status", u16::schema())
				.required("status")
				.property("title", String::schema())
				.required("title")
				.property("detail", String::schema())
				.property("instance", String::schema())
				.additional_properties(Some(AdditionalProperties::FreeForm(true)))
				.examples([example])
				.into()
		}
	}
}
