use {
	axum::response::{IntoResponseParts, ResponseParts},
	std::convert::Infallible,
};

/// A [`Location`] header.
///
/// [`Location`]: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Location
#[derive(Debug, Clone)]
pub(crate) struct Location(Option<http::HeaderValue>);

impl Location
{
	/// Creates a [`Location`] from a URI path.
	///
	/// Paths that are not valid header values are dropped with a warning instead of failing the
	/// whole response.
	pub(crate) fn from_path(path: String) -> Self
	{
		match http::HeaderValue::try_from(path) {
			Ok(value) => Self(Some(value)),
			Err(error) => {
				tracing::warn!(%error, "`Location` header value is invalid");
				Self(None)
			},
		}
	}
}

impl IntoResponseParts for Location
{
	type Error = Infallible;

	fn into_response_parts(self, mut response: ResponseParts) -> Result<ResponseParts, Self::Error>
	{
		if let Some(value) = self.0 {
			response.headers_mut().insert(http::header::LOCATION, value);
		}

		Ok(response)
	}
}
