/// Implements [`IntoResponse`] for an error type by turning it into a problem document.
///
/// The type must implement [`AsProblemDetails`].
///
/// [`IntoResponse`]: axum::response::IntoResponse
/// [`AsProblemDetails`]: problem_details::AsProblemDetails
macro_rules! impl_into_response {
	($ty:ty) => {
		impl ::axum::response::IntoResponse for $ty
		{
			fn into_response(self) -> ::axum::response::Response
			{
				::axum::response::IntoResponse::into_response(
					::problem_details::AsProblemDetails::as_problem_details(&self),
				)
			}
		}
	};
}

/// Builds a [`Location`] header value from a format string.
///
/// [`Location`]: crate::http::response::Location
macro_rules! location {
	($($fmt:tt)*) => {
		$crate::http::response::Location::from_path(::std::format!($($fmt)*))
	};
}
