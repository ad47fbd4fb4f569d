use std::fmt;

/// A problem type.
///
/// Implementors decide which URI, status code and title a
/// <code>[ProblemDetails]\<T></code> carries.
///
/// [ProblemDetails]: crate::ProblemDetails
#[diagnostic::on_unimplemented(
	message = "`{Self}` is not an HTTP problem type",
	note = "only types that implement `ProblemType` can be used with `ProblemDetails<T>`"
)]
pub trait ProblemType
{
	/// The URI to encode in the response's [`type`] member.
	///
	/// [`type`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.1
	fn uri(&self) -> http::Uri;

	/// The status code of the response.
	///
	/// This is also used for the response's [`status`] member.
	///
	/// [`status`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.2
	fn status(&self) -> http::StatusCode;

	/// Writes the response's [`title`] member.
	///
	/// [`title`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.3
	fn title(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result;
}
