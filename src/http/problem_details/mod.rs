//! The problem types this API can report, as described by [RFC 9457].
//!
//! Problem type URIs are relative to the API itself; every one of them can be dereferenced to
//! a [`ProblemDescription`] under `/docs/problems`.
//!
//! [RFC 9457]: https://www.rfc-editor.org/rfc/rfc9457.html

use {
	crate::http::{json::Json, path::Path},
	::problem_details::ProblemType as _,
	axum::{
		Router,
		response::{IntoResponse, Response},
		routing,
	},
	serde::Serialize,
	std::{fmt, sync::LazyLock},
};

pub(crate) type ProblemDetails = ::problem_details::ProblemDetails<Problem>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum Problem
{
	/// A required header was not sent, e.g. `Content-Type` on a request with a JSON body.
	#[error("missing header")]
	MissingHeader,

	/// A URI path parameter could not be parsed.
	#[error("invalid path parameter(s)")]
	InvalidPathParameters,

	/// The request body could not be parsed.
	#[error("invalid request body")]
	InvalidRequestBody,

	#[error("resource not found")]
	ResourceNotFound,

	/// The route exists, but not for the request's method.
	#[error("method not allowed")]
	MethodNotAllowed,

	#[error("internal server error")]
	Internal,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProblemDescription
{
	#[serde(rename = "type")]
	uri: &'static str,
	status: u16,
	title: String,
	description: &'static str,
}

impl Problem
{
	pub(crate) const ALL: &[Self] = &[
		Self::MissingHeader,
		Self::InvalidPathParameters,
		Self::InvalidRequestBody,
		Self::ResourceNotFound,
		Self::MethodNotAllowed,
		Self::Internal,
	];

	fn path(self) -> &'static str
	{
		match self {
			Self::MissingHeader => "/docs/problems/missing-header",
			Self::InvalidPathParameters => "/docs/problems/invalid-path-parameters",
			Self::InvalidRequestBody => "/docs/problems/invalid-request-body",
			Self::ResourceNotFound => "/docs/problems/resource-not-found",
			Self::MethodNotAllowed => "/docs/problems/method-not-allowed",
			Self::Internal => "/docs/problems/internal",
		}
	}

	fn fragment(self) -> &'static str
	{
		self.path().trim_start_matches("/docs/problems/")
	}

	fn parse_fragment(fragment: &str) -> Option<Self>
	{
		Self::ALL.iter().copied().find(|problem| problem.fragment() == fragment)
	}

	pub(crate) fn description(self) -> ProblemDescription
	{
		let description = match self {
			Self::MissingHeader => {
				"You did not provide a required header. Creating a record requires \
				 `Content-Type: application/json`."
			},
			Self::InvalidPathParameters => {
				"You supplied a path parameter that could not be parsed. Record IDs are 24 \
				 hexadecimal characters."
			},
			Self::InvalidRequestBody => {
				"You provided a request body that could not be parsed. The `detail` field of the \
				 response body should indicate what you did wrong."
			},
			Self::ResourceNotFound => "The requested route or record does not exist.",
			Self::MethodNotAllowed => {
				"The route exists, but does not support the HTTP method you used."
			},
			Self::Internal => {
				"Something went wrong on our side. Please include the `x-request-id` response \
				 header in your bug report."
			},
		};

		ProblemDescription {
			uri: self.path(),
			status: self.status().as_u16(),
			title: self.to_string(),
			description,
		}
	}
}

impl ::problem_details::ProblemType for Problem
{
	fn uri(&self) -> http::Uri
	{
		http::Uri::from_static(self.path())
	}

	fn status(&self) -> http::StatusCode
	{
		match *self {
			Self::MissingHeader | Self::InvalidPathParameters => http::StatusCode::BAD_REQUEST,
			Self::InvalidRequestBody => http::StatusCode::UNPROCESSABLE_ENTITY,
			Self::ResourceNotFound => http::StatusCode::NOT_FOUND,
			Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
			Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn title(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(self, fmt)
	}
}

/// Serves [`ProblemDescription`]s at `/docs/problems` and `/docs/problems/{problem}`.
pub(crate) fn router() -> Router
{
	Router::new()
		.route("/docs/problems", routing::get(problems_json))
		.route("/docs/problems/{problem}", routing::get(problem_json))
}

#[tracing::instrument(level = "trace")]
async fn problems_json() -> Response
{
	static PROBLEMS: LazyLock<Box<[ProblemDescription]>> =
		LazyLock::new(|| Problem::ALL.iter().copied().map(Problem::description).collect());

	Json(&PROBLEMS[..]).into_response()
}

#[tracing::instrument(level = "trace")]
async fn problem_json(Path(fragment): Path<String>) -> Response
{
	match Problem::parse_fragment(&fragment) {
		Some(problem) => Json(problem.description()).into_response(),
		None => not_found().await,
	}
}

/// Fallback for requests that match no route.
pub(crate) async fn not_found() -> Response
{
	ProblemDetails::new(Problem::ResourceNotFound).into_response()
}

/// Fallback for requests whose route exists, but not for their method.
pub(crate) async fn method_not_allowed() -> Response
{
	ProblemDetails::new(Problem::MethodNotAllowed).into_response()
}
