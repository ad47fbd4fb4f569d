use {
	crate::http::problem_details::Problem,
	axum::extract::rejection::BytesRejection,
	problem_details::{AsProblemDetails, ExtensionMembers},
	serde_json::error::Category,
};

/// Rejection for the [`Json`] extractor.
///
/// [`Json`]: super::Json
#[derive(Debug, Error)]
pub(crate) enum JsonRejection
{
	#[error("missing `Content-Type: application/json` header")]
	MissingContentType,

	#[error("failed to read request body: {0}")]
	ReadRequestBody(#[from] BytesRejection),

	#[error("{0}")]
	Deserialize(#[from] serde_json::Error),
}

impl AsProblemDetails for JsonRejection
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		match self {
			Self::MissingContentType => Problem::MissingHeader,
			Self::ReadRequestBody(_) | Self::Deserialize(_) => Problem::InvalidRequestBody,
		}
	}

	fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
	{
		match self {
			Self::MissingContentType => {
				let _ = extension_members.add("required_header", http::header::CONTENT_TYPE.as_str());
			},
			Self::ReadRequestBody(_) => {},
			Self::Deserialize(source) => {
				if let Category::Syntax | Category::Eof = source.classify() {
					let _ = extension_members.add("line", &source.line());
					let _ = extension_members.add("column", &source.column());
				}
			},
		}
	}
}

impl_into_response!(JsonRejection);
