//! A path parameter extractor.

use {
	crate::http::problem_details::Problem,
	axum::extract::{
		FromRequestParts,
		path::ErrorKind,
		rejection::PathRejection as BaseRejection,
	},
	problem_details::{AsProblemDetails, ExtensionMembers},
};

/// An [extractor] for URI path parameters.
///
/// This is the same as [`axum::extract::Path`], except that its rejections are problem documents.
///
/// [extractor]: axum::extract
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(PathRejection))]
pub(crate) struct Path<T>(pub T);

/// Rejection for the [`Path`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct PathRejection(#[from] BaseRejection);

impl AsProblemDetails for PathRejection
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		Problem::InvalidPathParameters
	}

	fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
	{
		let BaseRejection::FailedToDeserializePathParams(source) = &self.0 else {
			return;
		};

		if let ErrorKind::ParseErrorAtKey { key, value, .. } = source.kind() {
			let _ = extension_members.add("parameter", key);
			let _ = extension_members.add("value", value);
		}
	}
}

impl_into_response!(PathRejection);
