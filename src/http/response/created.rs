use {
	super::Location,
	crate::http::json::Json,
	axum::response::{IntoResponse, Response},
	derive_more::Constructor,
	serde::Serialize,
};

/// A `201 Created` response with a [`Location`] header and a JSON body.
#[derive(Debug, Clone, Constructor)]
pub(crate) struct Created<T>
{
	location: Location,
	payload: T,
}

impl<T: Serialize> IntoResponse for Created<T>
{
	fn into_response(self) -> Response
	{
		(http::StatusCode::CREATED, self.location, Json(self.payload)).into_response()
	}
}
