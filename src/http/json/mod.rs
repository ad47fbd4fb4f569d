//! A JSON extractor & response type.
//!
//! This is the same as [`axum::Json`], except that its rejections are problem documents.

use {
	axum::{
		body::Bytes,
		extract::{FromRequest, Request},
		response::{IntoResponse, Response},
	},
	mime::Mime,
	serde::{Serialize, de::DeserializeOwned},
};

pub(crate) use self::rejection::JsonRejection;

mod rejection;

#[derive(Debug)]
pub(crate) struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T>
{
	fn into_response(self) -> Response
	{
		axum::Json(self.0).into_response()
	}
}

impl<T, S> FromRequest<S> for Json<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = JsonRejection;

	#[tracing::instrument(level = "debug", skip_all, err(level = "debug"))]
	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(JsonRejection::MissingContentType);
		}

		let body = Bytes::from_request(req, state).await?;
		let parsed = serde_json::from_slice(&body[..])?;

		Ok(Self(parsed))
	}
}

/// Checks if the given `headers` contain a JSON-like `Content-Type`.
#[tracing::instrument(level = "trace", ret(level = "trace"))]
fn has_json_content_type(headers: &http::HeaderMap) -> bool
{
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		tracing::debug!("request headers do not contain a `Content-Type` header");
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		tracing::debug!("request headers contain a `Content-Type` header, but it's not UTF-8");
		return false;
	};

	let Ok(mime) = content_type.parse::<Mime>() else {
		tracing::debug!(
			"request headers contain a `Content-Type` header, but it's not a valid mime type"
		);
		return false;
	};

	mime.type_() == mime::APPLICATION
		&& (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}
