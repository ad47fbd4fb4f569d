use {
	tower_http::request_id::{
		MakeRequestId,
		PropagateRequestIdLayer,
		RequestId,
		SetRequestIdLayer,
	},
	uuid::Uuid,
};

/// Layers that assign every request an `x-request-id` and copy it onto the response.
///
/// Requests that already carry the header keep their ID.
pub(crate) fn layers() -> (SetRequestIdLayer<MakeUuidv7RequestId>, PropagateRequestIdLayer)
{
	(SetRequestIdLayer::x_request_id(MakeUuidv7RequestId), PropagateRequestIdLayer::x_request_id())
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MakeUuidv7RequestId;

impl MakeRequestId for MakeUuidv7RequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		Uuid::now_v7()
			.hyphenated()
			.to_string()
			.parse::<http::HeaderValue>()
			.inspect_err(|error| tracing::warn!(%error, "generated invalid request ID"))
			.map(RequestId::new)
			.ok()
	}
}
