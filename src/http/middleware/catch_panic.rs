use {
	crate::http::problem_details::Problem,
	axum::response::{IntoResponse, Response},
	problem_details::AsProblemDetails,
	std::any::Any,
	tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic},
};

/// Creates a layer that turns panics in handlers into `500 Internal Server Error` responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicHandler;

#[derive(Debug, Error)]
#[error("something went wrong; please report this incident")]
struct PanicRejection;

impl AsProblemDetails for PanicRejection
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		Problem::Internal
	}
}

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(&mut self, error: Box<dyn Any + Send + 'static>) -> Response
	{
		let message = error
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| error.downcast_ref::<String>().map(String::as_str));

		tracing::error!(?message, "http handler panicked");

		PanicRejection.as_problem_details().into_response()
	}
}
