use {
	http::HeaderValue,
	std::sync::Arc,
	tower_http::cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
};

/// Creates a CORS layer that only answers requests coming from `allowed_origins`.
///
/// Requests from allowed origins may include credentials and use any method or header.
pub(crate) fn layer(allowed_origins: impl IntoIterator<Item = HeaderValue>) -> CorsLayer
{
	let allowed_origins = Arc::<[HeaderValue]>::from_iter(allowed_origins);

	tracing::debug!(?allowed_origins, "configuring CORS");

	CorsLayer::default()
		.allow_credentials(AllowCredentials::predicate({
			let allowed_origins = Arc::clone(&allowed_origins);
			move |origin, _request| allowed_origins.contains(origin)
		}))
		.allow_headers(AllowHeaders::mirror_request())
		.allow_methods(AllowMethods::mirror_request())
		.allow_origin(AllowOrigin::predicate(move |origin, _request| {
			allowed_origins.contains(origin)
		}))
}
