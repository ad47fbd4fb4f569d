//! HTTP plumbing shared by every endpoint.

use {
	crate::{config::HttpConfig, records::RecordService},
	axum::Router,
};

pub(crate) mod json;
pub(crate) mod middleware;
pub(crate) mod path;
pub(crate) mod problem_details;
pub(crate) mod response;

/// Returns the top-level router.
///
/// This is what we pass to [`axum::serve()`].
pub(crate) fn router(
	record_service: RecordService,
	config: &HttpConfig,
	include_http_headers: bool,
) -> Router
{
	// the method fallback only applies to routes that already exist
	let router = Router::new()
		.nest("/api", crate::records::http::router(record_service))
		.merge(crate::openapi::swagger_ui())
		.merge(problem_details::router())
		.method_not_allowed_fallback(problem_details::method_not_allowed)
		.fallback(problem_details::not_found)
		.layer(middleware::catch_panic::layer());

	let router = if config.cors.enable {
		router.layer(middleware::cors::layer(config.cors.allowed_origins()))
	} else {
		router
	};

	let (set_request_id, propagate_request_id) = middleware::request_id::layers();

	router
		.layer(middleware::trace::layer::<axum::body::Body, axum::body::Body>(include_http_headers))
		.layer(propagate_request_id)
		.layer(set_request_id)
}

#[cfg(test)]
mod tests
{
	use {
		crate::{
			config::HttpConfig,
			records::{RecordService, store::InMemoryRecordStore},
			testing,
		},
		axum::{Router, body::Body, response::Response},
		http::{Method, Request, StatusCode, header},
		http_body_util::BodyExt,
		serde_json::{Value as JsonValue, json},
		tower::ServiceExt,
	};

	const PROBLEM_JSON: &str = "application/problem+json";

	fn router(store: &InMemoryRecordStore) -> Router
	{
		super::router(RecordService::new(store.clone()), &HttpConfig::default(), false)
	}

	async fn send(router: Router, request: Request<Body>) -> testing::Result<Response>
	{
		Ok(router.oneshot(request).await?)
	}

	async fn body_json(response: Response) -> testing::Result<JsonValue>
	{
		let bytes = response.into_body().collect().await?.to_bytes();
		Ok(serde_json::from_slice(&bytes)?)
	}

	fn get(uri: &str) -> testing::Result<Request<Body>>
	{
		Ok(Request::get(uri).body(Body::empty())?)
	}

	fn post_json(body: &JsonValue) -> testing::Result<Request<Body>>
	{
		Ok(Request::post("/api")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(serde_json::to_vec(body)?))?)
	}

	fn content_type(response: &Response) -> Option<&str>
	{
		response
			.headers()
			.get(header::CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
	}

	#[tokio::test]
	async fn lists_nothing_on_empty_store() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let response = send(router(&store), get("/api")?).await?;

		testing::assert_eq!(response.status(), StatusCode::OK);
		testing::assert_eq!(body_json(response).await?, json!([]));

		Ok(())
	}

	#[tokio::test]
	async fn created_record_is_listed_and_retrievable() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let payload = json!({
			"turnedOnAt": "2024-01-01T08:00:00Z",
			"turnedOffAt": "2024-01-01T17:00:00Z",
		});

		let response = send(router(&store), post_json(&payload)?).await?;

		testing::assert_eq!(response.status(), StatusCode::CREATED);
		testing::assert!(response.headers().contains_key("x-request-id"));

		let location = response
			.headers()
			.get(header::LOCATION)
			.and_then(|value| value.to_str().ok())
			.map(String::from);

		let created = body_json(response).await?;
		let Some(id) = created["_id"].as_str().filter(|id| !id.is_empty()) else {
			anyhow::bail!("created record has no `_id`: {created}");
		};

		testing::assert_eq!(location.as_deref(), Some(format!("/api/{id}").as_str()));
		testing::assert_eq!(created["turnedOnAt"], payload["turnedOnAt"]);
		testing::assert_eq!(created["turnedOffAt"], payload["turnedOffAt"]);

		let response = send(router(&store), get("/api")?).await?;
		testing::assert_eq!(response.status(), StatusCode::OK);
		testing::assert_eq!(body_json(response).await?, json!([created]));

		let response = send(router(&store), get(&format!("/api/{id}"))?).await?;
		testing::assert_eq!(response.status(), StatusCode::OK);
		testing::assert_eq!(body_json(response).await?, created);

		Ok(())
	}

	#[tokio::test]
	async fn missing_field_is_rejected_before_writing() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let payload = json!({ "turnedOnAt": "2024-01-01T08:00:00Z" });
		let response = send(router(&store), post_json(&payload)?).await?;

		testing::assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
		testing::assert_eq!(content_type(&response), Some(PROBLEM_JSON));
		testing::assert_eq!(store.write_count(), 0);

		Ok(())
	}

	#[tokio::test]
	async fn unparseable_timestamp_is_rejected() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let payload = json!({
			"turnedOnAt": "yesterday",
			"turnedOffAt": "2024-01-01T17:00:00Z",
		});

		let response = send(router(&store), post_json(&payload)?).await?;

		testing::assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
		testing::assert_eq!(store.write_count(), 0);

		Ok(())
	}

	#[tokio::test]
	async fn malformed_json_reports_position() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let request = Request::post("/api")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from("{\"turnedOnAt\":"))?;

		let response = send(router(&store), request).await?;

		testing::assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

		let problem = body_json(response).await?;
		testing::assert!(problem["line"].is_u64(), "{problem}");
		testing::assert!(problem["column"].is_u64(), "{problem}");

		Ok(())
	}

	#[tokio::test]
	async fn missing_content_type_is_rejected() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let request = Request::post("/api").body(Body::from(
			r#"{"turnedOnAt":"2024-01-01T08:00:00Z","turnedOffAt":"2024-01-01T17:00:00Z"}"#,
		))?;

		let response = send(router(&store), request).await?;

		testing::assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		testing::assert_eq!(content_type(&response), Some(PROBLEM_JSON));
		testing::assert_eq!(body_json(response).await?["required_header"], "content-type");
		testing::assert_eq!(store.write_count(), 0);

		Ok(())
	}

	#[tokio::test]
	async fn store_failure_is_an_internal_error() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		store.set_failing(true);

		let response = send(router(&store), get("/api")?).await?;

		testing::assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
		testing::assert_eq!(content_type(&response), Some(PROBLEM_JSON));
		testing::assert_eq!(body_json(response).await?["status"], 500);

		Ok(())
	}

	#[tokio::test]
	async fn single_record_lookup_errors() -> testing::Result
	{
		let store = InMemoryRecordStore::new();

		let response = send(router(&store), get("/api/not-an-id")?).await?;
		testing::assert_eq!(response.status(), StatusCode::BAD_REQUEST);

		let response = send(router(&store), get("/api/65920a1b2c3d4e5f6a7b8c9d")?).await?;
		testing::assert_eq!(response.status(), StatusCode::NOT_FOUND);
		testing::assert_eq!(content_type(&response), Some(PROBLEM_JSON));

		Ok(())
	}

	#[tokio::test]
	async fn keeps_client_request_id() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let request = Request::get("/api")
			.header("x-request-id", "my-request")
			.body(Body::empty())?;

		let response = send(router(&store), request).await?;

		testing::assert_eq!(
			response.headers().get("x-request-id").and_then(|value| value.to_str().ok()),
			Some("my-request"),
		);

		Ok(())
	}

	fn preflight(origin: &str) -> testing::Result<Request<Body>>
	{
		Ok(Request::builder()
			.method(Method::OPTIONS)
			.uri("/api")
			.header(header::ORIGIN, origin)
			.header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
			.header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
			.body(Body::empty())?)
	}

	#[tokio::test]
	async fn cors_allows_configured_origins() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let response = send(router(&store), preflight("http://localhost:5173")?).await?;
		let headers = response.headers();

		testing::assert_eq!(
			headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|value| value.to_str().ok()),
			Some("http://localhost:5173"),
		);
		testing::assert_eq!(
			headers
				.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
				.and_then(|value| value.to_str().ok()),
			Some("true"),
		);

		Ok(())
	}

	#[tokio::test]
	async fn cors_ignores_foreign_origins() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let response = send(router(&store), preflight("https://evil.example.com")?).await?;
		let headers = response.headers();

		testing::assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
		testing::assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));

		Ok(())
	}

	#[tokio::test]
	async fn serves_openapi_document() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let response = send(router(&store), get("/docs/openapi.json")?).await?;

		testing::assert_eq!(response.status(), StatusCode::OK);
		testing::assert!(body_json(response).await?["paths"]["/api"].is_object());

		Ok(())
	}

	fn request_id(response: &Response) -> Option<&str>
	{
		response
			.headers()
			.get("x-request-id")
			.and_then(|value| value.to_str().ok())
	}

	#[tokio::test]
	async fn every_route_carries_a_request_id() -> testing::Result
	{
		let store = InMemoryRecordStore::new();

		for uri in ["/api", "/docs/openapi.json", "/docs/problems", "/nope"] {
			let response = send(router(&store), get(uri)?).await?;
			testing::assert!(request_id(&response).is_some_and(|id| !id.is_empty()), "{uri}");
		}

		let request = Request::get("/docs/openapi.json")
			.header("x-request-id", "docs-request")
			.body(Body::empty())?;

		let response = send(router(&store), request).await?;
		testing::assert_eq!(request_id(&response), Some("docs-request"));

		Ok(())
	}

	#[tokio::test]
	async fn unknown_route_is_a_problem_document() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let response = send(router(&store), get("/nope")?).await?;

		testing::assert_eq!(response.status(), StatusCode::NOT_FOUND);
		testing::assert_eq!(content_type(&response), Some(PROBLEM_JSON));
		testing::assert_eq!(
			body_json(response).await?["type"],
			"/docs/problems/resource-not-found",
		);

		Ok(())
	}

	#[tokio::test]
	async fn unsupported_method_is_a_problem_document() -> testing::Result
	{
		let store = InMemoryRecordStore::new();

		for (method, uri) in [
			(Method::DELETE, "/api"),
			(Method::PUT, "/api/65920a1b2c3d4e5f6a7b8c9d"),
		] {
			let request = Request::builder()
				.method(method)
				.uri(uri)
				.body(Body::empty())?;

			let response = send(router(&store), request).await?;

			testing::assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
			testing::assert_eq!(content_type(&response), Some(PROBLEM_JSON));
			testing::assert_eq!(body_json(response).await?["status"], 405);
		}

		testing::assert_eq!(store.write_count(), 0);

		Ok(())
	}

	#[tokio::test]
	async fn problem_types_resolve_against_the_api() -> testing::Result
	{
		let store = InMemoryRecordStore::new();
		let payload = json!({ "turnedOnAt": "2024-01-01T08:00:00Z" });
		let response = send(router(&store), post_json(&payload)?).await?;
		let problem = body_json(response).await?;

		let Some(problem_type) = problem["type"].as_str() else {
			anyhow::bail!("problem document has no `type`: {problem}");
		};

		let response = send(router(&store), get(problem_type)?).await?;
		testing::assert_eq!(response.status(), StatusCode::OK);

		let description = body_json(response).await?;
		testing::assert_eq!(description["type"], problem_type);
		testing::assert_eq!(description["status"], 422);

		let response = send(router(&store), get("/docs/problems")?).await?;
		let listed = body_json(response).await?;
		testing::assert!(
			listed.as_array().is_some_and(|problems| problems.contains(&description)),
			"{listed}",
		);

		let response = send(router(&store), get("/docs/problems/teapot")?).await?;
		testing::assert_eq!(response.status(), StatusCode::NOT_FOUND);

		Ok(())
	}
}
