//! The [OpenAPI] document describing the HTTP API.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use {axum::Router, utoipa::openapi::OpenApi, utoipa_swagger_ui::SwaggerUi};

static DESCRIPTION: &str = "\
Stores on/off intervals of devices and lists them back.

# Responses

Success responses are always documented, as well as any special error conditions.

We use [RFC 9457: Problem Details for HTTP APIs][rfc9457] for our error responses, so if you
receive a status code in the `4xx` or `5xx` range, you should decode the response body according to
that format. Every problem type is described at `/docs/problems`, and each `type` URI resolves to
its own description.

Every response also includes an `x-request-id` header, which is useful to include in bug reports.

[rfc9457]: https://www.rfc-editor.org/rfc/rfc9457.html
";

#[derive(Debug, utoipa::OpenApi)]
#[openapi(
	info(
		title = "Uptime API",
		description = DESCRIPTION,
		license(name = "GPL-3.0", url = "https://www.gnu.org/licenses/gpl-3.0.txt"),
	),
	paths(
		crate::records::http::get_records,
		crate::records::http::submit_record,
		crate::records::http::get_record,
	),
)]
pub struct Schema;

impl Schema
{
	pub fn generate() -> OpenApi
	{
		<Self as utoipa::OpenApi>::openapi()
	}

	/// Serializes the document as pretty-printed JSON.
	pub fn json() -> Result<String, serde_json::Error>
	{
		Self::generate().to_pretty_json()
	}
}

/// Serves the document at `/docs/openapi.json` and a Swagger UI at `/docs/swagger-ui`.
pub(crate) fn swagger_ui() -> Router
{
	let config = utoipa_swagger_ui::Config::from("/docs/openapi.json")
		.display_operation_id(true)
		.use_base_layout()
		.try_it_out_enabled(true);

	SwaggerUi::new("/docs/swagger-ui")
		.url("/docs/openapi.json", Schema::generate())
		.config(config)
		.into()
}
