//! HTTP handlers for the `/api` endpoint.

use {
	super::{RecordId, RecordService, get_record, get_records, submit_record},
	crate::http::{
		json::Json,
		path::Path,
		problem_details::ProblemDetails,
		response::Created,
	},
	axum::{Router, extract::State, routing},
};

/// Returns a router for the `/api` endpoint.
pub(crate) fn router(record_service: RecordService) -> Router
{
	Router::new()
		.route("/", routing::get(get_records).post(submit_record))
		.route("/{record_id}", routing::get(get_record))
		.with_state(record_service)
}

/// Lists up to 1024 records.
#[tracing::instrument(level = "debug", skip(record_service), err(Debug, level = "debug"))]
#[utoipa::path(
	get,
	path = "/api",
	tag = "Records",
	operation_id = "get_records",
	responses(
		(status = 200, body = Vec<super::Record>, description = "the stored records"),
		(status = 500, body = ProblemDetails, content_type = "application/problem+json"),
	),
)]
pub(crate) async fn get_records(
	State(record_service): State<RecordService>,
) -> get_records::Result<Json<get_records::Response>>
{
	let records = record_service.get_records().await?;

	Ok(Json(records))
}

/// Creates a new record.
///
/// The response body is the record as it was stored, including its newly assigned `_id`.
#[tracing::instrument(level = "debug", skip(record_service), err(Debug, level = "debug"))]
#[utoipa::path(
	post,
	path = "/api",
	tag = "Records",
	operation_id = "submit_record",
	request_body = super::NewRecord,
	responses(
		(status = 201, body = super::Record, description = "the newly created record",
		 headers(("Location" = String, description = "URI of the new record"))),
		(status = 400, body = ProblemDetails, content_type = "application/problem+json",
		 description = "missing `Content-Type: application/json` header"),
		(status = 422, body = ProblemDetails, content_type = "application/problem+json",
		 description = "malformed request body"),
		(status = 500, body = ProblemDetails, content_type = "application/problem+json"),
	),
)]
pub(crate) async fn submit_record(
	State(record_service): State<RecordService>,
	Json(request): Json<submit_record::Request>,
) -> submit_record::Result<Created<submit_record::Response>>
{
	let record = record_service.submit_record(request).await?;
	let location = location!("/api/{}", record.id);

	Ok(Created::new(location, record))
}

/// Fetches a single record by its ID.
#[tracing::instrument(level = "debug", skip(record_service), err(Debug, level = "debug"))]
#[utoipa::path(
	get,
	path = "/api/{record_id}",
	tag = "Records",
	operation_id = "get_record",
	params(("record_id" = String, Path, description = "the record's ID")),
	responses(
		(status = 200, body = super::Record, description = "the record"),
		(status = 400, body = ProblemDetails, content_type = "application/problem+json",
		 description = "malformed record ID"),
		(status = 404, body = ProblemDetails, content_type = "application/problem+json"),
		(status = 500, body = ProblemDetails, content_type = "application/problem+json"),
	),
)]
pub(crate) async fn get_record(
	State(record_service): State<RecordService>,
	Path(record_id): Path<RecordId>,
) -> get_record::Result<Json<get_record::Response>>
{
	let record = record_service.get_record(record_id).await?;

	Ok(Json(record))
}
