use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::export::to_csv_string;
use crate::geojson::validate;
use crate::geometry::MapFrame;
use crate::sample::{GEOJSON_MEDIA_TYPE, SAMPLE_FILENAME, SAMPLE_GEOJSON};
use crate::store::{SessionId, SessionState, StoreStats};
use super::models::*;
use super::AppState;

/// Header carrying the caller's session id in both directions
pub const SESSION_HEADER: &str = "x-session-id";

/// Multipart field holding the uploaded file
pub const UPLOAD_FIELD: &str = "file";

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::message(message)))
}

fn session_from_headers(headers: &HeaderMap) -> Result<Option<SessionId>, ApiError> {
    let value = match headers.get(SESSION_HEADER) {
        Some(value) => value,
        None => return Ok(None),
    };

    value
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .map(Some)
        .ok_or_else(|| {
            api_error(StatusCode::BAD_REQUEST, format!("Invalid {} header", SESSION_HEADER))
        })
}

fn require_session(headers: &HeaderMap) -> Result<SessionId, ApiError> {
    session_from_headers(headers)?
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "No locations uploaded for this session"))
}

fn with_session_header(id: &SessionId, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(SESSION_HEADER, value);
    }
    response
}

fn locations_response(id: &SessionId, state: SessionState) -> Option<LocationsResponse> {
    let locations = state.locations?;
    let frame = MapFrame::for_set(Some(&locations));

    Some(LocationsResponse {
        session_id: id.to_string(),
        source_name: state.source_name,
        count: locations.len(),
        last_updated: state.last_updated,
        locations,
        frame,
    })
}

/// Accepts a GeoJSON upload and makes it the session's location set
pub async fn upload_locations(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let session = session_from_headers(&headers)?.unwrap_or_else(SessionId::generate);

    let mut upload: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(e.status(), format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| api_error(e.status(), format!("Failed to read upload: {}", e)))?;
        upload = Some((filename, bytes.to_vec()));
    }

    let (filename, data) = upload.ok_or_else(|| {
        api_error(StatusCode::BAD_REQUEST, format!("Missing \"{}\" field", UPLOAD_FIELD))
    })?;

    let locations = match validate(&data) {
        Ok(locations) => locations,
        Err(e) => {
            warn!(session = %session, "upload rejected, keeping previous locations");
            let body = Json(ErrorResponse::from(&e));
            return Ok(with_session_header(&session, (StatusCode::UNPROCESSABLE_ENTITY, body)));
        }
    };

    info!(
        session = %session,
        records = locations.len(),
        file = filename.as_deref().unwrap_or("<unnamed>"),
        "locations uploaded"
    );

    state.store.commit(&session, locations, filename);

    let snapshot = state
        .store
        .get(&session)
        .and_then(|s| locations_response(&session, s))
        .ok_or_else(|| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Session was evicted during upload")
        })?;

    Ok(with_session_header(&session, (StatusCode::OK, Json(snapshot))))
}

/// Returns the session's current location set with its framing
pub async fn get_locations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LocationsResponse>, ApiError> {
    let session = require_session(&headers)?;

    state
        .store
        .get(&session)
        .and_then(|s| locations_response(&session, s))
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "No locations uploaded for this session"))
}

/// Boundary, centroid and zoom for the session; fallback view when nothing is loaded
pub async fn get_map_frame(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MapFrame>, ApiError> {
    let locations = session_from_headers(&headers)?.and_then(|id| state.store.locations(&id));

    Ok(Json(MapFrame::for_set(locations.as_ref())))
}

/// Downloads the session's locations as CSV
pub async fn export_locations_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let session = require_session(&headers)?;
    let locations = state
        .store
        .locations(&session)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "No locations uploaded for this session"))?;

    let csv = to_csv_string(&locations).map_err(|e| {
        api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to export CSV: {}", e))
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, mime::TEXT_CSV.as_ref()),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"turbine_locations.csv\""),
        ],
        csv,
    )
        .into_response())
}

/// Drops the session's location set
pub async fn clear_locations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let session = require_session(&headers)?;

    if state.store.clear(&session) {
        info!(session = %session, "locations cleared");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(api_error(StatusCode::NOT_FOUND, "No locations uploaded for this session"))
    }
}

/// Serves the example upload file
pub async fn download_sample() -> Response {
    let disposition = format!("attachment; filename=\"{}\"", SAMPLE_FILENAME);

    (
        [
            (header::CONTENT_TYPE, GEOJSON_MEDIA_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        SAMPLE_GEOJSON,
    )
        .into_response()
}

/// Session and record counts held by the store
pub async fn get_stats(State(state): State<AppState>) -> Json<StoreStats> {
    Json(state.store.stats())
}
