use std::collections::HashMap;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};

use crate::error::{ErrorKind, SigningLogError};
use crate::signinglog::{AdminQueryService, QueryResult};

/// Name of the pagination query parameter
pub const FROM_ID_PARAM: &str = "fromID";

pub async fn handle_list(
    State(service): State<AdminQueryService>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<QueryResult>) {
    let from_id = params.get(FROM_ID_PARAM).map(String::as_str);
    info!("Signing log list requested (fromID: {:?})", from_id);

    let result = service.list(from_id).await;
    (status_for(&result), Json(result))
}

pub async fn handle_delete(
    State(service): State<AdminQueryService>,
    path: Result<Path<String>, PathRejection>,
) -> (StatusCode, Json<QueryResult>) {
    // Segments that do not decode to UTF-8 still get the JSON envelope
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!("Rejected signing log deletion: {}", rejection.body_text());
            let err = SigningLogError::Validation(rejection.body_text());
            let result = QueryResult::failed(&err);
            return (status_for(&result), Json(result));
        }
    };
    info!("Signing log deletion requested: {}", id);

    let result = service.delete(&id).await;
    (status_for(&result), Json(result))
}

fn status_for(result: &QueryResult) -> StatusCode {
    match result.error_kind() {
        None => StatusCode::OK,
        Some(ErrorKind::Validation) => StatusCode::BAD_REQUEST,
        Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
        Some(ErrorKind::Backend) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
