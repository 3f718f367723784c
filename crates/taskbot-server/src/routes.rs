//! Request routing for `/api/robots` and `/api/robots/conflicts`.

use taskbot_core::responses::ConflictResponse;
use taskbot_core::schedule::ConflictQuery;
use taskbot_db::service::RobotService;

use crate::error::ApiError;
use crate::payload::{
    CreateRobotRequest, DeleteRobotRequest, UpdateRobotRequest, parse_conflict_query, require_id,
};
use crate::response::{ApiResponse, CONFLICT_HEADER, CONFLICTS_ALLOW, ROBOTS_ALLOW};

const ROBOTS_PATH: &str = "/api/robots";
const CONFLICTS_PATH: &str = "/api/robots/conflicts";

/// Serve one request. Never fails: every error becomes a response.
pub async fn handle(svc: &RobotService, method: &str, url: &str, body: &str) -> ApiResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    let result = match path {
        ROBOTS_PATH => robots(svc, method, body).await,
        CONFLICTS_PATH => conflicts(svc, method, query).await,
        _ => Err(ApiError::NotFound("not found".into())),
    };

    let response = result.unwrap_or_else(ApiResponse::from);
    tracing::debug!(method, path, status = response.status, "handled request");
    response
}

async fn robots(svc: &RobotService, method: &str, body: &str) -> Result<ApiResponse, ApiError> {
    match method {
        "GET" => {
            let robots = svc.list_robots().await?;
            Ok(ApiResponse::json(200, &robots))
        }
        "POST" => create(svc, body).await,
        "PUT" => update(svc, body).await,
        "DELETE" => {
            let request: DeleteRobotRequest = serde_json::from_str(body)?;
            svc.delete_robot(require_id(request.id)?).await?;
            Ok(ApiResponse::no_content())
        }
        other => Err(ApiError::MethodNotAllowed {
            method: other.to_string(),
            allow: ROBOTS_ALLOW,
        }),
    }
}

async fn create(svc: &RobotService, body: &str) -> Result<ApiResponse, ApiError> {
    let request: CreateRobotRequest = serde_json::from_str(body)?;
    let draft = request.into_draft()?;
    let is_daily = draft.is_daily;

    let conflict = svc.has_conflict(&ConflictQuery::for_draft(&draft)).await?;
    if conflict {
        tracing::warn!(
            name = %draft.name,
            day = draft.day,
            daily = is_daily,
            "new robot overlaps an existing schedule"
        );
    }

    let created = svc.create(draft).await?;
    let response = if is_daily {
        ApiResponse::json(201, &created)
    } else {
        match created.first() {
            Some(robot) => ApiResponse::json(201, robot),
            None => return Err(ApiError::Internal("create returned no record".into())),
        }
    };
    Ok(mark_conflict(response, conflict))
}

async fn update(svc: &RobotService, body: &str) -> Result<ApiResponse, ApiError> {
    let request: UpdateRobotRequest = serde_json::from_str(body)?;
    let id = require_id(request.id)?;
    let updated = svc.update_robot(id, request.update).await?;

    let query = ConflictQuery::for_draft(&updated.to_draft()).excluding(id);
    let conflict = svc.has_conflict(&query).await?;
    if conflict {
        tracing::warn!(id, day = updated.day, "updated robot overlaps an existing schedule");
    }
    Ok(mark_conflict(ApiResponse::json(200, &updated), conflict))
}

async fn conflicts(svc: &RobotService, method: &str, query: &str) -> Result<ApiResponse, ApiError> {
    if method != "GET" {
        return Err(ApiError::MethodNotAllowed {
            method: method.to_string(),
            allow: CONFLICTS_ALLOW,
        });
    }
    let query = parse_conflict_query(query)?;
    let hits = svc.conflicts(&query).await?;
    Ok(ApiResponse::json(
        200,
        &ConflictResponse {
            conflict: !hits.is_empty(),
            with: hits.iter().map(|r| r.id).collect(),
        },
    ))
}

fn mark_conflict(response: ApiResponse, conflict: bool) -> ApiResponse {
    if conflict {
        response.with_header(CONFLICT_HEADER, "true")
    } else {
        response
    }
}
