//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post, put},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::domain::DomainError;
use crate::estimate::format_duration;

use super::dto::*;
use super::sessions::{SessionId, SharedSession, calculate_shared};
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/travelers", get(list_travelers))
        .route("/api/estimate", get(estimate))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/origin", put(set_origin))
        .route("/api/sessions/:id/destination", put(set_destination))
        .route("/api/sessions/:id/traveler", put(select_traveler))
        .route("/api/sessions/:id/calculate", post(calculate))
        .route("/api/sessions/:id/clear", post(clear_session))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Welcome page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = IndexTemplate::from_registry(&state.registry)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;
    Ok(Html(html))
}

/// List the catalog in order.
async fn list_travelers(State(state): State<AppState>) -> Json<TravelersResponse> {
    let travelers = state
        .registry
        .iter()
        .map(|t| TravelerResult::from_traveler(t))
        .collect();

    Json(TravelersResponse { travelers })
}

/// Estimate a travel time without a session.
async fn estimate(
    State(state): State<AppState>,
    Query(req): Query<EstimateQuery>,
) -> Result<Json<EstimateResponse>, AppError> {
    let traveler = state
        .registry
        .lookup(&req.traveler)
        .ok_or_else(|| AppError::BadRequest {
            message: format!("Unknown traveler: {}", req.traveler),
        })?;

    let duration_seconds = traveler.seconds_to_cover(req.distance_meters)?;

    Ok(Json(EstimateResponse {
        traveler: TravelerResult::from_traveler(&traveler),
        distance_meters: req.distance_meters,
        duration_seconds,
        duration_text: format_duration(duration_seconds),
    }))
}

/// Start a new session.
async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    let (id, session) = state.sessions.create().await;
    info!(session = %id, "session created");

    let view = SessionView::from_session(id, &*session.lock().await);
    (StatusCode::CREATED, Json(view))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let (id, session) = find_session(&state, &id).await?;
    let view = SessionView::from_session(id, &*session.lock().await);
    Ok(Json(view))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let (id, _) = find_session(&state, &id).await?;
    state.sessions.remove(&id).await;
    debug!(session = %id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn set_origin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TextUpdate>,
) -> Result<Json<SessionView>, AppError> {
    let (id, session) = find_session(&state, &id).await?;
    let mut guard = session.lock().await;
    guard.set_origin(body.text);
    Ok(Json(SessionView::from_session(id, &guard)))
}

async fn set_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TextUpdate>,
) -> Result<Json<SessionView>, AppError> {
    let (id, session) = find_session(&state, &id).await?;
    let mut guard = session.lock().await;
    guard.set_destination(body.text);
    Ok(Json(SessionView::from_session(id, &guard)))
}

/// Select a traveler. Unknown names clear the selection.
async fn select_traveler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TravelerSelection>,
) -> Result<Json<SessionView>, AppError> {
    let (id, session) = find_session(&state, &id).await?;
    let mut guard = session.lock().await;
    guard.select_traveler(&body.name);
    Ok(Json(SessionView::from_session(id, &guard)))
}

/// Look up the route for the session's origin and destination.
///
/// Routing failures land in the session view rather than in the HTTP
/// status; the session is the source of truth for what the user sees.
async fn calculate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CalculateResponse>, AppError> {
    let (id, session) = find_session(&state, &id).await?;

    let outcome = calculate_shared(&session, state.routing.as_ref()).await;
    debug!(session = %id, outcome = ?OutcomeKind::from(&outcome), "calculation finished");

    let view = SessionView::from_session(id, &*session.lock().await);
    Ok(Json(CalculateResponse {
        outcome: OutcomeKind::from(&outcome),
        session: view,
    }))
}

/// Reset origin, destination and results, keeping the traveler.
async fn clear_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let (id, session) = find_session(&state, &id).await?;
    let mut guard = session.lock().await;
    guard.clear();
    Ok(Json(SessionView::from_session(id, &guard)))
}

async fn find_session(state: &AppState, id: &str) -> Result<(SessionId, SharedSession), AppError> {
    let not_found = || AppError::NotFound {
        message: format!("Unknown session: {id}"),
    };

    let id = SessionId::parse(id).ok_or_else(not_found)?;
    let session = state.sessions.get(&id).await.ok_or_else(not_found)?;
    Ok((id, session))
}

// ============================================================================
// Error handling
// ============================================================================

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::registry::TravelerRegistry;
    use crate::routing::MockRoutingClient;
    use crate::session::SessionStatus;

    fn state() -> AppState {
        let registry = TravelerRegistry::builder()
            .add("Walker", 1.0)
            .add("Cheetah", 33.5)
            .build()
            .unwrap();
        let routing = MockRoutingClient::new().with_route("Home", "Work", 6700.0);
        AppState::new(registry, Arc::new(routing), Duration::from_secs(60))
    }

    async fn new_session(state: &AppState) -> String {
        let (status, Json(view)) = create_session(State(state.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        view.id
    }

    fn text(s: &str) -> Json<TextUpdate> {
        Json(TextUpdate { text: s.to_string() })
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn travelers_listed_in_catalog_order() {
        let Json(response) = list_travelers(State(state())).await;
        let names: Vec<_> = response.travelers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Walker", "Cheetah"]);
    }

    #[tokio::test]
    async fn estimate_formats_duration() {
        let query = EstimateQuery {
            distance_meters: 3661.0,
            traveler: "Walker".into(),
        };
        let Json(response) = estimate(State(state()), Query(query)).await.unwrap();

        assert_eq!(response.duration_seconds, 3661.0);
        assert_eq!(response.duration_text, "1 hour, 1 minute");
    }

    #[tokio::test]
    async fn estimate_rejects_bad_input() {
        let unknown = EstimateQuery {
            distance_meters: 10.0,
            traveler: "Dragon".into(),
        };
        let err = estimate(State(state()), Query(unknown)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let negative = EstimateQuery {
            distance_meters: -1.0,
            traveler: "Walker".into(),
        };
        let err = estimate(State(state()), Query(negative)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let state = state();

        let err = get_session(State(state.clone()), Path("nope".into()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = get_session(State(state), Path(SessionId::random().to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn full_session_flow() {
        let state = state();
        let id = new_session(&state).await;

        set_origin(State(state.clone()), Path(id.clone()), text("Home"))
            .await
            .unwrap();
        set_destination(State(state.clone()), Path(id.clone()), text("Work"))
            .await
            .unwrap();

        let Json(calculated) = calculate(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(calculated.outcome, OutcomeKind::Ready);
        assert_eq!(calculated.session.distance_text, "6.7 km");
        assert_eq!(
            calculated.session.duration_text,
            "Select a Traveler to see travel time"
        );

        let selection = Json(TravelerSelection {
            name: "Cheetah".into(),
        });
        let Json(view) = select_traveler(State(state.clone()), Path(id.clone()), selection)
            .await
            .unwrap();
        assert_eq!(view.traveler_label, "Selected: Cheetah");
        assert_eq!(view.duration_text, "3 minutes");

        let Json(cleared) = clear_session(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(cleared.status, SessionStatus::Idle);
        assert_eq!(cleared.origin, "");
        assert_eq!(cleared.traveler.as_deref(), Some("Cheetah"));
    }

    #[tokio::test]
    async fn routing_failure_reported_in_view() {
        let state = state();
        let id = new_session(&state).await;

        set_origin(State(state.clone()), Path(id.clone()), text("Home"))
            .await
            .unwrap();
        set_destination(State(state.clone()), Path(id.clone()), text("Moon"))
            .await
            .unwrap();

        let Json(response) = calculate(State(state), Path(id)).await.unwrap();

        assert_eq!(response.outcome, OutcomeKind::Failed);
        assert_eq!(response.session.status, SessionStatus::Failed);
        assert!(response.session.error.unwrap().contains("Moon"));
    }

    #[tokio::test]
    async fn calculate_without_input_is_not_ready() {
        let state = state();
        let id = new_session(&state).await;

        let Json(response) = calculate(State(state), Path(id)).await.unwrap();

        assert_eq!(response.outcome, OutcomeKind::NotReady);
        assert_eq!(response.session.status, SessionStatus::Idle);
    }

    #[tokio::test]
    async fn deleted_session_is_gone() {
        let state = state();
        let id = new_session(&state).await;

        let status = delete_session(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(get_session(State(state), Path(id)).await.is_err());
    }

    #[tokio::test]
    async fn router_builds() {
        let dir = tempfile::tempdir().unwrap();
        let _router = create_router(state(), dir.path());
    }
}
