//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Traveler;
use crate::session::{CalculationOutcome, RouteSession, SessionStatus};

use super::sessions::SessionId;

/// Body for origin/destination updates.
#[derive(Debug, Deserialize)]
pub struct TextUpdate {
    pub text: String,
}

/// Body for traveler selection.
#[derive(Debug, Deserialize)]
pub struct TravelerSelection {
    pub name: String,
}

/// Query for a one-off estimate.
#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    /// Route length in meters
    pub distance_meters: f64,

    /// Traveler name, exact match
    pub traveler: String,
}

/// A traveler in the catalog listing.
#[derive(Debug, Serialize)]
pub struct TravelerResult {
    pub name: String,

    /// Top speed in meters per second
    pub top_speed: f64,
}

impl TravelerResult {
    pub fn from_traveler(traveler: &Traveler) -> Self {
        Self {
            name: traveler.name().to_string(),
            top_speed: traveler.top_speed().meters_per_second(),
        }
    }
}

/// Response for the catalog listing.
#[derive(Debug, Serialize)]
pub struct TravelersResponse {
    /// Travelers in catalog order
    pub travelers: Vec<TravelerResult>,
}

/// Response for a one-off estimate.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub traveler: TravelerResult,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub duration_text: String,
}

/// Everything a client needs to render a session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: String,
    pub status: SessionStatus,
    pub origin: String,
    pub destination: String,

    /// Selected traveler name
    pub traveler: Option<String>,

    /// Label for the traveler picker
    pub traveler_label: String,

    pub distance_meters: Option<f64>,

    /// Distance as displayed by the routing service, or empty
    pub distance_text: String,

    pub duration_seconds: Option<f64>,

    /// Formatted duration or a selection prompt
    pub duration_text: String,

    /// Routing failure message while `status` is `failed`
    pub error: Option<String>,
}

impl SessionView {
    /// Snapshot a session.
    pub fn from_session(id: SessionId, session: &RouteSession) -> Self {
        Self {
            id: id.to_string(),
            status: session.status(),
            origin: session.origin().to_string(),
            destination: session.destination().to_string(),
            traveler: session
                .selected_traveler()
                .map(|t| t.name().to_string()),
            traveler_label: session.traveler_label(),
            distance_meters: session.last_distance_meters(),
            distance_text: session.distance_display_text().to_string(),
            duration_seconds: session.last_duration_seconds(),
            duration_text: session.duration_display_text(),
            error: session.failure().map(str::to_string),
        }
    }
}

/// How a calculate request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    NotReady,
    Ready,
    Failed,
    Superseded,
}

impl From<&CalculationOutcome> for OutcomeKind {
    fn from(outcome: &CalculationOutcome) -> Self {
        match outcome {
            CalculationOutcome::NotReady => OutcomeKind::NotReady,
            CalculationOutcome::Ready => OutcomeKind::Ready,
            CalculationOutcome::Failed(_) => OutcomeKind::Failed,
            CalculationOutcome::Superseded => OutcomeKind::Superseded,
        }
    }
}

/// Response for a calculate request.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub outcome: OutcomeKind,

    /// Session state after the request
    pub session: SessionView,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::registry::TravelerRegistry;
    use crate::routing::{RouteLeg, RoutingError};

    fn session() -> RouteSession {
        let registry = TravelerRegistry::builder()
            .add("Cheetah", 33.5)
            .build()
            .unwrap();
        RouteSession::new(Arc::new(registry))
    }

    #[test]
    fn idle_view() {
        let id = SessionId::random();
        let view = SessionView::from_session(id, &session());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["status"], "idle");
        assert_eq!(json["traveler"], serde_json::Value::Null);
        assert_eq!(json["traveler_label"], "Select a Traveler");
        assert_eq!(json["distance_text"], "");
        assert_eq!(json["duration_text"], "Select a Traveler to see travel time");
    }

    #[test]
    fn ready_view() {
        let mut session = session();
        session.select_traveler("Cheetah");
        session.set_origin("A");
        session.set_destination("B");
        let ticket = session.begin_calculation().unwrap();
        session.complete_calculation(ticket, Ok(RouteLeg::new(6700.0, "6.7 km").unwrap()));

        let view = SessionView::from_session(SessionId::random(), &session);

        assert_eq!(view.status, SessionStatus::Ready);
        assert_eq!(view.traveler.as_deref(), Some("Cheetah"));
        assert_eq!(view.distance_text, "6.7 km");
        assert_eq!(view.duration_seconds, Some(200.0));
        assert_eq!(view.duration_text, "3 minutes");
        assert!(view.error.is_none());
    }

    #[test]
    fn outcome_kinds() {
        assert_eq!(
            OutcomeKind::from(&CalculationOutcome::Failed(RoutingError::RateLimited)),
            OutcomeKind::Failed
        );
        assert_eq!(
            serde_json::to_string(&OutcomeKind::NotReady).unwrap(),
            "\"not_ready\""
        );
    }
}
