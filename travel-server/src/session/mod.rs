//! Route session state machine.
//!
//! A [`RouteSession`] holds one user's selection (origin, destination,
//! traveler) and the last computed result, and coordinates the external
//! route lookup:
//!
//! ```text
//! Idle --calculate--> Pending --ok--> Ready
//!                        |
//!                        +--err--> Failed
//! (any) --clear--> Idle
//! ```
//!
//! A lookup is split into [`RouteSession::begin_calculation`], which hands
//! out a [`RouteTicket`], and [`RouteSession::complete_calculation`], which
//! applies the result only if the ticket is still current. Starting a new
//! calculation or clearing the session bumps the generation, so answers
//! to older requests are discarded instead of overwriting newer state.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::Traveler;
use crate::estimate::format_duration;
use crate::registry::TravelerRegistry;
use crate::routing::{RouteLeg, RouteProvider, RouteRequest, RoutingError};

/// Shown instead of a duration until one can be computed.
pub const SELECT_TRAVELER_PROMPT: &str = "Select a Traveler to see travel time";

/// Traveler button label when nothing is selected.
const NO_TRAVELER_LABEL: &str = "Select a Traveler";

/// Where a session is in the lookup cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Nothing calculated
    #[default]
    Idle,
    /// Waiting on the routing service
    Pending,
    /// Distance known
    Ready,
    /// Last lookup was rejected by the routing service
    Failed,
}

/// Handle for one in-flight route lookup.
///
/// Only the ticket from the most recent [`RouteSession::begin_calculation`]
/// can complete the session.
#[derive(Debug, Clone)]
pub struct RouteTicket {
    generation: u64,
    request: RouteRequest,
}

impl RouteTicket {
    /// The request to send to the routing service.
    pub fn request(&self) -> &RouteRequest {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of driving a calculation to completion.
#[derive(Debug)]
pub enum CalculationOutcome {
    /// Origin or destination was empty; nothing happened.
    NotReady,
    /// Distance recorded; session is `Ready`.
    Ready,
    /// Routing service rejected the lookup; session is `Failed`.
    Failed(RoutingError),
    /// A newer calculation or a clear happened first; result discarded.
    Superseded,
}

/// One user's route selection and last result.
#[derive(Debug, Clone)]
pub struct RouteSession {
    registry: Arc<TravelerRegistry>,
    selected: Option<Arc<Traveler>>,
    origin: String,
    destination: String,
    last_leg: Option<RouteLeg>,
    last_duration_seconds: Option<f64>,
    status: SessionStatus,
    failure: Option<String>,
    generation: u64,
}

impl RouteSession {
    /// Create an idle session with nothing selected.
    pub fn new(registry: Arc<TravelerRegistry>) -> Self {
        Self {
            registry,
            selected: None,
            origin: String::new(),
            destination: String::new(),
            last_leg: None,
            last_duration_seconds: None,
            status: SessionStatus::Idle,
            failure: None,
            generation: 0,
        }
    }

    pub fn set_origin(&mut self, text: impl Into<String>) {
        self.origin = text.into();
    }

    pub fn set_destination(&mut self, text: impl Into<String>) {
        self.destination = text.into();
    }

    /// Select a traveler by name.
    ///
    /// Unknown names leave no traveler selected. When a distance is already
    /// known the duration is recomputed from it immediately; no new route
    /// lookup is made.
    pub fn select_traveler(&mut self, name: &str) -> Option<&Arc<Traveler>> {
        self.selected = self.registry.lookup(name);
        if self.selected.is_none() {
            debug!(name, "unknown traveler, selection cleared");
        }

        if self.status == SessionStatus::Ready {
            self.recompute_duration();
        }

        self.selected.as_ref()
    }

    /// Start a route lookup.
    ///
    /// Returns `None`, changing nothing, when origin or destination is empty.
    /// Otherwise moves to `Pending`, drops any previous result and returns
    /// the ticket that must accompany the routing service's answer.
    pub fn begin_calculation(&mut self) -> Option<RouteTicket> {
        if self.origin.is_empty() || self.destination.is_empty() {
            return None;
        }

        self.generation += 1;
        self.status = SessionStatus::Pending;
        self.last_leg = None;
        self.last_duration_seconds = None;
        self.failure = None;

        debug!(
            generation = self.generation,
            origin = %self.origin,
            destination = %self.destination,
            "route lookup started"
        );

        Some(RouteTicket {
            generation: self.generation,
            request: RouteRequest::walking(self.origin.clone(), self.destination.clone()),
        })
    }

    /// Apply the routing service's answer for `ticket`.
    pub fn complete_calculation(
        &mut self,
        ticket: RouteTicket,
        result: Result<RouteLeg, RoutingError>,
    ) -> CalculationOutcome {
        if ticket.generation != self.generation || self.status != SessionStatus::Pending {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale route result"
            );
            return CalculationOutcome::Superseded;
        }

        match result {
            Ok(leg) => {
                info!(
                    meters = leg.distance_meters,
                    origin = %ticket.request.origin,
                    destination = %ticket.request.destination,
                    "route ready"
                );
                self.last_leg = Some(leg);
                self.status = SessionStatus::Ready;
                self.recompute_duration();
                CalculationOutcome::Ready
            }
            Err(err) => {
                warn!(error = %err, "route lookup failed");
                self.status = SessionStatus::Failed;
                self.failure = Some(err.to_string());
                CalculationOutcome::Failed(err)
            }
        }
    }

    /// Run a complete lookup against `provider`.
    ///
    /// Holding `&mut self` across the call means nothing can supersede it;
    /// callers that share a session between tasks should use
    /// [`begin_calculation`](Self::begin_calculation) and
    /// [`complete_calculation`](Self::complete_calculation) directly and
    /// release their lock while the lookup runs.
    pub async fn calculate_route<P>(&mut self, provider: &P) -> CalculationOutcome
    where
        P: RouteProvider + ?Sized,
    {
        let Some(ticket) = self.begin_calculation() else {
            return CalculationOutcome::NotReady;
        };

        let result = provider.first_leg(ticket.request()).await;
        self.complete_calculation(ticket, result)
    }

    /// Reset inputs and results, keeping the selected traveler.
    ///
    /// Any lookup still in flight is abandoned: its result will be
    /// discarded when it arrives.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.origin.clear();
        self.destination.clear();
        self.last_leg = None;
        self.last_duration_seconds = None;
        self.failure = None;
        self.status = SessionStatus::Idle;
    }

    fn recompute_duration(&mut self) {
        self.last_duration_seconds = match (&self.selected, &self.last_leg) {
            (Some(traveler), Some(leg)) => match traveler.seconds_to_cover(leg.distance_meters) {
                Ok(secs) => Some(secs),
                Err(err) => {
                    warn!(traveler = traveler.name(), error = %err, "cannot estimate duration");
                    None
                }
            },
            _ => None,
        };
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn selected_traveler(&self) -> Option<&Arc<Traveler>> {
        self.selected.as_ref()
    }

    pub fn last_distance_meters(&self) -> Option<f64> {
        self.last_leg.as_ref().map(|leg| leg.distance_meters)
    }

    pub fn last_duration_seconds(&self) -> Option<f64> {
        self.last_duration_seconds
    }

    /// Error message from the last lookup, while `Failed`.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Current request generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Distance as displayed by the routing service, or empty.
    pub fn distance_display_text(&self) -> &str {
        self.last_leg
            .as_ref()
            .map(|leg| leg.distance_text.as_str())
            .unwrap_or("")
    }

    /// Formatted duration, or a prompt when there is nothing to show.
    pub fn duration_display_text(&self) -> String {
        self.last_duration_seconds
            .map(format_duration)
            .unwrap_or_else(|| SELECT_TRAVELER_PROMPT.to_string())
    }

    /// Label for the traveler picker.
    pub fn traveler_label(&self) -> String {
        match &self.selected {
            Some(traveler) => format!("Selected: {}", traveler.name()),
            None => NO_TRAVELER_LABEL.to_string(),
        }
    }
}
