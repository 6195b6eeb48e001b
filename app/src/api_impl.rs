//! Business logic extracted from server functions for testability.
//!
//! The `#[server]` functions in [`crate::api`] only look up the
//! [`PlannerClient`] and delegate here.

use crate::error::{PlannerError, Result};
use crate::planner_client::PlannerClient;
use crate::types::{TripCreated, TripDraft};
use std::sync::Arc;
use tracing::{error, info};

/// Get the shared [`PlannerClient`] from Leptos context.
pub fn planner_from_context() -> Result<Arc<PlannerClient>> {
    leptos::prelude::use_context::<Arc<PlannerClient>>()
        .ok_or_else(|| PlannerError::Config("planner client missing from context".to_string()))
}

pub async fn fetch_destinations_impl(planner: &PlannerClient) -> Result<Vec<String>> {
    planner.fetch_destinations().await.inspect_err(|e| {
        error!("Failed to fetch destinations: {}", e);
    })
}

pub async fn create_trip_impl(planner: &PlannerClient, draft: TripDraft) -> Result<TripCreated> {
    match planner.create_trip(&draft).await {
        Ok(created) => {
            info!(
                "Created trip {} ({} -> {})",
                created.trip_id, draft.start_city, draft.destination
            );
            Ok(created)
        }
        Err(e) => {
            error!("Failed to create trip: {}", e);
            Err(e)
        }
    }
}

/// The part of a trip-creation error that may be shown to the user.
///
/// Only a message written by the planner backend is forwarded; everything
/// else becomes an empty string so the page falls back to its default text.
pub fn client_facing_message(err: &PlannerError) -> String {
    err.rejection_message().unwrap_or_default().to_string()
}
