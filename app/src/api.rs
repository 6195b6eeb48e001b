use crate::submission::{SubmitFailure, TripService};
use crate::types::{TripCreated, TripDraft};
use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::api_impl;

/// Destination names for the autocomplete, straight from the planner backend.
#[server(endpoint = "get_destinations")]
pub async fn get_destinations() -> Result<Vec<String>, ServerFnError> {
    let planner = api_impl::planner_from_context().map_err(|e| ServerFnError::new(e.to_string()))?;
    api_impl::fetch_destinations_impl(&planner)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Create a trip from a complete draft.
///
/// Only a message supplied by the planner backend reaches the browser; any
/// other failure is reported with an empty message.
#[server(endpoint = "create_trip")]
pub async fn create_trip(draft: TripDraft) -> Result<TripCreated, ServerFnError> {
    let result = match api_impl::planner_from_context() {
        Ok(planner) => api_impl::create_trip_impl(&planner, draft).await,
        Err(e) => Err(e),
    };
    result.map_err(|e| ServerFnError::new(api_impl::client_facing_message(&e)))
}

/// Map a server function error to a submission failure, keeping only a
/// message produced by the server itself.
pub fn submit_failure_from(err: &ServerFnError) -> SubmitFailure {
    match err {
        ServerFnError::ServerError(message) => SubmitFailure::new(Some(message.clone())),
        _ => SubmitFailure::default(),
    }
}

/// [`TripService`] backed by the `create_trip` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnTripService;

impl TripService for ServerFnTripService {
    async fn create_trip(&self, draft: TripDraft) -> Result<TripCreated, SubmitFailure> {
        create_trip(draft)
            .await
            .map_err(|e| submit_failure_from(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::DEFAULT_FAILURE_MESSAGE;

    #[test]
    fn test_server_error_message_is_kept() {
        let failure = submit_failure_from(&ServerFnError::new("Budget too low"));
        assert_eq!(failure.display_message(), "Budget too low");
    }

    #[test]
    fn test_empty_server_error_uses_default() {
        let failure = submit_failure_from(&ServerFnError::new(""));
        assert_eq!(failure.display_message(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_transport_error_uses_default() {
        let failure = submit_failure_from(&ServerFnError::Request("connection reset".to_string()));
        assert!(failure.message.is_none());
        assert_eq!(failure.display_message(), DEFAULT_FAILURE_MESSAGE);
    }
}
