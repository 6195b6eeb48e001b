#![allow(clippy::unwrap_used)]

use planner::error::PlannerError;

// Test Display implementation for Config variant
#[test]
fn test_config_error_display() {
    let err = PlannerError::Config("missing URL".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing URL");
}

// Test Display implementation for ServiceUnavailable variant
#[test]
fn test_service_unavailable_display() {
    let err = PlannerError::ServiceUnavailable;
    assert_eq!(err.to_string(), "Service temporarily unavailable (503)");
}

// Test Display implementation for InvalidResponse variant
#[test]
fn test_invalid_response_display() {
    let err = PlannerError::InvalidResponse("unexpected format".to_string());
    assert_eq!(err.to_string(), "Invalid response: unexpected format");
}

#[test]
fn test_rejected_display_with_message() {
    let err = PlannerError::Rejected {
        status: 422,
        message: Some("End date must be after start date".to_string()),
    };
    assert_eq!(
        err.to_string(),
        "Request rejected (HTTP 422): End date must be after start date"
    );
}

#[test]
fn test_rejected_display_without_message() {
    let err = PlannerError::Rejected {
        status: 500,
        message: None,
    };
    assert_eq!(err.to_string(), "Request rejected (HTTP 500)");
}

#[test]
fn test_rejection_message_only_for_rejections() {
    let rejected = PlannerError::Rejected {
        status: 400,
        message: Some("Budget too low".to_string()),
    };
    assert_eq!(rejected.rejection_message(), Some("Budget too low"));
    assert_eq!(PlannerError::ServiceUnavailable.rejection_message(), None);
    assert_eq!(
        PlannerError::InvalidResponse("x".to_string()).rejection_message(),
        None
    );
}

// Test that PlannerError implements std::error::Error
#[test]
fn test_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(PlannerError::ServiceUnavailable);
    assert!(err.source().is_none());
}

// SSR-only tests
#[cfg(feature = "ssr")]
mod ssr_tests {
    use super::*;
    use wiremock::matchers::any;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Test Display implementation for Http variant using real reqwest error
    #[tokio::test]
    async fn test_http_error_display() {
        let result = reqwest::Client::new().get("http://127.0.0.1:1").send().await;

        if let Err(err) = result {
            let planner_err = PlannerError::from(err);
            assert!(planner_err.to_string().starts_with("HTTP error:"));
        }
    }

    // error_for_status on a 503 maps to ServiceUnavailable
    #[tokio::test]
    async fn test_from_reqwest_503_is_service_unavailable() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(mock_server.uri()).await.unwrap();
        let err = response.error_for_status().unwrap_err();

        assert!(matches!(
            PlannerError::from(err),
            PlannerError::ServiceUnavailable
        ));
    }

    #[tokio::test]
    async fn test_from_reqwest_500_is_http() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(mock_server.uri()).await.unwrap();
        let err = response.error_for_status().unwrap_err();

        assert!(matches!(PlannerError::from(err), PlannerError::Http(_)));
    }
}
