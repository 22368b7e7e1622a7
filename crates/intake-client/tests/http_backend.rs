//! HTTP backend tests against a mock clinical backend.

use intake_client::{
    BookingRequest, BookingService, ClientError, DoctorMatcher, HttpBackend, IntakeBackend,
    MatchRequest,
};
use intake_core::config::BackendConfig;
use intake_core::{Priority, SessionId};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpBackend {
    let config = BackendConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        enabled: true,
    };
    HttpBackend::new(&config).unwrap()
}

fn match_request() -> MatchRequest {
    MatchRequest {
        triage_priority: Priority::Orange,
        specialties: vec!["Cardiology".to_string()],
        symptoms: vec!["chest tightness".to_string()],
    }
}

// =============================================================================
// Intake
// =============================================================================

#[tokio::test]
async fn test_start_session_sends_form_and_reads_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/intake/start"))
        .and(body_string_contains("patient_id=p-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "remote-1",
            "message": "Welcome back",
            "stage": "greeting"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let started = backend_for(&server)
        .start_session(Some("p-42"))
        .await
        .unwrap();
    assert_eq!(started.session_id, SessionId("remote-1".to_string()));
    assert_eq!(started.greeting.as_deref(), Some("Welcome back"));
}

#[tokio::test]
async fn test_send_message_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/intake/message"))
        .and(body_json(json!({
            "session_id": "remote-1",
            "message": "headache"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_complete": false,
            "message": "How long?",
            "stage": "duration"
        })))
        .mount(&server)
        .await;

    let reply = backend_for(&server)
        .send_message(&SessionId("remote-1".to_string()), "headache", None)
        .await
        .unwrap();
    assert!(!reply.session_complete);
    assert_eq!(reply.stage.as_deref(), Some("duration"));
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/intake/message"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .send_message(&SessionId("x".to_string()), "hi", None)
        .await
        .unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/intake/start"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = backend_for(&server).start_session(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_host_maps_to_http() {
    let config = BackendConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        enabled: true,
    };
    let backend = HttpBackend::new(&config).unwrap();
    let err = backend.start_session(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
}

// =============================================================================
// Doctor matching
// =============================================================================

#[tokio::test]
async fn test_match_moves_top_level_slots_onto_recommended() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctors/match"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "recommended_doctor": {
                "id": "doc-1", "name": "Dr. Ada Lovelace", "specialty": "Cardiology", "rating": 4.9
            },
            "available_slots": ["Mon 09:00", "Mon 10:00"],
            "estimated_wait_time": "2 days",
            "alternative_doctors": [
                {"id": "doc-2", "name": "Dr. Alan Turing", "specialty": "Cardiology",
                 "available_slots": ["Tue 11:00"]}
            ]
        })))
        .mount(&server)
        .await;

    let matched = backend_for(&server)
        .match_doctors(&match_request())
        .await
        .unwrap();

    let rec = matched.recommended.as_ref().unwrap();
    assert_eq!(rec.id, "doc-1");
    assert_eq!(rec.available_slots, vec!["Mon 09:00", "Mon 10:00"]);
    assert_eq!(rec.estimated_wait_time.as_deref(), Some("2 days"));
    assert_eq!(matched.alternatives.len(), 1);
    assert_eq!(matched.alternatives[0].available_slots, vec!["Tue 11:00"]);
}

#[tokio::test]
async fn test_match_sends_lowercase_priority() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctors/match"))
        .and(body_json(json!({
            "triage_priority": "orange",
            "specialties": ["Cardiology"],
            "symptoms": ["chest tightness"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "alternative_doctors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let matched = backend_for(&server)
        .match_doctors(&match_request())
        .await
        .unwrap();
    assert!(matched.is_empty());
}

#[tokio::test]
async fn test_match_unsuccessful_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctors/match"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "No doctors available"
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .match_doctors(&match_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(ref m) if m == "No doctors available"));
}

// =============================================================================
// Booking
// =============================================================================

fn booking() -> BookingRequest {
    BookingRequest {
        session_id: SessionId("remote-1".to_string()),
        doctor_id: "doc-1".to_string(),
        slot: "Mon 09:00".to_string(),
    }
}

#[tokio::test]
async fn test_booking_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctors/assign"))
        .and(body_json(json!({
            "session_id": "remote-1",
            "doctor_id": "doc-1",
            "slot": "Mon 09:00"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Appointment confirmed"
        })))
        .mount(&server)
        .await;

    let confirmation = backend_for(&server).book(&booking()).await.unwrap();
    assert_eq!(confirmation.doctor_id, "doc-1");
    assert_eq!(confirmation.slot, "Mon 09:00");
    assert_eq!(confirmation.message.as_deref(), Some("Appointment confirmed"));
}

#[tokio::test]
async fn test_booking_refused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctors/assign"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Selected doctor not found"
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server).book(&booking()).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
}
