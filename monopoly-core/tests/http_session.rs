//! `RollSession` over real HTTP against a mock game server.

use monopoly_core::{BoardView, RollSession, SessionConfig, SessionEvent};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_roll_round_trip_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roll-dice"))
        .and(body_json(serde_json::json!({"dice1": 4, "dice2": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Rolled 4 and 5",
            "next_player": "Alice"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut session, mut rx) = RollSession::connect(SessionConfig::new(server.uri())).unwrap();
    let mut view = BoardView::new();

    session.submit(4, 5).unwrap();
    view.apply(&rx.recv().await.unwrap());

    assert_eq!(view.journal(), "Rolled 4 and 5");
    assert_eq!(view.current_player(), "Alice");
}

#[tokio::test]
async fn test_invalid_roll_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roll-dice"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (mut session, _rx) = RollSession::connect(SessionConfig::new(server.uri())).unwrap();

    assert!(session.submit(0, 3).is_err());
    assert!(session.submit(3, 7).is_err());
}

#[tokio::test]
async fn test_server_error_is_failed_event() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roll-dice"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (mut session, mut rx) = RollSession::connect(SessionConfig::new(server.uri())).unwrap();
    let mut view = BoardView::new();

    session.submit(2, 3).unwrap();
    let event = rx.recv().await.unwrap();

    assert!(matches!(event, SessionEvent::Failed { .. }), "got {event:?}");
    assert!(!view.apply(&event));
    assert_eq!(view, BoardView::new());
}

#[tokio::test]
async fn test_connection_refused_is_failed_event() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = SessionConfig::new(format!("http://127.0.0.1:{port}"));
    let (mut session, mut rx) = RollSession::connect(config).unwrap();
    let mut view = BoardView::new();

    let ticket = session.submit(5, 6).unwrap();
    let event = rx.recv().await.unwrap();

    match &event {
        SessionEvent::Failed { ticket: failed, error } => {
            assert_eq!(*failed, ticket);
            assert!(error.starts_with("Network error"), "got {error:?}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!view.apply(&event));
    assert_eq!(view, BoardView::new());
    assert_eq!(session.in_flight(), 0);
}

#[tokio::test]
async fn test_ping_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let (session, mut rx) = RollSession::connect(SessionConfig::new(server.uri())).unwrap();
    assert_eq!(
        session.server_url(),
        Some(format!("{}/", server.uri()).as_str())
    );

    session.check_connection();
    assert_eq!(
        rx.recv().await.unwrap(),
        SessionEvent::Connectivity { reachable: true }
    );
}
