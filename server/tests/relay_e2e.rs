//! End-to-end relay tests using real WebSocket clients.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures::stream::SplitStream;
use futures::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::{sleep, timeout};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};
use tower::ServiceExt;

use domain::location::LocationEvent;
use geo_relay_application::infrastructure_config::Config;
use server::bootstrap::router::create_router;
use server::bootstrap::state::AppState;

const TIMEOUT: Duration = Duration::from_secs(5);
const QUIET_PERIOD: Duration = Duration::from_millis(200);

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// Boot a relay on an ephemeral port and return its WS URL and state.
async fn boot_server(config: Config) -> (String, AppState) {
    let state = AppState::new(config);
    let app = create_router(&state).into_make_service_with_connect_info::<SocketAddr>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("ws://{addr}/ws"), state)
}

async fn wait_for_connections(state: &AppState, expected: usize) {
    timeout(TIMEOUT, async {
        while state.relay_service.connection_count() != expected {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("relay never reached the expected connection count");
}

async fn connect(url: &str) -> WsStream {
    let (ws, _) = connect_async(url).await.unwrap();
    ws
}

async fn send_location(ws: &mut WsStream, payload: Value) {
    let frame = json!({"event": "locationUpdate", "data": payload});
    ws.send(Message::text(frame.to_string())).await.unwrap();
}

async fn next_event(ws: &mut WsStream) -> Value {
    loop {
        let msg = timeout(TIMEOUT, ws.next())
            .await
            .expect("timed out waiting for a broadcast")
            .expect("stream ended")
            .unwrap();
        if let Message::Text(text) = msg {
            return serde_json::from_str(text.as_str()).unwrap();
        }
    }
}

async fn assert_silent(ws: &mut WsStream) {
    if let Ok(Some(Ok(Message::Text(text)))) = timeout(QUIET_PERIOD, ws.next()).await {
        panic!("unexpected message: {text}");
    }
}

async fn wait_for_close(ws: &mut WsStream) {
    timeout(TIMEOUT, async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                Some(Ok(_)) => {}
            }
        }
    })
    .await
    .expect("socket was never closed by the server");
}

async fn count_updates(mut rx: SplitStream<WsStream>, expected: usize) -> usize {
    let mut received = 0;
    while received < expected {
        match timeout(TIMEOUT, rx.next()).await {
            Ok(Some(Ok(Message::Text(_)))) => received += 1,
            Ok(Some(Ok(_))) => {}
            _ => break,
        }
    }
    received
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn broadcast_reaches_every_client_including_sender() {
    let (url, state) = boot_server(Config::default()).await;
    let mut a = connect(&url).await;
    let mut b = connect(&url).await;
    wait_for_connections(&state, 2).await;

    let payload = json!({"latitude": 12.97, "longitude": 77.59, "speed": 1.4});
    send_location(&mut a, payload.clone()).await;

    let expected = json!({"event": "updateLocation", "data": payload});
    assert_eq!(next_event(&mut a).await, expected);
    assert_eq!(next_event(&mut b).await, expected);

    // exactly one copy each
    assert_silent(&mut a).await;
    assert_silent(&mut b).await;
}

#[tokio::test]
async fn malformed_payload_is_dropped_silently() {
    let (url, state) = boot_server(Config::default()).await;
    let mut a = connect(&url).await;
    let mut b = connect(&url).await;
    wait_for_connections(&state, 2).await;

    send_location(&mut a, json!({"latitude": "bad"})).await;
    a.send(Message::text("not even json")).await.unwrap();

    assert_silent(&mut a).await;
    assert_silent(&mut b).await;
    assert_eq!(state.relay_service.connection_count(), 2);

    // the sender is still connected and relaying afterwards
    send_location(&mut a, json!({"latitude": 0.0, "longitude": 0.0, "speed": 0.0})).await;
    assert_eq!(next_event(&mut b).await["event"], "updateLocation");
}

#[tokio::test]
async fn disconnected_client_is_removed_and_others_keep_working() {
    let (url, state) = boot_server(Config::default()).await;
    let mut a = connect(&url).await;
    let mut b = connect(&url).await;
    wait_for_connections(&state, 2).await;

    a.close(None).await.unwrap();
    drop(a);
    wait_for_connections(&state, 1).await;

    let payload = json!({"latitude": -33.86, "longitude": 151.21, "speed": 3.0});
    send_location(&mut b, payload.clone()).await;
    assert_eq!(
        next_event(&mut b).await,
        json!({"event": "updateLocation", "data": payload})
    );
}

#[tokio::test]
async fn legacy_send_location_event_is_relayed() {
    let (url, state) = boot_server(Config::default()).await;
    let mut a = connect(&url).await;
    wait_for_connections(&state, 1).await;

    let frame = json!({
        "event": "sendLocation",
        "data": {"latitude": 51.5, "longitude": -0.12, "speed": 0.0}
    });
    a.send(Message::text(frame.to_string())).await.unwrap();

    assert_eq!(next_event(&mut a).await["data"]["latitude"], 51.5);
}

#[tokio::test]
async fn health_reports_registered_connections() {
    let (url, state) = boot_server(Config::default()).await;
    let _a = connect(&url).await;
    wait_for_connections(&state, 1).await;

    let (status, body) = get(create_router(&state), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["connections"], 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn burst_from_one_client_keeps_reading_peers_connected() {
    const BURST: usize = 500;

    let (url, state) = boot_server(Config::default()).await;
    let (mut a_tx, a_rx) = connect(&url).await.split();
    let (_b_tx, b_rx) = connect(&url).await.split();
    wait_for_connections(&state, 2).await;

    let a_reader = tokio::spawn(count_updates(a_rx, BURST));
    let b_reader = tokio::spawn(count_updates(b_rx, BURST));

    let frame = json!({
        "event": "locationUpdate",
        "data": {"latitude": 48.85, "longitude": 2.35, "speed": 1.0}
    })
    .to_string();
    for _ in 0..BURST {
        a_tx.feed(Message::text(frame.clone())).await.unwrap();
    }
    a_tx.flush().await.unwrap();

    assert_eq!(b_reader.await.unwrap(), BURST);
    assert_eq!(a_reader.await.unwrap(), BURST);
    assert_eq!(state.relay_service.connection_count(), 2);
}

#[tokio::test]
async fn full_outbound_queue_prunes_and_closes_the_socket() {
    let mut config = Config::default();
    config.websocket.connection_buffer_size = 4;
    let (url, state) = boot_server(config).await;
    let mut b = connect(&url).await;
    wait_for_connections(&state, 1).await;

    // No await between broadcasts, so the connection task cannot drain its queue.
    let event = LocationEvent::new(35.68, 139.69, 0.5).unwrap();
    let reports: Vec<_> = (0..5).map(|_| state.relay_service.broadcast(event)).collect();

    assert!(reports[..4].iter().all(|report| report.delivered == 1));
    assert_eq!(reports[4].delivered, 0);
    assert_eq!(reports[4].pruned, 1);
    assert_eq!(state.relay_service.connection_count(), 0);

    // Already queued updates are flushed before the server closes the socket.
    for _ in 0..4 {
        assert_eq!(next_event(&mut b).await["data"]["latitude"], 35.68);
    }
    wait_for_close(&mut b).await;
}

#[tokio::test]
async fn upgrade_is_refused_once_connection_limit_is_reached() {
    let mut config = Config::default();
    config.websocket.max_connections = Some(1);
    let (url, state) = boot_server(config).await;
    let _a = connect(&url).await;
    wait_for_connections(&state, 1).await;

    match connect_async(&url).await {
        Err(tungstenite::Error::Http(response)) => {
            assert_eq!(response.status().as_u16(), 503);
        }
        Err(e) => panic!("unexpected handshake error: {e}"),
        Ok(_) => panic!("upgrade accepted past the connection limit"),
    }
    assert_eq!(state.relay_service.connection_count(), 1);
}

#[tokio::test]
async fn static_assets_serve_index_and_asset_dir() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("views")).unwrap();
    std::fs::create_dir_all(root.path().join("public/js")).unwrap();
    std::fs::write(root.path().join("views/index.html"), "<h1>live map</h1>").unwrap();
    std::fs::write(root.path().join("public/js/script.js"), "socket.connect();").unwrap();

    let mut config = Config::default();
    config.static_assets.dir = root.path().join("public").display().to_string();
    config.static_assets.index = root.path().join("views/index.html").display().to_string();
    let router = create_router(&AppState::new(config));

    assert_eq!(
        get(router.clone(), "/").await,
        (StatusCode::OK, "<h1>live map</h1>".to_string())
    );
    assert_eq!(
        get(router.clone(), "/js/script.js").await,
        (StatusCode::OK, "socket.connect();".to_string())
    );
    assert_eq!(get(router, "/js/missing.js").await.0, StatusCode::NOT_FOUND);
}
