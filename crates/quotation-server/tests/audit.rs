use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

use quotation_export::config::RenderConfig;
use quotation_export::output::OutputDir;
use quotation_export::Renderer;
use quotation_server::state::AppState;

/// Collects everything the JSON formatter writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Captured {
    fn request_events(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
            .filter(|event| event["fields"]["message"] == "quotation_request")
            .map(|event| event["fields"].clone())
            .collect()
    }
}

#[tokio::test]
async fn each_request_logs_status_and_elapsed_time() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(captured.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let out = tempfile::tempdir().unwrap();
    let renderer = Renderer::new(RenderConfig::with_asset_dir(out.path().join("no-assets")));
    let router = quotation_server::router(AppState::new(renderer, OutputDir::new(out.path())));

    let health = router
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);

    let rejected = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("to_location=Pune"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let events = captured.request_events();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0]["method"], "GET");
    assert_eq!(events[0]["path"], "/health");
    assert_eq!(events[0]["status"], 200);
    assert_eq!(events[0]["content_type"], "application/json");
    assert!(events[0]["elapsed_ms"].is_u64());

    assert_eq!(events[1]["method"], "POST");
    assert_eq!(events[1]["status"], 400);
}
