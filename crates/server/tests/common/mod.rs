//! Common test utilities for API testing.
//!
//! This module provides a test fixture that creates an in-process server
//! with the real or a mock spreadsheet decoder, plus helpers that build
//! real xlsx uploads.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use futures::channel::mpsc;
use http_body_util::BodyExt;
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use tower::ServiceExt;

use finplan_core::{
    testing::MockDecoder, CalamineDecoder, ColumnMapping, Config, SpreadsheetDecoder,
};

/// Re-export fixtures for test convenience
pub use finplan_core::testing::fixtures;
use fixtures::OrderRow;

/// Multipart boundary used by upload helpers
const BOUNDARY: &str = "finplan-test-boundary";

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Test fixture for API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_upload() {
///     let fixture = TestFixture::new();
///     let xlsx = xlsx_from_rows(vec![OrderRow::new("A1", "Acme")]);
///
///     let response = fixture.upload("orders.xlsx", &xlsx).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock decoder, when the fixture was built with one
    pub decoder: Option<MockDecoder>,
}

/// JSON response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Response whose body is kept as text
#[derive(Debug)]
pub struct TextResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
}

impl TestFixture {
    /// Create a fixture with the real workbook decoder and default config.
    pub fn new() -> Self {
        Self::build(Config::default(), Arc::new(CalamineDecoder::new()), None)
    }

    /// Create a fixture with the real decoder and a custom config.
    pub fn with_config(config: Config) -> Self {
        Self::build(config, Arc::new(CalamineDecoder::new()), None)
    }

    /// Create a fixture whose decoder is a controllable mock.
    pub fn with_mock_decoder() -> Self {
        let decoder = MockDecoder::new();
        Self::build(
            Config::default(),
            Arc::new(decoder.clone()),
            Some(decoder),
        )
    }

    fn build(
        config: Config,
        decoder: Arc<dyn SpreadsheetDecoder>,
        mock: Option<MockDecoder>,
    ) -> Self {
        let state = Arc::new(finplan_server::state::AppState::new(config, decoder));
        let router = finplan_server::api::create_router(state);
        Self {
            router,
            decoder: mock,
        }
    }

    /// The mock decoder. Panics if the fixture uses the real one.
    pub fn mock(&self) -> &MockDecoder {
        self.decoder
            .as_ref()
            .expect("fixture was built without a mock decoder")
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Upload a file as the `file` field of a multipart form.
    pub async fn upload(&self, file_name: &str, bytes: &[u8]) -> TestResponse {
        send_json(
            self.router.clone(),
            upload_request("file", file_name, bytes),
        )
        .await
    }

    /// Upload a file under an arbitrary multipart field name.
    pub async fn upload_field(&self, field: &str, file_name: &str, bytes: &[u8]) -> TestResponse {
        send_json(self.router.clone(), upload_request(field, file_name, bytes)).await
    }

    /// Send a GET request and keep the body as text.
    pub async fn get_text(&self, path: &str) -> TextResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        TextResponse {
            status,
            headers,
            text: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();
        send_json(self.router.clone(), request).await
    }
}

/// Encode a single-file multipart body.
pub fn multipart_body(field: &str, file_name: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", XLSX_CONTENT_TYPE).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Build a multipart upload request for `/api/v1/plan`.
pub fn upload_request(field: &str, file_name: &str, bytes: &[u8]) -> Request<Body> {
    let body = multipart_body(field, file_name, bytes);

    Request::builder()
        .method("POST")
        .uri("/api/v1/plan")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap()
}

/// Sender side of a streamed upload body.
pub type ChunkSender = mpsc::UnboundedSender<Result<Vec<u8>, std::io::Error>>;

/// Build an upload request whose body arrives chunk by chunk.
///
/// The body ends when the returned sender is dropped.
pub fn streaming_upload_request() -> (Request<Body>, ChunkSender) {
    let (tx, rx) = mpsc::unbounded();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/plan")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from_stream(rx))
        .unwrap();
    (request, tx)
}

/// Send a request through a router and parse the JSON response.
pub async fn send_json(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.expect("Failed to send request");

    let status = response.status();
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect body")
        .to_bytes();

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    TestResponse { status, body }
}

/// Write order rows into a real xlsx workbook in the default export layout.
///
/// Minutes that parse as numbers are written as numeric cells; everything
/// else is written as text. Empty values leave the cell blank.
pub fn xlsx_from_rows(rows: Vec<OrderRow>) -> Vec<u8> {
    let columns = ColumnMapping::default();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (name, col) in columns.positions() {
        sheet.write_string(0, col as u16, name).unwrap();
    }

    for (i, row) in rows.into_iter().enumerate() {
        let r = (i + 1) as u32;
        let text_cells = [
            (columns.id, row.id),
            (columns.client, row.client),
            (columns.article, row.article),
            (columns.color, row.color),
            (columns.finishing, row.finishing),
        ];
        for (col, value) in text_cells {
            if !value.is_empty() {
                sheet.write_string(r, col as u16, value.as_str()).unwrap();
            }
        }
        match row.minutes.parse::<f64>() {
            Ok(n) => {
                sheet.write_number(r, columns.minutes as u16, n).unwrap();
            }
            Err(_) if !row.minutes.is_empty() => {
                sheet
                    .write_string(r, columns.minutes as u16, row.minutes.as_str())
                    .unwrap();
            }
            Err(_) => {}
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Assert that a response has the expected status code.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
