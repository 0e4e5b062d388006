//! Verify the standard client against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector describes a cookie string or a simulated transport outcome and
//! the header or notification the client is expected to produce. The
//! transport is an in-memory stub, so these run without a network.

use std::sync::{Arc, Mutex};

use mediahub_client::{
    ClientConfig, CookieJar, HttpClient, HttpRequest, HttpResponse, Notification, Notifier,
    RequestError, Transport,
};

const BASE_URL: &str = "http://localhost:3000";

struct Canned {
    reply: Result<HttpResponse, RequestError>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Transport for Canned {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

#[derive(Default)]
struct Recorder(Mutex<Vec<Notification>>);

impl Notifier for Recorder {
    fn notify(&self, notification: &Notification) {
        self.0.lock().unwrap().push(notification.clone());
    }
}

fn client(reply: Result<HttpResponse, RequestError>, cookies: &str) -> (HttpClient, Arc<Canned>, Arc<Recorder>) {
    let transport = Arc::new(Canned {
        reply,
        seen: Mutex::new(Vec::new()),
    });
    let recorder = Arc::new(Recorder::default());
    let client = HttpClient::mediahub(
        ClientConfig::new(BASE_URL),
        transport.clone(),
        Arc::new(CookieJar::parse(cookies)),
        recorder.clone(),
    );
    (client, transport, recorder)
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn failure_test_vectors() {
    let raw = include_str!("../../test-vectors/failures.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let reply = match case["status"].as_u64() {
            Some(status) => Ok(HttpResponse {
                status: u16::try_from(status).unwrap(),
                headers: Vec::new(),
                body: Vec::new(),
            }),
            None => Err(RequestError::Transport {
                message: case["transport_error"].as_str().unwrap().to_string(),
            }),
        };
        let (c, transport, recorder) = client(reply.clone(), "");

        let err = c.get("/api/v1/home").unwrap_err();

        // The caller gets exactly the error the transport produced.
        match &reply {
            Ok(response) => assert_eq!(
                err,
                RequestError::Status {
                    response: response.clone()
                },
                "{name}: error"
            ),
            Err(original) => assert_eq!(&err, original, "{name}: error"),
        }
        assert_eq!(transport.seen.lock().unwrap().len(), 1, "{name}: dispatch count");

        let shown = recorder.0.lock().unwrap();
        match case["expected_notification"].as_str() {
            Some(text) => {
                assert_eq!(shown.len(), 1, "{name}: notification count");
                assert_eq!(shown[0], Notification::error(text), "{name}: notification");
            }
            None => assert!(shown.is_empty(), "{name}: expected no notification"),
        }
    }
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[test]
fn auth_test_vectors() {
    let raw = include_str!("../../test-vectors/auth.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let ok = Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: b"{}".to_vec(),
        });
        let (c, transport, recorder) = client(ok, case["cookies"].as_str().unwrap());
        let path = case["path"].as_str().unwrap();

        c.get(path).unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].url, format!("{BASE_URL}{path}"), "{name}: url");
        assert_eq!(
            seen[0].header("authorization"),
            case["expected_authorization"].as_str(),
            "{name}: authorization"
        );
        assert!(recorder.0.lock().unwrap().is_empty(), "{name}: no notification");
    }
}
