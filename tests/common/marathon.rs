//! In-process Marathon stub.
//!
//! Serves `GET` and `PUT` on `/v2/apps/{id}` over plain HTTP/1.1, one
//! request per connection. PUT bodies are stored and echoed back by later
//! GETs under `{"app": ...}`, the way Marathon reports deployed apps.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// A request the stub received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string
    pub target: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

#[derive(Default)]
struct State {
    apps: HashMap<String, serde_json::Value>,
    requests: Vec<RecordedRequest>,
}

pub struct StubMarathon {
    port: u16,
    state: Arc<Mutex<State>>,
}

impl StubMarathon {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub");
        let port = listener.local_addr().unwrap().port();
        let state = Arc::new(Mutex::new(State::default()));

        let shared = state.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handle(stream, &shared);
            }
        });

        Self { port, state }
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// URL with credentials in the authority
    pub fn url_with_credentials(&self, user: &str, password: &str) -> String {
        format!("http://{}:{}@127.0.0.1:{}", user, password, self.port)
    }

    /// Pretend an app is already deployed
    pub fn deploy(&self, id: &str, app: serde_json::Value) {
        let key = app_key(&format!("/v2/apps/{}", id.trim_matches('/')));
        self.state.lock().unwrap().apps.insert(key, app);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn puts(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "PUT")
            .collect()
    }
}

fn app_key(target: &str) -> String {
    target.split('?').next().unwrap_or(target).to_string()
}

fn handle(stream: TcpStream, state: &Arc<Mutex<State>>) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(s) => s,
        Err(_) => return,
    });

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).is_err() {
            return;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    let length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    if reader.read_exact(&mut body).is_err() {
        return;
    }
    let body = String::from_utf8_lossy(&body).to_string();

    let key = app_key(&target);
    let (status, response) = {
        let mut state = state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method: method.clone(),
            target: target.clone(),
            headers,
            body: body.clone(),
        });

        match method.as_str() {
            "GET" => match state.apps.get(&key) {
                Some(app) => ("200 OK", serde_json::json!({ "app": app }).to_string()),
                None => (
                    "404 Not Found",
                    serde_json::json!({ "message": format!("App '{key}' does not exist") })
                        .to_string(),
                ),
            },
            "PUT" => match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(app) => {
                    state.apps.insert(key, app);
                    (
                        "200 OK",
                        r#"{"version":"2024-01-01T00:00:00.000Z","deploymentId":"stub"}"#
                            .to_string(),
                    )
                }
                Err(_) => ("400 Bad Request", r#"{"message":"bad json"}"#.to_string()),
            },
            _ => ("405 Method Not Allowed", "{}".to_string()),
        }
    };

    let mut stream = stream;
    let _ = write!(
        stream,
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response}",
        response.len()
    );
    let _ = stream.flush();
}
