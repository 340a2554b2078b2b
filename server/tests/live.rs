//! CRUD round-trip against a real listener.
//!
//! # Design
//! Starts the server on a random port in a background thread, then drives it
//! over real HTTP with ureq. Checks that status codes and JSON bodies survive
//! the full hyper stack, not just the in-process router.

use serde_json::{json, Value};
use todo_server::AppState;

struct Reply {
    status: u16,
    body: Value,
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, AppState::default()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Disables ureq's status-as-error behavior so 4xx responses come back as
/// data.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn call(method: &str, url: &str, body: Option<Value>) -> Reply {
    let agent = agent();
    let mut response = match (method, body) {
        ("GET", _) => agent.get(url).call(),
        ("DELETE", _) => agent.delete(url).call(),
        ("POST", Some(body)) => agent
            .post(url)
            .content_type("application/json")
            .send(body.to_string().as_bytes()),
        ("PUT", Some(body)) => agent
            .put(url)
            .content_type("application/json")
            .send(body.to_string().as_bytes()),
        (other, _) => panic!("unsupported call: {other}"),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let text = response.body_mut().read_to_string().unwrap_or_default();
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);
    Reply { status, body }
}

#[test]
fn crud_lifecycle() {
    let base = start_server();

    // Step 1: status probe.
    let reply = call("GET", &format!("{base}/status"), None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["message"], "OK");

    // Step 2: list holds the seed.
    let reply = call("GET", &format!("{base}/todos"), None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["todos"].as_array().unwrap().len(), 2);

    // Step 3: create.
    let reply = call("POST", &format!("{base}/todo"), Some(json!({ "title": "New Task" })));
    assert_eq!(reply.status, 201);
    assert_eq!(reply.body["todo"]["id"], 3);

    // Step 4: create with an id is refused.
    let reply = call("POST", &format!("{base}/todo"), Some(json!({ "id": 1, "title": "dup" })));
    assert_eq!(reply.status, 400);
    assert_eq!(reply.body["detail"], "ID must be 0 or None");

    // Step 5: update.
    let reply = call(
        "PUT",
        &format!("{base}/todo/3"),
        Some(json!({ "id": 3, "title": "X", "is_done": true })),
    );
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["message"], "OK, updated Todo 3");
    assert_eq!(reply.body["todo"]["is_done"], true);

    // Step 6: get with a bad id.
    let reply = call("GET", &format!("{base}/todo/abc"), None);
    assert_eq!(reply.status, 422);

    // Step 7: delete, then it is gone.
    let reply = call("DELETE", &format!("{base}/todo/3"), None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["message"], "Removed Todo 3");

    let reply = call("GET", &format!("{base}/todo/3"), None);
    assert_eq!(reply.status, 404);
    assert_eq!(reply.body["detail"], "Todo 3 not found");
}
