// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use std::io::{Read, Write};
use std::net::TcpListener;

/// Serve one HTTP request with a fixed status, returning the raw request text
fn serve_once(status: &'static str) -> (String, std::thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/hook", listener.local_addr().unwrap());

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        l.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
            if n == 0 {
                break;
            }
        }
        let response = format!("HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n", status);
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (url, handle)
}

#[tokio::test]
async fn posts_json_body() {
    let (url, server) = serve_once("200 OK");
    HttpWebhookAdapter::new()
        .post(&url, &json!({"hello": "world"}))
        .await
        .unwrap();

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /hook"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"hello":"world"}"#));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (url, server) = serve_once("500 Internal Server Error");
    let err = HttpWebhookAdapter::new()
        .post(&url, &json!({}))
        .await
        .unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, WebhookError::Status { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_host_is_an_error() {
    // Bind then drop so the port is very likely closed
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let url = format!("http://127.0.0.1:{}/hook", port);

    let result = HttpWebhookAdapter::with_timeout(Duration::from_secs(2))
        .post(&url, &json!({}))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn unanswered_request_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/hook", listener.local_addr().unwrap());
    let (done_tx, done_rx) = std::sync::mpsc::channel::<()>();
    let server = std::thread::spawn(move || {
        // Hold the connection open without replying
        let (_stream, _) = listener.accept().unwrap();
        let _ = done_rx.recv_timeout(Duration::from_secs(10));
    });

    let started = std::time::Instant::now();
    let err = HttpWebhookAdapter::with_timeout(Duration::from_millis(300))
        .post(&url, &json!({"hello": "world"}))
        .await
        .unwrap_err();
    let elapsed = started.elapsed();
    done_tx.send(()).unwrap();
    server.join().unwrap();

    assert!(matches!(err, WebhookError::Timeout { url: ref u } if u == &url), "got {err:?}");
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

#[test]
fn default_timeout_is_ten_seconds() {
    assert_eq!(HttpWebhookAdapter::default().timeout(), Duration::from_secs(10));
}
