//! End-to-end tests: run the binary against a local one-shot HTTP stub.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

struct Stub {
    url: String,
    requests: Receiver<String>,
}

/// Serve a single HTTP response, reporting the request head back to the test.
fn serve_once(status: &'static str, body: &'static str) -> Stub {
    serve_with_delay(status, body, Duration::ZERO)
}

fn serve_with_delay(status: &'static str, body: &'static str, delay: Duration) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => head.extend_from_slice(&buf[..n]),
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

        thread::sleep(delay);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
    });

    Stub {
        url: format!("http://{addr}/api/v3/simple/price"),
        requests: rx,
    }
}

fn plugin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_check_bitcoin_price"));
    cmd.env_remove("CHECK_BITCOIN_PRICE_API_URL")
        .env_remove("CHECK_BITCOIN_PRICE_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn ok_without_thresholds() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":43521.50}}"#);
    plugin()
        .args(["--api-url", &stub.url])
        .assert()
        .code(0)
        .stdout("OK - Bitcoin price is 43521.50 USD | bitcoin_price=43521.50\n");

    let request = stub.requests.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(request.starts_with("GET /api/v3/simple/price?"));
    assert!(request.contains("ids=bitcoin"));
    assert!(request.contains("vs_currencies=usd"));
    assert!(request.to_lowercase().contains("accept: application/json"));
}

#[test]
fn currency_flag_selects_response_key() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"eur":40000.00}}"#);
    plugin()
        .args(["--api-url", &stub.url, "--currency", "EUR"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("OK - Bitcoin price is 40000.00 EUR"));

    let request = stub.requests.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(request.contains("vs_currencies=eur"));
}

#[test]
fn warning_from_individual_flag() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":28000}}"#);
    plugin()
        .args(["--api-url", &stub.url, "--warning-low", "30000"])
        .assert()
        .code(1)
        .stdout("WARNING - Bitcoin price is 28000.00 USD | bitcoin_price=28000.00\n");
}

#[test]
fn critical_from_individual_flag() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":20000}}"#);
    plugin()
        .args(["--api-url", &stub.url, "--critical-low", "25000"])
        .assert()
        .code(2)
        .stdout("CRITICAL - Bitcoin price is 20000.00 USD | bitcoin_price=20000.00\n");
}

#[test]
fn range_thresholds_warning_above() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":55000}}"#);
    plugin()
        .args(["--api-url", &stub.url, "-w", "30000:50000", "-c", "25000:60000"])
        .assert()
        .code(1)
        .stdout("WARNING - Bitcoin price is 55000.00 USD | bitcoin_price=55000.00\n");
}

#[test]
fn range_thresholds_critical_below_both() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":20000}}"#);
    plugin()
        .args(["--api-url", &stub.url, "-w", "30000:50000", "-c", "25000:60000"])
        .assert()
        .code(2)
        .stdout("CRITICAL - Bitcoin price is 20000.00 USD | bitcoin_price=20000.00\n");
}

#[test]
fn individual_flag_overrides_range_side() {
    // 33000 is inside -w 30000:50000 but below the overriding --warning-low.
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":33000}}"#);
    plugin()
        .args(["--api-url", &stub.url, "-w", "30000:50000", "--warning-low", "35000"])
        .assert()
        .code(1)
        .stdout("WARNING - Bitcoin price is 33000.00 USD | bitcoin_price=33000.00\n");
}

#[test]
fn breach_detail_goes_to_stderr() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":28000}}"#);
    plugin()
        .args(["--api-url", &stub.url, "--warning-low", "30000", "-v"])
        .assert()
        .code(1)
        .stdout("WARNING - Bitcoin price is 28000.00 USD | bitcoin_price=28000.00\n")
        .stderr(predicate::str::contains("below warning threshold 30000.00"));
}

#[test]
fn server_error_is_unknown() {
    let stub = serve_once("500 Internal Server Error", r#"{"error":"server error"}"#);
    plugin()
        .args(["--api-url", &stub.url])
        .assert()
        .code(3)
        .stdout("UNKNOWN - API request failed with status 500\n");
}

#[test]
fn rate_limit_is_unknown() {
    let stub = serve_once("429 Too Many Requests", r#"{"error":"rate limit exceeded"}"#);
    plugin()
        .args(["--api-url", &stub.url])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN - "));
}

#[test]
fn unexpected_body_is_unknown() {
    let stub = serve_once("200 OK", r#"{"ethereum":{"usd":3000}}"#);
    plugin()
        .args(["--api-url", &stub.url])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN - Failed to parse API response"));
}

#[test]
fn out_of_range_price_is_unknown() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":1e400}}"#);
    plugin()
        .args(["--api-url", &stub.url])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN - Failed to parse API response"));
}

#[test]
fn connection_refused_is_unknown() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    plugin()
        .args(["--api-url", &format!("http://{addr}/simple/price")])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN - API request failed"));
}

#[test]
fn slow_api_times_out() {
    let stub = serve_with_delay("200 OK", r#"{"bitcoin":{"usd":1}}"#, Duration::from_secs(4));
    plugin()
        .args(["--api-url", &stub.url, "--timeout", "1"])
        .assert()
        .code(3)
        .stdout("UNKNOWN - API request timed out\n");
}

#[test]
fn malformed_range_is_unknown_without_fetching() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":40000}}"#);
    plugin()
        .args(["--api-url", &stub.url, "-w", "abc:50000"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN - Invalid range format: 'abc:50000'"));

    assert!(stub.requests.recv_timeout(Duration::from_millis(300)).is_err());
}

#[test]
fn api_url_from_environment() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":100}}"#);
    plugin()
        .env("CHECK_BITCOIN_PRICE_API_URL", &stub.url)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("OK - Bitcoin price is 100.00 USD"));
}

#[test]
fn bad_arguments_are_unknown_not_critical() {
    plugin()
        .arg("--no-such-flag")
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN - Invalid arguments:"));

    plugin()
        .args(["--timeout", "0"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN - Invalid arguments:"));
}

#[test]
fn shows_help() {
    plugin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--warning-low"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn shows_version() {
    plugin()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let stub = serve_once("200 OK", r#"{"bitcoin":{"usd":43521}}"#);
    plugin()
        .args(["--api-url", &stub.url, "-v"])
        .assert()
        .code(0)
        .stdout("OK - Bitcoin price is 43521.00 USD | bitcoin_price=43521.00\n")
        .stderr(predicate::str::contains("fetching bitcoin price"));
}
