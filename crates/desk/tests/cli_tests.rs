use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use std::sync::atomic::{AtomicU16, Ordering};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Atomic counter avoids port collisions between parallel test threads
static PORT_COUNTER: AtomicU16 = AtomicU16::new(52000);

fn get_available_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

// Minimal mock server: answers every request with the same JSON body
fn start_mock_server(port: u16, response_body: String) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let bind_addr = format!("127.0.0.1:{}", port);
        let listener = match TcpListener::bind(&bind_addr) {
            Ok(l) => l,
            Err(_) => return, // Port already in use, exit gracefully
        };

        for stream in listener.incoming() {
            if let Ok(mut stream) = stream {
                let mut buffer = [0; 4096];
                if stream.read(&mut buffer).is_ok() {
                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
                        response_body.len(),
                        response_body
                    );
                    let _ = stream.write_all(response.as_bytes());
                    break;
                }
            }
        }
    })
}

fn create_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    dir.push(format!("desk-test-{}-{}", std::process::id(), nanos));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Build a desk command with config and session state isolated to a temp dir
fn desk_isolated(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("desk");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("DESK_URL")
        .env_remove("DESK_TOKEN")
        .env_remove("DESK_CONFIG");
    cmd
}

#[test]
fn test_missing_config() {
    let temp_dir = create_temp_dir();
    desk_isolated(&temp_dir)
        .args(["ticket", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL not configured"));
    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_help_command() {
    cargo_bin_cmd!("desk")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CLI for the helpdesk portal"));
}

#[test]
fn test_ticket_subcommand_help() {
    cargo_bin_cmd!("desk")
        .args(["ticket", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket operations"));
}

#[test]
fn test_admin_subcommand_help() {
    cargo_bin_cmd!("desk")
        .args(["admin", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Administrator operations"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("desk")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_ticket_status_is_rejected_locally() {
    let temp_dir = create_temp_dir();
    desk_isolated(&temp_dir)
        .args(["--url", "http://127.0.0.1:1", "ticket", "status", "T-1", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));
    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_suggest_pick_completes_the_mention() {
    let temp_dir = create_temp_dir();
    desk_isolated(&temp_dir)
        .args([
            "--url",
            "http://127.0.0.1:1",
            "ticket",
            "suggest",
            "hello @bo",
            "--pick",
            "Bob Smith",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello @Bob Smith "));
    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_comment_requires_a_session() {
    let temp_dir = create_temp_dir();
    desk_isolated(&temp_dir)
        .args([
            "--url",
            "http://127.0.0.1:1",
            "ticket",
            "comment",
            "T-1",
            "hello @bob",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_expired_session_is_rejected_and_cleared() {
    let temp_dir = create_temp_dir();
    let session_dir = temp_dir.join("config").join("desk");
    std::fs::create_dir_all(&session_dir).unwrap();
    let session_file = session_dir.join("session.json");
    std::fs::write(
        &session_file,
        r#"{
            "token": "stale-token",
            "user": {"user_id": "u-1", "name": "Ann", "email": "ann@example.com", "role_id": 2},
            "expires_at": "2020-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    desk_isolated(&temp_dir)
        .args(["--url", "http://127.0.0.1:1", "ticket", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session expired"));

    // The stale session file is discarded on the way out
    assert!(!session_file.exists());
    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_color_flag_controls_ansi_output() {
    let temp_dir = create_temp_dir();

    desk_isolated(&temp_dir)
        .args(["--color", "always", "ticket", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\u{1b}["));

    desk_isolated(&temp_dir)
        .args(["--color", "never", "ticket", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\u{1b}[").not());

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_session_show_without_login() {
    let temp_dir = create_temp_dir();
    desk_isolated(&temp_dir)
        .args(["session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_logout_without_session_succeeds() {
    let temp_dir = create_temp_dir();
    desk_isolated(&temp_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_login_stores_a_session() {
    let temp_dir = create_temp_dir();

    let port = get_available_port();
    let url = format!("http://127.0.0.1:{}", port);

    let mock_response = json!({
        "token": "session-token",
        "user": {
            "user_id": "u-1",
            "name": "Ann",
            "email": "ann@example.com",
            "role_id": 2
        }
    });
    let _server = start_mock_server(port, mock_response.to_string());
    thread::sleep(Duration::from_millis(200));

    desk_isolated(&temp_dir)
        .args(["--url", &url, "login", "ann@example.com", "--password", "pw"])
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as"));

    let session_file = temp_dir
        .join("config")
        .join("desk")
        .join("session.json");
    assert!(session_file.exists());

    desk_isolated(&temp_dir)
        .args(["session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ann@example.com"));

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_config_file_is_used_for_defaults() {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.join("config.toml");

    let port = get_available_port();
    let url = format!("http://127.0.0.1:{}", port);

    let config_contents = format!("url = \"{}\"\n", url);
    std::fs::write(&config_path, config_contents).unwrap();

    let mock_response = json!([
        { "role_id": 1, "role_name": "Admin" },
        { "role_id": 2, "role_name": "Developer" }
    ]);
    let _server = start_mock_server(port, mock_response.to_string());
    thread::sleep(Duration::from_millis(200));

    let output = desk_isolated(&temp_dir)
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "-o",
            "json",
            "roles",
        ])
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["role_name"], "Admin");

    let _ = std::fs::remove_dir_all(&temp_dir);
}
