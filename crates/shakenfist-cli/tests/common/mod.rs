use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_NAMESPACE: &str = "testspace";
pub const TEST_KEY: &str = "testkey";

/// Build an `sf` invocation pointed at `api_url`.
pub fn sf_command(api_url: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sf"));
    cmd.args(args);
    cmd.env("SHAKENFIST_API_URL", api_url);
    cmd.env("SHAKENFIST_NAMESPACE", TEST_NAMESPACE);
    cmd.env("SHAKENFIST_KEY", TEST_KEY);
    cmd.env_remove("SHAKENFIST_TIMEOUT");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run the CLI off the async runtime so the mock server keeps serving.
pub async fn run_cli(api_url: &str, args: &[&str]) -> Output {
    let mut cmd = sf_command(api_url, args);
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .expect("CLI task panicked")
}

/// Run the CLI and expect success.
pub async fn run_cli_success(api_url: &str, args: &[&str]) -> String {
    let output = run_cli(api_url, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(api_url: &str, args: &[&str]) -> String {
    let output = run_cli(api_url, args).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Accept the test credentials and hand out a fixed token.
pub async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "ABC123"})))
        .mount(server)
        .await;
}
