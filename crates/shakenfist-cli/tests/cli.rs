//! CLI tests running the `sf` binary against a mock API server.

mod common;

use common::{mount_auth, run_cli_failure, run_cli_success, sf_command};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_instance_list_json() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/instances"))
        .and(header("authorization", "Bearer ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uuid": "123-456", "name": "test", "cpus": 1, "memory": 1024, "state": "created"}
        ])))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server.uri(), &["--json", "instance", "list"]).await;
    let instances: Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(instances[0]["uuid"], "123-456");
    assert_eq!(instances[0]["memory"], 1024);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_auth_uses_configured_namespace() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(body_json(json!({"namespace": "testspace", "key": "testkey"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "ABC123"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/namespaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["system", "testspace"])))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server.uri(), &["namespace", "list"]).await;
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["system", "testspace"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_instance_reboot() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("POST"))
        .and(path("/instances/123/reboot"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server.uri(), &["instance", "reboot", "123"]).await;
    assert!(stdout.contains("Rebooted instance 123"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_metadata_set_on_network() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("PUT"))
        .and(path("/networks/n1/metadata/owner"))
        .and(body_json(json!({"value": "bob"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    run_cli_success(
        &server.uri(),
        &["metadata", "--kind", "network", "set", "n1", "owner", "bob"],
    )
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_metadata_rejects_unknown_kind() {
    let server = MockServer::start().await;

    let stderr = run_cli_failure(
        &server.uri(),
        &["metadata", "--kind", "volume", "get", "v1"],
    )
    .await;
    assert!(stderr.contains("volume"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_instance_request() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("POST"))
        .and(path("/instances"))
        .and(body_json(json!({
            "name": "web",
            "cpus": 2,
            "memory": 2048,
            "network": [{"network_uuid": "n1", "address": "", "macaddress": "", "model": ""}],
            "disk": [{"base": "cirros", "size": 8, "bus": "", "type": "disk"}],
            "ssh_key": "",
            "user_data": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "i-1", "name": "web", "cpus": 2, "memory": 2048
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &server.uri(),
        &[
            "--json", "instance", "create", "web", "--cpus", "2", "--memory", "2048",
            "--network", "n1", "--disk", "8@cirros",
        ],
    )
    .await;
    let instance: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(instance["uuid"], "i-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_reported() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/instances/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let stderr = run_cli_failure(&server.uri(), &["instance", "show", "missing"]).await;
    assert!(stderr.contains("Failed to fetch instance"));
    assert!(stderr.contains("404"));
    assert!(stderr.contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_key() {
    let server = MockServer::start().await;

    let mut cmd = sf_command(&server.uri(), &["node", "list"]);
    cmd.env_remove("SHAKENFIST_KEY");
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SHAKENFIST_KEY"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lock_list() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/admin/locks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "/sflocks/sf/network/8a3b": {"node": "sf-1", "operation": null, "pid": 10083}
        })))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server.uri(), &["lock", "list"]).await;
    assert!(stdout.contains("/sflocks/sf/network/8a3b"));
    assert!(stdout.contains("pid 10083"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_network_update_dhcp() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("PUT"))
        .and(path("/update_dhcp"))
        .and(body_json(json!({"uuid": "n1"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server.uri(), &["network", "update-dhcp", "n1"]).await;
    assert!(stdout.contains("Updated DHCP for network n1"));
}
