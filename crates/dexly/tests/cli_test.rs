//! Integration tests for the `dexly` CLI binary.
//!
//! Argument parsing, help output and completions run offline; the data
//! commands run against a wiremock upstream.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `dexly` binary with env isolation.
///
/// Clears all `DEXLY_*` overrides and points the config file at
/// `config` so tests never touch the user's real configuration.
fn dexly_cmd(config: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dexly");
    cmd.env("DEXLY_CONFIG", config)
        .env("NO_COLOR", "1")
        .env_remove("DEXLY_UPSTREAM_URL")
        .env_remove("DEXLY_OUTPUT_FORMAT")
        .env_remove("DEXLY_TIMEOUT_SECS")
        .env_remove("DEXLY_BIND")
        .env_remove("RUST_LOG");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn record(dex: u32, name: &str, evolutions: &Value) -> Value {
    json!({
        "id": dex,
        "pokedexId": dex,
        "name": name,
        "image": format!("https://img/{dex}.png"),
        "sprite": format!("https://img/{dex}s.png"),
        "stats": { "HP": 35, "attack": 55, "defense": 40,
                   "special_attack": 50, "special_defense": 50, "speed": 90 },
        "apiTypes": [],
        "types": [{ "id": 13, "name": "Électrik", "image": "" }],
        "apiGeneration": 1,
        "apiPreEvolution": "none",
        "apiEvolutions": evolutions,
        "apiResistances": [
            { "name": "Vol", "damage_multiplier": 0.5, "damage_relation": "resistant" }
        ]
    })
}

async fn mock_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = dexly_cmd(&dir.path().join("config.toml")).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Pokédex")
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("serve")),
        );
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dexly"));
}

#[test]
fn test_completions_bash() {
    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .arg("catch")
        .assert()
        .code(2);
}

#[test]
fn test_unsupported_upstream_scheme_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", "ftp://dex.example", "types"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("upstream.base_url"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honors_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nested").join("config.toml");
    dexly_cmd(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nested"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    dexly_cmd(&config)
        .args(["config", "init", "--upstream", "http://localhost:9000"])
        .assert()
        .success();
    let written = std::fs::read_to_string(&config).unwrap();
    assert!(written.contains("http://localhost:9000"), "{written}");

    dexly_cmd(&config)
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    dexly_cmd(&config)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[defaults]\npage_limit = 12\n").unwrap();

    let output = dexly_cmd(&config)
        .args(["config", "show", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let shown: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["defaults"]["page_limit"], 12);
}

// ── Data commands ───────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_show_resolves_chain_from_record_pointers() {
    let server = MockServer::start().await;
    mock_json(
        &server,
        "/pokemons/25",
        record(25, "Pikachu", &json!([{ "name": "Raichu", "pokedexId": 26 }])),
    )
    .await;
    mock_json(&server, "/pokemons/26", record(26, "Raichu", &json!([]))).await;

    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "show", "#025"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("#025 Pikachu")
                .and(predicate::str::contains("[Pikachu (#025)] → Raichu (#026)"))
                .and(predicate::str::contains("resistant")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_json_carries_chain() {
    let server = MockServer::start().await;
    mock_json(&server, "/pokemons/128", record(128, "Tauros", &json!([]))).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "-o", "json", "show", "128"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let chain: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chain["current"]["name"], "Tauros");
    assert_eq!(chain["current"]["stats"]["special_attack"], 50);
    assert_eq!(chain["evolutions"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_missing_record_exits_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons/9999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "show", "9999"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_filters_loaded_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons"))
        .and(query_param("limit", "50"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            record(1, "Bulbizarre", &json!([])),
            record(25, "Pikachu", &json!([])),
            record(26, "Raichu", &json!([])),
        ])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "-o", "plain", "list", "--name", "CHU"])
        .assert()
        .success()
        .stdout("25\n26\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_full_pages_suggest_more() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([record(1, "Bulbizarre", &json!([]))])),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "list", "--limit", "1", "--pages", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bulbizarre"))
        .stderr(predicate::str::contains("more available with --pages 4"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_short_page_reports_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([record(1, "Bulbizarre", &json!([]))])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "list", "--limit", "2", "--pages", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No more Pokémon to load"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_types_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/types"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "types"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load Pokemon types"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_types_missing_route_is_general_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/types"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>no route</html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "types"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Failed to load Pokemon types")
                .and(predicate::str::contains("not found").not()),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_types_plain_lists_ids() {
    let server = MockServer::start().await;
    mock_json(
        &server,
        "/types",
        json!([
            { "id": 1, "name": "Normal", "image": "" },
            { "id": 13, "name": "Électrik", "image": "" }
        ]),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    dexly_cmd(&dir.path().join("config.toml"))
        .args(["--upstream", &server.uri(), "-o", "plain", "types"])
        .assert()
        .success()
        .stdout("1\n13\n");
}
