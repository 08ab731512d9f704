#![allow(clippy::unwrap_used)]
// Integration tests for `DexClient` using wiremock.

use std::time::Duration;

use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dexly_api::{DexClient, Error, ListQuery, RecordId, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DexClient) {
    let server = MockServer::start().await;
    let client = DexClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

fn pikachu() -> serde_json::Value {
    json!({
        "id": 25,
        "pokedexId": 25,
        "name": "Pikachu",
        "image": "https://img/25.png",
        "sprite": "https://img/25s.png",
        "stats": { "HP": 35, "attack": 55, "defense": 40,
                   "specialAttack": 50, "specialDefense": 50, "speed": 90 },
        "types": [{ "id": 13, "name": "Électrik", "image": "https://img/t13.png" }],
        "generation": 1,
        "resistances": [],
        "evolutions": [{ "name": "Raichu", "pokedexId": 26 }],
        "preEvolution": { "name": "Pichu", "pokedexId": 172 }
    })
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_pokemon_forwards_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemons"))
        .and(query_param("limit", "20"))
        .and(query_param("page", "1"))
        .and(query_param("name", "pika"))
        .and(query_param("types", "13"))
        .and(header("cache-control", "no-store"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([pikachu()])))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListQuery {
        limit: 20,
        page: Some(1),
        type_id: None,
        types: vec![13],
        name: Some("pika".into()),
    };
    let list = assert_ok!(client.list_pokemon(&query).await);

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, RecordId::Numeric(25));
    assert_eq!(list[0].stats.special_attack, Some(50));
    assert_eq!(list[0].types[0].name, "Électrik");
}

#[tokio::test]
async fn test_list_pokemon_json_keeps_repeated_types() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let params = vec![
        ("limit".to_string(), "50".to_string()),
        ("types".to_string(), "4".to_string()),
        ("types".to_string(), "7".to_string()),
    ];
    let body = assert_ok!(client.list_pokemon_json(&params).await);
    assert_eq!(body, json!([]));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("limit=50&types=4&types=7"));
}

// ── Detail ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_pokemon() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemons/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu()))
        .mount(&server)
        .await;

    let p = assert_ok!(client.get_pokemon(25).await);
    assert_eq!(p.name, "Pikachu");
    assert_eq!(p.pre_evolution.unwrap().pokedex_id, Some(172));
    assert_eq!(p.evolutions.unwrap()[0].pokedex_id, Some(26));
}

#[tokio::test]
async fn test_get_pokemon_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemons/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = assert_err!(client.get_pokemon(9999).await);
    assert!(err.is_not_found(), "expected 404, got: {err:?}");
    assert!(matches!(err, Error::Status { status: 404, ref body } if body == "Not Found"));
}

#[tokio::test]
async fn test_get_pokemon_json_relays_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemons/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "anything": [1, 2] })))
        .mount(&server)
        .await;

    let body = assert_ok!(client.get_pokemon_json("25").await);
    assert_eq!(body, json!({ "anything": [1, 2] }));
}

// ── Types ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_types() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Normal", "image": "https://img/t1.png" },
            { "id": 10, "name": "Feu", "image": "https://img/t10.png" }
        ])))
        .mount(&server)
        .await;

    let types = assert_ok!(client.list_types().await);
    assert_eq!(types.len(), 2);
    assert_eq!(types[1].id, 10);
}

// ── Failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_is_transient() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/types"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = assert_err!(client.list_types().await);
    assert_eq!(err.status(), Some(503));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemons"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = assert_err!(client.list_pokemon(&ListQuery::default()).await);
    assert!(
        matches!(err, Error::Deserialization { ref body, .. } if body.contains("oops")),
        "expected Deserialization, got: {err:?}"
    );
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    let transport = TransportConfig::default().with_timeout(Duration::from_secs(1));
    let client = DexClient::new(&server.uri(), &transport).unwrap();

    Mock::given(method("GET"))
        .and(path("/types"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = assert_err!(client.list_types().await);
    assert!(
        matches!(err, Error::Timeout { timeout_secs: 1 }),
        "expected Timeout, got: {err:?}"
    );
}
