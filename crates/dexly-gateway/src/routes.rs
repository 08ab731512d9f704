// ── Pass-through handlers ──
//
// One outbound request per inbound request. Bodies are relayed as-is;
// only the list query is rebuilt, from an allow-list of parameters.

use axum::Json;
use axum::extract::{Path, RawQuery, State};
use serde_json::{Value, json};
use tracing::debug;

use dexly_api::DEFAULT_PAGE_LIMIT;

use crate::AppState;
use crate::error::{Endpoint, GatewayError};

/// Parameters forwarded to `GET /pokemons`, in outbound order.
///
/// `limit` and `page` fall back to `50` and `0` when absent or empty;
/// `name` and `typeId` are forwarded only when non-empty; every `types`
/// value is forwarded, repeated. Anything else is dropped.
pub fn forward_params(raw_query: Option<&str>) -> Vec<(String, String)> {
    let pairs: Vec<(String, String)> = raw_query
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default();

    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    };

    let default_limit = DEFAULT_PAGE_LIMIT.to_string();
    let mut params = vec![
        ("limit".to_owned(), first("limit").unwrap_or(default_limit.as_str()).to_owned()),
        ("page".to_owned(), first("page").unwrap_or("0").to_owned()),
    ];
    if let Some(name) = first("name") {
        params.push(("name".to_owned(), name.to_owned()));
    }
    if let Some(type_id) = first("typeId") {
        params.push(("typeId".to_owned(), type_id.to_owned()));
    }
    params.extend(
        pairs
            .iter()
            .filter(|(k, _)| k == "types")
            .map(|(_, v)| ("types".to_owned(), v.clone())),
    );
    params
}

pub(crate) async fn list_pokemon(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, GatewayError> {
    let params = forward_params(query.as_deref());
    debug!(?params, "forwarding list request");
    state
        .client
        .list_pokemon_json(&params)
        .await
        .map(Json)
        .map_err(|e| GatewayError::new(Endpoint::List, e))
}

pub(crate) async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, GatewayError> {
    state
        .client
        .get_pokemon_json(&id)
        .await
        .map(Json)
        .map_err(|e| GatewayError::new(Endpoint::Detail, e))
}

pub(crate) async fn list_types(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
    state
        .client
        .list_types_json()
        .await
        .map(Json)
        .map_err(|e| GatewayError::new(Endpoint::Types, e))
}

pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pairs(params: &[(String, String)]) -> Vec<(&str, &str)> {
        params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn empty_query_gets_defaults() {
        assert_eq!(
            pairs(&forward_params(None)),
            vec![("limit", "50"), ("page", "0")]
        );
    }

    #[test]
    fn full_query_keeps_order_and_repeats() {
        let params = forward_params(Some("types=4&name=sala&page=2&limit=20&typeId=10&types=7"));
        assert_eq!(
            pairs(&params),
            vec![
                ("limit", "20"),
                ("page", "2"),
                ("name", "sala"),
                ("typeId", "10"),
                ("types", "4"),
                ("types", "7"),
            ]
        );
    }

    #[test]
    fn unknown_and_empty_params_are_dropped() {
        let params = forward_params(Some("limit=&name=&debug=1&typeId="));
        assert_eq!(pairs(&params), vec![("limit", "50"), ("page", "0")]);
    }

    #[test]
    fn values_are_decoded_once() {
        let params = forward_params(Some("name=Salam%C3%A8che"));
        assert_eq!(params[2], ("name".into(), "Salamèche".into()));
    }
}
