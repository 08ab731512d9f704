// Pokédex API HTTP client
//
// Wraps `reqwest::Client` with upstream URL construction and response
// decoding. Endpoint methods live in `pokemon.rs` as inherent methods so
// this module stays focused on transport mechanics.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the remote Pokédex API.
///
/// Every request goes out with `Cache-Control: no-store` (installed by
/// [`TransportConfig`]); there is no response caching on this side either.
#[derive(Clone)]
pub struct DexClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl DexClient {
    /// Create a client from a base URL (e.g. `https://nestjs-pokedex-api.vercel.app`).
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            timeout_secs: transport.timeout.as_secs(),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// The caller is responsible for any default headers.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            timeout_secs: 0,
        })
    }

    /// The upstream base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request with query parameters and decode the JSON body.
    ///
    /// Parameters are appended in the given order; repeated keys stay
    /// repeated.
    pub(crate) async fn get<T, K>(&self, url: Url, params: &[(K, String)]) -> Result<T, Error>
    where
        T: DeserializeOwned,
        K: AsRef<str> + serde::Serialize,
    {
        debug!("GET {url} params={:?}", ParamsDebug(params));

        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        debug!(status = status.as_u16(), "upstream response");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let body = resp.text().await.map_err(|e| self.map_transport(e))?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    fn map_transport(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() && self.timeout_secs > 0 {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(err)
        }
    }
}

/// Renders `[(k, v)]` as `k=v&k=v` for log lines.
struct ParamsDebug<'a, K>(&'a [(K, String)]);

impl<K: AsRef<str>> std::fmt::Debug for ParamsDebug<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={v}", k.as_ref())?;
        }
        Ok(())
    }
}
