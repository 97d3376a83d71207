// client.rs
use crate::config::Config;
use crate::geocoder::{GeocodeError, GeocodeRequest, Location};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const BASE_URL: &str = "https://maps.googleapis.com/maps/";
const GEOCODE_ENDPOINT: &str = "api/geocode/json";
const USER_AGENT: &str = concat!("real_estate_manager/", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY: usize = 200;

static SHARED: OnceLock<GeocoderClient> = OnceLock::new();

/// Blocking client for the geocoding API. Holds no per-call state, so one
/// instance can serve every thread.
pub struct GeocoderClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl GeocoderClient {
    pub fn new(api_key: Option<String>) -> Result<Self, GeocodeError> {
        Self::with_base_url(BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Result<Self, GeocodeError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GeocodeError::Config(format!("invalid base url '{base_url}': {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Process-wide client against [`BASE_URL`], built on first use with the
    /// maps key from `config`. Later calls return that client whatever
    /// `config` they pass.
    pub fn shared(config: &Config) -> Result<&'static GeocoderClient, GeocodeError> {
        if let Some(client) = SHARED.get() {
            return Ok(client);
        }

        // Two threads may both build one here; the loser's copy is dropped.
        let _ = SHARED.set(GeocoderClient::new(config.google_maps_key.clone())?);
        SHARED
            .get()
            .ok_or_else(|| GeocodeError::Config("shared geocoder unavailable".into()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for `request`, key included.
    pub fn request_url(&self, request: &GeocodeRequest) -> Result<Url, GeocodeError> {
        let mut url = self
            .base_url
            .join(GEOCODE_ENDPOINT)
            .map_err(|e| GeocodeError::Config(e.to_string()))?;

        {
            let (name, value) = request.query_pair();
            let mut query = url.query_pairs_mut();
            query.append_pair(name, &value);
            if let Some(key) = &self.api_key {
                query.append_pair("key", key);
            }
        }

        Ok(url)
    }

    pub fn geocode(&self, request: &GeocodeRequest) -> Result<Location, GeocodeError> {
        let url = self.request_url(request)?;
        debug!(%request, "geocoding");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref())
            .send()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let location = decode_location(status, &text);
        match &location {
            Ok(loc) if !loc.is_resolved() => debug!(%request, "no location resolved"),
            Ok(_) => debug!(%request, "location resolved"),
            Err(e) => warn!(%request, "geocoding failed: {e}"),
        }
        location
    }
}

/// Turns an HTTP status and body into a [`Location`].
///
/// Any non-2xx status is an error whatever the body says. A 2xx body must be
/// a JSON object; missing `lat`/`lng` fields are allowed.
pub fn decode_location(status: u16, body: &str) -> Result<Location, GeocodeError> {
    if !(200..300).contains(&status) {
        return Err(GeocodeError::Status {
            status,
            body: body.chars().take(MAX_ERROR_BODY).collect(),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| GeocodeError::JsonParse(e.to_string()))?;
    if !value.is_object() {
        return Err(GeocodeError::JsonParse(format!(
            "expected a JSON object, got: {}",
            body.chars().take(MAX_ERROR_BODY).collect::<String>()
        )));
    }

    serde_json::from_value(value).map_err(|e| GeocodeError::JsonParse(e.to_string()))
}
