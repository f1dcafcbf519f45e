use crate::{ProfileRow, ProfileStore, StoreError, StoreResult};

use rp_core::{DeviceProfile, ErrorLocation};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

/// Table holding device profiles
pub const DEFAULT_PROFILE_TABLE: &str = "child_profiles";

/// Profile store backed by a Supabase (PostgREST) table
pub struct SupabaseProfileStore {
    table_url: Url,
    api_key: String,
    client: ReqwestClient,
}

impl SupabaseProfileStore {
    /// Create a new store client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://xyz.supabase.co")
    /// * `api_key` - Service key, sent as both `apikey` and bearer token
    /// * `table` - Profile table name
    /// * `timeout` - Per-request timeout
    #[track_caller]
    pub fn new(base_url: &str, api_key: &str, table: &str, timeout: Duration) -> StoreResult<Self> {
        let table_url = format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table);
        let table_url = Url::parse(&table_url)
            .map_err(|e| StoreError::config(format!("invalid store url '{}': {}", table_url, e)))?;

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            table_url,
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Build a request carrying the auth headers
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Execute request and parse the returned rows
    async fn execute(&self, req: reqwest::RequestBuilder) -> StoreResult<Vec<ProfileRow>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or(body);
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProfileStore for SupabaseProfileStore {
    async fn find_by_device_id(&self, device_id: &str) -> StoreResult<Option<DeviceProfile>> {
        let mut url = self.table_url.clone();
        url.query_pairs_mut()
            .append_pair("device_id", &format!("eq.{}", device_id))
            .append_pair("select", "*");

        debug!("Looking up profile for device {}", device_id);
        let mut rows = self.execute(self.request(Method::GET, url)).await?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop().map(DeviceProfile::from)),
            n => Err(StoreError::unexpected(format!(
                "{} profiles share device id {}",
                n, device_id
            ))),
        }
    }

    async fn upsert(&self, profile: &DeviceProfile) -> StoreResult<DeviceProfile> {
        let mut url = self.table_url.clone();
        url.query_pairs_mut().append_pair("on_conflict", "device_id");

        let req = self
            .request(Method::POST, url)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&ProfileRow::from(profile));

        debug!("Upserting profile for device {}", profile.device_id);
        let rows = self.execute(req).await?;

        rows.into_iter()
            .next()
            .map(DeviceProfile::from)
            .ok_or_else(|| StoreError::unexpected("upsert returned no rows"))
    }
}
