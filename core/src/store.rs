//! In-memory record cache in front of the users API.
//!
//! # Design
//! The cache is a `RefCell<Vec<UserRecord>>` and every method takes `&self`,
//! so two operations started from the same event loop can be in flight at
//! once. A borrow is never held across an await; whichever operation
//! finishes last decides what the cache holds.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use crate::config::Endpoints;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::service::HttpService;
use crate::transport::Transport;
use crate::types::{params_of, Params, UserRecord};

/// Upper bound (exclusive) for fabricated ids.
pub const FABRICATED_ID_LIMIT: u64 = 10_000;

/// Session cache of user records backed by the users API.
pub struct RecordStore<T> {
    http: HttpService<T>,
    endpoints: Endpoints,
    cache: RefCell<Vec<UserRecord>>,
    rng: RefCell<StdRng>,
}

impl<T: Transport> RecordStore<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self::with_rng(transport, endpoints, StdRng::from_entropy())
    }

    /// Same as `new` but with a caller-chosen random source.
    pub fn with_rng(transport: T, endpoints: Endpoints, rng: StdRng) -> Self {
        Self {
            http: HttpService::new(transport),
            endpoints,
            cache: RefCell::new(Vec::new()),
            rng: RefCell::new(rng),
        }
    }

    pub fn transport(&self) -> &T {
        self.http.transport()
    }

    /// Snapshot of the cache.
    pub fn cached(&self) -> Vec<UserRecord> {
        self.cache.borrow().clone()
    }

    /// Cached record for `id`, or one GET to the per-id endpoint.
    ///
    /// A fetched record is not added to the cache.
    pub async fn get_one(&self, id: u64) -> Result<UserRecord, ApiError> {
        let hit = self.cache.borrow().iter().find(|record| record.id == id).cloned();
        if let Some(record) = hit {
            tracing::debug!(id, "cache hit");
            return Ok(record);
        }

        tracing::debug!(id, "cache miss");
        let mut params = Params::new();
        params.insert("id".to_string(), json!(id));
        let value = self.http.get(&self.endpoints.user(id), &params).await?;
        decode(value)
    }

    /// The cache, filled by one GET to the collection endpoint while empty.
    pub async fn get_all(&self) -> Result<Vec<UserRecord>, ApiError> {
        if !self.cache.borrow().is_empty() {
            return Ok(self.cached());
        }

        let value = self.http.get(&self.endpoints.list_users(), &Params::new()).await?;
        let records: Vec<UserRecord> = decode(value)?;
        tracing::debug!(count = records.len(), "cache populated");
        *self.cache.borrow_mut() = records.clone();
        Ok(records)
    }

    /// Fabricate a record, cache it, then POST it.
    ///
    /// The record is in the cache before the request is sent and stays there
    /// whatever the server answers. The raw response is returned.
    pub async fn create_one(&self) -> Result<Value, ApiError> {
        let id = self.rng.borrow_mut().gen_range(0..FABRICATED_ID_LIMIT);
        let record = UserRecord::dummy(id);
        self.cache.borrow_mut().push(record.clone());
        tracing::debug!(id, "fabricated record cached");

        let params = params_of(&record)?;
        self.http
            .request(&self.endpoints.create_user(), &params, HttpMethod::Post)
            .await
    }
}

fn decode<R: serde::de::DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
}
