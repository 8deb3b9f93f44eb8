//! Front-end core for the users API.
//!
//! # Overview
//! Fetches and shows user records from a REST API and simulates creating
//! new ones. A `Surface` stands in for the page: three triggers, one id
//! input, four display regions.
//!
//! # Design
//! - `client` builds `HttpRequest` values and parses `HttpResponse` values
//!   without I/O; a `Transport` performs the round-trip (host-does-IO).
//! - `RecordStore` caches the collection after the first fetch and serves
//!   single lookups from it when it can.
//! - `InteractionController` maps trigger names to actions and per-action
//!   error policies, then renders through `render`.
//! - Everything runs on one event loop; nothing here is `Send`.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod render;
pub mod service;
pub mod store;
pub mod surface;
pub mod transport;
pub mod types;

pub use config::{Config, Endpoints};
pub use controller::{Action, Binding, Bindings, ErrorPolicy, InteractionController};
pub use error::{ApiError, ConfigError, ControllerError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::HttpService;
pub use store::RecordStore;
pub use surface::{MemorySurface, Region, Surface};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Params, UserRecord};
