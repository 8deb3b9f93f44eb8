//! Wires named triggers to store operations and renders their results.
//!
//! # Design
//! One concrete controller. Which trigger runs which action, and what happens
//! when that action fails, is data (`Bindings`) handed to the constructor.
//! `dispatch` takes `&self`; overlapping dispatches are neither debounced nor
//! serialized and apply their renders in completion order.

use crate::config::Config;
use crate::error::{ApiError, ControllerError, ValidationError};
use crate::render;
use crate::store::RecordStore;
use crate::surface::Surface;
use crate::transport::{ReqwestTransport, Transport};

pub const GET_ALL_TRIGGER: &str = "get-all";
pub const GET_ONE_TRIGGER: &str = "get-one";
pub const CREATE_ONE_TRIGGER: &str = "create-one";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetAll,
    GetOne,
    CreateOne,
}

/// What a failed action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the error from `dispatch`.
    Propagate,
    /// Log it and report success; nothing is shown on the surface.
    LogOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub action: Action,
    pub policy: ErrorPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(String, Binding)>,
}

impl Bindings {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Bind `trigger`, replacing any earlier binding for it.
    pub fn bind(mut self, trigger: &str, action: Action, policy: ErrorPolicy) -> Self {
        let binding = Binding { action, policy };
        match self.entries.iter_mut().find(|(name, _)| name == trigger) {
            Some((_, existing)) => *existing = binding,
            None => self.entries.push((trigger.to_string(), binding)),
        }
        self
    }

    pub fn get(&self, trigger: &str) -> Option<Binding> {
        self.entries
            .iter()
            .find(|(name, _)| name == trigger)
            .map(|(_, binding)| *binding)
    }
}

impl Default for Bindings {
    /// Reads propagate, create only logs.
    fn default() -> Self {
        Self::empty()
            .bind(GET_ALL_TRIGGER, Action::GetAll, ErrorPolicy::Propagate)
            .bind(GET_ONE_TRIGGER, Action::GetOne, ErrorPolicy::Propagate)
            .bind(CREATE_ONE_TRIGGER, Action::CreateOne, ErrorPolicy::LogOnly)
    }
}

/// Parse the get-one input. The empty check runs on the raw value.
///
/// Any numeric spelling of a whole id is accepted (`"5"`, `"5.0"`, `"1e1"`).
/// Fractions, non-finite values and non-numbers get the range error.
pub fn validate_id(raw: &str, max_id: u64) -> Result<u64, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }
    match raw.trim().parse::<f64>() {
        Ok(id) if id.is_finite() && id.fract() == 0.0 && id >= 1.0 && id <= max_id as f64 => {
            Ok(id as u64)
        }
        _ => Err(ValidationError::OutOfRange { max: max_id }),
    }
}

pub struct InteractionController<T, S> {
    store: RecordStore<T>,
    surface: S,
    bindings: Bindings,
    max_id: u64,
}

impl<T: Transport, S: Surface> InteractionController<T, S> {
    pub fn new(store: RecordStore<T>, surface: S, bindings: Bindings, max_id: u64) -> Self {
        Self {
            store,
            surface,
            bindings,
            max_id,
        }
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub async fn dispatch(&self, trigger: &str) -> Result<(), ControllerError> {
        let binding = self
            .bindings
            .get(trigger)
            .ok_or_else(|| ControllerError::UnboundTrigger(trigger.to_string()))?;

        let result = match binding.action {
            Action::GetAll => self.get_all().await,
            Action::GetOne => self.get_one().await,
            Action::CreateOne => self.create_one().await,
        };

        match (result, binding.policy) {
            (Ok(()), _) => Ok(()),
            (Err(source), ErrorPolicy::Propagate) => Err(ControllerError::Action {
                trigger: trigger.to_string(),
                source,
            }),
            (Err(error), ErrorPolicy::LogOnly) => {
                tracing::error!(trigger, %error, "action failed");
                Ok(())
            }
        }
    }

    async fn get_all(&self) -> Result<(), ApiError> {
        let items = self.store.get_all().await?;
        render::render_all(&self.surface, &items);
        Ok(())
    }

    async fn get_one(&self) -> Result<(), ApiError> {
        let id = match validate_id(&self.surface.input_value(), self.max_id) {
            Ok(id) => id,
            Err(invalid) => {
                render::set_error(&self.surface, &invalid.to_string());
                render::render_one(&self.surface, None);
                return Ok(());
            }
        };

        render::set_error(&self.surface, "");
        let item = self.store.get_one(id).await?;
        render::render_one(&self.surface, Some(&item));
        Ok(())
    }

    async fn create_one(&self) -> Result<(), ApiError> {
        let item = self.store.create_one().await?;
        render::render_created(&self.surface, &item);
        Ok(())
    }
}

impl<S: Surface> InteractionController<ReqwestTransport, S> {
    /// Controller over `reqwest` with the default bindings.
    pub fn from_config(config: &Config, surface: S) -> Self {
        let store = RecordStore::new(ReqwestTransport::default(), config.endpoints());
        Self::new(store, surface, Bindings::default(), config.max_id)
    }
}
