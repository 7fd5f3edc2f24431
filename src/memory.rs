//! In-memory permission provider.
//!
//! Serves fixed outputs and actions and records every query it receives,
//! so callers can be exercised without a wallet.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::provider::{ListActionsArgs, ListOutputsArgs, PermissionsProvider};
use crate::record::{ListActionsResult, ListOutputsResult, PermissionAction, PermissionOutput};

/// A query received by [`InMemoryProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery<A> {
    /// Arguments passed by the caller
    pub args: A,
    /// Originator the query was scoped to
    pub originator: String,
}

/// A scripted [`PermissionsProvider`] backed by in-memory records.
///
/// Each list operation returns its configured records, or the configured
/// error if one was set. Queries are recorded in the order received.
///
/// # Examples
///
/// ```
/// use permission_apps::{InMemoryProvider, PermissionOutput, ProviderError};
///
/// let provider = InMemoryProvider::new()
///     .with_outputs(vec![PermissionOutput::with_tags(["babbage_originator a.example"])])
///     .fail_actions_with(ProviderError::Transport("offline".to_string()));
///
/// assert!(provider.output_queries().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    outputs: Vec<PermissionOutput>,
    actions: Vec<PermissionAction>,
    outputs_error: Option<ProviderError>,
    actions_error: Option<ProviderError>,
    output_queries: Mutex<Vec<RecordedQuery<ListOutputsArgs>>>,
    action_queries: Mutex<Vec<RecordedQuery<ListActionsArgs>>>,
}

impl InMemoryProvider {
    /// Creates a provider with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider serving recorded `list_outputs` and
    /// `list_actions` response bodies.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MalformedResponse` if either body does not
    /// decode.
    pub fn from_json(outputs: &str, actions: &str) -> Result<Self, ProviderError> {
        let outputs = ListOutputsResult::from_json(outputs)?;
        let actions = ListActionsResult::from_json(actions)?;
        Ok(Self::new()
            .with_outputs(outputs.outputs)
            .with_actions(actions.actions))
    }

    /// Sets the outputs returned by `list_outputs`.
    pub fn with_outputs(mut self, outputs: Vec<PermissionOutput>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Sets the actions returned by `list_actions`.
    pub fn with_actions(mut self, actions: Vec<PermissionAction>) -> Self {
        self.actions = actions;
        self
    }

    /// Makes `list_outputs` fail with `error`.
    pub fn fail_outputs_with(mut self, error: ProviderError) -> Self {
        self.outputs_error = Some(error);
        self
    }

    /// Makes `list_actions` fail with `error`.
    pub fn fail_actions_with(mut self, error: ProviderError) -> Self {
        self.actions_error = Some(error);
        self
    }

    /// Returns a snapshot of the `list_outputs` queries received.
    pub fn output_queries(&self) -> Vec<RecordedQuery<ListOutputsArgs>> {
        lock(&self.output_queries).clone()
    }

    /// Returns a snapshot of the `list_actions` queries received.
    pub fn action_queries(&self) -> Vec<RecordedQuery<ListActionsArgs>> {
        lock(&self.action_queries).clone()
    }
}

#[async_trait]
impl PermissionsProvider for InMemoryProvider {
    async fn list_outputs(
        &self,
        args: ListOutputsArgs,
        originator: &str,
    ) -> Result<ListOutputsResult, ProviderError> {
        lock(&self.output_queries).push(RecordedQuery {
            args,
            originator: originator.to_string(),
        });

        match &self.outputs_error {
            Some(err) => Err(err.clone()),
            None => Ok(ListOutputsResult::new(self.outputs.clone())),
        }
    }

    async fn list_actions(
        &self,
        args: ListActionsArgs,
        originator: &str,
    ) -> Result<ListActionsResult, ProviderError> {
        lock(&self.action_queries).push(RecordedQuery {
            args,
            originator: originator.to_string(),
        });

        match &self.actions_error {
            Some(err) => Err(err.clone()),
            None => Ok(ListActionsResult::new(self.actions.clone())),
        }
    }
}

// A panic while holding the lock cannot leave a half-pushed entry.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
