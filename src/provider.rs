use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::record::{ListActionsResult, ListOutputsResult};

/// Basket holding protocol-permission tokens.
pub const PERMISSION_BASKET: &str = "babbage-protocol-permission";

/// `include` value asking the provider to return locking scripts.
pub const INCLUDE_LOCKING_SCRIPTS: &str = "locking scripts";

/// Label carried by every action that can be attributed to an app.
pub const ACTION_LABEL: &str = "action";

/// Arguments for [`PermissionsProvider::list_outputs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOutputsArgs {
    /// Basket to list outputs from
    pub basket: String,
    /// Extra data to include with each output
    pub include: String,
}

impl ListOutputsArgs {
    /// Query for every protocol-permission output, locking scripts included.
    pub fn permission_basket() -> Self {
        Self {
            basket: PERMISSION_BASKET.to_string(),
            include: INCLUDE_LOCKING_SCRIPTS.to_string(),
        }
    }
}

/// How the labels of a [`ListActionsArgs`] query are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelQueryMode {
    /// An action matches if it carries any of the labels
    #[default]
    Any,
    /// An action matches only if it carries all of the labels
    All,
}

/// Arguments for [`PermissionsProvider::list_actions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListActionsArgs {
    /// Labels to filter on
    pub labels: Vec<String>,
    /// How `labels` are combined
    pub label_query_mode: LabelQueryMode,
    /// Whether each returned action should carry its labels
    pub include_labels: bool,
}

impl ListActionsArgs {
    /// Query for every action labelled `action`, labels included.
    pub fn labelled_actions() -> Self {
        Self {
            labels: vec![ACTION_LABEL.to_string()],
            label_query_mode: LabelQueryMode::Any,
            include_labels: true,
        }
    }
}

/// Read access to a wallet permission manager.
///
/// Both operations are scoped by the caller's originator and are read-only.
/// Implementations own transport, authentication and storage; this crate
/// only ever calls the two methods below.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use permission_apps::{
///     ListActionsArgs, ListActionsResult, ListOutputsArgs, ListOutputsResult,
///     PermissionsProvider, ProviderError,
/// };
///
/// struct Offline;
///
/// #[async_trait]
/// impl PermissionsProvider for Offline {
///     async fn list_outputs(
///         &self,
///         _args: ListOutputsArgs,
///         _originator: &str,
///     ) -> Result<ListOutputsResult, ProviderError> {
///         Err(ProviderError::Transport("offline".to_string()))
///     }
///
///     async fn list_actions(
///         &self,
///         _args: ListActionsArgs,
///         _originator: &str,
///     ) -> Result<ListActionsResult, ProviderError> {
///         Err(ProviderError::Transport("offline".to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait PermissionsProvider: Send + Sync {
    /// Lists outputs in a basket on behalf of `originator`.
    async fn list_outputs(
        &self,
        args: ListOutputsArgs,
        originator: &str,
    ) -> Result<ListOutputsResult, ProviderError>;

    /// Lists actions matching a label query on behalf of `originator`.
    async fn list_actions(
        &self,
        args: ListActionsArgs,
        originator: &str,
    ) -> Result<ListActionsResult, ProviderError>;
}
