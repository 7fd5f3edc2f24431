//! Records returned by the permission provider.
//!
//! Provider data is heterogeneous: `tags` and `labels` may be missing,
//! `null`, not an array, or an array holding non-strings. All of those
//! shapes deserialize to `None` instead of failing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ProviderError;

/// One output stored in a wallet basket.
///
/// Only the tags are inspected; every other field the provider sends
/// (locking script, outpoint, satoshis) is ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOutput {
    /// Tags attached to the output, if any
    #[serde(
        default,
        deserialize_with = "lenient_strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
}

impl PermissionOutput {
    /// Creates an output carrying the given tags.
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Some(tags.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates an output with no tags field.
    pub fn untagged() -> Self {
        Self { tags: None }
    }

    /// Returns the tags, treating a missing field as empty.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// One recorded wallet action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionAction {
    /// Labels attached to the action, if any
    #[serde(
        default,
        deserialize_with = "lenient_strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub labels: Option<Vec<String>>,
}

impl PermissionAction {
    /// Creates an action carrying the given labels.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: Some(labels.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates an action with no labels field.
    pub fn unlabeled() -> Self {
        Self { labels: None }
    }

    /// Returns the labels, treating a missing field as empty.
    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or_default()
    }
}

/// Response to a `list_outputs` query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOutputsResult {
    /// Total number of outputs the provider holds for the query
    #[serde(default)]
    pub total_outputs: usize,
    /// The outputs returned
    #[serde(default)]
    pub outputs: Vec<PermissionOutput>,
}

impl ListOutputsResult {
    /// Decodes a `list_outputs` response body.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MalformedResponse` if `json` is not a valid
    /// response object.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wraps a set of outputs, setting the total to their count.
    pub fn new(outputs: Vec<PermissionOutput>) -> Self {
        Self {
            total_outputs: outputs.len(),
            outputs,
        }
    }
}

/// Response to a `list_actions` query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListActionsResult {
    /// Total number of actions the provider holds for the query
    #[serde(default)]
    pub total_actions: usize,
    /// The actions returned
    #[serde(default)]
    pub actions: Vec<PermissionAction>,
}

impl ListActionsResult {
    /// Decodes a `list_actions` response body.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MalformedResponse` if `json` is not a valid
    /// response object.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wraps a set of actions, setting the total to their count.
    pub fn new(actions: Vec<PermissionAction>) -> Self {
        Self {
            total_actions: actions.len(),
            actions,
        }
    }
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => None,
    })
}
