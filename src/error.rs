use thiserror::Error;

/// Errors reported by a [`PermissionsProvider`](crate::PermissionsProvider).
///
/// Every variant is treated the same way by [`AppsQuery::get_apps`](crate::AppsQuery::get_apps):
/// it is logged and the caller receives an empty list. Callers that need to
/// tell the cases apart use [`AppsQuery::try_get_apps`](crate::AppsQuery::try_get_apps).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider could not be reached
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider refused the admin originator
    #[error("originator '{originator}' is not authorized")]
    Unauthorized {
        /// The originator that was rejected
        originator: String,
    },

    /// The provider answered with something that could not be decoded
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Any other provider failure
    #[error("provider error: {0}")]
    Other(String),
}

impl ProviderError {
    /// Creates an authorization failure for the given originator.
    pub fn unauthorized(originator: impl Into<String>) -> Self {
        Self::Unauthorized {
            originator: originator.into(),
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
