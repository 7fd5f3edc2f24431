use crate::error::ProviderError;
use crate::names::{app_labels, originator_names, reconcile};
use crate::provider::{ListActionsArgs, ListOutputsArgs, PermissionsProvider};

/// Maximum number of app names returned when no limit is set.
pub const DEFAULT_LIMIT: usize = 2000;

/// Sort key recorded when none is set.
pub const DEFAULT_SORT_BY: &str = "label";

/// A request for the apps known to a permission provider.
///
/// `AppsQuery` gathers the provider, the admin originator used to scope both
/// reads, and the output bounds. Awaiting [`get_apps`](Self::get_apps) runs
/// the aggregation.
///
/// # Examples
///
/// ```
/// use permission_apps::{AppsQuery, InMemoryProvider, PermissionAction, PermissionOutput};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let provider = InMemoryProvider::new()
///     .with_outputs(vec![PermissionOutput::with_tags(["babbage_originator foo.example"])])
///     .with_actions(vec![PermissionAction::with_labels(["action", "app_bar.example"])]);
///
/// let apps = AppsQuery::new(&provider, "admin.example")
///     .limit(10)
///     .get_apps()
///     .await;
///
/// assert_eq!(apps, vec!["bar.example", "foo.example"]);
/// # });
/// ```
pub struct AppsQuery<'a, P: ?Sized> {
    provider: &'a P,
    admin_originator: String,
    sort_by: String,
    limit: usize,
}

impl<'a, P> AppsQuery<'a, P>
where
    P: PermissionsProvider + ?Sized,
{
    /// Creates a query with the default limit and sort key.
    pub fn new(provider: &'a P, admin_originator: impl Into<String>) -> Self {
        Self {
            provider,
            admin_originator: admin_originator.into(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the sort key.
    ///
    /// The key is kept on the query but does not change output order:
    /// names always come back as app labels first, then missing originators.
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    /// Caps the number of names returned. A limit of zero returns nothing.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the admin originator both reads are scoped to.
    pub fn admin_originator(&self) -> &str {
        &self.admin_originator
    }

    /// Returns the configured sort key.
    pub fn sort_by_value(&self) -> &str {
        &self.sort_by
    }

    /// Returns the configured limit.
    pub fn limit_value(&self) -> usize {
        self.limit
    }

    /// Returns the deduplicated app names, or an empty list on failure.
    ///
    /// Provider failures are logged at error level and never returned, so
    /// "no apps" and "provider unavailable" look the same to the caller.
    pub async fn get_apps(&self) -> Vec<String> {
        match self.try_get_apps().await {
            Ok(apps) => apps,
            Err(err) => {
                tracing::error!(
                    admin_originator = %self.admin_originator,
                    error = %err,
                    "Error fetching app data"
                );
                Vec::new()
            }
        }
    }

    /// Returns the deduplicated app names, propagating provider failures.
    ///
    /// Outputs are read before actions; a failure in either read discards
    /// whatever the other produced.
    ///
    /// # Errors
    ///
    /// Returns the first `ProviderError` raised by the provider.
    pub async fn try_get_apps(&self) -> Result<Vec<String>, ProviderError> {
        tracing::debug!(
            admin_originator = %self.admin_originator,
            limit = self.limit,
            sort_by = %self.sort_by,
            "Fetching app data"
        );

        let outputs = self
            .provider
            .list_outputs(ListOutputsArgs::permission_basket(), &self.admin_originator)
            .await?
            .outputs;
        let originators = originator_names(&outputs);
        tracing::debug!(
            outputs = outputs.len(),
            originators = originators.len(),
            "Collected originator names"
        );

        let actions = self
            .provider
            .list_actions(ListActionsArgs::labelled_actions(), &self.admin_originator)
            .await?
            .actions;
        let labels = app_labels(&actions);
        tracing::debug!(
            actions = actions.len(),
            app_labels = labels.len(),
            "Collected app labels"
        );

        let apps = reconcile(labels, &originators, self.limit);
        tracing::debug!(returned = apps.len(), "Resolved app names");

        Ok(apps)
    }
}
