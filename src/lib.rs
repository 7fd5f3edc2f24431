//! App name discovery for wallet permission managers.
//!
//! A permission manager knows about apps through two independent feeds:
//! - **Permission outputs** in the protocol-permission basket, each tagged
//!   with the originator that was granted the permission
//! - **Actions** labelled with the app that created them
//!
//! This crate reads both feeds and reconciles them into one deduplicated,
//! bounded list of app names for display.
//!
//! # Core Types
//!
//! - [`PermissionsProvider`]: Read access to the permission manager
//! - [`AppsQuery`]: Configures and runs the aggregation
//! - [`NameSet`]: Insertion-ordered set used for reconciliation
//! - [`InMemoryProvider`]: Scripted provider for tests and demos
//!
//! # Failure Policy
//!
//! [`AppsQuery::get_apps`] never fails. Provider errors are logged through
//! `tracing` and an empty list is returned. [`AppsQuery::try_get_apps`]
//! exposes the underlying [`ProviderError`] instead.
//!
//! # Examples
//!
//! ```
//! use permission_apps::{AppsQuery, InMemoryProvider, PermissionAction, PermissionOutput};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let provider = InMemoryProvider::new()
//!     .with_outputs(vec![
//!         PermissionOutput::with_tags(["babbage_originator foo.example"]),
//!         PermissionOutput::with_tags(["babbage_originator bar.example"]),
//!     ])
//!     .with_actions(vec![PermissionAction::with_labels([
//!         "action",
//!         "app_bar.example",
//!         "app_projectbabbage.com",
//!     ])]);
//!
//! let apps = AppsQuery::new(&provider, "admin.example").get_apps().await;
//!
//! // App labels come first, then originators no label covers.
//! assert_eq!(apps, vec!["bar.example", "foo.example"]);
//! # });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod memory;
mod names;
mod provider;
mod query;
mod record;

pub use error::ProviderError;
pub use memory::{InMemoryProvider, RecordedQuery};
pub use names::{
    APP_LABEL_PREFIX, EXCLUDED_APP, NameSet, ORIGINATOR_TAG_PREFIX, app_labels, originator_names,
    reconcile,
};
pub use provider::{
    ACTION_LABEL, INCLUDE_LOCKING_SCRIPTS, LabelQueryMode, ListActionsArgs, ListOutputsArgs,
    PERMISSION_BASKET, PermissionsProvider,
};
pub use query::{AppsQuery, DEFAULT_LIMIT, DEFAULT_SORT_BY};
pub use record::{ListActionsResult, ListOutputsResult, PermissionAction, PermissionOutput};
