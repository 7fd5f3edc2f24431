//! Extraction and reconciliation of app names.
//!
//! Two sources name apps:
//! - permission outputs tagged `babbage_originator <name>`
//! - actions labelled `app_<name>`
//!
//! Action labels win: an originator is only reported if no action already
//! names it. Order is first-seen order within each source, labels first.

use std::collections::HashSet;

use crate::record::{PermissionAction, PermissionOutput};

/// Tag prefix marking the originator that owns a permission output.
pub const ORIGINATOR_TAG_PREFIX: &str = "babbage_originator ";

/// Label prefix marking the app that performed an action.
pub const APP_LABEL_PREFIX: &str = "app_";

/// App label that is never reported.
pub const EXCLUDED_APP: &str = "projectbabbage.com";

/// An insertion-ordered set of non-empty names.
///
/// Iteration follows first insertion, so the same sequence of inserts
/// always yields the same order.
///
/// # Examples
///
/// ```
/// use permission_apps::NameSet;
///
/// let mut names = NameSet::new();
/// assert!(names.insert("b.example"));
/// assert!(names.insert("a.example"));
/// assert!(!names.insert("b.example"));
/// assert!(!names.insert(""));
///
/// assert_eq!(names.into_vec(), vec!["b.example", "a.example"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl NameSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name, returning `true` if it was not already present.
    ///
    /// Empty names are never stored.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.order.push(name);
        true
    }

    /// Returns `true` if the set holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the set holds no names.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the names in `self` that are not in `other`, keeping order.
    pub fn difference(&self, other: &NameSet) -> NameSet {
        let mut missing = NameSet::new();
        for name in self.iter().filter(|name| !other.contains(name)) {
            missing.insert(name);
        }
        missing
    }

    /// Consumes the set, returning names in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

/// Collects originator names from permission outputs.
///
/// Only the first tag carrying [`ORIGINATOR_TAG_PREFIX`] on each output is
/// used. Outputs without tags contribute nothing.
pub fn originator_names(outputs: &[PermissionOutput]) -> NameSet {
    outputs
        .iter()
        .filter_map(|output| {
            output
                .tags()
                .iter()
                .find_map(|tag| tag.strip_prefix(ORIGINATOR_TAG_PREFIX))
        })
        .collect()
}

/// Collects app names from action labels.
///
/// Every label carrying [`APP_LABEL_PREFIX`] counts, except
/// [`EXCLUDED_APP`].
pub fn app_labels(actions: &[PermissionAction]) -> NameSet {
    actions
        .iter()
        .flat_map(|action| action.labels().iter())
        .filter_map(|label| label.strip_prefix(APP_LABEL_PREFIX))
        .filter(|app| *app != EXCLUDED_APP)
        .collect()
}

/// Merges app labels with originators they do not already cover.
///
/// The result is every app label followed by the missing originators,
/// truncated to `limit`.
pub fn reconcile(app_labels: NameSet, originators: &NameSet, limit: usize) -> Vec<String> {
    let missing = originators.difference(&app_labels);
    app_labels
        .into_vec()
        .into_iter()
        .chain(missing.into_vec())
        .take(limit)
        .collect()
}
