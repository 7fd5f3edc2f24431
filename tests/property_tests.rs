//! Property tests for app name aggregation.
//!
//! Provider responses are generated from a small alphabet so originators
//! and app labels overlap often.

use std::collections::HashSet;

use permission_apps::{
    AppsQuery, EXCLUDED_APP, InMemoryProvider, PermissionAction, PermissionOutput, ProviderError,
};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-d]{1,2}\\.example").unwrap(),
        Just(EXCLUDED_APP.to_string()),
    ]
}

fn arb_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_name().prop_map(|name| format!("babbage_originator {}", name)),
        prop::string::string_regex("[a-z_ ]{0,12}").unwrap(),
    ]
}

fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_name().prop_map(|name| format!("app_{}", name)),
        Just("action".to_string()),
        prop::string::string_regex("[a-z_]{0,8}").unwrap(),
    ]
}

fn arb_output() -> impl Strategy<Value = PermissionOutput> {
    prop_oneof![
        prop::collection::vec(arb_tag(), 0..4).prop_map(PermissionOutput::with_tags),
        Just(PermissionOutput::untagged()),
    ]
}

fn arb_action() -> impl Strategy<Value = PermissionAction> {
    prop_oneof![
        prop::collection::vec(arb_label(), 0..4).prop_map(PermissionAction::with_labels),
        Just(PermissionAction::unlabeled()),
    ]
}

fn run(query: AppsQuery<'_, InMemoryProvider>) -> Vec<String> {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(query.get_apps())
}

// Union of label names and first originator per output, computed directly.
fn expected_names(outputs: &[PermissionOutput], actions: &[PermissionAction]) -> HashSet<String> {
    let labels = actions
        .iter()
        .flat_map(|a| a.labels().iter())
        .filter_map(|l| l.strip_prefix("app_"))
        .filter(|name| !name.is_empty() && *name != EXCLUDED_APP);
    let originators = outputs.iter().filter_map(|o| {
        o.tags()
            .iter()
            .find_map(|t| t.strip_prefix("babbage_originator "))
            .filter(|name| !name.is_empty())
    });
    labels.chain(originators).map(str::to_string).collect()
}

proptest! {
    /// Property: output is the bounded union with no duplicates
    #[test]
    fn proptest_length_is_bounded_union(
        outputs in prop::collection::vec(arb_output(), 0..8),
        actions in prop::collection::vec(arb_action(), 0..8),
        limit in 0usize..12
    ) {
        let expected = expected_names(&outputs, &actions);
        let provider = InMemoryProvider::new()
            .with_outputs(outputs)
            .with_actions(actions);

        let apps = run(AppsQuery::new(&provider, "admin").limit(limit));

        prop_assert_eq!(apps.len(), expected.len().min(limit));

        let unique: HashSet<&String> = apps.iter().collect();
        prop_assert_eq!(unique.len(), apps.len(), "duplicates in {:?}", apps);

        for app in &apps {
            prop_assert!(expected.contains(app), "unexpected app {:?}", app);
        }
    }

    /// Property: the excluded app never comes from action labels
    #[test]
    fn proptest_excluded_label_never_reported(
        actions in prop::collection::vec(arb_action(), 0..8)
    ) {
        let provider = InMemoryProvider::new().with_actions(actions);

        let apps = run(AppsQuery::new(&provider, "admin"));

        prop_assert!(!apps.iter().any(|app| app == EXCLUDED_APP));
    }

    /// Property: identical provider responses give identical results
    #[test]
    fn proptest_aggregation_is_idempotent(
        outputs in prop::collection::vec(arb_output(), 0..8),
        actions in prop::collection::vec(arb_action(), 0..8)
    ) {
        let provider = InMemoryProvider::new()
            .with_outputs(outputs)
            .with_actions(actions);

        let first = run(AppsQuery::new(&provider, "admin"));
        let second = run(AppsQuery::new(&provider, "admin"));

        prop_assert_eq!(first, second);
    }

    /// Property: a failing read always yields an empty list
    #[test]
    fn proptest_failure_yields_empty(
        outputs in prop::collection::vec(arb_output(), 0..8),
        actions in prop::collection::vec(arb_action(), 0..8),
        fail_outputs in any::<bool>()
    ) {
        let provider = InMemoryProvider::new()
            .with_outputs(outputs)
            .with_actions(actions);
        let error = ProviderError::Transport("unreachable".to_string());
        let provider = if fail_outputs {
            provider.fail_outputs_with(error)
        } else {
            provider.fail_actions_with(error)
        };

        let apps = run(AppsQuery::new(&provider, "admin"));

        prop_assert!(apps.is_empty());
    }
}
