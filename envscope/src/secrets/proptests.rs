//! Property-based tests for scope merging.

use std::time::SystemTime;

use proptest::prelude::*;

use super::{merge_scopes, ScopeEntry, SecretValue};
use crate::path::{CanonicalPath, PathStyle};

#[derive(Debug, Clone)]
enum Def {
    Unset,
    Value(String),
    Tombstone,
}

fn def_strategy() -> impl Strategy<Value = Def> {
    prop_oneof![
        Just(Def::Unset),
        "[a-z]{1,6}".prop_map(Def::Value),
        Just(Def::Tombstone),
    ]
}

fn chain_path(depth: usize) -> CanonicalPath {
    let segments: Vec<String> = (0..depth).map(|i| format!("d{i}")).collect();
    CanonicalPath::parse(PathStyle::Posix, &format!("/{}", segments.join("/"))).unwrap()
}

fn build(defs: &[Def]) -> Vec<(CanonicalPath, Vec<ScopeEntry>)> {
    defs.iter()
        .enumerate()
        .filter_map(|(depth, def)| {
            let value = match def {
                Def::Unset => return None,
                Def::Value(v) => SecretValue::Value(v.clone()),
                Def::Tombstone => SecretValue::Tombstone,
            };
            let scope = chain_path(depth);
            let entry = ScopeEntry {
                scope_path: scope.clone(),
                key: "K".to_string(),
                value,
                updated_at: SystemTime::UNIX_EPOCH,
            };
            Some((scope, vec![entry]))
        })
        .collect()
}

proptest! {
    // The deepest definition decides: a value wins, a tombstone hides
    #[test]
    fn deepest_definition_wins(defs in prop::collection::vec(def_strategy(), 1..8)) {
        let merged = merge_scopes(build(&defs));
        let deepest = defs
            .iter()
            .enumerate()
            .rev()
            .find(|(_, d)| !matches!(d, Def::Unset));

        match deepest {
            Some((depth, Def::Value(v))) => {
                prop_assert_eq!(&merged["K"].value, v);
                prop_assert_eq!(&merged["K"].source_path, &chain_path(depth));
            }
            _ => prop_assert!(!merged.contains_key("K")),
        }
    }

    // Input order does not matter
    #[test]
    fn merge_is_order_independent(defs in prop::collection::vec(def_strategy(), 1..8)) {
        let forward = merge_scopes(build(&defs));
        let mut reversed = build(&defs);
        reversed.reverse();
        prop_assert_eq!(forward, merge_scopes(reversed));
    }
}
