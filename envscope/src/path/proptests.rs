//! Property-based tests for path ancestry.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on relationships between canonical paths.

use super::relationship::{ancestors, depth, is_ancestor_of, parent};
use super::{CanonicalPath, PathRelationship, PathStyle};
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 0..6)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!['C', 'c', 'D']),
        prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..5),
    )
        .prop_map(|(drive, parts)| format!("{drive}:\\{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A path is always Same as itself
    #[test]
    fn path_relationship_reflexive(path in absolute_path_strategy()) {
        prop_assert_eq!(
            PathRelationship::between(PathStyle::Posix, &path, &path),
            PathRelationship::Same
        );
    }

    // Ancestor and Descendant are mirror images
    #[test]
    fn path_relationship_antisymmetric(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let forward = PathRelationship::between(PathStyle::Posix, &a, &b);
        let backward = PathRelationship::between(PathStyle::Posix, &b, &a);
        let expected = match forward {
            PathRelationship::Ancestor => PathRelationship::Descendant,
            PathRelationship::Descendant => PathRelationship::Ancestor,
            other => other,
        };
        prop_assert_eq!(backward, expected);
    }

    // Every element of the ancestor chain is an ancestor, depths increase by one
    #[test]
    fn ancestors_chain_is_consistent(path in absolute_path_strategy()) {
        let chain = ancestors(PathStyle::Posix, &path);
        prop_assert_eq!(chain[0], "/");
        prop_assert_eq!(*chain.last().unwrap(), path.as_str());
        prop_assert_eq!(chain.len(), depth(PathStyle::Posix, &path) + 1);
        for (i, ancestor) in chain.iter().enumerate() {
            prop_assert!(is_ancestor_of(PathStyle::Posix, ancestor, &path));
            prop_assert_eq!(depth(PathStyle::Posix, ancestor), i);
        }
    }

    // Appending characters to the last segment never yields a descendant
    #[test]
    fn partial_segment_never_ancestor(path in absolute_path_strategy(), suffix in "[a-z]{1,4}") {
        prop_assume!(path != "/");
        let longer = format!("{path}{suffix}");
        prop_assert!(!is_ancestor_of(PathStyle::Posix, &path, &longer));
    }

    // Parent of a non-root is a strict ancestor
    #[test]
    fn parent_is_strict_ancestor(path in absolute_path_strategy()) {
        let up = parent(PathStyle::Posix, &path);
        if path == "/" {
            prop_assert_eq!(up, "/");
        } else {
            prop_assert_eq!(
                PathRelationship::between(PathStyle::Posix, up, &path),
                PathRelationship::Ancestor
            );
        }
    }

    // Windows comparisons ignore case
    #[test]
    fn windows_case_insensitive(path in windows_path_strategy()) {
        let a = CanonicalPath::parse(PathStyle::Windows, &path).unwrap();
        let b = CanonicalPath::parse(PathStyle::Windows, &path.to_uppercase()).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.is_ancestor_of(&b));
        prop_assert!(a.as_str().starts_with(|c: char| c.is_ascii_uppercase()));
    }
}
