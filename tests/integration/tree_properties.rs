use std::collections::{BTreeMap, BTreeSet, HashSet};

use codeview::tree::order::compare_nodes;
use codeview::tree::walk::{files, walk};
use codeview::{build, PathNode};
use proptest::prelude::*;

// Folder segments never contain '.', file names always do, so no generated
// key can collide with a synthesized folder id.
fn path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-dA-D_-]{1,3}", 0..4),
        "[a-dA-D_-]{0,4}\\.(rs|java|txt)",
    )
        .prop_map(|(mut folders, file)| {
            folders.push(file);
            folders.join("/")
        })
}

fn files_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(path_strategy(), "[ -~]{0,16}", 0..32)
}

// Root-level names over a small alphabet, in the order `_` < `-` < `.` < letters.
const NAME_ALPHABET: &str = "_-.ab";

fn expected_order(names: &BTreeSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = names.iter().cloned().collect();
    sorted.sort_by_key(|name| {
        name.chars()
            .map(|c| NAME_ALPHABET.find(c).unwrap_or(usize::MAX))
            .collect::<Vec<_>>()
    });
    sorted
}

fn assert_sorted(nodes: &[PathNode]) {
    for pair in nodes.windows(2) {
        assert_ne!(
            compare_nodes(&pair[0], &pair[1]),
            std::cmp::Ordering::Greater,
            "{} should not precede {}",
            pair[0].id(),
            pair[1].id()
        );
    }
    let first_file = nodes.iter().position(|n| !n.is_folder()).unwrap_or(nodes.len());
    assert!(nodes[first_file..].iter().all(|n| !n.is_folder()));
    for node in nodes {
        assert_sorted(node.children());
    }
}

proptest! {
    #[test]
    fn build_is_idempotent(files in files_strategy()) {
        prop_assert_eq!(build(&files).unwrap(), build(&files).unwrap());
    }

    #[test]
    fn every_key_becomes_exactly_one_file(input in files_strategy()) {
        let forest = build(&input).unwrap();
        let leaves: Vec<_> = files(&forest).collect();
        prop_assert_eq!(leaves.len(), input.len());
        for leaf in leaves {
            prop_assert_eq!(input.get(&leaf.id), Some(&leaf.content));
        }
    }

    #[test]
    fn ids_are_unique(input in files_strategy()) {
        let forest = build(&input).unwrap();
        let mut seen = HashSet::new();
        for (_, node) in walk(&forest) {
            prop_assert!(seen.insert(node.id().to_string()), "duplicate id {}", node.id());
        }
    }

    #[test]
    fn every_level_is_sorted(input in files_strategy()) {
        let forest = build(&input).unwrap();
        assert_sorted(&forest);
    }

    #[test]
    fn root_names_follow_punctuation_rank(names in prop::collection::btree_set("[ab_.-]{1,5}", 1..16)) {
        let forest = build(names.iter().map(|n| (n.as_str(), ""))).unwrap();
        let actual: Vec<String> = forest.iter().map(|n| n.name().to_string()).collect();
        prop_assert_eq!(actual, expected_order(&names));
    }

    #[test]
    fn insertion_order_is_irrelevant(input in files_strategy()) {
        let forward = build(input.iter()).unwrap();
        let backward = build(input.iter().rev()).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
