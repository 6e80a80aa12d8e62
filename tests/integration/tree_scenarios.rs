use std::collections::HashMap;

use codeview::tree::walk::{files, find, walk};
use codeview::{build, FileNode, FolderNode, PathNode, TreeError};

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_input_yields_empty_forest() {
    assert_eq!(build(&map(&[])).unwrap(), Vec::<PathNode>::new());
}

#[test]
fn single_root_file_matches_expected_json() {
    let forest = build(&map(&[("Main.java", "class Main {}")])).unwrap();
    let value = serde_json::to_value(&forest).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": "Main.java",
            "name": "Main.java",
            "type": "file",
            "extension": "java",
            "content": "class Main {}"
        }])
    );
}

#[test]
fn nested_folder_sorts_before_sibling_file() {
    let forest = build(&map(&[("src/Main.java", "A"), ("src/util/Helper.java", "B")])).unwrap();
    let expected = vec![PathNode::Folder(FolderNode {
        id: "src".to_string(),
        name: "src".to_string(),
        children: vec![
            PathNode::Folder(FolderNode {
                id: "src/util".to_string(),
                name: "util".to_string(),
                children: vec![PathNode::File(FileNode {
                    id: "src/util/Helper.java".to_string(),
                    name: "Helper.java".to_string(),
                    extension: Some("java".to_string()),
                    content: "B".to_string(),
                })],
            }),
            PathNode::File(FileNode {
                id: "src/Main.java".to_string(),
                name: "Main.java".to_string(),
                extension: Some("java".to_string()),
                content: "A".to_string(),
            }),
        ],
    })];
    assert_eq!(forest, expected);
}

#[test]
fn root_files_sort_alphabetically() {
    let forest = build(&map(&[("b.txt", "1"), ("a.txt", "2")])).unwrap();
    let names: Vec<&str> = forest.iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}

#[test]
fn extensions_follow_last_dot() {
    let forest = build(&map(&[
        ("Main.java", ""),
        ("README", ""),
        ("dist/archive.tar.gz", ""),
    ]))
    .unwrap();
    let ext = |id: &str| {
        find(&forest, id)
            .and_then(PathNode::as_file)
            .unwrap()
            .extension
            .clone()
    };
    assert_eq!(ext("Main.java"), Some("java".to_string()));
    assert_eq!(ext("README"), None);
    assert_eq!(ext("dist/archive.tar.gz"), Some("gz".to_string()));
}

#[test]
fn shared_prefix_produces_single_folder() {
    let forest = build(&map(&[("a/x.txt", "1"), ("a/y.txt", "2"), ("a/b/z.txt", "3")])).unwrap();
    let folders: Vec<&str> = walk(&forest)
        .filter(|(_, n)| n.is_folder())
        .map(|(_, n)| n.id())
        .collect();
    assert_eq!(folders, vec!["a", "a/b"]);
    let a = find(&forest, "a").unwrap();
    let child_ids: Vec<&str> = a.children().iter().map(|n| n.id()).collect();
    assert_eq!(child_ids, vec!["a/b", "a/x.txt", "a/y.txt"]);
}

#[test]
fn every_child_id_extends_parent_id() {
    let forest = build(&map(&[
        ("src/main/java/App.java", ""),
        ("src/main/resources/app.yml", ""),
        ("src/test/java/AppTest.java", ""),
        ("pom.xml", ""),
    ]))
    .unwrap();
    for (_, node) in walk(&forest) {
        for child in node.children() {
            assert_eq!(child.id(), format!("{}/{}", node.id(), child.name()));
        }
    }
    assert_eq!(files(&forest).count(), 4);
}

#[test]
fn file_and_folder_sharing_an_id_is_rejected() {
    let err = build(vec![("a", "file"), ("a/b", "nested")]).unwrap_err();
    assert_eq!(err, TreeError::PathCollision { id: "a".to_string() });
}

#[test]
fn leading_and_doubled_separators_keep_the_key_as_id() {
    let forest = build(vec![("/src//Main.java", "A"), ("/src/Main.java", "B")]).unwrap();
    for (key, content) in [("/src//Main.java", "A"), ("/src/Main.java", "B")] {
        let file = find(&forest, key).and_then(PathNode::as_file).unwrap();
        assert_eq!(file.id, key);
        assert_eq!(file.content, content);
    }
    assert!(find(&forest, "src/Main.java").is_none());
}

fn sibling_names(pairs: &[(&str, &str)]) -> Vec<String> {
    build(&map(pairs))
        .unwrap()
        .iter()
        .map(|n| n.name().to_string())
        .collect()
}

#[test]
fn underscore_and_hyphen_sort_before_dot() {
    assert_eq!(
        sibling_names(&[("test.js", ""), ("test_utils.js", ""), ("test-utils.js", "")]),
        vec!["test_utils.js", "test-utils.js", "test.js"]
    );
}

#[test]
fn mixed_punctuation_siblings_have_a_fixed_order() {
    assert_eq!(
        sibling_names(&[
            ("a@b", ""),
            ("a(1).txt", ""),
            ("a.txt", ""),
            ("A.txt", ""),
            ("a_b", ""),
            ("ab", ""),
            ("a1", ""),
            ("a b", ""),
        ]),
        vec!["a b", "a_b", "a.txt", "A.txt", "a(1).txt", "a@b", "a1", "ab"]
    );
}
