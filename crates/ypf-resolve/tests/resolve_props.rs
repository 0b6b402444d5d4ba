//! Resolver properties over generated documents

use proptest::prelude::*;
use ypf_document::{Document, Mapping, Value};
use ypf_index::KeyIndex;
use ypf_resolve::{resolve, MatchStrategy, Resolution};

fn arb_document() -> impl Strategy<Value = Document> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Bool(false)),
        (0i64..3).prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,3}".prop_map(Value::String),
    ];
    let tree = leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Sequence),
            mapping(inner),
        ]
    });
    mapping(tree).prop_map(|root| Document::from_value(root).unwrap())
}

fn mapping(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-c]{1,2}", inner), 1..4).prop_map(|entries| {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (Value::String(key), value))
                .collect::<Mapping>(),
        )
    })
}

proptest! {
    #[test]
    fn prop_indexed_paths_resolve_exactly(doc in arb_document()) {
        let index = KeyIndex::build(&doc);
        for path in index.iter() {
            let resolution = resolve(path, &doc, &index);
            prop_assert_eq!(
                resolution,
                Some(Resolution::ExactMatch {
                    path: path.to_string(),
                    strategy: MatchStrategy::Exact,
                    value: doc.get_dotted(path).cloned().unwrap(),
                })
            );
        }
    }

    #[test]
    fn prop_resolution_is_deterministic(doc in arb_document(), query in "[a-c.]{0,5}") {
        let index = KeyIndex::build(&doc);
        let first = resolve(&query, &doc, &index);
        prop_assert_eq!(first.clone(), resolve(&query, &doc, &index));
        prop_assert_eq!(first.is_none(), query.is_empty());
    }

    #[test]
    fn prop_multi_match_paths_all_match(doc in arb_document(), query in "[a-c.]{1,3}") {
        let index = KeyIndex::build(&doc);
        if let Some(Resolution::MultiMatch { strategy, paths, .. }) = resolve(&query, &doc, &index) {
            prop_assert!(paths.len() > 1);
            for path in &paths {
                let matched = match strategy {
                    MatchStrategy::Suffix => path.ends_with(query.as_str()),
                    MatchStrategy::Prefix => path.starts_with(query.as_str()),
                    MatchStrategy::Exact => false,
                };
                prop_assert!(matched, "{} does not match {}", path, query);
            }
        }
    }
}
