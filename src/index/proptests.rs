use std::sync::Arc;

use proptest::prelude::*;

use crate::catalog::{Catalog, Item};
use crate::index::SimilarityIndex;
use crate::text::TermVectorizer;

/// Token universe for generated catalogs; includes a stop word on purpose.
const TOKENS: &[&str] = &[
    "racing", "arcade", "strategy", "medieval", "survival", "roguelike", "puzzle", "the",
];

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(prop::collection::vec(0..TOKENS.len(), 0..6), 1..12).prop_map(|bags| {
        bags.into_iter()
            .enumerate()
            .map(|(i, bag)| {
                let tokens: Vec<&str> = bag.into_iter().map(|t| TOKENS[t]).collect();
                Item::new(i as u64 + 1, format!("game {i}"), tokens)
            })
            .collect()
    })
}

fn build(items: Vec<Item>) -> SimilarityIndex {
    let catalog = Arc::new(Catalog::new(items).expect("generated ids are unique"));
    let vectors = TermVectorizer::new().fit(&catalog);
    SimilarityIndex::build(catalog, &vectors).expect("sizes match")
}

proptest! {
    /// similarity(i, j) == similarity(j, i) for every pair.
    #[test]
    fn prop_similarity_is_symmetric(items in arb_items()) {
        let ids: Vec<u64> = items.iter().map(|i| i.item_id).collect();
        let index = build(items);
        for &i in &ids {
            for &j in &ids {
                prop_assert_eq!(
                    index.similarity(i, j).unwrap(),
                    index.similarity(j, i).unwrap()
                );
            }
        }
    }

    /// All similarities stay in [0, 1]; non-negative weights admit no
    /// negative cosine.
    #[test]
    fn prop_similarity_in_unit_range(items in arb_items()) {
        let ids: Vec<u64> = items.iter().map(|i| i.item_id).collect();
        let index = build(items);
        for &i in &ids {
            for &j in &ids {
                let sim = index.similarity(i, j).unwrap();
                prop_assert!((0.0..=1.0).contains(&sim), "sim({i},{j}) = {sim}");
            }
        }
    }

    /// Self-similarity is exactly 1 for non-zero vectors, 0 for zero vectors.
    #[test]
    fn prop_self_similarity(items in arb_items()) {
        let ids: Vec<u64> = items.iter().map(|i| i.item_id).collect();
        let index = build(items);
        for &i in &ids {
            let sim = index.similarity(i, i).unwrap();
            prop_assert!(sim == 1.0 || sim == 0.0);
        }
    }

    /// Vectorizing the same catalog twice yields identical vocabulary and
    /// vectors, and identical neighbor lists.
    #[test]
    fn prop_build_is_deterministic(items in arb_items()) {
        let catalog = Arc::new(Catalog::new(items).unwrap());
        let a = TermVectorizer::new().fit(&catalog);
        let b = TermVectorizer::new().fit(&catalog);
        prop_assert_eq!(a.vocabulary(), b.vocabulary());
        prop_assert_eq!(a.vectors(), b.vectors());

        let ia = SimilarityIndex::build(Arc::clone(&catalog), &a).unwrap();
        let ib = SimilarityIndex::build(Arc::clone(&catalog), &b).unwrap();
        for item in catalog.items() {
            prop_assert_eq!(
                ia.neighbors(item.item_id, 5).unwrap(),
                ib.neighbors(item.item_id, 5).unwrap()
            );
        }
    }

    /// Neighbor lists never contain the query item.
    #[test]
    fn prop_neighbors_exclude_query(items in arb_items(), k in 0usize..8) {
        let ids: Vec<u64> = items.iter().map(|i| i.item_id).collect();
        let index = build(items);
        for &id in &ids {
            let neighbors = index.neighbors(id, k).unwrap();
            prop_assert!(neighbors.iter().all(|&(n, _)| n != id));
            prop_assert!(neighbors.len() <= k);
        }
    }
}
