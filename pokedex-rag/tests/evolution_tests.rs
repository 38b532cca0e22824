//! Property tests for evolution-chain rendering.

use pokedex_rag::{
    EvolutionChain, EvolutionDetail, EvolutionNode, EvolutionTrigger, NO_EVOLUTION,
    describe_evolution,
};
use proptest::prelude::*;

fn arb_trigger() -> impl Strategy<Value = EvolutionTrigger> {
    prop_oneof![
        Just(EvolutionTrigger::LevelUp),
        Just(EvolutionTrigger::Trade),
        Just(EvolutionTrigger::UseItem),
        Just(EvolutionTrigger::Shed),
        Just(EvolutionTrigger::Other),
        Just(EvolutionTrigger::Unknown),
    ]
}

fn arb_detail() -> impl Strategy<Value = EvolutionDetail> {
    (arb_trigger(), proptest::option::of(1u32..100), proptest::option::of("[a-z]{2,6}(-[a-z]{2,6})?"))
        .prop_map(|(trigger, min_level, item)| EvolutionDetail {
            min_level,
            item,
            ..EvolutionDetail::new(trigger)
        })
}

/// Species names with zero to two hyphens.
fn arb_species() -> impl Strategy<Value = String> {
    "[a-z]{3,8}(-[a-z]{1,4}){0,2}"
}

/// A tree of depth <= 3 where each non-root node has zero or more details.
fn arb_tree() -> impl Strategy<Value = EvolutionNode> {
    let leaf = (arb_species(), proptest::collection::vec(arb_detail(), 0..3)).prop_map(
        |(species, details)| EvolutionNode { species, details, evolves_to: Vec::new() },
    );
    leaf.prop_recursive(3, 24, 3, |inner| {
        (arb_species(), proptest::collection::vec(arb_detail(), 0..3), proptest::collection::vec(inner, 0..3))
            .prop_map(|(species, details, evolves_to)| EvolutionNode { species, details, evolves_to })
    })
}

/// Parent/child species pairs of every rendered edge, in pre-order.
fn expected_edges(node: &EvolutionNode, out: &mut Vec<(String, String)>) {
    for child in &node.evolves_to {
        if child.details.is_empty() {
            continue;
        }
        out.push((node.species.clone(), child.species.clone()));
        expected_edges(child, out);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn childless_root_does_not_evolve(species in arb_species()) {
        let chain = EvolutionChain::new(EvolutionNode::new(species));
        prop_assert_eq!(chain.text(), NO_EVOLUTION);
    }

    #[test]
    fn one_sentence_per_qualifying_edge_in_pre_order(tree in arb_tree()) {
        let mut edges = Vec::new();
        expected_edges(&tree, &mut edges);
        let chain = EvolutionChain::new(tree);

        prop_assert_eq!(chain.sentences().len(), edges.len());
        for (sentence, (parent, child)) in chain.sentences().iter().zip(&edges) {
            let parent = parent.replace('-', " ");
            let child = child.replace('-', " ");
            let prefix = format!("{} evolves into {} via ", parent, child);
            prop_assert!(
                sentence.to_lowercase().starts_with(&prefix),
                "{:?} does not start with {:?}", sentence, prefix
            );
        }

        if edges.is_empty() {
            prop_assert_eq!(chain.text(), NO_EVOLUTION);
        } else {
            prop_assert!(chain.text().ends_with('.'));
            prop_assert!(!chain.text().ends_with(".."));
        }
    }

    #[test]
    fn rendering_is_idempotent(tree in arb_tree()) {
        let first = describe_evolution(Some(&tree));
        let second = describe_evolution(Some(&tree));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, EvolutionChain::new(tree).text());
    }

    #[test]
    fn output_contains_no_hyphens_or_double_spaces(tree in arb_tree()) {
        let text = EvolutionChain::new(tree).text();
        prop_assert!(!text.contains('-'), "hyphen in {:?}", text);
        prop_assert!(!text.contains("  "), "double space in {:?}", text);
    }
}
