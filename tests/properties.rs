//! Property tests for invariants that hold on every run.

use std::collections::HashSet;

use proptest::prelude::*;

use pagesim::{compare, simulate, Outcome, PageId, PolicyKind};

fn reference_string() -> impl Strategy<Value = Vec<PageId>> {
    // Small page alphabet so hits and evictions both happen often.
    prop::collection::vec((0u32..12).prop_map(PageId::new), 0..64)
}

fn policy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![Just(PolicyKind::Fifo), Just(PolicyKind::Lru)]
}

proptest! {
    #[test]
    fn counters_add_up(input in reference_string(), frames in 1usize..8, kind in policy()) {
        let result = simulate(kind, &input, frames).unwrap();

        prop_assert_eq!(result.faults() + result.hits(), result.requests());
        prop_assert_eq!(result.requests() as usize, input.len());
        prop_assert_eq!(result.steps().len(), input.len());
    }

    #[test]
    fn occupancy_grows_then_holds(input in reference_string(), frames in 1usize..8, kind in policy()) {
        let result = simulate(kind, &input, frames).unwrap();

        let mut previous = 0;
        for step in result.steps() {
            let occupied = step.occupied();
            prop_assert!(occupied <= frames);
            prop_assert!(occupied >= previous);
            prop_assert_eq!(step.frames.len(), frames);
            previous = occupied;
        }
    }

    #[test]
    fn outcome_matches_previous_residency(input in reference_string(), frames in 1usize..8, kind in policy()) {
        let result = simulate(kind, &input, frames).unwrap();

        let mut resident: HashSet<PageId> = HashSet::new();
        for step in result.steps() {
            let expected = if resident.contains(&step.page) { Outcome::Hit } else { Outcome::Fault };
            prop_assert_eq!(step.outcome, expected);
            prop_assert!(step.frames.contains(&Some(step.page)));

            // No page is ever resident twice.
            let now: HashSet<PageId> = step.frames.iter().flatten().copied().collect();
            prop_assert_eq!(now.len(), step.occupied());
            resident = now;
        }
    }

    #[test]
    fn runs_are_deterministic(input in reference_string(), frames in 1usize..8, kind in policy()) {
        let a = simulate(kind, &input, frames).unwrap();
        let b = simulate(kind, &input, frames).unwrap();

        prop_assert_eq!(a.fingerprint(), b.fingerprint());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn no_eviction_when_frames_cover_distinct_pages(input in reference_string(), kind in policy()) {
        let distinct: HashSet<PageId> = input.iter().copied().collect();
        let frames = distinct.len().max(1);
        let result = simulate(kind, &input, frames).unwrap();

        prop_assert_eq!(result.faults() as usize, distinct.len());
        prop_assert!(result.evicted_pages().is_empty());
    }

    #[test]
    fn short_reference_strings_only_fault_on_first_use(
        input in prop::collection::vec((0u32..12).prop_map(PageId::new), 0..8),
        kind in policy(),
    ) {
        let frames = input.len().max(1);
        let result = simulate(kind, &input, frames).unwrap();
        let distinct: HashSet<PageId> = input.iter().copied().collect();

        prop_assert_eq!(result.faults() as usize, distinct.len());
    }

    #[test]
    fn comparison_agrees_with_single_runs(input in reference_string(), frames in 1usize..6) {
        let cmp = compare(&input, frames).unwrap();

        prop_assert_eq!(&cmp.fifo, &simulate(PolicyKind::Fifo, &input, frames).unwrap());
        prop_assert_eq!(&cmp.lru, &simulate(PolicyKind::Lru, &input, frames).unwrap());
    }

    #[test]
    fn single_slot_changes_per_step(input in reference_string(), frames in 1usize..8, kind in policy()) {
        let result = simulate(kind, &input, frames).unwrap();

        let mut previous: Vec<Option<PageId>> = vec![None; frames];
        for step in result.steps() {
            let changed = previous.iter().zip(&step.frames).filter(|(a, b)| a != b).count();
            match step.outcome {
                Outcome::Hit => prop_assert_eq!(changed, 0),
                Outcome::Fault => prop_assert_eq!(changed, 1),
            }
            previous = step.frames.clone();
        }
    }
}
