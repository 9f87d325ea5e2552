//! Property-based tests for store invariants and JSON round-trips.
//!
//! Uses proptest to verify:
//! 1. Any sequence of reorders preserves the id set and renumbers `order`
//!    to exactly `0..N` in display order.
//! 2. Pending/completed filters always partition the collection.
//! 3. Any valid task collection survives an encode → decode round-trip,
//!    compact and pretty.
//! 4. Arbitrary strings never cause a panic in `decode` (return `Err`
//!    gracefully).

use proptest::prelude::*;
use taskmaster_core::codec;
use taskmaster_core::store::TaskStore;
use taskmaster_core::task::{Filter, Priority, Task, TaskId};
use uuid::Uuid;

// --- Strategies ---

/// Strategy for task text that stays non-empty after trimming.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .!?]{0,40}"
}

/// Strategy for generating arbitrary `Priority` values.
fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

/// Strategy for generating fully-populated arbitrary `Task` values.
fn arb_task() -> impl Strategy<Value = Task> {
    (
        any::<u128>(),
        arb_text(),
        arb_priority(),
        any::<bool>(),
        any::<u64>(),
        proptest::option::of(any::<u64>()),
        proptest::option::of(any::<u64>()),
        0usize..1000,
    )
        .prop_map(
            |(id, text, priority, completed, created_at, completed_at, updated_at, order)| Task {
                id: TaskId::from_uuid(Uuid::from_u128(id)),
                text,
                priority,
                completed,
                created_at,
                completed_at,
                updated_at,
                order,
            },
        )
}

/// Builds a store with `n` tasks and returns it with the ids in creation
/// order.
fn seeded_store(texts: &[String]) -> (TaskStore, Vec<TaskId>) {
    let mut store = TaskStore::new();
    let mut ids = Vec::new();
    for text in texts {
        if let Ok(task) = store.add(text, Priority::Medium) {
            ids.push(task.id);
        }
    }
    (store, ids)
}

// --- Property tests ---

proptest! {
    /// Reordering with arbitrary (dragged, target) picks preserves the id
    /// set and always leaves `order` as exactly 0..N in display order.
    #[test]
    fn reorder_sequences_keep_orders_contiguous(
        texts in prop::collection::vec(arb_text(), 2..8),
        picks in prop::collection::vec((0usize..8, 0usize..8), 1..12),
    ) {
        let (mut store, ids) = seeded_store(&texts);
        for (from, to) in picks {
            let dragged = &ids[from % ids.len()];
            let target = &ids[to % ids.len()];
            store.reorder(dragged, target).expect("reorder of known ids");

            let rows = store.list(Filter::All, "");
            let orders: Vec<usize> = rows.iter().map(|t| t.order).collect();
            let expected: Vec<usize> = (0..ids.len()).collect();
            prop_assert_eq!(orders, expected);
        }
        prop_assert_eq!(store.len(), ids.len());
        for id in &ids {
            prop_assert!(store.get(id).is_some());
        }
    }

    /// Pending and completed views always partition the full collection.
    #[test]
    fn filters_partition_collection(
        texts in prop::collection::vec(arb_text(), 0..10),
        toggles in prop::collection::vec(any::<bool>(), 0..10),
    ) {
        let (mut store, ids) = seeded_store(&texts);
        for (id, flip) in ids.iter().zip(toggles) {
            if flip {
                store.toggle(id).expect("toggle of known id");
            }
        }

        let all = store.list(Filter::All, "");
        let pending = store.list(Filter::Pending, "");
        let completed = store.list(Filter::Completed, "");
        prop_assert_eq!(pending.len() + completed.len(), all.len());
        prop_assert!(pending.iter().all(|t| !t.completed));
        prop_assert!(completed.iter().all(|t| t.completed));
    }

    /// Any valid collection survives a compact encode → decode round-trip.
    #[test]
    fn collection_round_trip(tasks in prop::collection::vec(arb_task(), 0..16)) {
        let json = codec::encode(&tasks).expect("encode should succeed");
        let decoded = codec::decode(&json).expect("decode should succeed");
        prop_assert_eq!(tasks, decoded);
    }

    /// The pretty export format decodes back to the same collection.
    #[test]
    fn pretty_round_trip(tasks in prop::collection::vec(arb_task(), 0..16)) {
        let json = codec::encode_pretty(&tasks).expect("encode should succeed");
        let decoded = codec::decode(&json).expect("decode should succeed");
        prop_assert_eq!(tasks, decoded);
    }

    /// Arbitrary strings never cause a panic when decoded — they return
    /// Err gracefully or parse as a valid collection.
    #[test]
    fn arbitrary_strings_decode_without_panic(input in "\\PC{0,256}") {
        let _ = codec::decode(&input);
    }

    /// Search never returns a row whose text lacks the needle.
    #[test]
    fn search_results_always_contain_needle(
        texts in prop::collection::vec(arb_text(), 0..10),
        needle in "[a-z]{1,5}",
    ) {
        let (store, _ids) = seeded_store(&texts);
        let rows = store.list(Filter::All, &needle);
        for task in rows {
            prop_assert!(task.text.to_lowercase().contains(&needle));
        }
    }
}
