use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nexus_pqueue::{Entry, PQueue, Priority};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn make_rng() -> SmallRng {
    SmallRng::seed_from_u64(12345)
}

fn assert_heap<T>(pq: &PQueue<T>) {
    let entries = pq.as_slice();
    for i in 1..entries.len() {
        let parent = (i - 1) / 2;
        assert!(
            entries[i].priority() >= entries[parent].priority(),
            "heap order violated at slot {i}"
        );
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn three_items_out_of_order() {
    let mut pq: PQueue = PQueue::new();

    pq.push(5, 3);
    pq.push(7, 1);
    pq.push(9, 2);

    assert_eq!(pq.extract_min(), 7);
    assert_eq!(pq.extract_min(), 9);
    assert_eq!(pq.extract_min(), 5);
    assert!(pq.is_empty());
}

#[test]
fn descending_priorities_reverse_insertion_order() {
    let mut pq: PQueue = PQueue::new();

    for i in 0..10 {
        pq.push(i, 10 - i);
        assert_heap(&pq);
    }

    let mut items = Vec::new();
    let mut priorities = Vec::new();
    while let Some(entry) = pq.pop() {
        let (item, priority) = entry.into_parts();
        items.push(item);
        priorities.push(priority);
    }

    assert_eq!(items, (0..10).rev().collect::<Vec<_>>());
    assert_eq!(priorities, (1..=10).collect::<Vec<_>>());
}

#[test]
fn growth_beyond_initial_capacity() {
    let mut pq: PQueue = PQueue::new();
    assert_eq!(pq.capacity(), 1);

    for i in 0..100 {
        // Deterministic scramble over 1..=100
        let priority = (i * 37 + 11) % 100 + 1;
        pq.push(i, priority);
        assert!(pq.capacity() >= pq.len());
        assert!(pq.capacity().is_power_of_two());
    }

    assert_eq!(pq.len(), 100);
    assert_eq!(pq.capacity(), 128);
    assert_heap(&pq);

    let mut last = 0;
    for _ in 0..100 {
        let priority = pq.peek_priority();
        assert!(priority >= last);
        last = priority;
        pq.extract_min();
        assert_heap(&pq);
    }
    assert!(pq.is_empty());
    assert_eq!(pq.capacity(), 128);
}

#[test]
fn size_accounting() {
    let mut pq: PQueue = PQueue::new();

    for k in 1..=20 {
        pq.push(k, k);
        assert_eq!(pq.len(), k as usize);
    }
    for m in 1..=20 {
        pq.extract_min();
        assert_eq!(pq.len(), 20 - m);
        assert_eq!(pq.is_empty(), pq.len() == 0);
    }
}

#[test]
fn distinct_priorities_round_trip_items() {
    let mut pq: PQueue<u64> = PQueue::new();
    let mut rng = make_rng();

    let mut expected: Vec<u64> = Vec::new();
    for p in 1..=256 {
        let item: u64 = rng.r#gen();
        expected.push(item);
        pq.push(item, p);
    }

    let mut got: Vec<u64> = std::iter::from_fn(|| pq.pop().map(Entry::into_item)).collect();
    got.sort_unstable();
    expected.sort_unstable();
    assert_eq!(got, expected);
}

#[test]
fn owned_payloads() {
    let mut pq: PQueue<String> = PQueue::new();

    pq.push("flush".to_string(), 30);
    pq.push("ack".to_string(), 10);
    pq.push("retry".to_string(), 20);

    assert_eq!(pq.to_string(), "[(ack,10),(flush,30),(retry,20)]");
    assert_eq!(pq.peek_item(), "ack");

    let order: Vec<String> = pq.into_sorted_vec().into_iter().map(Entry::into_item).collect();
    assert_eq!(order, vec!["ack", "retry", "flush"]);
}

#[test]
fn try_push_hands_item_back() {
    let mut pq: PQueue<String> = PQueue::new();

    let err = pq.try_push("job".to_string(), -1).unwrap_err();
    assert_eq!(err.priority, -1);
    assert_eq!(err.to_string(), "priority -1 must be > 0");
    assert_eq!(err.into_inner(), "job");
    assert!(pq.is_empty());
}

// =============================================================================
// Stress
// =============================================================================

#[test]
fn stress_against_binary_heap() {
    let mut rng = make_rng();
    let mut pq: PQueue<u32> = PQueue::new();
    let mut oracle: BinaryHeap<Reverse<Priority>> = BinaryHeap::new();

    for i in 0..10_000u32 {
        if oracle.is_empty() || rng.gen_bool(0.6) {
            let priority = rng.gen_range(1..=1_000);
            pq.push(i, priority);
            oracle.push(Reverse(priority));
        } else {
            let entry = pq.pop().unwrap();
            let Reverse(expected) = oracle.pop().unwrap();
            assert_eq!(entry.priority(), expected);
        }
        assert_eq!(pq.len(), oracle.len());
    }

    assert_heap(&pq);

    while let Some(Reverse(expected)) = oracle.pop() {
        assert_eq!(pq.pop().map(|e| e.priority()), Some(expected));
    }
    assert!(pq.pop().is_none());
}

#[test]
fn stress_ties() {
    let mut rng = make_rng();
    let mut pq: PQueue<u32> = PQueue::with_capacity(1024);

    for i in 0..1_000u32 {
        pq.push(i, rng.gen_range(1..=4));
    }

    let sorted = pq.into_sorted_vec();
    assert_eq!(sorted.len(), 1_000);
    assert!(sorted.windows(2).all(|w| w[0].priority() <= w[1].priority()));

    let mut items: Vec<u32> = sorted.into_iter().map(Entry::into_item).collect();
    items.sort_unstable();
    assert_eq!(items, (0..1_000).collect::<Vec<_>>());
}
