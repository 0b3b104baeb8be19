use nexus_containers::{
    MaxPriorityQueue, MinPriorityQueue, OrderFn, PriorityQueue, RandomizedQueue, Underflow,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

// =============================================================================
// Priority queue
// =============================================================================

#[test]
fn max_extracts_descending() {
    let mut pq: MaxPriorityQueue<i32> = MaxPriorityQueue::new();
    for x in [1, 5, 2, 3] {
        pq.insert(x);
    }

    assert_eq!(pq.del_max(), Ok(5));
    assert_eq!(pq.del_max(), Ok(3));
    assert_eq!(pq.del_max(), Ok(2));
    assert_eq!(pq.del_max(), Ok(1));
    assert!(pq.is_empty());
}

#[test]
fn min_extracts_ascending() {
    let mut pq: MinPriorityQueue<i32> = MinPriorityQueue::new();
    for x in [1, 5, 2, 3] {
        pq.insert(x);
    }

    let drained: Vec<_> = std::iter::from_fn(|| pq.del_min().ok()).collect();
    assert_eq!(drained, vec![1, 2, 3, 5]);
}

#[test]
fn max_from_sequence_peeks_largest() {
    let pq: MaxPriorityQueue<i32> = [1, 4, 2, 3].into_iter().collect();
    assert_eq!(pq.max(), Ok(&4));
    assert_eq!(pq.len(), 4);
}

#[test]
fn snapshot_iteration_order() {
    let max: MaxPriorityQueue<i32> = [1, 4, 2, 3].into();
    assert_eq!(max.iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    assert_eq!(max.max(), Ok(&4));

    let min: MinPriorityQueue<i32> = [1, 4, 2, 3].into();
    assert_eq!(min.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(min.min(), Ok(&1));
}

#[test]
fn strings_and_custom_order() {
    let mut words: MinPriorityQueue<String> = MinPriorityQueue::new();
    words.extend(["pear", "apple", "fig"].map(String::from));
    assert_eq!(words.del_min().as_deref(), Ok("apple"));

    let mut by_len = PriorityQueue::with_order(OrderFn(|a: &&str, b: &&str| a.len() > b.len()));
    by_len.extend(["pear", "apple", "fig"]);
    assert_eq!(by_len.extract_top(), Ok("apple"));
}

#[test]
fn underflow_propagates_with_question_mark() {
    fn top_two(pq: &mut MaxPriorityQueue<u8>) -> Result<(u8, u8), Underflow> {
        Ok((pq.del_max()?, pq.del_max()?))
    }

    let mut pq: MaxPriorityQueue<u8> = [7].into();
    let err = top_two(&mut pq).unwrap_err();
    assert_eq!(err.op(), "del_max");
    assert!(pq.is_empty());
}

// =============================================================================
// Randomized queue
// =============================================================================

#[test]
fn randomized_two_dequeues() {
    let mut rq = RandomizedQueue::with_rng(SmallRng::seed_from_u64(7));
    rq.enqueue(1);
    rq.enqueue(2);

    let mut got = vec![rq.dequeue().unwrap(), rq.dequeue().unwrap()];
    got.sort_unstable();
    assert_eq!(got, vec![1, 2]);
    assert!(rq.is_empty());
}

#[test]
fn randomized_from_sequence() {
    let rq: RandomizedQueue<i32> = [1, 4, 2, 3].into_iter().collect();
    assert_eq!(rq.len(), 4);
    assert!(!rq.is_empty());
}

#[test]
fn randomized_snapshot_then_sample() {
    let mut rq: RandomizedQueue<i32> = [1, 2, 3, 4].into();
    for item in rq.iter() {
        assert!((1..=4).contains(&item));
    }
    assert!((1..=4).contains(rq.sample().unwrap()));
    assert_eq!(rq.len(), 4);
}

// =============================================================================
// Resize tracing
// =============================================================================

#[test]
fn resizes_with_trace_logging_enabled() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();

    let mut pq: MinPriorityQueue<u32> = MinPriorityQueue::new();
    pq.extend(0..64);
    assert_eq!(pq.capacity(), 64);
    while pq.del_min().is_ok() {}
    assert_eq!(pq.capacity(), 2);

    let mut rq = RandomizedQueue::with_rng(SmallRng::seed_from_u64(3));
    rq.extend(0..64u32);
    assert_eq!(rq.capacity(), 64);
    while rq.dequeue().is_ok() {}
    assert_eq!(rq.capacity(), 2);
}

// =============================================================================
// Empty containers
// =============================================================================

#[test]
fn fresh_containers_underflow() {
    let mut max: MaxPriorityQueue<i32> = MaxPriorityQueue::new();
    let mut min: MinPriorityQueue<i32> = MinPriorityQueue::default();
    let mut rq: RandomizedQueue<i32> = RandomizedQueue::new();

    assert!(max.max().is_err());
    assert!(max.del_max().is_err());
    assert!(min.min().is_err());
    assert!(min.del_min().is_err());
    assert_eq!(rq.dequeue().unwrap_err().op(), "dequeue");
    assert_eq!(rq.sample().unwrap_err().op(), "sample");
}
