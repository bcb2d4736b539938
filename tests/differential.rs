use chunked_deque::{
    AnyDeque, ChunkAllocator, ChunkPool, ChunkedDeque, DequeConfig, SharedChunkPool,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

const SEED: u64 = 42;
const STEPS: usize = 20_000;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Applies one random operation to both deques through the shared trait.
fn step<D: AnyDeque<u32>>(rng: &mut StdRng, d: &mut D, reference: &mut VecDeque<u32>, v: u32) {
    let len = reference.len();
    match rng.gen_range(0..100) {
        0..=19 => {
            d.push_back(v);
            reference.push_back(v);
        }
        20..=39 => {
            d.push_front(v);
            reference.push_front(v);
        }
        40..=49 => assert_eq!(d.pop_back(), reference.pop_back()),
        50..=59 => assert_eq!(d.pop_front(), reference.pop_front()),
        60..=74 => {
            let idx = rng.gen_range(0..=len + 1);
            d.insert(idx, v);
            AnyDeque::insert(&mut *reference, idx, v);
        }
        75..=89 => {
            let idx = rng.gen_range(0..=len);
            assert_eq!(d.remove(idx), reference.remove(idx));
        }
        90..=94 => {
            if let (Some(a), Some(b)) = (d.front_mut(), reference.front_mut()) {
                *a = v;
                *b = v;
            }
            if let (Some(a), Some(b)) = (d.back_mut(), reference.back_mut()) {
                *a = v.wrapping_add(1);
                *b = v.wrapping_add(1);
            }
        }
        95..=98 => {
            assert_eq!(d.front(), reference.front());
            assert_eq!(d.back(), reference.back());
        }
        _ => {
            d.clear();
            reference.clear();
        }
    }
    assert_eq!(d.len(), reference.len());
    assert_eq!(d.is_empty(), reference.is_empty());
}

fn run_against_vec_deque<A>(mut d: ChunkedDeque<u32, A>, seed: u64)
where
    A: ChunkAllocator<u32>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut reference = VecDeque::new();
    for v in 0..STEPS as u32 {
        step(&mut rng, &mut d, &mut reference, v);
        if v % 64 == 0 {
            assert!(d.iter().eq(reference.iter()), "diverged at step {}", v);
        }
    }
    assert_eq!(d.dump(), reference.iter().copied().collect::<Vec<_>>());
}

#[test]
fn test_random_ops_small_chunks() {
    init_tracing();
    run_against_vec_deque(ChunkedDeque::with_chunk_size(8), SEED);
}

#[test]
fn test_random_ops_default_chunks() {
    init_tracing();
    run_against_vec_deque(ChunkedDeque::new(), SEED + 1);
}

#[test]
fn test_random_ops_tiny_directory() {
    init_tracing();
    let config = DequeConfig::new().chunk_size(8).directory_len(2);
    run_against_vec_deque(ChunkedDeque::with_config(config), SEED + 2);
}

#[test]
fn test_random_ops_shared_pool() {
    init_tracing();
    let pool = SharedChunkPool::new(16);
    let mut other: ChunkedDeque<u32, _> = ChunkedDeque::with_allocator(pool.clone());
    other.extend(0..1_000);
    run_against_vec_deque(ChunkedDeque::with_allocator(pool.clone()), SEED + 3);
    other.clear();
    assert!(pool.pooled() > 0);
}

#[test]
fn test_random_ops_explicit_pool() {
    init_tracing();
    run_against_vec_deque(ChunkedDeque::with_allocator(ChunkPool::new(12)), SEED + 4);
}

#[test]
fn test_random_index_ops_with_drain() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(SEED + 5);
    let mut d: ChunkedDeque<u32> = ChunkedDeque::with_chunk_size(8);
    let mut reference: VecDeque<u32> = VecDeque::new();
    for v in 0..STEPS as u32 {
        let len = reference.len();
        match rng.gen_range(0..10) {
            0..=3 => {
                d.push_back(v);
                reference.push_back(v);
            }
            4 if len > 0 => {
                let idx = rng.gen_range(0..len);
                assert_eq!(d.replace(idx, v), std::mem::replace(&mut reference[idx], v));
                assert_eq!(*d.peek(idx), v);
            }
            5 if len > 0 => {
                let (a, b) = (rng.gen_range(0..len), rng.gen_range(0..len));
                d.swap(a, b);
                reference.swap(a, b);
            }
            6 => {
                let max = rng.gen_range(0..8);
                let n = if max == 0 { len } else { max.min(len) };
                let expected: Vec<u32> = reference.drain(..n).collect();
                let buf = Vec::with_capacity(rng.gen_range(0..8));
                assert_eq!(d.drain_many_into(max, buf), expected);
            }
            7 if len > 0 => {
                let idx = rng.gen_range(0..len);
                d[idx] = v;
                reference[idx] = v;
            }
            _ => {
                d.insert(len / 2, v);
                reference.insert(len / 2, v);
            }
        }
        assert_eq!(d.len(), reference.len());
    }
    assert_eq!(d.drain_many(0), reference.drain(..).collect::<Vec<_>>());
    assert!(d.is_empty());
}
