use chunked_deque::{ChunkedDeque, DequeConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 100_000;
    {
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (PushBack 100k)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("ChunkedDeque<i32>", |b| {
            b.iter(|| {
                let mut d: ChunkedDeque<i32> = ChunkedDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (PushFront + PopBack 100k)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                while let Some(v) = d.pop_back() {
                    black_box(v);
                }
            })
        });

        group.bench_function("ChunkedDeque<i32>", |b| {
            b.iter(|| {
                let mut d: ChunkedDeque<i32> = ChunkedDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                while let Some(v) = d.try_pop_back() {
                    black_box(v);
                }
            })
        });
        group.finish();
    }

    {
        // Steady-state queue: the pool keeps recycling the same chunks.
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (Queue churn)");
        let mut d_std: VecDeque<i32> = (0..1024).collect();
        let mut d_chunked: ChunkedDeque<i32> = (0..1024).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..1024 {
                    d_std.push_back(black_box(i));
                    black_box(d_std.pop_front());
                }
            })
        });

        group.bench_function("ChunkedDeque<i32>", |b| {
            b.iter(|| {
                for i in 0..1024 {
                    d_chunked.push_back(black_box(i));
                    black_box(d_chunked.try_pop_front());
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (Insert middle)");
        for size in [1_000, 10_000, 100_000] {
            group.bench_with_input(
                BenchmarkId::new("std::collections::VecDeque", size),
                &size,
                |b, &size| {
                    let mut d: VecDeque<i32> = (0..size).collect();
                    b.iter(|| {
                        let mid = d.len() / 2;
                        d.insert(mid, black_box(-1));
                        black_box(d.remove(mid));
                    })
                },
            );

            group.bench_with_input(BenchmarkId::new("ChunkedDeque<i32>", size), &size, |b, &size| {
                let mut d: ChunkedDeque<i32> = (0..size).collect();
                b.iter(|| {
                    let mid = d.len() / 2;
                    d.insert(mid, black_box(-1));
                    black_box(d.remove(mid));
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("ChunkedDeque chunk size (Get 10k)");
        for chunk_size in [16, 64, 256, 1024] {
            let mut d: ChunkedDeque<i32> =
                ChunkedDeque::with_config(DequeConfig::new().chunk_size(chunk_size));
            d.extend(0..10_000);
            group.bench_with_input(BenchmarkId::from_parameter(chunk_size), &d, |b, d| {
                b.iter(|| {
                    for i in (0..10_000).step_by(97) {
                        black_box(d.peek(black_box(i)));
                    }
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (Drain 10k)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d: VecDeque<i32> = (0..10_000).collect();
                let out: Vec<i32> = d.drain(..).collect();
                out
            })
        });

        group.bench_function("ChunkedDeque<i32>", |b| {
            b.iter(|| {
                let mut d: ChunkedDeque<i32> = (0..10_000).collect();
                d.drain_many(0)
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
