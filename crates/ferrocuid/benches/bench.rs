use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ferrocuid::{
    Cuid, Guid, Identifier, LockGenerator, OsRandom, RandSource, ThreadRandom, TimeSource,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: i64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> i64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks one generator on one thread.
fn bench_sequential<ID, R>(
    c: &mut Criterion,
    group_name: &str,
    generator_fn: impl Fn() -> LockGenerator<ID, FixedMockTime, R>,
) where
    ID: Identifier,
    R: RandSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let generator = generator_fn();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.generate().unwrap());
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one generator shared by several threads.
fn bench_contended<ID, R>(
    c: &mut Criterion,
    group_name: &str,
    generator_fn: impl Fn() -> LockGenerator<ID, FixedMockTime, R>,
) where
    ID: Identifier,
    R: RandSource + Send + Sync,
{
    let mut group = c.benchmark_group(group_name);
    let max_threads = num_cpus::get().clamp(1, 16);

    for thread_count in [1, 2, 4, 8, 16].into_iter().filter(|&n| n <= max_threads) {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = Arc::new(generator_fn());
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.generate().unwrap());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

fn mock_clock() -> FixedMockTime {
    FixedMockTime {
        millis: 1_609_459_200_000,
    }
}

fn benchmark_sequential_cuid_thread_rng(c: &mut Criterion) {
    bench_sequential::<Cuid, _>(c, "sequential/cuid/thread_rng", || {
        LockGenerator::new(0, mock_clock(), ThreadRandom)
    });
}

fn benchmark_sequential_guid_thread_rng(c: &mut Criterion) {
    bench_sequential::<Guid, _>(c, "sequential/guid/thread_rng", || {
        LockGenerator::new(0, mock_clock(), ThreadRandom)
    });
}

fn benchmark_sequential_cuid_os_rng(c: &mut Criterion) {
    bench_sequential::<Cuid, _>(c, "sequential/cuid/os_rng", || {
        LockGenerator::new(0, mock_clock(), OsRandom)
    });
}

fn benchmark_contended_cuid(c: &mut Criterion) {
    bench_contended::<Cuid, _>(c, "contended/cuid/thread_rng", || {
        LockGenerator::new(0, mock_clock(), ThreadRandom)
    });
}

fn benchmark_contended_guid(c: &mut Criterion) {
    bench_contended::<Guid, _>(c, "contended/guid/thread_rng", || {
        LockGenerator::new(0, mock_clock(), ThreadRandom)
    });
}

fn benchmark_global(c: &mut Criterion) {
    let mut group = c.benchmark_group("global");
    group.throughput(Throughput::Elements(1));
    group.bench_function("cuid", |b| b.iter(|| black_box(ferrocuid::cuid().unwrap())));
    group.bench_function("guid", |b| b.iter(|| black_box(ferrocuid::guid().unwrap())));
    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let id = Guid::TEST;
    let text = id.to_string();

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(1));
    group.bench_function("encode_to_buf", |b| {
        let mut buf = [0_u8; 26];
        b.iter(|| {
            black_box(&id).encode_to_buf(&mut buf);
            black_box(buf);
        });
    });
    group.bench_function("encode", |b| b.iter(|| black_box(black_box(&id).encode())));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(Guid::parse_str(black_box(&text)).unwrap()));
    });
    group.bench_function("from_raw_bytes", |b| {
        b.iter(|| black_box(Guid::from_raw_bytes(black_box(id.as_bytes())).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_sequential_cuid_thread_rng,
    benchmark_sequential_guid_thread_rng,
    benchmark_sequential_cuid_os_rng,
    benchmark_contended_cuid,
    benchmark_contended_guid,
    benchmark_global,
    benchmark_codec,
);
criterion_main!(benches);
