use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use steamid::{Resolver, SteamId};

// One input per recognized layout, so a run covers the whole cascade.
const INPUTS: &[&str] = &[
    "STEAM_0:0:24110655",
    "[U:1:48221310]",
    "76561198008487038",
    "48221310",
    "https://steamcommunity.com/profiles/76561198008487038",
];

fn bench_resolve(c: &mut Criterion) {
    let resolver = Resolver::new();

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(INPUTS.len() as u64));
    group.bench_function(format!("elems/{}", INPUTS.len()), |b| {
        b.iter(|| {
            for input in INPUTS {
                let id = resolver.resolve(black_box(input)).expect("resolves");
                black_box(id);
            }
        });
    });
    group.finish();

    let mut group = c.benchmark_group("resolve_single");
    group.throughput(Throughput::Elements(1));
    for input in INPUTS {
        group.bench_function(*input, |b| {
            b.iter(|| {
                let id = resolver.resolve(black_box(input)).expect("resolves");
                black_box(id);
            });
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let id = SteamId::from_account_id(48221310);

    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(4));
    group.bench_function("all_forms", |b| {
        b.iter(|| {
            black_box(id.classic());
            black_box(id.id3());
            black_box(id.id64());
            black_box(id.profile_url());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_format);
criterion_main!(benches);
