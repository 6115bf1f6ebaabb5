use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lib::chess::{Game, Move, Square, Transcript};
use lib::util::Integer;

fn destinations(c: &mut Criterion) {
    let game = Game::default();

    let mut group = c.benchmark_group("destinations");
    group.throughput(Throughput::Elements(Square::iter().len() as u64));
    group.bench_function("starting position", |b| {
        b.iter(|| {
            Square::iter()
                .map(|sq| black_box(&game).destinations(sq).count())
                .sum::<usize>()
        })
    });

    group.finish();
}

fn replay(c: &mut Criterion) {
    let transcript: Transcript = ["e2e4", "e7e5", "g1i3", "b8c6", "e1e3", "c6d4"]
        .into_iter()
        .filter_map(|m| m.parse::<Move>().ok())
        .collect();

    let mut group = c.benchmark_group("replay");
    group.throughput(Throughput::Elements(transcript.len() as u64));
    group.bench_function("opening", |b| {
        b.iter(|| Game::default().replay(black_box(transcript.clone())))
    });

    group.finish();
}

criterion_group!(benches, destinations, replay);
criterion_main!(benches);
