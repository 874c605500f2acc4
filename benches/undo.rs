use criterion::{black_box, criterion_group, criterion_main, Criterion};

use freecell_engine::{GameState, Session};

/// A legal opening on deal 218.
const OPENING: &[&str] = &["AC F", "2C F", "3C F", "TS C 7", "KS O"];

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal", |b| b.iter(|| GameState::new(black_box(11982))));
}

fn bench_undo(c: &mut Criterion) {
    let mut session = Session::new(218);
    for line in OPENING {
        let _ = session.execute(line);
    }

    c.bench_function("undo_by_replay", |b| {
        b.iter(|| {
            let mut s = session.clone();
            black_box(s.undo())
        })
    });

    c.bench_function("replay_log_line", |b| {
        let line = session.state().log_line();
        b.iter(|| {
            let mut s = Session::new(218);
            black_box(s.execute(black_box(&line)))
        })
    });
}

criterion_group!(benches, bench_deal, bench_undo);
criterion_main!(benches);
