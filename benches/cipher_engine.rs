use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cipher_terminal::core::{cipher, extract_keywords, PuzzleSession, SimpleRng, WordPool};
use cipher_terminal::types::{CipherScheme, SessionAction};

fn bench_encode_all_schemes(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("encode_all_schemes", |b| {
        b.iter(|| {
            for scheme in CipherScheme::ALL {
                black_box(cipher::encode(black_box("AUTHENTICATE"), scheme, 10, &mut rng));
            }
        })
    });
}

fn bench_decode_binary(c: &mut Criterion) {
    let packet = cipher::encode("HEXADECIMAL", CipherScheme::Binary, 7, &mut SimpleRng::new(1));

    c.bench_function("decode_binary", |b| {
        b.iter(|| cipher::decode(black_box(&packet), CipherScheme::Binary))
    });
}

fn bench_new_puzzle(c: &mut Criterion) {
    let mut session = PuzzleSession::new(WordPool::default(), 12345);
    session.start();

    c.bench_function("new_puzzle_level_10", |b| {
        b.iter(|| {
            session.new_puzzle(black_box(10));
        })
    });
}

fn bench_guess_cycle(c: &mut Criterion) {
    let mut session = PuzzleSession::new(WordPool::default(), 12345);
    session.start();

    c.bench_function("correct_guess", |b| {
        b.iter(|| {
            let word = session.puzzle().map(|p| p.word().to_string()).unwrap_or_default();
            let _ = session.apply(SessionAction::Guess(word));
        })
    });
}

fn bench_extract_keywords(c: &mut Criterion) {
    let text = include_str!("../src/main.rs");

    c.bench_function("extract_keywords_main_rs", |b| {
        b.iter(|| extract_keywords(black_box(text)))
    });
}

criterion_group!(
    benches,
    bench_encode_all_schemes,
    bench_decode_binary,
    bench_new_puzzle,
    bench_guess_cycle,
    bench_extract_keywords
);
criterion_main!(benches);
