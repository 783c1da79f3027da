use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sha3_lamport_signatures::{Configuration, PrivateKey};

fn criterion_benchmark(c: &mut Criterion) {
    let config = Configuration::default();
    let to_sign = vec![0u8; 1000000];
    let to_sign: &[u8] = &to_sign;

    c.bench_function("generate", |b| {
        b.iter(|| PrivateKey::generate(black_box(config)).unwrap())
    });

    let private_key = PrivateKey::generate(config).unwrap();
    c.bench_function("public_key", |b| b.iter(|| private_key.public_key()));

    c.bench_function("signature", |b| {
        b.iter_batched(
            || PrivateKey::generate(config).unwrap(),
            |private_key| private_key.sign(black_box(to_sign)).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let public_key = private_key.public_key();
    let signature = private_key.sign(to_sign).unwrap();
    c.bench_function("verify", |b| {
        b.iter(|| public_key.verify(black_box(to_sign), &signature).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
