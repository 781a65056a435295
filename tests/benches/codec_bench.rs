use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use msgseal::prelude::*;
use msgseal_tests::{random_message, rsa_pair, seeded_rng};

const RSA_PAYLOADS: [usize; 4] = [16, 32, 64, 100];
const ECC_PAYLOADS: [usize; 3] = [64, 1024, 100 * 1024];

fn bench_rsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSA-PKCS1v15");
    let mut rng = seeded_rng(40);

    for &bits in KeyPairFactory::supported_strengths(Algorithm::Rsa) {
        let pair = rsa_pair(bits);

        for size in RSA_PAYLOADS {
            let message = random_message(&mut rng, size);
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("encrypt/{}", bits), size),
                &message,
                |b, message| {
                    b.iter(|| RsaCodec::encrypt_text(black_box(message), pair.public_key(), &mut rng).unwrap());
                },
            );

            let sealed = RsaCodec::encrypt_text(&message, pair.public_key(), &mut rng).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("decrypt/{}", bits), size),
                &sealed,
                |b, sealed| {
                    b.iter(|| RsaCodec::decrypt_text(black_box(sealed), pair.private_key()).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_ecc(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECC-hybrid");
    let mut rng = seeded_rng(41);
    let codec = EccHybridCodec::new();

    for &bits in KeyPairFactory::supported_strengths(Algorithm::Ecc) {
        let pair = KeyPairFactory::generate_with_rng(Algorithm::Ecc, bits, &mut rng).unwrap();

        for size in ECC_PAYLOADS {
            let message = random_message(&mut rng, size);
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("encrypt/{}", bits), size),
                &message,
                |b, message| {
                    b.iter(|| {
                        codec
                            .encrypt_text(black_box(message), pair.public_key(), pair.private_key(), &mut rng)
                            .unwrap()
                    });
                },
            );

            let sealed = codec
                .encrypt_text(&message, pair.public_key(), pair.private_key(), &mut rng)
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("decrypt/{}", bits), size),
                &sealed,
                |b, sealed| {
                    b.iter(|| {
                        codec
                            .decrypt_text(black_box(sealed), pair.public_key(), pair.private_key())
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("keygen");
    group.sample_size(10);
    let mut rng = seeded_rng(42);

    for algorithm in [Algorithm::Rsa, Algorithm::Ecc] {
        for &bits in KeyPairFactory::supported_strengths(algorithm) {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), bits), &bits, |b, &bits| {
                b.iter(|| KeyPairFactory::generate_with_rng(algorithm, bits, &mut rng).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_rsa, bench_ecc, bench_keygen);
criterion_main!(benches);
