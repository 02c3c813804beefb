use binfile::binary_file::BinaryFile;
use binfile::binary_helper::{extract_nibbles_from_integer, is_bit_set};
use binfile::memory_store::MemoryStore;
use binfile::Endian;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_values(c: &mut Criterion) {
    let mut file = BinaryFile::new(MemoryStore::new(vec![0u8; 4096]));

    let mut group = c.benchmark_group("BinaryFile");

    for endian in [Endian::Little, Endian::Big] {
        let name = format!("{:?}", endian);

        group.bench_with_input(BenchmarkId::new("set_get_short", &name), &endian, |b, &e| {
            b.iter(|| {
                file.set_short(black_box(128), black_box(0xBEEF), e).unwrap();
                file.get_short(black_box(128), e).unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("set_get_integer", &name), &endian, |b, &e| {
            b.iter(|| {
                file.set_integer(black_box(256), black_box(0xDEAD_BEEF), e)
                    .unwrap();
                file.get_integer(black_box(256), e).unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_byte_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("ByteRuns");

    for size in &[16usize, 64, 256, 1024] {
        let mut data = vec![0x41u8; *size];
        data.push(0x00);
        let mut file = BinaryFile::new(MemoryStore::new(data));

        group.bench_with_input(BenchmarkId::new("get_bytes", size), size, |b, &size| {
            b.iter(|| file.get_bytes(black_box(0), size).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("until_terminator", size), size, |b, &_size| {
            b.iter(|| {
                file.get_bytes_as_string_until_terminator(black_box(0), 0x00)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("BinaryHelper");

    group.bench_function("is_bit_set", |b| {
        b.iter(|| is_bit_set(black_box(0b1010_1010), black_box(4)).unwrap())
    });

    group.bench_function("extract_nibbles_from_integer", |b| {
        b.iter(|| extract_nibbles_from_integer(black_box(0x1234_5678)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_values, benchmark_byte_runs, benchmark_helpers);
criterion_main!(benches);
