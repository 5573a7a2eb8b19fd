use criterion::{Criterion, black_box, criterion_group, criterion_main};
use numodem::{NumWriter, Radix};

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("i64_dec", |b| {
        let mut writer = NumWriter::new();
        b.iter(|| {
            let text = writer.write_i64(black_box(-8301034833169298228), Radix::Dec, 1);
            black_box(text.len())
        });
    });

    group.bench_function("f64_dec_shortest", |b| {
        let mut writer = NumWriter::new();
        b.iter(|| {
            let text = writer.write_f64(black_box(0.1234567890123), Radix::Dec, false);
            black_box(text.len())
        });
    });

    group.bench_function("f64_hex_exact", |b| {
        let mut writer = NumWriter::new();
        b.iter(|| {
            let text = writer.write_f64(black_box(0.1234567890123), Radix::Hex, false);
            black_box(text.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_formatting);
criterion_main!(benches);
