use criterion::{Criterion, criterion_group, criterion_main};
use pointnorm::{Dataset, Method, Reader, Record};
use std::hint::black_box;

fn dataset(n: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.01;
            Record::new(t.cos() * t, t.sin() * t, t, (i % 17) as f64)
        })
        .collect()
}

fn text(n: usize) -> String {
    let mut text = String::from("x,y,z,size\n");
    for record in dataset(n).iter() {
        text.push_str(&format!("{},{},{},{}\n", record.x, record.y, record.z, record.size));
    }
    text
}

fn bench(c: &mut Criterion) {
    let reader = Reader::default();
    for n in [100, 10_000] {
        let text = text(n);
        let _ = c.bench_function(&format!("read_{n}"), |b| {
            b.iter(|| reader.read_str(black_box(&text)).unwrap())
        });
        let data = dataset(n);
        let _ = c.bench_function(&format!("min_max_{n}"), |b| {
            b.iter(|| pointnorm::normalize(black_box(&data), Method::MinMax))
        });
        let _ = c.bench_function(&format!("centered_{n}"), |b| {
            b.iter(|| pointnorm::normalize(black_box(&data), Method::CenteredMaxAbs))
        });
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
