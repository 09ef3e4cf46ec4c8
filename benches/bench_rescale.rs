use std::time::Duration;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use invariant_rescaler::amm::rescale::{rescale, rescale_wad};
use invariant_rescaler::amm::types::{Wad, WAD};
use invariant_rescaler::U256;


fn bench_rescale(c: &mut Criterion) {
let mut g = c.benchmark_group("rescale");
g.warm_up_time(Duration::from_secs(2));
g.measurement_time(Duration::from_secs(5));
g.sample_size(300);
g.throughput(Throughput::Elements(1));


let cases: [(&str, f64, f64, f64); 3] = [
("sym_10x", 1000e18, 1000e18, 1e43),
("asym_shrink", 1000e18, 100e18, 1e18),
("large", 5e27, 5e27, 2.5e56),
];


for (label, x, y, tk) in cases {
g.bench_function(label, |b| {
b.iter(|| {
let r = rescale(black_box(x), black_box(y), black_box(tk)).unwrap();
black_box(r);
});
});
}


let (xw, yw): (Wad, Wad) = (1000 * WAD, 1000 * WAD);
let tk = U256::from(xw) * U256::from(yw) * U256::from(10u8);
g.bench_function("wad_sym_10x", |b| {
b.iter(|| {
let r = rescale_wad(black_box(xw), black_box(yw), black_box(tk)).unwrap();
black_box(r);
});
});


g.finish();
}


criterion_group!(benches, bench_rescale);
criterion_main!(benches);
