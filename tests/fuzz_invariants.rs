use proptest::prelude::*;
use invariant_rescaler::amm::rescale::{relative_invariant_error, rescale};
use invariant_rescaler::amm::pricing::quote;
use invariant_rescaler::amm::types::ReservePair;


#[inline]
fn rel(a: f64, b: f64) -> f64 { ((a - b) / b).abs() }


proptest! {
#![proptest_config(ProptestConfig { cases: 2_000, .. ProptestConfig::default() })]


#[test]
fn ratio_and_product_hold(
x in 1e3f64..1e24,
y in 1e3f64..1e24,
target in 1e6f64..1e50,
) {
let r = rescale(x, y, target).expect("rescale ok");

// (P1) razão preservada
let (before, after) = (ReservePair::new(x, y).ratio(), r.reserves().ratio());
prop_assert!(rel(after, before) < 1e-9, "ratio: {} vs {}", after, before);

// (P2) produto ≈ alvo
prop_assert!(relative_invariant_error(r.product(), target) < 1e-6,
"product={} target={} (x={}, y={})", r.product(), target, x, y);

// (P3) fator positivo e finito
prop_assert!(r.factor.is_finite() && r.factor > 0.0);
}


#[test]
fn rescale_is_idempotent(
x in 1e3f64..1e24,
y in 1e3f64..1e24,
target in 1e6f64..1e50,
) {
let r1 = rescale(x, y, target).expect("rescale ok");
let r2 = rescale(r1.x, r1.y, r1.product()).expect("rescale ok");
prop_assert_eq!(r2.factor, 1.0);
prop_assert_eq!((r2.x, r2.y), (r1.x, r1.y));
}


#[test]
fn larger_k_quotes_closer_to_reference(
x_base in 1u32..1_000_000u32,
y_base in 1u32..1_000_000u32,
dx_pct in 1u32..=50u32,
multiplier in 1.5f64..100.0,
) {
let (x, y) = (x_base as f64 * 1e18, y_base as f64 * 1e18);
let dx = x * dx_pct as f64 / 100.0;
let q = quote(ReservePair::new(x, y), dx, multiplier).expect("quote ok");

// (P4) unadjusted < adjusted < preço marginal
prop_assert!(q.unadjusted < q.adjusted, "{:?}", q);
prop_assert!(q.adjusted < q.at_spot, "{:?}", q);
}


#[test]
fn balanced_pool_adjusted_beats_unadjusted(
base in 1u32..1_000_000u32,
dx_pct in 1u32..=50u32,
multiplier in 1.5f64..100.0,
) {
let x = base as f64 * 1e18;
let dx = x * dx_pct as f64 / 100.0;
let q = quote(ReservePair::new(x, x), dx, multiplier).expect("quote ok");

// (P5) pool balanceado: ajustada mais perto da referência dx·x/y
prop_assert!(rel(q.no_slippage, dx) < 1e-15);
prop_assert!(q.improves(), "{:?}", q);
}
}
