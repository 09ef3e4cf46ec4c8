//! `error_map` classifica os inputs com o mesmo código que a operação devolve.
use proptest::prelude::*;
use invariant_rescaler::amm::error_catalog::RescaleErrorCode;
use invariant_rescaler::amm::error_map::{from_rescale_inputs, from_swap_inputs, to_error};
use invariant_rescaler::amm::rescale::rescale;
use invariant_rescaler::amm::swap::amount_out;


fn rescale_code(x: f64, y: f64, t: f64) -> Option<RescaleErrorCode> {
rescale(x, y, t).err().map(|e| e.code)
}


#[test]
fn rescale_table_agrees() {
let cases: [(&str, f64, f64, f64); 10] = [
("ok:10x", 1000e18, 1000e18, 1e43),
("ok:shrink", 1000e18, 100e18, 1e18),
("zero:x", 0.0, 1e18, 1e36),
("neg:y", 1e18, -1.0, 1e36),
("zero:tk", 1e18, 1e18, 0.0),
("nan:tk", 1e18, 1e18, f64::NAN),
("inf:x", f64::INFINITY, 1e18, 1e36),
("overflow:k", 1e200, 1e200, 1.0),
("subnormal:k", 1e-160, 1e-161, 1e-14),
("subnormal:tk/k", 1e10, 1e10, 1e-302),
];
for (name, x, y, t) in cases {
assert_eq!(from_rescale_inputs(x, y, t), rescale_code(x, y, t), "{}", name);
}
}


#[test]
fn swap_table_agrees() {
let cases: [(&str, f64, f64, f64); 5] = [
("ok", 1000e18, 1000e18, 100e18),
("zero:dx", 1000e18, 1000e18, 0.0),
("neg:dx", 1000e18, 1000e18, -1.0),
("zero:x+dx", 0.0, 1000e18, 0.0),
("nan:y", 1000e18, f64::NAN, 1.0),
];
for (name, x, y, dx) in cases {
let got = amount_out(x, y, dx).err().map(|e| e.code);
assert_eq!(from_swap_inputs(x, y, dx), got, "{}", name);
}
}


#[test]
fn to_error_matches_operation_error() {
let err = rescale(1e18, 1e18, 0.0).unwrap_err();
assert_eq!(to_error(err.code).code, err.code);
}


proptest! {
#![proptest_config(ProptestConfig { cases: 2_000, .. ProptestConfig::default() })]


#[test]
fn rescale_codes_agree_over_exponents(
ex in -200i32..200,
ey in -200i32..200,
et in -320i32..300,
mx in 1.0f64..10.0,
) {
let (x, y, t) = (mx * 10f64.powi(ex), 10f64.powi(ey), 10f64.powi(et));
prop_assert_eq!(from_rescale_inputs(x, y, t), rescale_code(x, y, t),
"x={} y={} t={}", x, y, t);
}
}
