//! Apresentação legível das trades (valores divididos por 1e18).

use core::fmt::Write as _;

use super::simulation::TradeReport;
use super::types::UNIT_SCALE;

#[inline]
pub fn to_units(v: f64) -> f64 { v / UNIT_SCALE }

/// Arredonda para 2 casas (usado na saída não ajustada).
#[inline]
fn round2(v: f64) -> f64 { (v * 100.0).round() / 100.0 }

pub fn render_trade(report: &TradeReport) -> String {
    let r = &report.rescaled;
    let q = &report.quote;
    let mut out = String::new();
    let _ = writeln!(out, "trade {}: amount in {}", report.index + 1, to_units(report.amount_in));
    let _ = writeln!(out, "x := {}", r.x);
    let _ = writeln!(out, "y := {}", r.y);
    let _ = writeln!(out, "k {} := tk {}", r.product(), report.target);
    let _ = writeln!(out, "no slippage amount out: {}", to_units(q.no_slippage));
    let _ = writeln!(out, "unadjusted amount out: {:.2}", round2(to_units(q.unadjusted)));
    let _ = writeln!(out, "adjusted amount out: {}", to_units(q.adjusted));
    out
}

pub fn render_simulation(reports: &[TradeReport]) -> String {
    reports.iter().map(render_trade).collect::<Vec<_>>().join("\n")
}
