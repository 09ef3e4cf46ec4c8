//! Reescala do invariante x·y=k para um alvo `tk`, preservando a razão x/y.
//! - `rescale`: fator `sqrt(tk/k)` aplicado às duas reservas (f64)
//! - `rescale_by`: alvo dado como múltiplo do k atual
//! - `rescale_wad`: mesma transformação em escala fixa (U256, floor)
//!
//! Pós-condição aproximada: `x'·y' ≈ tk` com erro relativo limitado pelo
//! arredondamento de f64; nunca se compara por igualdade exata.

use tracing::debug;

use super::error::{RescaleError, Result};
use super::guardrails::{
    ensure_finite, ensure_nonzero_wad, ensure_positive, ensure_reserves, isqrt_u256, overflow,
    u256_to_u128_checked,
};
use super::types::{Rescaled, RescaledWad, Wad, U256, WAD};
use crate::telemetry;

/// Erro relativo `|achieved - target| / target`.
#[inline]
pub fn relative_invariant_error(achieved: f64, target: f64) -> f64 {
    ((achieved - target) / target).abs()
}

/// Reescala `(x, y)` para que `x'·y' ≈ target` com `x'/y' = x/y`.
///
/// Usa `factor = sqrt(target / k)` em vez de `sqrt(target) / sqrt(k)`.
/// Entradas zero, negativas ou não finitas falham com `InvalidArgument`.
pub fn rescale(x: f64, y: f64, target: f64) -> Result<Rescaled> {
    ensure_reserves(x, y)?;
    ensure_positive("target", target)?;

    let k = ensure_finite("k", x * y)?;
    // a razão é checada antes da raiz: sqrt esconderia um tk/k subnormal
    let scale = ensure_finite("factor", target / k)?;
    let factor = ensure_finite("factor", scale.sqrt())?;
    let new_x = ensure_finite("x'", x * factor)?;
    let new_y = ensure_finite("y'", y * factor)?;

    let achieved = new_x * new_y;
    let rel_err = relative_invariant_error(achieved, target);
    debug!(x = new_x, y = new_y, k = achieved, tk = target, factor, rel_err, "invariante reescalado");
    telemetry::record_rescale(factor, rel_err);

    Ok(Rescaled { x: new_x, y: new_y, factor })
}

/// Reescala para `target = multiplier · x·y`.
pub fn rescale_by(x: f64, y: f64, multiplier: f64) -> Result<Rescaled> {
    ensure_reserves(x, y)?;
    ensure_positive("multiplier", multiplier)?;
    let k = ensure_finite("k", x * y)?;
    let target = ensure_finite("target", k * multiplier)?;
    rescale(x, y, target)
}

/// Versão em escala fixa: `x' = floor(sqrt(tk·x/y))`, `y' = floor(sqrt(tk·y/x))`.
/// Garante `x'·y' <= tk`. O fator é `floor(x'·WAD/x)`.
pub fn rescale_wad(x: Wad, y: Wad, target: U256) -> Result<RescaledWad> {
    ensure_nonzero_wad("x", x)?;
    ensure_nonzero_wad("y", y)?;
    if target.is_zero() {
        return Err(RescaleError::invalid_argument("target", target));
    }

    let (xu, yu) = (U256::from(x), U256::from(y));
    let rx = target.checked_mul(xu).ok_or_else(|| overflow("tk*x"))? / yu;
    let ry = target.checked_mul(yu).ok_or_else(|| overflow("tk*y"))? / xu;

    let new_x = u256_to_u128_checked(isqrt_u256(rx))?;
    let new_y = u256_to_u128_checked(isqrt_u256(ry))?;
    if new_x == 0 || new_y == 0 {
        return Err(overflow("x'/y' underflow"));
    }

    let factor_wad = u256_to_u128_checked(U256::from(new_x) * U256::from(WAD) / xu)?;
    debug!(x = new_x, y = new_y, factor_wad, "invariante reescalado (wad)");

    Ok(RescaledWad { x: new_x, y: new_y, factor_wad })
}
