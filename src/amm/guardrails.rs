//! Validações e helpers numéricos seguros para o rescaler.
//! Objetivo: entradas seguras e nenhum NaN/Inf devolvido ao chamador.

use super::error::{RescaleError, Result};
use super::error_catalog::RescaleErrorCode;
use super::types::{Wad, U256};

/// Exige `v` finito e estritamente positivo.
#[inline]
pub fn ensure_positive(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(RescaleError::invalid_argument(name, v))
    }
}

#[inline]
pub fn ensure_reserves(x: f64, y: f64) -> Result<()> {
    ensure_positive("x", x)?;
    ensure_positive("y", y)
}

/// Montante de entrada: zero tem código próprio, o resto cai em argumento inválido.
#[inline]
pub fn ensure_amount(dx: f64) -> Result<()> {
    if dx == 0.0 {
        return Err(RescaleError::new(RescaleErrorCode::ZeroAmount).with_context("amount", dx));
    }
    ensure_positive("amount", dx)
}

/// Resultado intermediário: normal e > 0, senão `NonFiniteResult` com o estágio.
/// Subnormais perdem precisão relativa e também são rejeitados.
#[inline]
pub fn ensure_finite(stage: &str, v: f64) -> Result<f64> {
    if v.is_normal() && v > 0.0 {
        Ok(v)
    } else {
        Err(RescaleError::new(RescaleErrorCode::NonFiniteResult)
            .with_context("stage", stage)
            .with_context("value", v))
    }
}

#[inline]
pub fn ensure_nonzero_wad(name: &str, v: Wad) -> Result<()> {
    if v == 0 {
        Err(RescaleError::invalid_argument(name, v))
    } else {
        Ok(())
    }
}

#[inline]
pub fn overflow(stage: &str) -> RescaleError {
    RescaleError::new(RescaleErrorCode::OverflowNumeric).with_context("stage", stage)
}

#[inline]
pub fn u256_to_u128_checked(v: U256) -> Result<Wad> {
    if v > U256::from(u128::MAX) {
        Err(overflow("u256->u128"))
    } else {
        Ok(v.as_u128())
    }
}

/// (n + d - 1) / d, assumindo d>0
#[inline]
pub fn ceil_div_u256(n: U256, d: U256) -> U256 {
    (n + (d - U256::from(1u8))) / d
}

/// `floor(sqrt(n))` por busca binária em U256.
pub fn isqrt_u256(n: U256) -> U256 {
    if n.is_zero() { return U256::from(0u8); }
    let mut low = U256::from(0u8);
    let mut high = n;
    while low < high {
        let mid = (low + high + U256::from(1u8)) >> 1; // ceil((low+high)/2)
        // evitar overflow: mid*mid <= n  <=>  mid <= n/mid
        if mid <= n / mid { low = mid; } else { high = mid - U256::from(1u8); }
    }
    low
}
