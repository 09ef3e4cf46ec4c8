//! Funções puras de cotação (CPMM x·y=k, sem taxa).
//! - amount_out: curva sem ajuste, `y·dx/(x+dx)`
//! - amount_out_scaled: mesma curva sobre reservas multiplicadas pelo fator
//! - amount_out_no_slippage: referência sem slippage do cenário, `dx·x/y`
//! - amount_out_at_spot: `dx` convertido ao preço marginal `y/x`
//! - get_amount_out_wad: escala fixa, arredondando a favor do pool

use super::error::Result;
use super::guardrails::{
    ceil_div_u256, ensure_amount, ensure_finite, ensure_nonzero_wad, ensure_positive,
    ensure_reserves, overflow,
};
use super::types::{Wad, U256};

/// Saída ao enviar `dx` de X e receber Y na curva `x·y=k`.
pub fn amount_out(x: f64, y: f64, dx: f64) -> Result<f64> {
    ensure_reserves(x, y)?;
    ensure_amount(dx)?;
    ensure_finite("amount_out", y * dx / (x + dx))
}

/// Saída "sem slippage" de referência: `dx·x/y`.
/// Coincide com o preço marginal só em pools balanceados; ver `amount_out_at_spot`.
pub fn amount_out_no_slippage(x: f64, y: f64, dx: f64) -> Result<f64> {
    ensure_reserves(x, y)?;
    ensure_amount(dx)?;
    ensure_finite("no_slippage", dx * x / y)
}

/// `dx` convertido ao preço marginal `y/x` (limite de `amount_out` para dx→0).
pub fn amount_out_at_spot(x: f64, y: f64, dx: f64) -> Result<f64> {
    ensure_reserves(x, y)?;
    ensure_amount(dx)?;
    ensure_finite("at_spot", dx * y / x)
}

/// Saída na curva reescalada: `(y·f·dx) / (x·f + dx)`.
/// As reservas reais não mudam; só o k usado na cotação.
pub fn amount_out_scaled(x: f64, y: f64, dx: f64, factor: f64) -> Result<f64> {
    ensure_reserves(x, y)?;
    ensure_amount(dx)?;
    ensure_positive("factor", factor)?;
    ensure_finite("amount_out_scaled", (y * factor * dx) / (x * factor + dx))
}

/// `out = y - ceil(x·y / (x+dx))` em 256 bits.
pub fn get_amount_out_wad(x: Wad, y: Wad, dx: Wad) -> Result<Wad> {
    ensure_nonzero_wad("x", x)?;
    ensure_nonzero_wad("y", y)?;
    ensure_nonzero_wad("amount", dx)?;

    let x1 = x.checked_add(dx).ok_or_else(|| overflow("x+dx"))?;
    let k = U256::from(x) * U256::from(y);
    // y* <= y porque x1 > x
    let y_star = ceil_div_u256(k, U256::from(x1)).as_u128();
    y.checked_sub(y_star).ok_or_else(|| overflow("y-y*"))
}
