//! Cotação comparativa (sem slippage / sem ajuste / reescalada) e slippage relativo.

use super::error::Result;
use super::guardrails::{ensure_amount, ensure_positive};
use super::rescale::rescale_by;
use super::swap::{amount_out, amount_out_at_spot, amount_out_no_slippage, amount_out_scaled};
use super::types::{ReservePair, Rescaled};

/// As três saídas de uma mesma trade + o fator usado na curva ajustada.
/// `at_spot` é o teto ao preço marginal, útil em pools desbalanceados.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub no_slippage: f64,
    pub at_spot: f64,
    pub unadjusted: f64,
    pub adjusted: f64,
    pub factor: f64,
}

impl Quote {
    pub fn unadjusted_slippage(&self) -> f64 { slippage(self.no_slippage, self.unadjusted) }

    pub fn adjusted_slippage(&self) -> f64 { slippage(self.no_slippage, self.adjusted) }

    /// A curva reescalada chega mais perto da referência que a curva sem ajuste?
    pub fn improves(&self) -> bool {
        (self.no_slippage - self.adjusted).abs() < (self.no_slippage - self.unadjusted).abs()
    }
}

/// Slippage relativo `(referência - real) / referência`, nunca negativo.
pub fn slippage(reference: f64, actual: f64) -> f64 {
    if reference <= 0.0 || actual >= reference {
        return 0.0;
    }
    (reference - actual) / reference
}

/// Cota `dx` de X→Y com o k reescalado para `multiplier · k`.
/// Devolve também o resultado da reescala para apresentação.
pub fn quote_detailed(reserves: ReservePair, dx: f64, multiplier: f64) -> Result<(Rescaled, Quote)> {
    ensure_amount(dx)?;
    ensure_positive("multiplier", multiplier)?;
    let ReservePair { x, y } = reserves;

    let rescaled = rescale_by(x, y, multiplier)?;
    let q = Quote {
        no_slippage: amount_out_no_slippage(x, y, dx)?,
        at_spot: amount_out_at_spot(x, y, dx)?,
        unadjusted: amount_out(x, y, dx)?,
        adjusted: amount_out_scaled(x, y, dx, rescaled.factor)?,
        factor: rescaled.factor,
    };
    Ok((rescaled, q))
}

pub fn quote(reserves: ReservePair, dx: f64, multiplier: f64) -> Result<Quote> {
    quote_detailed(reserves, dx, multiplier).map(|(_, q)| q)
}
