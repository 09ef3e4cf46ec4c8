//! Fluxo de demonstração: trades sequenciais cotadas contra o k reescalado.
//! Entre trades as reservas reais andam pela saída **ajustada**:
//! `x += dx`, `y -= adjusted`.

use tracing::info;

use super::error::{RescaleError, Result};
use super::error_catalog::RescaleErrorCode;
use super::guardrails::ensure_reserves;
use super::pricing::{quote_detailed, Quote};
use super::types::{ReservePair, Rescaled, DEFAULT_TARGET_MULTIPLIER};

/// Resultado de uma trade da sequência.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TradeReport {
    pub index: usize,
    pub amount_in: f64,
    pub reserves_before: ReservePair,
    pub rescaled: Rescaled,
    pub target: f64,
    pub quote: Quote,
}

impl TradeReport {
    /// Reservas depois de liquidar a trade pela saída ajustada.
    pub fn reserves_after(&self) -> ReservePair {
        ReservePair::new(
            self.reserves_before.x + self.amount_in,
            self.reserves_before.y - self.quote.adjusted,
        )
    }
}

/// Parâmetros da simulação. O default reproduz o cenário de referência:
/// reservas 1000e18/1000e18, duas trades de 100e18, alvo 10·k.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    pub reserves: ReservePair,
    pub trades: Vec<f64>,
    pub multiplier: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            reserves: ReservePair::new(1000e18, 1000e18),
            trades: vec![100e18, 100e18],
            multiplier: DEFAULT_TARGET_MULTIPLIER,
        }
    }
}

impl Simulation {
    pub fn run(&self) -> Result<Vec<TradeReport>> {
        simulate(self.reserves, &self.trades, self.multiplier)
    }
}

pub fn simulate(initial: ReservePair, trades: &[f64], multiplier: f64) -> Result<Vec<TradeReport>> {
    let mut reserves = initial;
    let mut reports = Vec::with_capacity(trades.len());

    for (index, &dx) in trades.iter().enumerate() {
        ensure_reserves(reserves.x, reserves.y)?;
        let target = reserves.k() * multiplier;
        let (rescaled, quote) = quote_detailed(reserves, dx, multiplier)?;
        info!(
            trade = index + 1,
            amount_in = dx,
            no_slippage = quote.no_slippage,
            unadjusted = quote.unadjusted,
            adjusted = quote.adjusted,
            factor = quote.factor,
            "trade cotada"
        );

        // liquidar pela curva ajustada não pode pagar a reserva inteira
        if quote.adjusted >= reserves.y {
            return Err(RescaleError::new(RescaleErrorCode::ReserveExhausted)
                .with_context("trade", index + 1)
                .with_context("amount_out", quote.adjusted)
                .with_context("reserve", reserves.y));
        }

        let report = TradeReport { index, amount_in: dx, reserves_before: reserves, rescaled, target, quote };
        reserves = report.reserves_after();
        reports.push(report);
    }

    Ok(reports)
}
