//! Configuração da demo via variáveis de ambiente.
//! Defaults reproduzem o cenário de referência (1000e18/1000e18, 2×100e18, 10·k).

use anyhow::{anyhow, Context, Result};

use crate::amm::simulation::Simulation;
use crate::amm::types::ReservePair;

pub const ENV_X: &str = "RESCALER_X";
pub const ENV_Y: &str = "RESCALER_Y";
pub const ENV_TRADES: &str = "RESCALER_TRADES";
pub const ENV_MULTIPLIER: &str = "RESCALER_MULTIPLIER";
pub const ENV_OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub x: f64,
    pub y: f64,
    pub trades: Vec<f64>,
    pub multiplier: f64,
    /// Sem endpoint, só logs locais (sem exportação OTLP).
    pub otlp_endpoint: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let sim = Simulation::default();
        Self {
            x: sim.reserves.x,
            y: sim.reserves.y,
            trades: sim.trades,
            multiplier: sim.multiplier,
            otlp_endpoint: None,
        }
    }
}

fn parse_f64(var: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("{var}: valor inválido {raw:?}"))
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração de uma fonte arbitrária (testes não tocam o ambiente do processo).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_X) {
            cfg.x = parse_f64(ENV_X, &raw)?;
        }
        if let Some(raw) = lookup(ENV_Y) {
            cfg.y = parse_f64(ENV_Y, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MULTIPLIER) {
            cfg.multiplier = parse_f64(ENV_MULTIPLIER, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TRADES) {
            cfg.trades = raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| parse_f64(ENV_TRADES, s))
                .collect::<Result<Vec<_>>>()?;
            if cfg.trades.is_empty() {
                return Err(anyhow!("{ENV_TRADES}: nenhuma trade informada"));
            }
        }
        cfg.otlp_endpoint = lookup(ENV_OTLP_ENDPOINT).filter(|s| !s.trim().is_empty());
        Ok(cfg)
    }

    pub fn simulation(&self) -> Simulation {
        Simulation {
            reserves: ReservePair::new(self.x, self.y),
            trades: self.trades.clone(),
            multiplier: self.multiplier,
        }
    }
}
