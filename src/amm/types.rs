//! Tipos básicos: reservas reais (f64), escala fixa (WAD) + U256 para intermediários.

use uint::construct_uint;
construct_uint! {
    /// Inteiro de 256 bits para contas intermediárias seguras.
    pub struct U256(4);
}

pub type Wad = u128;   // escala 1e18

pub const WAD: Wad = 1_000_000_000_000_000_000u128; // 1e18
pub const UNIT_SCALE: f64 = 1e18;                    // divisor de apresentação
pub const DEFAULT_TARGET_MULTIPLIER: f64 = 10.0;     // tk = 10·k no cenário de referência

/// Par de reservas de um pool (unidades base, ex.: `1000e18`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReservePair { pub x: f64, pub y: f64 }

impl ReservePair {
    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Invariante atual `k = x·y`.
    pub fn k(&self) -> f64 { self.x * self.y }

    /// Razão `x/y` (preço), preservada pela reescala.
    pub fn ratio(&self) -> f64 { self.x / self.y }
}

/// Resultado da reescala: novas reservas e o fator aplicado a ambas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rescaled { pub x: f64, pub y: f64, pub factor: f64 }

impl Rescaled {
    pub fn product(&self) -> f64 { self.x * self.y }

    pub fn reserves(&self) -> ReservePair { ReservePair::new(self.x, self.y) }
}

/// Versão em escala fixa: reservas reescaladas (floor) e fator em WAD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RescaledWad { pub x: Wad, pub y: Wad, pub factor_wad: Wad }

impl RescaledWad {
    pub fn product(&self) -> U256 { U256::from(self.x) * U256::from(self.y) }
}
