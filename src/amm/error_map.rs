//! Mapeamento entre condições de domínio e códigos de erro do rescaler.
use crate::amm::error::RescaleError;
use crate::amm::error_catalog::RescaleErrorCode;

#[inline]
fn is_valid(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Intermediários também precisam ser normais (subnormal perde precisão).
#[inline]
fn is_normal_positive(v: f64) -> bool {
    v.is_normal() && v > 0.0
}

/// Determina o código de erro de uma reescala a partir dos inputs brutos,
/// sem executar a conta. `None` quando a reescala é computável.
pub fn from_rescale_inputs(x: f64, y: f64, target: f64) -> Option<RescaleErrorCode> {
    if !is_valid(x) || !is_valid(y) || !is_valid(target) {
        return Some(RescaleErrorCode::InvalidArgument);
    }
    let k = x * y;
    let scale = target / k;
    let factor = scale.sqrt();
    let intermediates = [k, scale, factor, x * factor, y * factor];
    if !intermediates.iter().all(|&v| is_normal_positive(v)) {
        return Some(RescaleErrorCode::NonFiniteResult);
    }
    None
}

/// Determina o código de erro de uma cotação x·y=k.
/// Mesma ordem de checagem de `swap::amount_out`: reservas, depois montante.
pub fn from_swap_inputs(x: f64, y: f64, dx: f64) -> Option<RescaleErrorCode> {
    if !is_valid(x) || !is_valid(y) {
        return Some(RescaleErrorCode::InvalidArgument);
    }
    if dx == 0.0 {
        return Some(RescaleErrorCode::ZeroAmount);
    }
    if !is_valid(dx) {
        return Some(RescaleErrorCode::InvalidArgument);
    }
    None
}

/// Constrói um [`RescaleError`] diretamente de um código.
pub fn to_error(code: RescaleErrorCode) -> RescaleError {
    RescaleError::new(code)
}
