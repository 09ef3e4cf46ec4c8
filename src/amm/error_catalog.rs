//! Catálogo imutável de erros do rescaler.
use core::fmt;

/// Código de erro do rescaler.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RescaleErrorCode {
    /// Argumento não finito, zero ou negativo (reservas, alvo, fator).
    InvalidArgument,
    /// Montante de entrada zero em uma cotação.
    ZeroAmount,
    /// Resultado intermediário virou NaN/Inf/subnormal (overflow/underflow de f64).
    NonFiniteResult,
    /// Overflow em aritmética de escala fixa (U256/u128).
    OverflowNumeric,
    /// Saída liquidada maior ou igual à reserva disponível.
    ReserveExhausted,
}

impl RescaleErrorCode {
    /// Código textual estável do erro.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "RSC-0001",
            Self::ZeroAmount => "RSC-0002",
            Self::NonFiniteResult => "RSC-0003",
            Self::OverflowNumeric => "RSC-0004",
            Self::ReserveExhausted => "RSC-0005",
        }
    }

    /// Título curto em português.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Argumento inválido",
            Self::ZeroAmount => "Quantidade zerada",
            Self::NonFiniteResult => "Resultado não finito",
            Self::OverflowNumeric => "Overflow numérico",
            Self::ReserveExhausted => "Reserva esgotada",
        }
    }

    /// Mensagem base em português (aceita placeholders `{chave}`).
    pub const fn message_pt(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "{arg} deve ser finito e > 0 (recebido {value})",
            Self::ZeroAmount => "amount deve ser > 0",
            Self::NonFiniteResult => "resultado não finito ou subnormal em {stage}",
            Self::OverflowNumeric => "overflow/underflow numérico",
            Self::ReserveExhausted => "trade {trade}: saída {amount_out} esgota a reserva {reserve}",
        }
    }

    /// Retorna todas as variantes em ordem estável.
    pub fn all() -> &'static [RescaleErrorCode] {
        const ALL: &[RescaleErrorCode] = &[
            RescaleErrorCode::InvalidArgument,
            RescaleErrorCode::ZeroAmount,
            RescaleErrorCode::NonFiniteResult,
            RescaleErrorCode::OverflowNumeric,
            RescaleErrorCode::ReserveExhausted,
        ];
        ALL
    }
}

impl fmt::Display for RescaleErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Mensagem padrão na localidade ativa (pt-BR).
pub fn default_locale_message(code: RescaleErrorCode) -> &'static str {
    code.message_pt()
}
