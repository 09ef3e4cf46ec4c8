//! Tipo de erro unificado do rescaler com formatação estável.
use core::fmt;
use core::fmt::Write as _;
use std::collections::BTreeMap;

use crate::amm::error_catalog::{default_locale_message, RescaleErrorCode};

const CONTEXT_VALUE_MAX: usize = 256;

/// Uma linha só, no máximo `CONTEXT_VALUE_MAX` chars (com reticências).
fn sanitize_value(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r' | '\t') { ' ' } else { ch })
        .collect();
    if cleaned.chars().count() <= CONTEXT_VALUE_MAX {
        return cleaned;
    }
    let mut truncated: String = cleaned.chars().take(CONTEXT_VALUE_MAX - 1).collect();
    truncated.push('…');
    truncated
}

fn push_json_str(out: &mut String, input: &str) {
    out.push('"');
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Substitui `{chave}` pelo contexto; chaves desconhecidas ficam como estão.
fn render_template(template: &str, context: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rendered.push_str(&rest[open..]);
            return rendered;
        };
        let key = &after[..close];
        match context.get(key) {
            Some(value) if !key.is_empty() => rendered.push_str(value),
            _ => {
                rendered.push('{');
                rendered.push_str(key);
                rendered.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    rendered.push_str(rest);
    rendered
}

/// Erro do rescaler com contexto estruturado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescaleError {
    pub code: RescaleErrorCode,
    pub context: BTreeMap<String, String>,
}

impl RescaleError {
    /// Cria um novo erro sem contexto adicional.
    pub fn new(code: RescaleErrorCode) -> Self {
        Self {
            code,
            context: BTreeMap::new(),
        }
    }

    /// Adiciona um par chave/valor ao contexto.
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let key_string = key.into();
        if !key_string.is_empty() {
            let sanitized = sanitize_value(&value.to_string());
            self.context.insert(key_string, sanitized);
        }
        self
    }

    /// Atalho para argumento inválido nomeando o parâmetro e o valor recebido.
    pub fn invalid_argument<V: ToString>(arg: &str, value: V) -> Self {
        Self::new(RescaleErrorCode::InvalidArgument)
            .with_context("arg", arg)
            .with_context("value", value)
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == RescaleErrorCode::InvalidArgument
    }

    fn resolved_message(&self) -> String {
        let template = default_locale_message(self.code);
        render_template(template, &self.context)
    }

    /// Mensagem curta para UI.
    pub fn to_user_string(&self) -> String {
        let message = self.resolved_message();
        format!("[{}] {}", self.code.code(), message)
    }

    /// Renderiza um template arbitrário usando o contexto atual.
    pub fn render_with_template(&self, template: &str) -> String {
        render_template(template, &self.context)
    }

    /// Serialização estável em JSON para logs (chaves do contexto ordenadas).
    pub fn to_log_json(&self) -> String {
        let mut json = String::from("{\"code\":");
        push_json_str(&mut json, self.code.code());
        json.push_str(",\"title\":");
        push_json_str(&mut json, self.code.title());
        json.push_str(",\"message\":");
        push_json_str(&mut json, &self.resolved_message());
        json.push_str(",\"context\":{");
        for (i, (key, value)) in self.context.iter().enumerate() {
            if i > 0 {
                json.push(',');
            }
            push_json_str(&mut json, key);
            json.push(':');
            push_json_str(&mut json, value);
        }
        json.push_str("}}");
        json
    }
}

impl fmt::Display for RescaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}

impl std::error::Error for RescaleError {}

/// Resultado padrão para operações do rescaler.
pub type Result<T> = std::result::Result<T, RescaleError>;

#[macro_export]
macro_rules! rescale_err {
  ($code:expr) => {{
    $crate::amm::error::RescaleError::new($code)
  }};
  ($code:expr, $($key:ident => $value:expr),+ $(,)?) => {{
    let mut err = $crate::amm::error::RescaleError::new($code);
    $(
      err = err.with_context(stringify!($key), $value);
    )+
    err
  }};
  ($code:expr, { $($key:expr => $value:expr),+ $(,)? }) => {{
    let mut err = $crate::amm::error::RescaleError::new($code);
    $(
      err = err.with_context($key, $value);
    )+
    err
  }};
  ($code:expr, $($key:expr => $value:expr),+ $(,)?) => {{
    let mut err = $crate::amm::error::RescaleError::new($code);
    $(
      err = err.with_context($key, $value);
    )+
    err
  }};
}

#[macro_export]
macro_rules! rescale_bail {
  ($($tt:tt)*) => {
    return Err($crate::rescale_err!($($tt)*));
  };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_string_basic() {
        let err = RescaleError::new(RescaleErrorCode::ZeroAmount);
        assert_eq!(err.to_user_string(), "[RSC-0002] amount deve ser > 0");
    }

    #[test]
    fn invalid_argument_resolves_placeholders() {
        let err = RescaleError::invalid_argument("target", 0);
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_user_string(),
            "[RSC-0001] target deve ser finito e > 0 (recebido 0)"
        );
    }

    #[test]
    fn placeholder_subst() {
        let err = RescaleError::new(RescaleErrorCode::OverflowNumeric).with_context("detalhe", "valor");
        let rendered = err.render_with_template("falha {detalhe}");
        assert_eq!(rendered, "falha valor");
    }

    #[test]
    fn log_json_shape() {
        let err = RescaleError::new(RescaleErrorCode::NonFiniteResult).with_context("stage", "factor");
        let json = err.to_log_json();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"code\":\"RSC-0003\""));
        assert!(json.contains("\"message\":\"resultado não finito ou subnormal em factor\""));
        assert!(json.contains("\"context\":{\"stage\":\"factor\"}"));
    }

    #[test]
    fn macros_variants() {
        let err = rescale_err!(RescaleErrorCode::ZeroAmount, amount => 0);
        assert_eq!(err.code, RescaleErrorCode::ZeroAmount);
        assert_eq!(err.context.get("amount").unwrap(), "0");

        let err_block = rescale_err!(RescaleErrorCode::InvalidArgument, { "arg" => "x", "value" => -1 });
        assert_eq!(err_block.code, RescaleErrorCode::InvalidArgument);
        assert_eq!(err_block.context.get("value").unwrap(), "-1");
    }

    #[test]
    fn bail_returns_early() {
        fn check(v: f64) -> Result<f64> {
            if v <= 0.0 {
                rescale_bail!(RescaleErrorCode::InvalidArgument, arg => "v", value => v);
            }
            Ok(v)
        }
        assert_eq!(check(2.0).unwrap(), 2.0);
        assert!(check(-1.0).unwrap_err().is_invalid_argument());
    }
}
