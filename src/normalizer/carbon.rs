//! Coerção do valor de carbono.
//!
//! O dataset e as respostas do modelo entregam a emissão de carbono ora como
//! número, ora como texto livre ("2,5 kg CO₂/kg", vírgula decimal). A coerção
//! nunca falha: qualquer valor ilegível vira 0.0 com a flag `fallback`
//! marcada, para que a degradação fique visível a quem consome o valor.

use serde_json::Value;

/// kg de CO₂-equivalente por kg de material.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarbonValue {
    pub kg_per_kg: f64,
    /// Verdadeiro quando o valor de origem não pôde ser lido e 0.0 foi
    /// assumido no lugar.
    pub fallback: bool,
}

impl CarbonValue {
    pub fn exact(kg_per_kg: f64) -> Self {
        Self {
            kg_per_kg,
            fallback: false,
        }
    }

    pub fn missing() -> Self {
        Self {
            kg_per_kg: 0.0,
            fallback: true,
        }
    }
}

/// Coage um campo JSON (número ou string) em [`CarbonValue`].
pub fn parse_carbon(value: &Value) -> CarbonValue {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() && v >= 0.0 => CarbonValue::exact(v),
            _ => CarbonValue::missing(),
        },
        Value::String(s) => parse_carbon_text(s),
        _ => CarbonValue::missing(),
    }
}

/// Lê o primeiro token numérico de um texto como "2,5 kg CO₂/kg".
pub fn parse_carbon_text(text: &str) -> CarbonValue {
    let token = match text.split_whitespace().next() {
        Some(t) => t.replace(',', "."),
        None => return CarbonValue::missing(),
    };

    match token.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => CarbonValue::exact(v),
        _ => CarbonValue::missing(),
    }
}
