//! Extração de JSON da resposta do modelo.
//!
//! A resposta é texto livre que normalmente, mas nem sempre, contém um
//! objeto JSON: às vezes puro, às vezes num bloco ```json, às vezes no meio
//! de prosa. A extração é lossy e de melhor esforço: todo campo é opcional e
//! qualquer carga malformada degrada para `None`, nunca para erro.

use crate::dataset::{MaterialRecord, ReuseIdeas};
use crate::normalizer::carbon::parse_carbon;
use serde::Deserialize;
use serde_json::Value;

/// Visão com todos os campos opcionais de uma resposta do modelo. Nada aqui
/// é confiável antes da coerção em [`RawMaterialData::into_record`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMaterialData {
    pub nome: String,
    pub carbono: Value,
    pub organico: bool,
    pub reciclavel: bool,
    pub decomposicao: String,
    pub formas_de_reutilizacao: ReuseIdeas,
}

impl RawMaterialData {
    /// Coage os campos num registro renderizável. Nome ausente vira
    /// "Material"; carbono ilegível vira 0.0 com a flag de fallback.
    pub fn into_record(self) -> MaterialRecord {
        let name = if self.nome.trim().is_empty() {
            "Material".to_string()
        } else {
            self.nome.trim().to_string()
        };

        MaterialRecord {
            name,
            carbon: parse_carbon(&self.carbono),
            organic: self.organico,
            recyclable: self.reciclavel,
            decomposition: self.decomposicao,
            reuse_ideas: self.formas_de_reutilizacao,
        }
    }
}

/// Extrai e desserializa o primeiro objeto JSON plausível da resposta.
pub fn extract_raw(response: &str) -> Option<RawMaterialData> {
    if let Some(block) = fenced_block(response) {
        if let Ok(raw) = serde_json::from_str(block) {
            return Some(raw);
        }
    }

    let span = brace_span(response)?;
    serde_json::from_str(span).ok()
}

/// Conteúdo de um bloco ```json ... ```, se existir.
fn fenced_block(response: &str) -> Option<&str> {
    let start_marker = response.find("```json")?;
    let start = start_marker + "```json".len();
    let end = response[start..].find("```")?;
    let block = response[start..start + end].trim();
    (!block.is_empty()).then_some(block)
}

/// Trecho entre a primeira `{` e a última `}`.
fn brace_span(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end >= start).then(|| &response[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_bare_object_in_prose() {
        let response = r#"Here you go: {"carbono": 2.5} thanks"#;
        let raw = extract_raw(response).unwrap();
        assert_eq!(raw.carbono, json!(2.5));
        assert_eq!(raw.nome, "");
        assert!(!raw.organico);
    }

    #[test]
    fn test_extract_fenced_block() {
        let response = "Análise concluída:\n```json\n{\"nome\": \"vidro\", \"reciclavel\": true}\n```\nEspero ter ajudado.";
        let raw = extract_raw(response).unwrap();
        assert_eq!(raw.nome, "vidro");
        assert!(raw.reciclavel);
    }

    #[test]
    fn test_no_braces_returns_none() {
        assert!(extract_raw("Não consegui identificar o material.").is_none());
        assert!(extract_raw("").is_none());
    }

    #[test]
    fn test_malformed_json_returns_none() {
        assert!(extract_raw("{nome: vidro, sem aspas}").is_none());
        assert!(extract_raw("resultado: { \"nome\": }").is_none());
    }

    #[test]
    fn test_malformed_fence_falls_back_to_braces() {
        let response = "```json\nnada útil\n```\n{\"nome\": \"papel\"}";
        let raw = extract_raw(response).unwrap();
        assert_eq!(raw.nome, "papel");
    }

    #[test]
    fn test_into_record_defaults() {
        let record = RawMaterialData::default().into_record();
        assert_eq!(record.name, "Material");
        assert_eq!(record.carbon.kg_per_kg, 0.0);
        assert!(record.carbon.fallback);
        assert!(record.reuse_ideas.is_empty());
    }

    #[test]
    fn test_into_record_full_reply() {
        let response = r#"{
            "nome": "Garrafa PET",
            "carbono": "6,0 kg CO₂/kg",
            "organico": false,
            "reciclavel": true,
            "decomposicao": "mais de 400 anos",
            "formas_de_reutilizacao": ["regador", "vaso"]
        }"#;
        let record = extract_raw(response).unwrap().into_record();
        assert_eq!(record.name, "Garrafa PET");
        assert_eq!(record.carbon.kg_per_kg, 6.0);
        assert!(!record.carbon.fallback);
        assert!(record.recyclable);
        assert_eq!(record.reuse_ideas.lines(), vec!["regador", "vaso"]);
    }
}
