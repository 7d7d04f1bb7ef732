//! Dataset estático de materiais (fluxo de busca local).
//!
//! Formato do arquivo: um objeto JSON, chave = nome do material, valor =
//! `{ carbono, organico, reciclavel, decomposicao, formas_de_reutilizacao }`.
//! `carbono` pode ser número ou texto; `formas_de_reutilizacao` pode ser
//! texto ou lista. O dataset é carregado uma vez por sessão e somente lido
//! depois disso.

use crate::error::{EcoscanError, Result};
use crate::normalizer;
use crate::normalizer::carbon::{parse_carbon, CarbonValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Dataset padrão embutido no binário, usado quando nenhum caminho é
/// informado na linha de comando.
static EMBEDDED_JSON: &str = include_str!("../data/materials.json");

/// Formas de reutilização: texto livre ou lista de sugestões curtas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReuseIdeas {
    Text(String),
    List(Vec<String>),
}

impl Default for ReuseIdeas {
    fn default() -> Self {
        ReuseIdeas::Text(String::new())
    }
}

impl ReuseIdeas {
    pub fn is_empty(&self) -> bool {
        match self {
            ReuseIdeas::Text(text) => text.trim().is_empty(),
            ReuseIdeas::List(items) => items.iter().all(|i| i.trim().is_empty()),
        }
    }

    /// Uma linha por sugestão, independente da forma de origem.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            ReuseIdeas::Text(text) => {
                if text.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![text.trim()]
                }
            }
            ReuseIdeas::List(items) => items
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .collect(),
        }
    }
}

/// Registro de material no formato do arquivo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WireRecord {
    carbono: Value,
    organico: bool,
    reciclavel: bool,
    decomposicao: String,
    formas_de_reutilizacao: ReuseIdeas,
}

/// Atributos ambientais de um material, já coagidos.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    pub name: String,
    pub carbon: CarbonValue,
    pub organic: bool,
    pub recyclable: bool,
    pub decomposition: String,
    pub reuse_ideas: ReuseIdeas,
}

/// Mapeamento nome → registro, com índice por chave normalizada.
#[derive(Debug, Clone)]
pub struct MaterialDataset {
    records: BTreeMap<String, MaterialRecord>,
    /// chave normalizada → chave original
    index: BTreeMap<String, String>,
}

impl MaterialDataset {
    /// Carrega um arquivo de dataset. Arquivo ausente ou ilegível é uma
    /// condição fatal de inicialização.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EcoscanError::DatasetNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let wire: BTreeMap<String, WireRecord> = serde_json::from_str(&content)
            .map_err(|e| EcoscanError::InvalidDataset(format!("{}: {}", path.display(), e)))?;

        Ok(Self::from_wire(wire))
    }

    /// Dataset padrão compilado no binário.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_JSON)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let wire: BTreeMap<String, WireRecord> = serde_json::from_str(content)
            .map_err(|e| EcoscanError::InvalidDataset(e.to_string()))?;

        Ok(Self::from_wire(wire))
    }

    fn from_wire(wire: BTreeMap<String, WireRecord>) -> Self {
        let mut records = BTreeMap::new();
        let mut index = BTreeMap::new();

        for (name, raw) in wire {
            let normalized = normalizer::normalize(&name);
            if normalized.is_empty() {
                continue;
            }

            index.insert(normalized, name.clone());
            records.insert(
                name.clone(),
                MaterialRecord {
                    name,
                    carbon: parse_carbon(&raw.carbono),
                    organic: raw.organico,
                    recyclable: raw.reciclavel,
                    decomposition: raw.decomposicao,
                    reuse_ideas: raw.formas_de_reutilizacao,
                },
            );
        }

        Self { records, index }
    }

    /// Busca pelo nome original (chave de exibição).
    pub fn get(&self, name: &str) -> Option<&MaterialRecord> {
        self.records.get(name)
    }

    /// Busca por chave já normalizada.
    pub fn lookup_normalized(&self, normalized: &str) -> Option<&MaterialRecord> {
        self.index
            .get(normalized)
            .and_then(|name| self.records.get(name))
    }

    /// Pares (chave normalizada, chave original), em ordem estável.
    pub fn normalized_keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.index
            .iter()
            .map(|(norm, orig)| (norm.as_str(), orig.as_str()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
