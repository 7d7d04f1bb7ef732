//! Casamento de consulta com chaves do dataset.
//!
//! Um acerto exato no índice normalizado encerra a busca. Sem acerto exato,
//! duas listas de candidatos são combinadas: chaves que contêm a consulta
//! como substring e chaves dentro do corte de similaridade, ordenadas pela
//! razão de edição. O chamador apresenta a lista para desambiguação.

use crate::dataset::MaterialDataset;
use crate::normalizer;

/// Razão mínima de similaridade para entrar na lista de candidatos.
pub const SIMILARITY_CUTOFF: f64 = 0.3;

/// Máximo de candidatos vindos da busca por similaridade.
pub const MAX_CANDIDATES: usize = 8;

/// Resultado do casamento de uma consulta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Acerto exato: nenhuma desambiguação necessária.
    Exact(String),
    /// Chaves candidatas, substrings primeiro, para o usuário escolher.
    Candidates(Vec<String>),
    NotFound,
}

/// Casa uma consulta livre com as chaves do dataset.
pub fn match_query(dataset: &MaterialDataset, query: &str) -> MatchOutcome {
    let normalized = normalizer::normalize(query);
    if normalized.is_empty() {
        return MatchOutcome::NotFound;
    }

    if let Some(record) = dataset.lookup_normalized(&normalized) {
        return MatchOutcome::Exact(record.name.clone());
    }

    let mut candidates: Vec<String> = Vec::new();

    // Substrings primeiro, na ordem do índice
    for (norm, orig) in dataset.normalized_keys() {
        if norm.contains(&normalized) {
            push_unique(&mut candidates, orig);
        }
    }

    // Depois os aproximados, do mais parecido ao menos parecido
    let mut scored: Vec<(f64, &str)> = dataset
        .normalized_keys()
        .filter_map(|(norm, orig)| {
            let score = similarity(&normalized, norm);
            (score >= SIMILARITY_CUTOFF).then_some((score, orig))
        })
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    for (_, orig) in scored.into_iter().take(MAX_CANDIDATES) {
        push_unique(&mut candidates, orig);
    }

    if candidates.is_empty() {
        MatchOutcome::NotFound
    } else {
        MatchOutcome::Candidates(candidates)
    }
}

fn push_unique(candidates: &mut Vec<String>, key: &str) {
    if !candidates.iter().any(|c| c == key) {
        candidates.push(key.to_string());
    }
}

/// Similaridade baseada em distância de edição, em [0.0, 1.0].
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    1.0 - (distance as f64 / max_len as f64)
}

/// Distância de Levenshtein por caracteres, com duas linhas de memória.
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
