//! Normalização de texto para comparação de chaves.
//!
//! Chaves do dataset e consultas do usuário passam pela mesma normalização
//! para que os dois lados comparem em pé de igualdade:
//! 1. decomposição canônica (NFD)
//! 2. remoção dos acentos (marcas combinantes)
//! 3. minúsculas e trim

pub mod carbon;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normaliza um nome de material ou consulta.
///
/// Função pura e idempotente: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
