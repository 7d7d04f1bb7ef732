//! Fluxo de análise assistida por visão.
//!
//! Uma foto entra, um registro sai:
//! 1. codificar a imagem (redução + JPEG + base64)
//! 2. chamar o endpoint de completions com a instrução fixa
//! 3. extrair o objeto JSON da resposta livre
//!
//! Resposta ininterpretável vira [`ScanOutcome::Unparseable`] com o texto
//! cru preservado — o usuário pode tentar outra foto.

mod openai;

pub use openai::{encode_image, VisionClient};

use crate::dataset::MaterialRecord;
use crate::error::Result;
use crate::extractor;

/// Resultado da análise de uma foto.
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Record(MaterialRecord),
    /// A chamada funcionou, mas nenhum objeto JSON pôde ser lido da
    /// resposta; o texto fica disponível para diagnóstico.
    Unparseable(String),
}

/// Envia a imagem já codificada e coage a resposta num registro.
pub async fn analyze(
    client: &VisionClient,
    image_base64: &str,
    verbose: bool,
) -> Result<ScanOutcome> {
    if verbose {
        println!("  payload da imagem: {} chars em base64", image_base64.len());
    }

    let reply = client.complete(image_base64).await?;

    if verbose {
        println!("  resposta: {} chars", reply.len());
    }

    match extractor::extract_raw(&reply) {
        Some(raw) => Ok(ScanOutcome::Record(raw.into_record())),
        None => Ok(ScanOutcome::Unparseable(reply)),
    }
}
