//! Cliente de chat-completions compatível com OpenAI.
//!
//! Envia a instrução fixa mais a foto codificada em base64 e devolve o texto
//! da resposta. Falha de HTTP ou timeout é erro de chamada; conteúdo
//! ininterpretável não é — isso fica a cargo do extrator.

use crate::config::Config;
use crate::error::{EcoscanError, Result};
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;
use std::path::Path;
use std::time::Duration;

/// Instrução enviada com toda foto. A resposta deve conter um objeto JSON
/// com os mesmos campos do arquivo de dataset.
const INSTRUCTION: &str = "Analise a imagem e retorne em JSON com os campos: \
carbono (em kg CO₂/kg), organico (true/false), reciclavel (true/false), \
decomposicao (texto), formas_de_reutilizacao (texto), \
e nome (nome do material identificado).";

pub struct VisionClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl VisionClient {
    /// Falha aqui (chave ausente) é fatal antes de qualquer interação.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// Envia instrução + imagem e devolve o texto livre da resposta.
    pub async fn complete(&self, image_base64: &str) -> Result<String> {
        let payload = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": INSTRUCTION },
                        {
                            "type": "image_url",
                            "image_url": {
                                "url": format!("data:image/jpeg;base64,{}", image_base64)
                            }
                        }
                    ]
                }
            ]
        });

        let url = format!("{}/chat/completions", self.endpoint);

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&payload)
                .send(),
        )
        .await
        .map_err(|_| EcoscanError::ApiCall("tempo limite excedido".into()))?
        .map_err(|e| EcoscanError::ApiCall(format!("falha na requisição HTTP: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<sem corpo>".into());
            return Err(EcoscanError::ApiCall(format!("status {}: {}", status, body)));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EcoscanError::ApiCall(format!("corpo de resposta inválido: {}", e)))?;

        body.pointer("/choices/0/message/content")
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| EcoscanError::ApiCall("resposta sem conteúdo".into()))
    }
}

/// Lê a foto, reduz para o lado máximo configurado, recodifica como JPEG e
/// devolve o base64.
pub fn encode_image(path: &Path, max_size: u32) -> Result<String> {
    let img = image::open(path)
        .map_err(|e| EcoscanError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let img = if img.width().max(img.height()) > max_size {
        img.resize(max_size, max_size, image::imageops::FilterType::Lanczos3)
    } else {
        img
    };

    let rgb = img.to_rgb8();
    let mut jpeg = Vec::new();
    {
        use image::codecs::jpeg::JpegEncoder;
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, 80);
        encoder
            .encode(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                image::ColorType::Rgb8.into(),
            )
            .map_err(|e| EcoscanError::ImageLoad(format!("falha ao codificar JPEG: {}", e)))?;
    }

    Ok(general_purpose::STANDARD.encode(&jpeg))
}
