use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoscanError {
    #[error("erro de configuração: {0}")]
    Config(String),

    #[error("chave de API não configurada. Use `ecoscan config --set-api-key SUA_CHAVE` ou exporte OPENAI_API_KEY")]
    MissingApiKey,

    #[error("arquivo de dados não encontrado: {0}")]
    DatasetNotFound(String),

    #[error("arquivo de dados inválido: {0}")]
    InvalidDataset(String),

    #[error("erro ao carregar imagem: {0}")]
    ImageLoad(String),

    #[error("erro na chamada à API: {0}")]
    ApiCall(String),

    #[error("erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("erro de entrada interativa: {0}")]
    Interaction(String),
}

pub type Result<T> = std::result::Result<T, EcoscanError>;
