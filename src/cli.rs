use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecoscan")]
#[command(about = "Verificador de impacto ambiental de materiais", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Saída detalhada
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analisa a foto de um objeto com o modelo de visão
    Scan {
        /// Caminho da foto (JPEG/PNG)
        #[arg(required = true)]
        image: PathBuf,

        /// Quantidade de material em kg
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },

    /// Busca um material no dataset local
    Lookup {
        /// Nome do material; omita para abrir a sessão interativa
        query: Option<String>,

        /// Quantidade de material em kg
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// Arquivo de dataset JSON (padrão: dataset embutido)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Mostra ou edita a configuração
    Config {
        /// Define a chave de API
        #[arg(long)]
        set_api_key: Option<String>,

        /// Mostra a configuração atual
        #[arg(long)]
        show: bool,
    },
}
