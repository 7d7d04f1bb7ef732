use clap::Parser;
use ecoscan::cli::{Cli, Commands};
use ecoscan::config::Config;
use ecoscan::error::Result;
use ecoscan::{analyzer, dataset, render, session};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { image, quantity } => {
            println!("🌱 ecoscan — análise de foto\n");

            // Chave ausente falha aqui, antes de qualquer trabalho
            let client = analyzer::VisionClient::new(&config)?;

            println!("[1/2] Preparando imagem...");
            let encoded = analyzer::encode_image(&image, config.max_image_size)?;
            println!("✔ imagem pronta\n");

            println!("[2/2] Analisando imagem...");
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()));
            spinner.set_message("🔎 consultando o modelo...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = analyzer::analyze(&client, &encoded, cli.verbose).await;
            spinner.finish_and_clear();

            match outcome? {
                analyzer::ScanOutcome::Record(record) => {
                    println!("✔ análise concluída");
                    render::render_record(&record, quantity);
                }
                analyzer::ScanOutcome::Unparseable(raw) => {
                    render::render_unparseable(&raw);
                }
            }
        }

        Commands::Lookup {
            query,
            quantity,
            data,
        } => {
            let dataset = match data.or_else(|| config.dataset_path.clone()) {
                Some(path) => dataset::MaterialDataset::load(&path)?,
                None => dataset::MaterialDataset::embedded()?,
            };

            if cli.verbose {
                println!("  dataset: {} materiais", dataset.len());
            }

            match query {
                Some(q) => session::lookup_once(&dataset, &q, quantity)?,
                None => session::LookupSession::new(&dataset, quantity).run()?,
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ chave de API configurada");
            }

            if show {
                println!("configuração:");
                println!("  modelo: {}", config.model);
                println!("  endpoint: {}", config.endpoint);
                println!("  tamanho máximo de imagem: {}px", config.max_image_size);
                println!("  timeout: {}s", config.timeout_seconds);
                println!(
                    "  chave de API: {}",
                    if config.api_key.is_some() {
                        "configurada"
                    } else {
                        "não configurada"
                    }
                );
                println!(
                    "  dataset: {}",
                    config
                        .dataset_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "embutido".into())
                );
            }
        }
    }

    Ok(())
}
