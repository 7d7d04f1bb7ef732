//! Apresentação de um registro no terminal.
//!
//! Caixas de informação, barra de impacto proporcional, selo de
//! classificação, analogias e formas de reutilização. Campo ausente sempre
//! rende um texto padrão, nunca um erro.

use crate::analogy::AnalogySet;
use crate::dataset::MaterialRecord;
use crate::impact::{Classification, ImpactAssessment, ImpactTier};
use colored::{Color, Colorize};

const BAR_WIDTH: usize = 40;
const NOT_INFORMED: &str = "não informado";

/// Renderiza o registro completo para a quantidade informada (kg).
pub fn render_record(record: &MaterialRecord, quantity: u32) {
    let assessment = ImpactAssessment::of(record);

    println!();
    println!("🔎 {}", capitalize(&record.name).bold());
    println!("  🌍 Emissão de carbono: {}", carbon_text(record));
    println!("  🌿 Orgânico: {}", yes_no(record.organic));
    println!("  ♻️  Reciclável: {}", yes_no(record.recyclable));
    println!(
        "  ⏳ Tempo de decomposição: {}",
        text_or_default(&record.decomposition)
    );

    println!();
    println!(
        "💥 Impacto ambiental estimado: {}",
        assessment.tier.to_string().color(tier_color(assessment.tier)).bold()
    );
    println!("  {}", impact_bar(assessment.tier));

    if let Some(analogies) = AnalogySet::for_quantity(record.carbon.kg_per_kg, quantity) {
        println!();
        println!(
            "🔥 Emissão total de {:.2} kg CO₂ ({} kg de material):",
            analogies.total_mass_kg, quantity
        );
        println!(
            "  🌳 {:.1} árvore(s) por um ano para absorver essa emissão",
            analogies.trees_equivalent
        );
        println!(
            "  🚗 equivale a dirigir {:.0} km de carro comum",
            analogies.car_km_equivalent
        );
        println!(
            "  ❄️  contribui para o derretimento de {:.1} kg de gelo polar",
            analogies.ice_melt_kg
        );
    }

    if let Some(seal) = assessment.classification {
        println!();
        println!("🏷️  Classificação: {}", seal_text(seal));
    }

    println!();
    println!("♻️  Formas de reutilização:");
    let lines = record.reuse_ideas.lines();
    if lines.is_empty() {
        println!("  {}", NOT_INFORMED);
    } else {
        for line in lines {
            println!("  • {}", line);
        }
    }
    println!();
}

/// Estado brando de "nada encontrado" na busca local.
pub fn render_not_found(query: &str) {
    println!("😕 Nenhum material encontrado para \"{}\"", query.trim());
}

/// Estado brando de resposta ininterpretável do modelo; o texto cru fica
/// visível para diagnóstico e o usuário pode tentar outra foto.
pub fn render_unparseable(raw: &str) {
    println!(
        "{}",
        "❌ Não foi possível interpretar a resposta do modelo.".red()
    );
    println!("Conteúdo retornado:");
    println!("{}", raw.trim().dimmed());
}

fn carbon_text(record: &MaterialRecord) -> String {
    if record.carbon.fallback {
        NOT_INFORMED.to_string()
    } else {
        format!("{:.2} kg CO₂/kg", record.carbon.kg_per_kg)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sim"
    } else {
        "Não"
    }
}

fn text_or_default(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        NOT_INFORMED
    } else {
        trimmed
    }
}

fn seal_text(seal: Classification) -> String {
    let (emoji, color) = match seal {
        Classification::Sustainable => ("♻️", Color::Green),
        Classification::Critical => ("⚠️", Color::Red),
        Classification::Neutral => ("🌱", Color::Yellow),
    };
    format!("{} {}", emoji, seal.to_string().color(color).bold())
}

fn tier_color(tier: ImpactTier) -> Color {
    match tier {
        ImpactTier::Low => Color::Green,
        ImpactTier::Medium => Color::Yellow,
        ImpactTier::High => Color::Red,
    }
}

/// Barra com preenchimento proporcional ao peso da faixa.
fn impact_bar(tier: ImpactTier) -> String {
    let filled = BAR_WIDTH * tier.display_weight() as usize / 100;
    let bar = format!(
        "{}{}",
        "█".repeat(filled).color(tier_color(tier)),
        "░".repeat(BAR_WIDTH - filled).dimmed()
    );
    bar
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
