//! Sessão interativa de busca local.
//!
//! O estado é um struct por sessão, nada global: a consulta ativa, a seleção
//! fixada e a quantidade. A seleção sobrevive a mudanças de quantidade e cai
//! assim que o texto da consulta muda.

use crate::dataset::MaterialDataset;
use crate::error::{EcoscanError, Result};
use crate::matcher::{self, MatchOutcome};
use crate::render;
use dialoguer::{Input, Select};

/// Ações reconhecidas no prompt da sessão.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionAction {
    Query(String),
    SetQuantity(u32),
    Quit,
    Nothing,
}

fn parse_action(input: &str) -> SessionAction {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SessionAction::Nothing;
    }
    if trimmed.eq_ignore_ascii_case("q") {
        return SessionAction::Quit;
    }
    if let Some(rest) = trimmed.strip_prefix('n').filter(|r| r.starts_with(' ')) {
        return match rest.trim().parse::<u32>() {
            Ok(n) if n >= 1 => SessionAction::SetQuantity(n),
            _ => SessionAction::Nothing,
        };
    }
    SessionAction::Query(trimmed.to_string())
}

pub struct LookupSession<'a> {
    dataset: &'a MaterialDataset,
    query: String,
    /// Chave original selecionada; fixada até a consulta mudar.
    selection: Option<String>,
    quantity: u32,
}

impl<'a> LookupSession<'a> {
    pub fn new(dataset: &'a MaterialDataset, quantity: u32) -> Self {
        Self {
            dataset,
            query: String::new(),
            selection: None,
            quantity: quantity.max(1),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!(
            "🌱 Verificador de impacto ambiental — {} materiais conhecidos",
            self.dataset.len()
        );
        println!("---");
        println!("comandos: [texto] buscar material  [n N] quantidade em kg  [q] sair");
        println!("---");

        loop {
            let input: String = Input::new()
                .with_prompt("material")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| EcoscanError::Interaction(e.to_string()))?;

            match parse_action(&input) {
                SessionAction::Nothing => continue,
                SessionAction::Quit => break,
                SessionAction::SetQuantity(n) => {
                    self.quantity = n;
                    if self.selection.is_some() {
                        self.render_selection();
                    } else {
                        println!("  quantidade: {} kg (nenhum material selecionado)", n);
                    }
                }
                SessionAction::Query(query) => self.handle_query(query)?,
            }
        }

        Ok(())
    }

    fn handle_query(&mut self, query: String) -> Result<()> {
        // mesma consulta: a seleção anterior permanece válida
        if query == self.query && self.selection.is_some() {
            self.render_selection();
            return Ok(());
        }

        self.query = query;
        self.selection = None;

        match matcher::match_query(self.dataset, &self.query) {
            MatchOutcome::Exact(key) => {
                self.selection = Some(key);
                self.render_selection();
            }
            MatchOutcome::Candidates(keys) => {
                let picked = pick_candidate(&keys)?;
                self.selection = Some(picked);
                self.render_selection();
            }
            MatchOutcome::NotFound => {
                render::render_not_found(&self.query);
            }
        }

        Ok(())
    }

    fn render_selection(&self) {
        if let Some(record) = self
            .selection
            .as_deref()
            .and_then(|key| self.dataset.get(key))
        {
            render::render_record(record, self.quantity);
        }
    }
}

/// Busca única, sem laço de sessão (`ecoscan lookup <consulta>`).
pub fn lookup_once(dataset: &MaterialDataset, query: &str, quantity: u32) -> Result<()> {
    match matcher::match_query(dataset, query) {
        MatchOutcome::Exact(key) => {
            if let Some(record) = dataset.get(&key) {
                render::render_record(record, quantity.max(1));
            }
        }
        MatchOutcome::Candidates(keys) => {
            let picked = pick_candidate(&keys)?;
            if let Some(record) = dataset.get(&picked) {
                render::render_record(record, quantity.max(1));
            }
        }
        MatchOutcome::NotFound => {
            render::render_not_found(query);
        }
    }

    Ok(())
}

fn pick_candidate(keys: &[String]) -> Result<String> {
    let index = Select::new()
        .with_prompt("mais de um material possível, escolha um")
        .items(keys)
        .default(0)
        .interact()
        .map_err(|e| EcoscanError::Interaction(e.to_string()))?;

    Ok(keys[index].clone())
}
