//! ecoscan — verificador de impacto ambiental de materiais.
//!
//! Dois fluxos independentes convergem na mesma camada de apresentação:
//! - foto → modelo de visão → registro extraído (`analyzer`, `extractor`)
//! - consulta de texto → dataset local (`dataset`, `matcher`, `session`)

pub mod analogy;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extractor;
pub mod impact;
pub mod matcher;
pub mod normalizer;
pub mod render;
pub mod session;

pub use analogy::AnalogySet;
pub use dataset::{MaterialDataset, MaterialRecord, ReuseIdeas};
pub use error::{EcoscanError, Result};
pub use impact::{Classification, ImpactAssessment, ImpactTier};
pub use matcher::MatchOutcome;
