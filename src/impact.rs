//! Classificação de impacto ambiental.
//!
//! Derivada apenas do valor de carbono e das flags do registro; recalculada
//! a cada renderização, nunca persistida.

use crate::dataset::MaterialRecord;

/// Faixa de impacto derivada do carbono por kg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactTier {
    Low,
    Medium,
    High,
}

impl ImpactTier {
    /// Faixas: ≤ 1.0 baixo, ≤ 3.0 médio, acima disso alto.
    pub fn classify(carbon_per_kg: f64) -> Self {
        if carbon_per_kg <= 1.0 {
            ImpactTier::Low
        } else if carbon_per_kg <= 3.0 {
            ImpactTier::Medium
        } else {
            ImpactTier::High
        }
    }

    /// Percentual preenchido da barra de impacto.
    pub fn display_weight(&self) -> u8 {
        match self {
            ImpactTier::Low => 30,
            ImpactTier::Medium => 60,
            ImpactTier::High => 90,
        }
    }
}

impl std::fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpactTier::Low => write!(f, "Baixo"),
            ImpactTier::Medium => write!(f, "Médio"),
            ImpactTier::High => write!(f, "Alto"),
        }
    }
}

/// Selo de classificação, quando algum se aplica.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Sustainable,
    Critical,
    Neutral,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Sustainable => write!(f, "Sustentável"),
            Classification::Critical => write!(f, "Crítico"),
            Classification::Neutral => write!(f, "Neutro"),
        }
    }
}

/// Avaliação derivada de um registro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactAssessment {
    pub tier: ImpactTier,
    pub classification: Option<Classification>,
}

impl ImpactAssessment {
    pub fn of(record: &MaterialRecord) -> Self {
        let tier = ImpactTier::classify(record.carbon.kg_per_kg);
        Self {
            tier,
            classification: classification(tier, record.organic, record.recyclable),
        }
    }

    pub fn display_weight(&self) -> u8 {
        self.tier.display_weight()
    }
}

/// Deriva o selo; a primeira regra que casar vence:
/// 1. baixo impacto e reciclável → Sustentável
/// 2. alto impacto e não reciclável → Crítico
/// 3. orgânico → Neutro
pub fn classification(
    tier: ImpactTier,
    organic: bool,
    recyclable: bool,
) -> Option<Classification> {
    if tier == ImpactTier::Low && recyclable {
        Some(Classification::Sustainable)
    } else if tier == ImpactTier::High && !recyclable {
        Some(Classification::Critical)
    } else if organic {
        Some(Classification::Neutral)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ImpactTier::classify(0.0), ImpactTier::Low);
        assert_eq!(ImpactTier::classify(1.0), ImpactTier::Low);
        assert_eq!(ImpactTier::classify(1.01), ImpactTier::Medium);
        assert_eq!(ImpactTier::classify(3.0), ImpactTier::Medium);
        assert_eq!(ImpactTier::classify(3.01), ImpactTier::High);
    }

    #[test]
    fn test_display_weights() {
        assert_eq!(ImpactTier::Low.display_weight(), 30);
        assert_eq!(ImpactTier::Medium.display_weight(), 60);
        assert_eq!(ImpactTier::High.display_weight(), 90);
    }

    #[test]
    fn test_sustainable_rule() {
        assert_eq!(
            classification(ImpactTier::Low, false, true),
            Some(Classification::Sustainable)
        );
        // orgânico não muda o selo quando a primeira regra já casou
        assert_eq!(
            classification(ImpactTier::Low, true, true),
            Some(Classification::Sustainable)
        );
    }

    #[test]
    fn test_critical_beats_neutral() {
        // alto, não reciclável e orgânico continua crítico
        assert_eq!(
            classification(ImpactTier::High, true, false),
            Some(Classification::Critical)
        );
    }

    #[test]
    fn test_neutral_fallback() {
        assert_eq!(
            classification(ImpactTier::High, true, true),
            Some(Classification::Neutral)
        );
        assert_eq!(
            classification(ImpactTier::Low, true, false),
            Some(Classification::Neutral)
        );
        assert_eq!(
            classification(ImpactTier::Medium, true, true),
            Some(Classification::Neutral)
        );
    }

    #[test]
    fn test_no_seal() {
        assert_eq!(classification(ImpactTier::Medium, false, true), None);
        assert_eq!(classification(ImpactTier::High, false, true), None);
        assert_eq!(classification(ImpactTier::Low, false, false), None);
    }
}
