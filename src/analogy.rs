//! Analogias palpáveis para uma massa de CO₂.
//!
//! Constantes de escala:
//! - uma árvore madura absorve cerca de 10 kg de CO₂ por ano
//! - um carro comum emite cerca de 120 g de CO₂ por km
//! - cada kg de CO₂ é associado ao derretimento de 0,5 kg de gelo polar

const TREE_ABSORPTION_KG_PER_YEAR: f64 = 10.0;
const CAR_GRAMS_PER_KM: f64 = 120.0;
const ICE_MELT_KG_PER_KG: f64 = 0.5;

/// Equivalentes ilustrativos de uma emissão total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogySet {
    pub total_mass_kg: f64,
    pub trees_equivalent: f64,
    pub car_km_equivalent: f64,
    pub ice_melt_kg: f64,
}

impl AnalogySet {
    /// Calcula as analogias para uma massa total de CO₂.
    ///
    /// Massa não positiva (ou não numérica) não produz analogia.
    pub fn for_mass(total_mass_kg: f64) -> Option<Self> {
        if !(total_mass_kg > 0.0) {
            return None;
        }

        Some(Self {
            total_mass_kg,
            trees_equivalent: total_mass_kg / TREE_ABSORPTION_KG_PER_YEAR,
            car_km_equivalent: total_mass_kg * 1000.0 / CAR_GRAMS_PER_KM,
            ice_melt_kg: total_mass_kg * ICE_MELT_KG_PER_KG,
        })
    }

    /// Massa total = carbono por kg × quantidade usada (kg).
    pub fn for_quantity(carbon_per_kg: f64, quantity: u32) -> Option<Self> {
        Self::for_mass(carbon_per_kg * quantity as f64)
    }
}
