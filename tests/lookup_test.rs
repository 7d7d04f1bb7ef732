//! Fluxo de busca local de ponta a ponta: arquivo de dataset → casamento →
//! classificação → analogias.

use ecoscan::analogy::AnalogySet;
use ecoscan::dataset::MaterialDataset;
use ecoscan::impact::{Classification, ImpactAssessment, ImpactTier};
use ecoscan::matcher::{self, MatchOutcome};
use std::io::Write;

fn write_dataset(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_papel_scenario_end_to_end() {
    let file = write_dataset(
        r#"{
            "papel": {
                "carbono": "0.5 kg",
                "organico": true,
                "reciclavel": true,
                "decomposicao": "2-6 semanas",
                "formas_de_reutilizacao": "faça cadernos"
            }
        }"#,
    );

    let dataset = MaterialDataset::load(file.path()).unwrap();

    let key = match matcher::match_query(&dataset, "papel") {
        MatchOutcome::Exact(key) => key,
        other => panic!("esperava acerto exato, veio {:?}", other),
    };

    let record = dataset.get(&key).unwrap();
    assert_eq!(record.carbon.kg_per_kg, 0.5);
    assert!(!record.carbon.fallback);

    let assessment = ImpactAssessment::of(record);
    assert_eq!(assessment.tier, ImpactTier::Low);
    assert_eq!(assessment.display_weight(), 30);
    assert_eq!(assessment.classification, Some(Classification::Sustainable));

    // quantidade 2 kg → massa total 1.0 kg de CO₂
    let analogies = AnalogySet::for_quantity(record.carbon.kg_per_kg, 2).unwrap();
    assert!((analogies.total_mass_kg - 1.0).abs() < 1e-9);
    assert!((analogies.trees_equivalent - 0.1).abs() < 1e-9);
    assert!((analogies.car_km_equivalent - 8.333333).abs() < 1e-4);
    assert!((analogies.ice_melt_kg - 0.5).abs() < 1e-9);
}

#[test]
fn test_accented_query_against_file_dataset() {
    let file = write_dataset(
        r#"{
            "plástico": {
                "carbono": "6,0 kg",
                "organico": false,
                "reciclavel": true,
                "decomposicao": "mais de 400 anos",
                "formas_de_reutilizacao": ["regadores"]
            }
        }"#,
    );

    let dataset = MaterialDataset::load(file.path()).unwrap();

    // sem acento, com caixa alta e espaços
    match matcher::match_query(&dataset, "  PLASTICO ") {
        MatchOutcome::Exact(key) => assert_eq!(key, "plástico"),
        other => panic!("esperava acerto exato, veio {:?}", other),
    }

    let record = dataset.get("plástico").unwrap();
    let assessment = ImpactAssessment::of(record);
    assert_eq!(assessment.tier, ImpactTier::High);
    // alto mas reciclável e não orgânico: sem selo
    assert_eq!(assessment.classification, None);
}

#[test]
fn test_typo_produces_candidates_from_file() {
    let file = write_dataset(
        r#"{
            "vidro": {"carbono": "0,85 kg", "reciclavel": true},
            "plastico": {"carbono": "6,0 kg", "reciclavel": true}
        }"#,
    );

    let dataset = MaterialDataset::load(file.path()).unwrap();

    match matcher::match_query(&dataset, "plastco") {
        MatchOutcome::Candidates(keys) => {
            assert!(keys.contains(&"plastico".to_string()));
        }
        other => panic!("esperava candidatos, veio {:?}", other),
    }

    assert_eq!(matcher::match_query(&dataset, "zzz"), MatchOutcome::NotFound);
}

#[test]
fn test_missing_dataset_file_is_fatal() {
    let result = MaterialDataset::load(std::path::Path::new("/caminho/que/nao/existe.json"));
    assert!(result.is_err());
}

#[test]
fn test_corrupt_dataset_file_is_fatal() {
    let file = write_dataset("{ isto não é json válido");
    assert!(MaterialDataset::load(file.path()).is_err());
}

#[test]
fn test_embedded_dataset_covers_common_materials() {
    let dataset = MaterialDataset::embedded().unwrap();

    for name in ["papel", "vidro", "plastico", "aluminio"] {
        assert!(
            dataset.lookup_normalized(name).is_some(),
            "material embutido ausente: {}",
            name
        );
    }

    // alumínio é um registro de alto impacto no dataset embutido
    let aluminio = dataset.lookup_normalized("aluminio").unwrap();
    assert_eq!(
        ImpactAssessment::of(aluminio).tier,
        ImpactTier::High
    );
}
