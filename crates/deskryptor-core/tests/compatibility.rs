use deskryptor::core::io::source::{DatasetDocuments, DatasetLayout, DirectorySource};
use deskryptor::core::models::ids::{AcceptorId, DonorId};
use deskryptor::engine::resolver::{
    self, ComplexResult, ResolvedView, candidate_acceptors, candidate_donors,
};
use deskryptor::engine::selection::{Selection, SelectionState};
use deskryptor::engine::store::DatasetStore;
use deskryptor::workflows::screen::ScreeningSession;
use std::fs;
use tempfile::tempdir;

const DONORS: &str = r#"{
    "urea": {"HOMO (eV)": -6.91, "LUMO (eV)": 1.02, "HOMO-LUMO Gap (eV)": 7.93, "Total Energy (Eh)": -225.1, "Dipole Moment (D)": 4.2},
    "glycerol": {"HOMO (eV)": -7.2, "LUMO (eV)": 1.4, "HOMO-LUMO Gap (eV)": 8.6, "Total Energy (Eh)": -344.9, "Dipole Moment (D)": 2.6},
    "ethylene_glycol": {"HOMO (eV)": -7.4, "LUMO (eV)": 1.6, "HOMO-LUMO Gap (eV)": 9.0, "Total Energy (Eh)": -230.3, "Dipole Moment (D)": 0.0}
}"#;

const ACCEPTORS: &str = r#"{
    "cholineChloride": {"HOMO (eV)": -5.8, "LUMO (eV)": 0.3, "HOMO-LUMO Gap (eV)": 6.1, "Total Energy (Eh)": -789.0, "Dipole Moment (D)": 9.9},
    "betaine": {"HOMO (eV)": -6.0, "LUMO (eV)": 0.1, "HOMO-LUMO Gap (eV)": 6.1, "Total Energy (Eh)": -401.2, "Dipole Moment (D)": 11.2},
    "proline": {"HOMO (eV)": -6.3, "LUMO (eV)": 0.5, "HOMO-LUMO Gap (eV)": 6.8, "Total Energy (Eh)": -401.9, "Dipole Moment (D)": 5.0}
}"#;

const COMPLEXES: &str = r#"{
    "urea_cholineChloride": {"HBD": "urea", "HBA": "cholineChloride", "EFI Score": 8.5, "Interaction Energy (kcal/mol)": -21.0},
    "urea_betaine": {"HBD": "urea", "HBA": "betaine", "EFI Score": 6.0, "Interaction Energy (kcal/mol)": -14.2},
    "glycerol_betaine": {"HBD": "glycerol", "HBA": "betaine", "EFI Score": 7.1, "Interaction Energy (kcal/mol)": -16.0},
    "glycerol_proline": {"HBD": "glycerol", "HBA": "proline", "EFI Score": 7.1, "Interaction Energy (kcal/mol)": -15.5},
    "glycerol_cholineChloride": {"HBD": "glycerol", "HBA": "cholineChloride", "EFI Score": 9.3, "Interaction Energy (kcal/mol)": -23.4},
    "ethylene_glycol_missing": {"HBD": "ethylene_glycol", "HBA": "zinc_chloride", "EFI Score": 9.9, "Interaction Energy (kcal/mol)": -30.0},
    "orphan_betaine": {"HBD": "menthol", "HBA": "betaine", "EFI Score": 9.0, "Interaction Energy (kcal/mol)": -18.0}
}"#;

fn documents() -> DatasetDocuments {
    DatasetDocuments {
        donors: DONORS.to_string(),
        acceptors: ACCEPTORS.to_string(),
        complexes: COMPLEXES.to_string(),
    }
}

fn loaded_store() -> DatasetStore {
    let mut store = DatasetStore::new();
    store.load(&documents()).expect("fixture dataset loads");
    store
}

#[test]
fn scenario_urea_with_choline_chloride_and_betaine() {
    let mut store = DatasetStore::new();
    store
        .load(&DatasetDocuments {
            donors: r#"{"urea": {}}"#.to_string(),
            acceptors: r#"{"cholineChloride": {}, "betaine": {}}"#.to_string(),
            complexes: r#"{
                "c1": {"HBD": "urea", "HBA": "cholineChloride", "EFI Score": 8.5, "Interaction Energy (kcal/mol)": -1.0},
                "c2": {"HBD": "urea", "HBA": "betaine", "EFI Score": 6.0, "Interaction Energy (kcal/mol)": -1.0}
            }"#
            .to_string(),
        })
        .unwrap();
    let mut selection = Selection::new();

    selection.select_donor("urea");
    match resolver::resolve(selection.state(), &store) {
        ResolvedView::CandidateAcceptors(list) => {
            let ids: Vec<_> = list.iter().map(|c| c.molecule.id.as_str()).collect();
            assert_eq!(ids, vec!["cholineChloride", "betaine"]);
        }
        other => panic!("Expected candidate acceptors, got {:?}", other),
    }

    selection.select_acceptor("betaine");
    match resolver::resolve(selection.state(), &store) {
        ResolvedView::ComplexResult(result) => {
            assert_eq!(result.complex().map(|c| c.efi_score), Some(6.0));
        }
        other => panic!("Expected a complex result, got {:?}", other),
    }

    selection.select_acceptor("glycerol");
    match resolver::resolve(selection.state(), &store) {
        ResolvedView::ComplexResult(result) => assert!(result.is_absent()),
        other => panic!("Expected a complex result, got {:?}", other),
    }
}

#[test]
fn candidate_lists_are_sorted_by_descending_efi() {
    let store = loaded_store();

    for donor in store.donors() {
        let ranked = candidate_acceptors(&store, &donor.id);
        assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].efi_score() >= pair[1].efi_score()),
            "acceptors for {} are not ranked",
            donor.id
        );
    }
    for acceptor in store.acceptors() {
        let ranked = candidate_donors(&store, &acceptor.id);
        assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].efi_score() >= pair[1].efi_score()),
            "donors for {} are not ranked",
            acceptor.id
        );
    }
}

#[test]
fn equal_scores_keep_loaded_order() {
    let store = loaded_store();
    let ranked: Vec<_> = candidate_acceptors(&store, &DonorId::from("glycerol"))
        .iter()
        .map(|c| c.molecule.id.to_string())
        .collect();

    assert_eq!(ranked, vec!["cholineChloride", "betaine", "proline"]);
}

#[test]
fn compatibility_is_symmetric() {
    let store = loaded_store();

    for complex in store.complexes() {
        let (Some(donor), Some(acceptor)) = (
            store.donor(&complex.donor_id),
            store.acceptor(&complex.acceptor_id),
        ) else {
            continue;
        };

        let acceptor_listed = candidate_acceptors(&store, &donor.id)
            .iter()
            .any(|c| c.molecule.id == acceptor.id);
        let donor_listed = candidate_donors(&store, &acceptor.id)
            .iter()
            .any(|c| c.molecule.id == donor.id);

        assert!(acceptor_listed);
        assert_eq!(acceptor_listed, donor_listed);
    }
}

#[test]
fn dangling_references_are_excluded_from_candidates() {
    let store = loaded_store();

    assert!(candidate_acceptors(&store, &DonorId::from("ethylene_glycol")).is_empty());

    let donors: Vec<_> = candidate_donors(&store, &AcceptorId::from("betaine"))
        .iter()
        .map(|c| c.molecule.id.to_string())
        .collect();
    assert_eq!(donors, vec!["glycerol", "urea"]);
}

#[test]
fn every_known_pair_without_complex_resolves_to_absent() {
    let store = loaded_store();

    for donor in store.donors() {
        for acceptor in store.acceptors() {
            let result = resolver::complex_result(&store, &donor.id, &acceptor.id)
                .expect("loaded store always yields a result");
            let expected = store.complex_for(&donor.id, &acceptor.id);
            assert_eq!(result.complex(), expected);
            if expected.is_none() {
                assert!(matches!(
                    result,
                    ComplexResult::Absent {
                        donor: Some(_),
                        acceptor: Some(_)
                    }
                ));
            }
        }
    }
}

#[test]
fn unloaded_store_never_reports_a_pair_as_absent() {
    let store = DatasetStore::new();

    assert!(
        resolver::complex_result(&store, &DonorId::from("urea"), &AcceptorId::from("betaine"))
            .is_none()
    );
    assert!(candidate_acceptors(&store, &DonorId::from("urea")).is_empty());
    assert_eq!(
        resolver::resolve(
            &SelectionState::Both(DonorId::from("urea"), AcceptorId::from("betaine")),
            &store
        ),
        ResolvedView::Empty
    );
}

#[test]
fn clearing_donor_from_both_leaves_acceptor_only() {
    let mut selection = Selection::new();
    selection.select_donor("urea");
    selection.select_acceptor("betaine");

    selection.select_donor("");

    assert_eq!(
        selection.state(),
        &SelectionState::AcceptorOnly(AcceptorId::from("betaine"))
    );
}

#[test]
fn session_loads_from_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hbd.json"), DONORS).unwrap();
    fs::write(dir.path().join("hba.json"), ACCEPTORS).unwrap();
    fs::write(dir.path().join("complexes.json"), COMPLEXES).unwrap();

    let mut session = ScreeningSession::new();
    session
        .load(&DirectorySource::new(dir.path(), DatasetLayout::default()))
        .unwrap();

    assert_eq!(session.store().donors().len(), 3);
    match session.select_acceptor("cholineChloride") {
        ResolvedView::CandidateDonors(list) => {
            let ids: Vec<_> = list.iter().map(|c| c.molecule.id.as_str()).collect();
            assert_eq!(ids, vec!["glycerol", "urea"]);
        }
        other => panic!("Expected candidate donors, got {:?}", other),
    }
}

#[test]
fn missing_document_fails_the_whole_load() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hbd.json"), DONORS).unwrap();
    fs::write(dir.path().join("hba.json"), ACCEPTORS).unwrap();

    let mut session = ScreeningSession::new();
    let result = session.load(&DirectorySource::new(dir.path(), DatasetLayout::default()));

    assert!(result.is_err());
    assert!(!session.store().is_loaded());
    assert!(session.store().donors().is_empty());
    assert_eq!(session.select_donor("urea"), ResolvedView::Empty);
}
