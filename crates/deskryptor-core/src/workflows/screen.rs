use crate::core::io::source::DatasetSource;
use crate::core::models::molecule::{Acceptor, Donor};
use crate::engine::error::LoadError;
use crate::engine::resolver::{self, ResolvedView};
use crate::engine::selection::{Selection, SelectionState};
use crate::engine::store::DatasetStore;
use tracing::instrument;

/// A screening session: one dataset, one evolving selection.
///
/// Every selection operation returns the view recomputed from scratch for the new state;
/// nothing derived is cached between calls.
#[derive(Debug, Default)]
pub struct ScreeningSession {
    store: DatasetStore,
    selection: Selection,
}

impl ScreeningSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: DatasetStore) -> Self {
        Self {
            store,
            selection: Selection::new(),
        }
    }

    #[instrument(skip_all, name = "session_load")]
    pub fn load<S: DatasetSource + ?Sized>(&mut self, source: &S) -> Result<(), LoadError> {
        self.store.load(source)
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn state(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn view(&self) -> ResolvedView<'_> {
        resolver::resolve(self.selection.state(), &self.store)
    }

    #[instrument(skip(self))]
    pub fn select_donor(&mut self, id: &str) -> ResolvedView<'_> {
        self.selection.select_donor(id);
        self.view()
    }

    #[instrument(skip(self))]
    pub fn select_acceptor(&mut self, id: &str) -> ResolvedView<'_> {
        self.selection.select_acceptor(id);
        self.view()
    }

    pub fn toggle_donor(&mut self, id: &str) -> ResolvedView<'_> {
        self.selection.toggle_donor(id);
        self.view()
    }

    pub fn toggle_acceptor(&mut self, id: &str) -> ResolvedView<'_> {
        self.selection.toggle_acceptor(id);
        self.view()
    }

    pub fn clear_donor(&mut self) -> ResolvedView<'_> {
        self.selection.clear_donor();
        self.view()
    }

    pub fn clear_acceptor(&mut self) -> ResolvedView<'_> {
        self.selection.clear_acceptor();
        self.view()
    }

    pub fn reset(&mut self) -> ResolvedView<'_> {
        self.selection.reset();
        self.view()
    }

    /// The selected donor's record, if one is selected and known to the dataset.
    pub fn selected_donor(&self) -> Option<&Donor> {
        self.selection
            .state()
            .donor()
            .and_then(|id| self.store.donor(id))
    }

    /// The selected acceptor's record, if one is selected and known to the dataset.
    pub fn selected_acceptor(&self) -> Option<&Acceptor> {
        self.selection
            .state()
            .acceptor()
            .and_then(|id| self.store.acceptor(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::source::DatasetDocuments;
    use crate::engine::resolver::ComplexResult;

    fn documents() -> DatasetDocuments {
        DatasetDocuments {
            donors: r#"{"urea": {"HOMO (eV)": -6.9}}"#.to_string(),
            acceptors: r#"{"choline_chloride": {}, "betaine": {}}"#.to_string(),
            complexes: r#"{
                "u_b": {"HBD": "urea", "HBA": "betaine", "EFI Score": 6.0, "Interaction Energy (kcal/mol)": -9.0},
                "u_c": {"HBD": "urea", "HBA": "choline_chloride", "EFI Score": 8.5, "Interaction Energy (kcal/mol)": -14.0}
            }"#
            .to_string(),
        }
    }

    #[test]
    fn session_before_load_reports_nothing() {
        let mut session = ScreeningSession::new();
        assert_eq!(session.select_donor("urea"), ResolvedView::Empty);
        assert!(session.selected_donor().is_none());
    }

    #[test]
    fn picks_recompute_the_view() {
        let mut session = ScreeningSession::new();
        session.load(&documents()).unwrap();

        match session.select_donor("urea") {
            ResolvedView::CandidateAcceptors(list) => {
                let names: Vec<_> = list.iter().map(|c| c.molecule.name.as_str()).collect();
                assert_eq!(names, vec!["choline chloride", "betaine"]);
            }
            other => panic!("Expected candidate acceptors, got {:?}", other),
        }

        match session.select_acceptor("betaine") {
            ResolvedView::ComplexResult(ComplexResult::Found(found)) => {
                assert_eq!(found.complex.efi_score, 6.0);
            }
            other => panic!("Expected a found complex, got {:?}", other),
        }

        assert_eq!(
            session.selected_donor().map(|d| d.id.as_str()),
            Some("urea")
        );
        assert_eq!(
            session.selected_acceptor().map(|a| a.id.as_str()),
            Some("betaine")
        );
    }

    #[test]
    fn clearing_donor_switches_to_candidate_donors() {
        let mut session = ScreeningSession::new();
        session.load(&documents()).unwrap();
        session.select_donor("urea");
        session.select_acceptor("betaine");

        match session.clear_donor() {
            ResolvedView::CandidateDonors(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].molecule.id.as_str(), "urea");
            }
            other => panic!("Expected candidate donors, got {:?}", other),
        }
        assert_eq!(session.reset(), ResolvedView::Empty);
    }

    #[test]
    fn toggling_the_same_acceptor_returns_to_candidates() {
        let mut session = ScreeningSession::new();
        session.load(&documents()).unwrap();
        session.toggle_donor("urea");
        session.toggle_acceptor("betaine");

        assert!(matches!(
            session.toggle_acceptor("betaine"),
            ResolvedView::CandidateAcceptors(_)
        ));
        assert!(matches!(
            session.clear_acceptor(),
            ResolvedView::CandidateAcceptors(_)
        ));
    }
}
