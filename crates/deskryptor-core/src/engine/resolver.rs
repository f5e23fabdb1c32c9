//! Derivation of what a selection shows.
//!
//! Given one anchor molecule, the compatible counterparts are every partner that shares a
//! complex with it, best EFI score first. Given both molecules, the matching complex is
//! looked up. Resolution is a pure function of the selection and the loaded dataset; it
//! keeps no state and never modifies the store.

use super::selection::SelectionState;
use super::store::DatasetStore;
use crate::core::models::complex::Complex;
use crate::core::models::ids::{AcceptorId, DonorId};
use crate::core::models::molecule::{Acceptor, Donor, Molecule};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// A compatible counterpart together with the complex that ranks it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a, K> {
    pub molecule: &'a Molecule<K>,
    pub complex: &'a Complex,
}

impl<K> Candidate<'_, K> {
    pub fn efi_score(&self) -> f64 {
        self.complex.efi_score
    }
}

/// A known complex joined with its donor and acceptor records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexMatch<'a> {
    pub complex: &'a Complex,
    pub donor: Option<&'a Donor>,
    pub acceptor: Option<&'a Acceptor>,
}

/// Outcome of looking up a fully specified pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComplexResult<'a> {
    Found(ComplexMatch<'a>),
    /// No complex is known for the pair. This is an expected outcome, not a failure.
    Absent {
        donor: Option<&'a Donor>,
        acceptor: Option<&'a Acceptor>,
    },
}

impl<'a> ComplexResult<'a> {
    pub fn complex(&self) -> Option<&'a Complex> {
        match self {
            ComplexResult::Found(found) => Some(found.complex),
            ComplexResult::Absent { .. } => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ComplexResult::Absent { .. })
    }
}

/// The derived view for a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedView<'a> {
    Empty,
    CandidateAcceptors(Vec<Candidate<'a, AcceptorId>>),
    CandidateDonors(Vec<Candidate<'a, DonorId>>),
    ComplexResult(ComplexResult<'a>),
}

/// Resolves `state` against `store`. An unloaded store resolves every state to
/// [`ResolvedView::Empty`].
pub fn resolve<'a>(state: &SelectionState, store: &'a DatasetStore) -> ResolvedView<'a> {
    if !store.is_loaded() {
        debug!("Dataset not loaded; resolving {:?} to an empty view.", state);
        return ResolvedView::Empty;
    }

    match state {
        SelectionState::None => ResolvedView::Empty,
        SelectionState::DonorOnly(donor_id) => {
            ResolvedView::CandidateAcceptors(candidate_acceptors(store, donor_id))
        }
        SelectionState::AcceptorOnly(acceptor_id) => {
            ResolvedView::CandidateDonors(candidate_donors(store, acceptor_id))
        }
        SelectionState::Both(donor_id, acceptor_id) => complex_result(store, donor_id, acceptor_id)
            .map_or(ResolvedView::Empty, ResolvedView::ComplexResult),
    }
}

/// Acceptors that form a known complex with `donor_id`, best EFI score first. Empty
/// while the store is unloaded.
pub fn candidate_acceptors<'a>(
    store: &'a DatasetStore,
    donor_id: &DonorId,
) -> Vec<Candidate<'a, AcceptorId>> {
    let ranked = rank_partners(
        store.complexes(),
        |c| c.donor_id == *donor_id,
        |c| &c.acceptor_id,
        |id| store.acceptor(id),
    );
    debug!(
        "Donor '{}' has {} compatible acceptor(s).",
        donor_id,
        ranked.len()
    );
    ranked
}

/// Donors that form a known complex with `acceptor_id`, best EFI score first. Empty
/// while the store is unloaded.
pub fn candidate_donors<'a>(
    store: &'a DatasetStore,
    acceptor_id: &AcceptorId,
) -> Vec<Candidate<'a, DonorId>> {
    let ranked = rank_partners(
        store.complexes(),
        |c| c.acceptor_id == *acceptor_id,
        |c| &c.donor_id,
        |id| store.donor(id),
    );
    debug!(
        "Acceptor '{}' has {} compatible donor(s).",
        acceptor_id,
        ranked.len()
    );
    ranked
}

/// Looks up the complex for a fully specified pair.
///
/// Returns `None` while the store is unloaded: nothing is known yet, so the pair is not
/// reported as absent.
pub fn complex_result<'a>(
    store: &'a DatasetStore,
    donor_id: &DonorId,
    acceptor_id: &AcceptorId,
) -> Option<ComplexResult<'a>> {
    if !store.is_loaded() {
        return None;
    }
    let donor = store.donor(donor_id);
    let acceptor = store.acceptor(acceptor_id);

    let result = match store.complex_for(donor_id, acceptor_id) {
        Some(complex) => ComplexResult::Found(ComplexMatch {
            complex,
            donor,
            acceptor,
        }),
        None => {
            debug!(
                "No complex known for pair ({}, {}).",
                donor_id, acceptor_id
            );
            ComplexResult::Absent { donor, acceptor }
        }
    };
    Some(result)
}

/// Shared ranking for both directions.
///
/// Rows are visited in loaded order. Only the first row per partner is kept, partners
/// missing from their collection are dropped, and the stable sort keeps loaded order
/// among equal scores.
fn rank_partners<'a, K>(
    complexes: &'a [Complex],
    is_anchor: impl Fn(&Complex) -> bool,
    partner_id: impl Fn(&'a Complex) -> &'a K,
    lookup: impl Fn(&K) -> Option<&'a Molecule<K>>,
) -> Vec<Candidate<'a, K>>
where
    K: Eq + Hash + 'a,
{
    let mut seen: HashSet<&K> = HashSet::new();
    let mut candidates: Vec<Candidate<'a, K>> = complexes
        .iter()
        .filter(|&c| is_anchor(c))
        .filter(|&c| seen.insert(partner_id(c)))
        .filter_map(|complex| {
            lookup(partner_id(complex)).map(|molecule| Candidate { molecule, complex })
        })
        .collect();

    candidates.sort_by(|a, b| b.complex.efi_score.total_cmp(&a.complex.efi_score));
    candidates
}
