use super::error::LoadError;
use crate::core::io::json::{self, DocumentError};
use crate::core::io::source::{Collection, DatasetSource};
use crate::core::models::complex::Complex;
use crate::core::models::ids::{AcceptorId, DonorId};
use crate::core::models::molecule::{Acceptor, Donor};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, warn};

/// The three collections of a successfully loaded dataset, with lookup indexes.
///
/// Collections keep the order in which they were loaded; that order is what stable
/// ranking and first-match complex lookup are defined against.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    donors: Vec<Donor>,
    acceptors: Vec<Acceptor>,
    complexes: Vec<Complex>,
    donor_index: HashMap<DonorId, usize>,
    acceptor_index: HashMap<AcceptorId, usize>,
}

impl Dataset {
    pub fn new(donors: Vec<Donor>, acceptors: Vec<Acceptor>, complexes: Vec<Complex>) -> Self {
        let donor_index = build_index(&donors, |d| &d.id, Collection::Donors);
        let acceptor_index = build_index(&acceptors, |a| &a.id, Collection::Acceptors);

        let dataset = Self {
            donors,
            acceptors,
            complexes,
            donor_index,
            acceptor_index,
        };
        dataset.report_integrity();
        dataset
    }

    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    pub fn acceptors(&self) -> &[Acceptor] {
        &self.acceptors
    }

    pub fn complexes(&self) -> &[Complex] {
        &self.complexes
    }

    /// Logs dangling references and duplicate pairs. Neither is an error: dangling rows
    /// are skipped during resolution and duplicates resolve to their first occurrence.
    fn report_integrity(&self) {
        let mut seen = HashSet::new();
        for complex in &self.complexes {
            if !self.donor_index.contains_key(&complex.donor_id) {
                warn!(
                    "Complex references unknown donor '{}' (acceptor '{}').",
                    complex.donor_id, complex.acceptor_id
                );
            }
            if !self.acceptor_index.contains_key(&complex.acceptor_id) {
                warn!(
                    "Complex references unknown acceptor '{}' (donor '{}').",
                    complex.acceptor_id, complex.donor_id
                );
            }
            if !seen.insert((&complex.donor_id, &complex.acceptor_id)) {
                warn!(
                    "Duplicate complex for pair ({}, {}); the first record in load order is used.",
                    complex.donor_id, complex.acceptor_id
                );
            }
        }
    }
}

fn build_index<T, K>(items: &[T], key: impl Fn(&T) -> &K, collection: Collection) -> HashMap<K, usize>
where
    K: Clone + Eq + std::hash::Hash + std::fmt::Display,
{
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let id = key(item);
        if index.contains_key(id) {
            warn!(
                "Duplicate id '{}' in {}; keeping the first occurrence.",
                id, collection
            );
            continue;
        }
        index.insert(id.clone(), i);
    }
    index
}

#[derive(Debug, Clone, Default)]
enum LoadState {
    #[default]
    Unloaded,
    Loaded(Dataset),
}

/// Read-only, load-once holder of the screening dataset.
///
/// Before a successful [`load`](DatasetStore::load) every accessor returns an empty
/// collection and every lookup misses. Loading is all-or-nothing: if any of the three
/// documents cannot be read or parsed, nothing is exposed and the store stays unloaded.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    state: LoadState,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that is already loaded with `dataset`.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            state: LoadState::Loaded(dataset),
        }
    }

    /// Loads all three collections from `source`.
    ///
    /// Calling this again after a successful load is a no-op. After a failure the store
    /// remains unloaded and the call may be retried.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] naming the first collection that could not be read, parsed,
    /// or validated.
    #[instrument(skip_all, name = "dataset_load")]
    pub fn load<S: DatasetSource + ?Sized>(&mut self, source: &S) -> Result<(), LoadError> {
        if self.is_loaded() {
            debug!("Dataset already loaded; ignoring repeated load request.");
            return Ok(());
        }

        let donors = read_collection(source, Collection::Donors, json::parse_donors)?;
        let acceptors = read_collection(source, Collection::Acceptors, json::parse_acceptors)?;
        let complexes = read_collection(source, Collection::Complexes, json::parse_complexes)?;

        info!(
            "Loaded dataset: {} donors, {} acceptors, {} complexes.",
            donors.len(),
            acceptors.len(),
            complexes.len()
        );
        self.state = LoadState::Loaded(Dataset::new(donors, acceptors, complexes));
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.state {
            LoadState::Loaded(dataset) => Some(dataset),
            LoadState::Unloaded => None,
        }
    }

    pub fn donors(&self) -> &[Donor] {
        self.dataset().map(Dataset::donors).unwrap_or(&[])
    }

    pub fn acceptors(&self) -> &[Acceptor] {
        self.dataset().map(Dataset::acceptors).unwrap_or(&[])
    }

    pub fn complexes(&self) -> &[Complex] {
        self.dataset().map(Dataset::complexes).unwrap_or(&[])
    }

    pub fn donor(&self, id: &DonorId) -> Option<&Donor> {
        let dataset = self.dataset()?;
        dataset.donor_index.get(id).map(|&i| &dataset.donors[i])
    }

    pub fn acceptor(&self, id: &AcceptorId) -> Option<&Acceptor> {
        let dataset = self.dataset()?;
        dataset.acceptor_index.get(id).map(|&i| &dataset.acceptors[i])
    }

    /// The complex for a pair, taking the first match in loaded order.
    pub fn complex_for(&self, donor_id: &DonorId, acceptor_id: &AcceptorId) -> Option<&Complex> {
        self.complexes()
            .iter()
            .find(|c| c.is_pair(donor_id, acceptor_id))
    }

    pub fn complexes_for_donor<'a>(
        &'a self,
        donor_id: &'a DonorId,
    ) -> impl Iterator<Item = &'a Complex> + 'a {
        self.complexes()
            .iter()
            .filter(move |c| c.donor_id == *donor_id)
    }

    pub fn complexes_for_acceptor<'a>(
        &'a self,
        acceptor_id: &'a AcceptorId,
    ) -> impl Iterator<Item = &'a Complex> + 'a {
        self.complexes()
            .iter()
            .filter(move |c| c.acceptor_id == *acceptor_id)
    }
}

fn read_collection<S, T>(
    source: &S,
    collection: Collection,
    parse: fn(&str) -> Result<Vec<T>, DocumentError>,
) -> Result<Vec<T>, LoadError>
where
    S: DatasetSource + ?Sized,
{
    let text = source
        .read(collection)
        .map_err(|source| LoadError::Source { collection, source })?;
    parse(&text).map_err(|e| LoadError::from_document(collection, e))
}
