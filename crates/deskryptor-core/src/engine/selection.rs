use crate::core::models::ids::{AcceptorId, DonorId};
use tracing::debug;

/// Which molecules the user has picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    None,
    DonorOnly(DonorId),
    AcceptorOnly(AcceptorId),
    Both(DonorId, AcceptorId),
}

impl SelectionState {
    fn from_parts(donor: Option<DonorId>, acceptor: Option<AcceptorId>) -> Self {
        match (donor, acceptor) {
            (None, None) => SelectionState::None,
            (Some(d), None) => SelectionState::DonorOnly(d),
            (None, Some(a)) => SelectionState::AcceptorOnly(a),
            (Some(d), Some(a)) => SelectionState::Both(d, a),
        }
    }

    fn into_parts(self) -> (Option<DonorId>, Option<AcceptorId>) {
        match self {
            SelectionState::None => (None, None),
            SelectionState::DonorOnly(d) => (Some(d), None),
            SelectionState::AcceptorOnly(a) => (None, Some(a)),
            SelectionState::Both(d, a) => (Some(d), Some(a)),
        }
    }

    pub fn donor(&self) -> Option<&DonorId> {
        match self {
            SelectionState::DonorOnly(d) | SelectionState::Both(d, _) => Some(d),
            _ => None,
        }
    }

    pub fn acceptor(&self) -> Option<&AcceptorId> {
        match self {
            SelectionState::AcceptorOnly(a) | SelectionState::Both(_, a) => Some(a),
            _ => None,
        }
    }
}

/// The donor/acceptor selection state machine.
///
/// The machine only records the raw picks. Each half is independent: changing or
/// clearing one half never touches the other. An empty id is a request to clear that half.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    state: SelectionState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn select_donor(&mut self, id: &str) -> &SelectionState {
        let donor = (!id.is_empty()).then(|| DonorId::from(id));
        self.update(|_, acceptor| (donor, acceptor))
    }

    pub fn select_acceptor(&mut self, id: &str) -> &SelectionState {
        let acceptor = (!id.is_empty()).then(|| AcceptorId::from(id));
        self.update(|donor, _| (donor, acceptor))
    }

    pub fn clear_donor(&mut self) -> &SelectionState {
        self.select_donor("")
    }

    pub fn clear_acceptor(&mut self) -> &SelectionState {
        self.select_acceptor("")
    }

    /// Picks `id` as the donor, or clears the donor if `id` is already the selected one.
    pub fn toggle_donor(&mut self, id: &str) -> &SelectionState {
        if self.state.donor().is_some_and(|d| d.as_str() == id) {
            self.clear_donor()
        } else {
            self.select_donor(id)
        }
    }

    /// Picks `id` as the acceptor, or clears the acceptor if `id` is already the selected one.
    pub fn toggle_acceptor(&mut self, id: &str) -> &SelectionState {
        if self.state.acceptor().is_some_and(|a| a.as_str() == id) {
            self.clear_acceptor()
        } else {
            self.select_acceptor(id)
        }
    }

    pub fn reset(&mut self) -> &SelectionState {
        self.update(|_, _| (None, None))
    }

    fn update(
        &mut self,
        transition: impl FnOnce(
            Option<DonorId>,
            Option<AcceptorId>,
        ) -> (Option<DonorId>, Option<AcceptorId>),
    ) -> &SelectionState {
        let (donor, acceptor) = std::mem::take(&mut self.state).into_parts();
        let (donor, acceptor) = transition(donor, acceptor);
        self.state = SelectionState::from_parts(donor, acceptor);
        debug!("Selection is now {:?}", self.state);
        &self.state
    }
}
