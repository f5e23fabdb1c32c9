use super::descriptor::DescriptorSet;
use super::ids::{AcceptorId, DonorId};

/// Ratio reported when the source document does not state one.
pub const DEFAULT_RATIO: &str = "1:1";

/// A precomputed donor–acceptor pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct Complex {
    pub donor_id: DonorId,         // Foreign key into the donor collection
    pub acceptor_id: AcceptorId,   // Foreign key into the acceptor collection
    pub ratio: String,             // Display only, e.g. "1:1"
    pub efi_score: f64,            // Eutectic formation index; higher is more favorable
    pub interaction_energy: f64,   // Display only, kcal/mol as given by the source
    pub descriptors: DescriptorSet,
}

impl Complex {
    pub fn is_pair(&self, donor_id: &DonorId, acceptor_id: &AcceptorId) -> bool {
        self.donor_id == *donor_id && self.acceptor_id == *acceptor_id
    }
}
