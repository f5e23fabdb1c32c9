use super::descriptor::DescriptorSet;
use super::ids::{AcceptorId, DonorId};

/// A molecule from either the donor or the acceptor collection.
///
/// Donors and acceptors share one shape; which collection a molecule belongs to is
/// carried by its key type `K`, so a donor key can never be looked up among acceptors.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule<K> {
    pub id: K,                             // Join key, unique within its collection
    pub name: String,                      // Display label
    pub formula: String,                   // Chemical formula or identifier string
    pub molecular_weight: Option<f64>,     // `None` when not provided by the source
    pub descriptors: DescriptorSet,
}

pub type Donor = Molecule<DonorId>;
pub type Acceptor = Molecule<AcceptorId>;

impl<K: AsRef<str>> Molecule<K> {
    /// Builds a molecule the way the source documents describe one: only a key and
    /// descriptor values are known, so the display name is derived from the key
    /// (underscores become spaces) and the key doubles as the formula.
    pub fn from_key(id: K, descriptors: DescriptorSet) -> Self {
        let key = id.as_ref();
        Self {
            name: display_name(key),
            formula: key.to_string(),
            molecular_weight: None,
            descriptors,
            id,
        }
    }
}

fn display_name(key: &str) -> String {
    key.replace('_', " ")
}
