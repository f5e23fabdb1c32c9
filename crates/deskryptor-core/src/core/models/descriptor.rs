use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Quantum-chemical descriptors tracked for molecules and complexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Descriptor {
    Homo,   // HOMO energy (eV)
    Lumo,   // LUMO energy (eV)
    Gap,    // HOMO-LUMO gap (eV)
    Energy, // Total energy (Eh)
    Dipole, // Dipole moment (D)
    Volume, // Molecular volume, not present in the current source documents
}

const DESCRIPTOR_COUNT: usize = 6;

/// Field names used by the raw dataset documents, mapped to the descriptor they carry.
static SOURCE_FIELDS: Map<&'static str, Descriptor> = phf_map! {
    "HOMO (eV)" => Descriptor::Homo,
    "LUMO (eV)" => Descriptor::Lumo,
    "HOMO-LUMO Gap (eV)" => Descriptor::Gap,
    "Total Energy (Eh)" => Descriptor::Energy,
    "Dipole Moment (D)" => Descriptor::Dipole,
};

impl Descriptor {
    pub const ALL: [Descriptor; DESCRIPTOR_COUNT] = [
        Descriptor::Homo,
        Descriptor::Lumo,
        Descriptor::Gap,
        Descriptor::Energy,
        Descriptor::Dipole,
        Descriptor::Volume,
    ];

    /// Resolves a raw document field name (e.g. `"HOMO (eV)"`) to its descriptor.
    pub fn from_source_field(field: &str) -> Option<Self> {
        SOURCE_FIELDS.get(field).copied()
    }

    /// Short lowercase key, used for display labels and CSV headers.
    pub fn key(self) -> &'static str {
        match self {
            Descriptor::Homo => "homo",
            Descriptor::Lumo => "lumo",
            Descriptor::Gap => "gap",
            Descriptor::Energy => "energy",
            Descriptor::Dipole => "dipole",
            Descriptor::Volume => "volume",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Descriptor::Homo | Descriptor::Lumo | Descriptor::Gap => "eV",
            Descriptor::Energy => "Eh",
            Descriptor::Dipole => "D",
            Descriptor::Volume => "Å³",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown descriptor key: '{0}'")]
pub struct UnknownDescriptorError(pub String);

impl FromStr for Descriptor {
    type Err = UnknownDescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Descriptor::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDescriptorError(s.to_string()))
    }
}

/// Values of every [`Descriptor`] for one molecule or complex.
///
/// A value of `None` means the quantity is not available; `Some(0.0)` is a genuine zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DescriptorSet {
    values: [Option<f64>; DESCRIPTOR_COUNT],
}

impl DescriptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, descriptor: Descriptor, value: f64) -> Self {
        self.set(descriptor, Some(value));
        self
    }

    pub fn get(&self, descriptor: Descriptor) -> Option<f64> {
        self.values[descriptor.index()]
    }

    pub fn set(&mut self, descriptor: Descriptor, value: Option<f64>) {
        self.values[descriptor.index()] = value;
    }

    /// Iterates over all descriptors in declaration order, including missing ones.
    pub fn iter(&self) -> impl Iterator<Item = (Descriptor, Option<f64>)> + '_ {
        Descriptor::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Iterates over the descriptors that carry a value.
    pub fn available(&self) -> impl Iterator<Item = (Descriptor, f64)> + '_ {
        self.iter().filter_map(|(d, v)| v.map(|v| (d, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}
