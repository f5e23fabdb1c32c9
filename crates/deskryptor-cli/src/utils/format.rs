use deskryptor::core::models::complex::Complex;
use deskryptor::core::models::descriptor::{Descriptor, DescriptorSet};
use deskryptor::core::models::molecule::Molecule;
use deskryptor::workflows::catalog::ComplexRow;
use std::fmt::Write;

const NOT_AVAILABLE: &str = "N/A";

pub fn descriptor_label(descriptor: Descriptor) -> &'static str {
    match descriptor {
        Descriptor::Homo => "HOMO",
        Descriptor::Lumo => "LUMO",
        Descriptor::Gap => "HOMO-LUMO Gap",
        Descriptor::Energy => "Total Energy",
        Descriptor::Dipole => "Dipole Moment",
        Descriptor::Volume => "Volume",
    }
}

pub fn value(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn descriptor_lines(out: &mut String, descriptors: &DescriptorSet) {
    for (descriptor, v) in descriptors.iter() {
        if descriptor == Descriptor::Volume && v.is_none() {
            continue;
        }
        let _ = writeln!(
            out,
            "  {:<15} {} {}",
            format!("{}:", descriptor_label(descriptor)),
            value(v, 4),
            descriptor.unit()
        );
    }
}

/// Multi-line descriptor card for one molecule.
pub fn molecule_card<K: AsRef<str>>(title: &str, molecule: &Molecule<K>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {} [{}]", title, molecule.name, molecule.id.as_ref());
    let _ = writeln!(out, "  {:<15} {}", "Formula:", molecule.formula);
    let _ = writeln!(
        out,
        "  {:<15} {}",
        "Mol. weight:",
        value(molecule.molecular_weight, 2)
    );
    descriptor_lines(&mut out, &molecule.descriptors);
    out
}

/// Multi-line card for a complex.
pub fn complex_card(complex: &Complex) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Complex: {} + {} ({})",
        complex.donor_id, complex.acceptor_id, complex.ratio
    );
    let _ = writeln!(out, "  {:<15} {:.2}", "EFI score:", complex.efi_score);
    let _ = writeln!(
        out,
        "  {:<15} {:.2} kcal/mol",
        "Interaction:", complex.interaction_energy
    );
    descriptor_lines(&mut out, &complex.descriptors);
    out
}

pub fn molecule_table<K: AsRef<str>>(molecules: &[Molecule<K>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<28} {:>9} {:>9} {:>9} {:>13} {:>9}",
        "NAME", "HOMO", "LUMO", "GAP", "ENERGY", "DIPOLE"
    );
    for m in molecules {
        let d = &m.descriptors;
        let _ = writeln!(
            out,
            "{:<28} {:>9} {:>9} {:>9} {:>13} {:>9}",
            m.name,
            value(d.get(Descriptor::Homo), 3),
            value(d.get(Descriptor::Lumo), 3),
            value(d.get(Descriptor::Gap), 3),
            value(d.get(Descriptor::Energy), 4),
            value(d.get(Descriptor::Dipole), 3),
        );
    }
    out
}

/// Ranked complex table. Highlighted rows are marked with `*`.
pub fn complex_table(rows: &[ComplexRow<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:>4} {:<24} {:<24} {:>6} {:>8} {:>12}",
        "RANK", "DONOR", "ACCEPTOR", "RATIO", "EFI", "E_INT"
    );
    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {:>4} {:<24} {:<24} {:>6} {:>8.2} {:>12.2}",
            if row.highlighted { '*' } else { ' ' },
            i + 1,
            row.donor_name,
            row.acceptor_name,
            row.complex.ratio,
            row.complex.efi_score,
            row.complex.interaction_energy,
        );
    }
    out
}
