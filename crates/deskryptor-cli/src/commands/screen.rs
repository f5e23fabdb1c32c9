use crate::cli::ScreenArgs;
use crate::config;
use crate::data::DataManager;
use crate::error::Result;
use crate::session;
use crate::utils::format;
use deskryptor::engine::resolver::{Candidate, ComplexResult, ResolvedView};
use deskryptor::workflows::screen::ScreeningSession;
use std::fmt::Write;
use tracing::{info, warn};

pub async fn run(args: ScreenArgs) -> Result<()> {
    info!("Initializing data manager...");
    let data_manager = DataManager::new()?;
    let app_config = config::build_config(&args.dataset, None, &data_manager)?;

    let mut session = session::open_session(&app_config).await?;

    if let Some(donor) = &args.donor {
        session.select_donor(donor);
    }
    if let Some(acceptor) = &args.acceptor {
        session.select_acceptor(acceptor);
    }
    warn_on_unknown_picks(&session);

    print!("{}", render(&session));
    Ok(())
}

fn warn_on_unknown_picks(session: &ScreeningSession) {
    let state = session.state();
    if let Some(id) = state.donor() {
        if session.selected_donor().is_none() {
            warn!("Donor '{}' is not in the dataset.", id);
        }
    }
    if let Some(id) = state.acceptor() {
        if session.selected_acceptor().is_none() {
            warn!("Acceptor '{}' is not in the dataset.", id);
        }
    }
}

/// Renders the session's current view as terminal text.
pub fn render(session: &ScreeningSession) -> String {
    let mut out = String::new();
    let state = session.state();

    match session.view() {
        ResolvedView::Empty => {
            out.push_str("No donor or acceptor selected. Use --donor and/or --acceptor.\n");
        }
        ResolvedView::CandidateAcceptors(list) => {
            let donor_id = state.donor().map(|d| d.as_str()).unwrap_or_default();
            if let Some(donor) = session.selected_donor() {
                out.push_str(&format::molecule_card("Donor", donor));
                out.push('\n');
            }
            candidate_list(&mut out, "acceptors", donor_id, &list);
        }
        ResolvedView::CandidateDonors(list) => {
            let acceptor_id = state.acceptor().map(|a| a.as_str()).unwrap_or_default();
            if let Some(acceptor) = session.selected_acceptor() {
                out.push_str(&format::molecule_card("Acceptor", acceptor));
                out.push('\n');
            }
            candidate_list(&mut out, "donors", acceptor_id, &list);
        }
        ResolvedView::ComplexResult(ComplexResult::Found(found)) => {
            if let Some(donor) = found.donor {
                out.push_str(&format::molecule_card("Donor", donor));
                out.push('\n');
            }
            if let Some(acceptor) = found.acceptor {
                out.push_str(&format::molecule_card("Acceptor", acceptor));
                out.push('\n');
            }
            out.push_str(&format::complex_card(found.complex));
        }
        ResolvedView::ComplexResult(ComplexResult::Absent { donor, acceptor }) => {
            if let Some(donor) = donor {
                out.push_str(&format::molecule_card("Donor", donor));
                out.push('\n');
            }
            if let Some(acceptor) = acceptor {
                out.push_str(&format::molecule_card("Acceptor", acceptor));
                out.push('\n');
            }
            let donor_id = state.donor().map(|d| d.as_str()).unwrap_or_default();
            let acceptor_id = state.acceptor().map(|a| a.as_str()).unwrap_or_default();
            let _ = writeln!(
                out,
                "No complex data available for {} + {}.",
                donor_id, acceptor_id
            );
            out.push_str("Would you like to compute it and add it to the database?\n");
        }
    }
    out
}

fn candidate_list<K: AsRef<str>>(
    out: &mut String,
    kind: &str,
    anchor: &str,
    candidates: &[Candidate<'_, K>],
) {
    if candidates.is_empty() {
        let _ = writeln!(out, "No compatible {} found for '{}'.", kind, anchor);
        return;
    }
    let _ = writeln!(
        out,
        "Compatible {} for '{}' ({}):",
        kind,
        anchor,
        candidates.len()
    );
    for (i, candidate) in candidates.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3}. {} [{}] (EFI: {:.2})",
            i + 1,
            candidate.molecule.name,
            candidate.molecule.id.as_ref(),
            candidate.efi_score()
        );
    }
}
