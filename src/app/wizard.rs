//! Interactive collection of the diagnostic request fields.

use dialoguer::{Input, MultiSelect, Select};

use crate::domain::{
    AppError, BackendKind, Challenge, DEFAULT_CHALLENGES, DEFAULT_PRIORITIES, DiagnosticRequest,
    Priority,
};

fn interaction_error(what: &str, err: dialoguer::Error) -> AppError {
    AppError::config_error(format!("{what} failed: {err}"))
}

/// Run the submission wizard and return the collected request.
///
/// Constraints live in the widgets themselves: the population input rejects
/// values below the configured floor, the selection lists only offer the
/// fixed enumerations. The comment is unconstrained and may stay empty.
pub fn collect_request(min_population: u64) -> Result<DiagnosticRequest, AppError> {
    let city: String = Input::new()
        .with_prompt("Nom de la ville")
        .validate_with(|input: &String| {
            if input.trim().is_empty() { Err("Le nom de la ville est requis") } else { Ok(()) }
        })
        .interact_text()
        .map_err(|e| interaction_error("City input", e))?;

    let population: u64 = Input::new()
        .with_prompt("Population")
        .validate_with(move |value: &u64| {
            if *value >= min_population {
                Ok(())
            } else {
                Err(format!("La population doit être d'au moins {min_population}"))
            }
        })
        .interact_text()
        .map_err(|e| interaction_error("Population input", e))?;

    let challenge_items: Vec<&str> = Challenge::ALL.iter().map(|c| c.label()).collect();
    let challenge_defaults: Vec<bool> =
        Challenge::ALL.iter().map(|c| DEFAULT_CHALLENGES.contains(c)).collect();
    let challenges = MultiSelect::new()
        .with_prompt("Défis identifiés")
        .items(&challenge_items)
        .defaults(&challenge_defaults)
        .interact()
        .map_err(|e| interaction_error("Challenge selection", e))?
        .into_iter()
        .map(|i| Challenge::ALL[i])
        .collect();

    let priority_items: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
    let priority_defaults: Vec<bool> =
        Priority::ALL.iter().map(|p| DEFAULT_PRIORITIES.contains(p)).collect();
    let priorities = MultiSelect::new()
        .with_prompt("Priorités de développement")
        .items(&priority_items)
        .defaults(&priority_defaults)
        .interact()
        .map_err(|e| interaction_error("Priority selection", e))?
        .into_iter()
        .map(|i| Priority::ALL[i])
        .collect();

    let comment: String = Input::new()
        .with_prompt("Commentaire (optionnel)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| interaction_error("Comment input", e))?;

    let backend_items = ["Modèle distant", "Modèle local (hors ligne)"];
    let backend = match Select::new()
        .with_prompt("Moteur de génération")
        .items(&backend_items)
        .default(1)
        .interact()
        .map_err(|e| interaction_error("Backend selection", e))?
    {
        0 => BackendKind::Remote,
        _ => BackendKind::Local,
    };

    Ok(DiagnosticRequest {
        city: city.trim().to_string(),
        population,
        challenges,
        priorities,
        comment: if comment.trim().is_empty() { None } else { Some(comment.trim().to_string()) },
        backend,
    })
}
