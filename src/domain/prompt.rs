//! Natural-language prompt construction for the remote backend.

use crate::domain::request::{DiagnosticRequest, format_thousands};

/// System message sent ahead of every diagnostic prompt.
pub const SYSTEM_MESSAGE: &str = "Tu es un expert en développement urbain et en planification \
     territoriale. Tu rédiges des rapports de diagnostic clairs, structurés et exploitables.";

/// Build the user prompt by interpolating every request field into the
/// fixed five-section outline.
pub fn build(request: &DiagnosticRequest) -> String {
    let challenges = if request.challenges.is_empty() {
        "aucun défi particulier signalé".to_string()
    } else {
        request.challenges.iter().map(|c| c.label()).collect::<Vec<_>>().join(", ")
    };

    let priorities = if request.priorities.is_empty() {
        "aucune priorité particulière signalée".to_string()
    } else {
        request.priorities.iter().map(|p| p.label()).collect::<Vec<_>>().join(", ")
    };

    let mut prompt = format!(
        "Rédige un rapport de diagnostic urbain pour la ville de {city}, \
         qui compte environ {population} habitants.\n\n\
         Défis identifiés : {challenges}.\n\
         Priorités de développement : {priorities}.\n",
        city = request.city,
        population = format_thousands(request.population),
        challenges = challenges,
        priorities = priorities,
    );

    if let Some(comment) = request.comment.as_deref().filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("Remarques complémentaires : {}\n", comment.trim()));
    }

    prompt.push_str(
        "\nStructure le rapport en cinq sections :\n\
         1. Résumé exécutif\n\
         2. Contexte démographique\n\
         3. Analyse des défis\n\
         4. Recommandations\n\
         5. Conclusion\n",
    );

    prompt
}
