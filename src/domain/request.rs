//! The diagnostic request: one submission's worth of city-level inputs.

use crate::domain::AppError;

/// Urban challenge a city may face. Fixed enumeration; labels are the
/// display strings interpolated verbatim into prompts and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    Eau,
    Assainissement,
    Logement,
    Transport,
    Emploi,
    Sante,
    Education,
    Securite,
}

impl Challenge {
    pub const ALL: [Challenge; 8] = [
        Challenge::Eau,
        Challenge::Assainissement,
        Challenge::Logement,
        Challenge::Transport,
        Challenge::Emploi,
        Challenge::Sante,
        Challenge::Education,
        Challenge::Securite,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Challenge::Eau => "Eau",
            Challenge::Assainissement => "Assainissement",
            Challenge::Logement => "Logement",
            Challenge::Transport => "Transport",
            Challenge::Emploi => "Emploi",
            Challenge::Sante => "Santé",
            Challenge::Education => "Éducation",
            Challenge::Securite => "Sécurité",
        }
    }

    /// ASCII slug accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Challenge::Eau => "eau",
            Challenge::Assainissement => "assainissement",
            Challenge::Logement => "logement",
            Challenge::Transport => "transport",
            Challenge::Emploi => "emploi",
            Challenge::Sante => "sante",
            Challenge::Education => "education",
            Challenge::Securite => "securite",
        }
    }

    /// Parse a CLI-supplied name (slug or label, case-insensitive).
    pub fn parse(name: &str) -> Result<Self, AppError> {
        let needle = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == needle || c.label().to_lowercase() == needle)
            .ok_or_else(|| AppError::InvalidChallenge {
                name: name.to_string(),
                available: slug_list(Self::ALL.iter().map(|c| c.slug())),
            })
    }
}

/// Strategic priority for the diagnostic. Fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Durabilite,
    InclusionSociale,
    DeveloppementEconomique,
    ResilienceClimatique,
    Gouvernance,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::Durabilite,
        Priority::InclusionSociale,
        Priority::DeveloppementEconomique,
        Priority::ResilienceClimatique,
        Priority::Gouvernance,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Durabilite => "Durabilité",
            Priority::InclusionSociale => "Inclusion sociale",
            Priority::DeveloppementEconomique => "Développement économique",
            Priority::ResilienceClimatique => "Résilience climatique",
            Priority::Gouvernance => "Gouvernance",
        }
    }

    /// ASCII slug accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Priority::Durabilite => "durabilite",
            Priority::InclusionSociale => "inclusion",
            Priority::DeveloppementEconomique => "economie",
            Priority::ResilienceClimatique => "resilience",
            Priority::Gouvernance => "gouvernance",
        }
    }

    /// Parse a CLI-supplied name (slug or label, case-insensitive).
    pub fn parse(name: &str) -> Result<Self, AppError> {
        let needle = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == needle || p.label().to_lowercase() == needle)
            .ok_or_else(|| AppError::InvalidPriority {
                name: name.to_string(),
                available: slug_list(Self::ALL.iter().map(|p| p.slug())),
            })
    }
}

/// Engine used to turn a request into report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Remote chat-completion API.
    Remote,
    /// Deterministic local template, no network.
    #[default]
    Local,
}

impl BackendKind {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name.trim().to_lowercase().as_str() {
            "remote" => Ok(BackendKind::Remote),
            "local" => Ok(BackendKind::Local),
            _ => Err(AppError::InvalidBackend(name.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Remote => "remote",
            BackendKind::Local => "local",
        }
    }
}

fn slug_list<'a>(slugs: impl Iterator<Item = &'a str>) -> String {
    slugs.collect::<Vec<_>>().join(", ")
}

/// Full set of user-supplied fields for one report generation.
///
/// Transient: built at submission time, consumed once by a backend,
/// discarded after render.
#[derive(Debug, Clone)]
pub struct DiagnosticRequest {
    pub city: String,
    pub population: u64,
    pub challenges: Vec<Challenge>,
    pub priorities: Vec<Priority>,
    pub comment: Option<String>,
    pub backend: BackendKind,
}

/// Wizard preselection for challenges.
pub const DEFAULT_CHALLENGES: [Challenge; 2] = [Challenge::Eau, Challenge::Logement];

/// Wizard preselection for priorities.
pub const DEFAULT_PRIORITIES: [Priority; 1] = [Priority::Durabilite];

/// Group an integer with commas every three digits (1000000 -> "1,000,000").
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
