//! Local fallback backend: deterministic template rendering, no network.

use chrono::{DateTime, Local};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, DiagnosticRequest, GenerationError, format_thousands};
use crate::ports::{Report, ReportBackend};

const TEMPLATE_NAME: &str = "diagnostic_report";

const TEMPLATE: &str = r#"# Diagnostic urbain : {{ city }}

## Résumé exécutif
Ce rapport présente un diagnostic synthétique de {{ city }}, établi à partir
des défis et des priorités déclarés lors de la collecte. Il vise à orienter
les décisions d'aménagement à court et moyen terme.

## Contexte démographique
{{ city }} compte environ {{ population }} habitants. Cette assise
démographique conditionne le dimensionnement des services urbains et des
infrastructures de base.

## Analyse des défis
{% if challenges -%}
{% for challenge in challenges -%}
- {{ challenge }} : défi signalé par les acteurs locaux, appelant une réponse structurée.
{% endfor -%}
{% else -%}
Aucun défi majeur identifié.
{% endif %}
## Recommandations
{% if priorities -%}
{% for priority in priorities -%}
- Axe prioritaire : {{ priority|lower }}, à intégrer dans l'ensemble des décisions d'aménagement.
{% endfor -%}
{% else -%}
Aucune priorité spécifique définie.
{% endif -%}
{% if comment %}
Remarque transmise : {{ comment }}
{% endif %}
## Conclusion
Le diagnostic de {{ city }} appelle une mise en œuvre progressive, appuyée
sur des indicateurs suivis avec les habitants et les services techniques.

Rapport généré le {{ generated_at }}.
"#;

/// Deterministic report renderer.
///
/// Pure function of the request and the supplied timestamp; [`generate`]
/// stamps the current local time.
///
/// [`generate`]: ReportBackend::generate
#[derive(Debug)]
pub struct TemplateReportBackend {
    env: Environment<'static>,
}

impl TemplateReportBackend {
    /// Build the renderer. The embedded template is parsed here, so a
    /// successfully constructed backend holds a known-good template.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| AppError::config_error(format!("Invalid report template: {}", e)))?;

        Ok(Self { env })
    }

    /// Render the report for a fixed timestamp. Identical inputs produce
    /// byte-identical output.
    pub fn render_at(
        &self,
        request: &DiagnosticRequest,
        timestamp: DateTime<Local>,
    ) -> Result<Report, GenerationError> {
        let challenges: Vec<&str> = request.challenges.iter().map(|c| c.label()).collect();
        let priorities: Vec<&str> = request.priorities.iter().map(|p| p.label()).collect();
        let comment = request.comment.as_deref().map(str::trim).filter(|c| !c.is_empty());

        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| GenerationError::Template(e.to_string()))?;

        let body = template
            .render(context! {
                city => request.city,
                population => format_thousands(request.population),
                challenges => challenges,
                priorities => priorities,
                comment => comment,
                generated_at => timestamp.format("%d/%m/%Y à %H:%M").to_string(),
            })
            .map_err(|e| GenerationError::Template(e.to_string()))?;

        Ok(Report { body })
    }
}

impl ReportBackend for TemplateReportBackend {
    fn generate(&self, request: &DiagnosticRequest) -> Result<Report, GenerationError> {
        self.render_at(request, Local::now())
    }
}
