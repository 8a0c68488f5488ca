mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn remote_backend_prints_completion_verbatim() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r###"{"choices": [{"message": {"content": "## Résumé exécutif\nRapport distant."}}]}"###,
        )
        .create();

    let config = ctx.write_config(&format!("[api]\napi_url = \"{}\"\n", server.url()));

    ctx.cli()
        .args(["diagnose", "--city", "Nouakchott", "--population", "1000000"])
        .args(["--backend", "remote", "--config"])
        .arg(&config)
        .env("OPENAI_API_KEY", "sk-test")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rapport distant."));
}

#[test]
fn remote_failure_is_rendered_inline_not_fatal() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server.mock("POST", "/").with_status(429).with_body("Quota exceeded").create();

    let config = ctx.write_config(&format!("[api]\napi_url = \"{}\"\n", server.url()));

    ctx.cli()
        .args(["diagnose", "--city", "Nouakchott", "--population", "1000000"])
        .args(["--backend", "remote", "--config"])
        .arg(&config)
        .env("OPENAI_API_KEY", "sk-test")
        .assert()
        .success()
        .stdout(predicate::str::contains("La génération du rapport a échoué"))
        .stdout(predicate::str::contains("Quota exceeded"));
}

#[test]
fn remote_backend_requires_api_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "diagnose",
            "--city",
            "Nouakchott",
            "--population",
            "1000000",
            "--backend",
            "remote",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}
