//! The enhancement protocol driven by scripted completion clients.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use herald_config::EnhancementConfig;
use herald_core::requirements::{BrandColors, ContentContext, TemplateRequirements};
use herald_core::{PreferredVersion, RequirementsBundle};
use herald_enhance::{Enhancer, FALLBACK_REASON_PREFIX};
use herald_llm::{CompletionClient, CompletionRequest, LlmError};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use rstest::rstest;

const ORIGINAL: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Горящие туры в Сочи</title>
</head>
<body>
<table width="600" style="margin:0 auto"><tr><td style="padding:24px">
<h1 style="color:#4BFF7E">Сочи ждёт вас этим летом</h1>
<p style="font-size:16px">Тёплое море, горы и лучшие отели побережья по специальной цене для подписчиков</p>
<img src="assets/collected/sochi-hero.jpg" alt="Сочи">
<a href="https://example.com/search" class="btn" style="background:#4BFF7E">Найти билеты</a>
</td></tr></table>
</body>
</html>"#;

/// Replays a fixed list of responses and records every prompt it receives.
struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(responses: Vec<Result<String, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.prompts.lock().push(request.prompt.clone());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::Parse("script exhausted".into())))
    }
}

fn enhancer(client: Arc<ScriptedClient>, max_attempts: u32) -> Enhancer {
    Enhancer::new(
        client,
        EnhancementConfig {
            max_attempts,
            ..EnhancementConfig::default()
        },
    )
}

fn bundle() -> RequirementsBundle {
    RequirementsBundle {
        template: TemplateRequirements {
            brand_colors: BrandColors(vec!["#4BFF7E".into()]),
            ..TemplateRequirements::default()
        },
        content: ContentContext {
            subject: Some("Горящие туры в Сочи".into()),
            ..ContentContext::default()
        },
        ..RequirementsBundle::default()
    }
}

/// The original with a media block added to the head.
fn improved() -> String {
    ORIGINAL.replace(
        "</head>",
        "<style>@media (max-width: 600px) { table { width: 100% !important; } } a { border-radius: 8px; }</style>\n</head>",
    )
}

/// The original padded with a head comment so it grows by exactly `percent`.
fn grown_by(percent: usize) -> (String, String) {
    let mut original = ORIGINAL.to_string();
    while original.len() % 100 != 0 {
        original.push('\n');
    }
    let extra = original.len() * percent / 100;
    let comment = format!("<!--{}-->", "x".repeat(extra - 7));
    let candidate = original.replacen("<head>", &format!("<head>{comment}"), 1);
    (original, candidate)
}

#[tokio::test]
async fn accepted_rewrite_reports_detected_markers() {
    let client = ScriptedClient::new(vec![Ok(improved())]);
    let result = enhancer(client.clone(), 1).enhance(ORIGINAL, &bundle()).await;

    assert_eq!(result.versions.preferred, PreferredVersion::Optimized);
    assert_eq!(result.enhanced_html, improved());
    assert_eq!(result.versions.original, ORIGINAL);
    assert!(!result.validation.has_warnings);
    assert!(result.validation.integrity_check.as_ref().is_some_and(|i| i.is_valid));
    assert_eq!(
        result.enhancements_made,
        vec![
            "Добавлена адаптивность для мобильных устройств".to_string(),
            "Добавлены скруглённые углы (border-radius)".to_string(),
            "Добавлены alt-атрибуты для изображений".to_string(),
            "Использованы фирменные цвета: #4BFF7E".to_string(),
        ]
    );
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn prompt_carries_the_template_and_subject() {
    let client = ScriptedClient::new(vec![Ok(improved())]);
    enhancer(client.clone(), 1).enhance(ORIGINAL, &bundle()).await;

    let prompts = client.prompts.lock();
    assert!(prompts[0].contains(ORIGINAL));
    assert!(prompts[0].contains("- Subject: Горящие туры в Сочи"));
}

#[tokio::test]
async fn fenced_response_is_unwrapped() {
    let client = ScriptedClient::new(vec![Ok(format!("```html\n{}\n```", improved()))]);
    let result = enhancer(client, 1).enhance(ORIGINAL, &bundle()).await;
    assert_eq!(result.versions.preferred, PreferredVersion::Optimized);
    assert_eq!(result.enhanced_html, improved());
}

#[tokio::test]
async fn unfenced_response_is_kept_verbatim() {
    let raw = format!("\n{}\n\n", improved());
    let client = ScriptedClient::new(vec![Ok(raw.clone())]);
    let result = enhancer(client, 1).enhance(ORIGINAL, &bundle()).await;
    assert_eq!(result.versions.preferred, PreferredVersion::Optimized);
    assert_eq!(result.enhanced_html, raw);
    assert_eq!(result.versions.optimized, raw);
}

#[tokio::test]
async fn growth_of_250_percent_is_rejected_as_bloat() {
    let (original, candidate) = grown_by(250);
    let client = ScriptedClient::new(vec![Ok(candidate.clone())]);
    let result = enhancer(client, 1).enhance(&original, &bundle()).await;

    assert!((result.size_analysis.change_percent - 250.0).abs() < 1e-9);
    assert_eq!(result.versions.preferred, PreferredVersion::Original);
    assert_eq!(
        result.enhancements_made,
        vec!["Слишком большое увеличение размера: 250.0%".to_string()]
    );
    assert_eq!(result.enhanced_html, original);
    assert_eq!(result.versions.optimized, candidate);
}

#[tokio::test]
async fn missing_closing_body_keeps_original() {
    let candidate = improved().replace("</body>", "");
    let client = ScriptedClient::new(vec![Ok(candidate)]);
    let result = enhancer(client, 1).enhance(ORIGINAL, &bundle()).await;

    assert_eq!(result.versions.preferred, PreferredVersion::Original);
    assert!(result.protection_triggered());
    assert!(
        result
            .enhancements_made
            .contains(&"Нарушена HTML-структура: отсутствует </body>".to_string())
    );
    assert_eq!(result.enhanced_html, ORIGINAL);
}

#[tokio::test]
async fn shrinkage_that_drops_the_title_always_keeps_original() {
    // A skeleton: the title, body text, and images are all gone.
    let headless = "<html><head></head><body></body></html>".to_string();
    let client = ScriptedClient::new(vec![Ok(headless)]);
    let result = enhancer(client, 1).enhance(ORIGINAL, &bundle()).await;

    assert!(result.size_analysis.change_percent < -15.0);
    assert_eq!(result.versions.preferred, PreferredVersion::Original);
    assert!(
        result.enhancements_made[0].starts_with("Обнаружено обрезание контента"),
        "{:?}",
        result.enhancements_made
    );
}

#[rstest]
#[case::network(Err(LlmError::Api { status: 502, message: "bad gateway".into() }))]
#[case::blank(Ok("   \n".to_string()))]
#[case::empty_fence(Ok("```html\n```".to_string()))]
#[tokio::test]
async fn model_failure_falls_back_to_original(#[case] response: Result<String, LlmError>) {
    let client = ScriptedClient::new(vec![response]);
    let result = enhancer(client, 1).enhance(ORIGINAL, &bundle()).await;

    assert_eq!(result.versions.preferred, PreferredVersion::Original);
    assert_eq!(result.enhanced_html, ORIGINAL);
    assert_eq!(result.versions.optimized, ORIGINAL);
    assert_eq!(result.enhancements_made.len(), 1);
    assert!(result.enhancements_made[0].starts_with(FALLBACK_REASON_PREFIX));
    assert!(result.validation.has_warnings);
    assert!(result.validation.integrity_check.is_none());
    assert_eq!(result.size_analysis.change_bytes, 0);
}

#[tokio::test]
async fn retry_stops_at_first_accepted_candidate() {
    let broken = improved().replace("</html>", "");
    let client = ScriptedClient::new(vec![Ok(broken), Ok(improved()), Ok(improved())]);
    let result = enhancer(client.clone(), 3).enhance(ORIGINAL, &bundle()).await;

    assert_eq!(result.versions.preferred, PreferredVersion::Optimized);
    assert_eq!(result.attempts, 2);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn retry_keeps_last_protected_result_when_budget_runs_out() {
    let broken = improved().replace("</html>", "");
    let client = ScriptedClient::new(vec![Ok(broken.clone()), Ok(broken.clone())]);
    let result = enhancer(client.clone(), 2).enhance(ORIGINAL, &bundle()).await;

    assert_eq!(result.versions.preferred, PreferredVersion::Original);
    assert_eq!(result.attempts, 2);
    assert_eq!(result.versions.optimized, broken);
    assert_eq!(result.enhanced_html, ORIGINAL);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn failure_on_retry_keeps_previous_protected_result() {
    let broken = improved().replace("</html>", "");
    let client = ScriptedClient::new(vec![Ok(broken.clone())]);
    let result = enhancer(client.clone(), 2).enhance(ORIGINAL, &bundle()).await;

    assert_eq!(result.attempts, 1);
    assert_eq!(result.versions.optimized, broken);
    assert!(
        result
            .enhancements_made
            .contains(&"Нарушена HTML-структура: отсутствует </html>".to_string())
    );
    assert_eq!(client.calls(), 2);
}

#[rstest]
#[case::bloat(grown_by(300))]
#[case::cut((ORIGINAL.to_string(), "<html><body></body></html>".to_string()))]
#[case::unclosed((ORIGINAL.to_string(), ORIGINAL.replace("</html>", "")))]
#[case::accepted((ORIGINAL.to_string(), improved()))]
#[tokio::test]
async fn preferring_original_returns_input_byte_for_byte(#[case] pair: (String, String)) {
    let (input, candidate) = pair;
    let client = ScriptedClient::new(vec![Ok(candidate)]);
    let result = enhancer(client, 1).enhance(&input, &bundle()).await;
    if result.versions.preferred == PreferredVersion::Original {
        assert_eq!(result.enhanced_html, input);
    } else {
        assert_eq!(result.enhanced_html, result.versions.optimized);
    }
}
