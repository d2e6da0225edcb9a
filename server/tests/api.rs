use lemmastat::{
    components::{tagger::LemmaDictionary, Component},
    models::LocalModels,
    Analyzer, AnalyzerConfig, Error, Language, PipelineRegistry,
};
use lemmastat_server::{app, AppState};
use serde_json::{json, Value};
use std::{fs::File, sync::Arc, thread, time::Duration};
use tempdir::TempDir;

async fn spawn(registry: PipelineRegistry, config: AnalyzerConfig, timeout: Duration) -> String {
    let analyzer = Arc::new(Analyzer::new(config, Arc::new(registry)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(AppState::new(analyzer, timeout)))
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

async fn spawn_blank() -> String {
    spawn(
        PipelineRegistry::blank(),
        AnalyzerConfig::default(),
        Duration::from_secs(30),
    )
    .await
}

async fn post_json(base: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/analyze", base))
        .json(&body)
        .send()
        .await
        .unwrap();

    (response.status().as_u16(), response.json().await.unwrap())
}

async fn post_raw(base: &str, body: &'static str, content_type: Option<&str>) -> (u16, Value) {
    let mut request = reqwest::Client::new()
        .post(format!("{}/api/analyze", base))
        .body(body);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    let response = request.send().await.unwrap();

    (response.status().as_u16(), response.json().await.unwrap())
}

fn assert_detail(body: &Value) {
    assert!(body["detail"].is_string(), "no detail in {}", body);
}

#[tokio::test]
async fn analyze_russian() {
    let base = spawn_blank().await;
    let (status, body) = post_json(&base, json!({"text": "кот кот собака"})).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "language": "ru",
            "total_tokens": 3,
            "unique_lemmas": 2,
            "items": [{"lemma": "кот", "count": 2}, {"lemma": "собака", "count": 1}],
            "items_filtered": [{"lemma": "кот", "count": 2}, {"lemma": "собака", "count": 1}],
            "total_bigrams": 2,
            "unique_bigrams": 2,
            "bigrams": [{"bigram": "кот кот", "count": 1}, {"bigram": "кот собака", "count": 1}],
            "total_trigrams": 1,
            "unique_trigrams": 1,
            "trigrams": [{"trigram": "кот кот собака", "count": 1}],
        })
    );
}

#[tokio::test]
async fn analyze_empty_text() {
    let base = spawn_blank().await;
    let (status, body) = post_json(&base, json!({"text": ""})).await;

    assert_eq!(status, 200);
    assert_eq!(body["language"], "unknown");
    assert_eq!(body["total_tokens"], 0);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["trigrams"], json!([]));
}

#[tokio::test]
async fn extra_fields_are_ignored() {
    let base = spawn_blank().await;
    let (status, body) = post_json(&base, json!({"text": "the cat sat", "lang": "de"})).await;

    assert_eq!(status, 200);
    assert_eq!(body["total_tokens"], 3);
    assert_eq!(body["items_filtered"], json!([{"lemma": "cat", "count": 1}, {"lemma": "sat", "count": 1}]));
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let base = spawn_blank().await;

    let preflight = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/analyze", base))
        .header("origin", "http://frontend.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(preflight.status().is_success());
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");

    let response = reqwest::Client::new()
        .post(format!("{}/api/analyze", base))
        .header("origin", "http://frontend.example")
        .json(&json!({"text": "кот"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn invalid_bodies() {
    let base = spawn_blank().await;

    let (status, body) = post_json(&base, json!({})).await;
    assert_eq!(status, 422);
    assert_detail(&body);

    let (status, body) = post_json(&base, json!({"text": 42})).await;
    assert_eq!(status, 422);
    assert_detail(&body);

    let (status, body) = post_raw(&base, "{\"text\": ", Some("application/json")).await;
    assert_eq!(status, 400);
    assert_detail(&body);

    let (status, body) = post_raw(&base, "{\"text\": \"cat\"}", None).await;
    assert_eq!(status, 415);
    assert_detail(&body);
}

#[tokio::test]
async fn oversized_text() {
    let base = spawn(
        PipelineRegistry::blank(),
        AnalyzerConfig {
            max_text_bytes: 16,
            ..AnalyzerConfig::default()
        },
        Duration::from_secs(30),
    )
    .await;

    let (status, body) = post_json(&base, json!({"text": "a".repeat(17)})).await;
    assert_eq!(status, 413);
    assert_detail(&body);

    let (status, _) = post_json(&base, json!({"text": "a".repeat(16)})).await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn health_reports_models() {
    let dir = TempDir::new("models").unwrap();
    let models = LocalModels::new(dir.path());
    let russian: LemmaDictionary = vec![("коты", "кот")].into_iter().collect();
    russian
        .to_writer(File::create(models.binary_path(Language::Ru)).unwrap())
        .unwrap();

    let base = spawn(
        PipelineRegistry::new(models),
        AnalyzerConfig::default(),
        Duration::from_secs(30),
    )
    .await;

    let health = |base: String| async move {
        reqwest::get(format!("{}/api/health", base))
            .await
            .unwrap()
            .json::<Value>()
            .await
            .unwrap()
    };

    assert_eq!(
        health(base.clone()).await,
        json!({"status": "ok", "models": {"en": "pending", "ru": "pending"}})
    );

    let (_, body) = post_json(&base, json!({"text": "коты"})).await;
    assert_eq!(body["items"], json!([{"lemma": "кот", "count": 1}]));
    let (_, body) = post_json(
        &base,
        json!({"text": "The dogs were sleeping in the garden while their owners talked about the weather"}),
    )
    .await;
    assert_eq!(body["language"], "en");
    assert_eq!(body["items"][1], json!({"lemma": "dogs", "count": 1}));

    assert_eq!(
        health(base).await,
        json!({"status": "ok", "models": {"en": "blank", "ru": "full"}})
    );
}

#[tokio::test]
async fn missing_models_degrade() {
    let dir = TempDir::new("empty").unwrap();
    let base = spawn(
        PipelineRegistry::new(LocalModels::new(dir.path())),
        AnalyzerConfig::default(),
        Duration::from_secs(30),
    )
    .await;

    let (status, body) = post_json(&base, json!({"text": "Коты спят на диване"})).await;

    assert_eq!(status, 200);
    assert_eq!(body["total_tokens"], 4);
    assert!(!body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn slow_analysis_times_out() {
    let slow = |_: Language| -> Result<LemmaDictionary, Error> {
        thread::sleep(Duration::from_millis(500));
        Ok(LemmaDictionary::default())
    };
    let base = spawn(
        PipelineRegistry::new(slow),
        AnalyzerConfig::default(),
        Duration::from_millis(50),
    )
    .await;

    let (status, body) = post_json(&base, json!({"text": "кот кот собака"})).await;

    assert_eq!(status, 503);
    assert_detail(&body);
}

#[tokio::test]
async fn panicking_provider_degrades_to_blank() {
    let broken = |_: Language| -> Result<LemmaDictionary, Error> { panic!("broken provider") };
    let base = spawn(
        PipelineRegistry::new(broken),
        AnalyzerConfig::default(),
        Duration::from_secs(30),
    )
    .await;

    for _ in 0..2 {
        let (status, body) = post_json(&base, json!({"text": "Коты спят"})).await;

        assert_eq!(status, 200);
        assert_eq!(
            body["items"],
            json!([{"lemma": "коты", "count": 1}, {"lemma": "спят", "count": 1}])
        );
    }
}
