// End-to-end pipeline tests against a scripted mock driver.

mod test_utils;

use raconteur_core::{Genre, ImagePayload, Language, StoryLength, StoryRequest};
use raconteur_error::{GeminiErrorKind, PipelineErrorKind, RetryableError};
use raconteur_pipeline::{StoryPipeline, WordCountPolicy};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockResponse, MockVisionDriver, test_request};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("raconteur_pipeline=debug")
        .try_init();
}

fn pipeline_with(driver: MockVisionDriver) -> (StoryPipeline, Arc<MockVisionDriver>) {
    let driver = Arc::new(driver);
    (StoryPipeline::new(driver.clone()), driver)
}

#[tokio::test]
async fn fenced_output_yields_a_validated_record() -> anyhow::Result<()> {
    init_tracing();
    let (pipeline, _) = pipeline_with(MockVisionDriver::new_success(
        "Sure! ```json\n{\"title\":\"X\",\"story\":\"Y Y Y\"}\n```",
    ));

    let record = pipeline
        .generate(&test_request(vec![Genre::Horror, Genre::Comedy]))
        .await?;

    assert_eq!(record.title, "X");
    assert_eq!(record.story, "Y Y Y");
    assert_eq!(record.themes, vec!["horror", "comedy"]);
    assert_eq!(record.word_count, 3);
    Ok(())
}

#[tokio::test]
async fn word_count_matches_story_tokens_when_model_omits_it() -> anyhow::Result<()> {
    let (pipeline, _) = pipeline_with(MockVisionDriver::new_success(
        r#"{"title": "T", "story": "one two three four five", "themes": ["mystery"]}"#,
    ));

    let record = pipeline.generate(&test_request(vec![Genre::Mystery])).await?;
    assert_eq!(record.word_count, 5);
    assert_eq!(record.themes, vec!["mystery"]);
    Ok(())
}

#[tokio::test]
async fn unparseable_output_degrades_instead_of_failing() -> anyhow::Result<()> {
    let (pipeline, _) = pipeline_with(MockVisionDriver::new_success("not json at all"));

    let record = pipeline
        .generate(&test_request(vec![Genre::Horror, Genre::Comedy]))
        .await?;

    assert_eq!(record.title, "Histoire Générée");
    assert_eq!(record.story, "not json at all");
    assert_eq!(record.themes, vec!["horror", "comedy"]);
    assert_eq!(record.word_count, 4);
    Ok(())
}

#[tokio::test]
async fn hanging_call_yields_exactly_a_timeout_error() {
    let (pipeline, driver) = pipeline_with(MockVisionDriver::new_hanging());
    let pipeline = pipeline.timeout(Duration::from_millis(50));

    let err = pipeline
        .generate(&test_request(vec![Genre::Drama]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, PipelineErrorKind::Timeout);
    assert_eq!(err.code(), "GEMINI_TIMEOUT");
    assert_eq!(err.http_status_hint(), 408);
    assert!(err.is_retryable());
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn empty_upstream_response_is_an_error() {
    let (pipeline, _) = pipeline_with(MockVisionDriver::new_error(GeminiErrorKind::EmptyResponse));

    let err = pipeline
        .generate(&test_request(vec![Genre::Fantasy]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, PipelineErrorKind::EmptyResponse);
    assert_eq!(err.code(), "GEMINI_EMPTY_RESPONSE");
}

#[tokio::test]
async fn quota_exhaustion_maps_to_a_retryable_429() {
    let (pipeline, _) = pipeline_with(MockVisionDriver::new_error(GeminiErrorKind::HttpError {
        status_code: 429,
        message: "RESOURCE_EXHAUSTED: quota exceeded".to_string(),
    }));

    let err = pipeline
        .generate(&test_request(vec![Genre::Thriller]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, PipelineErrorKind::QuotaExceeded);
    assert_eq!(err.http_status_hint(), 429);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn safety_block_maps_to_content_rejected() {
    let (pipeline, _) = pipeline_with(MockVisionDriver::new_error(
        GeminiErrorKind::SafetyBlocked("SAFETY".to_string()),
    ));

    let err = pipeline
        .generate(&test_request(vec![Genre::Horror]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, PipelineErrorKind::ContentRejected);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn invalid_requests_short_circuit_before_any_call() {
    let (pipeline, driver) = pipeline_with(MockVisionDriver::new_success("unused"));

    let err = pipeline
        .generate(&test_request(vec![
            Genre::Horror,
            Genre::Comedy,
            Genre::Drama,
            Genre::Mystery,
        ]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, PipelineErrorKind::InvalidRequestShape);
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn oversized_image_short_circuits_as_invalid_image_data() {
    let (pipeline, driver) = pipeline_with(MockVisionDriver::new_success("unused"));
    let mut request = test_request(vec![Genre::Horror]);
    request.image = ImagePayload {
        bytes: vec![0; 2 * 1024 * 1024 + 1],
        mime_type: "image/jpeg".to_string(),
    };

    let err = pipeline.generate(&request).await.unwrap_err();
    assert_eq!(err.kind, PipelineErrorKind::InvalidImageData);
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn envelope_echoes_request_metadata() -> anyhow::Result<()> {
    let (pipeline, _) = pipeline_with(MockVisionDriver::new_success(
        r#"{"title": "T", "story": "S"}"#,
    ));

    let request = StoryRequest::builder()
        .genres(vec![Genre::SciFi])
        .length(StoryLength::Medium)
        .language(Language::Es)
        .image(ImagePayload::from_bytes(vec![1])?)
        .build()?;

    let envelope = pipeline.generate_with_metadata(&request).await?;
    assert!(envelope.success);
    assert_eq!(envelope.data.metadata.genres, vec![Genre::SciFi]);
    assert_eq!(envelope.data.metadata.length, StoryLength::Medium);
    assert_eq!(envelope.data.metadata.language, Language::Es);

    let value = serde_json::to_value(&envelope)?;
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["story"]["title"], "T");
    assert_eq!(value["data"]["metadata"]["length"], "medium");
    assert!(value["data"]["metadata"]["generationTime"].is_u64());
    Ok(())
}

#[tokio::test]
async fn word_count_policy_is_honored_end_to_end() -> anyhow::Result<()> {
    let output = r#"{"title": "T", "story": "one two three", "wordCount": 42}"#;

    let (recompute, _) = pipeline_with(MockVisionDriver::new_success(output));
    let record = recompute.generate(&test_request(vec![Genre::Comedy])).await?;
    assert_eq!(record.word_count, 3);

    let (trusting, _) = pipeline_with(MockVisionDriver::new_success(output));
    let trusting = trusting.word_count_policy(WordCountPolicy::TrustUpstream);
    let record = trusting.generate(&test_request(vec![Genre::Comedy])).await?;
    assert_eq!(record.word_count, 42);
    Ok(())
}

#[tokio::test]
async fn one_driver_call_per_request() -> anyhow::Result<()> {
    let (pipeline, driver) = pipeline_with(MockVisionDriver::new_sequence(vec![
        MockResponse::Success(r#"{"title": "A", "story": "first"}"#.to_string()),
        MockResponse::Success(r#"{"title": "B", "story": "second"}"#.to_string()),
    ]));

    let request = test_request(vec![Genre::Adventure]);
    let first = pipeline.generate(&request).await?;
    let second = pipeline.generate(&request).await?;

    assert_eq!(first.title, "A");
    assert_eq!(second.title, "B");
    assert_eq!(driver.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn prose_wrapped_object_recovers_and_validates() -> anyhow::Result<()> {
    let (pipeline, _) = pipeline_with(MockVisionDriver::new_success(
        "Voici votre histoire :\n{\"title\": \"La Porte\", \"story\": \"Elle grinça.\"}\nBonne lecture !",
    ));

    let record = pipeline.generate(&test_request(vec![Genre::Horror])).await?;
    assert_eq!(record.title, "La Porte");
    assert_eq!(record.story, "Elle grinça.");
    Ok(())
}
