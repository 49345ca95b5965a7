//! Integration tests for the HTTP pipeline against a local stub server.

use sketchgen::{
    Capture, Config, GenerationOutcome, GenerationRequest, PromptConfig, RenderConfig,
    RenderRequest, SketchGenClient,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tiny_http::{Response, Server};

const PROMPT_RESPONSE: &str = r#"{
  "candidates": [
    { "content": { "parts": [ { "text": "  A refined realistic painting of a small sailboat on a calm lake at sunset.  " } ] } }
  ]
}"#;

const RENDER_RESPONSE: &str = r#"{ "image_data": "QkFTRTY0LWltYWdl" }"#;

/// Stub HTTP endpoint. Serves the programmed (status, body) sequence in
/// order, repeating the last entry once exhausted, and records every
/// `Api-Key` header it sees.
struct StubServer {
    url: String,
    keys_seen: Arc<Mutex<Vec<String>>>,
    hits: Arc<AtomicUsize>,
}

impl StubServer {
    fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let url = format!("http://{}", server.server_addr().to_ip().unwrap());
        let keys_seen = Arc::new(Mutex::new(Vec::new()));
        let hits = Arc::new(AtomicUsize::new(0));

        let keys = Arc::clone(&keys_seen);
        let hit_counter = Arc::clone(&hits);
        std::thread::spawn(move || {
            let mut served = 0usize;
            for request in server.incoming_requests() {
                hit_counter.fetch_add(1, Ordering::SeqCst);

                if let Some(header) = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Api-Key"))
                {
                    keys.lock().unwrap().push(header.value.to_string());
                }

                let (status, body) = responses[served.min(responses.len() - 1)];
                served += 1;

                let response = Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        "Content-Type: application/json"
                            .parse::<tiny_http::Header>()
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            url,
            keys_seen,
            hits,
        }
    }

    fn keys_seen(&self) -> Vec<String> {
        self.keys_seen.lock().unwrap().clone()
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn capture() -> Capture {
    Capture::from_data_url("data:image/jpeg;base64,aGVsbG8=").unwrap()
}

fn client_for(prompt_url: &str, render_url: &str, keys: &[&str]) -> SketchGenClient {
    let config = Config::new()
        .with_prompt(
            PromptConfig::new()
                .with_credentials("prompt-key")
                .with_api_base(prompt_url),
        )
        .with_render(
            RenderConfig::new()
                .with_endpoint(render_url)
                .with_keys(keys.iter().copied()),
        );

    SketchGenClient::new(config).unwrap()
}

#[tokio::test]
async fn render_calls_cycle_the_key_pool_in_order() {
    let render = StubServer::start(vec![(200, RENDER_RESPONSE)]);
    let client = client_for("http://unused.invalid", &render.url, &["k1", "k2", "k3"]);

    for _ in 0..3 {
        let image = client
            .renderer()
            .render(RenderRequest {
                prompt: "a sailboat".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(image.image_base64, "QkFTRTY0LWltYWdl");
    }

    assert_eq!(render.keys_seen(), vec!["k1", "k2", "k3"]);
    // Full cycle brings the cursor back to its starting position.
    assert_eq!(client.renderer().key_pool().position(), 0);

    client
        .renderer()
        .render(RenderRequest {
            prompt: "a sailboat".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(render.keys_seen()[3], "k1");
}

#[tokio::test]
async fn rate_limit_retries_once_with_next_key() {
    let render = StubServer::start(vec![(429, "slow down"), (200, RENDER_RESPONSE)]);
    let client = client_for("http://unused.invalid", &render.url, &["k1", "k2", "k3"]);

    let image = client
        .renderer()
        .render(RenderRequest {
            prompt: "a sailboat".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(image.image_base64, "QkFTRTY0LWltYWdl");
    assert_eq!(render.keys_seen(), vec!["k1", "k2"]);
    // One logical request consumed two rotation steps.
    assert_eq!(client.renderer().key_pool().position(), 2);
}

#[tokio::test]
async fn pipeline_survives_rate_limit_via_key_rotation() {
    let prompt = StubServer::start(vec![(200, PROMPT_RESPONSE)]);
    let render = StubServer::start(vec![(429, "slow down"), (200, RENDER_RESPONSE)]);
    let client = client_for(&prompt.url, &render.url, &["k1", "k2", "k3"]);

    let outcome = client
        .generate_from_sketch(GenerationRequest::new(capture()))
        .await;

    assert!(outcome.is_success());
    assert_eq!(render.keys_seen(), vec!["k1", "k2"]);
    // One logical request, two rotation steps.
    assert_eq!(client.renderer().key_pool().position(), 2);
}

#[tokio::test]
async fn rate_limited_retry_is_terminal() {
    let render = StubServer::start(vec![(429, "slow down"), (429, "still busy")]);
    let client = client_for("http://unused.invalid", &render.url, &["k1", "k2"]);

    let result = client
        .renderer()
        .render(RenderRequest {
            prompt: "a sailboat".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(render.hits(), 2);
}

#[tokio::test]
async fn non_rate_limit_error_is_not_retried() {
    let render = StubServer::start(vec![(500, "boom")]);
    let client = client_for("http://unused.invalid", &render.url, &["k1", "k2"]);

    let result = client
        .renderer()
        .render(RenderRequest {
            prompt: "a sailboat".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(render.hits(), 1);
}

#[tokio::test]
async fn success_without_image_field_is_an_error() {
    let render = StubServer::start(vec![(200, r#"{ "detail": "no image here" }"#)]);
    let client = client_for("http://unused.invalid", &render.url, &["k1"]);

    let result = client
        .renderer()
        .render(RenderRequest {
            prompt: "a sailboat".to_string(),
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn pipeline_success_bundles_prompt_and_image() {
    let prompt = StubServer::start(vec![(200, PROMPT_RESPONSE)]);
    let render = StubServer::start(vec![(200, RENDER_RESPONSE)]);
    let client = client_for(&prompt.url, &render.url, &["k1"]);

    let outcome = client
        .generate_from_sketch(GenerationRequest::new(capture()).with_hint("make it golden hour"))
        .await;

    match outcome {
        GenerationOutcome::Success {
            image_url,
            image_base64,
            prompt,
            ..
        } => {
            assert!(!prompt.is_empty());
            // The synthesized prompt comes back whitespace-trimmed.
            assert!(prompt.starts_with("A refined realistic painting"));
            assert_eq!(image_base64, "QkFTRTY0LWltYWdl");
            assert_eq!(image_url, format!("data:image/jpeg;base64,{}", image_base64));
        }
        GenerationOutcome::Failure { message } => panic!("expected success, got: {}", message),
    }
}

#[tokio::test]
async fn synthesis_failure_short_circuits_before_rendering() {
    let prompt = StubServer::start(vec![(500, "prompt model unavailable")]);
    let render = StubServer::start(vec![(200, RENDER_RESPONSE)]);
    let client = client_for(&prompt.url, &render.url, &["k1"]);

    let outcome = client
        .generate_from_sketch(GenerationRequest::new(capture()))
        .await;

    match outcome {
        GenerationOutcome::Failure { message } => {
            assert!(message.contains("prompt model unavailable"));
        }
        GenerationOutcome::Success { .. } => panic!("expected failure"),
    }

    // The render endpoint is never invoked when synthesis fails.
    assert_eq!(render.hits(), 0);
}

#[tokio::test]
async fn empty_prompt_is_a_failure() {
    let empty = r#"{ "candidates": [ { "content": { "parts": [ { "text": "   " } ] } } ] }"#;
    let prompt = StubServer::start(vec![(200, empty)]);
    let render = StubServer::start(vec![(200, RENDER_RESPONSE)]);
    let client = client_for(&prompt.url, &render.url, &["k1"]);

    let outcome = client
        .generate_from_sketch(GenerationRequest::new(capture()))
        .await;

    assert!(!outcome.is_success());
    assert_eq!(render.hits(), 0);
}

#[tokio::test]
async fn render_failure_propagates_as_failure_outcome() {
    let prompt = StubServer::start(vec![(200, PROMPT_RESPONSE)]);
    let render = StubServer::start(vec![(503, "render service down")]);
    let client = client_for(&prompt.url, &render.url, &["k1", "k2"]);

    let outcome = client
        .generate_from_sketch(GenerationRequest::new(capture()))
        .await;

    match outcome {
        GenerationOutcome::Failure { message } => {
            assert!(message.contains("render service down"));
        }
        GenerationOutcome::Success { .. } => panic!("expected failure"),
    }
    assert_eq!(render.hits(), 1);
}
