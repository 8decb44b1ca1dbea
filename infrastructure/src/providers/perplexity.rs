//! Perplexity chat-completions adapter
//!
//! `POST {base_url}/chat/completions` with bearer auth. Non-streamed replies
//! carry `choices[0].message.content` and an optional `citations` list.
//! Streamed replies arrive as server-sent events: `data: {json}` lines with
//! `choices[0].delta.content`, terminated by `data: [DONE]`.

use super::error::ProviderError;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use scout_application::ports::llm_gateway::{
    CompletionRequest, GatewayError, LlmGateway, StreamHandle,
};
use scout_domain::{Completion, StreamEvent};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Resolved settings for [`PerplexityGateway`]
#[derive(Clone)]
pub struct PerplexityConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for PerplexityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerplexityConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    stream: bool,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    citations: Vec<String>,
    model: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Deserialize, Default)]
struct Delta {
    content: Option<String>,
}

/// Events produced by one line of an event stream.
///
/// Every non-blank line is echoed as [`StreamEvent::Raw`]. The `[DONE]`
/// sentinel yields [`StreamEvent::Completed`]; unparseable data lines yield
/// nothing else.
fn line_events(line: &str) -> Vec<StreamEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut events = vec![StreamEvent::Raw(line.to_string())];
    let Some(data) = line.strip_prefix("data:").map(str::trim) else {
        return events;
    };

    if data == "[DONE]" {
        events.push(StreamEvent::Completed(String::new()));
        return events;
    }

    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => {
            let delta = chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content)
                .filter(|content| !content.is_empty());
            if let Some(content) = delta {
                events.push(StreamEvent::Delta(content));
            }
        }
        Err(e) => trace!("Skipping unparseable stream frame: {}", e),
    }
    events
}

/// Forward an SSE byte stream to `tx` until `[DONE]` or end of input.
async fn pump<S, B>(stream: S, tx: mpsc::Sender<StreamEvent>)
where
    S: Stream<Item = Result<B, reqwest::Error>>,
    B: AsRef<[u8]>,
{
    let mut stream = std::pin::pin!(stream);
    let mut buf: Vec<u8> = Vec::new();

    loop {
        while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = buf.drain(..=pos).collect();
            for event in line_events(&String::from_utf8_lossy(&line)) {
                let done = matches!(event, StreamEvent::Completed(_));
                if tx.send(event).await.is_err() || done {
                    return;
                }
            }
        }

        match stream.next().await {
            Some(Ok(bytes)) => buf.extend_from_slice(bytes.as_ref()),
            Some(Err(e)) => {
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                return;
            }
            None => break,
        }
    }

    // Input ended without [DONE]: flush the last partial line
    let rest = String::from_utf8_lossy(&buf).into_owned();
    for event in line_events(&rest) {
        if matches!(event, StreamEvent::Completed(_)) || tx.send(event).await.is_err() {
            break;
        }
    }
    let _ = tx.send(StreamEvent::Completed(String::new())).await;
}

/// Gateway for the Perplexity chat-completions API
pub struct PerplexityGateway {
    client: reqwest::Client,
    config: PerplexityConfig,
}

impl PerplexityGateway {
    pub fn new(config: PerplexityConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn body<'a>(request: &'a CompletionRequest, stream: bool) -> ChatBody<'a> {
        let system = request.system.as_deref().map(|content| WireMessage {
            role: "system",
            content,
        });
        let messages = system
            .into_iter()
            .chain(request.messages.iter().map(|m| WireMessage {
                role: m.role.as_str(),
                content: &m.content,
            }))
            .collect();

        ChatBody {
            model: request.model.as_str(),
            messages,
            max_tokens: request.max_tokens,
            stream,
        }
    }

    async fn post(
        &self,
        request: &CompletionRequest,
        stream: bool,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&Self::body(request, stream))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), body));
        }
        Ok(response)
    }

    async fn send(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        let parsed: ChatResponse = self
            .post(request, false)
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse)?;
        debug!(
            "Perplexity reply: {} chars, {} citation(s)",
            text.len(),
            parsed.citations.len()
        );

        Ok(Completion {
            text,
            citations: parsed.citations,
            model: parsed.model,
        })
    }
}

#[async_trait]
impl LlmGateway for PerplexityGateway {
    fn provider(&self) -> &str {
        "perplexity"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        self.send(request).await.map_err(GatewayError::from)
    }

    async fn complete_streaming(
        &self,
        request: &CompletionRequest,
    ) -> Result<StreamHandle, GatewayError> {
        let response = self.post(request, true).await?;
        let (tx, rx) = mpsc::channel(64);
        tokio::spawn(pump(response.bytes_stream(), tx));
        Ok(StreamHandle::new(rx))
    }
}
