//! Narrator adapter
//!
//! Turns a query and the final restaurant list into a short natural-language
//! explanation. The underlying model is optional and fallible; this adapter
//! is neither. Every path returns a string: generated text, the fixed
//! unavailability sentinel, or a fixed-prefix error message.

use async_trait::async_trait;
use savora_store::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;
use tracing::warn;

/// Returned when no model credential is configured
pub const ANALYSIS_UNAVAILABLE: &str = "Analysis unavailable (GROQ_API_KEY missing).";

/// Prefix of the string returned when the model call fails
pub const ANALYSIS_ERROR_PREFIX: &str = "Error generating analysis";

/// Environment variable holding the Groq credential
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A single-turn "prompt in, text out" language model
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Groq chat-completions client (OpenAI-compatible endpoint)
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GROQ_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url,
            model: GROQ_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl ChatModel for GroqClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Groq API error ({status}): {body}");
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("empty response from model"))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Best-effort narration over the final result list.
///
/// Holds at most one model; without one, [`Narrator::narrate`] returns the
/// unavailability sentinel instead of calling anything.
pub struct Narrator {
    model: Option<Box<dyn ChatModel>>,
}

impl Narrator {
    /// Build from the environment: a configured `GROQ_API_KEY` enables the
    /// Groq client, anything else leaves narration disabled.
    pub fn from_env() -> Self {
        match std::env::var(GROQ_API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Self::with_model(GroqClient::new(key)),
            _ => Self::disabled(),
        }
    }

    pub fn disabled() -> Self {
        Self { model: None }
    }

    pub fn with_model(model: impl ChatModel + 'static) -> Self {
        Self {
            model: Some(Box::new(model)),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.model.is_some()
    }

    /// Produce the analysis string for a query and its (already truncated)
    /// result list. Never fails; model errors are folded into the returned
    /// string.
    pub async fn narrate(&self, query: &str, restaurants: &[CatalogEntry]) -> String {
        let Some(model) = &self.model else {
            return ANALYSIS_UNAVAILABLE.to_string();
        };

        let prompt = build_prompt(query, restaurants);
        match model.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Narration failed: {e:#}");
                format!("{ANALYSIS_ERROR_PREFIX}: {e:#}")
            }
        }
    }
}

fn build_prompt(query: &str, restaurants: &[CatalogEntry]) -> String {
    let mut context = String::new();
    for r in restaurants {
        let _ = writeln!(
            context,
            "- Name: {}, Cuisine: {}, Location: {}, Rating: {}, Cost: {}",
            r.name, r.cuisine, r.location, r.rating, r.cost
        );
    }

    format!(
        "You are a helpful food critic and restaurant expert. The user is asking: \"{query}\"\n\n\
         Here are the top restaurant matches from our database:\n\
         {context}\n\
         Based on these matches, provide a concise, engaging recommendation explaining why \
         these places fit the user's request. Highlight the best option if clear. \
         Keep it friendly and under 150 words."
    )
}
