//! Gemini-backed "Garçom Virtual" chat client.
//!
//! Each call is a stateless round trip: the full prior transcript plus the
//! new message go out, one reply comes back. The system instruction is
//! fixed at construction time and embeds a serialized snapshot of the menu,
//! so the assistant can only talk about what the kitchen actually sells.
//!
//! The client is infallible at its boundary: every failure path logs and
//! returns a fixed fallback line, so the chat UI never shows a broken state
//! mid-conversation.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use brasa_core::Catalog;

use crate::config::GeminiConfig;

/// Reply cap, in tokens. Keeps answers chat-bubble sized; enforced by the
/// service, not locally.
const MAX_OUTPUT_TOKENS: u32 = 300;

/// Returned when the model answers with an empty candidate list.
const EMPTY_REPLY_FALLBACK: &str = "Desculpe, fui buscar ketchup e não ouvi. Pode repetir?";

/// Returned on any transport or API failure.
const ERROR_FALLBACK: &str =
    "Opa, o sistema deu uma engasgada. Mas o chapeiro continua trabalhando! Tente de novo.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Internal failure modes, absorbed before they reach a caller.
#[derive(Debug, Error)]
enum WaiterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned status {0}")]
    Api(u16),
}

/// Gemini chat client carrying the waiter persona.
#[derive(Clone)]
pub struct WaiterClient {
    inner: Arc<WaiterClientInner>,
}

struct WaiterClientInner {
    client: reqwest::Client,
    api_key: secrecy::SecretString,
    model: String,
    base_url: String,
    system_instruction: String,
}

// ============================================================================
// Wire types (Gemini generateContent)
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl WaiterClient {
    /// Create a new client with the persona prompt seeded from the catalog.
    #[must_use]
    pub fn new(config: &GeminiConfig, catalog: &Catalog) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .unwrap_or_default();

        Self {
            inner: Arc::new(WaiterClientInner {
                client,
                api_key: config.api_key.clone(),
                model: config.model.clone(),
                base_url: config.base_url.trim_end_matches('/').to_owned(),
                system_instruction: system_instruction(catalog),
            }),
        }
    }

    /// Send a message with the prior transcript and return the reply text.
    ///
    /// Never fails: service errors are logged and replaced with a friendly
    /// fallback line.
    #[instrument(skip(self, history, message), fields(model = %self.inner.model))]
    pub async fn send(&self, history: &[ChatMessage], message: &str) -> String {
        match self.generate(history, message).await {
            Ok(Some(reply)) => reply,
            Ok(None) => EMPTY_REPLY_FALLBACK.to_owned(),
            Err(e) => {
                tracing::warn!("chat request failed: {e}");
                ERROR_FALLBACK.to_owned()
            }
        }
    }

    async fn generate(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<Option<String>, WaiterError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: match turn.role {
                    ChatRole::User => "user".to_owned(),
                    ChatRole::Model => "model".to_owned(),
                },
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: "user".to_owned(),
            parts: vec![Part {
                text: message.to_owned(),
            }],
        });

        let request = GenerateContentRequest {
            contents,
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: self.inner.system_instruction.clone(),
                }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.inner.base_url, self.inner.model
        );
        let response = self
            .inner
            .client
            .post(&url)
            .header("x-goog-api-key", self.inner.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WaiterError::Api(status.as_u16()));
        }

        let body: GenerateContentResponse = response.json().await?;
        let reply = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty());

        Ok(reply)
    }
}

/// The waiter persona, with the menu baked in.
fn system_instruction(catalog: &Catalog) -> String {
    format!(
        "Você é o \"Garçom Virtual\" do Brasa Burgers.\n\
         Seu objetivo é ajudar os clientes a escolherem o melhor lanche.\n\
         Seja amigável, engraçado e tente sempre deixar o cliente com fome.\n\
         Use emojis de comida.\n\
         Conhecimento do cardápio:\n\
         {}\n\
         Se o cliente perguntar o que comer, sugira algo baseado nos ingredientes.\n\
         Se o cliente perguntar sobre \"X-Bacon\", fale que é o campeão de vendas.\n\
         Mantenha as respostas curtas (máximo 300 caracteres) para caber no chat mobile.",
        catalog.menu_summary()
    )
}
