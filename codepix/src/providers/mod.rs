//! Upstream AI providers and the dispatcher that selects between them.
//!
//! Each provider client satisfies the same contract:
//! `complete(prompt, model_override) -> Completion { text, model_name }`.
//! One upstream call per dispatch; no retries, no streaming, no partial
//! results.

mod gemini;
mod groq;

pub use gemini::GeminiClient;
pub use groq::GroqClient;

use crate::config::Config;
use crate::error::{CodePixError, Result};

/// The closed set of supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Groq,
}

impl ProviderKind {
    /// Parse a wire tag, case-insensitively. Anything outside the two
    /// recognized values is rejected before any network activity.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "groq" => Ok(Self::Groq),
            _ => Err(CodePixError::UnsupportedProvider(tag.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Groq => "groq",
        }
    }
}

/// A single completed provider call.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The first completion's text, verbatim.
    pub text: String,
    /// The model that actually served the request.
    pub model_name: String,
}

/// Holds whichever provider clients had credentials at startup.
///
/// Built once from [`Config`] and injected through application state;
/// a missing credential disables that provider, not the service.
#[derive(Clone, Default)]
pub struct ProviderSet {
    gemini: Option<GeminiClient>,
    groq: Option<GroqClient>,
}

impl ProviderSet {
    pub fn new(config: &Config) -> Result<Self> {
        let gemini = config.gemini.as_ref().map(GeminiClient::new).transpose()?;
        let groq = config.groq.as_ref().map(GroqClient::new).transpose()?;

        Ok(Self { gemini, groq })
    }

    pub fn is_available(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Gemini => self.gemini.is_some(),
            ProviderKind::Groq => self.groq.is_some(),
        }
    }

    /// Issue exactly one completion call against the selected provider.
    ///
    /// `model_override` replaces the configured model for this call only.
    pub async fn dispatch(
        &self,
        kind: ProviderKind,
        prompt: &str,
        model_override: Option<&str>,
    ) -> Result<Completion> {
        match kind {
            ProviderKind::Gemini => match &self.gemini {
                Some(client) => client.complete(prompt, model_override).await,
                None => Err(CodePixError::ProviderUnavailable {
                    provider: "Gemini",
                    credential: gemini::CREDENTIAL_VAR,
                }),
            },
            ProviderKind::Groq => match &self.groq {
                Some(client) => client.complete(prompt, model_override).await,
                None => Err(CodePixError::ProviderUnavailable {
                    provider: "Groq",
                    credential: groq::CREDENTIAL_VAR,
                }),
            },
        }
    }
}
