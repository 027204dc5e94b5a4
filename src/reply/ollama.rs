use serde::{Deserialize, Serialize};

use super::{ReplyError, ReplyModel};

/// Preferred general-purpose chat models in order of preference.
const PREFERRED_MODELS: &[&str] = &["llama3.2", "llama3.1", "mistral", "llama3.2:latest"];

/// Ollama HTTP client for local LLM inference.
pub struct OllamaClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaClient {
    /// Create a new OllamaClient pointing at a local Ollama instance.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default Ollama instance at localhost:11434 with a 2-minute timeout.
    pub fn default_local() -> Self {
        Self::new("http://localhost:11434", 120)
    }

    /// Find the best available chat model.
    pub fn find_best_model(&self) -> Result<String, ReplyError> {
        let available = self.list_models()?;
        for preferred in PREFERRED_MODELS {
            if available.iter().any(|m| m.starts_with(preferred)) {
                return Ok(preferred.to_string());
            }
        }
        Err(ReplyError::NoModelAvailable)
    }

    pub fn list_models(&self) -> Result<Vec<String>, ReplyError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() {
                ReplyError::Connection(self.base_url.clone())
            } else {
                ReplyError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReplyError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaTagsResponse = response
            .json()
            .map_err(|e| ReplyError::ResponseParsing(e.to_string()))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Response body from Ollama /api/tags
#[derive(Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: String,
}

impl ReplyModel for OllamaClient {
    fn generate(&self, model: &str, prompt: &str, system: &str) -> Result<String, ReplyError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = OllamaGenerateRequest {
            model,
            prompt,
            system,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                ReplyError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                ReplyError::Connection(format!(
                    "request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                ReplyError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReplyError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .map_err(|e| ReplyError::ResponseParsing(e.to_string()))?;

        Ok(parsed.response)
    }

    fn is_model_available(&self, model: &str) -> Result<bool, ReplyError> {
        let models = self.list_models()?;
        Ok(models.iter().any(|m| m.starts_with(model)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/", 10);
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    /// Verify the client satisfies the ReplyModel trait.
    /// (Integration with a real Ollama is exercised manually.)
    #[test]
    fn client_satisfies_reply_model_trait() {
        fn _accepts_reply_model<M: ReplyModel>(_m: &M) {}
        let _: fn(&OllamaClient) = _accepts_reply_model;
    }
}
