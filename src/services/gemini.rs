use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::StyleEntry;

const GENERATE_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image:generateContent";

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "API_KEY";

#[derive(Debug, Error)]
pub enum ConceptError {
    #[error("API key not found in environment (set GEMINI_API_KEY)")]
    MissingApiKey,
    #[error("no image data received from Gemini")]
    NoImage,
    #[error("Gemini replied with status {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Resolve the credential from the process environment. Fails before any
/// network I/O when neither variable carries a non-empty value.
pub fn api_key_from_env() -> Result<String, ConceptError> {
    [API_KEY_VAR, API_KEY_FALLBACK_VAR]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|value| !value.is_empty()))
        .ok_or(ConceptError::MissingApiKey)
}

/// Natural-language mockup prompt for one style entry. Field content is
/// interpolated verbatim; keeping this pure and separate from transport means
/// it can be hardened against prompt injection without touching the client.
pub fn build_concept_prompt(entry: &StyleEntry) -> String {
    format!(
        "Generate a high-fidelity, photorealistic UI design mockup for a mobile app or web landing page.\n\n\
         Style Category: {category}\n\n\
         Strictly adhere to these design principles:\n\
         - Keywords/Vibe: {keywords}\n\
         - Color Palette: {colors}\n\
         - Key Visual Effects: {effects}\n\n\
         The image should be a high-quality presentation shot, suitable for Dribbble or Behance. \
         Make sure the text is abstract or legible as a header, but focus on the visual layout and aesthetic.\n\
         Ensure the specific characteristics of {category} are clearly visible \
         (e.g., if Glassmorphism, show blur; if Neumorphism, show soft shadows).",
        category = entry.category,
        keywords = entry.keywords,
        colors = entry.colors,
        effects = entry.effects,
    )
}

fn extract_image_data_url(response: &GenerateResponse) -> Result<String, ConceptError> {
    for candidate in &response.candidates {
        let Some(content) = &candidate.content else {
            continue;
        };
        for part in &content.parts {
            if let Some(inline) = &part.inline_data {
                return Ok(format!("data:{};base64,{}", inline.mime_type, inline.data));
            }
        }
    }
    Err(ConceptError::NoImage)
}

/// One request, one response, no retries: ask Gemini for a single content
/// part and return the first inline image as a data URL.
pub async fn generate_concept(entry: &StyleEntry) -> Result<String, ConceptError> {
    let api_key = api_key_from_env()?;
    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: Some(build_concept_prompt(entry)),
                inline_data: None,
            }],
        }],
    };

    let response = reqwest::Client::new()
        .post(GENERATE_ENDPOINT)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ConceptError::Upstream { status, body });
    }

    let payload = response.json::<GenerateResponse>().await?;
    extract_image_data_url(&payload)
}
