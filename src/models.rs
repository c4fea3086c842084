use serde::{Deserialize, Serialize};

// POST /chat body
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatResponse {
    pub reply: String,
}

// POST /quotes/mood body
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MoodQuoteRequest {
    pub mood: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MoodQuoteResponse {
    pub quote: String,
}

// POST /stories body
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct StoryRequest {
    pub concern: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct StoryResponse {
    pub story: String,
}

// Gemini generateContent request format
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

// Gemini generateContent response format
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}

impl GeminiRequest {
    pub fn user_prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: text.into() }],
            }],
        }
    }
}

impl GeminiResponse {
    // text of the first candidate, parts joined
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}
