use crate::catalog::Skill;
use crate::error::{LadderError, Result};
use crate::progress::Progress;
use crate::types::Mastery;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A plan focuses on at most this many weak skills.
pub const MAX_FOCUS_SKILLS: usize = 3;

// ---------------------------------------------------------------------------
// Plan payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drill {
    pub name: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub intro: String,
    pub warmup: String,
    pub drills: Vec<Drill>,
    pub cooldown: String,
}

/// What came back from the model: the structured payload when the response
/// parsed, otherwise the raw text for verbatim display.
#[derive(Debug, Clone)]
pub enum PlanOutput {
    Structured(TrainingPlan),
    Raw(String),
}

// ---------------------------------------------------------------------------
// Prompt / parsing
// ---------------------------------------------------------------------------

/// Catalog skills still worth drilling: anything not yet mastered.
pub fn weak_skills<'a>(skills: &'a [Skill], progress: &Progress) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|s| progress.mastery(s.id) != Mastery::Mastered)
        .collect()
}

pub fn build_prompt(selected: &[&Skill]) -> String {
    let skill_names = selected
        .iter()
        .map(|s| format!("{} ({})", s.name, s.difficulty))
        .collect::<Vec<_>>()
        .join(", ");
    let checkpoints = selected
        .iter()
        .map(|s| format!("- {}: {}", s.name, s.check_points))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "I am an amateur badminton player. I need a 1-hour solo training plan.\n\
         My current weaknesses are: {skill_names}.\n\
         \n\
         Please provide a concise training plan in JSON format with the following structure:\n\
         {{\n\
           \"intro\": \"Brief encouraging intro\",\n\
           \"warmup\": \"5 min warmup routine\",\n\
           \"drills\": [\n\
             {{ \"name\": \"Drill Name\", \"duration\": \"15 min\", \"description\": \"How to do it focusing on the checkpoints.\" }}\n\
           ],\n\
           \"cooldown\": \"5 min cooldown\"\n\
         }}\n\
         \n\
         The checkpoints for these skills are:\n\
         {checkpoints}\n\
         \n\
         Focus on the specific checkpoints provided. Keep it simple and practical."
    )
}

/// Strip Markdown code fences and try to decode the structured payload.
/// The model often, but not always, returns well-formed JSON; anything else
/// passes through verbatim.
pub fn parse_plan(raw: &str) -> PlanOutput {
    let cleaned = raw.replace("```json", "").replace("```", "");
    match serde_json::from_str::<TrainingPlan>(cleaned.trim()) {
        Ok(plan) => PlanOutput::Structured(plan),
        Err(_) => PlanOutput::Raw(raw.to_string()),
    }
}

// ---------------------------------------------------------------------------
// PlanClient
// ---------------------------------------------------------------------------

/// Blocking client for a Gemini-style `generateContent` endpoint. Failures
/// never touch core state; callers render them as a fallback message.
pub struct PlanClient {
    base_url: String,
    model: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

impl PlanClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Client against the public endpoint, keyed from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| LadderError::Plan(format!("{API_KEY_ENV} is not set")))?;
        Ok(Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL, api_key))
    }

    pub fn generate(&self, selected: &[&Skill]) -> Result<PlanOutput> {
        let prompt = build_prompt(selected);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| LadderError::Plan(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(LadderError::Plan(format!(
                "service returned {}",
                resp.status()
            )));
        }
        let payload: GenerateResponse =
            resp.json().map_err(|e| LadderError::Plan(e.to_string()))?;
        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| LadderError::Plan("empty response from service".to_string()))?;

        Ok(parse_plan(&text))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
