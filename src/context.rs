use crate::config::EngineConfig;
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::hash::BuildHasher;

/// The entry-point kind requested for a generated workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    Webhook,
    Schedule,
    Manual,
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TriggerKind::Webhook => "webhook",
            TriggerKind::Schedule => "schedule",
            TriggerKind::Manual => "manual",
        };
        write!(f, "{}", name)
    }
}

/// The requested size tier of a generated workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        };
        write!(f, "{}", name)
    }
}

/// A single generation request, as handed over by the calling layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub description: String,
    pub trigger: TriggerKind,
    pub complexity: Complexity,
    /// Free-form options. Accepted and carried into the context, but never required.
    #[serde(default)]
    pub advanced_options: Map<String, Value>,
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>, trigger: TriggerKind, complexity: Complexity) -> Self {
        Self {
            description: description.into(),
            trigger,
            complexity,
            advanced_options: Map::new(),
        }
    }

    pub fn with_advanced_options(mut self, options: Map<String, Value>) -> Self {
        self.advanced_options = options;
        self
    }

    /// Returns the description the engine actually works on: trimmed, with
    /// blank input replaced by the configured placeholder and long input cut at
    /// a character boundary.
    pub fn normalized_description(&self, config: &EngineConfig) -> String {
        normalize_description(
            &self.description,
            &config.placeholder_description,
            config.max_description_chars,
        )
    }
}

pub fn normalize_description(raw: &str, placeholder: &str, max_chars: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return placeholder.to_string();
    }
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

/// Ephemeral per-request state shared by every stage of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub seed: u64,
    pub trigger: TriggerKind,
    pub complexity: Complexity,
    pub advanced_options: Map<String, Value>,
    next_serial: u64,
}

impl GenerationContext {
    pub fn new(description: &str, trigger: TriggerKind, complexity: Complexity) -> Self {
        Self {
            seed: derive_seed(description),
            trigger,
            complexity,
            advanced_options: Map::new(),
            next_serial: 0,
        }
    }

    pub fn from_request(description: &str, request: &GenerationRequest) -> Self {
        Self {
            advanced_options: request.advanced_options.clone(),
            ..Self::new(description, request.trigger, request.complexity)
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Hands out the next node serial for this request. Serials start at 1.
    pub fn next_serial(&mut self) -> u64 {
        self.next_serial += 1;
        self.next_serial
    }
}

// Fixed keys, so the same description seeds the same plan in every process.
const SEED_KEYS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Derives a stable seed from a description.
///
/// Seeds are reproducible across runs and processes for a given `ahash`
/// release and target.
pub fn derive_seed(description: &str) -> u64 {
    let [k0, k1, k2, k3] = SEED_KEYS;
    RandomState::with_seeds(k0, k1, k2, k3).hash_one(description)
}
