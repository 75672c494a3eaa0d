use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Functional role of a single planned step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeCategory {
    Processing,
    Validation,
    Transformation,
    ConditionalRouting,
    MessagingIntegration,
    StorageIntegration,
    HttpIntegration,
    FileHandling,
    Monitoring,
    ErrorHandling,
    Delay,
    /// A role this engine has no mapping for. Synthesized as processing.
    #[serde(untagged)]
    Custom(String),
}

impl NodeCategory {
    pub fn as_str(&self) -> &str {
        match self {
            NodeCategory::Processing => "processing",
            NodeCategory::Validation => "validation",
            NodeCategory::Transformation => "transformation",
            NodeCategory::ConditionalRouting => "conditional-routing",
            NodeCategory::MessagingIntegration => "messaging-integration",
            NodeCategory::StorageIntegration => "storage-integration",
            NodeCategory::HttpIntegration => "http-integration",
            NodeCategory::FileHandling => "file-handling",
            NodeCategory::Monitoring => "monitoring",
            NodeCategory::ErrorHandling => "error-handling",
            NodeCategory::Delay => "delay",
            NodeCategory::Custom(name) => name,
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An abstract unit of work, waiting to be turned into a concrete node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRequirement {
    pub category: NodeCategory,
    pub purpose: String,
    #[serde(default)]
    pub parameter_hints: BTreeMap<String, String>,
    /// Explicit display name. When unset the synthesizer derives one.
    #[serde(default)]
    pub label: Option<String>,
}

impl NodeRequirement {
    pub fn new(category: NodeCategory, purpose: impl Into<String>) -> Self {
        Self {
            category,
            purpose: purpose.into(),
            parameter_hints: BTreeMap::new(),
            label: None,
        }
    }

    pub fn with_hint(mut self, key: &str, value: impl Into<String>) -> Self {
        self.parameter_hints.insert(key.to_string(), value.into());
        self
    }

    pub fn with_hints(mut self, hints: BTreeMap<String, String>) -> Self {
        self.parameter_hints.extend(hints);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hint(&self, key: &str) -> Option<&str> {
        self.parameter_hints.get(key).map(String::as_str)
    }
}
