use crate::analysis::Category;
use crate::error::ConfigError;
use crate::orchestrator::StrategyKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fs;

/// Engine-wide configuration. Every field has a default, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Strategies tried by the orchestrator, in priority order.
    pub strategies: Vec<StrategyKind>,
    /// Append a baseline strategy when the chain does not already end with one.
    pub ensure_baseline: bool,
    /// Request categories whose conditional nodes get a true/false fan-out.
    pub branching_categories: Vec<Category>,
    /// Complexity signal at which medium workflows gain an error-handling step.
    pub error_handling_threshold: u32,
    /// Description used when the request carries a blank one.
    pub placeholder_description: String,
    pub max_description_chars: usize,
    pub placeholders: Placeholders,
    pub workflow: WorkflowDefaults,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategies: vec![
                StrategyKind::RichPattern,
                StrategyKind::StatisticsInformed,
                StrategyKind::Baseline,
            ],
            ensure_baseline: true,
            branching_categories: vec![Category::LeadProcessing, Category::Ecommerce],
            error_handling_threshold: 5,
            placeholder_description: "General purpose workflow".to_string(),
            max_description_chars: 2000,
            placeholders: Placeholders::default(),
            workflow: WorkflowDefaults::default(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_branching_category(&self, category: Category) -> bool {
        self.branching_categories.contains(&category)
    }
}

/// Clearly labelled stand-in values used when the description names no concrete target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub email: String,
    pub sender_email: String,
    pub channel: String,
    pub url: String,
    pub table: String,
    pub sheet: String,
    pub document_id: String,
    pub file_name: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            sender_email: "noreply@example.com".to_string(),
            channel: "#general".to_string(),
            url: "https://api.example.com/endpoint".to_string(),
            table: "workflow_data".to_string(),
            sheet: "Sheet1".to_string(),
            document_id: "YOUR_SPREADSHEET_ID".to_string(),
            file_name: "data.json".to_string(),
        }
    }
}

/// Values copied into every generated workflow document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowDefaults {
    pub active: bool,
    pub execution_order: String,
    pub timezone: String,
    pub save_manual_executions: bool,
}

impl Default for WorkflowDefaults {
    fn default() -> Self {
        Self {
            active: false,
            execution_order: "v1".to_string(),
            timezone: "UTC".to_string(),
            save_manual_executions: true,
        }
    }
}

impl WorkflowDefaults {
    /// Renders the `settings` object of a workflow document.
    pub fn settings(&self) -> Map<String, Value> {
        let mut settings = Map::new();
        settings.insert("executionOrder".to_string(), json!(self.execution_order));
        settings.insert("timezone".to_string(), json!(self.timezone));
        settings.insert(
            "saveManualExecutions".to_string(),
            json!(self.save_manual_executions),
        );
        settings
    }
}
