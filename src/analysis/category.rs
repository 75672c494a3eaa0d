use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a whole request, by industry or by generic automation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Healthcare,
    Finance,
    Education,
    Ecommerce,
    LeadProcessing,
    DataSync,
    Monitoring,
    Notification,
    Automation,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Healthcare => "healthcare",
            Category::Finance => "finance",
            Category::Education => "education",
            Category::Ecommerce => "ecommerce",
            Category::LeadProcessing => "lead-processing",
            Category::DataSync => "data-sync",
            Category::Monitoring => "monitoring",
            Category::Notification => "notification",
            Category::Automation => "automation",
            Category::General => "general",
        }
    }

    /// Title-case label used in generated workflow names.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Healthcare => "Healthcare",
            Category::Finance => "Finance",
            Category::Education => "Education",
            Category::Ecommerce => "E-commerce",
            Category::LeadProcessing => "Lead Processing",
            Category::DataSync => "Data Sync",
            Category::Monitoring => "Monitoring",
            Category::Notification => "Notification",
            Category::Automation => "Automation",
            Category::General => "General",
        }
    }

    /// Industry categories outweigh generic automation themes during scoring.
    pub fn is_industry(&self) -> bool {
        matches!(
            self,
            Category::Healthcare | Category::Finance | Category::Education | Category::Ecommerce
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An action lemma detected in a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Validate,
    Transform,
    Send,
    Store,
    Fetch,
    Notify,
    Schedule,
    Monitor,
    Route,
    Aggregate,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Validate => "validate",
            Action::Transform => "transform",
            Action::Send => "send",
            Action::Store => "store",
            Action::Fetch => "fetch",
            Action::Notify => "notify",
            Action::Schedule => "schedule",
            Action::Monitor => "monitor",
            Action::Route => "route",
            Action::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An external service family referenced by a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Integration {
    Email,
    Chat,
    Sms,
    Database,
    Spreadsheet,
    HttpApi,
    FileStorage,
    Crm,
    Calendar,
}

impl Integration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Integration::Email => "email",
            Integration::Chat => "chat",
            Integration::Sms => "sms",
            Integration::Database => "database",
            Integration::Spreadsheet => "spreadsheet",
            Integration::HttpApi => "http-api",
            Integration::FileStorage => "file-storage",
            Integration::Crm => "crm",
            Integration::Calendar => "calendar",
        }
    }

    pub fn is_messaging(&self) -> bool {
        matches!(self, Integration::Email | Integration::Chat | Integration::Sms)
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Integration::Database | Integration::Spreadsheet)
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
