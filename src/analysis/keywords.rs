//! Read-only keyword tables used by the analyzer and the planner.
//!
//! Keywords are written in normalised form: lower case, words separated by a
//! single space. Single words of four or more characters match any token that
//! starts with them; shorter ones must match a whole token. Multi-word entries
//! are phrases matched against the token stream.

use super::category::{Action, Category, Integration};

#[derive(Debug)]
pub struct CategoryTable {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl CategoryTable {
    pub fn weight(&self) -> u32 {
        if self.category.is_industry() {
            INDUSTRY_WEIGHT
        } else {
            GENERIC_WEIGHT
        }
    }
}

pub const INDUSTRY_WEIGHT: u32 = 3;
pub const GENERIC_WEIGHT: u32 = 1;

/// Declaration order doubles as the tie-break order.
pub static CATEGORY_TABLES: &[CategoryTable] = &[
    CategoryTable {
        category: Category::Healthcare,
        keywords: &[
            "patient", "medical", "health", "clinic", "hospital", "appointment", "doctor",
            "physician", "nurse", "diagnos", "prescription", "pharma", "ehr", "hipaa",
            "treatment", "lab result",
        ],
    },
    CategoryTable {
        category: Category::Finance,
        keywords: &[
            "bank", "transaction", "payment", "invoice", "fraud", "compliance", "loan", "credit",
            "ledger", "financ", "accounting", "tax", "expense", "payroll",
        ],
    },
    CategoryTable {
        category: Category::Education,
        keywords: &[
            "student", "course", "teacher", "school", "enrol", "grade", "lesson", "exam",
            "university", "curriculum", "tuition", "classroom", "learning",
        ],
    },
    CategoryTable {
        category: Category::Ecommerce,
        keywords: &[
            "ecommerce", "commerce", "order", "cart", "checkout", "shop", "product", "inventory",
            "shipping", "refund", "sku", "storefront", "purchase",
        ],
    },
    CategoryTable {
        category: Category::LeadProcessing,
        keywords: &[
            "lead", "prospect", "crm", "sales", "qualif", "hubspot", "salesforce", "funnel",
            "contact form",
        ],
    },
    CategoryTable {
        category: Category::DataSync,
        keywords: &[
            "sync", "synchroniz", "replicat", "import", "export", "etl", "migrat", "backup",
            "mirror",
        ],
    },
    CategoryTable {
        category: Category::Monitoring,
        keywords: &[
            "monitor", "uptime", "metric", "threshold", "outage", "downtime", "health check",
            "status check", "alert",
        ],
    },
    CategoryTable {
        category: Category::Notification,
        keywords: &["notif", "notify", "remind", "announce", "digest", "broadcast"],
    },
    CategoryTable {
        category: Category::Automation,
        keywords: &[
            "automat", "trigger", "schedul", "routine", "recurring", "batch", "cron", "task",
        ],
    },
];

pub static ACTION_TABLE: &[(Action, &[&str])] = &[
    (Action::Validate, &["valid", "verif", "check", "ensure", "sanitiz"]),
    (
        Action::Transform,
        &["transform", "convert", "format", "map", "pars", "normaliz", "clean", "enrich"],
    ),
    (Action::Send, &["send", "deliver", "dispatch", "forward", "reply"]),
    (Action::Store, &["store", "save", "persist", "insert", "archiv", "write"]),
    (Action::Fetch, &["fetch", "retriev", "get", "pull", "download", "read", "collect"]),
    (Action::Notify, &["notif", "notify", "alert", "remind", "inform"]),
    (
        Action::Schedule,
        &["schedul", "daily", "weekly", "hourly", "monthly", "cron", "recurring", "periodic"],
    ),
    (Action::Monitor, &["monitor", "track", "watch", "observ", "audit"]),
    (
        Action::Route,
        &["route", "routing", "if", "condition", "branch", "approv", "escalat", "filter", "decid"],
    ),
    (
        Action::Aggregate,
        &["aggregat", "summar", "report", "combin", "merge", "total"],
    ),
];

pub static INTEGRATION_TABLE: &[(Integration, &[&str])] = &[
    (Integration::Email, &["email", "mail", "gmail", "smtp", "outlook", "inbox"]),
    (
        Integration::Chat,
        &["slack", "discord", "telegram", "chat", "channel", "microsoft teams"],
    ),
    (Integration::Sms, &["sms", "twilio", "text message", "whatsapp"]),
    (
        Integration::Database,
        &["database", "db", "postgres", "mysql", "sql", "mongo", "table", "sqlite"],
    ),
    (
        Integration::Spreadsheet,
        &["spreadsheet", "sheet", "excel", "csv", "airtable"],
    ),
    (
        Integration::HttpApi,
        &["api", "apis", "webhook", "http", "endpoint", "url", "rest api"],
    ),
    (
        Integration::FileStorage,
        &["file", "upload", "s3", "dropbox", "google drive", "ftp", "pdf", "document"],
    ),
    (Integration::Crm, &["crm", "salesforce", "hubspot", "pipedrive"]),
    (Integration::Calendar, &["calendar", "meeting", "booking", "appointment"]),
];

/// Single indicators of a richer workflow. Each counts once.
pub static COMPLEXITY_INDICATORS: &[&str] = &[
    "multiple", "complex", "advanced", "enterprise", "comprehensive", "integrat", "conditional",
    "parallel", "approv", "escalat", "audit", "compliance", "batch", "transform", "validat",
    "orchestrat", "analytic", "dashboard", "several", "various", "branch", "retry", "error",
];

/// Compound phrases that signal a multi-step process. Each counts twice, once.
pub static COMPOUND_PHRASES: &[&str] = &[
    "error handling",
    "data validation",
    "real time",
    "audit logging",
    "multi step",
    "approval workflow",
    "appointment scheduling",
    "medical record",
    "fraud detection",
    "lead scoring",
    "order processing",
    "data synchronization",
    "customer support",
    "inventory management",
    "patient management",
    "report generation",
];
