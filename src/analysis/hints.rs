use serde::{Deserialize, Serialize};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Keys under which hints are handed to the synthesizer.
pub mod keys {
    pub const EMAIL: &str = "email";
    pub const CHANNEL: &str = "channel";
    pub const URL: &str = "url";
    pub const HTTP_METHOD: &str = "http_method";
    pub const TABLE: &str = "table";
    pub const SHEET: &str = "sheet";
    pub const FILE_NAME: &str = "file_name";
    pub const INTERVAL_AMOUNT: &str = "interval_amount";
    pub const INTERVAL_UNIT: &str = "interval_unit";
    /// Concrete service family chosen by the planner, e.g. "chat" or "spreadsheet".
    pub const SERVICE: &str = "service";
    /// Comma separated subject words used to label generated scripts.
    pub const SUBJECT: &str = "subject";
}

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "to", "into", "in", "of", "from", "for", "and", "or", "with", "on", "our",
    "my", "new", "data", "database", "each", "every", "that", "this", "it",
];

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}\b")
        .expect("invalid email pattern")
});

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bhttps?://[^\s<>"'()\[\]{}]+"#).expect("invalid url pattern")
});

static CHANNEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w&#/])#([\w-]+)").expect("invalid channel pattern")
});

static HTTP_METHOD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:GET|POST|PUT|PATCH|DELETE)\b").expect("invalid http method pattern")
});

static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[\w-]+(?:\.[\w-]+)*\.(?:csv|json|pdf|txt|xlsx|xml|yaml|yml)\b")
        .expect("invalid file name pattern")
});

static NAMED_AFTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(table|sheet|spreadsheet)\s+([\w-]+)").expect("invalid name pattern")
});

static NAMED_BEFORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([\w-]+)\s+(table|sheet|spreadsheet)\b").expect("invalid name pattern")
});

// Either a shorthand ("daily") or "every [N] <unit>".
static INTERVAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(hourly|daily|weekly)\b",
        r"|\bevery\s+(?:(\d{1,6})\s*)?(minutes?|mins?|hours?|days?|weeks?)\b",
    ))
    .expect("invalid interval pattern")
});

/// Literal values pulled out of a description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterHints {
    pub email: Option<String>,
    pub channel: Option<String>,
    pub url: Option<String>,
    pub http_method: Option<String>,
    pub table: Option<String>,
    pub sheet: Option<String>,
    pub file_name: Option<String>,
    pub interval: Option<Interval>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub amount: u32,
    pub unit: String,
}

impl ParameterHints {
    pub fn extract(description: &str) -> Self {
        Self {
            email: EMAIL_PATTERN
                .find(description)
                .map(|m| m.as_str().to_string()),
            channel: CHANNEL_PATTERN
                .captures_iter(description)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .find(|name| !name.chars().all(|c| c.is_ascii_digit()))
                .map(|name| format!("#{}", name)),
            url: URL_PATTERN
                .find(description)
                .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION).to_string()),
            http_method: HTTP_METHOD_PATTERN
                .find(description)
                .map(|m| m.as_str().to_string()),
            table: find_named(description, &["table"], true),
            sheet: find_named(description, &["sheet", "spreadsheet"], false),
            file_name: find_file_name(description),
            interval: parse_interval(description),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flattens the hints into the key/value form carried by node requirements.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        let mut put = |key: &str, value: &Option<String>| {
            if let Some(v) = value {
                map.insert(key.to_string(), v.clone());
            }
        };
        put(keys::EMAIL, &self.email);
        put(keys::CHANNEL, &self.channel);
        put(keys::URL, &self.url);
        put(keys::HTTP_METHOD, &self.http_method);
        put(keys::TABLE, &self.table);
        put(keys::SHEET, &self.sheet);
        put(keys::FILE_NAME, &self.file_name);
        if let Some(interval) = &self.interval {
            map.insert(keys::INTERVAL_AMOUNT.to_string(), interval.amount.to_string());
            map.insert(keys::INTERVAL_UNIT.to_string(), interval.unit.clone());
        }
        map
    }
}

/// Finds the name attached to a marker word: the word right after it, or, when
/// `allow_before` is set, the word right before it ("the customers table").
fn find_named(description: &str, markers: &[&str], allow_before: bool) -> Option<String> {
    let after = NAMED_AFTER_PATTERN.captures_iter(description).find_map(|caps| {
        let marker = caps.get(1)?.as_str().to_lowercase();
        let name = caps.get(2)?.as_str();
        (markers.contains(&marker.as_str()) && is_identifier(name)).then(|| name.to_string())
    });
    if after.is_some() || !allow_before {
        return after;
    }
    NAMED_BEFORE_PATTERN.captures_iter(description).find_map(|caps| {
        let marker = caps.get(2)?.as_str().to_lowercase();
        let name = caps.get(1)?.as_str();
        (markers.contains(&marker.as_str()) && is_identifier(name)).then(|| name.to_string())
    })
}

fn is_identifier(word: &str) -> bool {
    !word.is_empty() && !STOPWORDS.contains(&word.to_lowercase().as_str())
}

/// File names that are not part of a path, URL or address.
fn find_file_name(description: &str) -> Option<String> {
    FILE_NAME_PATTERN
        .find_iter(description)
        .find(|m| {
            let before = description[..m.start()].chars().next_back();
            let after = description[m.end()..].chars().next();
            !matches!(before, Some('/' | '@' | '.')) && !matches!(after, Some('/' | '@'))
        })
        .map(|m| m.as_str().to_string())
}

fn parse_interval(description: &str) -> Option<Interval> {
    let caps = INTERVAL_PATTERN.captures(description)?;
    if let Some(shorthand) = caps.get(1) {
        let unit = match shorthand.as_str().to_lowercase().as_str() {
            "hourly" => "hours",
            "daily" => "days",
            _ => "weeks",
        };
        return Some(Interval {
            amount: 1,
            unit: unit.to_string(),
        });
    }
    let amount = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(1);
    let unit = normalize_unit(&caps.get(3)?.as_str().to_lowercase())?;
    Some(Interval {
        amount: amount.max(1),
        unit: unit.to_string(),
    })
}

fn normalize_unit(word: &str) -> Option<&'static str> {
    match word {
        "minute" | "minutes" | "min" | "mins" => Some("minutes"),
        "hour" | "hours" => Some("hours"),
        "day" | "days" => Some("days"),
        "week" | "weeks" => Some("weeks"),
        _ => None,
    }
}
