/// A lower-cased token view of a description that keyword tables are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    tokens: Vec<String>,
    padded: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        let tokens: Vec<String> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        let padded = format!(" {} ", tokens.join(" "));
        Self { tokens, padded }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// The token stream joined by single spaces.
    pub fn as_str(&self) -> &str {
        self.padded.trim()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.count(keyword) > 0
    }

    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.contains(k))
    }

    /// Number of places the keyword occurs.
    pub fn count(&self, keyword: &str) -> u32 {
        if keyword.contains(' ') {
            // Phrase: anchored at a token start, open at the end so "record" also takes "records".
            let needle = format!(" {}", keyword);
            self.padded.matches(needle.as_str()).count() as u32
        } else if keyword.chars().count() <= 3 {
            self.tokens.iter().filter(|t| t.as_str() == keyword).count() as u32
        } else {
            self.tokens.iter().filter(|t| t.starts_with(keyword)).count() as u32
        }
    }
}
