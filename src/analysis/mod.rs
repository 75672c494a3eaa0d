use ahash::AHashMap;
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

pub mod category;
pub mod hints;
pub mod keywords;
mod text;

pub use category::{Action, Category, Integration};
pub use hints::{Interval, ParameterHints};
pub use text::NormalizedText;

use keywords::{
    ACTION_TABLE, CATEGORY_TABLES, COMPLEXITY_INDICATORS, COMPOUND_PHRASES, CategoryTable,
    INTEGRATION_TABLE,
};

const MAX_TAGS: usize = 8;

/// The immutable classification of one description.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub primary_category: Category,
    /// Weighted score of every category table, in declaration order.
    pub category_scores: Vec<(Category, u32)>,
    pub detected_actions: BTreeSet<Action>,
    /// Integration family -> number of keyword hits.
    pub detected_integrations: BTreeMap<Integration, u32>,
    pub complexity_signal: u32,
    pub tags: Vec<String>,
    pub hints: ParameterHints,
    pub text: NormalizedText,
}

impl AnalysisResult {
    pub fn has_action(&self, action: Action) -> bool {
        self.detected_actions.contains(&action)
    }

    pub fn has_integration(&self, integration: Integration) -> bool {
        self.detected_integrations.contains_key(&integration)
    }

    /// The detected integration with the most hits among `candidates`. Earlier
    /// candidates win ties.
    pub fn strongest_integration(&self, candidates: &[Integration]) -> Option<Integration> {
        candidates
            .iter()
            .filter_map(|i| self.detected_integrations.get(i).map(|hits| (*i, *hits)))
            .fold(None, |best: Option<(Integration, u32)>, (i, hits)| match best {
                Some((_, best_hits)) if best_hits >= hits => best,
                _ => Some((i, hits)),
            })
            .map(|(i, _)| i)
    }

    pub fn word_count(&self) -> usize {
        self.text.word_count()
    }

    pub fn mentions(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
    }

    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        self.text.contains_any(keywords)
    }
}

/// Classifies free text using the static keyword tables.
///
/// The analyzer holds only references to read-only tables, so one instance can
/// be shared across threads and requests.
#[derive(Debug, Clone, Copy)]
pub struct TextAnalyzer {
    categories: &'static [CategoryTable],
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    pub fn new() -> Self {
        Self {
            categories: CATEGORY_TABLES,
        }
    }

    /// Uses a custom set of category tables instead of the built-in ones.
    pub fn with_category_tables(categories: &'static [CategoryTable]) -> Self {
        Self { categories }
    }

    pub fn analyze(&self, description: &str) -> AnalysisResult {
        let text = NormalizedText::new(description);

        let category_scores = self.score_categories(&text);
        let primary_category = pick_primary(&category_scores);
        let detected_actions = detect_actions(&text);
        let detected_integrations = detect_integrations(&text);
        let complexity_signal = complexity_signal(&text);
        let tags = derive_tags(primary_category, &detected_integrations, &detected_actions);

        debug!(
            category = %primary_category,
            signal = complexity_signal,
            words = text.word_count(),
            integrations = detected_integrations.len(),
            "Analyzed description"
        );

        AnalysisResult {
            primary_category,
            category_scores,
            detected_actions,
            detected_integrations,
            complexity_signal,
            tags,
            hints: ParameterHints::extract(description),
            text,
        }
    }

    fn score_categories(&self, text: &NormalizedText) -> Vec<(Category, u32)> {
        let mut scores: AHashMap<Category, u32> = AHashMap::new();
        for table in self.categories {
            let hits = table.keywords.iter().filter(|k| text.contains(k)).count() as u32;
            *scores.entry(table.category).or_default() += hits * table.weight();
        }
        self.categories
            .iter()
            .map(|t| t.category)
            .unique()
            .map(|c| (c, scores.get(&c).copied().unwrap_or(0)))
            .collect()
    }
}

/// Highest score wins; ties go to the earlier table; all-zero means `General`.
fn pick_primary(scores: &[(Category, u32)]) -> Category {
    let mut best = (Category::General, 0);
    for &(category, score) in scores {
        if score > best.1 {
            best = (category, score);
        }
    }
    best.0
}

fn detect_actions(text: &NormalizedText) -> BTreeSet<Action> {
    ACTION_TABLE
        .iter()
        .filter(|(_, keywords)| text.contains_any(keywords))
        .map(|(action, _)| *action)
        .collect()
}

fn detect_integrations(text: &NormalizedText) -> BTreeMap<Integration, u32> {
    INTEGRATION_TABLE
        .iter()
        .filter_map(|(integration, keywords)| {
            let hits: u32 = keywords.iter().map(|k| text.count(k)).sum();
            (hits > 0).then_some((*integration, hits))
        })
        .collect()
}

/// Distinct indicators + 2 x distinct compound phrases + a length bonus.
pub fn complexity_signal(text: &NormalizedText) -> u32 {
    let indicators = COMPLEXITY_INDICATORS
        .iter()
        .filter(|k| text.contains(k))
        .count() as u32;
    let phrases = COMPOUND_PHRASES
        .iter()
        .filter(|p| text.contains(p))
        .count() as u32;
    indicators + 2 * phrases + length_bonus(text.word_count())
}

pub fn length_bonus(words: usize) -> u32 {
    match words {
        0..=9 => 0,
        10..=20 => 1,
        21..=50 => 2,
        n => ((n / 25) as u32).min(4),
    }
}

fn derive_tags(
    category: Category,
    integrations: &BTreeMap<Integration, u32>,
    actions: &BTreeSet<Action>,
) -> Vec<String> {
    let strongest_first = integrations
        .iter()
        .sorted_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)))
        .map(|(i, _)| i.as_str());

    std::iter::once(category.as_str())
        .chain(strongest_first)
        .chain(actions.iter().map(|a| a.as_str()))
        .unique()
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}
