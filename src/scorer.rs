use regex::{Regex, RegexBuilder};

/// Extra credit for a keyword that also appears as a whole word, as a fraction of its weight.
pub const WHOLE_WORD_BONUS: f32 = 0.5;

#[derive(Debug, Clone)]
struct WeightedKeyword {
    term: String,
    weight: f32,
    whole_word: Regex,
    /// Substring hits count for nothing; only whole-word hits score.
    whole_word_only: bool,
}

/// Weighted keyword list for one intent, compiled once.
///
/// A keyword contributes its weight when the lower-cased input contains it
/// anywhere, plus half its weight again when it stands as a whole word.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    keywords: Vec<WeightedKeyword>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(pairs: &[(S, f32)]) -> Result<Self, regex::Error> {
        let mut matcher = Self::default();
        for (keyword, weight) in pairs {
            matcher.push(keyword.as_ref(), *weight)?;
        }
        Ok(matcher)
    }

    /// Appends a keyword. Keywords are lower-cased; their pattern characters are escaped.
    pub fn push(&mut self, keyword: &str, weight: f32) -> Result<(), regex::Error> {
        self.insert(keyword, weight, false)
    }

    /// Appends a keyword that scores only as a whole word ("UPS" but not "startups").
    pub fn push_whole_word(&mut self, keyword: &str, weight: f32) -> Result<(), regex::Error> {
        self.insert(keyword, weight, true)
    }

    fn insert(&mut self, keyword: &str, weight: f32, whole_word_only: bool) -> Result<(), regex::Error> {
        let term = keyword.trim().to_lowercase();
        if term.is_empty() {
            return Ok(());
        }
        let whole_word = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&term)))
            .case_insensitive(true)
            .build()?;
        self.keywords.push(WeightedKeyword {
            term,
            weight,
            whole_word,
            whole_word_only,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, f32)> {
        self.keywords.iter().map(|k| (k.term.as_str(), k.weight))
    }

    /// Relevance of `input`; 0 when nothing matches.
    pub fn score(&self, input: &str) -> f32 {
        let lower = input.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| lower.contains(&k.term))
            .map(|k| {
                if k.whole_word.is_match(input) {
                    k.weight + k.weight * WHOLE_WORD_BONUS
                } else if k.whole_word_only {
                    0.0
                } else {
                    k.weight
                }
            })
            .sum()
    }
}
