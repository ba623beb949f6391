use crate::dataset::ContentDataset;
use crate::scorer::KeywordMatcher;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const MAX_FOLLOW_UPS: usize = 4;

/// Text shown to the visitor plus the suggested next questions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub follow_ups: Vec<String>,
}

impl Reply {
    /// Keeps at most [`MAX_FOLLOW_UPS`] suggestions, in the given order.
    pub fn new<S: Into<String>>(text: impl Into<String>, follow_ups: impl IntoIterator<Item = S>) -> Self {
        Self {
            text: text.into(),
            follow_ups: follow_ups
                .into_iter()
                .take(MAX_FOLLOW_UPS)
                .map(Into::into)
                .collect(),
        }
    }
}

pub type Handler = Box<dyn Fn(&ContentDataset) -> Reply + Send + Sync>;

pub struct Intent {
    name: String,
    matcher: KeywordMatcher,
    handler: Handler,
}

impl Intent {
    pub fn new<F>(name: impl Into<String>, matcher: KeywordMatcher, handler: F) -> Self
    where
        F: Fn(&ContentDataset) -> Reply + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            matcher,
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    pub fn score(&self, input: &str) -> f32 {
        self.matcher.score(input)
    }

    pub fn respond(&self, dataset: &ContentDataset) -> Reply {
        (self.handler)(dataset)
    }
}

impl fmt::Debug for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intent")
            .field("name", &self.name)
            .field("keywords", &self.matcher.len())
            .finish()
    }
}

/// Intents in definition order. Earlier intents win score ties.
#[derive(Debug, Default)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
}

impl IntentCatalog {
    pub fn from_intents(intents: Vec<Intent>) -> Result<Self> {
        let mut names = HashSet::new();
        for intent in &intents {
            if !names.insert(intent.name()) {
                bail!("Duplicate intent name '{}'", intent.name());
            }
        }
        Ok(Self { intents })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.intents.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.name() == name)
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned(_: &ContentDataset) -> Reply {
        Reply::new("canned", ["a", "b"])
    }

    #[test]
    fn reply_caps_follow_ups() {
        let reply = Reply::new("text", ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(reply.follow_ups, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn duplicate_intent_names_are_rejected() {
        let intents = vec![
            Intent::new("greeting", KeywordMatcher::default(), canned),
            Intent::new("greeting", KeywordMatcher::default(), canned),
        ];
        assert!(IntentCatalog::from_intents(intents).is_err());
    }

    #[test]
    fn catalog_keeps_definition_order() {
        let intents = vec![
            Intent::new("first", KeywordMatcher::default(), canned),
            Intent::new("second", KeywordMatcher::default(), canned),
        ];
        let catalog = IntentCatalog::from_intents(intents).unwrap();
        let names: Vec<_> = catalog.iter().map(Intent::name).collect();
        assert_eq!(names, ["first", "second"]);
        assert!(catalog.get("second").is_some());
    }
}
