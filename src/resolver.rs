use crate::dataset::{ContentDataset, SkillRef};
use crate::intent::{Intent, IntentCatalog, Reply};
use crate::replies;
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Minimum intent score accepted before falling back to entity lookup.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 3.0;

/// Leading characters of a project title that count as a mention of it.
pub const DEFAULT_PROJECT_PREFIX_CHARS: usize = 15;

/// Skill names this short must appear as whole words ("R" would otherwise match nearly anything).
const SHORT_SKILL_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ResolverSettings {
    #[serde(default = "ResolverSettings::default_confidence_threshold")]
    pub confidence_threshold: f32,
    #[serde(default = "ResolverSettings::default_project_prefix_chars")]
    pub project_prefix_chars: usize,
}

impl ResolverSettings {
    fn default_confidence_threshold() -> f32 {
        DEFAULT_CONFIDENCE_THRESHOLD
    }

    fn default_project_prefix_chars() -> usize {
        DEFAULT_PROJECT_PREFIX_CHARS
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            project_prefix_chars: DEFAULT_PROJECT_PREFIX_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredIntent<'a> {
    pub intent: &'a Intent,
    pub score: f32,
}

/// Which step of the resolution chain produced the reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Branch {
    Empty,
    Intent { name: String, score: f32 },
    ProjectMention { project_id: String },
    SkillMention { skill: String },
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub branch: Branch,
    pub reply: Reply,
}

/// Strategies tried after the empty-input check, in this order. The last one always answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    IntentMatch,
    ProjectMention,
    SkillMention,
    GenericHelp,
}

const CHAIN: [Strategy; 4] = [
    Strategy::IntentMatch,
    Strategy::ProjectMention,
    Strategy::SkillMention,
    Strategy::GenericHelp,
];

#[derive(Debug)]
struct ProjectPattern {
    index: usize,
    title: String,
    prefix: String,
}

impl ProjectPattern {
    /// The full title, or its leading characters when a prefix length is configured.
    fn is_mentioned(&self, lower_input: &str) -> bool {
        (!self.title.is_empty() && lower_input.contains(&self.title))
            || (!self.prefix.is_empty() && lower_input.contains(&self.prefix))
    }
}

#[derive(Debug)]
struct SkillPattern {
    name: String,
    category: String,
    lower: String,
    whole_word: Option<Regex>,
}

impl SkillPattern {
    fn is_mentioned(&self, input: &str, lower_input: &str) -> bool {
        match &self.whole_word {
            Some(re) => re.is_match(input),
            None => lower_input.contains(&self.lower),
        }
    }
}

/// Turns free text into a reply. Total over its input: the worst case is the help text.
#[derive(Debug)]
pub struct Resolver {
    dataset: Arc<ContentDataset>,
    catalog: IntentCatalog,
    settings: ResolverSettings,
    projects: Vec<ProjectPattern>,
    skills: Vec<SkillPattern>,
}

impl Resolver {
    pub fn new(
        dataset: Arc<ContentDataset>,
        catalog: IntentCatalog,
        settings: ResolverSettings,
    ) -> Result<Self> {
        let projects = dataset
            .projects
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let title = p.title.to_lowercase();
                let prefix = title.chars().take(settings.project_prefix_chars).collect();
                ProjectPattern {
                    index,
                    title,
                    prefix,
                }
            })
            .collect();

        let skills = dataset
            .all_skills()
            .map(skill_pattern)
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Resolver ready: {} intents, {} project patterns, {} skill patterns, threshold {}",
            catalog.len(),
            dataset.projects.len(),
            skills.len(),
            settings.confidence_threshold
        );

        Ok(Self {
            dataset,
            catalog,
            settings,
            projects,
            skills,
        })
    }

    /// Standard catalog over `dataset` with default settings.
    pub fn standard(dataset: Arc<ContentDataset>) -> Result<Self> {
        Self::with_settings(dataset, ResolverSettings::default())
    }

    pub fn with_settings(dataset: Arc<ContentDataset>, settings: ResolverSettings) -> Result<Self> {
        let catalog = IntentCatalog::standard(&dataset)?;
        Self::new(dataset, catalog, settings)
    }

    pub fn dataset(&self) -> &ContentDataset {
        &self.dataset
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn welcome_message(&self) -> String {
        replies::welcome(&self.dataset)
    }

    pub fn quick_questions(&self) -> Vec<String> {
        replies::quick_questions(&self.dataset)
    }

    pub fn resolve(&self, raw_input: &str) -> Reply {
        self.resolve_traced(raw_input).reply
    }

    pub fn resolve_traced(&self, raw_input: &str) -> Resolution {
        let input = raw_input.trim();
        if input.is_empty() {
            return Resolution {
                branch: Branch::Empty,
                reply: replies::empty_input(&self.dataset),
            };
        }

        for strategy in CHAIN {
            if let Some(resolution) = self.attempt(strategy, input) {
                log::debug!("Resolved {:?} via {:?}", input, resolution.branch);
                return resolution;
            }
        }
        self.generic_help()
    }

    /// Every intent scored against `input`, best first. Equal scores keep catalog order.
    pub fn rank(&self, input: &str) -> Vec<ScoredIntent<'_>> {
        let mut scored: Vec<ScoredIntent<'_>> = self
            .catalog
            .iter()
            .map(|intent| ScoredIntent {
                intent,
                score: intent.score(input),
            })
            .collect();
        // sort_by is stable
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    fn attempt(&self, strategy: Strategy, input: &str) -> Option<Resolution> {
        match strategy {
            Strategy::IntentMatch => self.match_intent(input),
            Strategy::ProjectMention => self.match_project(input),
            Strategy::SkillMention => self.match_skill(input),
            Strategy::GenericHelp => Some(self.generic_help()),
        }
    }

    fn match_intent(&self, input: &str) -> Option<Resolution> {
        let best = self.rank(input).into_iter().next()?;
        if best.score < self.settings.confidence_threshold {
            log::debug!(
                "Top intent '{}' scored {} below threshold {}",
                best.intent.name(),
                best.score,
                self.settings.confidence_threshold
            );
            return None;
        }
        Some(Resolution {
            branch: Branch::Intent {
                name: best.intent.name().to_string(),
                score: best.score,
            },
            reply: best.intent.respond(&self.dataset),
        })
    }

    fn match_project(&self, input: &str) -> Option<Resolution> {
        let lower = input.to_lowercase();
        let pattern = self
            .projects
            .iter()
            .find(|p| p.is_mentioned(&lower))?;
        let project = self.dataset.projects.get(pattern.index)?;
        Some(Resolution {
            branch: Branch::ProjectMention {
                project_id: project.id.clone(),
            },
            reply: replies::project_detail(&self.dataset, project),
        })
    }

    /// The longest mentioned skill name wins; ties go to the earlier category.
    fn match_skill(&self, input: &str) -> Option<Resolution> {
        let lower = input.to_lowercase();
        let mut best: Option<&SkillPattern> = None;
        for skill in self.skills.iter().filter(|s| s.is_mentioned(input, &lower)) {
            if best.map_or(true, |b| skill.lower.chars().count() > b.lower.chars().count()) {
                best = Some(skill);
            }
        }
        let skill = best?;
        Some(Resolution {
            branch: Branch::SkillMention {
                skill: skill.name.clone(),
            },
            reply: replies::skill_confirmation(
                &self.dataset,
                SkillRef {
                    name: skill.name.as_str(),
                    category: skill.category.as_str(),
                },
            ),
        })
    }

    fn generic_help(&self) -> Resolution {
        Resolution {
            branch: Branch::Help,
            reply: replies::help(&self.dataset),
        }
    }
}

fn skill_pattern(skill: SkillRef<'_>) -> Result<SkillPattern> {
    let lower = skill.name.trim().to_lowercase();
    let whole_word = if lower.chars().count() <= SHORT_SKILL_CHARS {
        Some(
            RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&lower)))
                .case_insensitive(true)
                .build()
                .with_context(|| format!("Invalid skill name '{}'", skill.name))?,
        )
    } else {
        None
    };
    Ok(SkillPattern {
        name: skill.name.to_string(),
        category: skill.category.to_string(),
        lower,
        whole_word,
    })
}
