use anyhow::{bail, Context, Result};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;

// --- Records ---

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub bio: String,
    pub stats: Stats,
    pub social: Social,
    pub availability: String,
    #[serde(default)]
    pub fun_facts: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub years_experience: u32,
    pub projects_completed: u32,
    pub skills_learned: u32,
    pub certifications: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Social {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub role: String,
    pub date_range: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Experience {
    /// First achievement, or the description when none are listed.
    pub fn headline_achievement(&self) -> &str {
        self.achievements
            .first()
            .map(String::as_str)
            .unwrap_or(self.description.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: String,
    pub date: String,
    pub date_range: String,
    pub github_url: String,
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| t.eq_ignore_ascii_case(technology))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub field: String,
    pub institution: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub date_range: String,
    pub grade: String,
    pub location: String,
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub link: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Volunteering {
    pub id: String,
    pub organization: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub role: String,
    pub date_range: String,
    #[serde(default)]
    pub cause: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Award {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub date_range: Option<String>,
    pub association: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub text: String,
}

// --- Dataset ---

/// Read-only portfolio content shared by every intent handler.
///
/// Every collection is required: a document missing one fails to load rather
/// than surfacing as an empty answer mid-conversation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ContentDataset {
    pub about: About,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub publications: Vec<Publication>,
    pub volunteering: Vec<Volunteering>,
    pub awards: Vec<Award>,
    pub organizations: Vec<Organization>,
    pub testimonials: Vec<Testimonial>,
}

/// A skill name together with the category it is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRef<'a> {
    pub name: &'a str,
    pub category: &'a str,
}

static BUNDLED: OnceCell<ContentDataset> = OnceCell::new();

impl ContentDataset {
    /// Parses a single document holding every collection.
    pub fn from_json(content: &str) -> Result<Self> {
        let dataset: ContentDataset =
            serde_json::from_str(content).context("Malformed content dataset")?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Loads one JSON file per topic from `dir` (`about.json`, `projects.json`, ...).
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let dataset = ContentDataset {
            about: load_topic(dir, "about")?,
            experience: load_topic(dir, "experience")?,
            projects: load_topic(dir, "projects")?,
            skills: load_topic(dir, "skills")?,
            education: load_topic(dir, "education")?,
            certifications: load_topic(dir, "certifications")?,
            publications: load_topic(dir, "publications")?,
            volunteering: load_topic(dir, "volunteering")?,
            awards: load_topic(dir, "awards")?,
            organizations: load_topic(dir, "organizations")?,
            testimonials: load_topic(dir, "testimonials")?,
        };
        dataset.validate()?;
        log::info!(
            "Loaded content dataset from {:?}: {} roles, {} projects, {} skills",
            dir,
            dataset.experience.len(),
            dataset.projects.len(),
            dataset.skill_count()
        );
        Ok(dataset)
    }

    /// The dataset compiled into the crate, parsed on first use.
    pub fn bundled() -> Result<&'static ContentDataset> {
        BUNDLED.get_or_try_init(|| -> Result<ContentDataset> {
            let dataset = ContentDataset {
                about: parse_topic("about", include_str!("../data/about.json"))?,
                experience: parse_topic("experience", include_str!("../data/experience.json"))?,
                projects: parse_topic("projects", include_str!("../data/projects.json"))?,
                skills: parse_topic("skills", include_str!("../data/skills.json"))?,
                education: parse_topic("education", include_str!("../data/education.json"))?,
                certifications: parse_topic(
                    "certifications",
                    include_str!("../data/certifications.json"),
                )?,
                publications: parse_topic(
                    "publications",
                    include_str!("../data/publications.json"),
                )?,
                volunteering: parse_topic(
                    "volunteering",
                    include_str!("../data/volunteering.json"),
                )?,
                awards: parse_topic("awards", include_str!("../data/awards.json"))?,
                organizations: parse_topic(
                    "organizations",
                    include_str!("../data/organizations.json"),
                )?,
                testimonials: parse_topic(
                    "testimonials",
                    include_str!("../data/testimonials.json"),
                )?,
            };
            dataset.validate()?;
            Ok(dataset)
        })
    }

    /// Checks identifier uniqueness within each collection.
    pub fn validate(&self) -> Result<()> {
        if self.about.name.trim().is_empty() {
            bail!("about.name must not be empty");
        }
        ensure_unique_ids("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids("projects", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("education", self.education.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids(
            "certifications",
            self.certifications.iter().map(|c| c.id.as_str()),
        )?;
        ensure_unique_ids(
            "publications",
            self.publications.iter().map(|p| p.id.as_str()),
        )?;
        ensure_unique_ids(
            "volunteering",
            self.volunteering.iter().map(|v| v.id.as_str()),
        )?;
        ensure_unique_ids("awards", self.awards.iter().map(|a| a.id.as_str()))?;
        ensure_unique_ids(
            "organizations",
            self.organizations.iter().map(|o| o.id.as_str()),
        )?;
        ensure_unique_ids(
            "testimonials",
            self.testimonials.iter().map(|t| t.id.as_str()),
        )?;
        ensure_unique_ids("skills", self.skills.iter().map(|c| c.category.as_str()))?;
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        self.about
            .name
            .split_whitespace()
            .next()
            .unwrap_or(self.about.name.as_str())
    }

    /// Every skill, flattened in category order.
    pub fn all_skills(&self) -> impl Iterator<Item = SkillRef<'_>> {
        self.skills.iter().flat_map(|cat| {
            cat.skills.iter().map(move |name| SkillRef {
                name: name.as_str(),
                category: cat.category.as_str(),
            })
        })
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|c| c.skills.len()).sum()
    }

    /// Distinct project categories in first-seen order.
    pub fn project_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}

fn load_topic<T: DeserializeOwned>(dir: &Path, topic: &str) -> Result<T> {
    let path = dir.join(format!("{}.json", topic));
    let content = read_to_string(&path)
        .with_context(|| format!("Failed to read '{}' collection at {:?}", topic, path))?;
    parse_topic(topic, &content)
}

fn parse_topic<T: DeserializeOwned>(topic: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).with_context(|| format!("Malformed '{}' collection", topic))
}

fn ensure_unique_ids<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("Duplicate id '{}' in '{}' collection", id, collection);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_loads_and_validates() {
        let ds = ContentDataset::bundled().unwrap();
        assert_eq!(ds.first_name(), "Pradeep");
        assert!(!ds.projects.is_empty());
        assert_eq!(ds.skill_count(), ds.all_skills().count());
    }

    #[test]
    fn all_skills_keeps_category_order() {
        let ds = ContentDataset::bundled().unwrap();
        let first = ds.all_skills().next().unwrap();
        assert_eq!(first.category, ds.skills[0].category);
        assert_eq!(first.name, ds.skills[0].skills[0]);
    }

    #[test]
    fn project_categories_are_distinct() {
        let ds = ContentDataset::bundled().unwrap();
        let cats = ds.project_categories();
        let unique: HashSet<_> = cats.iter().collect();
        assert_eq!(cats.len(), unique.len());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut ds = ContentDataset::bundled().unwrap().clone();
        let dup = ds.projects[0].clone();
        ds.projects.push(dup);
        let err = ds.validate().unwrap_err();
        assert!(err.to_string().contains("projects"));
    }

    #[test]
    fn missing_collection_fails_fast() {
        let err = ContentDataset::from_json(r#"{ "projects": [] }"#).unwrap_err();
        assert!(err.to_string().contains("Malformed content dataset"));
    }

    #[test]
    fn load_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentDataset::load_dir(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("about"));
    }

    #[test]
    fn load_dir_reads_every_topic() {
        let dir = tempfile::tempdir().unwrap();
        let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        for entry in std::fs::read_dir(&src).unwrap() {
            let entry = entry.unwrap();
            std::fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
        }
        let ds = ContentDataset::load_dir(dir.path()).unwrap();
        assert_eq!(ds.about.name, "Pradeep Somasundaram");
    }
}
