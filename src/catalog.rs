use crate::dataset::ContentDataset;
use crate::intent::{Intent, IntentCatalog};
use crate::replies::{self, FocusArea};
use crate::scorer::KeywordMatcher;
use anyhow::{Context, Result};

/// Number of most recent employers that get their own deep-dive intent.
pub const EMPLOYER_DEEP_DIVES: usize = 2;

const EMPLOYER_NAME_WEIGHT: f32 = 8.0;
const PROPER_NOUN_WEIGHT: f32 = 6.0;

/// Names stay below the threshold on their own; "Who is" carries the bio.
const FIRST_NAME_WEIGHT: f32 = 1.5;

/// Derived names this short ("UPS", "IMF") hide inside common words and only count as whole words.
const SHORT_NAME_CHARS: usize = 4;

// Short tokens that also occur inside common words ("hi" in "this", "work" in "frameworks") weigh 2,
// so they only reach the confidence threshold as whole words.

const GREETING: &[(&str, f32)] = &[
    ("hello", 4.0),
    ("hi", 2.0),
    ("hey", 2.0),
    ("hiya", 4.0),
    ("greetings", 5.0),
    ("howdy", 5.0),
    ("what's up", 5.0),
    ("good morning", 5.0),
    ("good afternoon", 5.0),
    ("good evening", 5.0),
];

const ABOUT: &[(&str, f32)] = &[
    ("who is", 5.0),
    ("about", 3.0),
    ("introduce", 4.0),
    ("introduction", 4.0),
    ("background", 3.0),
    ("biography", 5.0),
    ("bio", 2.0),
];

const EXPERIENCE: &[(&str, f32)] = &[
    ("experience", 5.0),
    ("current role", 6.0),
    ("work", 2.0),
    ("job", 3.0),
    ("career", 4.0),
    ("company", 3.0),
    ("companies", 4.0),
    ("employer", 4.0),
    ("employment", 4.0),
    ("position", 3.0),
];

const SKILLS: &[(&str, f32)] = &[
    ("skill", 5.0),
    ("technolog", 3.0),
    ("tech stack", 5.0),
    ("stack", 3.0),
    ("tools", 3.0),
    ("programming", 4.0),
    ("languages", 4.0),
    ("proficien", 4.0),
    ("good at", 4.0),
];

const PROJECTS: &[(&str, f32)] = &[
    ("project", 5.0),
    ("portfolio", 3.0),
    ("built", 3.0),
    ("created", 3.0),
    ("developed", 3.0),
];

const EDUCATION: &[(&str, f32)] = &[
    ("education", 5.0),
    ("university", 4.0),
    ("degree", 4.0),
    ("college", 4.0),
    ("school", 3.0),
    ("study", 3.0),
    ("studied", 3.0),
    ("graduat", 4.0),
    ("gpa", 4.0),
    ("masters", 4.0),
    ("master's", 4.0),
    ("bachelor", 4.0),
    ("coursework", 4.0),
    ("academic", 3.0),
];

const CERTIFICATIONS: &[(&str, f32)] = &[("certif", 5.0), ("credential", 4.0)];

const PUBLICATIONS: &[(&str, f32)] = &[
    ("publication", 5.0),
    ("research", 4.0),
    ("paper", 4.0),
    ("journal", 4.0),
    ("published", 4.0),
    ("conference", 3.0),
];

const AWARDS: &[(&str, f32)] = &[
    ("award", 5.0),
    ("honor", 4.0),
    ("honour", 4.0),
    ("achievement", 3.0),
    ("recognition", 4.0),
    ("recognized", 4.0),
    ("prize", 4.0),
];

const VOLUNTEERING: &[(&str, f32)] = &[
    ("volunteer", 5.0),
    ("community", 3.0),
    ("give back", 4.0),
    ("giving back", 4.0),
    ("charity", 4.0),
    ("nonprofit", 4.0),
    ("non-profit", 4.0),
    ("social impact", 5.0),
];

const ORGANIZATIONS: &[(&str, f32)] = &[
    ("organization", 5.0),
    ("organisation", 5.0),
    ("member", 2.0),
    ("membership", 4.0),
    ("affiliation", 4.0),
    ("association", 4.0),
    ("society", 3.0),
    ("club", 3.0),
];

const TESTIMONIALS: &[(&str, f32)] = &[
    ("testimonial", 6.0),
    ("recommendation", 5.0),
    ("recommend", 4.0),
    ("others say", 5.0),
    ("people say", 5.0),
    ("colleagues", 4.0),
    ("references", 4.0),
    ("feedback", 3.0),
    ("reviews", 3.0),
];

const CONTACT: &[(&str, f32)] = &[
    ("contact", 5.0),
    ("email", 5.0),
    ("e-mail", 5.0),
    ("reach", 4.0),
    ("hire", 3.0),
    ("connect", 4.0),
    ("linkedin", 6.0),
    ("github", 5.0),
    ("get in touch", 6.0),
    ("phone", 4.0),
];

const RESUME: &[(&str, f32)] = &[
    ("resume", 6.0),
    ("résumé", 6.0),
    ("curriculum vitae", 6.0),
    ("cv", 4.0),
    ("download", 4.0),
];

const AI_ML: &[(&str, f32)] = &[
    ("machine learning", 6.0),
    ("artificial intelligence", 6.0),
    ("deep learning", 6.0),
    ("computer vision", 6.0),
    ("ai", 2.0),
    ("ml", 2.0),
    ("nlp", 5.0),
    ("neural", 5.0),
    ("llm", 5.0),
    ("generative", 4.0),
    ("data scien", 4.0),
];

const DATA_ENGINEERING: &[(&str, f32)] = &[
    ("data engineer", 6.0),
    ("data lake", 6.0),
    ("big data", 5.0),
    ("etl", 5.0),
    ("aws", 5.0),
    ("spark", 5.0),
    ("airflow", 5.0),
    ("pipeline", 4.0),
    ("cloud", 4.0),
    ("warehouse", 4.0),
];

const WEB_DEVELOPMENT: &[(&str, f32)] = &[
    ("web development", 7.0),
    ("web dev", 6.0),
    ("full stack", 6.0),
    ("full-stack", 6.0),
    ("frontend", 5.0),
    ("front-end", 5.0),
    ("backend", 5.0),
    ("back-end", 5.0),
    ("react", 5.0),
    ("javascript", 5.0),
    ("typescript", 5.0),
    ("web app", 5.0),
    ("website", 4.0),
    ("html", 4.0),
];

// "based" stays below 2 so "ECG-Based" in a project title does not read as a location question.
const LOCATION: &[(&str, f32)] = &[
    ("location", 5.0),
    ("located", 5.0),
    ("relocat", 5.0),
    ("availab", 5.0),
    ("where is", 3.0),
    ("based", 1.5),
    ("remote", 4.0),
    ("open to", 4.0),
    ("timezone", 4.0),
    ("time zone", 4.0),
];

const PERSONAL: &[(&str, f32)] = &[
    ("fun fact", 6.0),
    ("fun", 3.0),
    ("outside of work", 6.0),
    ("hobbies", 5.0),
    ("hobby", 5.0),
    ("free time", 5.0),
    ("spare time", 5.0),
    ("interests", 4.0),
    ("passion", 4.0),
    ("personal", 4.0),
];

const WHY_HIRE: &[(&str, f32)] = &[
    ("why hire", 7.0),
    ("should we hire", 7.0),
    ("why should", 5.0),
    ("stand out", 5.0),
    ("good fit", 5.0),
    ("strengths", 5.0),
    ("what makes", 4.0),
    ("unique", 3.0),
];

const FAREWELL: &[(&str, f32)] = &[
    ("thank", 5.0),
    ("goodbye", 5.0),
    ("bye", 4.0),
    ("see you", 5.0),
    ("good night", 5.0),
    ("cheers", 4.0),
    ("appreciate", 4.0),
];

fn matcher(name: &str, keywords: &[(&str, f32)]) -> Result<KeywordMatcher> {
    KeywordMatcher::new(keywords).with_context(|| format!("Invalid keyword in intent '{}'", name))
}

fn with_names<'a>(
    mut matcher: KeywordMatcher,
    names: impl IntoIterator<Item = &'a str>,
    weight: f32,
) -> Result<KeywordMatcher> {
    for name in names {
        let pushed = if name.trim().chars().count() <= SHORT_NAME_CHARS {
            matcher.push_whole_word(name, weight)
        } else {
            matcher.push(name, weight)
        };
        pushed.with_context(|| format!("Invalid derived keyword '{}'", name))?;
    }
    Ok(matcher)
}

fn focus(name: &str, keywords: &[(&str, f32)], area: FocusArea) -> Result<Intent> {
    Ok(Intent::new(name, matcher(name, keywords)?, move |ds| {
        replies::focus_area(ds, &area)
    }))
}

impl IntentCatalog {
    /// The portfolio assistant's intents, in tie-break order.
    ///
    /// Hand-tuned keywords are extended with proper nouns from `dataset`
    /// (employers, institutions, publishers, organizations), which weigh more
    /// than any generic word.
    pub fn standard(dataset: &ContentDataset) -> Result<Self> {
        let mut intents = vec![
            Intent::new("greeting", matcher("greeting", GREETING)?, replies::greeting),
            Intent::new(
                "about",
                with_names(
                    matcher("about", ABOUT)?,
                    [dataset.first_name()],
                    FIRST_NAME_WEIGHT,
                )?,
                replies::about,
            ),
            Intent::new(
                "experience",
                matcher("experience", EXPERIENCE)?,
                replies::experience_overview,
            ),
        ];

        for (index, exp) in dataset
            .experience
            .iter()
            .take(EMPLOYER_DEEP_DIVES)
            .enumerate()
        {
            let name = format!("employer:{}", exp.id);
            let keywords = with_names(
                with_names(
                    KeywordMatcher::default(),
                    [exp.company.as_str()],
                    EMPLOYER_NAME_WEIGHT,
                )?,
                exp.aliases.iter().map(String::as_str),
                PROPER_NOUN_WEIGHT,
            )?;
            intents.push(Intent::new(name, keywords, move |ds| {
                replies::employer(ds, index)
            }));
        }

        let institutions = dataset
            .education
            .iter()
            .flat_map(|e| std::iter::once(&e.institution).chain(e.aliases.iter()))
            .map(String::as_str);
        let publishers = dataset.publications.iter().map(|p| p.publisher.as_str());
        let charities = dataset
            .volunteering
            .iter()
            .flat_map(|v| std::iter::once(&v.organization).chain(v.aliases.iter()))
            .map(String::as_str);
        let societies = dataset.organizations.iter().map(|o| o.name.as_str());

        intents.extend([
            Intent::new("skills", matcher("skills", SKILLS)?, replies::skills),
            Intent::new("projects", matcher("projects", PROJECTS)?, replies::projects),
            Intent::new(
                "education",
                with_names(matcher("education", EDUCATION)?, institutions, PROPER_NOUN_WEIGHT)?,
                replies::education,
            ),
            Intent::new(
                "certifications",
                matcher("certifications", CERTIFICATIONS)?,
                replies::certifications,
            ),
            Intent::new(
                "publications",
                with_names(
                    matcher("publications", PUBLICATIONS)?,
                    publishers,
                    PROPER_NOUN_WEIGHT,
                )?,
                replies::publications,
            ),
            Intent::new("awards", matcher("awards", AWARDS)?, replies::awards),
            Intent::new(
                "volunteering",
                with_names(
                    matcher("volunteering", VOLUNTEERING)?,
                    charities,
                    PROPER_NOUN_WEIGHT,
                )?,
                replies::volunteering,
            ),
            Intent::new(
                "organizations",
                with_names(
                    matcher("organizations", ORGANIZATIONS)?,
                    societies,
                    PROPER_NOUN_WEIGHT,
                )?,
                replies::organizations,
            ),
            Intent::new(
                "testimonials",
                matcher("testimonials", TESTIMONIALS)?,
                replies::testimonials,
            ),
            Intent::new("contact", matcher("contact", CONTACT)?, replies::contact),
            Intent::new("resume", matcher("resume", RESUME)?, replies::resume),
            focus("ai_ml", AI_ML, replies::AI_ML)?,
            focus("data_engineering", DATA_ENGINEERING, replies::DATA_ENGINEERING)?,
            focus("web_development", WEB_DEVELOPMENT, replies::WEB_DEVELOPMENT)?,
            Intent::new("location", matcher("location", LOCATION)?, replies::location),
            Intent::new("personal", matcher("personal", PERSONAL)?, replies::personal),
            Intent::new(
                "why_hire",
                with_names(
                    matcher("why_hire", WHY_HIRE)?,
                    [format!("why {}", dataset.first_name()).as_str()],
                    PROPER_NOUN_WEIGHT,
                )?,
                replies::why_hire,
            ),
            Intent::new("farewell", matcher("farewell", FAREWELL)?, replies::farewell),
        ]);

        let catalog = IntentCatalog::from_intents(intents)?;
        log::debug!("Built intent catalog with {} intents", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::MAX_FOLLOW_UPS;

    fn catalog() -> (IntentCatalog, &'static ContentDataset) {
        let ds = ContentDataset::bundled().unwrap();
        (IntentCatalog::standard(ds).unwrap(), ds)
    }

    #[test]
    fn standard_catalog_has_required_intents() {
        let (catalog, _) = catalog();
        for name in [
            "greeting",
            "about",
            "experience",
            "employer:ups",
            "employer:bmsc",
            "skills",
            "projects",
            "education",
            "certifications",
            "publications",
            "awards",
            "volunteering",
            "organizations",
            "testimonials",
            "contact",
            "resume",
            "ai_ml",
            "data_engineering",
            "web_development",
            "location",
            "personal",
            "why_hire",
            "farewell",
        ] {
            assert!(catalog.get(name).is_some(), "missing intent {}", name);
        }
        assert!(catalog.get("employer:ceac").is_none());
    }

    #[test]
    fn every_handler_respects_follow_up_limit() {
        let (catalog, ds) = catalog();
        for intent in catalog.iter() {
            let reply = intent.respond(ds);
            assert!(!reply.text.is_empty(), "{} produced empty text", intent.name());
            assert!(reply.follow_ups.len() <= MAX_FOLLOW_UPS);
        }
    }

    #[test]
    fn proper_nouns_outweigh_generic_words() {
        let (catalog, _) = catalog();
        let ups = catalog.get("employer:ups").unwrap();
        let experience = catalog.get("experience").unwrap();
        let input = "what was his work at UPS like";
        assert!(ups.score(input) > experience.score(input));
    }

    #[test]
    fn short_employer_names_need_whole_words() {
        let (catalog, _) = catalog();
        let ups = catalog.get("employer:ups").unwrap();
        assert_eq!(ups.score("What does he do at UPS?"), 12.0);
        for input in [
            "Does he have any startups?",
            "Which professional groups is he part of?",
            "Any meetups?",
        ] {
            assert_eq!(ups.score(input), 0.0, "input {:?}", input);
        }
    }

    #[test]
    fn first_name_alone_stays_below_threshold() {
        let (catalog, _) = catalog();
        let about = catalog.get("about").unwrap();
        assert!(about.score("Does Pradeep know Python?") < 3.0);
        assert!(about.score("Who is Pradeep?") >= 3.0);
    }

    #[test]
    fn work_needs_a_whole_word() {
        let (catalog, _) = catalog();
        let experience = catalog.get("experience").unwrap();
        assert_eq!(experience.score("Which frameworks does he use?"), 2.0);
        assert_eq!(experience.score("his work"), 3.0);
    }

    #[test]
    fn derived_names_route_to_their_topic() {
        let (catalog, _) = catalog();
        let volunteering = catalog.get("volunteering").unwrap();
        assert_eq!(volunteering.score("IMF"), 9.0);
        let education = catalog.get("education").unwrap();
        assert!(education.score("Did he go to GWU?") >= 9.0);
    }
}
