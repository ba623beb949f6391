//! Response text for every intent and fallback.
//!
//! Each function is a pure read of the [`ContentDataset`]; none of them index
//! into a collection, so an empty collection yields a shorter answer rather
//! than a panic.

use crate::catalog::EMPLOYER_DEEP_DIVES;
use crate::dataset::{ContentDataset, Experience, Project, SkillRef};
use crate::intent::Reply;

const SUMMARY_CHARS: usize = 100;
const PUBLICATION_SUMMARY_CHARS: usize = 120;

/// Collects any mix of `&str` and `String` phrases into a follow-up list.
macro_rules! phrases {
    ($($phrase:expr),* $(,)?) => {
        vec![$(String::from($phrase)),*]
    };
}

// --- Follow-up phrases ---
//
// Each phrase is one that triggers another intent.

fn who_is(ds: &ContentDataset) -> String {
    format!("Who is {}?", ds.first_name())
}

fn contact_phrase(ds: &ContentDataset) -> String {
    format!("How can I contact {}?", ds.first_name())
}

fn why_hire_phrase(ds: &ContentDataset) -> String {
    format!("Why hire {}?", ds.first_name())
}

fn where_based_phrase(ds: &ContentDataset) -> String {
    format!("Where is {} based?", ds.first_name())
}

/// Phrase that routes to the deep dive for `company`.
pub fn employer_phrase(ds: &ContentDataset, company: &str) -> String {
    format!("What does {} do at {}?", ds.first_name(), company)
}

pub fn generic_follow_ups(ds: &ContentDataset) -> Vec<String> {
    phrases![
        who_is(ds),
        "Current role",
        "Top projects",
        "Technical skills",
    ]
}

/// Starter prompts shown under the welcome message.
pub fn quick_questions(ds: &ContentDataset) -> Vec<String> {
    phrases![
        who_is(ds),
        "Current role & experience",
        "Top projects",
        "Skills & certifications",
        "Education background",
        "Publications & research",
    ]
}

// --- Formatting helpers ---

/// Cuts `text` to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
        None => text.to_string(),
    }
}

fn lines<I: IntoIterator<Item = String>>(items: I, separator: &str) -> String {
    items.into_iter().collect::<Vec<_>>().join(separator)
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

fn matches_any(value: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| value.eq_ignore_ascii_case(n))
}

// --- Fixed replies ---

pub fn welcome(ds: &ContentDataset) -> String {
    format!(
        "Welcome to {}'s portfolio! I'm here to help you learn about {} experience, projects, skills, and more.\n\nTry asking me something, or pick a topic below to get started.",
        ds.first_name(),
        possessive(ds)
    )
}

fn possessive(ds: &ContentDataset) -> String {
    format!("{}'s", ds.first_name())
}

pub fn empty_input(ds: &ContentDataset) -> Reply {
    Reply::new(
        format!(
            "It looks like you didn't type anything. Ask me about {} experience, projects, skills, or education!",
            possessive(ds)
        ),
        generic_follow_ups(ds),
    )
}

pub fn help(ds: &ContentDataset) -> Reply {
    let text = format!(
        "I'd be happy to help you learn about {}! Here are some topics I can assist with:\n\n\
         🧑‍💼 \"Current role\" — Work experience and career\n\
         🛠️ \"Skills\" — Technical skills and certifications\n\
         📂 \"Projects\" — Featured projects and portfolio\n\
         🎓 \"Education\" — Degrees and academic background\n\
         📝 \"Publications\" — Research papers and contributions\n\
         🏆 \"Awards\" — Honors and recognitions\n\
         🤝 \"Volunteering\" — Community involvement\n\
         🏛️ \"Organizations\" — Professional memberships\n\
         💬 \"Testimonials\" — What colleagues say\n\
         📍 \"Location\" — Where {} is based and availability\n\
         🎲 \"Fun facts\" — Life outside of work\n\
         📧 \"Contact\" — How to get in touch\n\
         📄 \"Resume\" — Download the resume\n\n\
         You can also name a project or a technology. Just type a topic or ask a question!",
        ds.first_name(),
        ds.first_name()
    );
    Reply::new(text, generic_follow_ups(ds))
}

// --- Intent handlers ---

pub fn greeting(ds: &ContentDataset) -> Reply {
    let text = format!(
        "Hello! Welcome to {} portfolio. I can help you learn about {} professional background, projects, skills, and more.\n\n\
         Here are some things you can ask me:\n\
         • Current role and work experience\n\
         • Technical skills and certifications\n\
         • Projects {} has built\n\
         • Education and research publications\n\
         • How to get in touch\n\n\
         What would you like to know?",
        possessive(ds),
        possessive(ds),
        ds.first_name()
    );
    Reply::new(text, generic_follow_ups(ds))
}

pub fn about(ds: &ContentDataset) -> Reply {
    let about = &ds.about;
    let first = ds.first_name();
    let mut text = format!(
        "{} is a {} based in {}.",
        about.name, about.headline, about.location
    );

    let degrees: Vec<String> = ds
        .education
        .iter()
        .map(|e| {
            format!(
                "a {} in {} from {} (Grade: {})",
                e.degree, e.field, e.institution, e.grade
            )
        })
        .collect();
    if !degrees.is_empty() {
        text.push_str(&format!("\n\n{} holds {}.", first, degrees.join(" and ")));
    }

    if let Some(current) = ds.experience.first() {
        text.push_str(&format!(
            "\n\nCurrently working as a {} at {}. Recent highlight: {}.",
            current.role,
            current.company,
            current.headline_achievement().trim_end_matches('.')
        ));
    }

    text.push_str(&format!(
        "\n\nWith {} years of experience, {}+ projects, and expertise in {}+ technologies, {} brings together work in {}.\n\nVisit the About page to learn more!",
        about.stats.years_experience,
        ds.projects.len(),
        ds.skill_count(),
        first,
        ds.project_categories().join(", ")
    ));

    Reply::new(
        text,
        [
            "Current role",
            "Top projects",
            "Education background",
            "Fun facts",
        ],
    )
}

fn experience_bullet(exp: &Experience) -> String {
    let tag = if exp.featured { " (Current)" } else { "" };
    format!(
        "• {} at {}{}\n  {} | {}\n  {}",
        exp.role,
        exp.company,
        tag,
        exp.date_range,
        exp.location,
        exp.headline_achievement()
    )
}

pub fn experience_overview(ds: &ContentDataset) -> Reply {
    let recent = lines(ds.experience.iter().take(3).map(experience_bullet), "\n\n");
    let companies: Vec<&str> = ds.experience.iter().map(|e| e.company.as_str()).collect();
    let text = format!(
        "{} has {}. Here are the most recent positions:\n\n{}\n\nEmployers so far: {}.\n\nVisit the Experience page for the complete timeline!",
        ds.first_name(),
        plural(ds.experience.len(), "professional role", "professional roles"),
        recent,
        companies.join(", ")
    );

    let mut follow_ups = Vec::new();
    if let Some(current) = ds.experience.first() {
        follow_ups.push(employer_phrase(ds, &current.company));
    }
    follow_ups.extend(phrases![
        "Technical skills",
        "Top projects",
        "Education background",
    ]);
    Reply::new(text, follow_ups)
}

/// Deep dive into the employer at `index` in the experience list.
pub fn employer(ds: &ContentDataset, index: usize) -> Reply {
    let Some(exp) = ds.experience.get(index) else {
        return experience_overview(ds);
    };

    let mut text = format!(
        "{} at {} ({})\n{} | {}\n\n{}",
        exp.role, exp.company, exp.employment_type, exp.date_range, exp.location, exp.description
    );
    if !exp.achievements.is_empty() {
        let achievements = lines(exp.achievements.iter().map(|a| format!("• {}", a)), "\n");
        text.push_str(&format!("\n\nKey achievements:\n{}", achievements));
    }
    let tools: Vec<&str> = exp
        .technologies
        .iter()
        .chain(exp.skills.iter())
        .map(String::as_str)
        .collect();
    if !tools.is_empty() {
        text.push_str(&format!("\n\nTechnologies & skills: {}", tools.join(", ")));
    }

    let mut follow_ups = phrases!["Work experience"];
    if let Some(next) = ds.experience.get(index + 1).filter(|_| index + 1 < EMPLOYER_DEEP_DIVES) {
        follow_ups.push(employer_phrase(ds, &next.company));
    }
    follow_ups.extend(phrases!["Technical skills", contact_phrase(ds)]);
    Reply::new(text, follow_ups)
}

pub fn skills(ds: &ContentDataset) -> Reply {
    let summary = lines(
        ds.skills.iter().take(6).map(|cat| {
            let shown = cat.skills.iter().take(4).cloned().collect::<Vec<_>>().join(", ");
            if cat.skills.len() > 4 {
                format!("• {}: {} +{} more", cat.category, shown, cat.skills.len() - 4)
            } else {
                format!("• {}: {}", cat.category, shown)
            }
        }),
        "\n",
    );
    let mut text = format!(
        "{} is proficient in {}+ technologies across {}:\n\n{}",
        ds.first_name(),
        ds.skill_count(),
        plural(ds.skills.len(), "category", "categories"),
        summary
    );
    if ds.skills.len() > 6 {
        text.push_str(&format!("\n\n...and {} more!", plural(ds.skills.len() - 6, "category", "categories")));
    }
    if let Some(cert) = ds.certifications.first() {
        text.push_str(&format!(
            "\n\n{} also holds {} including \"{}\" from {}.",
            ds.first_name(),
            plural(ds.certifications.len(), "certification", "certifications"),
            cert.name,
            cert.issuer
        ));
    }
    text.push_str("\n\nCheck the Skills and Certifications pages for the full breakdown!");

    Reply::new(
        text,
        [
            "Certifications",
            "Top projects",
            "Machine learning expertise",
            "Web development projects",
        ],
    )
}

pub fn projects(ds: &ContentDataset) -> Reply {
    let mut showcase: Vec<&Project> = ds.featured_projects().take(4).collect();
    if showcase.is_empty() {
        showcase = ds.projects.iter().take(4).collect();
    }
    let summary = lines(
        showcase.iter().map(|p| {
            format!(
                "• {} ({})\n  {}",
                p.title,
                p.category,
                truncate(&p.description, SUMMARY_CHARS)
            )
        }),
        "\n\n",
    );
    let text = format!(
        "{} has built {}+ projects spanning {}.\n\nFeatured projects:\n\n{}\n\nAsk me about any project by name for the details, or explore the Projects page with filters and search!",
        ds.first_name(),
        ds.projects.len(),
        ds.project_categories().join(", "),
        summary
    );
    Reply::new(
        text,
        [
            "Machine learning expertise",
            "Web development projects",
            "Data engineering & AWS",
            "Technical skills",
        ],
    )
}

pub fn education(ds: &ContentDataset) -> Reply {
    let summary = lines(
        ds.education.iter().map(|e| {
            let mut entry = format!(
                "• {} in {}\n  {} ({})\n  Grade: {} | {}",
                e.degree, e.field, e.institution, e.date_range, e.grade, e.location
            );
            if !e.activities.is_empty() {
                entry.push_str(&format!("\n  Activities: {}", e.activities));
            }
            if !e.description.is_empty() {
                entry.push_str(&format!("\n  {}", e.description));
            }
            entry
        }),
        "\n\n",
    );
    let text = format!(
        "{} educational background:\n\n{}\n\nVisit the Education page for more details!",
        possessive(ds),
        summary
    );
    Reply::new(
        text,
        [
            "Publications & research",
            "Certifications",
            "Awards & honors",
            "Current role",
        ],
    )
}

pub fn certifications(ds: &ContentDataset) -> Reply {
    let summary = lines(
        ds.certifications
            .iter()
            .map(|c| format!("• {} — {} ({})", c.name, c.issuer, c.date)),
        "\n",
    );
    let text = format!(
        "{} holds {}:\n\n{}\n\nSee the Certifications page for full details!",
        ds.first_name(),
        plural(
            ds.certifications.len(),
            "professional certification",
            "professional certifications"
        ),
        summary
    );
    Reply::new(
        text,
        [
            "Technical skills",
            "Education background",
            "Awards & honors",
            "Top projects",
        ],
    )
}

pub fn publications(ds: &ContentDataset) -> Reply {
    let summary = lines(
        ds.publications.iter().map(|p| {
            format!(
                "• \"{}\"\n  Published in {} ({}) — {}\n  {}",
                p.title,
                p.publisher,
                p.date,
                p.kind,
                truncate(&p.description, PUBLICATION_SUMMARY_CHARS)
            )
        }),
        "\n\n",
    );
    let text = format!(
        "{} has {}:\n\n{}\n\nVisit the Publications page to learn more!",
        ds.first_name(),
        plural(
            ds.publications.len(),
            "peer-reviewed publication",
            "peer-reviewed publications"
        ),
        summary
    );
    Reply::new(
        text,
        [
            "Machine learning expertise",
            "Education background",
            "Awards & honors",
            "Top projects",
        ],
    )
}

pub fn awards(ds: &ContentDataset) -> Reply {
    let summary = lines(
        ds.awards
            .iter()
            .map(|a| format!("• {} — {} ({})", a.title, a.issuer, a.date)),
        "\n",
    );
    let text = format!(
        "{} honors and awards:\n\n{}\n\nCheck out the Awards page for details!",
        possessive(ds),
        summary
    );
    Reply::new(
        text,
        [
            "Volunteering",
            "Publications & research",
            "Testimonials",
            "Professional organizations",
        ],
    )
}

pub fn volunteering(ds: &ContentDataset) -> Reply {
    let summary = lines(
        ds.volunteering.iter().map(|v| {
            format!(
                "• {} at {} ({})\n  {}",
                v.role,
                v.organization,
                v.date_range,
                truncate(&v.description, SUMMARY_CHARS)
            )
        }),
        "\n\n",
    );
    let causes: Vec<&str> = ds
        .volunteering
        .iter()
        .map(|v| v.cause.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    let mut text = format!(
        "{} actively gives back through volunteering:\n\n{}",
        ds.first_name(),
        summary
    );
    if !causes.is_empty() {
        text.push_str(&format!("\n\nCauses: {}.", causes.join(", ")));
    }
    text.push_str("\n\nVisit the Volunteering page to learn more!");
    Reply::new(
        text,
        phrases![
            "Awards & honors",
            "Professional organizations",
            "Fun facts",
            who_is(ds),
        ],
    )
}

pub fn organizations(ds: &ContentDataset) -> Reply {
    let summary = lines(
        ds.organizations.iter().map(|o| {
            let mut entry = format!("• {}", o.name);
            if let Some(role) = &o.role {
                entry.push_str(&format!(" — {}", role));
            }
            if let Some(range) = &o.date_range {
                entry.push_str(&format!(" ({})", range));
            }
            if let Some(desc) = &o.description {
                entry.push_str(&format!("\n  {}", desc));
            }
            entry
        }),
        "\n\n",
    );
    let text = format!(
        "{} is involved with these professional organizations:\n\n{}\n\nSee the Organizations page for more!",
        ds.first_name(),
        summary
    );
    Reply::new(
        text,
        [
            "Volunteering",
            "Awards & honors",
            "Publications & research",
            "Testimonials",
        ],
    )
}

pub fn testimonials(ds: &ContentDataset) -> Reply {
    let quotes = lines(
        ds.testimonials
            .iter()
            .map(|t| format!("\"{}\"\n  — {}, {}", t.text, t.name, t.role)),
        "\n\n",
    );
    let text = format!(
        "Here's what people who have worked with {} say:\n\n{}\n\nRead more on the Testimonials section of the Home page!",
        ds.first_name(),
        quotes
    );
    Reply::new(
        text,
        phrases![
            why_hire_phrase(ds),
            "Current role",
            "Top projects",
            contact_phrase(ds),
        ],
    )
}

pub fn contact(ds: &ContentDataset) -> Reply {
    let social = &ds.about.social;
    let text = format!(
        "You can connect with {} through:\n\n📧 Email: {}\n🔗 LinkedIn: {}\n💻 GitHub: {}\n📍 Location: {}\n\n{}\n\nHead to the Contact page to reach out!",
        ds.first_name(),
        social.email,
        social.linkedin,
        social.github,
        ds.about.location,
        ds.about.availability
    );
    Reply::new(
        text,
        phrases![
            "Download resume",
            where_based_phrase(ds),
            why_hire_phrase(ds),
            "Top projects",
        ],
    )
}

pub fn resume(ds: &ContentDataset) -> Reply {
    let companies: Vec<&str> = ds
        .experience
        .iter()
        .take(3)
        .map(|e| e.company.as_str())
        .collect();
    let mut text = format!(
        "You can download {} resume by clicking the \"Download Resume\" button on the Home page. It includes the complete professional background, skills, and experience.",
        possessive(ds)
    );
    if !companies.is_empty() {
        text.push_str(&format!("\n\nThe resume covers the work at {}", companies.join(", ")));
        match ds.education.first() {
            Some(edu) => text.push_str(&format!(
                ", along with the {} in {} from {}.",
                edu.degree, edu.field, edu.institution
            )),
            None => text.push('.'),
        }
    }
    Reply::new(
        text,
        phrases![
            contact_phrase(ds),
            "Current role",
            "Technical skills",
            "Education background",
        ],
    )
}

/// A slice of the portfolio that a domain-expertise question asks about.
#[derive(Debug, Clone, Copy)]
pub struct FocusArea {
    pub label: &'static str,
    pub project_categories: &'static [&'static str],
    pub skill_categories: &'static [&'static str],
    /// Lower-case terms that mark a role as relevant.
    pub role_terms: &'static [&'static str],
    pub cite_publications: bool,
    pub follow_ups: &'static [&'static str],
}

pub const AI_ML: FocusArea = FocusArea {
    label: "AI/ML",
    project_categories: &["Machine Learning", "AI/NLP", "Deep Learning"],
    skill_categories: &["Machine Learning", "Deep Learning & AI"],
    role_terms: &["machine learning", "nlp", "data scien", "forecast"],
    cite_publications: true,
    follow_ups: &[
        "Publications & research",
        "Data engineering & AWS",
        "Top projects",
        "Certifications",
    ],
};

pub const DATA_ENGINEERING: FocusArea = FocusArea {
    label: "data engineering",
    project_categories: &["Data Engineering"],
    skill_categories: &["Data Engineering", "Cloud & DevOps", "Databases"],
    role_terms: &["data engineer", "etl", "aws", "pipeline", "data lake"],
    cite_publications: false,
    follow_ups: &[
        "Machine learning expertise",
        "Certifications",
        "Work experience",
        "Top projects",
    ],
};

pub const WEB_DEVELOPMENT: FocusArea = FocusArea {
    label: "web development",
    project_categories: &["Web Development"],
    skill_categories: &["Web Development"],
    role_terms: &["web", "full-stack", "react", "front end", "frontend"],
    cite_publications: false,
    follow_ups: &[
        "Top projects",
        "Technical skills",
        "Machine learning expertise",
        "Download resume",
    ],
};

fn role_is_relevant(exp: &Experience, terms: &[&str]) -> bool {
    let haystack = format!(
        "{} {} {} {} {}",
        exp.role,
        exp.description,
        exp.skills.join(" "),
        exp.technologies.join(" "),
        exp.achievements.join(" ")
    )
    .to_lowercase();
    terms.iter().any(|t| haystack.contains(t))
}

pub fn focus_area(ds: &ContentDataset, area: &FocusArea) -> Reply {
    let projects: Vec<&Project> = ds
        .projects
        .iter()
        .filter(|p| matches_any(&p.category, area.project_categories))
        .collect();
    let mut bullets = Vec::new();
    if projects.is_empty() {
        bullets.push(format!("• No {} projects are listed yet", area.label));
    } else {
        let titles: Vec<&str> = projects.iter().take(3).map(|p| p.title.as_str()).collect();
        bullets.push(format!(
            "• {} {} including {}",
            projects.len(),
            if projects.len() == 1 { "project" } else { "projects" },
            titles.join(", ")
        ));
    }

    let roles: Vec<String> = ds
        .experience
        .iter()
        .filter(|e| role_is_relevant(e, area.role_terms))
        .map(|e| format!("{} at {}", e.role, e.company))
        .collect();
    if !roles.is_empty() {
        bullets.push(format!("• Hands-on roles: {}", roles.join("; ")));
    }

    if area.cite_publications && !ds.publications.is_empty() {
        let publishers: Vec<&str> = ds.publications.iter().map(|p| p.publisher.as_str()).collect();
        bullets.push(format!(
            "• {} ({})",
            plural(ds.publications.len(), "research publication", "research publications"),
            publishers.join(", ")
        ));
    }

    let technologies: Vec<&str> = ds
        .skills
        .iter()
        .filter(|c| matches_any(&c.category, area.skill_categories))
        .flat_map(|c| c.skills.iter().map(String::as_str))
        .take(8)
        .collect();

    let mut text = format!(
        "{} has strong {} expertise:\n\n{}",
        ds.first_name(),
        area.label,
        bullets.join("\n")
    );
    if !technologies.is_empty() {
        text.push_str(&format!("\n\nKey technologies: {}", technologies.join(", ")));
    }
    text.push_str(&format!(
        "\n\nExplore the Projects and Experience pages for the full {} portfolio!",
        area.label
    ));
    Reply::new(text, area.follow_ups.iter().copied())
}

pub fn location(ds: &ContentDataset) -> Reply {
    let text = format!(
        "{} is based in {}.\n\n{}\n\nHead to the Contact page to start a conversation!",
        ds.first_name(),
        ds.about.location,
        ds.about.availability
    );
    Reply::new(
        text,
        phrases![
            contact_phrase(ds),
            "Download resume",
            why_hire_phrase(ds),
            "Current role",
        ],
    )
}

pub fn personal(ds: &ContentDataset) -> Reply {
    let text = if ds.about.fun_facts.is_empty() {
        format!("A little about {}:\n\n{}", ds.first_name(), ds.about.bio)
    } else {
        format!(
            "A few things about {} beyond the resume:\n\n{}",
            ds.first_name(),
            lines(ds.about.fun_facts.iter().map(|f| format!("• {}", f)), "\n")
        )
    };
    Reply::new(
        text,
        phrases![
            "Volunteering",
            who_is(ds),
            "Awards & honors",
            "Testimonials",
        ],
    )
}

pub fn why_hire(ds: &ContentDataset) -> Reply {
    let mut text = format!("Why work with {}?", ds.first_name());
    if !ds.about.strengths.is_empty() {
        text.push_str("\n\n");
        text.push_str(&lines(
            ds.about.strengths.iter().map(|s| format!("✅ {}", s)),
            "\n",
        ));
    }
    text.push_str(&format!(
        "\n\nBy the numbers: {} years of experience, {} projects, {} and {}.",
        ds.about.stats.years_experience,
        ds.projects.len(),
        plural(ds.publications.len(), "publication", "publications"),
        plural(ds.certifications.len(), "certification", "certifications")
    ));
    if let Some(t) = ds.testimonials.first() {
        text.push_str(&format!("\n\n\"{}\" — {}, {}", t.text, t.name, t.role));
    }
    Reply::new(
        text,
        phrases![
            "Testimonials",
            "Current role",
            "Download resume",
            contact_phrase(ds),
        ],
    )
}

pub fn farewell(ds: &ContentDataset) -> Reply {
    let text = format!(
        "You're welcome! Thanks for exploring {} portfolio. Feel free to come back anytime if you have more questions.\n\nDon't forget to check out the Contact page if you'd like to connect. Have a great day!",
        possessive(ds)
    );
    Reply::new(
        text,
        phrases![
            contact_phrase(ds),
            "Download resume",
            "Top projects",
            who_is(ds),
        ],
    )
}

// --- Entity fallbacks ---

pub fn project_detail(ds: &ContentDataset, project: &Project) -> Reply {
    let mut text = format!(
        "{}\nCategory: {} | {}\n\n{}\n\nTechnologies: {}\nSource code: {}",
        project.title,
        project.category,
        project.date_range,
        project.description,
        project.technologies.join(", "),
        project.github_url
    );
    if let Some(demo) = &project.demo_url {
        text.push_str(&format!("\nLive demo: {}", demo));
    }
    Reply::new(text, generic_follow_ups(ds))
}

pub fn skill_confirmation(ds: &ContentDataset, skill: SkillRef<'_>) -> Reply {
    let mut text = format!(
        "Yes! {} works with {}, listed under {}.",
        ds.first_name(),
        skill.name,
        skill.category
    );
    let used_in: Vec<String> = ds
        .projects
        .iter()
        .filter(|p| p.uses(skill.name))
        .take(3)
        .map(|p| format!("• {} ({})", p.title, p.category))
        .collect();
    if !used_in.is_empty() {
        text.push_str(&format!(
            "\n\nProjects using {}:\n{}",
            skill.name,
            used_in.join("\n")
        ));
    }
    text.push_str("\n\nCheck the Skills page for the full breakdown!");
    Reply::new(text, generic_follow_ups(ds))
}
