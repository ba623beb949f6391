use portfolio_chat::{Branch, ContentDataset, Resolver};
use std::sync::Arc;

fn bundled() -> Resolver {
    let ds = ContentDataset::bundled().expect("bundled dataset");
    Resolver::standard(Arc::new(ds.clone())).expect("resolver")
}

fn minimal() -> Resolver {
    let ds = ContentDataset::from_json(include_str!("fixtures/minimal.json")).expect("fixture");
    Resolver::standard(Arc::new(ds)).expect("resolver")
}

#[test]
fn test_empty_input_gets_fixed_reply() {
    let r = bundled();
    for input in ["", "   ", "\n\t"] {
        let resolution = r.resolve_traced(input);
        assert_eq!(resolution.branch, Branch::Empty);
        assert!(resolution.reply.text.contains("didn't type anything"));
        assert_eq!(resolution.reply.follow_ups.len(), 4);
    }
}

#[test]
fn test_greeting_routes_to_greeting_intent() {
    let r = bundled();
    let resolution = r.resolve_traced("hello");
    match resolution.branch {
        Branch::Intent { name, score } => {
            assert_eq!(name, "greeting");
            assert!(score >= r.settings().confidence_threshold);
        }
        other => panic!("unexpected branch {:?}", other),
    }
    assert_eq!(
        resolution.reply.follow_ups,
        vec!["Who is Pradeep?", "Current role", "Top projects", "Technical skills"]
    );
}

#[test]
fn test_project_title_prefix_is_recognised() {
    let r = bundled();
    let resolution = r.resolve_traced("the semiconductor wafer one?");
    let project = &r.dataset().projects[0];
    assert_eq!(
        resolution.branch,
        Branch::ProjectMention {
            project_id: project.id.clone()
        }
    );
    assert!(resolution.reply.text.contains(&project.category));
    for tech in &project.technologies {
        assert!(resolution.reply.text.contains(tech.as_str()));
    }
}

#[test]
fn test_skill_mention_names_category() {
    let r = bundled();
    let resolution = r.resolve_traced("Do you know Python?");
    assert_eq!(
        resolution.branch,
        Branch::SkillMention {
            skill: "Python".to_string()
        }
    );
    assert!(resolution.reply.text.contains("Programming Languages"));
}

#[test]
fn test_gibberish_falls_through_to_help() {
    let r = bundled();
    let resolution = r.resolve_traced("asdf qwerty");
    assert_eq!(resolution.branch, Branch::Help);
    assert!(resolution.reply.text.contains("Resume"));
}

#[test]
fn test_suggested_phrases_route_to_their_topics() {
    let r = bundled();
    let cases = [
        ("Who is Pradeep?", "about"),
        ("Current role", "experience"),
        ("Top projects", "projects"),
        ("Technical skills", "skills"),
        ("Skills & certifications", "skills"),
        ("Education background", "education"),
        ("Publications & research", "publications"),
        ("What does Pradeep do at UPS?", "employer:ups"),
        ("Data engineering & AWS", "data_engineering"),
        ("Machine learning expertise", "ai_ml"),
        ("Web development projects", "web_development"),
        ("Where is Pradeep based?", "location"),
        ("Why hire Pradeep?", "why_hire"),
        ("Fun facts", "personal"),
        ("Download resume", "resume"),
        ("thanks", "farewell"),
    ];
    for (input, expected) in cases {
        match r.resolve_traced(input).branch {
            Branch::Intent { name, .. } => assert_eq!(name, expected, "input {:?}", input),
            other => panic!("{:?} resolved to {:?}", input, other),
        }
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let r = bundled();
    for input in ["hello", "Do you know Python?", "random words", "Top projects"] {
        assert_eq!(r.resolve_traced(input), r.resolve_traced(input));
    }
}

#[test]
fn test_every_handler_copes_with_minimal_dataset() {
    let r = minimal();
    for intent in r.catalog().iter() {
        let reply = intent.respond(r.dataset());
        assert!(!reply.text.is_empty(), "{} replied with nothing", intent.name());
        assert!(reply.follow_ups.len() <= 4);
    }
    assert!(r.welcome_message().contains("Ada"));
}

#[test]
fn test_minimal_dataset_fallbacks() {
    let r = minimal();
    assert_eq!(
        r.resolve_traced("Bernoulli Number Program?").branch,
        Branch::ProjectMention {
            project_id: "bernoulli".to_string()
        }
    );
    assert_eq!(
        r.resolve_traced("does she use R").branch,
        Branch::SkillMention {
            skill: "R".to_string()
        }
    );
}

#[test]
fn test_every_follow_up_triggers_an_intent() {
    let r = bundled();
    let who_is = format!("Who is {}?", r.dataset().first_name());
    for intent in r.catalog().iter() {
        for follow_up in intent.respond(r.dataset()).follow_ups {
            match r.resolve_traced(&follow_up).branch {
                Branch::Intent { name, .. } => assert!(
                    name != "about" || follow_up == who_is,
                    "{:?} from {} fell through to about",
                    follow_up,
                    intent.name()
                ),
                other => panic!("{:?} from {} resolved to {:?}", follow_up, intent.name(), other),
            }
        }
    }
}

#[test]
fn test_naming_the_subject_keeps_entity_fallbacks() {
    let r = bundled();
    assert_eq!(
        r.resolve_traced("Does Pradeep know Python?").branch,
        Branch::SkillMention {
            skill: "Python".to_string()
        }
    );
    assert_eq!(
        r.resolve_traced("Does Pradeep use Kafka?").branch,
        Branch::SkillMention {
            skill: "Kafka".to_string()
        }
    );
    let project = &r.dataset().projects[0];
    assert_eq!(
        r.resolve_traced(&format!("Did Pradeep make the {}?", project.title)).branch,
        Branch::ProjectMention {
            project_id: project.id.clone()
        }
    );
}

#[test]
fn test_short_company_names_inside_words_do_not_match() {
    let r = bundled();
    for input in [
        "Does he have any startups?",
        "Which professional groups is he part of?",
        "Any meetups?",
        "Which frameworks does he use?",
    ] {
        if let Branch::Intent { name, .. } = r.resolve_traced(input).branch {
            assert!(name != "employer:ups" && name != "experience", "{:?} -> {}", input, name);
        }
    }
}
