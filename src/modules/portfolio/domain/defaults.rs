//! Seed content served when neither the database nor the fallback store has
//! anything for a section. Ids are fixed so repeated reads are stable.

use uuid::Uuid;

use super::entities::{
    About, Achievement, Achievements, Certification, Certifications, Contact, CustomCategory,
    EducationItem, Educations, ExperienceItem, Experiences, ProjectItem, Projects, SkillCategory,
    SkillsSection, SoftSkill, TechnicalSkill,
};

const fn seed_id(section: u128, n: u128) -> Uuid {
    Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0000 | (section << 16) | n)
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn about() -> About {
    About {
        name: "Alex Morgan".to_string(),
        title: "Full-Stack Software Engineer".to_string(),
        bio: "I build reliable web backends and friendly interfaces. I enjoy turning \
              fuzzy requirements into small, well-tested services."
            .to_string(),
        location: Some("Lisbon, Portugal".to_string()),
        avatar_url: None,
        resume_url: None,
    }
}

pub fn contact() -> Contact {
    Contact {
        email: "hello@example.com".to_string(),
        phone: None,
        location: Some("Lisbon, Portugal".to_string()),
        github_url: Some("https://github.com/example".to_string()),
        linkedin_url: Some("https://www.linkedin.com/in/example".to_string()),
        website_url: None,
    }
}

pub fn education() -> Educations {
    Educations(vec![EducationItem {
        id: seed_id(3, 1),
        institution: "University of Lisbon".to_string(),
        degree: "B.Sc.".to_string(),
        field_of_study: Some("Computer Science".to_string()),
        start_date: "2014-09".to_string(),
        end_date: Some("2017-07".to_string()),
        description: Some("Graduated with a thesis on distributed caching.".to_string()),
    }])
}

pub fn experience() -> Experiences {
    Experiences(vec![
        ExperienceItem {
            id: seed_id(4, 1),
            company: "Acme Cloud".to_string(),
            role: "Senior Backend Engineer".to_string(),
            location: Some("Remote".to_string()),
            start_date: "2021-03".to_string(),
            end_date: None,
            descriptions: owned(&[
                "Own the billing and invoicing services.",
                "Cut p99 latency of the public API by 40%.",
            ]),
        },
        ExperienceItem {
            id: seed_id(4, 2),
            company: "Startly".to_string(),
            role: "Software Engineer".to_string(),
            location: Some("Porto, Portugal".to_string()),
            start_date: "2017-09".to_string(),
            end_date: Some("2021-02".to_string()),
            descriptions: owned(&[
                "Built the customer dashboard from scratch.",
                "Introduced CI pipelines and integration tests.",
            ]),
        },
    ])
}

pub fn skills() -> SkillsSection {
    let cloud = seed_id(5, 100);

    let technical = [
        ("Rust", 85, SkillCategory::Backend, None),
        ("TypeScript", 80, SkillCategory::Frontend, None),
        ("React", 75, SkillCategory::Frontend, None),
        ("PostgreSQL", 80, SkillCategory::Database, None),
        ("Docker", 70, SkillCategory::Devops, None),
        ("Git", 85, SkillCategory::Tools, None),
        ("AWS", 60, SkillCategory::Custom, Some(cloud)),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, level, category, custom))| TechnicalSkill {
        id: seed_id(5, i as u128 + 1),
        name: name.to_string(),
        level,
        category,
        custom_category_id: custom,
    })
    .collect();

    let soft = [("Communication", 85), ("Mentoring", 75), ("Problem Solving", 90)]
        .into_iter()
        .enumerate()
        .map(|(i, (name, level))| SoftSkill {
            id: seed_id(5, i as u128 + 50),
            name: name.to_string(),
            level,
        })
        .collect();

    SkillsSection {
        technical,
        soft,
        custom_categories: vec![CustomCategory {
            id: cloud,
            name: "Cloud".to_string(),
        }],
    }
}

pub fn projects() -> Projects {
    Projects(vec![
        ProjectItem {
            id: seed_id(6, 1),
            title: "Portfolio CMS".to_string(),
            description: "The service behind this site: content sections with a local \
                          fallback when the database is away."
                .to_string(),
            image_url: None,
            github_url: Some("https://github.com/example/portfolio".to_string()),
            live_url: None,
            technologies: owned(&["Rust", "Actix Web", "PostgreSQL"]),
            features: owned(&["Admin editing", "Offline fallback", "Seed content"]),
        },
        ProjectItem {
            id: seed_id(6, 2),
            title: "Budget Buddy".to_string(),
            description: "Envelope budgeting app with bank CSV import.".to_string(),
            image_url: None,
            github_url: Some("https://github.com/example/budget-buddy".to_string()),
            live_url: Some("https://budget.example.com".to_string()),
            technologies: owned(&["TypeScript", "React", "SQLite"]),
            features: owned(&["CSV import", "Monthly reports"]),
        },
    ])
}

pub fn certifications() -> Certifications {
    Certifications(vec![Certification {
        id: seed_id(7, 1),
        name: "AWS Certified Developer - Associate".to_string(),
        issuer: "Amazon Web Services".to_string(),
        issue_date: "2022-05".to_string(),
        credential_url: None,
    }])
}

pub fn achievements() -> Achievements {
    Achievements(vec![Achievement {
        id: seed_id(8, 1),
        title: "Hackathon winner".to_string(),
        description: "First place at the city open-data hackathon.".to_string(),
        date: Some("2019".to_string()),
    }])
}
