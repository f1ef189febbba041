use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, PortfolioOverview,
};
use crate::modules::portfolio::application::SectionCatalog;
use crate::modules::portfolio::domain::{
    About, Achievements, Certifications, Contact, Educations, Experiences, Projects, Section,
    SkillsSection,
};

pub struct GetPortfolioService {
    sections: SectionCatalog,
}

impl GetPortfolioService {
    pub fn new(sections: SectionCatalog) -> Self {
        Self { sections }
    }
}

#[async_trait]
impl GetPortfolioUseCase for GetPortfolioService {
    async fn execute(&self) -> PortfolioOverview {
        let s = &self.sections;
        let (about, contact, education, experience, skills, projects, certifications, achievements) =
            futures::join!(
                s.about.get.execute(),
                s.contact.get.execute(),
                s.education.get.execute(),
                s.experience.get.execute(),
                s.skills.get.execute(),
                s.projects.get.execute(),
                s.certifications.get.execute(),
                s.achievements.get.execute(),
            );

        let sources = BTreeMap::from([
            (About::KEY, about.source),
            (Contact::KEY, contact.source),
            (Educations::KEY, education.source),
            (Experiences::KEY, experience.source),
            (SkillsSection::KEY, skills.source),
            (Projects::KEY, projects.source),
            (Certifications::KEY, certifications.source),
            (Achievements::KEY, achievements.source),
        ]);

        PortfolioOverview {
            about: about.content,
            contact: contact.content,
            education: education.content,
            experience: experience.content,
            skills: skills.content,
            projects: projects.content,
            certifications: certifications.content,
            achievements: achievements.content,
            sources,
        }
    }
}
