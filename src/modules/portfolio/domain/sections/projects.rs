use serde::Deserialize;

use crate::modules::portfolio::domain::dedup::dedup_strings;
use crate::modules::portfolio::domain::defaults;
use crate::modules::portfolio::domain::entities::{ProjectItem, Projects};
use crate::modules::portfolio::domain::ids::IdResolver;
use crate::modules::portfolio::domain::normalize::{
    self, deserialize_lines, deserialize_list, deserialize_text, optional_text, text,
    ValidationError,
};
use crate::modules::portfolio::domain::section::{Normalized, Section, SectionKey};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub description: String,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(deserialize_with = "deserialize_list")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "deserialize_lines")]
    pub features: Vec<String>,
}

/// Technologies and features are unique per project. Returns the cleaned
/// lists plus every name that was removed.
fn unique_tags(
    technologies: Vec<String>,
    features: Vec<String>,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let technologies = dedup_strings(technologies);
    let features = dedup_strings(features);

    let mut dropped = technologies.dropped;
    dropped.extend(features.dropped);

    (technologies.kept, features.kept, dropped)
}

impl Section for Projects {
    const KEY: SectionKey = SectionKey::Projects;
    type Draft = Vec<ProjectDraft>;

    fn from_draft(drafts: Vec<ProjectDraft>) -> Result<Normalized<Self>, ValidationError> {
        let mut ids = IdResolver::new();
        let mut items = Vec::with_capacity(drafts.len());
        let mut dropped_duplicates = Vec::new();

        for (i, draft) in drafts.into_iter().enumerate() {
            let title = text(&draft.title);
            if title.is_empty() {
                continue;
            }

            let (technologies, features, dropped) =
                unique_tags(draft.technologies, draft.features);
            dropped_duplicates.extend(dropped);

            items.push(ProjectItem {
                id: ids.claim(draft.id.as_deref()),
                title,
                description: text(&draft.description),
                image_url: normalize::url(&format!("projects[{i}].image_url"), draft.image_url)?,
                github_url: normalize::url(&format!("projects[{i}].github_url"), draft.github_url)?,
                live_url: normalize::url(&format!("projects[{i}].live_url"), draft.live_url)?,
                technologies,
                features,
            });
        }

        Ok(Normalized {
            content: Projects(items),
            dropped_duplicates,
        })
    }

    fn normalize(self) -> Self {
        Projects(
            self.0
                .into_iter()
                .filter(|p| !p.title.trim().is_empty())
                .map(|p| {
                    let (technologies, features, _) = unique_tags(p.technologies, p.features);
                    ProjectItem {
                        id: p.id,
                        title: text(&p.title),
                        description: text(&p.description),
                        image_url: optional_text(p.image_url),
                        github_url: optional_text(p.github_url),
                        live_url: optional_text(p.live_url),
                        technologies,
                        features,
                    }
                })
                .collect(),
        )
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn defaults() -> Self {
        defaults::projects()
    }
}
