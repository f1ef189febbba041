use serde::Deserialize;

use crate::modules::portfolio::domain::defaults;
use crate::modules::portfolio::domain::entities::{
    Achievement, Achievements, Certification, Certifications,
};
use crate::modules::portfolio::domain::ids::IdResolver;
use crate::modules::portfolio::domain::normalize::{
    self, deserialize_text, optional_text, text, ValidationError,
};
use crate::modules::portfolio::domain::section::{Normalized, Section, SectionKey};

//
// ──────────────────────────────────────────────────────────
// Certifications
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CertificationDraft {
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub issuer: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub issue_date: String,
    pub credential_url: Option<String>,
}

impl Section for Certifications {
    const KEY: SectionKey = SectionKey::Certifications;
    type Draft = Vec<CertificationDraft>;

    fn from_draft(drafts: Vec<CertificationDraft>) -> Result<Normalized<Self>, ValidationError> {
        let mut ids = IdResolver::new();
        let mut items = Vec::with_capacity(drafts.len());

        for (i, draft) in drafts.into_iter().enumerate() {
            let name = text(&draft.name);
            if name.is_empty() {
                continue;
            }

            let field = format!("certifications[{i}].issue_date");
            if draft.issue_date.trim().is_empty() {
                return Err(ValidationError::new(field, "is required"));
            }
            let issue_date = normalize::date(&field, &draft.issue_date)?;

            items.push(Certification {
                id: ids.claim(draft.id.as_deref()),
                name,
                issuer: text(&draft.issuer),
                issue_date,
                credential_url: normalize::url(
                    &format!("certifications[{i}].credential_url"),
                    draft.credential_url,
                )?,
            });
        }

        Ok(Normalized::clean(Certifications(items)))
    }

    fn normalize(self) -> Self {
        Certifications(
            self.0
                .into_iter()
                .filter(|c| !c.name.trim().is_empty())
                .map(|c| Certification {
                    id: c.id,
                    name: text(&c.name),
                    issuer: text(&c.issuer),
                    issue_date: text(&c.issue_date),
                    credential_url: optional_text(c.credential_url),
                })
                .collect(),
        )
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn defaults() -> Self {
        defaults::certifications()
    }
}

//
// ──────────────────────────────────────────────────────────
// Achievements
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AchievementDraft {
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub description: String,
    pub date: Option<String>,
}

impl Section for Achievements {
    const KEY: SectionKey = SectionKey::Achievements;
    type Draft = Vec<AchievementDraft>;

    fn from_draft(drafts: Vec<AchievementDraft>) -> Result<Normalized<Self>, ValidationError> {
        let mut ids = IdResolver::new();
        let mut items = Vec::with_capacity(drafts.len());

        for (i, draft) in drafts.into_iter().enumerate() {
            let title = text(&draft.title);
            if title.is_empty() {
                continue;
            }

            items.push(Achievement {
                id: ids.claim(draft.id.as_deref()),
                title,
                description: text(&draft.description),
                date: normalize::optional_date(&format!("achievements[{i}].date"), draft.date)?,
            });
        }

        Ok(Normalized::clean(Achievements(items)))
    }

    fn normalize(self) -> Self {
        Achievements(
            self.0
                .into_iter()
                .filter(|a| !a.title.trim().is_empty())
                .map(|a| Achievement {
                    id: a.id,
                    title: text(&a.title),
                    description: text(&a.description),
                    date: optional_text(a.date),
                })
                .collect(),
        )
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn defaults() -> Self {
        defaults::achievements()
    }
}
