use serde::Deserialize;

use crate::modules::portfolio::domain::defaults;
use crate::modules::portfolio::domain::entities::{
    EducationItem, Educations, ExperienceItem, Experiences,
};
use crate::modules::portfolio::domain::ids::IdResolver;
use crate::modules::portfolio::domain::normalize::{
    self, deserialize_lines, deserialize_text, optional_text, text, text_lines, ValidationError,
};
use crate::modules::portfolio::domain::section::{Normalized, Section, SectionKey};

fn required_date(field: String, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    normalize::date(&field, value)
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EducationDraft {
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub institution: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub degree: String,
    pub field_of_study: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

impl Section for Educations {
    const KEY: SectionKey = SectionKey::Education;
    type Draft = Vec<EducationDraft>;

    fn from_draft(drafts: Vec<EducationDraft>) -> Result<Normalized<Self>, ValidationError> {
        let mut ids = IdResolver::new();
        let mut items = Vec::with_capacity(drafts.len());

        for (i, draft) in drafts.into_iter().enumerate() {
            let institution = text(&draft.institution);
            if institution.is_empty() {
                continue;
            }

            let start_date = required_date(format!("education[{i}].start_date"), &draft.start_date)?;
            let end_date =
                normalize::end_date(&format!("education[{i}].end_date"), draft.end_date)?;
            normalize::ensure_chronological(
                &format!("education[{i}].end_date"),
                &start_date,
                end_date.as_deref(),
            )?;

            items.push(EducationItem {
                id: ids.claim(draft.id.as_deref()),
                institution,
                degree: text(&draft.degree),
                field_of_study: optional_text(draft.field_of_study),
                start_date,
                end_date,
                description: optional_text(draft.description),
            });
        }

        Ok(Normalized::clean(Educations(items)))
    }

    fn normalize(self) -> Self {
        Educations(
            self.0
                .into_iter()
                .filter(|e| !e.institution.trim().is_empty())
                .map(|e| EducationItem {
                    id: e.id,
                    institution: text(&e.institution),
                    degree: text(&e.degree),
                    field_of_study: optional_text(e.field_of_study),
                    start_date: text(&e.start_date),
                    end_date: optional_text(e.end_date),
                    description: optional_text(e.description),
                })
                .collect(),
        )
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn defaults() -> Self {
        defaults::education()
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceDraft {
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub company: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub role: String,
    pub location: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "deserialize_lines")]
    pub descriptions: Vec<String>,
}

impl Section for Experiences {
    const KEY: SectionKey = SectionKey::Experience;
    type Draft = Vec<ExperienceDraft>;

    fn from_draft(drafts: Vec<ExperienceDraft>) -> Result<Normalized<Self>, ValidationError> {
        let mut ids = IdResolver::new();
        let mut items = Vec::with_capacity(drafts.len());

        for (i, draft) in drafts.into_iter().enumerate() {
            let company = text(&draft.company);
            if company.is_empty() {
                continue;
            }

            let start_date =
                required_date(format!("experience[{i}].start_date"), &draft.start_date)?;
            let end_date =
                normalize::end_date(&format!("experience[{i}].end_date"), draft.end_date)?;
            normalize::ensure_chronological(
                &format!("experience[{i}].end_date"),
                &start_date,
                end_date.as_deref(),
            )?;

            items.push(ExperienceItem {
                id: ids.claim(draft.id.as_deref()),
                company,
                role: text(&draft.role),
                location: optional_text(draft.location),
                start_date,
                end_date,
                descriptions: text_lines(draft.descriptions),
            });
        }

        Ok(Normalized::clean(Experiences(items)))
    }

    fn normalize(self) -> Self {
        Experiences(
            self.0
                .into_iter()
                .filter(|e| !e.company.trim().is_empty())
                .map(|e| ExperienceItem {
                    id: e.id,
                    company: text(&e.company),
                    role: text(&e.role),
                    location: optional_text(e.location),
                    start_date: text(&e.start_date),
                    end_date: optional_text(e.end_date),
                    descriptions: text_lines(e.descriptions),
                })
                .collect(),
        )
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn defaults() -> Self {
        defaults::experience()
    }
}
