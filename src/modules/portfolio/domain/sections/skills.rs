use std::collections::HashMap;

use serde::Deserialize;
use uuid::Uuid;

use crate::modules::portfolio::domain::dedup::{dedup_by_name, name_key};
use crate::modules::portfolio::domain::defaults;
use crate::modules::portfolio::domain::entities::{
    CustomCategory, SkillCategory, SkillsSection, SoftSkill, TechnicalSkill,
};
use crate::modules::portfolio::domain::ids::{ref_key, IdResolver};
use crate::modules::portfolio::domain::normalize::{
    default_level, deserialize_level, deserialize_text, text, ValidationError,
};
use crate::modules::portfolio::domain::section::{Normalized, Section, SectionKey};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillsDraft {
    pub technical: Vec<TechnicalSkillDraft>,
    pub soft: Vec<SoftSkillDraft>,
    pub custom_categories: Vec<CustomCategoryDraft>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechnicalSkillDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default = "default_level", deserialize_with = "deserialize_level")]
    pub level: u8,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub custom_category_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SoftSkillDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default = "default_level", deserialize_with = "deserialize_level")]
    pub level: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomCategoryDraft {
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub name: String,
}

impl From<SkillsSection> for SkillsDraft {
    fn from(section: SkillsSection) -> Self {
        SkillsDraft {
            technical: section
                .technical
                .into_iter()
                .map(|s| TechnicalSkillDraft {
                    id: Some(s.id.to_string()),
                    name: s.name,
                    level: s.level,
                    category: Some(s.category.as_str().to_string()),
                    custom_category_id: s.custom_category_id.map(|id| id.to_string()),
                })
                .collect(),
            soft: section
                .soft
                .into_iter()
                .map(|s| SoftSkillDraft {
                    id: Some(s.id.to_string()),
                    name: s.name,
                    level: s.level,
                })
                .collect(),
            custom_categories: section
                .custom_categories
                .into_iter()
                .map(|c| CustomCategoryDraft {
                    id: Some(c.id.to_string()),
                    name: c.name,
                })
                .collect(),
        }
    }
}

/// Where a technical skill ends up after category resolution.
#[derive(Debug, Clone, Copy)]
enum CategoryTarget {
    Predefined(SkillCategory),
    Custom(Uuid),
}

impl CategoryTarget {
    fn split(self) -> (SkillCategory, Option<Uuid>) {
        match self {
            CategoryTarget::Predefined(c) => (c, None),
            CategoryTarget::Custom(id) => (SkillCategory::Custom, Some(id)),
        }
    }
}

#[derive(Default)]
struct CategoryIndex {
    ids: IdResolver,
    /// Raw ids of categories folded into a predefined one
    redirects: HashMap<String, SkillCategory>,
    by_name: HashMap<String, Uuid>,
}

impl CategoryIndex {
    fn resolve(&self, label: Option<&str>, custom_category_id: Option<&str>) -> CategoryTarget {
        let label = label.map(str::trim).filter(|l| !l.is_empty());

        if let Some(category) = label
            .and_then(SkillCategory::parse)
            .filter(|c| *c != SkillCategory::Custom)
        {
            return CategoryTarget::Predefined(category);
        }

        if let Some(raw) = custom_category_id.map(str::trim).filter(|r| !r.is_empty()) {
            if let Some(category) = self.redirects.get(&ref_key(raw)) {
                return CategoryTarget::Predefined(*category);
            }
            if let Some(id) = self.ids.lookup(raw) {
                return CategoryTarget::Custom(id);
            }
        }

        if let Some(id) = label.and_then(|l| self.by_name.get(&name_key(l))) {
            return CategoryTarget::Custom(*id);
        }

        CategoryTarget::Predefined(SkillCategory::Other)
    }
}

/// Infallible core shared by saves and reads.
fn reconcile(draft: SkillsDraft) -> Normalized<SkillsSection> {
    let mut dropped = Vec::new();
    let mut index = CategoryIndex::default();
    let mut custom_categories = Vec::new();

    for category in draft.custom_categories {
        let name = text(&category.name);
        if name.is_empty() {
            continue;
        }

        if let Some(predefined) = SkillCategory::predefined_named(&name) {
            if let Some(raw) = category.id.as_deref().map(str::trim) {
                index.redirects.insert(ref_key(raw), predefined);
            }
            dropped.push(name);
            continue;
        }

        let key = name_key(&name);
        if let Some(existing) = index.by_name.get(&key).copied() {
            index.ids.alias(category.id.as_deref(), existing);
            dropped.push(name);
            continue;
        }

        let id = index.ids.claim(category.id.as_deref());
        index.by_name.insert(key, id);
        custom_categories.push(CustomCategory { id, name });
    }

    let mut skill_ids = IdResolver::new();

    let technical: Vec<TechnicalSkill> = draft
        .technical
        .into_iter()
        .map(|s| {
            let (category, custom_category_id) = index
                .resolve(s.category.as_deref(), s.custom_category_id.as_deref())
                .split();
            TechnicalSkill {
                id: skill_ids.claim(s.id.as_deref()),
                name: text(&s.name),
                level: s.level.min(100),
                category,
                custom_category_id,
            }
        })
        .collect();
    let technical = dedup_by_name(technical, |s| s.name.as_str());
    dropped.extend(technical.dropped);

    let soft: Vec<SoftSkill> = draft
        .soft
        .into_iter()
        .map(|s| SoftSkill {
            id: skill_ids.claim(s.id.as_deref()),
            name: text(&s.name),
            level: s.level.min(100),
        })
        .collect();
    let soft = dedup_by_name(soft, |s| s.name.as_str());
    dropped.extend(soft.dropped);

    Normalized {
        content: SkillsSection {
            technical: technical.kept,
            soft: soft.kept,
            custom_categories,
        },
        dropped_duplicates: dropped,
    }
}

impl SkillsSection {
    pub fn has_technical_skill(&self, name: &str) -> bool {
        let key = name_key(name);
        self.technical.iter().any(|s| name_key(&s.name) == key)
    }

    /// True for existing custom categories and predefined labels alike.
    pub fn has_category_named(&self, name: &str) -> bool {
        let key = name_key(name);
        SkillCategory::predefined_named(name).is_some()
            || self.custom_categories.iter().any(|c| name_key(&c.name) == key)
    }

    /// Drops the category and moves its skills to `other`. Returns `false`
    /// when no category has that id.
    pub fn remove_custom_category(&mut self, id: Uuid) -> bool {
        let before = self.custom_categories.len();
        self.custom_categories.retain(|c| c.id != id);
        if self.custom_categories.len() == before {
            return false;
        }

        for skill in &mut self.technical {
            if skill.custom_category_id == Some(id) {
                skill.category = SkillCategory::Other;
                skill.custom_category_id = None;
            }
        }
        true
    }
}

impl Section for SkillsSection {
    const KEY: SectionKey = SectionKey::Skills;
    type Draft = SkillsDraft;

    fn from_draft(draft: SkillsDraft) -> Result<Normalized<Self>, ValidationError> {
        Ok(reconcile(draft))
    }

    fn normalize(self) -> Self {
        reconcile(SkillsDraft::from(self)).content
    }

    fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty() && self.custom_categories.is_empty()
    }

    fn defaults() -> Self {
        defaults::skills()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: serde_json::Value) -> SkillsDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_duplicate_technical_skills_are_removed_case_insensitively() {
        let result = SkillsSection::from_draft(draft(json!({
            "technical": [
                { "name": "Rust", "level": 90, "category": "backend" },
                { "name": " rust", "level": 10, "category": "backend" },
                { "name": "Go", "level": "70", "category": "Backend" }
            ]
        })))
        .unwrap();

        let names: Vec<_> = result.content.technical.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Go"]);
        assert_eq!(result.content.technical[0].level, 90);
        assert_eq!(result.content.technical[1].level, 70);
        assert_eq!(result.dropped_duplicates, vec!["rust"]);
    }

    #[test]
    fn test_placeholder_category_reference_follows_minted_id() {
        let result = SkillsSection::from_draft(draft(json!({
            "custom_categories": [{ "id": "draft-cat-1", "name": "Cloud" }],
            "technical": [{
                "id": "draft-skill-1",
                "name": "AWS",
                "category": "custom",
                "custom_category_id": "draft-cat-1"
            }]
        })))
        .unwrap()
        .content;

        let cloud = &result.custom_categories[0];
        let aws = &result.technical[0];
        assert_eq!(aws.category, SkillCategory::Custom);
        assert_eq!(aws.custom_category_id, Some(cloud.id));
        assert_ne!(cloud.id.to_string(), "draft-cat-1");
    }

    #[test]
    fn test_duplicate_category_skills_move_to_survivor() {
        let result = SkillsSection::from_draft(draft(json!({
            "custom_categories": [
                { "id": "c1", "name": "Cloud" },
                { "id": "c2", "name": "CLOUD" }
            ],
            "technical": [
                { "name": "GCP", "category": "custom", "custom_category_id": "c2" }
            ]
        })))
        .unwrap();

        let section = result.content;
        assert_eq!(section.custom_categories.len(), 1);
        assert_eq!(
            section.technical[0].custom_category_id,
            Some(section.custom_categories[0].id)
        );
        assert_eq!(result.dropped_duplicates, vec!["CLOUD"]);
    }

    #[test]
    fn test_category_shadowing_predefined_is_folded_into_it() {
        let result = SkillsSection::from_draft(draft(json!({
            "custom_categories": [{ "id": "c1", "name": "DevOps" }],
            "technical": [
                { "name": "Terraform", "category": "custom", "custom_category_id": "c1" }
            ]
        })))
        .unwrap();

        assert!(result.content.custom_categories.is_empty());
        assert_eq!(result.content.technical[0].category, SkillCategory::Devops);
        assert_eq!(result.content.technical[0].custom_category_id, None);
        assert_eq!(result.dropped_duplicates, vec!["DevOps"]);
    }

    #[test]
    fn test_uppercase_category_reference_resolves() {
        let cloud_id = Uuid::new_v4();
        let section = SkillsSection::from_draft(draft(json!({
            "custom_categories": [{ "id": cloud_id.to_string(), "name": "Cloud" }],
            "technical": [{
                "name": "AWS",
                "category": "custom",
                "custom_category_id": cloud_id.to_string().to_uppercase()
            }]
        })))
        .unwrap()
        .content;

        assert_eq!(section.technical[0].category, SkillCategory::Custom);
        assert_eq!(section.technical[0].custom_category_id, Some(cloud_id));
    }

    #[test]
    fn test_unknown_or_dangling_categories_fall_back_to_other() {
        let section = SkillsSection::from_draft(draft(json!({
            "technical": [
                { "name": "A", "category": "custom", "custom_category_id": "missing" },
                { "name": "B", "category": "Quantum" },
                { "name": "C" }
            ]
        })))
        .unwrap()
        .content;

        for skill in &section.technical {
            assert_eq!(skill.category, SkillCategory::Other);
            assert_eq!(skill.custom_category_id, None);
        }
    }

    #[test]
    fn test_category_label_matching_custom_name_resolves_to_it() {
        let section = SkillsSection::from_draft(draft(json!({
            "custom_categories": [{ "name": "Mobile" }],
            "technical": [{ "name": "Swift", "category": "mobile" }]
        })))
        .unwrap()
        .content;

        assert_eq!(section.technical[0].category, SkillCategory::Custom);
        assert_eq!(
            section.technical[0].custom_category_id,
            Some(section.custom_categories[0].id)
        );
    }

    #[test]
    fn test_levels_are_clamped_and_defaulted() {
        let section = SkillsSection::from_draft(draft(json!({
            "soft": [
                { "name": "Focus", "level": 400 },
                { "name": "Patience" },
                { "name": "Humor", "level": "lots" }
            ]
        })))
        .unwrap()
        .content;

        let levels: Vec<u8> = section.soft.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![100, 50, 50]);
    }

    #[test]
    fn test_normalize_removes_stored_duplicates_and_dangling_refs() {
        let mut section = SkillsSection::defaults();
        let mut copy = section.technical[0].clone();
        copy.id = Uuid::new_v4();
        copy.name = copy.name.to_uppercase();
        section.technical.push(copy);
        section.technical[1].category = SkillCategory::Custom;
        section.technical[1].custom_category_id = Some(Uuid::new_v4());

        let normalized = section.clone().normalize();

        assert_eq!(normalized.technical.len(), section.technical.len() - 1);
        assert_eq!(normalized.technical[1].category, SkillCategory::Other);
        assert_eq!(normalized.technical[0].id, section.technical[0].id);
    }

    #[test]
    fn test_normalize_keeps_clean_content_unchanged() {
        let section = SkillsSection::defaults();
        assert_eq!(section.clone().normalize(), section);
    }

    #[test]
    fn test_remove_custom_category_repoints_skills() {
        let mut section = SkillsSection::defaults();
        let cloud = section.custom_categories[0].id;

        assert!(section.remove_custom_category(cloud));
        assert!(section.custom_categories.is_empty());
        assert!(section
            .technical
            .iter()
            .all(|s| s.custom_category_id.is_none()));
        assert!(!section.remove_custom_category(cloud));
    }

    #[test]
    fn test_has_category_named_covers_predefined_labels() {
        let section = SkillsSection::defaults();
        assert!(section.has_category_named("backend"));
        assert!(section.has_category_named("cloud"));
        assert!(!section.has_category_named("Mobile"));
    }
}
