use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Singletons
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct About {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Timeline
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EducationItem {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: String,
    /// `None` while still enrolled
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceItem {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: String,
    /// `None` for the current position
    pub end_date: Option<String>,
    pub descriptions: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Tools,
    Other,
    Custom,
}

impl SkillCategory {
    pub const PREDEFINED: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
            SkillCategory::Custom => "custom",
        }
    }

    /// Case-insensitive lookup. Accepts the display spellings the admin UI
    /// uses ("DevOps", "Front-end").
    pub fn parse(label: &str) -> Option<SkillCategory> {
        let key: String = label
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "frontend" => Some(SkillCategory::Frontend),
            "backend" => Some(SkillCategory::Backend),
            "database" | "databases" => Some(SkillCategory::Database),
            "devops" => Some(SkillCategory::Devops),
            "tools" | "tool" => Some(SkillCategory::Tools),
            "other" | "others" => Some(SkillCategory::Other),
            "custom" => Some(SkillCategory::Custom),
            _ => None,
        }
    }

    /// A user-defined category may not shadow one of these names.
    pub fn predefined_named(name: &str) -> Option<SkillCategory> {
        Self::parse(name).filter(|c| *c != SkillCategory::Custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TechnicalSkill {
    pub id: Uuid,
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
    /// Set exactly when `category` is `custom`
    pub custom_category_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SoftSkill {
    pub id: Uuid,
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomCategory {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct SkillsSection {
    pub technical: Vec<TechnicalSkill>,
    pub soft: Vec<SoftSkill>,
    pub custom_categories: Vec<CustomCategory>,
}

//
// ──────────────────────────────────────────────────────────
// Projects & recognition
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// List sections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Educations(pub Vec<EducationItem>);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Experiences(pub Vec<ExperienceItem>);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Projects(pub Vec<ProjectItem>);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Certifications(pub Vec<Certification>);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Achievements(pub Vec<Achievement>);
