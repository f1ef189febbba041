pub mod profile;
pub mod projects;
pub mod recognition;
pub mod skills;
pub mod timeline;

pub use profile::{AboutDraft, ContactDraft};
pub use projects::ProjectDraft;
pub use recognition::{AchievementDraft, CertificationDraft};
pub use skills::{CustomCategoryDraft, SkillsDraft, SoftSkillDraft, TechnicalSkillDraft};
pub use timeline::{EducationDraft, ExperienceDraft};
