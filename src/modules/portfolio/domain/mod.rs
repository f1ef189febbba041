pub mod dedup;
pub mod defaults;
pub mod entities;
pub mod ids;
pub mod normalize;
pub mod reconcile;
pub mod section;
pub mod sections;

pub use entities::{
    About, Achievement, Achievements, Certification, Certifications, Contact, CustomCategory,
    EducationItem, Educations, ExperienceItem, Experiences, ProjectItem, Projects, SkillCategory,
    SkillsSection, SoftSkill, TechnicalSkill,
};
pub use normalize::ValidationError;
pub use reconcile::{reconcile, ContentSource, SectionView};
pub use section::{Normalized, Section, SectionKey, UnknownSection};
