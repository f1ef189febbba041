pub mod about;
pub mod achievements;
pub mod certifications;
pub mod contacts;
pub mod custom_categories;
pub mod educations;
pub mod experience_descriptions;
pub mod experiences;
pub mod project_features;
pub mod project_technologies;
pub mod projects;
pub mod soft_skills;
pub mod technical_skills;
