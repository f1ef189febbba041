mod get_portfolio;
mod get_section;
mod manage_skills;
mod save_section;
mod seed_portfolio;

pub use get_portfolio::*;
pub use get_section::*;
pub use manage_skills::*;
pub use save_section::*;
pub use seed_portfolio::*;
