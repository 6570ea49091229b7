pub mod model;
pub mod repository;

pub use model::Skill;
pub use repository::SkillRepository;
