//! User–skill association

pub mod model;
pub mod repository;

pub use model::UserSkill;
pub use repository::UserSkillRepository;
