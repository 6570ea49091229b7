pub mod model;
pub mod repository;

pub use model::Company;
pub use repository::CompanyRepository;
