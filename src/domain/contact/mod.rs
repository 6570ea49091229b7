pub mod model;
pub mod repository;

pub use model::Contact;
pub use repository::ContactRepository;
