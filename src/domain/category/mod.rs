pub mod repository;
pub mod value_objects;

pub use repository::CategoryRepository;
pub use value_objects::CategoryId;
