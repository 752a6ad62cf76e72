// src/domain/user/mod.rs
pub mod value_objects;

pub use value_objects::UserId;
