// Domain layer - value objects and entities
// No dependencies on other layers

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
