pub mod entities;
pub mod matcher;
pub mod policies;
pub mod ports;
pub mod prompt;
pub mod response;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
