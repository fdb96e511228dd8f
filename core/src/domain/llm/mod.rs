pub mod ports;
pub mod value_objects;

pub use ports::*;
pub use value_objects::*;
