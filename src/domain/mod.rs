pub mod book;
pub mod commands;
pub mod errors;
pub mod value_objects;

pub use book::Book;
pub use commands::*;
pub use errors::*;
pub use value_objects::*;
