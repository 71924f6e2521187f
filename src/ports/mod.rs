pub mod book_catalog;

pub use book_catalog::*;
