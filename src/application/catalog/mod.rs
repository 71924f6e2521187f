mod catalog_service;
mod errors;

pub use catalog_service::{
    ServiceDependencies, add_book, get_book_by_id, list_books, list_books_by_author,
};
pub use errors::{CatalogApplicationError, Result};
