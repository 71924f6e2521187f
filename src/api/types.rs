//! GraphQL schema types and conversions from/to the domain model.
use async_graphql::{Enum, ID, InputObject, SimpleObject};

use crate::domain::{self, AddBook};

/// The genre of a book.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum Genre {
    Fiction,
    SelfHelp,
    SciFi,
    Fantasy,
}

impl From<domain::Genre> for Genre {
    fn from(genre: domain::Genre) -> Self {
        match genre {
            domain::Genre::Fiction => Genre::Fiction,
            domain::Genre::SelfHelp => Genre::SelfHelp,
            domain::Genre::SciFi => Genre::SciFi,
            domain::Genre::Fantasy => Genre::Fantasy,
        }
    }
}

impl From<Genre> for domain::Genre {
    fn from(genre: Genre) -> Self {
        match genre {
            Genre::Fiction => domain::Genre::Fiction,
            Genre::SelfHelp => domain::Genre::SelfHelp,
            Genre::SciFi => domain::Genre::SciFi,
            Genre::Fantasy => domain::Genre::Fantasy,
        }
    }
}

/// Whether a book can currently be borrowed.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum BookStatus {
    Available,
    CheckedOut,
}

impl From<domain::BookStatus> for BookStatus {
    fn from(status: domain::BookStatus) -> Self {
        match status {
            domain::BookStatus::Available => BookStatus::Available,
            domain::BookStatus::CheckedOut => BookStatus::CheckedOut,
        }
    }
}

impl From<BookStatus> for domain::BookStatus {
    fn from(status: BookStatus) -> Self {
        match status {
            BookStatus::Available => domain::BookStatus::Available,
            BookStatus::CheckedOut => domain::BookStatus::CheckedOut,
        }
    }
}

/// A book in the catalog.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Book")]
pub struct BookResponse {
    /// Generated by the service, never supplied by the caller.
    pub id: ID,
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub genre: Genre,
    pub status: BookStatus,
}

impl From<domain::Book> for BookResponse {
    fn from(book: domain::Book) -> Self {
        Self {
            id: ID(book.id.value().to_string()),
            title: book.title,
            author: book.author,
            pages: book.pages.value(),
            genre: book.genre.into(),
            status: book.status.into(),
        }
    }
}

/// Input for `addBook`. Every field is required.
#[derive(InputObject, Clone, Debug)]
pub struct NewBookInput {
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub genre: Genre,
    pub status: BookStatus,
}

impl NewBookInput {
    pub fn to_command(self) -> AddBook {
        AddBook {
            title: self.title,
            author: self.author,
            pages: self.pages,
            genre: self.genre.into(),
            status: self.status.into(),
        }
    }
}
