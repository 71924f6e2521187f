//! GraphQL query/mutation roots for the book catalog.
use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, ID, Object, Result, Schema, extensions::Tracing,
};

use crate::application::catalog::{
    ServiceDependencies, add_book as execute_add_book, get_book_by_id as execute_get_book_by_id,
    list_books as execute_list_books, list_books_by_author as execute_list_books_by_author,
};
use crate::domain::BookId;

use super::{
    error::ApiError,
    types::{BookResponse, NewBookInput},
};

/// The full catalog schema type.
pub type CatalogSchema = Schema<Query, Mutation, EmptySubscription>;

/// Maximum query depth. Leaves room for the introspection query GraphiQL sends.
const MAX_QUERY_DEPTH: usize = 16;

/// Maximum query complexity (one point per selected field).
const MAX_QUERY_COMPLEXITY: usize = 256;

/// Builds the schema with the service dependencies as context data.
pub fn build_schema(service_deps: ServiceDependencies) -> CatalogSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(service_deps)
        .extension(Tracing)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

pub struct Query;

#[Object]
impl Query {
    /// All books in insertion order.
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<BookResponse>> {
        let deps = ctx.data::<ServiceDependencies>()?;
        let books = execute_list_books(deps)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    /// The book with the given id, or null.
    async fn book_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<BookResponse>> {
        let deps = ctx.data::<ServiceDependencies>()?;
        let book_id = BookId::from_string(id.0);
        let book = execute_get_book_by_id(deps, &book_id)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(book.map(BookResponse::from))
    }

    /// Books whose author exactly matches `author` (case-sensitive, untrimmed).
    async fn books_by_author(
        &self,
        ctx: &Context<'_>,
        author: String,
    ) -> Result<Vec<BookResponse>> {
        let deps = ctx.data::<ServiceDependencies>()?;
        let books = execute_list_books_by_author(deps, &author)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(books.into_iter().map(BookResponse::from).collect())
    }
}

pub struct Mutation;

#[Object]
impl Mutation {
    /// Adds a book and returns it with its generated id.
    ///
    /// Fails with `VALIDATION_ERROR` on an empty title/author or non-positive
    /// page count, and with `DUPLICATE_ERROR` when a book with the same title
    /// and author already exists.
    async fn add_book(&self, ctx: &Context<'_>, input: NewBookInput) -> Result<BookResponse> {
        let deps = ctx.data::<ServiceDependencies>()?;
        let book = execute_add_book(deps, input.to_command())
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(BookResponse::from(book))
    }
}
