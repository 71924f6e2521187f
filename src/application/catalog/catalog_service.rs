use crate::domain::{self, AddBook, Book, BookId};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{CatalogApplicationError, Result};

/// サービスの依存関係
///
/// 振る舞い（メソッド）は持たず、各操作関数に依存関係を渡す。
/// カタログの状態はここに注入されたストアが所有する。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_catalog: Arc<dyn BookCatalog>,
}

/// すべての書籍を挿入順で取得する
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    let books = deps
        .book_catalog
        .list_all()
        .await
        .map_err(CatalogApplicationError::CatalogStoreError)?;

    tracing::debug!(count = books.len(), "Listed books");
    Ok(books)
}

/// IDで書籍を取得する
///
/// 見つからない場合は`Ok(None)`（エラーではない）。
pub async fn get_book_by_id(deps: &ServiceDependencies, book_id: &BookId) -> Result<Option<Book>> {
    let book = deps
        .book_catalog
        .find_by_id(book_id)
        .await
        .map_err(CatalogApplicationError::CatalogStoreError)?;

    tracing::debug!(book_id = %book_id, found = book.is_some(), "Looked up book by id");
    Ok(book)
}

/// 著者（完全一致）で書籍を取得する
///
/// 該当なしの場合は空のリスト。
pub async fn list_books_by_author(deps: &ServiceDependencies, author: &str) -> Result<Vec<Book>> {
    let books = deps
        .book_catalog
        .find_by_author(author)
        .await
        .map_err(CatalogApplicationError::CatalogStoreError)?;

    tracing::debug!(author, count = books.len(), "Listed books by author");
    Ok(books)
}

/// 書籍を登録する
///
/// ビジネスルール：
/// - タイトル・著者が空でなく、ページ数が1以上であること
/// - 同じタイトル・著者の書籍が存在しないこと
///
/// 検証は上記の順に行い、最初に失敗したエラーを返す（集約しない）。
/// 失敗時はカタログを変更しない。
///
/// # 戻り値
/// 採番されたIDを含む登録済みの書籍
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<Book> {
    // 1. 入力値の検証（ドメイン層の純粋関数）
    let book = domain::book::register_book(cmd).map_err(|e| {
        tracing::warn!(field = e.field(), "Rejected book: {}", e);
        CatalogApplicationError::Validation(e)
    })?;

    // 2. 重複確認と追加（ストア側で原子的に実行）
    let outcome = deps
        .book_catalog
        .append_if_unique(book.clone())
        .await
        .map_err(CatalogApplicationError::CatalogStoreError)?;

    match outcome {
        AppendOutcome::Appended => {
            tracing::info!(book_id = %book.id, title = %book.title, author = %book.author, "Book added");
            Ok(book)
        }
        AppendOutcome::Duplicate => {
            tracing::warn!(title = %book.title, author = %book.author, "Rejected duplicate book");
            Err(CatalogApplicationError::Duplicate {
                title: book.title,
                author: book.author,
            })
        }
    }
}
