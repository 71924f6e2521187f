use crate::domain::{Book, BookId, book::seed_books};
use crate::ports::book_catalog::{AppendOutcome, BookCatalog as BookCatalogTrait, Result};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// ロックがポイズンされた（保持中のスレッドがパニックした）
#[derive(Debug, thiserror::Error)]
#[error("book catalog lock poisoned")]
pub struct CatalogLockPoisoned;

/// BookCatalogのインメモリ実装
///
/// プロセスがコレクションを単独で所有する。
/// 読み取りは共有ロック、重複確認と追加は排他ロック1回で行う。
pub struct BookCatalog {
    books: RwLock<Vec<Book>>,
}

impl BookCatalog {
    /// 初期データ（2冊）を投入したカタログを作成
    pub fn new() -> Self {
        Self::with_books(seed_books())
    }

    /// 任意の書籍で初期化したカタログを作成
    ///
    /// 初期データは重複チェックを経由しない。
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    fn read(&self) -> std::result::Result<RwLockReadGuard<'_, Vec<Book>>, CatalogLockPoisoned> {
        self.books.read().map_err(|_| CatalogLockPoisoned)
    }

    fn write(&self) -> std::result::Result<RwLockWriteGuard<'_, Vec<Book>>, CatalogLockPoisoned> {
        self.books.write().map_err(|_| CatalogLockPoisoned)
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn list_all(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    /// 線形探索。IDは一意なので最初の一致を返す
    async fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>> {
        Ok(self.read()?.iter().find(|b| &b.id == book_id).cloned())
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>> {
        Ok(self
            .read()?
            .iter()
            .filter(|b| b.is_written_by(author))
            .cloned()
            .collect())
    }

    async fn append_if_unique(&self, book: Book) -> Result<AppendOutcome> {
        let mut books = self.write()?;

        if books
            .iter()
            .any(|b| b.has_title_and_author(&book.title, &book.author))
        {
            return Ok(AppendOutcome::Duplicate);
        }

        books.push(book);
        Ok(AppendOutcome::Appended)
    }
}
