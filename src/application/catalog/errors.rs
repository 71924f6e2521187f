use crate::domain::BookValidationError;
use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// 必須フィールドが空・0以下
    #[error("Validation error: {0}")]
    Validation(BookValidationError),

    /// 同じタイトル・著者の書籍が既に存在する
    #[error("A book titled \"{title}\" by {author} already exists")]
    Duplicate { title: String, author: String },

    /// BookCatalogのエラー
    #[error("Book catalog error")]
    CatalogStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
