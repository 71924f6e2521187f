use std::fmt;

/// 書籍登録時のバリデーションエラー
///
/// 最初に検出した不正フィールドのみを表す（複数エラーの集約は行わない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// タイトルが空
    EmptyTitle,
    /// 著者が空
    EmptyAuthor,
    /// ページ数が0以下
    NonPositivePages(i32),
}

impl BookValidationError {
    /// 不正だった入力フィールド名（GraphQLの入力名）
    pub fn field(&self) -> &'static str {
        match self {
            BookValidationError::EmptyTitle => "title",
            BookValidationError::EmptyAuthor => "author",
            BookValidationError::NonPositivePages(_) => "pages",
        }
    }
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookValidationError::EmptyTitle => write!(f, "title must not be empty"),
            BookValidationError::EmptyAuthor => write!(f, "author must not be empty"),
            BookValidationError::NonPositivePages(pages) => {
                write!(f, "pages must be a positive integer (got {})", pages)
            }
        }
    }
}

impl std::error::Error for BookValidationError {}
