use crate::domain::{Book, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 追記操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// カタログ末尾に追加された
    Appended,
    /// 同じタイトル・著者の書籍が既に存在したため追加しなかった
    Duplicate,
}

/// 書籍カタログポート
///
/// 書籍コレクションの保持方法を抽象化する。
/// コレクションは挿入順を保持する追記専用のシーケンスであり、
/// 更新・削除の操作は持たない。
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// すべての書籍を挿入順で取得する
    async fn list_all(&self) -> Result<Vec<Book>>;

    /// IDで書籍を取得する
    ///
    /// 該当なしはエラーではなく`None`。
    async fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>>;

    /// 著者が完全一致する書籍を挿入順で取得する
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>>;

    /// タイトル・著者が重複しない場合のみ書籍を末尾に追加する
    ///
    /// 重複確認と追加は1つのクリティカルセクションで行うこと。
    /// 同じタイトル・著者の同時登録が両方成功してはならない。
    async fn append_if_unique(&self, book: Book) -> Result<AppendOutcome>;
}
