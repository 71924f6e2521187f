use super::{BookStatus, Genre};

/// コマンド：書籍をカタログに登録する
///
/// IDは含まない（サービス側で採番する）。
/// 文字列・ページ数はまだ検証されていない生の値。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBook {
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub genre: Genre,
    pub status: BookStatus,
}
