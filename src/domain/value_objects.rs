use std::fmt;
use uuid::Uuid;

use super::BookValidationError;

/// 書籍ID - カタログ内で書籍を一意に識別する
///
/// 初期データは "1", "2" のような固定IDを持ち、
/// 新規登録された書籍にはUUID v4の文字列を採番する。
/// 呼び出し側から指定されることはない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ジャンル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Fiction,
    SelfHelp,
    SciFi,
    Fantasy,
}

/// 貸出可否ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookStatus {
    /// 貸出可能
    Available,
    /// 貸出中
    CheckedOut,
}

/// ページ数
///
/// 不変条件：1以上。
/// 型システムでこの制約を強制し、0や負数のページ数を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount(pub(super) i32);

impl PageCount {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for PageCount {
    type Error = BookValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(BookValidationError::NonPositivePages(value));
        }
        Ok(Self(value))
    }
}
