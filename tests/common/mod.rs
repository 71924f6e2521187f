#![allow(dead_code)]

use book_catalog::adapters::memory::BookCatalog as InMemoryBookCatalog;
use book_catalog::application::catalog::ServiceDependencies;
use book_catalog::domain::{AddBook, BookStatus, Genre};
use std::sync::Arc;

/// 初期データ（2冊）入りのインメモリカタログで依存関係を作成
///
/// テストごとに新しいストアを作るため、テスト間で状態は共有されない。
pub fn seeded_deps() -> ServiceDependencies {
    ServiceDependencies {
        book_catalog: Arc::new(InMemoryBookCatalog::new()),
    }
}

/// 有効な登録コマンド
pub fn dune() -> AddBook {
    AddBook {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        pages: 412,
        genre: Genre::SciFi,
        status: BookStatus::Available,
    }
}
