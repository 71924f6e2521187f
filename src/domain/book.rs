use super::{AddBook, BookId, BookStatus, BookValidationError, Genre, PageCount};

/// Book集約 - カタログに登録された1冊の書籍
///
/// すべてのフィールドが必須。登録後は変更されない（追記専用カタログ）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub pages: PageCount,
    pub genre: Genre,
    pub status: BookStatus,
}

impl Book {
    /// タイトルと著者が完全一致するか（大文字小文字を区別、トリムなし）
    pub fn has_title_and_author(&self, title: &str, author: &str) -> bool {
        self.title == title && self.author == author
    }

    /// 著者が完全一致するか
    pub fn is_written_by(&self, author: &str) -> bool {
        self.author == author
    }
}

/// 純粋関数：書籍を登録する
///
/// ビジネスルール：
/// - タイトルが空でないこと
/// - 著者が空でないこと
/// - ページ数が1以上であること
///
/// 検証はこの順に行い、最初に失敗したものを返す。
/// 重複チェックはカタログの状態に依存するためアプリケーション層で行う。
///
/// 副作用なし（IDの採番を除く）。新しいBookを返す。
pub fn register_book(cmd: AddBook) -> Result<Book, BookValidationError> {
    if cmd.title.is_empty() {
        return Err(BookValidationError::EmptyTitle);
    }
    if cmd.author.is_empty() {
        return Err(BookValidationError::EmptyAuthor);
    }
    let pages = PageCount::try_from(cmd.pages)?;

    Ok(Book {
        id: BookId::new(),
        title: cmd.title,
        author: cmd.author,
        pages,
        genre: cmd.genre,
        status: cmd.status,
    })
}

/// 起動時にカタログへ投入される初期データ
///
/// 重複チェックの対象外（登録操作を経由しないため）。
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: BookId::from_string("1"),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            pages: PageCount(328),
            genre: Genre::Fiction,
            status: BookStatus::Available,
        },
        Book {
            id: BookId::from_string("2"),
            title: "Atomic Habits".to_string(),
            author: "James Clear".to_string(),
            pages: PageCount(320),
            genre: Genre::SelfHelp,
            status: BookStatus::CheckedOut,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_command() -> AddBook {
        AddBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            pages: 412,
            genre: Genre::SciFi,
            status: BookStatus::Available,
        }
    }

    #[test]
    fn test_register_book_copies_fields_and_generates_id() {
        let book = register_book(valid_command()).unwrap();

        assert!(!book.id.value().is_empty());
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.pages.value(), 412);
        assert_eq!(book.genre, Genre::SciFi);
        assert_eq!(book.status, BookStatus::Available);
    }

    #[test]
    fn test_register_book_generates_distinct_ids() {
        let first = register_book(valid_command()).unwrap();
        let second = register_book(valid_command()).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_register_book_rejects_empty_title() {
        let cmd = AddBook {
            title: String::new(),
            ..valid_command()
        };
        assert_eq!(register_book(cmd), Err(BookValidationError::EmptyTitle));
    }

    #[test]
    fn test_register_book_rejects_empty_author() {
        let cmd = AddBook {
            author: String::new(),
            ..valid_command()
        };
        assert_eq!(register_book(cmd), Err(BookValidationError::EmptyAuthor));
    }

    #[test]
    fn test_register_book_rejects_zero_pages() {
        let cmd = AddBook {
            pages: 0,
            ..valid_command()
        };
        assert_eq!(
            register_book(cmd),
            Err(BookValidationError::NonPositivePages(0))
        );
    }

    #[test]
    fn test_registered_books_always_have_positive_pages() {
        for pages in [i32::MIN, -1, 0, 1, 2, i32::MAX] {
            let cmd = AddBook {
                pages,
                ..valid_command()
            };
            match register_book(cmd) {
                Ok(book) => assert!(book.pages.value() > 0),
                Err(e) => {
                    assert!(pages <= 0);
                    assert_eq!(e, BookValidationError::NonPositivePages(pages));
                }
            }
        }
    }

    #[test]
    fn test_register_book_reports_first_failing_field() {
        // タイトル・著者・ページ数すべて不正な場合はタイトルのエラーのみ
        let cmd = AddBook {
            title: String::new(),
            author: String::new(),
            pages: -1,
            ..valid_command()
        };
        let err = register_book(cmd).unwrap_err();
        assert_eq!(err, BookValidationError::EmptyTitle);
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn test_register_book_keeps_whitespace_title() {
        // 空文字のみが不正。空白は正規化せずそのまま受け付ける
        let cmd = AddBook {
            title: " ".to_string(),
            ..valid_command()
        };
        assert_eq!(register_book(cmd).unwrap().title, " ");
    }

    #[test]
    fn test_seed_books() {
        let books = seed_books();
        assert_eq!(books.len(), 2);

        assert_eq!(books[0].id.value(), "1");
        assert_eq!(books[0].title, "1984");
        assert_eq!(books[0].author, "George Orwell");
        assert_eq!(books[0].pages.value(), 328);
        assert_eq!(books[0].genre, Genre::Fiction);
        assert_eq!(books[0].status, BookStatus::Available);

        assert_eq!(books[1].id.value(), "2");
        assert_eq!(books[1].title, "Atomic Habits");
        assert_eq!(books[1].author, "James Clear");
        assert_eq!(books[1].pages.value(), 320);
        assert_eq!(books[1].genre, Genre::SelfHelp);
        assert_eq!(books[1].status, BookStatus::CheckedOut);
    }

    #[test]
    fn test_has_title_and_author_is_exact_match() {
        let book = &seed_books()[0];
        assert!(book.has_title_and_author("1984", "George Orwell"));
        assert!(!book.has_title_and_author("1984", "george orwell"));
        assert!(!book.has_title_and_author("1984 ", "George Orwell"));
        assert!(book.is_written_by("George Orwell"));
        assert!(!book.is_written_by("George Orwell "));
    }
}
