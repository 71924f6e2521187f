use crate::application::catalog::CatalogApplicationError;
use async_graphql::{Error, ErrorExtensions};

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、GraphQLエラー（message + extensions.code）への
/// マッピングを提供する。いずれもリクエスト単位のエラーとして呼び出し元に返る。
#[derive(Debug)]
pub struct ApiError(CatalogApplicationError);

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError(err)
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        match &self.0 {
            // 入力不正 - 最初に検出したフィールドを返す
            CatalogApplicationError::Validation(e) => {
                let field = e.field();
                Error::new(e.to_string()).extend_with(|_, ext| {
                    ext.set("code", "VALIDATION_ERROR");
                    ext.set("field", field);
                })
            }

            // ビジネスルール違反
            err @ CatalogApplicationError::Duplicate { .. } => Error::new(err.to_string())
                .extend_with(|_, ext| ext.set("code", "DUPLICATE_ERROR")),

            // システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            CatalogApplicationError::CatalogStoreError(e) => {
                tracing::error!("Book catalog error: {}", e);
                Error::new("An unexpected error occurred")
                    .extend_with(|_, ext| ext.set("code", "INTERNAL_ERROR"))
            }
        }
    }
}
