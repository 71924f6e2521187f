use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};
use std::sync::Arc;

use super::schema::CatalogSchema;

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub schema: CatalogSchema,
}

/// POST /graphql - GraphQLリクエストを実行
///
/// addBookの検証エラー・重複エラーはHTTP 200のままレスポンスの`errors`に入る。
pub async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// GET /graphql - GraphiQL IDE
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
