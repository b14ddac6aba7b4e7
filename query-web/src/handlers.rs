//! Handler模块

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use common::errors::AppError;
use common::models::QueryListResponse;
use crate::state::AppState;

/// 渲染查询提交表单页面
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "提交表单页面", body = String, content_type = "text/html"),
        (status = 500, description = "页面渲染失败")
    )
)]
pub async fn new_query_page(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    state.views.render("newQuery.html").await
}

/// 渲染历史记录页面（静态外壳，数据由前端另行拉取）
#[utoipa::path(
    get,
    path = "/oldQueries.html",
    tag = "pages",
    responses(
        (status = 200, description = "历史记录页面", body = String, content_type = "text/html"),
        (status = 500, description = "页面渲染失败")
    )
)]
pub async fn old_queries_page(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    state.views.render("oldQueries.html").await
}

/// 接收查询表单提交
///
/// 原站点的表单解析、入库与邮件通知逻辑从未启用过，此端点保持其可观测
/// 行为：应答 200、空响应体、不读取请求体、不产生任何副作用。字段结构
/// 未知，不做猜测。
#[utoipa::path(
    post,
    path = "/query",
    tag = "query",
    responses(
        (status = 200, description = "提交已确认（不持久化）")
    )
)]
pub async fn submit_query() -> StatusCode {
    StatusCode::OK
}

/// 返回全部已保存的查询记录及总数
///
/// 先统计总数，再读取全部记录，两次读取之间不构成事务；并发写入时
/// `count` 与数组长度可能不一致，调用方需容忍。任一读取失败则整体
/// 以 500 应答，不返回部分数据。
#[utoipa::path(
    get,
    path = "/oldQueries",
    tag = "query",
    responses(
        (status = 200, description = "查询记录列表", body = QueryListResponse),
        (status = 500, description = "读取失败", body = common::errors::ErrorBody)
    )
)]
pub async fn old_queries(
    State(state): State<AppState>,
) -> Result<Json<QueryListResponse>, AppError> {
    let count = state.store.count().await?;
    let queries = state.store.find_all().await?;
    Ok(Json(QueryListResponse { queries, count }))
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "query-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
