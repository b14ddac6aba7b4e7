//! 查询提交站点 Web 服务
//!
//! 提供以下功能：
//! - 渲染查询提交表单与历史记录页面
//! - 接收查询表单提交
//! - 以 JSON 返回已保存的查询记录及总数

mod handlers;
mod routes;
mod service;
mod state;
mod views;

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use common::config::AppConfig;
use common::middleware::request_id::request_id_middleware;
use service::MongoQueryStore;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

const SERVICE_NAME: &str = "query-web";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "查询提交站点 API",
        version = "0.1.0",
        description = "查询表单提交与历史记录查询服务"
    ),
    paths(
        handlers::new_query_page,
        handlers::old_queries_page,
        handlers::submit_query,
        handlers::old_queries,
        handlers::health_check,
    ),
    components(schemas(
        common::models::QueryListResponse,
        common::errors::ErrorBody,
        handlers::HealthResponse,
    )),
    tags(
        (name = "pages", description = "页面渲染端点"),
        (name = "query", description = "查询记录端点"),
        (name = "health", description = "健康检查端点")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置
    let config = AppConfig::load();

    // 连接 MongoDB（驱动惰性建连，首个请求时真正拨号）
    let client = mongodb::Client::with_uri_str(&config.mongodb_url)
        .await
        .expect("MongoDB 连接配置无效");
    let db = client.database(&config.database);
    let store = Arc::new(MongoQueryStore::new(&db));

    // 创建应用状态
    let state = AppState::new(config.clone(), store);

    // 创建路由
    let app = create_router(state);

    // 启动服务
    let addr = config.bind_addr();
    info!(service = SERVICE_NAME, address = %addr, "ready to take calls");

    let listener = TcpListener::bind(&addr).await.expect("绑定地址失败");
    axum::serve(listener, app).await.expect("服务启动失败");
}

fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
