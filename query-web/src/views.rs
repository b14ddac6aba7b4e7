//! 页面渲染模块
//!
//! 按模板名从视图目录读取 HTML 文件并原样返回，不注入任何数据。

use std::path::{Path, PathBuf};

use axum::response::Html;

use common::errors::{AppError, AppResult};

/// 视图渲染器
#[derive(Clone)]
pub struct ViewRenderer {
    dir: PathBuf,
}

impl ViewRenderer {
    /// 创建指向给定视图目录的渲染器
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// 渲染指定名称的视图
    pub async fn render(&self, name: &str) -> AppResult<Html<String>> {
        let path = self.dir.join(name);
        let html = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => AppError::ViewNotFound(name.to_string()),
                _ => AppError::ViewRead(format!("{}: {}", name, e)),
            })?;
        Ok(Html(html))
    }
}
