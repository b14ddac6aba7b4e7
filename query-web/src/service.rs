//! 查询记录存取模块

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use common::errors::{AppError, AppResult};

/// 查询记录所在的集合名
pub const QUERY_COLLECTION: &str = "query";

/// 查询记录存储 Trait
#[async_trait]
pub trait QueryStore: Send + Sync {
    /// 统计集合中的记录总数
    async fn count(&self) -> AppResult<u64>;

    /// 读取集合中的全部记录（无过滤、无分页）
    async fn find_all(&self) -> AppResult<Vec<Document>>;

    /// 插入一条查询记录
    async fn insert(&self, record: Document) -> AppResult<()>;
}

/// 基于 MongoDB 的查询记录存储
pub struct MongoQueryStore {
    collection: Collection<Document>,
}

impl MongoQueryStore {
    /// 创建新的存储实例
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(QUERY_COLLECTION),
        }
    }
}

#[async_trait]
impl QueryStore for MongoQueryStore {
    async fn count(&self) -> AppResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<Document>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn insert(&self, record: Document) -> AppResult<()> {
        self.collection
            .insert_one(record)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
