use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub description: String,
    pub src: Option<String>,
    pub user_id: i64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub description: String,
    pub src: Option<String>,
    pub user_id: i64,
    pub time: DateTime<Utc>,
}
