//! 基础设施层：数据库、存储实现与日志

pub mod database;
pub mod logger;
pub mod memory_repository;
pub mod pg_repository;
