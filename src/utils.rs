//! 工具函数模块
//!
//! 此模块包含了请求校验和签名所需的工具：
//! - 共享密钥比较
//! - 存储桶允许列表
//! - S3 预签名 URL 生成

pub mod allow_list;
pub mod auth;
pub mod s3;
