//! HTTP请求处理模块
//!
//! 所有路径和方法都由预签名处理器处理。

pub mod constants;
pub mod presign;

pub use presign::handle_presign;
