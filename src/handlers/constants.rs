/// 共享密钥查询参数
pub const API_KEY_PARAM: &str = "apiKey";

/// 存储桶查询参数
pub const BUCKET_PARAM: &str = "bucket";

/// 对象键查询参数
pub const KEY_PARAM: &str = "key";
