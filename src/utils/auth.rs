use constant_time_eq::constant_time_eq;
use std::fmt;

/// 调用方必须携带的共享密钥。
///
/// `Debug` 输出不包含密钥内容，避免被写入日志。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// 以常量时间比较候选值与密钥是否完全相同。
    ///
    /// 只会泄露长度是否一致，不会泄露公共前缀的长度。
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let key = ApiKey::new("eyJoZWxsbyI6IndvcmxkIn0K");

        assert!(key.matches("eyJoZWxsbyI6IndvcmxkIn0K"));
        assert!(!key.matches("eyJoZWxsbyI6IndvcmxkIn0"));
        assert!(!key.matches("eyJoZWxsbyI6IndvcmxkIn0K "));
        assert!(!key.matches("EYJOZWXSBYI6INDVCMXKIN0K"));
        assert!(!key.matches(""));
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
