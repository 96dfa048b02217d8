use std::collections::BTreeSet;
use std::fmt;

/// 默认允许访问的存储桶
pub const DEFAULT_ALLOWED_BUCKET: &str = "perfitt-ai-image-dev";

/// 允许签发预签名 URL 的存储桶集合。
///
/// 进程启动时构建一次，之后只读。成员判断为精确的字符串相等，
/// 不做前缀、通配符或大小写折叠。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketAllowList {
    names: BTreeSet<String>,
}

impl BucketAllowList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// 解析逗号分隔的存储桶列表，去掉首尾空白并忽略空项。
    ///
    /// # 示例
    ///
    /// ```
    /// use presign_server::utils::allow_list::BucketAllowList;
    ///
    /// let list = BucketAllowList::from_csv(" a-bucket, ,b-bucket ");
    /// assert!(list.is_allowed("a-bucket"));
    /// assert!(list.is_allowed("b-bucket"));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn from_csv(value: &str) -> Self {
        Self::new(
            value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    /// 检查存储桶是否在允许列表中。
    pub fn is_allowed(&self, bucket: &str) -> bool {
        self.names.contains(bucket)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for BucketAllowList {
    fn default() -> Self {
        Self::new([DEFAULT_ALLOWED_BUCKET])
    }
}

impl fmt::Display for BucketAllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        f.write_str(&names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_only_default_bucket() {
        let list = BucketAllowList::default();
        assert!(list.is_allowed(DEFAULT_ALLOWED_BUCKET));
        assert!(!list.is_allowed("random-bucket"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_exact_match_only() {
        let list = BucketAllowList::default();

        // 大小写不同
        assert!(!list.is_allowed("Perfitt-AI-Image-Dev"));
        // 前缀
        assert!(!list.is_allowed("perfitt-ai-image"));
        // 包含允许的名称
        assert!(!list.is_allowed("perfitt-ai-image-dev-backup"));
        assert!(!list.is_allowed("x-perfitt-ai-image-dev"));
        // 空白
        assert!(!list.is_allowed(" perfitt-ai-image-dev"));
        assert!(!list.is_allowed(""));
    }

    #[test]
    fn test_from_csv() {
        assert!(BucketAllowList::from_csv("").is_empty());
        assert!(BucketAllowList::from_csv(" , ,").is_empty());

        let list = BucketAllowList::from_csv("one,two, three ,two");
        assert_eq!(list.len(), 3);
        assert!(list.is_allowed("three"));
        assert_eq!(list.to_string(), "one,three,two");
    }
}
