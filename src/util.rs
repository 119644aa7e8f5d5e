use sha2::{Digest, Sha256};

/// 计算字符串的 SHA-256 摘要，返回小写十六进制
///
/// 用于上传文件名脱敏和凭据摘要。
pub fn encode_digest(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_hex() {
        let d = encode_digest("blog-service");
        assert_eq!(d.len(), 64);
        assert_eq!(d, encode_digest("blog-service"));
        assert_ne!(d, encode_digest("blog_service"));
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
