//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("次元定義が不正".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Config error: 次元定義が不正");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Config("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("テスト"));
    }
}
