//! Errors - decor-core のエラー型
//!
//! 評価（`value()` / `description()`）は全域関数なので、エラーになるのは
//! 名前からチェーンを組み立てる時と、設定ファイルを読む時だけです。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecorError {
    #[error("unknown base '{0}'")]
    UnknownBase(String),

    #[error("unknown ornament '{0}'")]
    UnknownOrnament(String),

    #[error("'{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("missing ornaments: {0:?}. These were expected but not registered.")]
    MissingOrnaments(Vec<String>),

    #[error("invalid price '{0}': expected a decimal with at most two fraction digits")]
    InvalidPrice(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecorError>;
