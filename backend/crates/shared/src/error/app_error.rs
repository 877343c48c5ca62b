//! Application Error
//!
//! [`AppError`] is the error of code paths that have no crate-local error
//! enum: startup, configuration and loading translation documents.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// 汎用エラー
///
/// 分類・メッセージに加えて、運用者が取るべき対処（`action`）と
/// 元のエラー（`source`）を任意で保持します。
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Translation document not found")
///     .with_action("Check TRANSLATIONS_DIR");
/// assert_eq!(err.to_string(), "[Not Found] Translation document not found (Check TRANSLATIONS_DIR)");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// 対処方法を付ける
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを付ける
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        match &self.action {
            Some(action) => write!(f, " ({})", action),
            None => Ok(()),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

/// `Option<T>` を `AppResult<T>` に変換する
pub trait OptionExt<T> {
    fn ok_or_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T> {
        self.ok_or_else(|| AppError::new(kind, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_action() {
        let err = AppError::new(ErrorKind::InternalServerError, "Embedded document missing");
        assert_eq!(err.to_string(), "[Internal Server Error] Embedded document missing");

        let err = err.with_action("Rebuild the binary");
        assert_eq!(err.action(), Some("Rebuild the binary"));
        assert!(err.to_string().ends_with("(Rebuild the binary)"));
    }

    #[test]
    fn test_source_is_exposed() {
        let io_err = std::io::Error::other("disk");
        let err = AppError::new(ErrorKind::InternalServerError, "Read failed").with_source(io_err);
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk".to_string()));
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        let err = missing.ok_or_app_err(ErrorKind::NotFound, "Missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Missing");

        assert_eq!(Some(7).ok_or_app_err(ErrorKind::NotFound, "Missing").unwrap(), 7);
    }
}
