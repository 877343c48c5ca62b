//! Error Kind
//!
//! Status classification shared by every crate. [`ErrorBody`](super::body::ErrorBody)
//! takes its `statusCode` and `error` fields from here.

/// エラー分類
///
/// バリアントごとに HTTP ステータスと理由フレーズが一つずつ決まります。
/// ドメインの分類と公開ステータスが異なる場合（重複メールは Conflict だが 400 で返す等）、
/// 呼び出し側が公開用の分類を別に選びます。
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
/// assert_eq!(ErrorKind::Unauthorized.reason(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力が読めない
    BadRequest,
    /// 資格情報が一致しない
    Unauthorized,
    /// 対象が存在しない
    NotFound,
    /// 一意キーの重複
    Conflict,
    /// 上記以外の内部障害
    InternalServerError,
}

impl ErrorKind {
    /// 既定の HTTP ステータスコード
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::InternalServerError => 500,
        }
    }

    /// ステータスの理由フレーズ
    pub const fn reason(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// 5xx かどうか。詳細をクライアントに返してはいけない
    pub const fn is_server_error(self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_reason_agree() {
        let cases = [
            (ErrorKind::BadRequest, 400, "Bad Request"),
            (ErrorKind::Unauthorized, 401, "Unauthorized"),
            (ErrorKind::NotFound, 404, "Not Found"),
            (ErrorKind::Conflict, 409, "Conflict"),
            (ErrorKind::InternalServerError, 500, "Internal Server Error"),
        ];
        for (kind, status, reason) in cases {
            assert_eq!(kind.status_code(), status);
            assert_eq!(kind.reason(), reason);
            assert_eq!(kind.to_string(), reason);
        }
    }

    #[test]
    fn test_only_internal_is_server_error() {
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(!ErrorKind::Conflict.is_server_error());
        assert!(!ErrorKind::Unauthorized.is_server_error());
    }
}
