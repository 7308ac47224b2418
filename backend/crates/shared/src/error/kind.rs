//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

/// Error classification shared by every portal crate.
///
/// Each variant maps to exactly one HTTP status code. Gateway-class variants
/// (`BadGateway`, `GatewayTimeout`) describe failures of the remote
/// authentication API rather than of the portal itself.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::BadGateway;
/// assert_eq!(kind.status_code(), 502);
/// assert_eq!(kind.as_str(), "Bad Gateway");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - malformed or invalid input
    BadRequest,
    /// 401 - credentials rejected
    Unauthorized,
    /// 403 - authenticated but not allowed
    Forbidden,
    /// 404 - nothing here
    NotFound,
    /// 409 - conflicts with existing state (e.g. email already registered)
    Conflict,
    /// 422 - well-formed but semantically rejected
    UnprocessableEntity,
    /// 429 - rate limited upstream
    TooManyRequests,
    /// 500 - portal bug or misconfiguration
    InternalServerError,
    /// 502 - remote API failed or answered garbage
    BadGateway,
    /// 504 - remote API did not answer in time
    GatewayTimeout,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    ///
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::GatewayTimeout.status_code(), 504);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::GatewayTimeout => 504,
        }
    }

    /// Standard reason phrase.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::GatewayTimeout => "Gateway Timeout",
        }
    }

    /// Classify an upstream HTTP status into the kind the portal answers with.
    ///
    /// Client errors from the remote API keep their meaning; anything else
    /// (5xx, unexpected 1xx/3xx) becomes `BadGateway`.
    pub const fn from_upstream_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            402..=499 => ErrorKind::BadRequest,
            504 => ErrorKind::GatewayTimeout,
            _ => ErrorKind::BadGateway,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
        assert_eq!(ErrorKind::TooManyRequests.status_code(), 429);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::BadGateway.status_code(), 502);
        assert_eq!(ErrorKind::GatewayTimeout.status_code(), 504);
    }

    #[test]
    fn test_from_upstream_status() {
        assert_eq!(ErrorKind::from_upstream_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_upstream_status(422), ErrorKind::UnprocessableEntity);
        assert_eq!(ErrorKind::from_upstream_status(418), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_upstream_status(500), ErrorKind::BadGateway);
        assert_eq!(ErrorKind::from_upstream_status(503), ErrorKind::BadGateway);
        assert_eq!(ErrorKind::from_upstream_status(504), ErrorKind::GatewayTimeout);
        assert_eq!(ErrorKind::from_upstream_status(302), ErrorKind::BadGateway);
    }
}
