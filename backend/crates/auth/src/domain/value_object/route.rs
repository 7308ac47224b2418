//! Route Matching Value Objects
//!
//! Two separate rules decide whether the access gate looks at a request:
//! - [`GateScope`]: segment-aware prefixes that bypass the gate entirely
//!   (portal API, built frontend assets, health check)
//! - [`PublicRoutes`]: pages inside the gate's scope that are reachable
//!   without a token. Matched by exact string equality only.

/// Sign-in page every gate failure redirects to
pub const SIGN_IN_PATH: &str = "/auth/signin";

/// Pages reachable without a token
pub const DEFAULT_PUBLIC_ROUTES: [&str; 5] = [
    "/auth/signup",
    "/auth/signup/verify",
    "/auth/signup/documents",
    SIGN_IN_PATH,
    "/auth/verification-pending",
];

/// Path prefixes the gate never inspects. The public pages load their
/// scripts and images from `/_next/static` and `/_next/image`.
pub const DEFAULT_BYPASS_PREFIXES: [&str; 6] = [
    "/api",
    "/_next/static",
    "/_next/image",
    "/static",
    "/healthz",
    "/favicon.ico",
];

/// Exact-match allowlist of public paths.
///
/// `/auth/signin/` and `/auth/signin?x` are *not* members of a set holding
/// `/auth/signin`: any new public page must be added verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicRoutes(Vec<String>);

impl PublicRoutes {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|public| public == path)
    }
}

impl Default for PublicRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_ROUTES)
    }
}

/// Paths the gate applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateScope {
    bypass_prefixes: Vec<String>,
}

impl GateScope {
    pub fn new<I, S>(bypass_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bypass_prefixes: bypass_prefixes
                .into_iter()
                .map(|p| p.into().trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// `false` when `path` equals a bypass prefix or lies below it
    /// (`/api` covers `/api` and `/api/auth/signin`, not `/apiary`).
    pub fn applies_to(&self, path: &str) -> bool {
        !self.bypass_prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

impl Default for GateScope {
    fn default() -> Self {
        Self::new(DEFAULT_BYPASS_PREFIXES)
    }
}
