use reqwest::Method;
use std::fmt::Display;

const PARAM_PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: Method,
    /// If set the request is refused locally when no token is stored instead
    /// of being sent without credentials
    pub requires_token: bool,
}

/// A [`PathSpec`] with its path parameter (if any) filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    pub path: String,
    pub method: Method,
    pub requires_token: bool,
}

impl PathSpec {
    const fn new(path: &'static str, method: Method) -> Self {
        Self {
            path,
            method,
            requires_token: false,
        }
    }

    pub const fn get(path: &'static str) -> Self {
        Self::new(path, Method::GET)
    }

    pub const fn post(path: &'static str) -> Self {
        Self::new(path, Method::POST)
    }

    pub const fn put(path: &'static str) -> Self {
        Self::new(path, Method::PUT)
    }

    pub const fn delete(path: &'static str) -> Self {
        Self::new(path, Method::DELETE)
    }

    /// A GET that is refused locally when no token is stored
    pub const fn get_requiring_token(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
            requires_token: true,
        }
    }

    pub fn param_count(&self) -> usize {
        self.path.matches(PARAM_PLACEHOLDER).count()
    }

    /// Arguments of GET and DELETE requests go in the query string, all others
    /// are sent as a JSON body
    pub fn uses_query_args(&self) -> bool {
        self.method == Method::GET || self.method == Method::DELETE
    }

    /// Substitutes `param` for the path parameter
    pub fn with_param<P: Display>(&self, param: P) -> RequestPath {
        debug_assert_eq!(
            self.param_count(),
            1,
            "with_param used on a path without exactly one parameter: {}",
            self.path
        );
        RequestPath {
            path: self
                .path
                .replacen(PARAM_PLACEHOLDER, &param.to_string(), 1),
            method: self.method.clone(),
            requires_token: self.requires_token,
        }
    }
}

impl RequestPath {
    pub fn uses_query_args(&self) -> bool {
        self.method == Method::GET || self.method == Method::DELETE
    }
}

impl From<PathSpec> for RequestPath {
    fn from(value: PathSpec) -> Self {
        debug_assert_eq!(
            value.param_count(),
            0,
            "path parameter not provided for: {}",
            value.path
        );
        Self {
            path: value.path.to_string(),
            method: value.method,
            requires_token: value.requires_token,
        }
    }
}
