//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    /// Origin plus the context path the backend is deployed under
    pub const CLIENT_DEFAULT_BASE_URL: &str = "http://localhost:8080/ApexFlow";
    pub const CLIENT_DEFAULT_API_PREFIX: &str = "/api";
    pub const CLIENT_DEFAULT_TIMEOUT_MS: u64 = 10_000;
    pub const CLIENT_CONTENT_TYPE: &str = "application/json;charset=utf-8";
    /// Page size used when fetching every order for client side analysis
    pub const CLIENT_ANALYSIS_PAGE_SIZE: u32 = 10_000;
    pub const CLIENT_DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;
}

/// Keys used in the persistent key/value storage. Together these are the
/// entire durable state of a client
pub mod storage {
    pub const STORAGE_KEY_TOKEN: &str = "token";
    pub const STORAGE_KEY_USER_INFO: &str = "userInfo";
    pub const STORAGE_KEY_PERMISSIONS: &str = "permissions";

    pub const STORAGE_ALL_KEYS: [&str; 3] = [
        STORAGE_KEY_TOKEN,
        STORAGE_KEY_USER_INFO,
        STORAGE_KEY_PERMISSIONS,
    ];
}

/// Paths are relative to the api prefix. `{}` marks the single path parameter
/// of an endpoint (see [`path::PathSpec::with_param`])
pub mod path {
    mod path_spec;
    pub use path_spec::{PathSpec, RequestPath};

    // Auth
    pub const PATH_AUTH_LOGIN: PathSpec = PathSpec::post("/auth/login");
    pub const PATH_AUTH_LOGOUT: PathSpec = PathSpec::post("/auth/logout");
    pub const PATH_USER_PERMISSIONS: PathSpec = PathSpec::get_requiring_token("/user/permissions");
    pub const PATH_USER_PROFILE: PathSpec = PathSpec::put("/user/profile");

    // Users (admin)
    pub const PATH_ADMIN_USERS_LIST: PathSpec = PathSpec::get("/admin/users");
    pub const PATH_ADMIN_USERS_CREATE: PathSpec = PathSpec::post("/admin/users");
    pub const PATH_ADMIN_USER_UPDATE: PathSpec = PathSpec::put("/admin/users/{}");
    pub const PATH_ADMIN_USER_DELETE: PathSpec = PathSpec::delete("/admin/users/{}");
    pub const PATH_ADMIN_USER_PERMISSIONS: PathSpec =
        PathSpec::put("/admin/users/{}/permissions");
    pub const PATH_ADMIN_USER_PASSWORD: PathSpec = PathSpec::put("/admin/users/{}/password");

    // Orders
    pub const PATH_ORDERS_LIST: PathSpec = PathSpec::get("/orders/list");
    pub const PATH_ORDER_DETAIL: PathSpec = PathSpec::get("/orders/{}");
    pub const PATH_ORDERS_CREATE: PathSpec = PathSpec::post("/orders");
    pub const PATH_ORDER_DELETE: PathSpec = PathSpec::delete("/orders/{}");

    // Logistics
    pub const PATH_LOGISTICS_LIST: PathSpec = PathSpec::get("/logistics");
    pub const PATH_LOGISTICS_STATS: PathSpec = PathSpec::get("/logistics/stats");
    pub const PATH_LOGISTICS_DETAIL: PathSpec = PathSpec::get("/logistics/{}");
    pub const PATH_LOGISTICS_BY_ORDER: PathSpec = PathSpec::get("/logistics/order/{}");
    pub const PATH_LOGISTICS_SHIP: PathSpec = PathSpec::put("/logistics/{}/shipping");
    pub const PATH_LOGISTICS_STATUS: PathSpec = PathSpec::put("/logistics/{}/status");
    pub const PATH_LOGISTICS_UPDATE: PathSpec = PathSpec::put("/logistics/{}");
    pub const PATH_LOGISTICS_DELETE: PathSpec = PathSpec::delete("/logistics/{}");

    // After-sales
    pub const PATH_AFTER_SALES_LIST: PathSpec = PathSpec::get("/after-sales/list");
    pub const PATH_AFTER_SALES_DETAIL: PathSpec = PathSpec::get("/after-sales/{}");
    pub const PATH_AFTER_SALES_STATUS: PathSpec = PathSpec::put("/after-sales/{}/status");

    // Reviews
    pub const PATH_REVIEWS_LIST: PathSpec = PathSpec::get("/review");
    pub const PATH_REVIEW_DETAIL: PathSpec = PathSpec::get("/review/{}");
    pub const PATH_REVIEW_DELETE: PathSpec = PathSpec::delete("/review/{}");
    pub const PATH_REVIEW_STATS: PathSpec = PathSpec::get("/review/stats/{}");

    // Inventory
    pub const PATH_INVENTORY_PRODUCTS_LIST: PathSpec = PathSpec::get("/inventory/products/list");
    pub const PATH_INVENTORY_PRODUCT_DETAIL: PathSpec = PathSpec::get("/inventory/products/{}");
    pub const PATH_INVENTORY_PRODUCTS_CREATE: PathSpec = PathSpec::post("/inventory/products");
    pub const PATH_INVENTORY_PRODUCT_UPDATE: PathSpec = PathSpec::put("/inventory/products/{}");
    pub const PATH_INVENTORY_PRODUCT_DELETE: PathSpec =
        PathSpec::delete("/inventory/products/{}");
    pub const PATH_INVENTORY_STOCK_ADJUST: PathSpec =
        PathSpec::put("/inventory/products/{}/stock");
    pub const PATH_INVENTORY_LOW_STOCK: PathSpec = PathSpec::get("/inventory/low-stock");
    pub const PATH_INVENTORY_LOGS: PathSpec = PathSpec::get("/inventory/logs");

    // Finance
    pub const PATH_INCOME_LIST: PathSpec = PathSpec::get("/income/list");
    pub const PATH_INCOME_STATS: PathSpec = PathSpec::get("/income/statistics");
    pub const PATH_INCOME_CREATE: PathSpec = PathSpec::post("/income");
    pub const PATH_INCOME_UPDATE: PathSpec = PathSpec::put("/income/{}");
    pub const PATH_INCOME_STATUS: PathSpec = PathSpec::put("/income/{}/status");
    pub const PATH_INCOME_DELETE: PathSpec = PathSpec::delete("/income/{}");
    pub const PATH_INCOME_DETAIL: PathSpec = PathSpec::get("/income/{}");

    /// Every endpoint the client knows about, used to sanity check the table
    pub const PATH_ALL: &[PathSpec] = &[
        PATH_AUTH_LOGIN,
        PATH_AUTH_LOGOUT,
        PATH_USER_PERMISSIONS,
        PATH_USER_PROFILE,
        PATH_ADMIN_USERS_LIST,
        PATH_ADMIN_USERS_CREATE,
        PATH_ADMIN_USER_UPDATE,
        PATH_ADMIN_USER_DELETE,
        PATH_ADMIN_USER_PERMISSIONS,
        PATH_ADMIN_USER_PASSWORD,
        PATH_ORDERS_LIST,
        PATH_ORDER_DETAIL,
        PATH_ORDERS_CREATE,
        PATH_ORDER_DELETE,
        PATH_LOGISTICS_LIST,
        PATH_LOGISTICS_STATS,
        PATH_LOGISTICS_DETAIL,
        PATH_LOGISTICS_BY_ORDER,
        PATH_LOGISTICS_SHIP,
        PATH_LOGISTICS_STATUS,
        PATH_LOGISTICS_UPDATE,
        PATH_LOGISTICS_DELETE,
        PATH_AFTER_SALES_LIST,
        PATH_AFTER_SALES_DETAIL,
        PATH_AFTER_SALES_STATUS,
        PATH_REVIEWS_LIST,
        PATH_REVIEW_DETAIL,
        PATH_REVIEW_DELETE,
        PATH_REVIEW_STATS,
        PATH_INVENTORY_PRODUCTS_LIST,
        PATH_INVENTORY_PRODUCT_DETAIL,
        PATH_INVENTORY_PRODUCTS_CREATE,
        PATH_INVENTORY_PRODUCT_UPDATE,
        PATH_INVENTORY_PRODUCT_DELETE,
        PATH_INVENTORY_STOCK_ADJUST,
        PATH_INVENTORY_LOW_STOCK,
        PATH_INVENTORY_LOGS,
        PATH_INCOME_LIST,
        PATH_INCOME_STATS,
        PATH_INCOME_CREATE,
        PATH_INCOME_UPDATE,
        PATH_INCOME_STATUS,
        PATH_INCOME_DELETE,
        PATH_INCOME_DETAIL,
    ];
}

#[cfg(test)]
mod tests {
    use static_assertions::const_assert;

    use super::client::{CLIENT_ANALYSIS_PAGE_SIZE, CLIENT_DEFAULT_TIMEOUT_MS};
    use super::path::{PATH_ALL, PATH_USER_PERMISSIONS};

    const_assert!(CLIENT_DEFAULT_TIMEOUT_MS > 0);
    const_assert!(CLIENT_ANALYSIS_PAGE_SIZE >= 1_000);

    #[test]
    fn paths_are_relative_and_have_at_most_one_param() {
        for spec in PATH_ALL {
            assert!(spec.path.starts_with('/'), "{spec:?}");
            assert!(!spec.path.ends_with('/'), "{spec:?}");
            assert!(spec.param_count() <= 1, "{spec:?}");
        }
    }

    #[test]
    fn method_and_path_pairs_are_unique() {
        for (i, a) in PATH_ALL.iter().enumerate() {
            for b in &PATH_ALL[i + 1..] {
                assert!(
                    a.path != b.path || a.method != b.method,
                    "duplicate endpoint {a:?}"
                );
            }
        }
    }

    #[test]
    fn only_permissions_require_a_token() {
        let actual: Vec<_> = PATH_ALL.iter().filter(|x| x.requires_token).collect();
        assert_eq!(actual.len(), 1);
        assert_eq!(actual[0].path, PATH_USER_PERMISSIONS.path);
        assert_eq!(actual[0].method, reqwest::Method::GET);
    }
}
