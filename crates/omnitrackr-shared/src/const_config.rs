//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod session {
    /// Key of the single durable slot the current identity is persisted under
    pub const SESSION_STORAGE_KEY: &str = "omnitrackr_user";
    /// Extension used by the file backed key-value store
    pub const SESSION_FILE_EXTENSION: &str = "json";
}

pub mod credentials {
    /// Every demo account shares this password
    pub const CREDENTIALS_DEMO_PASSWORD: &str = "pass123";
    /// Shown next to the admin account on the login screen
    pub const CREDENTIALS_ADMIN_ACCOUNT_LABEL: &str = "Admin (All Departments)";
}

pub mod telemetry {
    pub const TELEMETRY_TRACE_FOLDER: &str = "traces";
    pub const TELEMETRY_DEFAULT_FILTER: &str = "info";
}

pub mod path {
    pub const PATH_ROOT: &str = "/";
    pub const PATH_LOGIN: &str = "/login";
    pub const PATH_DASHBOARD: &str = "/dashboard";
    pub const PATH_ALERTS: &str = "/alerts";
    pub const PATH_FILE_SOURCES: &str = "/file-sources";
    pub const PATH_OUTWARD_FILES: &str = "/outward-files";
    pub const PATH_FILE_VALIDATION: &str = "/file-validation";
    pub const PATH_AUDIT_LOGS: &str = "/audit-logs";
    pub const PATH_REPORTS: &str = "/reports";
    pub const PATH_DEPARTMENTS: &str = "/departments";
    pub const PATH_ADMIN_SETTINGS: &str = "/admin-settings";
}
