use std::time::Duration;

pub const USER_AGENT: &str = "authentik-admin-js-md5";

pub const DEFAULT_REPO: &str = "goauthentik/authentik";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

pub const RELEASES_PER_PAGE: u32 = 100;
pub const PAGE_DELAY: Duration = Duration::from_millis(50);

pub const ASSET_PATH_PREFIX: &str = "/static/dist/admin/AdminInterface-";
pub const ASSET_PATH_SUFFIX: &str = ".js";

/// Body read size for the streaming digest.
pub const PROBE_CHUNK_SIZE: usize = 128 * 1024;

pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

pub const TSV_HEADER: &str = "version\thttp_status\tmd5\tbytes\turl";

pub const EXIT_OK: u8 = 0;
pub const EXIT_INDEX_FAILED: u8 = 1;
pub const EXIT_NO_BASE_URL: u8 = 2;
pub const EXIT_NOT_FOUND: u8 = 3;
