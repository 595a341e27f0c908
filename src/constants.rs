/// User agent string for upstream HTTP requests
pub const USER_AGENT: &str = "city-recipes/0.1.0";

/// City data provider base URL
pub const CITY_API_BASE: &str = "https://api-ugi2pflmha-ew.a.run.app";

/// Header carrying the provider API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Recipe content bounds, in UTF-16 code units
pub const MIN_CONTENT_LEN: usize = 10;
pub const MAX_CONTENT_LEN: usize = 2000;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;
