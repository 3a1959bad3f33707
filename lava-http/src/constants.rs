//! Fixed endpoints and defaults for the Lava API.

use std::time::Duration;

/// Fixed remote origin both account surfaces are served from.
pub const DEFAULT_BASE_URL: &str = "https://api.lava.ru/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connectivity probe endpoint shared by both surfaces.
pub const PING_PATH: &str = "test/ping";
