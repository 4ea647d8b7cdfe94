//! System-wide constants and defaults.

/// Default base URL of the students REST service.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Path segment of the students collection under the API base URL.
pub const STUDENTS_PATH: &str = "students";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "roster";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "ROSTER_API_URL";
