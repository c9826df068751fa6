// Output defaults
pub const DEFAULT_OUTPUT_FILE: &str = "combined_asn_list.txt";
pub const DEFAULT_ENV_VAR: &str = "BLOCKED_ASN";
pub const ASN_DELIMITER: &str = ",";

// Fetch defaults
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_CONCURRENT_FETCHES: usize = 4;
pub const USER_AGENT: &str = concat!("asn-merge/", env!("CARGO_PKG_VERSION"));

// Patterns
pub const ASN_PATTERN: &str = r"AS([0-9]+)";
pub const SOURCE_COMMENT_PREFIX: char = '#';

// Sort order and output format aliases
pub const NUMERIC_SORT_ALIASES: &[&str] = &["numeric", "num", "n"];
pub const LEXICOGRAPHIC_SORT_ALIASES: &[&str] = &["lexicographic", "lex", "text"];
pub const LIST_FORMAT_ALIASES: &[&str] = &["list", "csv", "plain"];
pub const ENV_FORMAT_ALIASES: &[&str] = &["env", "dotenv"];
