use thiserror::Error;

/// Environment variable naming the shortening service base address.
pub const API_URL_ENV: &str = "SHORTLINK_API_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHORTLINK_API_URL is not set")]
    Missing,
    #[error("SHORTLINK_API_URL is empty")]
    Empty,
    #[error("SHORTLINK_API_URL is not a valid http(s) URL: {0}")]
    Invalid(String),
}

/// Reads the service base address from the environment. Failures here are
/// operator errors to report at startup, never end-user submission errors.
pub fn api_base_url() -> Result<String, ConfigError> {
    let raw = std::env::var(API_URL_ENV).map_err(|_| ConfigError::Missing)?;
    parse_base_url(&raw)
}

/// Validates a configured base address: an absolute http(s) URL, returned
/// with any trailing slash stripped so `{base}/shorten` joins cleanly.
pub fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    if raw.trim().is_empty() {
        return Err(ConfigError::Empty);
    }
    let parsed = url::Url::parse(raw).map_err(|err| ConfigError::Invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(ConfigError::Invalid(format!("unsupported scheme {other}"))),
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(
            parse_base_url("http://localhost:5152/api"),
            Ok("http://localhost:5152/api".to_string())
        );
        assert_eq!(
            parse_base_url("https://short.example/api"),
            Ok("https://short.example/api".to_string())
        );
    }

    #[test]
    fn strips_the_trailing_slash() {
        assert_eq!(
            parse_base_url("http://localhost:5152/api/"),
            Ok("http://localhost:5152/api".to_string())
        );
    }

    #[test]
    fn rejects_empty_values() {
        assert_eq!(parse_base_url(""), Err(ConfigError::Empty));
        assert_eq!(parse_base_url("   "), Err(ConfigError::Empty));
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(matches!(
            parse_base_url("ftp://short.example"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_relative_addresses() {
        assert!(matches!(
            parse_base_url("localhost:5152/api"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ConfigError::Invalid(_))
        ));
    }
}
