use anyhow::{anyhow, Result};

pub fn validate_base_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("api_base_url must not be empty"));
    }
    let url = reqwest::Url::parse(trimmed).map_err(|err| anyhow!("invalid api_base_url: {}", err))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!("api_base_url must use http or https"));
    }
    Ok(())
}

pub fn validate_log_level(value: &str) -> Result<()> {
    match value {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        other => Err(anyhow!("invalid log_level '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_must_be_http() {
        assert!(validate_base_url("http://localhost:5000/api").is_ok());
        assert!(validate_base_url("https://eventora.example/api").is_ok());
        assert!(validate_base_url("ftp://eventora.example").is_err());
        assert!(validate_base_url("  ").is_err());
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn log_levels() {
        assert!(validate_log_level("debug").is_ok());
        assert!(validate_log_level("loud").is_err());
    }
}
