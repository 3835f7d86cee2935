use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub port: u16,
    /// Output directory of `dx bundle` for the frontend.
    pub dist_dir: PathBuf,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from `PORT` and `DIST_DIR`; unset or unparsable values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Ignoring invalid PORT");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let dist_dir = lookup("DIST_DIR")
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());
        HostConfig {
            port,
            dist_dir: PathBuf::from(dist_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = HostConfig::from_lookup(|_| None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_reads_port_and_dist_dir() {
        let config = HostConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".to_string()),
            "DIST_DIR" => Some("target/dx/landmark-frontend/release/web/public".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.dist_dir,
            PathBuf::from("target/dx/landmark-frontend/release/web/public")
        );
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = HostConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
