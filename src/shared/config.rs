use std::env;

/// Page size used by infinite-scroll browse queries.
pub const BROWSE_PAGE_SIZE: usize = 10;

/// Page size used by the leaderboard infinite query.
pub const LEADERBOARD_PAGE_SIZE: usize = 20;

/// Extra rows fetched when browsing by genre/year so the UI can render a
/// little past the fold without an immediate follow-up request.
pub const BROWSE_OVERFETCH: usize = 10;

/// Runtime configuration, resolved once from the environment with sane
/// defaults. `.env` files are honored when present.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub browse_page_size: usize,
    pub leaderboard_page_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            browse_page_size: read_usize("OTAKU_BROWSE_PAGE_SIZE", BROWSE_PAGE_SIZE),
            leaderboard_page_size: read_usize(
                "OTAKU_LEADERBOARD_PAGE_SIZE",
                LEADERBOARD_PAGE_SIZE,
            ),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            browse_page_size: BROWSE_PAGE_SIZE,
            leaderboard_page_size: LEADERBOARD_PAGE_SIZE,
        }
    }
}

fn read_usize(key: &str, default: usize) -> usize {
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring invalid {}={}, using default {}", key, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = AppConfig::default();
        assert_eq!(config.browse_page_size, BROWSE_PAGE_SIZE);
        assert_eq!(config.leaderboard_page_size, LEADERBOARD_PAGE_SIZE);
    }

    #[test]
    fn invalid_env_value_falls_back_to_default() {
        assert_eq!(read_usize("OTAKU_UNSET_TEST_KEY", 7), 7);
    }
}
