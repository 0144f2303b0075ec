use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rocket::http::Method;
use rocket_cors::{AllowedOrigins, Cors, CorsOptions};
use serde::{Deserialize, Serialize};

/// Service settings. Read from the defaults below, then `League.toml`, then
/// `LEAGUE_`-prefixed environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    pub db_pool_size: u32,
    pub run_migrations: bool,
    /// Origins allowed to call the API. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            db_pool_size: 10,
            run_migrations: true,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl LeagueConfig {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(LeagueConfig::default()))
            .merge(Toml::file("League.toml"))
            .merge(Env::prefixed("LEAGUE_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn cors(&self) -> Result<Cors, rocket_cors::Error> {
        let allowed_origins = if self.cors_allowed_origins.is_empty() {
            AllowedOrigins::all()
        } else {
            AllowedOrigins::some_exact(&self.cors_allowed_origins)
        };

        CorsOptions {
            allowed_origins,
            allowed_methods: [Method::Get, Method::Post, Method::Put, Method::Delete, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
            ..Default::default()
        }
        .to_cors()
    }
}
