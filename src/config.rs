use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Time-credit economics: what a new account starts with and what one
/// accepted swap moves from requester to responder.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditConfig {
    pub starting_credits: i32,
    pub swap_cost: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub jwt: JwtConfig,
    pub credits: CreditConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "skillswap".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "skillswap-users".into()),
            ttl_minutes: env_parse("JWT_TTL_MINUTES", 60),
        };
        let credits = CreditConfig {
            starting_credits: env_parse("STARTING_CREDITS", 2),
            swap_cost: env_parse("SWAP_CREDIT_COST", 1),
        };
        anyhow::ensure!(credits.swap_cost > 0, "SWAP_CREDIT_COST must be positive");
        anyhow::ensure!(credits.starting_credits >= 0, "STARTING_CREDITS must not be negative");

        Ok(Self {
            database_url,
            max_connections: env_parse("DB_MAX_CONNECTIONS", 10),
            jwt,
            credits,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
