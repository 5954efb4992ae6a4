pub mod tracing;

use std::path::PathBuf;
use std::time::Duration;

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::models::user::SessionUser;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppCfg {
    pub listen: String,
    /// Simulated round trip of every data source call.
    pub latency_ms: u64,
    pub static_dir: PathBuf,
    /// Visitors idle this long lose their view state.
    pub idle_secs: u64,
    /// Who `/login` signs you in as.
    pub demo_user: SessionUser,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".into(),
            latency_ms: 300,
            static_dir: "./dist/".into(),
            idle_secs: 30 * 60,
            demo_user: SessionUser {
                id: "author-1".into(),
                name: "John Doe".into(),
                avatar: None,
            },
        }
    }
}

impl AppCfg {
    /// Defaults, then `appsettings.json`, then `APP_*` variables.
    pub fn load() -> figment::Result<Self> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppCfg::default()))
            .merge(Json::file("appsettings.json"))
            .merge(Env::prefixed("APP_").split("__"))
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn idle(&self) -> Duration {
        Duration::from_secs(self.idle_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_file_and_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("appsettings.json", r#"{ "listen": "127.0.0.1:8080", "latency_ms": 50 }"#)?;
            jail.set_env("APP_LATENCY_MS", "0");
            jail.set_env("APP_DEMO_USER__NAME", "Ann");

            let cfg = AppCfg::load()?;
            assert_eq!(cfg.listen, "127.0.0.1:8080");
            assert_eq!(cfg.latency(), Duration::ZERO);
            assert_eq!(cfg.demo_user.name, "Ann");
            assert_eq!(cfg.demo_user.id, "author-1");
            Ok(())
        });
    }
}
