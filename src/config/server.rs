use error_stack::{Report, Result, ResultExt};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use validator::{Validate, ValidateError};

use super::ParseError;
use crate::util::{figment::FigmentErrorAttachable, validator::IntoValidatorReport};

#[derive(Debug, Deserialize)]
pub struct Server {
    /// Address the HTTP server binds to.
    ///
    /// **Environment variables**:
    /// - `ROSTER_IP`
    #[serde(default = "Server::default_ip")]
    pub ip: IpAddr,
    /// Port the HTTP server binds to.
    ///
    /// **Environment variables**:
    /// - `ROSTER_PORT`
    #[serde(default = "Server::default_port")]
    pub port: u16,
    pub db: super::Database,
}

impl Validate for Server {
    fn validate(&self) -> std::result::Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        if let Err(e) = self.db.validate() {
            fields.insert("db", e);
        }
        fields.build().into_result()
    }
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        let config = Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

        config
            .validate()
            .into_validator_report()
            .change_context(ParseError)?;

        Ok(config)
    }
}

impl Server {
    const DEFAULT_CONFIG_FILE: &'static str = "roster.yml";
    const DEFAULT_PORT: u16 = 3000;

    const fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    const fn default_port() -> u16 {
        Self::DEFAULT_PORT
    }

    /// Creates a default [`figment::Figment`] object to load server
    /// configuration. This function is there for implementing
    /// [`Server::load`] and testing.
    pub(crate) fn figment() -> figment::Figment {
        use figment::{
            providers::{Env, Format, Yaml},
            Figment,
        };

        Figment::new()
            .merge(Yaml::file(Self::DEFAULT_CONFIG_FILE))
            // The env provider splits nested keys on "_", which mangles
            // field names that themselves contain underscores.
            .merge(Env::prefixed("ROSTER_").map(|v| match v.as_str() {
                "DB_MIN_IDLE" => "db.min_idle".into(),
                "DB_POOL_SIZE" => "db.pool_size".into(),
                "DB_ENFORCE_TLS" => "db.enforce_tls".into(),
                "DB_TIMEOUT_SECS" => "db.timeout_secs".into(),
                "DB_URL" => "db.url".into(),
                _ => v.as_str().replace('_', ".").into(),
            }))
            // Environment variable aliases
            .merge(Env::raw().map(|v| match v.as_str() {
                "DATABASE_URL" => "db.url".into(),
                _ => v.into(),
            }))
    }
}
