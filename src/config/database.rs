//! Database connection settings.

use serde::Serialize;

use super::constants::{
    DEFAULT_DATABASE_HOST, DEFAULT_DATABASE_NAME, DEFAULT_DATABASE_PASSWORD,
    DEFAULT_DATABASE_PORT, DEFAULT_DATABASE_USER,
};
use super::source::{self, Lookup};

/// Connection settings for the backing relational store.
///
/// The full URI may be supplied verbatim via `SQLALCHEMY_DATABASE_URI`;
/// otherwise it is composed from the individual `DATABASE_*` parts.
#[derive(Clone, Serialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    password: String,
    pub database: String,
    #[serde(skip_serializing)]
    uri: String,
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .field("uri", &"[REDACTED]")
            .finish()
    }
}

impl DatabaseSettings {
    pub(crate) fn resolve(lookup: Lookup<'_>) -> Self {
        let host = source::string_or(lookup, "DATABASE_HOST", DEFAULT_DATABASE_HOST);
        let port = source::parse_or(lookup, "DATABASE_PORT", DEFAULT_DATABASE_PORT);
        let user = source::string_or(lookup, "DATABASE_USER", DEFAULT_DATABASE_USER);
        let password = source::string_or(lookup, "DATABASE_PASSWORD", DEFAULT_DATABASE_PASSWORD);
        let database = source::string_or(lookup, "DATABASE_NAME", DEFAULT_DATABASE_NAME);

        let composed = format!("postgresql://{user}:{password}@{host}:{port}/{database}");
        let uri = source::string_or(lookup, "SQLALCHEMY_DATABASE_URI", &composed);

        Self {
            host,
            port,
            user,
            password,
            database,
            uri,
        }
    }

    /// Connection URI handed to the host framework, credentials included.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self::resolve(&|_| None)
    }
}
