//! Server configuration, read once at startup from `QS_*` environment
//! variables (with `.env` support via dotenvy).

use std::env;

/// Which quote store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// SQLite database file (the default).
    Sqlite,
    /// Process-memory store; contents are lost on shutdown.
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (`QS_LISTEN_ADDR`).
    pub listen_addr: String,
    /// SQLite database file path (`QS_DB_PATH`); unused for the memory
    /// backend.
    pub db_path: String,
    /// Store backend selection (`QS_STORE` = `sqlite` | `memory`).
    pub store: StoreBackend,
}

impl Config {
    pub fn from_env() -> Self {
        // A missing .env file is fine; real env vars still apply
        let _ = dotenvy::dotenv();

        let listen_addr =
            env::var("QS_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let db_path = env::var("QS_DB_PATH").unwrap_or_else(|_| "quoteshelf.db".to_string());
        let store = match env::var("QS_STORE").ok().as_deref() {
            Some(value) if value.eq_ignore_ascii_case("memory") => StoreBackend::Memory,
            _ => StoreBackend::Sqlite,
        };

        Config {
            listen_addr,
            db_path,
            store,
        }
    }
}
