use std::{env, process};

pub struct Config {
    pub backend_url: String,
    pub server_addr: String,
}

impl Config {
    pub fn load() -> Self {
        // Trailing slashes would double up when endpoint paths are appended.
        let backend_url = get_env("BACKEND_URL").trim_end_matches('/').to_string();
        let server_addr = get_env_or("SERVER_ADDRESS", "0.0.0.0:8080");
        Self {
            backend_url,
            server_addr,
        }
    }
}

fn get_env(var: &str) -> String {
    env::var(var).unwrap_or_else(|_| {
        tracing::error!("{} environment variable is required but not set.", var);
        process::exit(1);
    })
}

fn get_env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| {
        tracing::warn!(
            "{} environment variable not set, using default: {}",
            var,
            default
        );
        default.to_string()
    })
}
