use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_FRONTEND_PATH: &str = "../../../frontend/build";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Static asset root, carried in `AppState` so handlers can extract it.
#[derive(Clone)]
pub struct FrontendDir(pub PathBuf);

pub struct Config {
    pub api_key: String,
    pub api_host: String,
    pub frontend_path: PathBuf,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let api_key = dotenv::var("ZDK_API_KEY")
            .context("ZDK_API_KEY env variable must be defined")?;
        let api_host = dotenv::var("ZDK_API_HOST")
            .context("ZDK_API_HOST env variable must be defined")?;
        let frontend_path = dotenv::var("FRONTEND_PATH")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_PATH.to_owned())
            .into();
        let listen_addr = dotenv::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned());

        Ok(Config {
            api_key,
            api_host,
            frontend_path,
            listen_addr,
        })
    }
}
