//! Persistent settings of the command line app.
use std::path::{Path, PathBuf};

use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::rest::{Client, Credentials};

const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "TM";

/// Config holds the credentials and connection settings.
///
/// It is read from `$XDG_CONFIG_HOME/ticketmatic/config.toml`, and every value can be
/// overridden with an environment variable such as `TM_ACCOUNTCODE`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Short code of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accountcode: Option<String>,
    /// Public part of the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accesskey: Option<String>,
    /// Private part of the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secretkey: Option<String>,
    /// Server to talk to, if not the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<Url>,
    /// How many times transient failures are retried.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,

    /// Where the configuration was loaded from and will be saved to.
    #[serde(skip)]
    pub path: PathBuf,
}

impl Config {
    /// Loads the configuration from `path`, or the default location if not given.
    ///
    /// A missing file is not an error: everything can come from the environment.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_path()?,
        };
        let mut cfg: Config = config::Config::builder()
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .wrap_err("unable to read config")?
            .try_deserialize()
            .wrap_err("unable to parse config")?;
        cfg.path = path;
        Ok(cfg)
    }

    /// Writes the configuration back to where it was loaded from.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).wrap_err("unable to create config directory")?;
        }
        let data = toml::to_string_pretty(self).wrap_err("unable to serialize config")?;
        std::fs::write(&self.path, data)
            .wrap_err_with(|| format!("unable to write config to {}", self.path.display()))
    }

    /// Builds an API client from the stored credentials.
    pub fn client(&self) -> Result<Client> {
        let (Some(account), Some(access), Some(secret)) =
            (&self.accountcode, &self.accesskey, &self.secretkey)
        else {
            return Err(eyre!(
                "no credentials configured, run `tm auth` or set TM_ACCOUNTCODE, TM_ACCESSKEY and TM_SECRETKEY"
            ));
        };
        let mut builder = Client::builder(Credentials::new(account, access, secret));
        if let Some(server) = &self.server {
            builder = builder.server(server);
        }
        if let Some(retries) = self.retries {
            builder = builder.retries(retries);
        }
        Ok(builder.build())
    }
}

fn default_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("ticketmatic");
    if let Some(path) = dirs.find_config_file(CONFIG_FILE) {
        return Ok(path);
    }
    dirs.get_config_file(CONFIG_FILE)
        .ok_or_else(|| eyre!("unable to determine config location, is $HOME set?"))
}
