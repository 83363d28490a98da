use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
pub mod models;
use dotenv;
pub use models::*;


/// Loads the application configuration from layered sources.
///
/// Sources, later ones overriding earlier ones:
/// 1. `config/default.*` under the workspace root (optional)
/// 2. `config/{RUN_ENV}.*` with `RUN_ENV` defaulting to `debug` (optional)
/// 3. Environment variables prefixed with `QT` and separated by `__`,
///    e.g. `QT__STORE__API_KEY`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "QT".to_string());

    let config_dir = config_dir();
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    tracing::debug!(
        config_dir = %config_dir.display(),
        run_env = %run_env,
        "loading configuration"
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    builder.build()?.try_deserialize()
}

/// Resolves the directory holding the layered config files.
///
/// `QT_CONFIG_DIR` wins when set. Otherwise the `config/` directory under
/// the workspace root is used when running inside the workspace, falling
/// back to `config/` relative to the current directory.
fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var("QT_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let base = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .ok()
        .and_then(|manifest_dir| {
            // go from crates/quicktaxi_config to the workspace root
            manifest_dir.ancestors().nth(2).map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("config")
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is loaded at most once per process. `DOTENV_OVERRIDE` selects
/// an alternative file; otherwise `.env` in the current directory is used.
/// A missing file is not an error.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
