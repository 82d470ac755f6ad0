//! Host-side errors.  The game core itself never fails; these only come from
//! the terminal, the config file or the logger setup.

use crate::config::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Terminal or other I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The terminal event reader stopped
    #[error("terminal input closed")]
    InputClosed,
}
