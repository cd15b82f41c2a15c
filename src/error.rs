//! Startup errors. Nothing inside a tick can fail; everything here is
//! raised while building or resizing a world, or loading its config.

/// Errors reported before the simulation runs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// IO error while reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("Parse error: {0}")]
    Parse(String),

    /// A tuning value outside its legal range
    #[error("Invalid config value `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// Playfield too small (or not a number) to hold the player and spawns
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
