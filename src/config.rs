use std::fmt;
use std::time::Duration;

/// Settings for the terminal driver. The generator itself only sees the
/// dimensions, the start cell and a neighbour picker.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub cols: usize,
    pub rows: usize,
    pub start_col: usize,
    pub start_row: usize,

    /// frames per second; 0 skips the animation
    pub fps: u32,
    /// fixed seed for reproducible mazes, entropy otherwise
    pub seed: Option<u64>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cols: 20,
            rows: 20,
            start_col: 0,
            start_row: 0,
            fps: 30,
            seed: None,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BadNumber { name: &'static str, value: String },
    ZeroDimension,
    UnknownFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BadNumber { name, value } => {
                write!(f, "{} must be a non-negative integer, got {:?}", name, value)
            }
            ConfigError::ZeroDimension => write!(f, "cols and rows must be at least 1"),
            ConfigError::UnknownFlag(flag) => write!(f, "unknown flag {}", flag),
        }
    }
}

impl std::error::Error for ConfigError {}

const POSITIONAL: [&str; 4] = ["cols", "rows", "fps", "seed"];

pub const USAGE: &str = "usage: backtrack-maze [cols] [rows] [fps] [seed] [--no-color]";

impl Config {
    /// Parses `[cols] [rows] [fps] [seed] [--no-color]`, program name excluded.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut position = 0;

        for arg in args {
            let arg = arg.as_ref();
            if arg == "--no-color" {
                config.color = false;
                continue;
            }
            if arg.starts_with("--") || position >= POSITIONAL.len() {
                return Err(ConfigError::UnknownFlag(arg.to_string()));
            }

            let name = POSITIONAL[position];
            let bad = || ConfigError::BadNumber {
                name,
                value: arg.to_string(),
            };
            match name {
                "cols" => config.cols = arg.parse().map_err(|_| bad())?,
                "rows" => config.rows = arg.parse().map_err(|_| bad())?,
                "fps" => config.fps = arg.parse().map_err(|_| bad())?,
                _ => config.seed = Some(arg.parse().map_err(|_| bad())?),
            }
            position += 1;
        }

        if config.cols == 0 || config.rows == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        Ok(config)
    }

    pub fn start(&self) -> (usize, usize) {
        (self.start_col, self.start_row)
    }

    pub fn frame_interval(&self) -> Option<Duration> {
        if self.fps == 0 {
            None
        } else {
            Some(Duration::from_secs(1) / self.fps)
        }
    }
}
