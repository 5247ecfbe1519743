use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Inverted bounds for {field}: min {min} > max {max}")]
    InvertedBounds {
        field: &'static str,
        min: u32,
        max: u32,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Incompatible corpus version {found} (supported {min}..={max})")]
    IncompatibleVersion { found: u32, min: u32, max: u32 },

    #[error("Fixture {index} has {field} = {value}, outside its bounds")]
    OutOfBounds {
        index: usize,
        field: &'static str,
        value: u32,
    },
}

pub type Result<T> = std::result::Result<T, FixtureError>;
