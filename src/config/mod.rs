mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, USER_CONFIG_NAME};
pub use model::{
    Config, DEFAULT_SMOKE_CONFIG, DEFAULT_SMOKE_NODE, Options, SmokeConfig, validate_config,
};
