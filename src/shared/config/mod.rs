pub mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{
    EngineConfig, IoConfig, LoggingConfig, Settings, load_settings, load_settings_from,
};
