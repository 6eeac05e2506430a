use std::sync::Arc;

use once_cell::sync::Lazy;

use super::model::{Settings, load_settings};

/// Process-wide settings, loaded on first access.
pub static CONFIG: Lazy<Arc<Settings>> =
    Lazy::new(|| Arc::new(load_settings().expect("Failed to load report settings")));
