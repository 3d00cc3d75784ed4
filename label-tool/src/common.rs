pub use anyhow::{Context, Result};
pub use indexmap::IndexMap;
pub use serde::{Deserialize, Serialize};
pub use std::{
    env, fs,
    path::{Path, PathBuf},
};
pub use tracing::{info, warn};
