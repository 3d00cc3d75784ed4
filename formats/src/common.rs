pub use anyhow::{format_err, Context, Result};
pub use indexmap::IndexMap;
pub use itertools::Itertools;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashMap,
    fs,
    path::Path,
};
