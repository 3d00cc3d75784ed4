pub use indexmap::IndexMap;
pub use serde::{Deserialize, Serialize};
