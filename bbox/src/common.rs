pub use num_traits::{Float, ToPrimitive};
pub use serde::{Deserialize, Serialize};
