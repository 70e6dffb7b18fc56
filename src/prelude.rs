pub use std::result::Result as StdResult;
pub use std::time::Duration as StdDuration;
pub use std::time::Instant;

pub use anyhow::{anyhow, bail, Context, Error};
pub use tracing::{debug, error, info, instrument, warn};

pub type Result<T = (), E = Error> = StdResult<T, E>;
