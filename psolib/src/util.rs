use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{PsoError, Result};

pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| PsoError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&contents).map_err(|e| PsoError::Config(format!("{}: {}", path.display(), e)))
}
