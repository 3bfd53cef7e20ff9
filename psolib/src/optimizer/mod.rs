pub mod config;
pub use config::*;

pub mod hyperparameters;
pub use hyperparameters::*;

pub mod optimizer;
pub use optimizer::*;

pub mod report;
pub use report::*;

pub mod update;
