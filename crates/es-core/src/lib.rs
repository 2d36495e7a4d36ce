pub mod config;
pub mod entropy;
pub mod error;
pub mod histogram;
pub mod probability;
pub mod reader;
pub mod scan;

pub use config::{ScanConfig, UnitMode};
pub use entropy::entropy;
pub use error::{Result, ScanError};
pub use histogram::Histogram;
pub use probability::{estimate, Probabilities};
pub use reader::{BlockReader, Label, LineReader, Unit, UnitReader};
pub use scan::{scan, Method};
