//! iTop smart query processor: natural-language questions in, formatted
//! ITSM reports out.
//!
//! Re-exports all modules so external crates (e.g. `itop-e2e-tests`) can
//! drive the pipeline stage by stage.

pub mod builder;
pub mod config;
pub mod detector;
pub mod error;
pub mod filter;
pub mod format;
pub mod fuzzy;
pub mod handlers;
pub mod intent;
pub mod processor;
pub mod stats;
pub mod taxonomy;
pub mod text;

pub use config::{AppConfig, QueryConfig};
pub use error::{QueryError, QueryResult};
pub use format::FormattedReport;
pub use intent::{IntentKind, OutputMode, ParsedIntent};
pub use processor::{SmartQueryOptions, SmartQueryProcessor};
pub use taxonomy::{ClassDescriptor, Taxonomy};
