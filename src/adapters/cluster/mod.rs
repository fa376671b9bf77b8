//! Cluster access: member lookup and remote function execution

pub mod directory;
pub mod http;
pub mod traits;

pub use directory::StaticNodeDirectory;
pub use http::HttpFunctionExecutor;
pub use traits::{FunctionExecutor, FunctionResult, NodeDirectory, RawOutcome, RemoteFailure};
