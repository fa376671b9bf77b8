//! Domain models and types for regionsnap.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`RegionName`], [`MemberRef`])
//! - **Invocation data** ([`ExportRequest`], [`Member`], [`Outcome`])
//! - **Error types** ([`SnapshotError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Region and member references are distinct newtypes so they cannot be swapped
//! when building a request:
//!
//! ```rust
//! use regionsnap::domain::{ExportRequest, MemberRef, RegionName};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ExportRequest::new(RegionName::new("orders")?, MemberRef::new("server1")?)
//!     .with_file("/tmp/orders.gfd");
//! assert!(!request.parallel);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod member;
pub mod outcome;
pub mod request;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::SnapshotError;
pub use ids::{MemberRef, RegionName};
pub use member::Member;
pub use outcome::Outcome;
pub use request::ExportRequest;
pub use result::Result;
