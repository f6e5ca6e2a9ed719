//! Post-processing plugin contract for the import manager.
//!
//! After the import manager copies, moves or syncs a file it may hand the
//! result to an external post-processing plugin. Plugins are short-lived
//! processes invoked with exactly one command-line argument: a JSON object
//! describing the operation, known as the [`OperationBundle`].
//!
//! ```text
//! {
//!   "source": "<string>",
//!   "destination": "<string>",
//!   "details": <any JSON value>,
//!   "properties": <any JSON value>
//! }
//! ```
//!
//! All four keys are required. Plugins report back to the host only through
//! their exit status and standard output and error streams.
//!
//! # Example
//!
//! ```
//! use importmanager_plugins::{OperationBundle, decode_argument};
//!
//! let bundle = OperationBundle::new(
//!     "/a/b/file.txt",
//!     "/out",
//!     serde_json::json!("copy"),
//!     serde_json::json!({}),
//! );
//! let argument = bundle.to_argument().expect("bundle encodes");
//!
//! let decoded = decode_argument(&argument).expect("argument decodes");
//! assert_eq!(decoded, bundle);
//! assert_eq!(
//!     decoded.relocated_path().map(|path| path.to_string()),
//!     Some(String::from("/out/file.txt")),
//! );
//! ```

pub mod bundle;
pub mod decode;
pub mod error;
pub mod relocate;


pub use self::bundle::{BundleField, OperationBundle};
pub use self::decode::decode_argument;
pub use self::error::ContractError;
pub use self::relocate::relocated_path;
