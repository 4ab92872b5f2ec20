//! SuperSQL language server core
//!
//! Completion, hover and signature help over raw query text, without a parse.

pub mod completion;
pub mod config;
pub mod error;
pub mod hover;
pub mod logging;
pub mod lsp;
pub mod registry;
pub mod scanner;
pub mod signature;
pub mod version;

pub use completion::complete;
pub use error::{LspError, Result};
pub use hover::hover;
pub use registry::{ElementKind, LanguageElement, Parameter, Registry};
pub use signature::{ParamScan, signature_help, signature_help_with};
