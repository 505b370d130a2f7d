//! CLI library for testing purposes

pub mod audit;
pub mod path_glob;
pub mod settings;
pub mod validation;
pub mod view;

pub use audit::{FileAudit, audit_file, audit_files};
pub use path_glob::expand_audit_inputs;
pub use settings::Settings;
