//! # ipe-config — Policy Table Configuration
//!
//! Builds the immutable [`PolicyTables`](ipe_policy::PolicyTables) handed
//! to a [`PolicyAuthority`](ipe_policy::PolicyAuthority). The engine
//! itself reads no files and trusts its tables to be lower-case; this
//! crate is where files are read and entries are normalized.
//!
//! ## Configuration format
//!
//! ```yaml
//! public_suffix:
//!   files: [public_suffix_list.dat]
//!   entries: [com, co.uk]
//! blacklist:
//!   files: [blacklist.txt]
//!   entries: [example.com]
//! ```
//!
//! Relative file paths resolve against the directory of the config file.
//!
//! ## Crate Policy
//!
//! - Tables are built once, before the authority is exposed to callers.
//!   There is no reload path.
//! - Every error names the file (and line, where applicable) it came from.

pub mod config;
pub mod error;
pub mod list;

pub use config::{PolicyConfig, TableSource};
pub use error::ConfigError;
pub use list::{parse_list, ParsedList};
