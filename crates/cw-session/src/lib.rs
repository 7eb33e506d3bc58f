//! Interactive Castaway session.
//!
//! Owns the token bag, the weather deck, and the random source for one
//! game. Parses single-line commands, runs the matching draw, tracks the
//! round and the players' resources, and journals everything that happens.

pub mod command;
pub mod config;
pub mod error;
pub mod journal;
pub mod resources;
pub mod session;

pub use command::{Command, ExportFormat, parse_command};
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use resources::{Resource, Resources};
pub use session::{Response, Session, Tone};
