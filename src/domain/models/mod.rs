pub mod config;
pub mod desk;
pub mod session;

pub use config::{Config, ConventionConfig, LoggingConfig, TwitterConfig};
pub use desk::DeskSlot;
pub use session::{
    AuthorizeVariant, Connection, ConnectionPage, Credentials, Cursor, RequestToken, Session,
};
