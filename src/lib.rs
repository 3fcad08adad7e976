pub mod bridge;
pub mod config;
pub mod level;
pub mod policy;
pub mod writer;

pub use config::Config;
pub use level::LogLevel;
pub use policy::LogPolicy;
pub use writer::LogWriter;
