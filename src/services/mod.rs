pub mod init;
pub mod output;
pub mod remap;

pub use init::{write_default_config, DEFAULT_CONFIG_FILE};
pub use output::output_path;
pub use remap::{RemapOutcome, RemapService};
