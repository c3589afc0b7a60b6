// Adapters - External system implementations

pub mod fs_local;
pub mod mkvmerge_reader;
pub mod mkvpropedit_writer;
pub mod process_runner;
pub mod toml_config;
pub mod tracing_report;

// Re-export adapters
pub use fs_local::FsLocalAdapter;
pub use mkvmerge_reader::MkvmergeReader;
pub use mkvpropedit_writer::MkvpropeditWriter;
pub use process_runner::ToolRunner;
pub use toml_config::TomlConfigAdapter;
pub use tracing_report::TracingReportAdapter;
