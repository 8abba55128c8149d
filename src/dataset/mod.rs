//! Upstream and downstream collaborators of the reporting pipeline: loading,
//! exporting, sampling, and inspecting sales files.

pub mod export;
pub mod inspect;
pub mod loader;
pub mod record;
pub mod sample;

pub use export::{export_csv, to_csv_string, write_csv};
pub use inspect::{inspect_file, FileDetails};
pub use loader::{load_csv_path, load_csv_reader, parse_date, LoadOptions};
pub use record::{ColumnSet, Dataset, SalesRecord};
pub use sample::{generate_sample, SampleSpec, MAX_SAMPLE_ROWS};
