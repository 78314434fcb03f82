mod csv_sink;
mod error_log;

pub use csv_sink::RecordSink;
pub use error_log::ErrorLog;
