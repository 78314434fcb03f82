use crate::models::{Result, StaffRecord};
use std::fs::File;

const HEADER: [&str; 6] = [
    "Name",
    "Email",
    "Position/Title",
    "Phone",
    "Sport/Department",
    "Source URL",
];

/// The staff-directory CSV, written incrementally: header on creation, then
/// one flushed row per record so an interrupted run still leaves usable
/// output.
pub struct RecordSink {
    writer: csv::Writer<File>,
}

impl RecordSink {
    pub fn create(path: &str) -> Result<Self> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn append(&mut self, record: &StaffRecord) -> Result<()> {
        self.writer.write_record([
            record.name.as_str(),
            record.email.as_str(),
            record.title.as_str(),
            record.phone.as_str(),
            record.department.as_str(),
            record.source_url.as_str(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}
