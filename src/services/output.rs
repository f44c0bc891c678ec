use crate::domain::constants::TSV_HEADER;
use crate::domain::models::{JsonOut, OutputRecord};
use serde::Serialize;
use std::io::Write;

pub fn format_record(r: &OutputRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        r.version, r.http_status, r.md5, r.bytes, r.url
    )
}

/// Line-oriented TSV writer; every line is flushed as soon as it is written.
pub struct TsvSink<W: Write> {
    out: W,
}

impl<W: Write> TsvSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{TSV_HEADER}")?;
        self.out.flush()
    }

    pub fn write_record(&mut self, r: &OutputRecord) -> std::io::Result<()> {
        writeln!(self.out, "{}", format_record(r))?;
        self.out.flush()
    }
}

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}
