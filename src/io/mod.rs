//! I/O module: streaming FASTA parsing, emission, and the gzip boundary
//!
//! Sources and sinks abstract where text comes from and goes to (files,
//! stdin/stdout, transparently gzipped either way); `RecordStream` walks a
//! source one record at a time in constant memory, and `FastaWriter` emits
//! records back as wrapped FASTA text.

mod parser;
mod sink;
mod source;
mod writer;

pub use parser::RecordStream;
pub use sink::{DataSink, SinkWriter};
pub use source::DataSource;
pub use writer::FastaWriter;
