//! fastapack: streaming FASTA parsing with 2-bit packed sequence storage
//!
//! # Overview
//!
//! fastapack reads FASTA files into in-memory records, optionally packing
//! canonical-base sequences four-to-a-byte through a strict 2-bit codec, and
//! writes them back out as wrapped FASTA text.
//!
//! ## Key Features
//!
//! - **Streaming**: [`RecordStream`] yields one record at a time in constant
//!   memory; stop iterating whenever you like and the rest of the file is
//!   never read
//! - **2-bit packing**: A/C/G/T (either case) stored four bases per byte,
//!   with all-or-nothing rejection of anything outside that alphabet
//! - **One parser**: the eager store and the lazy stream share a single
//!   line-grouping state machine
//! - **Transparent gzip**: compressed input is detected from content,
//!   compressed output from the file extension
//!
//! ## Quick Start
//!
//! ```no_run
//! use fastapack::FastaStore;
//!
//! # fn main() -> fastapack::Result<()> {
//! // Parse with 2-bit packing (rejects non-ACGT input)
//! let mut store = FastaStore::new();
//! store.parse_binary("genome.fa.gz")?;
//!
//! // Re-emit as FASTA wrapped at 60 columns
//! let mut out = Vec::new();
//! store.write_fasta(&mut out, 60)?;
//! # Ok(())
//! # }
//! ```
//!
//! Streaming, without a store:
//!
//! ```no_run
//! use fastapack::RecordStream;
//!
//! # fn main() -> fastapack::Result<()> {
//! for record in RecordStream::from_path("genome.fa")? {
//!     let record = record?;
//!     println!("{}\t{}", record.header(), record.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`codec`]: the 2-bit base codec and [`PackedSeq`]
//! - [`types`]: [`SequenceRecord`] and its tagged payload
//! - [`store`]: the eager [`FastaStore`]
//! - [`io`]: [`RecordStream`], [`FastaWriter`], sources and sinks
//! - [`error`]: [`FastapackError`] and the crate [`Result`] alias

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod error;
pub mod io;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use codec::PackedSeq;
pub use error::{FastapackError, Result};
pub use io::{DataSink, DataSource, FastaWriter, RecordStream, SinkWriter};
pub use store::FastaStore;
pub use types::{SequenceData, SequenceRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
