//! fastapack CLI: parse FASTA, optionally 2-bit pack it, emit FASTA.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use fastapack::{DataSink, DataSource, FastaStore, RecordStream, Result};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input FASTA file (gzip detected from content), '-' for stdin
    input: String,

    /// Output path; a '.gz' extension gzips. Stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap width for sequence lines; 0 writes one line per record
    #[arg(short, long, default_value_t = 0)]
    wrap: usize,

    /// Store sequences 2-bit packed (rejects bases outside ACGT/acgt)
    #[arg(short, long)]
    packed: bool,

    /// List 'header <TAB> length' per record instead of emitting FASTA
    #[arg(short, long)]
    list: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("fastapack: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = if cli.input == "-" {
        DataSource::stdin()
    } else {
        DataSource::from_path(&cli.input)
    };

    if cli.list {
        return list_records(source);
    }

    let mut store = FastaStore::new();
    let reader = source.open()?;
    let added = if cli.packed {
        store.parse_binary_reader(reader)?
    } else {
        store.parse_reader(reader)?
    };
    info!("parsed {added} records from {}", cli.input);

    let sink = match &cli.output {
        Some(path) => DataSink::from_path(path),
        None => DataSink::stdout(),
    };
    debug!("gzip output: {}", sink.is_compressed());

    let mut writer = sink.create()?;
    store.write_fasta(&mut writer, cli.wrap)?;
    writer.finish()?;

    match &cli.output {
        Some(path) => info!("wrote {} records to {}", store.len(), path.display()),
        None => debug!("wrote {} records to stdout", store.len()),
    }
    Ok(())
}

/// Stream records lazily and print one summary line each; the input is
/// never held in memory as a whole.
fn list_records(source: DataSource) -> Result<()> {
    let stream = RecordStream::new(source)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut count = 0usize;
    for record in stream {
        let record = record?;
        writeln!(out, "{}\t{}", record.header(), record.len())?;
        count += 1;
    }
    info!("listed {count} records");
    Ok(())
}
