//! # dialog-extractor CLI
//!
//! Command-line interface for the dialog-extractor library.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use dialog_extractor::cli::Args;
use dialog_extractor::config::ExtractorConfig;
use dialog_extractor::dialogue::join_lines;
use dialog_extractor::format::{to_format_string, write_to_format};
use dialog_extractor::logging;
use dialog_extractor::source::{SourceEncoding, SourceKind, read_log, read_log_from};
use dialog_extractor::{DialogError, Extractor, TracingObserver};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), DialogError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    logging::init(args.debug);

    let base = match &args.config {
        Some(path) => ExtractorConfig::from_json_file(path)?,
        None => ExtractorConfig::default(),
    };
    let extractor =
        Extractor::with_config(args.extractor_config(base))?.with_observer(TracingObserver);

    let encoding: SourceEncoding = args.encoding.into();
    let raw = match args.input_path() {
        Some(path) => read_log(path, encoding)?,
        None => read_log_from(io::stdin().lock(), SourceKind::Plain, encoding)?,
    };

    let (lines, stats) = extractor.extract_with_stats(&raw);
    let format = args.output_format();
    let output_config = args.output_config();
    let nothing_extracted = join_lines(&lines).is_empty();

    if args.stdout {
        if !nothing_extracted {
            let rendered = to_format_string(&lines, format, &output_config)?;
            let mut out = io::stdout().lock();
            out.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                out.write_all(b"\n")?;
            }
        }
        return Ok(());
    }

    let input_label = args
        .input_path()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    println!("dialog-extractor v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:     {}", input_label);
    println!("Encoding:  {}", encoding);
    println!("Strategy:  {}", extractor.strategy());
    println!();

    if nothing_extracted {
        println!("No dialogue found in {} lines; nothing written.", stats.lines_scanned);
        return Ok(());
    }

    let output_path = args.output_path(format);
    write_to_format(&lines, &output_path, format, &output_config)?;

    println!("Done! {} output saved to {}", format, output_path.display());
    println!();
    println!("Summary:");
    println!("   Scanned:   {} lines", stats.lines_scanned);
    println!("   Chat:      {} lines", stats.chat_lines);
    println!("   Noise:     {} dropped", stats.noise_dropped);
    if stats.empty_dropped > 0 {
        println!("   Empty:     {} dropped", stats.empty_dropped);
    }
    println!("   Extracted: {} lines", stats.extracted);
    println!(
        "   Time:      {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
