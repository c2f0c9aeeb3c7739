//! `cvmark`: render Markdown post bodies to HTML fragments.

use clap::Parser;
use cvmark_core::{
    BatchInput, BatchOptions, CvmarkError, RenderOptions, decode_lossy, decode_strict,
    render_batch, render_with_options,
};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "cvmark")]
#[command(about = "Render Markdown post bodies to HTML fragments")]
#[command(version)]
struct Args {
    /// Markdown files to render. Reads stdin when none are given.
    files: Vec<PathBuf>,

    /// Write `<stem>.html` files into this directory instead of stdout
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// JSON file with render options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Apply inline spans inside paragraphs
    #[arg(long)]
    inline_paragraphs: bool,

    /// Render blocks of large documents in parallel
    #[arg(long)]
    parallel: bool,

    /// Maximum number of worker threads for multiple files
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Fail on input that is not valid UTF-8 instead of replacing bad bytes
    #[arg(long)]
    strict_utf8: bool,

    /// Log render decisions (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("cvmark: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CvmarkError> {
    let options = load_options(args)?;
    if let Some(dir) = &args.out_dir {
        check_output_collisions(dir, &args.files)?;
    }

    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin().read_to_end(&mut input)?;
        let text = decode(input, args.strict_utf8)?;
        let html = render_with_options(&text, &options);
        return write_stdout(&html);
    }

    let mut inputs = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let bytes = fs::read(path).map_err(|err| CvmarkError::file(path, err))?;
        inputs.push(BatchInput::new(
            path.to_string_lossy(),
            decode(bytes, args.strict_utf8)?,
        ));
    }

    let batch = render_batch(
        inputs,
        &BatchOptions {
            max_threads: args.threads,
            render: options,
        },
    );
    log::info!(
        "rendered {} file(s), {} block(s) in {:.2}ms",
        batch.stats.total,
        batch.stats.blocks,
        batch.stats.processing_time_ms
    );

    match &args.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|err| CvmarkError::file(dir, err))?;
            for result in &batch.results {
                let target = output_path(dir, Path::new(&result.id));
                fs::write(&target, &result.html).map_err(|err| CvmarkError::file(&target, err))?;
                log::debug!("wrote {}", target.display());
            }
            Ok(())
        }
        None => {
            let html: String = batch.results.into_iter().map(|result| result.html).collect();
            write_stdout(&html)
        }
    }
}

/// Config file first, then command-line flags on top.
fn load_options(args: &Args) -> Result<RenderOptions, CvmarkError> {
    let mut options = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|err| CvmarkError::file(path, err))?;
            RenderOptions::from_json(&json)?
        }
        None => RenderOptions::default(),
    };
    if args.inline_paragraphs {
        options.inline_paragraphs = true;
    }
    if args.parallel {
        options.parallel = true;
    }
    Ok(options)
}

fn decode(bytes: Vec<u8>, strict: bool) -> Result<String, CvmarkError> {
    if strict {
        decode_strict(bytes)
    } else {
        Ok(decode_lossy(&bytes).into_owned())
    }
}

fn output_path(dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string());
    dir.join(format!("{stem}.html"))
}

/// Rejects inputs whose file stems map to the same output file.
fn check_output_collisions(dir: &Path, files: &[PathBuf]) -> Result<(), CvmarkError> {
    let mut claimed: HashMap<PathBuf, &PathBuf> = HashMap::new();
    for file in files {
        let target = output_path(dir, file);
        if let Some(first) = claimed.get(&target) {
            return Err(CvmarkError::OutputCollision {
                target,
                first: (*first).clone(),
                second: file.clone(),
            });
        }
        claimed.insert(target, file);
    }
    Ok(())
}

fn write_stdout(html: &str) -> Result<(), CvmarkError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
