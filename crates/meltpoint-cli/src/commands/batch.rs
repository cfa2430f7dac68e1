use crate::cli::{BatchArgs, OutputFormat};
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::io;
use crate::utils::progress::CliProgressHandler;
use meltpoint::engine::batch::CancellationToken;
use meltpoint::engine::progress::ProgressReporter;
use meltpoint::workflows;
use tracing::{info, warn};

pub fn run(args: BatchArgs, threads: Option<usize>, quiet: bool) -> Result<()> {
    let app_config = build_config(
        &args.conditions,
        &args.engine,
        args.config.as_deref(),
        threads,
    )?;

    info!("Loading primers from {:?}", &args.input);
    let sheet = io::read_primers(&args.input, &app_config.conditions)?;
    if sheet.is_empty() {
        warn!("No primers found in {:?}.", &args.input);
        eprintln!("Warning: no primers found in {}.", args.input.display());
        return Ok(());
    }

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let cancellation = CancellationToken::new();

    info!("Invoking the batch workflow...");
    let report =
        workflows::batch::run(&sheet.entries, &app_config.engine, &reporter, &cancellation)?;

    let as_json = args.format == OutputFormat::Json;
    match &args.output {
        Some(path) => {
            io::write_report_file(path, &report, &sheet, as_json)?;
            eprintln!("Results written to: {}", path.display());
        }
        None if as_json => {
            let json = serde_json::to_string_pretty(&io::AnnotatedReport::new(&report, &sheet))
                .map_err(|e| CliError::Other(e.into()))?;
            println!("{}", json);
        }
        None => {
            io::write_table(std::io::stdout().lock(), b'\t', &report, &sheet)
                .map_err(|e| CliError::Other(e.into()))?;
        }
    }

    eprintln!(
        "{} of {} primer(s) calculated, {} failed.",
        report.succeeded(),
        report.total(),
        report.failed()
    );
    Ok(())
}
