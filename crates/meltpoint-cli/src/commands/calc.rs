use crate::cli::{CalcArgs, OutputFormat};
use crate::config::build_config;
use crate::error::{CliError, Result};
use meltpoint::core::models::request::CalculationRequest;
use meltpoint::core::models::result::TmResult;
use meltpoint::workflows;
use std::fmt::Write;
use tracing::info;

pub fn run(args: CalcArgs, threads: Option<usize>) -> Result<()> {
    let app_config = build_config(
        &args.conditions,
        &args.engine,
        args.config.as_deref(),
        threads,
    )?;

    let request = CalculationRequest::new(args.sequence, app_config.conditions);
    info!("Invoking the calculation workflow...");
    let result = workflows::calculate::run(&request, &app_config.engine)?;

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::Other(e.into()))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn render_text(result: &TmResult) -> String {
    let conditions = result.conditions();
    let window = result.annealing_window();
    let mut out = String::new();

    let _ = writeln!(out, "Sequence:          {}", result.sequence());
    let _ = writeln!(out, "Length:            {} nt", result.length());
    let _ = writeln!(
        out,
        "GC content:        {:.1}% ({})",
        result.gc_percent(),
        result.gc_assessment()
    );
    let _ = writeln!(out, "Tm:                {:.1} °C", result.corrected_tm());
    let _ = writeln!(out, "Annealing temp:    {:.1} °C", result.annealing_temp());
    let _ = writeln!(
        out,
        "Gradient range:    {:.1} - {:.1} °C",
        window.low, window.high
    );
    if let Some(policy) = result.aggregation() {
        let _ = writeln!(
            out,
            "Degenerate:        {} variants, {} Tm reported",
            result.variant_count(),
            policy
        );
    }
    let _ = writeln!(out, "Polymerase:        {}", result.polymerase());
    let _ = writeln!(
        out,
        "Conditions:        {} µM primer, {} mM Na⁺, {} mM Mg²⁺, {} mM dNTP",
        conditions.primer_conc, conditions.salt_conc, conditions.mg_conc, conditions.dntp_conc
    );
    if result.exceeds_recommended_length() {
        let _ = writeln!(
            out,
            "Warning:           sequence is longer than a typical primer; Tm may be less accurate."
        );
    }
    out
}
