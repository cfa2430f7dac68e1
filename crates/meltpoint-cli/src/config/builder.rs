use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{ConditionArgs, EngineArgs};
use crate::error::{CliError, Result};
use meltpoint::core::models::conditions::{Polymerase, ReactionConditions};
use meltpoint::engine::config::EngineConfig;
use std::path::Path;

pub fn build_config(
    condition_args: &ConditionArgs,
    engine_args: &EngineArgs,
    config_path: Option<&Path>,
    threads: Option<usize>,
) -> Result<AppConfig> {
    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    merge(
        &DefaultsConfig::default(),
        file_config,
        condition_args,
        engine_args,
        threads,
    )
}

fn merge(
    defaults: &DefaultsConfig,
    file_config: FileConfig,
    condition_args: &ConditionArgs,
    engine_args: &EngineArgs,
    threads: Option<usize>,
) -> Result<AppConfig> {
    let cond_file = file_config.conditions.unwrap_or_default();
    let polymerase = condition_args
        .polymerase
        .as_deref()
        .or(cond_file.polymerase.as_deref())
        .map(Polymerase::from_name)
        .unwrap_or_else(|| defaults.polymerase.clone());

    let conditions = ReactionConditions::new(
        condition_args
            .primer_conc
            .or(cond_file.primer_conc)
            .unwrap_or(defaults.primer_conc),
        condition_args
            .salt_conc
            .or(cond_file.salt_conc)
            .unwrap_or(defaults.salt_conc),
        condition_args
            .mg_conc
            .or(cond_file.mg_conc)
            .unwrap_or(defaults.mg_conc),
        condition_args
            .dntp_conc
            .or(cond_file.dntp_conc)
            .unwrap_or(defaults.dntp_conc),
    )
    .with_polymerase(polymerase);
    conditions
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let engine_file = file_config.engine.unwrap_or_default();
    let mut builder = EngineConfig::builder()
        .expansion_cap(
            engine_args
                .expansion_cap
                .or(engine_file.expansion_cap)
                .unwrap_or(defaults.engine.expansion_cap),
        )
        .annealing_offset(
            engine_args
                .annealing_offset
                .or(engine_file.annealing_offset)
                .unwrap_or(defaults.engine.annealing_offset),
        )
        .gradient_span(
            engine_file
                .gradient_span
                .unwrap_or(defaults.engine.gradient_span),
        )
        .aggregation(
            engine_args
                .aggregation
                .or(engine_file.aggregation)
                .unwrap_or(defaults.engine.aggregation),
        )
        .recommended_max_length(
            engine_file
                .recommended_max_length
                .unwrap_or(defaults.engine.recommended_max_length),
        );
    if let Some(workers) = threads.or(engine_file.workers).or(defaults.engine.workers) {
        builder = builder.workers(workers);
    }
    let engine = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig { conditions, engine })
}
