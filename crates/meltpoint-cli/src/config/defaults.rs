use meltpoint::core::models::conditions::{Polymerase, ReactionConditions};
use meltpoint::engine::config::EngineConfig;

/// Values used when neither the config file nor the command line sets a field.
pub struct DefaultsConfig {
    pub primer_conc: f64,
    pub salt_conc: f64,
    pub mg_conc: f64,
    pub dntp_conc: f64,
    pub polymerase: Polymerase,
    pub engine: EngineConfig,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let conditions = ReactionConditions::default();
        Self {
            primer_conc: conditions.primer_conc,
            salt_conc: conditions.salt_conc,
            mg_conc: conditions.mg_conc,
            dntp_conc: conditions.dntp_conc,
            polymerase: conditions.polymerase,
            engine: EngineConfig::default(),
        }
    }
}
