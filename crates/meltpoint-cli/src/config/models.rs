use meltpoint::core::models::conditions::ReactionConditions;
use meltpoint::engine::config::EngineConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub conditions: ReactionConditions,
    pub engine: EngineConfig,
}
