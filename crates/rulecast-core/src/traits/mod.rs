pub mod predictor;
pub mod rule_source;

pub use predictor::IPredictor;
pub use rule_source::IRuleSource;
