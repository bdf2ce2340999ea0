pub mod error;
pub mod context;
pub mod evaluation;
pub mod threat;
pub mod decision;
pub mod explain;
pub mod recommendation;
pub mod advisor;
pub mod analyzer;


pub use advisor::Advisor;
pub use analyzer::BattleAnalyzer;
pub use error::AdvisorError;
pub use recommendation::{Alternative, BattleRecommendation, ModelInfo};
