//! analyzer_core - Ability-effect resolution for gear builds
//!
//! This library provides:
//! - WeaponParamsTable: read-only weapon parameters and effect curves
//! - CurveTable: ability points to effect multipliers, per weapon class
//! - analyze_build: derived statistics for one build on one weapon

pub mod build;
pub mod config;
pub mod curve;
pub mod error;
pub mod params;
pub mod prelude;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use build::{build_to_ability_points, AbilityPoints, GearBuild, GearPiece};
pub use config::{load_analyzer_config, parse_analyzer_config, AnalyzerConfig, ConfigError};
pub use curve::{CurveKey, CurveTable, EffectCurve, EffectResult};
pub use error::AnalyzeError;
pub use params::{MainWeaponParams, ParamsError, SubWeaponParams, WeaponParamsTable};
pub use stats::{
    analyze_ability_points, analyze_build, AnalyzedBuild, BuildStats, InkTankOption, Stat,
    WeaponSummary,
};
pub use types::{
    Ability, InkConsumeType, SpecialWeaponId, SubWeaponId, WeaponClass, WeaponId,
};
