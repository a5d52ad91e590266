//! Prelude module for convenient imports
//!
//! ```rust
//! use analyzer_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Ability, InkConsumeType, SpecialWeaponId, SubWeaponId, WeaponClass, WeaponId};

// Builds
pub use crate::build::{build_to_ability_points, AbilityPoints, GearBuild, GearPiece};

// Parameter table and curves
pub use crate::curve::{CurveKey, CurveTable, EffectCurve, EffectResult};
pub use crate::params::{MainWeaponParams, SubWeaponParams, WeaponParamsTable};

// Analysis
pub use crate::stats::{analyze_ability_points, analyze_build, AnalyzedBuild, BuildStats, InkTankOption, Stat};

// Errors
pub use crate::error::AnalyzeError;
pub use crate::params::ParamsError;

// Config
pub use crate::config::{load_analyzer_config, parse_analyzer_config, AnalyzerConfig};
