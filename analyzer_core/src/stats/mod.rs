//! Build statistics - derived numbers for one build on one weapon

mod ink_tank;
mod special_gauge;

pub use ink_tank::InkTankOption;

use crate::build::{build_to_ability_points, AbilityPoints, GearBuild};
use crate::config::AnalyzerConfig;
use crate::curve::CurveTable;
use crate::error::AnalyzeError;
use crate::params::{MainWeaponParams, SubWeaponParams, WeaponParamsTable};
use crate::types::{Ability, SpecialWeaponId, SubWeaponId, WeaponId};
use serde::{Deserialize, Serialize};

/// One derived statistic with its zero-AP baseline and provenance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Value of the statistic with no ability points allocated
    pub base_value: f64,
    /// Value under the analyzed build
    pub value: f64,
    /// Ability that drives the difference between the two
    pub modified_by: Ability,
}

/// Sub and special weapon carried by the analyzed main weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSummary {
    pub sub_weapon_id: SubWeaponId,
    pub special_weapon_id: SpecialWeaponId,
}

/// The statistics block of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Points needed to fill the special gauge
    pub special_point: Stat,
    /// Percentage of the special gauge kept through a respawn
    pub special_saved_after_death: Stat,
    /// Main-weapon uses left on a full tank, per action type and per
    /// number of sub-weapon uses
    pub full_ink_tank_options: Vec<InkTankOption>,
    /// Frames of halted ink recovery after a sub-weapon use, verbatim from
    /// the sub's parameters
    pub sub_weapon_white_ink_frames: u32,
}

/// Full analysis report for one (build, weapon) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedBuild {
    pub weapon: WeaponSummary,
    pub stats: BuildStats,
}

/// Everything a single derivation reads, borrowed for one analysis call
pub(crate) struct StatInput<'a> {
    pub main: &'a MainWeaponParams,
    pub sub: &'a SubWeaponParams,
    pub curves: &'a CurveTable,
    pub ability_points: &'a AbilityPoints,
    pub config: &'a AnalyzerConfig,
}

/// Round to two decimals, half up - the display resolution of
/// effect-derived values
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Analyze a gear build against one main weapon
///
/// Aggregates the build's slots into ability points, then derives every
/// statistic. Fails when `weapon_id` has no row or when the weapon's
/// declared sub weapon is missing; a failed analysis never yields a
/// partial report.
pub fn analyze_build(
    table: &WeaponParamsTable,
    config: &AnalyzerConfig,
    build: &GearBuild,
    weapon_id: WeaponId,
) -> Result<AnalyzedBuild, AnalyzeError> {
    let ability_points = build_to_ability_points(build);
    analyze_ability_points(table, config, &ability_points, weapon_id)
}

/// Analyze with ability points the caller has already aggregated
pub fn analyze_ability_points(
    table: &WeaponParamsTable,
    config: &AnalyzerConfig,
    ability_points: &AbilityPoints,
    weapon_id: WeaponId,
) -> Result<AnalyzedBuild, AnalyzeError> {
    // Step 1: Resolve the weapon pair; both lookups are fatal on miss
    let main = table.main_weapon(weapon_id)?;
    let sub = table.sub_weapon(main.sub_weapon_id)?;

    let input = StatInput {
        main,
        sub,
        curves: table.curves(),
        ability_points,
        config,
    };

    // Step 2: Derive each statistic from the same input
    let special_point = special_gauge::special_point_cost(&input)?;
    let special_saved_after_death = special_gauge::special_saved_after_death(&input)?;
    let full_ink_tank_options = ink_tank::full_ink_tank_options(&input)?;

    Ok(AnalyzedBuild {
        weapon: WeaponSummary {
            sub_weapon_id: main.sub_weapon_id,
            special_weapon_id: main.special_weapon_id,
        },
        stats: BuildStats {
            special_point,
            special_saved_after_death,
            full_ink_tank_options,
            sub_weapon_white_ink_frames: sub.ink_recover_stop_frames,
        },
    })
}
