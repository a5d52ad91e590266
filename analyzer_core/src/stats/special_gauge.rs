//! Special-gauge derivations - cost to fill and retention through death

use super::{round2, Stat, StatInput};
use crate::curve::CurveKey;
use crate::error::AnalyzeError;
use crate::types::Ability;

/// Points needed to fill the special gauge
///
/// Special-charge-up divides the weapon's base cost; the quotient always
/// rounds up, never to nearest. The displayed cost must not undercut what
/// the gauge actually charges.
pub(super) fn special_point_cost(input: &StatInput<'_>) -> Result<Stat, AnalyzeError> {
    const ABILITY: Ability = Ability::SpecialChargeUp;

    let effects = input.curves.resolve(
        input.ability_points,
        ABILITY,
        &CurveKey::IncreaseRtSpecial,
        input.main,
    )?;

    Ok(Stat {
        base_value: input.main.special_point,
        value: (input.main.special_point / effects.effect).ceil(),
        modified_by: ABILITY,
    })
}

/// Percentage of the special gauge kept through a respawn
///
/// The curve stores the gauge fraction lost; the report shows the fraction
/// kept, as a percentage. Base and modified values run through the same
/// transform so the pair stays comparable on one scale.
pub(super) fn special_saved_after_death(input: &StatInput<'_>) -> Result<Stat, AnalyzeError> {
    const ABILITY: Ability = Ability::SpecialSaver;

    let effects = input.curves.resolve(
        input.ability_points,
        ABILITY,
        &CurveKey::SpecialGaugeRtRestart,
        input.main,
    )?;

    Ok(Stat {
        base_value: saved_for_display(effects.base_effect),
        value: saved_for_display(effects.effect),
        modified_by: ABILITY,
    })
}

fn saved_for_display(effect: f64) -> f64 {
    round2((1.0 - effect) * 100.0)
}
