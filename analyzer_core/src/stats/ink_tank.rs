//! Ink tank matrix - how far one tank stretches per action type

use super::{round2, StatInput};
use crate::curve::CurveKey;
use crate::error::AnalyzeError;
use crate::types::{Ability, InkConsumeType};
use serde::{Deserialize, Serialize};

/// One row of the ink tank matrix: main-weapon uses left on a full tank
/// after `subs_used` sub-weapon uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InkTankOption {
    pub subs_used: u32,
    #[serde(rename = "type")]
    pub kind: InkConsumeType,
    pub value: f64,
}

/// Sub-weapon consumption after ink-saver-sub
struct SubConsume {
    /// Tank fraction per sub use
    ink_consume: f64,
    /// Whole sub uses a full tank can fund
    max_uses_from_full_tank: u32,
}

/// Enumerate the full ink tank matrix
///
/// Outer loop: sub-weapon uses, 0 up to what a full tank can fund. Inner
/// loop: action types in declaration order. Actions the weapon has no
/// parameter for are skipped, not zero-filled; a blaster never swings and
/// a roller never taps a charge.
pub(super) fn full_ink_tank_options(
    input: &StatInput<'_>,
) -> Result<Vec<InkTankOption>, AnalyzeError> {
    let sub = sub_weapon_consume(input)?;
    let mut options = Vec::new();

    for subs_used in 0..=sub.max_uses_from_full_tank {
        for &kind in InkConsumeType::all() {
            let main_consume = match main_ink_consume(input, kind)? {
                Some(cost) => cost,
                None => continue,
            };

            let remainder = 1.0 - sub.ink_consume * f64::from(subs_used);
            options.push(InkTankOption {
                subs_used,
                kind,
                value: round2(remainder / main_consume),
            });
        }
    }

    Ok(options)
}

/// Per-use sub cost with ink-saver-sub applied, plus the sub-use budget
///
/// Two provisional fallbacks live here while the source table is still
/// being filled in: a configured default ink cost and a configured default
/// save-level tier. Both are logged on every use. An effective cost that
/// is not a positive finite number fails the analysis.
fn sub_weapon_consume(input: &StatInput<'_>) -> Result<SubConsume, AnalyzeError> {
    let save_level = match input.sub.ink_save_level {
        Some(level) => level,
        None => {
            log::warn!(
                "sub weapon {} ({}) has no SubInkSaveLv; assuming tier {}",
                input.sub.id,
                input.sub.name,
                input.config.sub_ink_save_level_fallback
            );
            input.config.sub_ink_save_level_fallback
        }
    };

    let effects = input.curves.resolve(
        input.ability_points,
        Ability::InkSaverSub,
        &CurveKey::ConsumeRtSub { save_level },
        input.main,
    )?;

    let base_consume = match input.sub.ink_consume {
        Some(cost) => cost,
        None => {
            log::warn!(
                "sub weapon {} ({}) has no InkConsume; assuming {}",
                input.sub.id,
                input.sub.name,
                input.config.sub_ink_consume_fallback
            );
            input.config.sub_ink_consume_fallback
        }
    };

    let ink_consume = base_consume * effects.effect;
    if !ink_consume.is_finite() || ink_consume <= 0.0 {
        return Err(AnalyzeError::NonPositiveSubInkCost {
            sub_weapon: input.sub.id,
            value: ink_consume,
        });
    }

    Ok(SubConsume {
        ink_consume,
        max_uses_from_full_tank: (1.0 / ink_consume).floor() as u32,
    })
}

/// Ink cost of one action with ink-saver-main applied
///
/// `None` means the weapon has no parameter for the action; the matrix
/// skips the row entirely.
fn main_ink_consume(
    input: &StatInput<'_>,
    kind: InkConsumeType,
) -> Result<Option<f64>, AnalyzeError> {
    let base = match input.main.ink_consume_for(kind) {
        Some(cost) => cost,
        None => return Ok(None),
    };

    let effects = input.curves.resolve(
        input.ability_points,
        Ability::InkSaverMain,
        &CurveKey::ConsumeRtMain,
        input.main,
    )?;

    Ok(Some(base * effects.effect))
}
