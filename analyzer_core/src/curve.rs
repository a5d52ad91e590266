//! Effect curves - ability points to effect multipliers, per weapon class

use crate::build::AbilityPoints;
use crate::error::AnalyzeError;
use crate::params::MainWeaponParams;
use crate::types::{Ability, WeaponClass};
use std::collections::HashMap;

/// Multiplier pair returned by curve resolution
///
/// `base_effect` is the curve value at zero AP, i.e. the unmodified game
/// constant; `effect` is the value at the queried AP total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectResult {
    pub base_effect: f64,
    pub effect: f64,
}

/// Named curve selector
///
/// Renders to the literal key strings the parameter table stores curves
/// under. The strings are game-data identifiers and must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKey {
    /// Special-gauge fill rate, driven by special-charge-up
    IncreaseRtSpecial,
    /// Gauge fraction lost on respawn, driven by special-saver
    SpecialGaugeRtRestart,
    /// Main weapon ink consumption rate, driven by ink-saver-main
    ConsumeRtMain,
    /// Sub weapon ink consumption rate at the sub's save-level tier
    ConsumeRtSub { save_level: u8 },
}

impl CurveKey {
    /// The literal key string the table stores this curve under
    pub fn table_key(&self) -> String {
        match self {
            CurveKey::IncreaseRtSpecial => "IncreaseRt_Special".to_string(),
            CurveKey::SpecialGaugeRtRestart => "SpecialGaugeRt_Restart".to_string(),
            CurveKey::ConsumeRtMain => "ConsumeRt_Main".to_string(),
            CurveKey::ConsumeRtSub { save_level } => format!("ConsumeRt_Sub_Lv{}", save_level),
        }
    }
}

/// One effect curve: ordered (AP breakpoint, multiplier) pairs
///
/// Evaluation follows the game's step rule: the value for an AP total is
/// the multiplier of the last breakpoint at or below it. With breakpoints
/// at 0, 10 and 20, an AP total of 15 resolves to the multiplier at 10.
/// The first breakpoint always sits at AP 0, so evaluation is total for
/// any non-negative AP; [`EffectCurve::from_points`] enforces that shape.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectCurve {
    points: Vec<(f64, f64)>,
}

impl EffectCurve {
    /// Build a curve from breakpoint pairs, rejecting malformed shapes
    ///
    /// Requires at least one pair, the first at AP 0, strictly ascending
    /// breakpoints, and finite positive multipliers.
    pub fn from_points(points: Vec<(f64, f64)>) -> Result<Self, String> {
        let first = match points.first() {
            Some(first) => first,
            None => return Err("curve has no breakpoints".to_string()),
        };
        if first.0 != 0.0 {
            return Err(format!("first breakpoint at AP {} instead of 0", first.0));
        }
        for pair in points.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(format!(
                    "breakpoints not strictly ascending at AP {}",
                    pair[1].0
                ));
            }
        }
        for &(ap, multiplier) in &points {
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(format!("multiplier {} at AP {} out of range", multiplier, ap));
            }
        }
        Ok(EffectCurve { points })
    }

    /// Curve value at zero AP
    pub fn base_effect(&self) -> f64 {
        self.points[0].1
    }

    /// Curve value at `ap`: the multiplier of the last breakpoint at or
    /// below `ap`
    pub fn evaluate(&self, ap: f64) -> f64 {
        let mut value = self.points[0].1;
        for &(breakpoint, multiplier) in &self.points[1..] {
            if breakpoint <= ap {
                value = multiplier;
            } else {
                break;
            }
        }
        value
    }
}

/// Two-level curve store: weapon class, then key string
///
/// Per-class variation is pure data. Two classes that behave differently
/// simply carry different breakpoint tables under the same key; nothing
/// branches on the class anywhere downstream.
#[derive(Debug, Clone, Default)]
pub struct CurveTable {
    curves: HashMap<WeaponClass, HashMap<String, EffectCurve>>,
}

impl CurveTable {
    pub fn new() -> Self {
        CurveTable {
            curves: HashMap::new(),
        }
    }

    /// Insert one curve under (class, key), replacing any previous entry
    pub fn insert(&mut self, class: WeaponClass, key: impl Into<String>, curve: EffectCurve) {
        self.curves.entry(class).or_default().insert(key.into(), curve);
    }

    /// Fetch the curve for (class, key)
    ///
    /// A missing entry is fatal: the caller asked for a combination the
    /// static data does not define, and no multiplier may be invented.
    pub fn curve(&self, class: WeaponClass, key: &CurveKey) -> Result<&EffectCurve, AnalyzeError> {
        let table_key = key.table_key();
        self.curves
            .get(&class)
            .and_then(|keyed| keyed.get(&table_key))
            .ok_or(AnalyzeError::CurveNotFound {
                class,
                key: table_key,
            })
    }

    /// Resolve an ability's effect against a named curve for a weapon
    ///
    /// AP for `ability` is read from `points`; an ability with no points
    /// resolves at AP 0 and the result collapses to the base effect.
    pub fn resolve(
        &self,
        points: &AbilityPoints,
        ability: Ability,
        key: &CurveKey,
        weapon: &MainWeaponParams,
    ) -> Result<EffectResult, AnalyzeError> {
        let curve = self.curve(weapon.class, key)?;
        Ok(EffectResult {
            base_effect: curve.base_effect(),
            effect: curve.evaluate(points.ap(ability)),
        })
    }
}
