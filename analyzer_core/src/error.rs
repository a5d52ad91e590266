//! Analysis errors

use crate::types::{SubWeaponId, WeaponClass, WeaponId};
use thiserror::Error;

/// Fatal failure during build analysis
///
/// Every variant points at incomplete static data, an unvalidated id from
/// the caller, or an unusable configured fallback. Analysis stops rather
/// than substituting a default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    #[error("main weapon {0} not found in the parameter table")]
    WeaponNotFound(WeaponId),

    #[error("sub weapon {0} not found in the parameter table")]
    SubWeaponNotFound(SubWeaponId),

    #[error("no `{key}` effect curve for weapon class {class:?}")]
    CurveNotFound { class: WeaponClass, key: String },

    #[error("sub weapon {sub_weapon}: non-positive effective ink cost {value}")]
    NonPositiveSubInkCost { sub_weapon: SubWeaponId, value: f64 },
}
