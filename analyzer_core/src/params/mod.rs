//! Weapon parameter table - the read-only data store behind every analysis

mod raw;
mod weapon;

pub use weapon::{MainWeaponParams, SubWeaponParams};

use crate::curve::{CurveTable, EffectCurve};
use crate::error::AnalyzeError;
use crate::types::{InkConsumeType, SubWeaponId, WeaponClass, WeaponId};
use raw::RawParamsFile;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Parameter data that ships with the crate
const BUNDLED_PARAMS: &str = include_str!("../../data/weapon_params.json");

/// Error while loading or restructuring a parameter file
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameter file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate main weapon id {0}")]
    DuplicateWeapon(WeaponId),

    #[error("duplicate sub weapon id {0}")]
    DuplicateSubWeapon(SubWeaponId),

    #[error("main weapon {weapon}: more than one {kind:?} ink cost populated")]
    ConflictingInkConsume { weapon: WeaponId, kind: InkConsumeType },

    #[error("main weapon {weapon}: non-positive {kind:?} ink cost {value}")]
    NonPositiveInkConsume {
        weapon: WeaponId,
        kind: InkConsumeType,
        value: f64,
    },

    #[error("main weapon {weapon}: non-positive special point cost {value}")]
    NonPositiveSpecialPoint { weapon: WeaponId, value: f64 },

    #[error("sub weapon {sub_weapon}: non-positive ink cost {value}")]
    NonPositiveSubInkConsume { sub_weapon: SubWeaponId, value: f64 },

    #[error("{class:?} curve `{key}` rejected: {reason}")]
    InvalidCurve {
        class: WeaponClass,
        key: String,
        reason: String,
    },
}

/// The weapon parameter table
///
/// Loaded once and never mutated afterwards; analysis only reads from it,
/// so a single table can back any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct WeaponParamsTable {
    main_weapons: HashMap<WeaponId, MainWeaponParams>,
    sub_weapons: HashMap<SubWeaponId, SubWeaponParams>,
    curves: CurveTable,
}

impl WeaponParamsTable {
    /// The parameter table bundled with the crate
    pub fn bundled() -> Result<Self, ParamsError> {
        Self::from_json_str(BUNDLED_PARAMS)
    }

    /// Parse and restructure a parameter file from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let raw: RawParamsFile = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse and restructure a parameter file read from disk
    pub fn from_json_file(path: &Path) -> Result<Self, ParamsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn from_raw(raw: RawParamsFile) -> Result<Self, ParamsError> {
        let mut main_weapons = HashMap::with_capacity(raw.main_weapons.len());
        for row in raw.main_weapons {
            let params = row.into_params()?;
            let id = params.id;
            if main_weapons.insert(id, params).is_some() {
                return Err(ParamsError::DuplicateWeapon(id));
            }
        }

        let mut sub_weapons = HashMap::with_capacity(raw.sub_weapons.len());
        for row in raw.sub_weapons {
            let params = row.into_params()?;
            let id = params.id;
            if sub_weapons.insert(id, params).is_some() {
                return Err(ParamsError::DuplicateSubWeapon(id));
            }
        }

        let mut curves = CurveTable::new();
        for (class, keyed) in raw.curves {
            for (key, points) in keyed {
                let curve = EffectCurve::from_points(points).map_err(|reason| {
                    ParamsError::InvalidCurve {
                        class,
                        key: key.clone(),
                        reason,
                    }
                })?;
                curves.insert(class, key, curve);
            }
        }

        Ok(WeaponParamsTable {
            main_weapons,
            sub_weapons,
            curves,
        })
    }

    /// Main weapon lookup; an unknown id is fatal, never defaulted
    pub fn main_weapon(&self, id: WeaponId) -> Result<&MainWeaponParams, AnalyzeError> {
        self.main_weapons
            .get(&id)
            .ok_or(AnalyzeError::WeaponNotFound(id))
    }

    /// Sub weapon lookup
    ///
    /// A main weapon referencing an id this fails for means the static
    /// data itself is corrupt; the failure surfaces at analysis time.
    pub fn sub_weapon(&self, id: SubWeaponId) -> Result<&SubWeaponParams, AnalyzeError> {
        self.sub_weapons
            .get(&id)
            .ok_or(AnalyzeError::SubWeaponNotFound(id))
    }

    /// Curve store for effect resolution
    pub fn curves(&self) -> &CurveTable {
        &self.curves
    }

    /// Ids of every main weapon in the table, ascending
    pub fn weapon_ids(&self) -> Vec<WeaponId> {
        let mut ids: Vec<_> = self.main_weapons.keys().copied().collect();
        ids.sort();
        ids
    }
}
