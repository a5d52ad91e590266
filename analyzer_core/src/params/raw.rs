//! Raw serde mirror of the parameter file
//!
//! The file keeps the source table's sparse optional fields under their
//! original names. Restructuring into the tagged records happens here,
//! once, at load; the rest of the engine never sees the sparse form.

use super::weapon::{MainWeaponParams, SubWeaponParams};
use super::ParamsError;
use crate::types::{InkConsumeType, SpecialWeaponId, SubWeaponId, WeaponClass, WeaponId};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Top-level shape of the parameter file
#[derive(Debug, Clone, Deserialize)]
pub struct RawParamsFile {
    pub main_weapons: Vec<RawMainWeapon>,
    pub sub_weapons: Vec<RawSubWeapon>,
    /// class, then key string, then breakpoint pairs
    pub curves: HashMap<WeaponClass, HashMap<String, Vec<(f64, f64)>>>,
}

/// One main weapon row, field names as in the source table
#[derive(Debug, Clone, Deserialize)]
pub struct RawMainWeapon {
    pub id: u32,
    pub name: String,
    pub class: WeaponClass,
    #[serde(rename = "subWeaponId")]
    pub sub_weapon_id: u32,
    #[serde(rename = "specialWeaponId")]
    pub special_weapon_id: u32,
    #[serde(rename = "SpecialPoint")]
    pub special_point: f64,
    #[serde(rename = "InkConsume")]
    pub ink_consume: Option<f64>,
    #[serde(rename = "InkConsume_SwingParam")]
    pub ink_consume_swing: Option<f64>,
    #[serde(rename = "InkConsume_WeaponSwingParam")]
    pub ink_consume_weapon_swing: Option<f64>,
    #[serde(rename = "InkConsumeMinCharge")]
    pub ink_consume_min_charge: Option<f64>,
    #[serde(rename = "InkConsumeMinCharge_ChargeParam")]
    pub ink_consume_min_charge_charge: Option<f64>,
    #[serde(rename = "InkConsumeFullCharge")]
    pub ink_consume_full_charge: Option<f64>,
    #[serde(rename = "InkConsumeFullCharge_ChargeParam")]
    pub ink_consume_full_charge_charge: Option<f64>,
    #[serde(rename = "InkConsume_WeaponWideSwingParam")]
    pub ink_consume_wide_swing: Option<f64>,
    #[serde(rename = "InkConsume_WeaponVerticalSwingParam")]
    pub ink_consume_vertical_swing: Option<f64>,
    #[serde(rename = "InkConsume_SideStepParam")]
    pub ink_consume_side_step: Option<f64>,
    #[serde(rename = "InkConsumeUmbrella_WeaponShelterCanopyParam")]
    pub ink_consume_umbrella: Option<f64>,
    #[serde(rename = "InkConsumeMaxPerFrame_WeaponRollParam")]
    pub ink_consume_roll_max: Option<f64>,
    #[serde(rename = "InkConsumeMinPerFrame_WeaponRollParam")]
    pub ink_consume_roll_min: Option<f64>,
}

impl RawMainWeapon {
    /// Candidate fields for `kind`, in the source table's fallback order
    ///
    /// The first populated candidate is authoritative. A row populating
    /// more than one candidate of the same action is rejected at load.
    fn candidates(&self, kind: InkConsumeType) -> [Option<f64>; 2] {
        match kind {
            InkConsumeType::Normal => [self.ink_consume, None],
            InkConsumeType::Swing => [self.ink_consume_swing, self.ink_consume_weapon_swing],
            InkConsumeType::TapShot => [
                self.ink_consume_min_charge,
                self.ink_consume_min_charge_charge,
            ],
            InkConsumeType::FullCharge => [
                self.ink_consume_full_charge,
                self.ink_consume_full_charge_charge,
            ],
            InkConsumeType::HorizontalSwing => [self.ink_consume_wide_swing, None],
            InkConsumeType::VerticalSwing => [self.ink_consume_vertical_swing, None],
            InkConsumeType::DualieRoll => [self.ink_consume_side_step, None],
            InkConsumeType::ShieldLaunch => [self.ink_consume_umbrella, None],
            InkConsumeType::RollMax => [self.ink_consume_roll_max, None],
            InkConsumeType::RollMin => [self.ink_consume_roll_min, None],
        }
    }

    /// Restructure into the tagged form, enforcing one cost per action
    pub fn into_params(self) -> Result<MainWeaponParams, ParamsError> {
        let id = WeaponId(self.id);

        if !self.special_point.is_finite() || self.special_point <= 0.0 {
            return Err(ParamsError::NonPositiveSpecialPoint {
                weapon: id,
                value: self.special_point,
            });
        }

        let mut ink_consume = BTreeMap::new();
        for &kind in InkConsumeType::all() {
            let candidates = self.candidates(kind);
            if candidates.iter().flatten().count() > 1 {
                return Err(ParamsError::ConflictingInkConsume { weapon: id, kind });
            }
            if let Some(cost) = candidates.into_iter().flatten().next() {
                if !cost.is_finite() || cost <= 0.0 {
                    return Err(ParamsError::NonPositiveInkConsume {
                        weapon: id,
                        kind,
                        value: cost,
                    });
                }
                ink_consume.insert(kind, cost);
            }
        }

        Ok(MainWeaponParams {
            id,
            name: self.name,
            class: self.class,
            sub_weapon_id: SubWeaponId(self.sub_weapon_id),
            special_weapon_id: SpecialWeaponId(self.special_weapon_id),
            special_point: self.special_point,
            ink_consume,
        })
    }
}

/// One sub weapon row, field names as in the source table
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubWeapon {
    pub id: u32,
    pub name: String,
    #[serde(rename = "InkConsume")]
    pub ink_consume: Option<f64>,
    #[serde(rename = "InkRecoverStop")]
    pub ink_recover_stop: u32,
    #[serde(rename = "SubInkSaveLv")]
    pub ink_save_level: Option<u8>,
}

impl RawSubWeapon {
    pub fn into_params(self) -> Result<SubWeaponParams, ParamsError> {
        let id = SubWeaponId(self.id);

        if let Some(cost) = self.ink_consume {
            if !cost.is_finite() || cost <= 0.0 {
                return Err(ParamsError::NonPositiveSubInkConsume {
                    sub_weapon: id,
                    value: cost,
                });
            }
        }

        Ok(SubWeaponParams {
            id,
            name: self.name,
            ink_consume: self.ink_consume,
            ink_recover_stop_frames: self.ink_recover_stop,
            ink_save_level: self.ink_save_level,
        })
    }
}
