//! Structured weapon parameter records

use crate::types::{InkConsumeType, SpecialWeaponId, SubWeaponId, WeaponClass, WeaponId};
use std::collections::BTreeMap;

/// Parameters of one main weapon, after load-time restructuring
///
/// `ink_consume` is the tagged form of the source table's sparse optional
/// fields: at most one entry per action, keyed by the action it belongs
/// to. Downstream code looks an action up directly instead of probing
/// candidate field names.
#[derive(Debug, Clone, PartialEq)]
pub struct MainWeaponParams {
    pub id: WeaponId,
    /// Canonical development label, not a display string
    pub name: String,
    pub class: WeaponClass,
    pub sub_weapon_id: SubWeaponId,
    pub special_weapon_id: SpecialWeaponId,
    /// Base special-gauge cost in points
    pub special_point: f64,
    /// Ink cost per use (per frame for the roll entries), one per
    /// supported action
    pub ink_consume: BTreeMap<InkConsumeType, f64>,
}

impl MainWeaponParams {
    /// Ink cost for one action, `None` when the weapon does not perform it
    pub fn ink_consume_for(&self, kind: InkConsumeType) -> Option<f64> {
        self.ink_consume.get(&kind).copied()
    }

    /// Actions this weapon performs, in matrix row order
    pub fn supported_actions(&self) -> impl Iterator<Item = InkConsumeType> + '_ {
        InkConsumeType::all()
            .iter()
            .copied()
            .filter(|kind| self.ink_consume.contains_key(kind))
    }
}

/// Parameters of one sub weapon
#[derive(Debug, Clone, PartialEq)]
pub struct SubWeaponParams {
    pub id: SubWeaponId,
    /// Canonical development label, not a display string
    pub name: String,
    /// Ink cost per use as a fraction of the tank; `None` when the source
    /// table has no value yet and the configured fallback applies
    pub ink_consume: Option<f64>,
    /// Frames of halted ink recovery after use
    pub ink_recover_stop_frames: u32,
    /// Save-level tier selecting the `ConsumeRt_Sub_Lv{N}` curve; `None`
    /// when the source table has no value yet
    pub ink_save_level: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_actions_follow_matrix_order() {
        let mut ink_consume = BTreeMap::new();
        ink_consume.insert(InkConsumeType::RollMax, 0.001);
        ink_consume.insert(InkConsumeType::HorizontalSwing, 0.09);
        ink_consume.insert(InkConsumeType::VerticalSwing, 0.11);

        let weapon = MainWeaponParams {
            id: WeaponId(1000),
            name: "Ink Roller".to_string(),
            class: WeaponClass::Roller,
            sub_weapon_id: SubWeaponId(3),
            special_weapon_id: SpecialWeaponId(5),
            special_point: 180.0,
            ink_consume,
        };

        let actions: Vec<_> = weapon.supported_actions().collect();
        assert_eq!(
            actions,
            vec![
                InkConsumeType::HorizontalSwing,
                InkConsumeType::VerticalSwing,
                InkConsumeType::RollMax,
            ]
        );
        assert_eq!(weapon.ink_consume_for(InkConsumeType::Normal), None);
        assert_eq!(
            weapon.ink_consume_for(InkConsumeType::HorizontalSwing),
            Some(0.09)
        );
    }
}
