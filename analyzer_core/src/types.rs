//! Core types specific to analyzer_core

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stackable gear ability
///
/// Only abilities that stack ability points appear here; fixed-effect
/// abilities never reach the effect curves and are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    // Ink economy
    InkSaverMain,
    InkSaverSub,
    InkRecoveryUp,
    // Mobility
    RunSpeedUp,
    SwimSpeedUp,
    // Special gauge
    SpecialChargeUp,
    SpecialSaver,
    SpecialPowerUp,
    // Respawn
    QuickRespawn,
    QuickSuperJump,
    // Utility
    SubPowerUp,
    InkResistanceUp,
    SubResistanceUp,
    IntensifyAction,
}

impl Ability {
    /// Get all stackable abilities
    pub fn all() -> &'static [Ability] {
        &[
            Ability::InkSaverMain,
            Ability::InkSaverSub,
            Ability::InkRecoveryUp,
            Ability::RunSpeedUp,
            Ability::SwimSpeedUp,
            Ability::SpecialChargeUp,
            Ability::SpecialSaver,
            Ability::SpecialPowerUp,
            Ability::QuickRespawn,
            Ability::QuickSuperJump,
            Ability::SubPowerUp,
            Ability::InkResistanceUp,
            Ability::SubResistanceUp,
            Ability::IntensifyAction,
        ]
    }
}

/// Weapon class scoping the effect curve tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    Shooter,
    Blaster,
    Roller,
    Brush,
    Charger,
    Slosher,
    Splatling,
    Dualie,
    Brella,
}

/// Ink-consuming action performed by a main weapon
///
/// Declaration order is the row order of the ink tank matrix within one
/// sub-use count; `all()` iterates in that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InkConsumeType {
    Normal,
    Swing,
    TapShot,
    FullCharge,
    HorizontalSwing,
    VerticalSwing,
    DualieRoll,
    ShieldLaunch,
    RollMax,
    RollMin,
}

impl InkConsumeType {
    /// Get all action types in matrix row order
    pub fn all() -> &'static [InkConsumeType] {
        &[
            InkConsumeType::Normal,
            InkConsumeType::Swing,
            InkConsumeType::TapShot,
            InkConsumeType::FullCharge,
            InkConsumeType::HorizontalSwing,
            InkConsumeType::VerticalSwing,
            InkConsumeType::DualieRoll,
            InkConsumeType::ShieldLaunch,
            InkConsumeType::RollMax,
            InkConsumeType::RollMin,
        ]
    }
}

/// Identifier for a main weapon row in the parameter table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WeaponId(pub u32);

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a sub weapon row in the parameter table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SubWeaponId(pub u32);

impl fmt::Display for SubWeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a special weapon
///
/// Carried through to reports untouched; no special-weapon parameters are
/// consulted during analysis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpecialWeaponId(pub u32);

impl fmt::Display for SpecialWeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
