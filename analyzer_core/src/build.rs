//! Gear builds and ability-point aggregation

use crate::types::Ability;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ability points granted by a filled main slot
pub const MAIN_SLOT_AP: f64 = 10.0;

/// Ability points granted by a filled sub slot
pub const SUB_SLOT_AP: f64 = 3.0;

/// One gear piece: a main slot and three sub slots
///
/// Empty slots are legal. A build in progress contributes only what is
/// filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearPiece {
    pub main: Option<Ability>,
    pub subs: [Option<Ability>; 3],
}

impl GearPiece {
    /// A fully filled piece
    pub fn new(main: Ability, subs: [Ability; 3]) -> Self {
        GearPiece {
            main: Some(main),
            subs: subs.map(Some),
        }
    }

    /// A piece running one ability in every slot
    pub fn uniform(ability: Ability) -> Self {
        GearPiece::new(ability, [ability; 3])
    }
}

/// A full gear build: head, clothes and shoes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearBuild {
    pub head: GearPiece,
    pub clothes: GearPiece,
    pub shoes: GearPiece,
}

impl GearBuild {
    pub fn pieces(&self) -> [&GearPiece; 3] {
        [&self.head, &self.clothes, &self.shoes]
    }
}

/// Total ability points per ability
///
/// Produced by [`build_to_ability_points`], or assembled directly by a
/// caller that does its own slot bookkeeping. Reading an ability that has
/// no entry yields zero: allocating nothing to an ability is the baseline,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityPoints(HashMap<Ability, f64>);

impl AbilityPoints {
    pub fn new() -> Self {
        AbilityPoints(HashMap::new())
    }

    /// Add points for an ability, accumulating with what is already there
    pub fn add(&mut self, ability: Ability, points: f64) {
        *self.0.entry(ability).or_insert(0.0) += points;
    }

    /// Points allocated to `ability`, zero when none
    pub fn ap(&self, ability: Ability) -> f64 {
        self.0.get(&ability).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Ability, f64)> for AbilityPoints {
    fn from_iter<I: IntoIterator<Item = (Ability, f64)>>(iter: I) -> Self {
        let mut points = AbilityPoints::new();
        for (ability, ap) in iter {
            points.add(ability, ap);
        }
        points
    }
}

/// Aggregate a gear build into total ability points
///
/// Each piece's main slot grants [`MAIN_SLOT_AP`] and every filled sub slot
/// grants [`SUB_SLOT_AP`]; a repeated ability accumulates across slots and
/// pieces.
pub fn build_to_ability_points(build: &GearBuild) -> AbilityPoints {
    let mut points = AbilityPoints::new();
    for piece in build.pieces() {
        if let Some(main) = piece.main {
            points.add(main, MAIN_SLOT_AP);
        }
        for sub in piece.subs.iter().flatten() {
            points.add(*sub, SUB_SLOT_AP);
        }
    }
    points
}
