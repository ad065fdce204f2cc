//! Ship state: section coordinates and accumulated damage.

use crate::common::Coord;
use core::fmt;
use std::collections::BTreeSet;

/// A placed ship: its name, section coordinates and damaged sections.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    name: &'static str,
    sections: Vec<Coord>,
    damaged: BTreeSet<Coord>,
}

impl Ship {
    /// Create an undamaged ship occupying `sections`.
    pub fn new(name: &'static str, sections: Vec<Coord>) -> Self {
        Ship {
            name,
            sections,
            damaged: BTreeSet::new(),
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of sections (the ship's length).
    pub fn length(&self) -> usize {
        self.sections.len()
    }

    /// Section coordinates in placement order.
    pub fn sections(&self) -> &[Coord] {
        &self.sections
    }

    /// Whether `coord` is one of this ship's sections.
    pub fn has_section(&self, coord: Coord) -> bool {
        self.sections.contains(&coord)
    }

    /// Damaged section coordinates.
    pub fn damaged(&self) -> impl Iterator<Item = Coord> + '_ {
        self.damaged.iter().copied()
    }

    /// A ship is alive while at least one section is undamaged.
    pub fn is_alive(&self) -> bool {
        self.damaged.len() < self.sections.len()
    }

    /// Mark `coord` damaged. The caller has already checked that `coord`
    /// is a section of this ship.
    pub(crate) fn record_damage(&mut self, coord: Coord) {
        self.damaged.insert(coord);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, damaged: {}, alive: {} }}",
            self.name,
            self.sections.len(),
            self.damaged.len(),
            self.is_alive(),
        )
    }
}
