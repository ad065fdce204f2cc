//! Adaptive targeting: hunt randomly, probe around a hit, then walk the axis.
//!
//! The engine only ever sees its own move history and the outcomes reported
//! back to it. It has no access to the defender's grid, so `Occupied` and
//! `Empty` cells look the same until fired upon.

use crate::common::{Coord, GameError, Orientation, ShotOutcome};
use crate::grid::{CellStatus, Grid};
use log::debug;
use rand::Rng;
use serde::Serialize;

/// What the engine is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetMode {
    /// Firing at uniformly random untried cells.
    Hunting,
    /// Probing the orthogonal neighbors of a single confirmed hit.
    Pattern,
    /// Walking the axis through two confirmed hits on the same ship.
    AxisTargeting,
}

/// Neighbor probe order in `Pattern` mode: down, up, right, left.
const PROBE_ORDER: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Per-opponent attack state machine.
///
/// Call [`next_move`](Self::next_move) for a coordinate, fire at it, then
/// report the true outcome with [`record_outcome`](Self::record_outcome)
/// before asking for another move.
pub struct TargetingEngine {
    /// Own shot history: `Empty` means untried.
    shots: Grid,
    mode: TargetMode,
    origin_hit: Option<Coord>,
    subsequent_hit: Option<Coord>,
    orientation: Option<Orientation>,
    pending: Option<Coord>,
    last_outcome: Option<ShotOutcome>,
}

impl TargetingEngine {
    /// Engine for a `grid_size`×`grid_size` opponent board.
    pub fn new(grid_size: usize) -> Self {
        TargetingEngine {
            shots: Grid::new(grid_size),
            mode: TargetMode::Hunting,
            origin_hit: None,
            subsequent_hit: None,
            orientation: None,
            pending: None,
            last_outcome: None,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Inferred axis of the ship being pursued, once known.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    fn untried(&self, coord: Coord) -> bool {
        self.shots.status_at(coord) == Ok(CellStatus::Empty)
    }

    fn reset_pursuit(&mut self) {
        self.mode = TargetMode::Hunting;
        self.origin_hit = None;
        self.subsequent_hit = None;
        self.orientation = None;
    }

    /// Propose the next attack coordinate: in bounds and never previously
    /// targeted. Fails with `ProtocolViolation` when the previous move still
    /// has no reported outcome, or when every cell has been tried.
    pub fn next_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        if self.pending.is_some() {
            return Err(GameError::ProtocolViolation(
                "next_move called before the previous outcome was reported",
            ));
        }
        let mv = match self.mode {
            TargetMode::Hunting => self.hunt(rng)?,
            TargetMode::Pattern => self.pattern_move(rng)?,
            TargetMode::AxisTargeting => self.axis_move(rng)?,
        };
        self.pending = Some(mv);
        Ok(mv)
    }

    /// Uniform random choice among untried cells.
    fn hunt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        let size = self.shots.size();
        let untried: Vec<Coord> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Coord::new(row, col)))
            .filter(|&c| self.untried(c))
            .collect();
        if untried.is_empty() {
            return Err(GameError::ProtocolViolation("no untried cells remain"));
        }
        Ok(untried[rng.random_range(0..untried.len())])
    }

    /// First untried in-bounds neighbor of the origin hit, in probe order.
    /// Boxed in on all four sides means the pursuit is abandoned and the
    /// engine drops back to hunting.
    fn pattern_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        let origin = self
            .origin_hit
            .ok_or(GameError::ProtocolViolation("pattern mode without an origin hit"))?;
        for (d_row, d_col) in PROBE_ORDER {
            if let Some(probe) = origin.offset(d_row, d_col) {
                if self.untried(probe) {
                    return Ok(probe);
                }
            }
        }
        debug!("no untried neighbor around {}, back to hunting", origin);
        self.reset_pursuit();
        self.hunt(rng)
    }

    /// Extend past the most recent hit along the inferred axis, or pivot to
    /// walk backward from the origin hit, skipping cells of the same ship.
    fn axis_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        let origin = self
            .origin_hit
            .ok_or(GameError::ProtocolViolation("axis mode without an origin hit"))?;
        let recent = self
            .subsequent_hit
            .ok_or(GameError::ProtocolViolation("axis mode without a second hit"))?;
        let (d_row, d_col) = match self.orientation {
            Some(Orientation::Horizontal) => (0, 1),
            Some(Orientation::Vertical) => (1, 0),
            None => {
                return Err(GameError::ProtocolViolation(
                    "axis mode without an inferred orientation",
                ))
            }
        };

        // Forward only while the streak is unbroken.
        if !matches!(self.last_outcome, Some(ShotOutcome::Miss)) {
            if let Some(forward) = recent.offset(d_row, d_col) {
                if self.untried(forward) {
                    return Ok(forward);
                }
            }
        }

        // Backward from the origin, stepping over this ship's earlier hits.
        let mut cursor = origin.offset(-d_row, -d_col);
        while let Some(c) = cursor {
            match self.shots.status_at(c) {
                Ok(CellStatus::Empty) => return Ok(c),
                Ok(CellStatus::Hit) => cursor = c.offset(-d_row, -d_col),
                _ => break,
            }
        }

        debug!("axis through {} exhausted, back to hunting", origin);
        self.reset_pursuit();
        self.hunt(rng)
    }

    /// Report the true outcome of the move most recently proposed.
    ///
    /// Must be called exactly once per move, with the same coordinate the
    /// engine proposed; anything else fails with `ProtocolViolation`.
    pub fn record_outcome(&mut self, coord: Coord, outcome: ShotOutcome) -> Result<(), GameError> {
        match self.pending {
            None => {
                return Err(GameError::ProtocolViolation(
                    "outcome reported with no move outstanding",
                ))
            }
            Some(p) if p != coord => {
                return Err(GameError::ProtocolViolation(
                    "outcome reported for a coordinate that was not proposed",
                ))
            }
            Some(_) => self.pending = None,
        }

        let mark = match outcome {
            ShotOutcome::Miss => CellStatus::Miss,
            ShotOutcome::Hit | ShotOutcome::Sunk(_) => CellStatus::Hit,
        };
        self.shots.set_status(coord, mark)?;

        match outcome {
            // Covers the length-1 ship sunk straight from hunting: the
            // pursuit state never gets populated in the first place.
            ShotOutcome::Sunk(name) => {
                debug!("sunk {} at {}, back to hunting", name, coord);
                self.reset_pursuit();
            }
            ShotOutcome::Miss => {}
            ShotOutcome::Hit => match self.mode {
                TargetMode::Hunting => {
                    self.origin_hit = Some(coord);
                    self.mode = TargetMode::Pattern;
                    debug!("hit at {}, probing neighbors", coord);
                }
                TargetMode::Pattern => {
                    let origin = self.origin_hit.ok_or(GameError::ProtocolViolation(
                        "pattern mode without an origin hit",
                    ))?;
                    self.subsequent_hit = Some(coord);
                    self.orientation = Some(if origin.row == coord.row {
                        Orientation::Horizontal
                    } else {
                        Orientation::Vertical
                    });
                    self.mode = TargetMode::AxisTargeting;
                    debug!(
                        "second hit at {}, walking {:?} axis",
                        coord,
                        self.orientation
                    );
                }
                TargetMode::AxisTargeting => {
                    // The most recent hit becomes the forward frontier.
                    self.subsequent_hit = Some(coord);
                }
            },
        }
        self.last_outcome = Some(outcome);
        Ok(())
    }
}
