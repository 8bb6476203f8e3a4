//! Slot layout and the paths characters travel along during a move.

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::SlotIndex;
use crate::mechanics::MoveType;

/// A point in presentation space (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    pub fn lerp(a: Point, b: Point, t: f32) -> Point {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Where each slot sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingLayout {
    pub center: Point,
    pub radius: f32,
    pub slots: usize,
    /// Angle of slot 0 in radians; defaults to straight up.
    pub start_angle: f32,
}

impl RingLayout {
    pub fn new(center: Point, radius: f32, slots: usize) -> Self {
        Self {
            center,
            radius,
            slots,
            start_angle: FRAC_PI_2,
        }
    }

    /// Position of a slot. Indices advance clockwise.
    pub fn slot_position(&self, slot: SlotIndex) -> Point {
        let step = TAU / self.slots.max(1) as f32;
        let angle = self.start_angle - step * slot as f32;
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// How a character travels between two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathLaw {
    /// Straight through the middle of the ring.
    Linear,
    /// Around the center, the short way.
    ShortArc,
    /// Around the center, through the far side.
    LongArc,
}

impl PathLaw {
    pub fn for_move(move_type: MoveType) -> Self {
        match move_type {
            MoveType::Cross => PathLaw::Linear,
            MoveType::Shift => PathLaw::ShortArc,
            MoveType::DoSiDo => PathLaw::LongArc,
        }
    }

    /// Position at progress `t` (clamped to `[0, 1]`) between `from` and `to`.
    pub fn evaluate(self, from: Point, to: Point, center: Point, t: f32) -> Point {
        let t = t.clamp(0.0, 1.0);
        match self {
            PathLaw::Linear => Point::lerp(from, to, t),
            PathLaw::ShortArc => arc(from, to, center, t, false),
            PathLaw::LongArc => arc(from, to, center, t, true),
        }
    }
}

fn arc(from: Point, to: Point, center: Point, t: f32, long_way: bool) -> Point {
    let start = (from.y - center.y).atan2(from.x - center.x);
    let end = (to.y - center.y).atan2(to.x - center.x);

    // Normalise the sweep into (-PI, PI], the short way round.
    let mut sweep = (end - start).rem_euclid(TAU);
    if sweep > PI {
        sweep -= TAU;
    }
    if sweep == 0.0 {
        return Point::lerp(from, to, t);
    }
    if long_way {
        sweep -= TAU.copysign(sweep);
    }

    let radius = from.distance(center) + (to.distance(center) - from.distance(center)) * t;
    let angle = start + sweep * t;
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
