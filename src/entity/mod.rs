//! Capabilities of things living in a 2D scene.
//!
//! A capability extends the previous one: every [Solid] is a [Doodad] and
//! every [Doodad] is a [Point]. Types pick the richest capability they can
//! honor and implement the whole chain.

pub mod space;
pub mod base;

use std::sync::atomic::{AtomicU64, Ordering};

pub use space::Space;
pub use base::{BaseDoodad, BasePoint, BaseSolid};

/// Position or displacement in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, derive_more::Add, derive_more::Sub, derive_more::Mul, derive_more::Neg, derive_more::Display)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vector {
	pub x: f64,
	pub y: f64,
}

impl Vector {
	pub fn new(x: f64, y: f64) -> Self {
		Vector { x, y }
	}

	pub fn magnitude(&self) -> f64 {
		self.x.hypot(self.y)
	}

	pub fn distance(&self, other: Vector) -> f64 {
		(*self - other).magnitude()
	}
}

impl std::str::FromStr for Vector {
	type Err = String;

	/// parses `x,y`
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (x, y) = s.split_once(',').ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
		let x = x.trim().parse::<f64>().map_err(|e| format!("invalid x '{x}': {e}"))?;
		let y = y.trim().parse::<f64>().map_err(|e| format!("invalid y '{y}': {e}"))?;
		Ok(Vector { x, y })
	}
}

/// Identifier of an entity, unique for the whole process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display(fmt = "cid:{}", _0)]
pub struct Cid(u64);

static NEXT_CID: AtomicU64 = AtomicU64::new(1);

impl Cid {
	pub fn next() -> Self {
		Cid(NEXT_CID.fetch_add(1, Ordering::Relaxed))
	}

	pub fn value(&self) -> u64 {
		self.0
	}
}

pub trait Point {
	fn x(&self) -> f64;
	fn y(&self) -> f64;
	fn set_pos(&mut self, x: f64, y: f64);

	fn pos(&self) -> Vector {
		Vector::new(self.x(), self.y())
	}

	fn shift_pos(&mut self, dx: f64, dy: f64) {
		self.set_pos(self.x() + dx, self.y() + dy);
	}
}

/// A point with an identity in the scene, which can be removed from it
pub trait Doodad: Point {
	fn cid(&self) -> Cid;
	fn destroy(&mut self);
	fn is_destroyed(&self) -> bool;
}

/// A doodad taking up collidable room
pub trait Solid: Doodad {
	fn space(&self) -> &Space;
	fn set_dim(&mut self, w: f64, h: f64);

	fn dims(&self) -> (f64, f64) {
		(self.space().w, self.space().h)
	}

	fn overlaps(&self, other: &dyn Solid) -> bool {
		self.space().overlaps(other.space())
	}
}
