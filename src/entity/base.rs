use super::{Cid, Doodad, Point, Solid, Space};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BasePoint {
	pub x: f64,
	pub y: f64,
}

impl BasePoint {
	pub fn new(x: f64, y: f64) -> Self {
		BasePoint { x, y }
	}
}

impl Point for BasePoint {
	fn x(&self) -> f64 { self.x }
	fn y(&self) -> f64 { self.y }

	fn set_pos(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseDoodad {
	pub point: BasePoint,
	cid: Cid,
	destroyed: bool,
}

impl BaseDoodad {
	pub fn new(x: f64, y: f64) -> Self {
		BaseDoodad::with_cid(Cid::next(), x, y)
	}

	pub fn with_cid(cid: Cid, x: f64, y: f64) -> Self {
		BaseDoodad { point: BasePoint::new(x, y), cid, destroyed: false }
	}
}

impl Point for BaseDoodad {
	fn x(&self) -> f64 { self.point.x }
	fn y(&self) -> f64 { self.point.y }

	fn set_pos(&mut self, x: f64, y: f64) {
		self.point.set_pos(x, y);
	}
}

impl Doodad for BaseDoodad {
	fn cid(&self) -> Cid {
		self.cid
	}

	fn destroy(&mut self) {
		if !self.destroyed {
			tracing::debug!("destroying {}", self.cid);
		}
		self.destroyed = true;
	}

	fn is_destroyed(&self) -> bool {
		self.destroyed
	}
}

/// A doodad with a collision space following its position
#[derive(Debug, Clone, PartialEq)]
pub struct BaseSolid {
	pub doodad: BaseDoodad,
	space: Space,
}

impl BaseSolid {
	pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
		let doodad = BaseDoodad::new(x, y);
		let space = Space::new(doodad.cid(), x, y, w, h);
		BaseSolid { doodad, space }
	}
}

impl Point for BaseSolid {
	fn x(&self) -> f64 { self.doodad.x() }
	fn y(&self) -> f64 { self.doodad.y() }

	fn set_pos(&mut self, x: f64, y: f64) {
		self.doodad.set_pos(x, y);
		self.space.x = x;
		self.space.y = y;
	}
}

impl Doodad for BaseSolid {
	fn cid(&self) -> Cid { self.doodad.cid() }
	fn destroy(&mut self) { self.doodad.destroy() }
	fn is_destroyed(&self) -> bool { self.doodad.is_destroyed() }
}

impl Solid for BaseSolid {
	fn space(&self) -> &Space {
		&self.space
	}

	fn set_dim(&mut self, w: f64, h: f64) {
		self.space.w = w;
		self.space.h = h;
	}
}
