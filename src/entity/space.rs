use super::{Cid, Vector};

/// Axis aligned rectangle an entity occupies, anchored at its top left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
	pub cid: Cid,
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
}

impl Space {
	pub fn new(cid: Cid, x: f64, y: f64, w: f64, h: f64) -> Self {
		Space { cid, x, y, w, h }
	}

	pub fn contains(&self, p: Vector) -> bool {
		p.x >= self.x && p.x < self.x + self.w
			&& p.y >= self.y && p.y < self.y + self.h
	}

	/// touching edges don't count as overlap
	pub fn overlaps(&self, other: &Space) -> bool {
		self.x < other.x + other.w && other.x < self.x + self.w
			&& self.y < other.y + other.h && other.y < self.y + self.h
	}

	pub fn center(&self) -> Vector {
		Vector::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn containment_is_half_open() {
		let s = Space::new(Cid::next(), 0.0, 0.0, 10.0, 5.0);
		assert!(s.contains(Vector::new(0.0, 0.0)));
		assert!(s.contains(Vector::new(9.9, 4.9)));
		assert!(!s.contains(Vector::new(10.0, 2.0)));
		assert!(!s.contains(Vector::new(2.0, -0.1)));
		assert_eq!(s.center(), Vector::new(5.0, 2.5));
	}

	#[test]
	fn overlap() {
		let a = Space::new(Cid::next(), 0.0, 0.0, 10.0, 10.0);
		let b = Space::new(Cid::next(), 5.0, 5.0, 10.0, 10.0);
		let c = Space::new(Cid::next(), 10.0, 0.0, 5.0, 6.0);
		assert!(a.overlaps(&b));
		assert!(b.overlaps(&a));
		assert!(!a.overlaps(&c));
		assert!(b.overlaps(&c));
	}
}
