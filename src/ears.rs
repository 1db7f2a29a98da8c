//! Positional audio: how loud and how far to the side a sound emitted
//! somewhere in the scene is, for a listener standing at `position`.

use crate::entity::{Point, Vector};
use crate::filter::{FilterError, Pan, Volume};

/// Shapes a value in [0, 1]
pub type ScaleFn = fn(f64) -> f64;

pub fn linear(v: f64) -> f64 {
	v
}

pub fn squared(v: f64) -> f64 {
	v * v
}

#[derive(Debug, Clone, Copy)]
pub struct Ears {
	pub position: Vector,
	/// horizontal distance at which sounds are panned all the way
	pub pan_width: f64,
	/// distance past which sounds are not heard at all
	pub silence_radius: f64,
	pub pan_scale: ScaleFn,
	pub volume_scale: ScaleFn,
}

impl Ears {
	pub fn new(position: Vector, pan_width: f64, silence_radius: f64) -> Self {
		Ears { position, pan_width, silence_radius, pan_scale: linear, volume_scale: linear }
	}

	pub fn calculate_pan(&self, x: f64) -> f64 {
		if self.pan_width <= 0.0 {
			return 0.0;
		}
		let v = ((x - self.position.x) / self.pan_width).clamp(-1.0, 1.0);
		(self.pan_scale)(v.abs()).clamp(0.0, 1.0).copysign(v)
	}

	pub fn calculate_volume(&self, at: Vector) -> f64 {
		let distance = self.position.distance(at);
		if distance >= self.silence_radius {
			return 0.0;
		}
		(self.volume_scale)(1.0 - distance / self.silence_radius).clamp(0.0, 1.0)
	}

	/// Filters making a sound played by `emitter` match where it stands
	pub fn filters_for(&self, emitter: &impl Point) -> Result<(Volume, Pan), FilterError> {
		let volume = Volume::new(self.calculate_volume(emitter.pos()))?;
		let pan = Pan::new(self.calculate_pan(emitter.x()))?;
		Ok((volume, pan))
	}
}

#[cfg(test)]
mod tests {
	use crate::entity::BasePoint;
	use super::*;

	fn ears() -> Ears {
		Ears::new(Vector::new(100.0, 100.0), 50.0, 200.0)
	}

	#[test]
	fn pan_follows_horizontal_offset() {
		let e = ears();
		assert_eq!(e.calculate_pan(100.0), 0.0);
		assert_eq!(e.calculate_pan(125.0), 0.5);
		assert_eq!(e.calculate_pan(75.0), -0.5);
		assert_eq!(e.calculate_pan(1000.0), 1.0);
		assert_eq!(e.calculate_pan(-1000.0), -1.0);
	}

	#[test]
	fn pan_scale_keeps_sign() {
		let e = Ears { pan_scale: squared, ..ears() };
		assert_eq!(e.calculate_pan(75.0), -0.25);
		assert_eq!(e.calculate_pan(125.0), 0.25);
	}

	#[test]
	fn zero_width_never_pans() {
		let e = Ears::new(Vector::default(), 0.0, 10.0);
		assert_eq!(e.calculate_pan(5.0), 0.0);
	}

	#[test]
	fn volume_fades_with_distance() {
		let e = ears();
		assert_eq!(e.calculate_volume(Vector::new(100.0, 100.0)), 1.0);
		assert_eq!(e.calculate_volume(Vector::new(100.0, 200.0)), 0.5);
		assert_eq!(e.calculate_volume(Vector::new(100.0, 300.0)), 0.0);
		assert_eq!(e.calculate_volume(Vector::new(500.0, 100.0)), 0.0);
		let quiet = Ears { volume_scale: squared, ..e };
		assert_eq!(quiet.calculate_volume(Vector::new(0.0, 100.0)), 0.25);
	}

	#[test]
	fn filters_for_emitter() {
		let (volume, pan) = ears().filters_for(&BasePoint::new(150.0, 100.0)).unwrap();
		assert_eq!(volume.gain(), 0.75);
		assert_eq!(pan.value(), 1.0);
	}
}
