use std::time::Duration;

use crate::input::format::PcmFormat;

use super::{map_samples, Filter, FilterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
	In,
	Out,
}

/// Linear ramp from silence at the start of the buffer, or to silence at its end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
	pub direction: FadeDirection,
	pub duration: Duration,
}

impl Fade {
	pub fn fade_in(duration: Duration) -> Self {
		Fade { direction: FadeDirection::In, duration }
	}

	pub fn fade_out(duration: Duration) -> Self {
		Fade { direction: FadeDirection::Out, duration }
	}

	fn gain(&self, frame: usize, frames: usize, ramp: usize) -> f64 {
		match self.direction {
			FadeDirection::In if frame < ramp => frame as f64 / ramp as f64,
			FadeDirection::Out if frame + ramp >= frames => (frames - 1 - frame) as f64 / ramp as f64,
			_ => 1.0,
		}
	}
}

impl Filter for Fade {
	fn name(&self) -> &'static str {
		match self.direction {
			FadeDirection::In => "fade in",
			FadeDirection::Out => "fade out",
		}
	}

	fn apply(&self, data: &mut [u8], fmt: &PcmFormat) -> Result<(), FilterError> {
		let frames = fmt.frames(data.len());
		// a fade longer than the buffer ramps over the whole buffer
		let ramp = fmt.frames_for(self.duration).min(frames);
		if ramp == 0 {
			return map_samples(data, fmt, |_, _, v| v);
		}
		map_samples(data, fmt, |frame, _, v| v * self.gain(frame, frames, ramp))
	}
}
