use std::time::Duration;

use crate::codec::{self, ByteDepth};

pub trait SampleParser<T> {
	fn parse(&self, chunk: &[u8]) -> T;
	fn encode(&self, chunk: &mut [u8], value: T);
}

impl SampleParser<f64> for ByteDepth {
	fn parse(&self, chunk: &[u8]) -> f64 {
		codec::read_sample(chunk, 0, *self)
	}

	fn encode(&self, chunk: &mut [u8], value: f64) {
		codec::write_sample(chunk, 0, *self, value)
	}
}

/// Layout of a headerless interleaved PCM stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
	pub channels: u16,
	pub depth: ByteDepth,
	pub sample_rate: u32,
}

impl Default for PcmFormat {
	fn default() -> Self {
		PcmFormat { channels: 2, depth: ByteDepth::Two, sample_rate: 44100 }
	}
}

impl PcmFormat {
	/// bytes taken by one sample of every channel
	pub fn frame_size(&self) -> usize {
		self.channels as usize * self.depth.bytes()
	}

	/// whole frames contained in `len` bytes, any trailing partial frame is not counted
	pub fn frames(&self, len: usize) -> usize {
		match self.frame_size() {
			0 => 0,
			size => len / size,
		}
	}

	pub fn frames_for(&self, duration: Duration) -> usize {
		(duration.as_secs_f64() * self.sample_rate as f64).round() as usize
	}

	pub fn duration_of(&self, frames: usize) -> Duration {
		if self.sample_rate == 0 {
			return Duration::ZERO;
		}
		Duration::from_secs_f64(frames as f64 / self.sample_rate as f64)
	}
}
