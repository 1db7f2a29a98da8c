//! In place transformations of raw PCM buffers.
//!
//! Filters decode samples through [crate::codec], work on normalized values
//! and write them back, clipping to what the sample depth can hold.

pub mod volume;
pub mod pan;
pub mod fade;

pub use volume::Volume;
pub use pan::Pan;
pub use fade::{Fade, FadeDirection};

use crate::{codec, input::format::PcmFormat};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
	#[error("buffer of {len} bytes does not hold whole frames of {frame_size} bytes")]
	Unaligned {
		len: usize,
		frame_size: usize,
	},

	#[error("{filter} does not support {channels} channels")]
	UnsupportedChannels {
		filter: &'static str,
		channels: u16,
	},

	#[error("invalid {name}: {value}")]
	InvalidParameter {
		name: &'static str,
		value: f64,
	},
}

pub trait Filter {
	fn name(&self) -> &'static str;
	fn apply(&self, data: &mut [u8], fmt: &PcmFormat) -> Result<(), FilterError>;
}

/// Run `f(frame, channel, sample)` over every sample and store what it returns.
pub fn map_samples<F>(data: &mut [u8], fmt: &PcmFormat, mut f: F) -> Result<(), FilterError>
where F : FnMut(usize, usize, f64) -> f64
{
	let frame_size = fmt.frame_size();
	if frame_size == 0 || data.len() % frame_size != 0 {
		return Err(FilterError::Unaligned { len: data.len(), frame_size });
	}
	let depth = fmt.depth;
	let max = depth.max_normalized();
	for (i, frame) in data.chunks_mut(frame_size).enumerate() {
		for channel in 0..fmt.channels as usize {
			let offset = channel * depth.bytes();
			let value = f(i, channel, codec::read_sample(frame, offset, depth));
			codec::write_sample(frame, offset, depth, value.clamp(-1.0, max));
		}
	}
	Ok(())
}

/// Filters applied one after the other
#[derive(Default)]
pub struct Chain {
	filters: Vec<Box<dyn Filter>>,
}

impl Chain {
	pub fn new() -> Self {
		Chain::default()
	}

	pub fn with(mut self, filter: impl Filter + 'static) -> Self {
		self.push(filter);
		self
	}

	pub fn push(&mut self, filter: impl Filter + 'static) {
		self.filters.push(Box::new(filter));
	}

	pub fn len(&self) -> usize {
		self.filters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}
}

impl Filter for Chain {
	fn name(&self) -> &'static str {
		"chain"
	}

	fn apply(&self, data: &mut [u8], fmt: &PcmFormat) -> Result<(), FilterError> {
		for filter in &self.filters {
			tracing::debug!("applying {} to {} bytes", filter.name(), data.len());
			filter.apply(data, fmt)?;
		}
		Ok(())
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use pretty_assertions::assert_eq;

	use crate::codec::{self, ByteDepth};
	use super::*;

	pub(crate) fn stereo16() -> PcmFormat {
		PcmFormat { channels: 2, depth: ByteDepth::Two, sample_rate: 1000 }
	}

	pub(crate) fn encode(samples: &[f64], depth: ByteDepth) -> Vec<u8> {
		let mut out = vec![0u8; samples.len() * depth.bytes()];
		for (i, s) in samples.iter().enumerate() {
			codec::write_sample(&mut out, i * depth.bytes(), depth, *s);
		}
		out
	}

	pub(crate) fn decode(data: &[u8], depth: ByteDepth) -> Vec<f64> {
		(0..data.len() / depth.bytes())
			.map(|i| codec::read_sample(data, i * depth.bytes(), depth))
			.collect()
	}

	#[test]
	fn map_samples_sees_frames_and_channels() {
		let mut data = encode(&[0.0; 6], ByteDepth::Two);
		map_samples(&mut data, &stereo16(), |frame, channel, _| {
			frame as f64 * 0.25 - channel as f64 * 0.5
		}).unwrap();
		assert_eq!(decode(&data, ByteDepth::Two), vec![0.0, -0.5, 0.25, -0.25, 0.5, 0.0]);
	}

	#[test]
	fn map_samples_clips_instead_of_wrapping() {
		let mut data = encode(&[0.5, -0.5], ByteDepth::One);
		let fmt = PcmFormat { channels: 1, depth: ByteDepth::One, sample_rate: 8000 };
		map_samples(&mut data, &fmt, |_, _, v| v * 4.0).unwrap();
		assert_eq!(decode(&data, ByteDepth::One), vec![127.0 / 128.0, -1.0]);
	}

	#[test]
	fn map_samples_rejects_partial_frames() {
		let mut data = vec![0u8; 6];
		assert_eq!(
			map_samples(&mut data, &stereo16(), |_, _, v| v),
			Err(FilterError::Unaligned { len: 6, frame_size: 4 }),
		);
	}

	#[test]
	fn chain_applies_in_order_and_stops_on_error() {
		let mut data = encode(&[0.5, 0.5], ByteDepth::Two);
		let chain = Chain::new()
			.with(Volume::new(0.5).unwrap())
			.with(Pan::new(1.0).unwrap());
		assert_eq!(chain.len(), 2);
		chain.apply(&mut data, &stereo16()).unwrap();
		assert_eq!(decode(&data, ByteDepth::Two), vec![0.0, 0.25]);

		let mono = PcmFormat { channels: 1, ..stereo16() };
		let mut data = encode(&[0.5, 0.5], ByteDepth::Two);
		let chain = Chain::new()
			.with(Pan::new(0.0).unwrap())
			.with(Volume::new(0.0).unwrap());
		assert!(matches!(chain.apply(&mut data, &mono), Err(FilterError::UnsupportedChannels { .. })));
		assert_eq!(decode(&data, ByteDepth::Two), vec![0.5, 0.5]);
	}
}
