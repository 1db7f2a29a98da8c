use crate::input::format::PcmFormat;

use super::{map_samples, Filter, FilterError};

/// Multiplies every sample by a fixed gain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
	pub fn new(gain: f64) -> Result<Self, FilterError> {
		if !gain.is_finite() || gain < 0.0 {
			return Err(FilterError::InvalidParameter { name: "volume", value: gain });
		}
		Ok(Volume(gain))
	}

	pub fn gain(&self) -> f64 {
		self.0
	}
}

impl Filter for Volume {
	fn name(&self) -> &'static str {
		"volume"
	}

	fn apply(&self, data: &mut [u8], fmt: &PcmFormat) -> Result<(), FilterError> {
		map_samples(data, fmt, |_, _, v| v * self.0)
	}
}
