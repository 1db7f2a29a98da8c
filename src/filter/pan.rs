use crate::input::format::PcmFormat;

use super::{map_samples, Filter, FilterError};

/// Stereo balance: -1 is hard left, 0 is centered, 1 is hard right.
///
/// Panning never boosts a channel, it only attenuates the opposite one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pan(f64);

impl Pan {
	pub fn new(pan: f64) -> Result<Self, FilterError> {
		if !(-1.0..=1.0).contains(&pan) {
			return Err(FilterError::InvalidParameter { name: "pan", value: pan });
		}
		Ok(Pan(pan))
	}

	pub fn value(&self) -> f64 {
		self.0
	}

	/// gains for (left, right)
	pub fn gains(&self) -> (f64, f64) {
		if self.0 < 0.0 {
			(1.0, 1.0 + self.0)
		} else {
			(1.0 - self.0, 1.0)
		}
	}
}

impl Filter for Pan {
	fn name(&self) -> &'static str {
		"pan"
	}

	fn apply(&self, data: &mut [u8], fmt: &PcmFormat) -> Result<(), FilterError> {
		if fmt.channels != 2 {
			return Err(FilterError::UnsupportedChannels { filter: self.name(), channels: fmt.channels });
		}
		let (left, right) = self.gains();
		map_samples(data, fmt, |_, channel, v| if channel == 0 { v * left } else { v * right })
	}
}
