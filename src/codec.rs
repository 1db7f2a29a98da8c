//! Single sample access inside raw little-endian signed PCM buffers.
//!
//! Every function here is unchecked: reading or writing past the end of the
//! buffer panics, callers must size their buffers for the depth they use.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
	#[error("unsupported byte depth {0}, expected 1 or 2")]
	UnsupportedByteDepth(u16),

	#[error("invalid byte depth '{0}', expected 1 or 2")]
	InvalidByteDepth(String),
}

/// Bytes used by a single sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteDepth {
	/// signed 8 bit
	One,
	/// signed 16 bit little endian
	#[default]
	Two,
}

impl ByteDepth {
	pub fn bytes(&self) -> usize {
		match self {
			ByteDepth::One => 1,
			ByteDepth::Two => 2,
		}
	}

	/// divisor mapping integer samples into [-1, 1)
	pub fn scale(&self) -> f64 {
		match self {
			ByteDepth::One => 128.0,
			ByteDepth::Two => 32768.0,
		}
	}

	/// largest normalized value that survives encoding without wrapping around
	pub fn max_normalized(&self) -> f64 {
		(self.scale() - 1.0) / self.scale()
	}
}

impl TryFrom<u16> for ByteDepth {
	type Error = CodecError;

	fn try_from(depth: u16) -> Result<Self, Self::Error> {
		match depth {
			1 => Ok(ByteDepth::One),
			2 => Ok(ByteDepth::Two),
			x => Err(CodecError::UnsupportedByteDepth(x)),
		}
	}
}

impl std::str::FromStr for ByteDepth {
	type Err = CodecError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let depth = s.trim().parse::<u16>()
			.map_err(|_| CodecError::InvalidByteDepth(s.to_string()))?;
		ByteDepth::try_from(depth)
	}
}

impl std::fmt::Display for ByteDepth {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.bytes())
	}
}

pub fn write_i16(buffer: &mut [u8], offset: usize, value: i16) {
	let bytes = value.to_le_bytes();
	buffer[offset] = bytes[0];
	buffer[offset + 1] = bytes[1];
}

pub fn read_i16(buffer: &[u8], offset: usize) -> i16 {
	// accumulate unsigned, then reinterpret the bits as two's complement
	let raw = u16::from(buffer[offset]) | u16::from(buffer[offset + 1]) << 8;
	raw as i16
}

/// Read one sample as a float in [-1, 1).
///
/// Depths other than 1 and 2 silently read as `0.0`, see [try_read_normalized]
/// for a variant which reports them.
pub fn read_normalized(buffer: &[u8], offset: usize, byte_depth: u16) -> f64 {
	try_read_normalized(buffer, offset, byte_depth).unwrap_or(0.0)
}

pub fn try_read_normalized(buffer: &[u8], offset: usize, byte_depth: u16) -> Result<f64, CodecError> {
	Ok(read_sample(buffer, offset, ByteDepth::try_from(byte_depth)?))
}

/// Scale `value` by 32768, round it and store it as 16 bit.
///
/// Values outside [-1, 1) are not clamped: the rounded integer is truncated
/// to 16 bits, so `1.0` is stored as `-32768`.
pub fn write_i16_from_float(buffer: &mut [u8], offset: usize, value: f64) {
	write_i16(buffer, offset, round(value * 32768.0) as i16);
}

/// Round half away from zero.
pub fn round(f: f64) -> i64 {
	if f < 0.0 {
		(f - 0.5) as i64
	} else {
		(f + 0.5) as i64
	}
}

pub fn read_sample(buffer: &[u8], offset: usize, depth: ByteDepth) -> f64 {
	match depth {
		ByteDepth::One => buffer[offset] as i8 as f64 / depth.scale(),
		ByteDepth::Two => read_i16(buffer, offset) as f64 / depth.scale(),
	}
}

/// Counterpart of [read_sample], with the same unchecked overflow as [write_i16_from_float]
pub fn write_sample(buffer: &mut [u8], offset: usize, depth: ByteDepth, value: f64) {
	match depth {
		ByteDepth::One => buffer[offset] = round(value * depth.scale()) as i8 as u8,
		ByteDepth::Two => write_i16_from_float(buffer, offset, value),
	}
}
