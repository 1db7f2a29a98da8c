pub mod format;

pub mod file;

pub type Matrix<T> = Vec<Vec<T>>;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("{0}")]
	Io(#[from] std::io::Error),

	#[error("format has no channels")]
	NoChannels,
}

pub trait DataSource<T> {
	/// next block of samples, `Ok(None)` once the stream is over
	fn recv(&mut self) -> Result<Option<Matrix<T>>, SourceError>;
}

/// separate a stream of alternating channels into a matrix of channel streams:
///   L R L R L R L R L R
/// becomes
///   L L L L L
///   R R R R R
pub fn stream_to_matrix<I, O>(stream: impl Iterator<Item = I>, channels: usize, norm: O) -> Matrix<O>
where	I : Copy + Into<O>, O : Copy + std::ops::Div<Output = O>
{
	let mut out = vec![vec![]; channels];
	let mut channel = 0;
	for sample in stream {
		out[channel].push(sample.into() / norm);
		channel = (channel + 1) % channels;
	}
	out
}

/// inverse of [stream_to_matrix]: interleaves channels back into a single
/// stream, stopping at the end of the shortest channel
pub fn matrix_to_stream<T: Copy>(matrix: &Matrix<T>) -> Vec<T> {
	let frames = matrix.iter().map(|c| c.len()).min().unwrap_or(0);
	let mut out = Vec::with_capacity(frames * matrix.len());
	for i in 0..frames {
		for channel in matrix {
			out.push(channel[i]);
		}
	}
	out
}
