use std::{collections::VecDeque, sync::{mpsc, Arc, Mutex}, time::Duration};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::input::{format::PcmFormat, matrix_to_stream, Matrix};

use super::{wait_while, DataSink, SinkError};

const POLL: Duration = Duration::from_millis(5);
// on top of the time the queued audio needs to play
const SLACK: Duration = Duration::from_secs(2);

pub struct DefaultAudioDeviceWithCPAL {
	queue: Arc<Mutex<VecDeque<f32>>>,
	capacity: usize,
	channels: usize,
	sample_rate: u32,
	errors: mpsc::Receiver<String>,
	#[allow(unused)]
	stream: cpal::Stream,
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDeviceErrors {
	#[error("{0}")]
	Device(#[from] cpal::DevicesError),

	#[error("device not found")]
	NotFound,

	#[error("{0}")]
	BuildStream(#[from] cpal::BuildStreamError),

	#[error("{0}")]
	PlayStream(#[from] cpal::PlayStreamError),
}

impl DefaultAudioDeviceWithCPAL {
	/// `frames` is how much audio may be queued ahead of the device
	pub fn new(device: Option<&str>, format: &PcmFormat, frames: usize, timeout_secs: u64) -> Result<Self, AudioDeviceErrors> {
		let host = cpal::default_host();
		let device = match device {
			Some(name) => host
				.output_devices()?
				.find(|x| x.name().as_deref().unwrap_or("") == name)
				.ok_or(AudioDeviceErrors::NotFound)?,
			None => host
				.default_output_device()
				.ok_or(AudioDeviceErrors::NotFound)?,
		};
		tracing::info!("playing on '{}'", device.name().unwrap_or_default());
		let cfg = cpal::StreamConfig {
			channels: format.channels,
			buffer_size: cpal::BufferSize::Default,
			sample_rate: cpal::SampleRate(format.sample_rate),
		};
		let queue = Arc::new(Mutex::new(VecDeque::new()));
		let feed = queue.clone();
		let (tx, errors) = mpsc::channel();
		let stream = device.build_output_stream(
			&cfg,
			move |data: &mut [f32], _info| {
				let mut q = match feed.lock() {
					Ok(q) => q,
					Err(_) => return data.fill(0.0),
				};
				for out in data.iter_mut() {
					// underruns play silence
					*out = q.pop_front().unwrap_or(0.0);
				}
			},
			move |e| {
				tracing::error!("error in output stream: {e}");
				tx.send(e.to_string()).unwrap_or(());
			},
			Some(Duration::from_secs(timeout_secs)),
		)?;
		stream.play()?;

		Ok(DefaultAudioDeviceWithCPAL {
			stream,
			queue,
			errors,
			sample_rate: format.sample_rate,
			channels: format.channels as usize,
			capacity: frames.max(1) * format.channels as usize,
		})
	}

	fn queued(&self) -> usize {
		self.queue.lock().map(|q| q.len()).unwrap_or(0)
	}

	/// how long the device should take to play `samples` interleaved samples
	fn playback_time(&self, samples: usize) -> Duration {
		let per_second = (self.channels * self.sample_rate as usize).max(1);
		Duration::from_secs_f64(samples as f64 / per_second as f64) + SLACK
	}
}

impl DataSink<f64> for DefaultAudioDeviceWithCPAL {
	fn send(&mut self, data: &Matrix<f64>) -> Result<(), SinkError> {
		if data.len() != self.channels {
			return Err(SinkError::ChannelMismatch { expected: self.channels, found: data.len() });
		}
		wait_while(|| self.queued() >= self.capacity, &self.errors, self.playback_time(self.capacity), POLL)?;
		if let Ok(mut q) = self.queue.lock() {
			q.extend(matrix_to_stream(data).into_iter().map(|s| s as f32));
		}
		Ok(())
	}

	fn finish(&mut self) -> Result<(), SinkError> {
		let deadline = self.playback_time(self.queued());
		wait_while(|| self.queued() > 0, &self.errors, deadline, POLL)
	}
}
