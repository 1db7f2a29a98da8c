use std::time::Duration;

use clap::{Parser, Subcommand};

use pcmkit::{
	codec::ByteDepth,
	ears::Ears,
	entity::{BasePoint, Vector},
	filter::{Chain, Fade, FilterError, Pan, Volume},
	PcmFormat,
};

const HELP_TEMPLATE : &str = "{before-help}\
{name} {version} -- by {author}
{about}

{usage-heading} {usage}

{all-args}{after-help}
";

/// inspect, process and play raw PCM audio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, help_template = HELP_TEMPLATE)]
pub struct PcmArgs {
	#[clap(subcommand)]
	pub command: PcmCommand,

	#[command(flatten)]
	pub opts: FormatOptions,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PcmCommand {
	/// print peak and rms level of every channel
	Inspect {
		/// path on filesystem of file or pipe
		path: String,
	},

	/// apply filters to a file and write the result to another
	Process {
		/// file to read
		input: String,

		/// file to write, overwritten if it exists
		output: String,

		/// bytes per sample of the written file, same as input if missing
		#[arg(long, value_name = "BYTES")]
		to_depth: Option<ByteDepth>,

		#[command(flatten)]
		filters: FilterOptions,
	},

	#[cfg(feature = "cpal")]
	/// play a file on an audio device
	Play {
		/// path on filesystem of file or pipe
		path: String,

		/// output device to play on, default one if missing
		#[arg(long)]
		device: Option<String>,

		/// timeout (in seconds) waiting for audio stream
		#[arg(long, default_value_t = 60)]
		timeout: u64,
	},
}

#[derive(Debug, Clone, Parser)]
pub struct FormatOptions {
	/// number of interleaved channels
	#[arg(long, value_name = "N", default_value_t = 2)]
	pub channels: u16,

	/// bytes per sample, 1 or 2
	#[arg(short, long, value_name = "BYTES", default_value_t = ByteDepth::Two)]
	pub depth: ByteDepth,

	/// sample rate of the data
	#[arg(long, value_name = "HZ", default_value_t = 44100)]
	pub sample_rate: u32,

	/// frames handled per read
	#[arg(short, long, value_name = "SIZE", default_value_t = 2048)]
	pub buffer: usize,
}

impl FormatOptions {
	pub fn format(&self) -> PcmFormat {
		PcmFormat {
			channels: self.channels,
			depth: self.depth,
			sample_rate: self.sample_rate,
		}
	}
}

#[derive(Debug, Clone, Parser)]
pub struct FilterOptions {
	/// gain to apply, 1 leaves volume unchanged
	#[arg(long, value_name = "GAIN", allow_negative_numbers = true)]
	pub volume: Option<f64>,

	/// stereo balance from -1 (left) to 1 (right)
	#[arg(long, value_name = "PAN", allow_negative_numbers = true)]
	pub pan: Option<f64>,

	/// fade in over the first milliseconds
	#[arg(long, value_name = "MS")]
	pub fade_in: Option<u64>,

	/// fade out over the last milliseconds
	#[arg(long, value_name = "MS")]
	pub fade_out: Option<u64>,

	/// place the sound at x,y in the world, deriving volume and pan from the listener
	#[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
	pub emitter: Option<Vector>,

	/// where the listener stands
	#[arg(long, value_name = "X,Y", default_value = "0,0", allow_hyphen_values = true)]
	pub listener: Vector,

	/// distance past which an emitter can't be heard
	#[arg(long, value_name = "R", default_value_t = 1000.0)]
	pub silence_radius: f64,

	/// horizontal distance at which an emitter is panned all the way
	#[arg(long, value_name = "W", default_value_t = 500.0)]
	pub pan_width: f64,
}

impl FilterOptions {
	pub fn chain(&self) -> Result<Chain, FilterError> {
		let mut chain = Chain::new();
		if let Some(emitter) = self.emitter {
			let ears = Ears::new(self.listener, self.pan_width, self.silence_radius);
			let (volume, pan) = ears.filters_for(&BasePoint::new(emitter.x, emitter.y))?;
			tracing::info!("emitter at {emitter}: volume {:.3}, pan {:.3}", volume.gain(), pan.value());
			chain.push(volume);
			chain.push(pan);
		}
		if let Some(gain) = self.volume {
			chain.push(Volume::new(gain)?);
		}
		if let Some(pan) = self.pan {
			chain.push(Pan::new(pan)?);
		}
		if let Some(ms) = self.fade_in {
			chain.push(Fade::fade_in(Duration::from_millis(ms)));
		}
		if let Some(ms) = self.fade_out {
			chain.push(Fade::fade_out(Duration::from_millis(ms)));
		}
		Ok(chain)
	}
}
