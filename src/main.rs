mod cfg;

use std::{fs, time::Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use pcmkit::{
	filter::Filter,
	codec::ByteDepth,
	input::{file::FileSource, DataSource},
	output::{file::FileSink, DataSink},
	PcmFormat,
};

use crate::cfg::{FilterOptions, PcmArgs, PcmCommand};

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "pcmkit=info".into()),
		)
		.with_writer(std::io::stderr)
		.init();

	let args = PcmArgs::parse();
	let format = args.opts.format();

	match args.command {
		PcmCommand::Inspect { path } => inspect(&path, format, args.opts.buffer),
		PcmCommand::Process { input, output, filters, to_depth } =>
			process(&input, &output, format, args.opts.buffer, &filters, to_depth),
		#[cfg(feature = "cpal")]
		PcmCommand::Play { path, device, timeout } => play(&path, format, args.opts.buffer, device.as_deref(), timeout),
	}
}

#[derive(Debug, Default)]
struct Levels {
	peak: f64,
	square_sum: f64,
	count: usize,
}

impl Levels {
	fn feed(&mut self, samples: &[f64]) {
		for s in samples {
			self.peak = self.peak.max(s.abs());
			self.square_sum += s * s;
		}
		self.count += samples.len();
	}

	fn rms(&self) -> f64 {
		if self.count == 0 {
			return 0.0;
		}
		(self.square_sum / self.count as f64).sqrt()
	}
}

fn dbfs(v: f64) -> String {
	if v <= 0.0 {
		"-inf".into()
	} else {
		format!("{:.1}", 20.0 * v.log10())
	}
}

fn measure(path: &str, format: PcmFormat, frames: usize) -> Result<Vec<Levels>> {
	let mut source = FileSource::open(path, format, frames)
		.with_context(|| format!("could not open '{path}'"))?;
	let mut levels: Vec<Levels> = (0..format.channels).map(|_| Levels::default()).collect();

	while let Some(block) = source.recv()? {
		for (channel, samples) in levels.iter_mut().zip(block.iter()) {
			channel.feed(samples);
		}
	}
	Ok(levels)
}

fn inspect(path: &str, format: PcmFormat, frames: usize) -> Result<()> {
	let levels = measure(path, format, frames)?;
	let total = levels.first().map(|l| l.count).unwrap_or(0);
	println!(
		"{path}: {} frames, {:.3}s, {} ch, {} bit, {} Hz",
		total,
		format.duration_of(total).as_secs_f64(),
		format.channels,
		format.depth.bytes() * 8,
		format.sample_rate,
	);
	for (i, l) in levels.iter().enumerate() {
		println!("  [{i}] peak {} dBFS  rms {} dBFS", dbfs(l.peak), dbfs(l.rms()));
	}
	Ok(())
}

fn process(
	input: &str,
	output: &str,
	format: PcmFormat,
	frames: usize,
	filters: &FilterOptions,
	to_depth: Option<ByteDepth>,
) -> Result<()> {
	let chain = filters.chain()?;
	let mut data = fs::read(input).with_context(|| format!("could not read '{input}'"))?;

	let usable = format.frames(data.len()) * format.frame_size();
	if usable == 0 && !data.is_empty() {
		bail!("'{input}' is shorter than a single frame");
	}
	if usable < data.len() {
		tracing::warn!("dropping {} trailing bytes of '{input}', not enough for a whole frame", data.len() - usable);
		data.truncate(usable);
	}

	let start = Instant::now();
	chain.apply(&mut data, &format)?;
	info!("applied {} filters to {} frames in {:?}", chain.len(), format.frames(data.len()), start.elapsed());

	match to_depth {
		Some(depth) if depth != format.depth => {
			let target = PcmFormat { depth, ..format };
			info!("converting from {} to {} bytes per sample", format.depth, depth);
			let mut source = FileSource::from_reader(data.as_slice(), format, frames)?;
			let mut sink = FileSink::create(output, target)
				.with_context(|| format!("could not create '{output}'"))?;
			while let Some(block) = source.recv()? {
				sink.send(&block)?;
			}
			sink.finish()?;
		},
		_ => fs::write(output, &data).with_context(|| format!("could not write '{output}'"))?,
	}
	Ok(())
}

#[cfg(feature = "cpal")]
fn play(path: &str, format: PcmFormat, frames: usize, device: Option<&str>, timeout: u64) -> Result<()> {
	let mut source = FileSource::open(path, format, frames)
		.with_context(|| format!("could not open '{path}'"))?;
	let mut sink = pcmkit::output::cpal::DefaultAudioDeviceWithCPAL::new(device, &format, frames * 4, timeout)?;

	while let Some(block) = source.recv()? {
		sink.send(&block)?;
	}
	sink.finish()?;
	Ok(())
}
