use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use ppmview::{
    Channel, ChannelMask, DecodeOptions, Decoded, ImageRecord, ImageSummary, PpmFile,
    ViewerConfig, ViewerState, Warning,
};
use std::path::{Path, PathBuf};

/// Largest declared payload accepted unless `--max-bytes` or `--no-limit` says otherwise (1 GiB)
const DEFAULT_MAX_BYTES: usize = 1 << 30;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "ppmview - Inspect, copy and render binary PPM (P6) images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pad short payloads with zeros instead of truncating them
    #[arg(long, global = true)]
    zero_fill: bool,

    /// Refuse images whose declared payload exceeds this many bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_BYTES)]
    max_bytes: usize,

    /// Accept any declared payload size
    #[arg(long, global = true, conflicts_with = "max_bytes")]
    no_limit: bool,
}

impl Cli {
    fn decode_options(&self) -> DecodeOptions {
        let limit = (!self.no_limit).then_some(self.max_bytes);
        DecodeOptions::new()
            .with_zero_fill_underrun(self.zero_fill)
            .with_max_payload_bytes(limit)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header, payload size and any warnings
    Info {
        /// Input PPM file
        input: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Decode an image and write a re-encoded duplicate
    Copy {
        /// Input PPM file
        input: PathBuf,

        /// Output PPM file
        output: PathBuf,
    },
    /// Write the frame a viewer would show, with inversion and channel masks applied
    Render {
        /// Input PPM file
        input: PathBuf,

        /// Output PPM file
        output: PathBuf,

        /// Flip the image vertically
        #[arg(long)]
        invert: bool,

        /// Channels to keep
        #[arg(long, value_enum, default_value_t = ChannelArg::All)]
        channel: ChannelArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ChannelArg {
    All,
    Red,
    Green,
    Blue,
}

impl From<ChannelArg> for ChannelMask {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::All => ChannelMask::ALL,
            ChannelArg::Red => ChannelMask::only(Channel::Red),
            ChannelArg::Green => ChannelMask::only(Channel::Green),
            ChannelArg::Blue => ChannelMask::only(Channel::Blue),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = cli.decode_options();

    match &cli.command {
        Commands::Info { input, json } => handle_info(input, &options, *json)?,
        Commands::Copy { input, output } => handle_copy(input, output, &options)?,
        Commands::Render {
            input,
            output,
            invert,
            channel,
        } => {
            let config = ViewerConfig::default()
                .with_invert(*invert)
                .with_channels((*channel).into());
            handle_render(input, output, &options, config)?;
        }
    }

    Ok(())
}

fn report(path: &Path, warnings: &[Warning]) {
    for warning in warnings {
        warn!("{}: {warning}", path.display());
    }
}

fn load(input: &Path, options: &DecodeOptions) -> Result<Decoded, Box<dyn std::error::Error>> {
    let decoded = PpmFile::new(input).decode(options)?;
    report(input, &decoded.warnings);
    Ok(decoded)
}

fn save(record: &ImageRecord, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let written = PpmFile::new(output).encode(record)?;
    report(output, &written.warnings);
    info!("wrote {} bytes to {}", written.bytes_written, output.display());
    Ok(())
}

fn handle_info(
    input: &Path,
    options: &DecodeOptions,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = ImageSummary::new(&load(input, options)?);

    if json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{summary}");
    }

    Ok(())
}

fn handle_copy(
    input: &Path,
    output: &Path,
    options: &DecodeOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = load(input, options)?;
    save(&decoded.record, output)
}

fn handle_render(
    input: &Path,
    output: &Path,
    options: &DecodeOptions,
    config: ViewerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = load(input, options)?;
    let viewer = ViewerState::new(config);
    info!("rendering {}", viewer.window_title(&decoded.record));

    let frame = viewer.compose_frame(&decoded.record);
    let rendered = ImageRecord::new(decoded.record.width(), decoded.record.height(), frame)?;
    save(&rendered, output)
}
