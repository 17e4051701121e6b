//! CLI front-end: probes a game-audio file, reports its format, and (where the codec is
//! self-contained enough to drive from a single file) decodes it to a PCM16 WAV.
//!
//! Full sample decode is only wired up for formats that carry their own frame boundaries: HCA
//! (self-describing header), a raw single-header `.dsp`, and `.bigrp` (via the ICE range/DCT
//! codecs). Bink Audio has no container of its own in this workspace (`BinkOptions` takes no file
//! framing at all, see `gaudio-codec-bink::decoder`), and BKHD/PSB/XWMA mostly delegate to codecs
//! this workspace doesn't decode (Vorbis/ATRAC9/XMA/WMA) — `probe` reports what it can about
//! those, but `decode` refuses them with an explanation instead of silently doing nothing useful.

mod wav;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gaudio_codec_hca::{Hca, HcaOptions, Header as HcaHeader};
use gaudio_format_bigrp::{BigrpHeader, BigrpSubsong};
use gaudio_format_container::bkhd::BkhdBank;
use gaudio_format_container::dsp::DspStream;
use gaudio_format_container::psb::Psb;
use gaudio_format_container::xwma::XwmaStream;
use gaudio_format_container::{self as container, ProbeOptions};

#[derive(Parser)]
#[command(name = "gaudio-play", about = "Probe and decode proprietary game-audio files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Identify a file's format and print its one-line description.
    Probe { input: PathBuf },
    /// Decode a file to a PCM16 WAV.
    Decode {
        input: PathBuf,
        /// Defaults to the input path with its extension replaced by `.wav`.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// 1-based subsong index, for containers that hold more than one stream.
        #[arg(long, default_value_t = 1)]
        subsong: usize,
        /// HCA decryption keycode, decimal or `0x`-prefixed hex.
        #[arg(long)]
        keycode: Option<String>,
    },
}

fn extension_of(path: &std::path::Path) -> Option<String> {
    path.extension().and_then(|e| e.to_str()).map(|s| s.to_ascii_lowercase())
}

fn parse_keycode(s: &str) -> Result<u64, std::num::ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    }
    else {
        s.parse()
    }
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Probe { input } => probe(&input),
        Command::Decode { input, output, subsong, keycode } => decode(&input, output, subsong, keycode.as_deref()),
    };

    if let Err(err) = result {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn probe(input: &std::path::Path) -> Result<(), String> {
    let bytes = fs::read(input).map_err(|e| format!("reading {}: {}", input.display(), e))?;
    let ext = extension_of(input);

    if ext.as_deref() == Some("hca") {
        let header = HcaHeader::parse(&bytes).map_err(|e| e.to_string())?;
        let hca = Hca::create(&bytes, &HcaOptions::default()).map_err(|e| e.to_string())?;
        let encoding = if header.ciph_type == 0 { "unencrypted" } else { "keycode-ciphered" };
        println!("{}", hca.params().describe("CRI HCA", encoding, "interleaved PCM16"));
        return Ok(());
    }

    if ext.as_deref() == Some("bigrp") {
        let header = BigrpHeader::parse(&bytes).map_err(|e| e.to_string())?;
        println!("BIGRP\nsubsongs: {}", header.total_subsongs);
        return Ok(());
    }

    if ext.as_deref() == Some("dsp") {
        if bytes.len() < 0x60 {
            return Err("dsp: file shorter than the header".to_string());
        }
        let stream = DspStream::parse(&bytes, &bytes[0x60..], 1, 0).map_err(|e| e.to_string())?;
        let secs = stream.num_samples() as f64 / stream.sample_rate as f64;
        println!(
            "Nintendo DSP ADPCM\nencoding: GC/Wii ADPCM\nlayout: interleaved PCM16\nsample rate: {} Hz\nchannels: {}\nstream total samples: {} ({:.3}s)",
            stream.sample_rate,
            stream.channel_count(),
            stream.num_samples(),
            secs
        );
        return Ok(());
    }

    let hint = ProbeOptions { extension_hint: ext.as_deref() };
    match container::detect(&bytes, hint) {
        Some(container::ContainerFormat::Bkhd) => {
            let bank = BkhdBank::parse(&bytes).map_err(|e| e.to_string())?;
            println!("BKHD soundbank\nsubsongs: {}", bank.entries.len());
        }
        Some(container::ContainerFormat::Psb) => {
            let psb = Psb::parse(&bytes).map_err(|e| e.to_string())?;
            let voices = psb.root().by_key("voice").map_err(|e| e.to_string())?;
            println!("PSB voice bank\nsubsongs: {}", voices.count().map_err(|e| e.to_string())?);
        }
        Some(container::ContainerFormat::Xwma) => {
            let stream = XwmaStream::parse(&bytes).map_err(|e| e.to_string())?;
            println!(
                "XWMA\nencoding: WMA (not decoded by this crate)\nsample rate: {} Hz\nchannels: {}",
                stream.format.sample_rate, stream.format.channels
            );
        }
        Some(container::ContainerFormat::Dsp) => unreachable!("handled by the .dsp extension check above"),
        None => return Err(format!("{}: unrecognized format", input.display())),
    }
    Ok(())
}

fn decode(input: &std::path::Path, output: Option<PathBuf>, subsong: usize, keycode: Option<&str>) -> Result<(), String> {
    let bytes = fs::read(input).map_err(|e| format!("reading {}: {}", input.display(), e))?;
    let ext = extension_of(input);
    let output = output.unwrap_or_else(|| input.with_extension("wav"));

    match ext.as_deref() {
        Some("hca") => decode_hca(&bytes, keycode, &output),
        Some("bigrp") => decode_bigrp(&bytes, subsong, &output),
        Some("dsp") => decode_dsp(&bytes, &output),
        _ => Err(format!(
            "{}: decoding is only wired up for .hca, .bigrp, and .dsp; BKHD/PSB/XWMA delegate to codecs \
             this crate doesn't decode, and Bink Audio has no self-contained container here",
            input.display()
        )),
    }
}

fn decode_hca(bytes: &[u8], keycode: Option<&str>, output: &std::path::Path) -> Result<(), String> {
    let keycode = match keycode {
        Some(s) => Some(parse_keycode(s).map_err(|e| format!("invalid --keycode: {}", e))?),
        None => None,
    };
    let header = HcaHeader::parse(bytes).map_err(|e| e.to_string())?;
    let mut hca = Hca::create(bytes, &HcaOptions { keycode }).map_err(|e| e.to_string())?;

    let mut samples = Vec::new();
    let mut offset = header.header_size as usize;
    let frame_size = header.frame_size as usize;
    let mut frames_decoded = 0u32;
    while frames_decoded < header.frame_count && offset + frame_size <= bytes.len() {
        hca.decode_frame(&bytes[offset..offset + frame_size], &mut samples).map_err(|e| e.to_string())?;
        offset += frame_size;
        frames_decoded += 1;
    }

    let channels = hca.params().channels as usize;
    let delay = header.encoder_delay as usize * channels;
    let total = hca.params().total_samples.unwrap_or(0) as usize * channels;
    let trimmed = if delay <= samples.len() && delay + total <= samples.len() {
        &samples[delay..delay + total]
    }
    else {
        &samples[..]
    };

    wav::write_pcm16(output, hca.params().sample_rate, channels as u16, trimmed).map_err(|e| e.to_string())?;
    println!("wrote {}", output.display());
    Ok(())
}

fn decode_bigrp(bytes: &[u8], subsong: usize, output: &std::path::Path) -> Result<(), String> {
    let header = BigrpHeader::parse(bytes).map_err(|e| e.to_string())?;
    let mut player = BigrpSubsong::open(bytes, subsong as u32).map_err(|e| e.to_string())?;
    let info = player.info(header.total_subsongs);

    let target = info.num_samples.max(0) as usize;
    let mut samples = Vec::new();
    let mut produced = 0usize;
    while produced < target {
        let mut chunk = Vec::new();
        let want = (target - produced).min(4096);
        let got = player.decode(&mut chunk, want).map_err(|e| e.to_string())?;
        if got == 0 {
            break;
        }
        samples.extend_from_slice(&chunk);
        produced += got;
    }

    wav::write_pcm16(output, info.sample_rate, info.channels as u16, &samples).map_err(|e| e.to_string())?;
    println!("wrote {}", output.display());
    Ok(())
}

fn decode_dsp(bytes: &[u8], output: &std::path::Path) -> Result<(), String> {
    if bytes.len() < 0x60 {
        return Err("dsp: file shorter than the header".to_string());
    }
    let mut stream = DspStream::parse(bytes, &bytes[0x60..], 1, 0).map_err(|e| e.to_string())?;
    let mut samples = Vec::new();
    let total = stream.num_samples();
    stream.decode(&mut samples, total).map_err(|e| e.to_string())?;

    wav::write_pcm16(output, stream.sample_rate, stream.channel_count() as u16, &samples).map_err(|e| e.to_string())?;
    println!("wrote {}", output.display());
    Ok(())
}
