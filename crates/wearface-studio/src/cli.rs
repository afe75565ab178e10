use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use wearface_engine::FaceVariant;

#[derive(Parser, Debug)]
#[command(name = "wearface-studio")]
#[command(about = "Run a watch face headless against the system clock", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Background image; a flat placeholder is generated when omitted
    #[arg(long)]
    pub background: Option<PathBuf>,
    /// Minute hand image (bitmap face only)
    #[arg(long)]
    pub minute_hand: Option<PathBuf>,
    /// Hour hand image (bitmap face only)
    #[arg(long)]
    pub hour_hand: Option<PathBuf>,
    /// Face variant to run
    #[arg(long, value_enum, default_value_t = VariantArg::Classic)]
    pub variant: VariantArg,
    /// Surface size in pixels, `WIDTHxHEIGHT`
    #[arg(long, value_parser = parse_size, default_value = "400x400")]
    pub size: (u32, u32),
    /// Stop after this many seconds
    #[arg(long, default_value_t = 10)]
    pub seconds: u64,
    /// Enter ambient mode after this many seconds
    #[arg(long)]
    pub ambient_after: Option<u64>,
    /// Switch the interruption filter to "none" after this many seconds
    #[arg(long)]
    pub mute_after: Option<u64>,
    /// Report a low-bit ambient display
    #[arg(long)]
    pub low_bit: bool,
    /// Log filter, `env_logger` syntax (falls back to RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum VariantArg {
    Classic,
    DayDial,
    Bitmap,
}

impl From<VariantArg> for FaceVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Classic => FaceVariant::Classic,
            VariantArg::DayDial => FaceVariant::DayDial,
            VariantArg::Bitmap => FaceVariant::Bitmap,
        }
    }
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width `{w}`: {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height `{h}`: {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("surface must not be empty, got {w}x{h}"));
    }
    Ok((w, h))
}
