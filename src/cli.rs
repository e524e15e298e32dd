use clap::Parser;
use hex_painter::{GridParams, Orientation};

/// Lay out a hex grid and paint terrain on it.
#[derive(Parser, Debug)]
#[command(name = "hex-painter", version)]
pub struct Args {
    /// Number of columns.
    #[arg(long, default_value_t = GridParams::default().cols, value_parser = clap::value_parser!(u32).range(1..))]
    pub cols: u32,

    /// Number of rows.
    #[arg(long, default_value_t = GridParams::default().rows, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Hex circumradius in pixels.
    #[arg(long, default_value_t = GridParams::default().size, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Border inset in pixels.
    #[arg(long, default_value_t = GridParams::default().border)]
    pub border: u32,

    /// `flat` or `pointy`.
    #[arg(long, default_value_t = Orientation::Flat)]
    pub orientation: Orientation,

    /// Seed for reproducible terrain draws.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn params(&self) -> GridParams {
        GridParams {
            cols: self.cols,
            rows: self.rows,
            size: self.size,
            border: self.border,
            orientation: self.orientation,
        }
    }
}
