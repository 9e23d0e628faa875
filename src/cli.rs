use std::path::PathBuf;

use bmpvox_io::RunConfig;
use clap::Parser;

/// Generate a cube lattice (nodes, elements) from a folder of bitmap slices.
///
/// The input folder should hold only the bitmaps of one sequence, named so
/// that sorting them by name gives slice order.
///
/// Example: bmpvox --i MyImageStackBMPFolder --o nodes.txt --O indices.txt
#[derive(Parser, Debug)]
#[command(name = "bmpvox", version)]
pub struct Cli {
    /// Silent: only warnings and errors are logged
    #[arg(long = "s")]
    pub silent: bool,

    /// Threshold grey level [0, 255]
    #[arg(long = "t", value_name = "LEVEL")]
    pub threshold: Option<i16>,

    /// Invert (negate) the image
    #[arg(long = "n")]
    pub negate: bool,

    /// Input folder (contained BMPs are sorted by name)
    #[arg(long = "i", value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Output file base for node data
    #[arg(long = "o", value_name = "FILE")]
    pub nodes: Option<String>,

    /// Output file base for element (indices) data
    #[arg(long = "O", value_name = "FILE")]
    pub indices: Option<String>,

    /// Optional input file holding axis-aligned group boxes
    #[arg(long = "b", value_name = "FILE")]
    pub boxes: Option<PathBuf>,

    /// Grid buckets per axis as a multiple of the slice width
    #[arg(long = "key-dim-scale", value_name = "SCALE")]
    pub key_dim_scale: Option<f32>,

    /// TOML file with defaults for any of the options above
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layers command-line values over `base`.
    pub fn apply(&self, mut base: RunConfig) -> RunConfig {
        base.silent |= self.silent;
        base.negate |= self.negate;
        if let Some(t) = self.threshold {
            base.threshold = t;
        }
        if let Some(i) = &self.input {
            base.input = i.clone();
        }
        if let Some(o) = &self.nodes {
            base.nodes = o.clone();
        }
        if let Some(o) = &self.indices {
            base.indices = o.clone();
        }
        if let Some(b) = &self.boxes {
            base.boxes = b.clone();
        }
        if let Some(s) = self.key_dim_scale {
            base.key_dim_scale = s;
        }
        base
    }
}
