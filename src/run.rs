use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use bmpvox_io::{
    RunConfig, create_output, group_path, list_slices, load_slice, probe_dimensions, read_boxes,
    write_elements, write_nodes,
};
use bmpvox_mesh::LatticeBuilder;
use bmpvox_pool::PoolConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub slices: usize,
    pub skipped: usize,
    pub elements: u32,
    /// Node lines written per group.
    pub nodes: Vec<usize>,
}

struct GroupOutput {
    nodes: BufWriter<File>,
    elements: BufWriter<File>,
}

/// Converts the slice stack described by `cfg` into per-group node and
/// element files.
pub fn run(cfg: &RunConfig) -> Result<RunSummary, Box<dyn Error>> {
    let slices = list_slices(&cfg.input)?;
    // All slices are assumed to share the first one's size.
    let (width, height) = probe_dimensions(&slices[0])?;
    let boxes = read_boxes(&cfg.boxes)?;
    if boxes.is_empty() {
        log::warn!("box file {:?} holds no complete records; no output will be written", cfg.boxes);
    }

    let mut outputs = Vec::with_capacity(boxes.len());
    for gi in 0..boxes.len() {
        outputs.push(GroupOutput {
            nodes: create_output(&group_path(&cfg.nodes, gi))?,
            elements: create_output(&group_path(&cfg.indices, gi))?,
        });
    }

    let pool_config = PoolConfig::for_volume(width, height, slices.len() as u32, cfg.key_dim_scale);
    log::info!(
        "{} slice(s) of {}x{}, {} group(s), grid dim {}",
        slices.len(),
        width,
        height,
        boxes.len(),
        pool_config.dim
    );

    let threshold = cfg.threshold();
    let mut builder = LatticeBuilder::new(&boxes, pool_config);
    let mut summary = RunSummary {
        slices: slices.len(),
        ..RunSummary::default()
    };
    for (i, path) in slices.iter().enumerate() {
        if i % 100 == 99 {
            log::info!(target: "slices", "Processing slice {} of {}", i + 1, slices.len());
        }
        match load_slice(path, threshold) {
            Ok(mask) => {
                builder.push_slice(&mask);
            }
            Err(e) => {
                log::error!(target: "slices", "{}", e);
                builder.skip_slice();
                summary.skipped += 1;
                continue;
            }
        }
        for (group, out) in builder.groups_mut().iter_mut().zip(outputs.iter_mut()) {
            write_elements(&mut out.elements, &group.drain_elements())?;
        }
    }
    summary.elements = builder.element_count();

    for (group, mut out) in builder.finish().into_iter().zip(outputs) {
        out.elements.flush()?;
        let n = write_nodes(&mut out.nodes, group.pool.get_all())?;
        out.nodes.flush()?;
        log::debug!(
            "group: {} node slot(s), {} live, {} free",
            n,
            group.pool.live_count(),
            group.pool.free_count()
        );
        summary.nodes.push(n);
    }

    log::info!(
        "Done. Processing of {} bitmap(s) completed ({} element(s)).",
        summary.slices,
        summary.elements
    );
    Ok(summary)
}
