use bmpvox_geom::{Aabb, Vec3};
use bmpvox_mesh::{GroupBox, LatticeBuilder, SliceMask};
use bmpvox_pool::PoolConfig;
use proptest::prelude::*;
use std::collections::HashSet;

fn config(w: u32, h: u32, d: u32) -> PoolConfig {
    PoolConfig::for_volume(w, h, d, 1.2)
}

fn solid(w: u32, h: u32) -> SliceMask {
    SliceMask::from_fn(w, h, |_, _| true)
}

#[test]
fn adjacent_voxels_share_face_nodes() {
    let mut b = LatticeBuilder::new(&[GroupBox::EVERYTHING], config(16, 16, 1));
    let mask = SliceMask::from_fn(16, 16, |x, y| y == 0 && x < 2);
    b.push_slice(&mask);
    let groups = b.finish();
    let g = &groups[0];
    assert_eq!(g.pool.len(), 12);
    assert_eq!(g.pool.live_count(), 12);
    let a: HashSet<u32> = g.elements[0].nodes.into_iter().collect();
    let c: HashSet<u32> = g.elements[1].nodes.into_iter().collect();
    assert_eq!(a.intersection(&c).count(), 4);
}

#[test]
fn stacked_slices_share_layer_nodes() {
    let mut b = LatticeBuilder::new(&[GroupBox::EVERYTHING], config(12, 12, 3));
    for _ in 0..3 {
        b.push_slice(&solid(12, 12));
    }
    assert_eq!(b.element_count(), 3 * 12 * 12);
    let groups = b.finish();
    assert_eq!(groups[0].pool.len(), 13 * 13 * 4);
}

#[test]
fn pooled_nodes_sit_on_lattice_points() {
    let mut b = LatticeBuilder::new(&[GroupBox::EVERYTHING], config(12, 12, 2));
    let mask = SliceMask::from_fn(12, 12, |x, y| (x + y) % 3 == 0);
    b.push_slice(&mask);
    b.push_slice(&mask);
    let groups = b.finish();
    for v in groups[0].pool.get_all() {
        assert_eq!(v.pos.x.fract(), 0.0);
        assert_eq!(v.pos.y.fract(), 0.0);
        assert_eq!(v.pos.z.fract(), 0.0);
    }
}

#[test]
fn outside_box_group_takes_the_complement() {
    let bounds = Aabb::new(Vec3::new(2.5, -1.0, -1.0), Vec3::new(100.0, 100.0, 100.0));
    let boxes = [
        GroupBox { bounds, inside: true },
        GroupBox { bounds, inside: false },
    ];
    let mut b = LatticeBuilder::new(&boxes, config(12, 4, 1));
    b.push_slice(&solid(12, 4));
    let groups = b.finish();
    assert_eq!(groups[0].elements.len(), 9 * 4);
    assert_eq!(groups[1].elements.len(), 3 * 4);
    assert_eq!(groups[0].elements.len() + groups[1].elements.len(), 48);
}

#[test]
fn empty_slice_emits_nothing() {
    let mut b = LatticeBuilder::new(&[GroupBox::EVERYTHING], config(12, 12, 1));
    assert_eq!(b.push_slice(&SliceMask::new(12, 12)), 0);
    assert!(b.finish()[0].pool.is_empty());
}

#[test]
fn draining_elements_keeps_numbering() {
    let mut b = LatticeBuilder::new(&[GroupBox::EVERYTHING], config(12, 12, 2));
    let mask = SliceMask::from_fn(12, 12, |x, y| x == y);
    b.push_slice(&mask);
    let first = b.groups_mut()[0].drain_elements();
    b.push_slice(&mask);
    let second = b.groups_mut()[0].drain_elements();
    assert_eq!(first.last().map(|e| e.index), Some(12));
    assert_eq!(second.first().map(|e| e.index), Some(13));
}

#[test]
fn coarse_grid_piles_references_into_one_cell() {
    // dim = 1: every corner of every voxel lands in the same cell
    let mut b = LatticeBuilder::new(&[GroupBox::EVERYTHING], config(1, 40, 1));
    assert_eq!(b.push_slice(&solid(1, 40)), 40);
    let groups = b.finish();
    let g = &groups[0];
    assert_eq!(g.pool.len(), 1);
    assert_eq!(g.pool.ref_count(Vec3::ZERO), Some((40 * 8 % 256) as u8));
    assert!(g.elements.iter().all(|e| e.nodes == [1; 8]));
}

proptest! {
    // Every node referenced by an element is a valid 1-based pool index
    #[test]
    fn element_nodes_index_into_pool(
        bits in proptest::collection::vec(any::<bool>(), 12 * 12),
        depth in 1u32..4,
    ) {
        let mask = SliceMask { width: 12, height: 12, active: bits };
        let mut b = LatticeBuilder::new(&[GroupBox::EVERYTHING], config(12, 12, depth));
        for _ in 0..depth {
            b.push_slice(&mask);
        }
        let groups = b.finish();
        let g = &groups[0];
        prop_assert_eq!(g.elements.len(), mask.active_count() * depth as usize);
        for e in &g.elements {
            let unique: HashSet<u32> = e.nodes.into_iter().collect();
            prop_assert_eq!(unique.len(), 8);
            for n in e.nodes {
                prop_assert!(n >= 1 && (n as usize) <= g.pool.len());
            }
        }
    }
}
