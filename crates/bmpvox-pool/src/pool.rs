use bmpvox_geom::Vec3;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::diag::{DiagnosticSink, LogSink, PoolWarning};
use crate::key::{CellKey, PoolConfig};
use crate::vertex::PooledVertex;

/// Stable name of a storage slot. Never renumbered; reused after release.
pub type Handle = u32;

/// Per-cell reference count. Increments wrap modulo 256 in every build, so a
/// cell with more than `u8::MAX` live references reports the count mod 256.
pub type RefCount = u8;

/// Index record for one occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolEntry {
    pub handle: Handle,
    pub count: RefCount,
}

/// Deduplicating vertex store.
///
/// Every occupied cell maps to exactly one handle with a count of at least
/// one. A handle is either owned by one occupied cell, parked on the free
/// list, or not yet allocated. Storage never shrinks; freed slots keep their
/// last contents until a later miss overwrites them.
///
/// Handles are names, not references: a slot can be reused by any mutating
/// call, so re-read through [`VertexPool::get`] or [`VertexPool::get_all`]
/// after mutating.
pub struct VertexPool<V, S = LogSink> {
    config: PoolConfig,
    verts: Vec<V>,
    refs: HashMap<CellKey, PoolEntry>,
    free: Vec<Handle>,
    sink: S,
}

impl<V: PooledVertex> VertexPool<V, LogSink> {
    pub fn new(config: PoolConfig) -> Self {
        Self::with_sink(config, LogSink)
    }
}

impl<V: PooledVertex, S: DiagnosticSink> VertexPool<V, S> {
    pub fn with_sink(config: PoolConfig, sink: S) -> Self {
        Self {
            config,
            verts: Vec::new(),
            refs: HashMap::new(),
            free: Vec::new(),
            sink,
        }
    }

    /// Adds one reference to the cell holding `v` and returns its handle.
    ///
    /// On a miss the vertex is stored in the most recently freed slot, or a
    /// new slot when none is free. On a hit only the count changes. Either
    /// way the stored position then moves halfway toward `v`'s position,
    /// which makes repeated merges favour recent samples over the centroid.
    pub fn add_vert_ref(&mut self, v: V) -> Handle {
        let incoming = v.position();
        let key = self.config.key(incoming);
        let handle = match self.refs.entry(key) {
            Entry::Occupied(mut e) => {
                let entry = e.get_mut();
                entry.count = entry.count.wrapping_add(1);
                entry.handle
            }
            Entry::Vacant(e) => {
                let handle = match self.free.pop() {
                    Some(reused) => {
                        self.verts[reused as usize] = v;
                        reused
                    }
                    None => {
                        let fresh = self.verts.len() as Handle;
                        self.verts.push(v);
                        fresh
                    }
                };
                e.insert(PoolEntry { handle, count: 1 });
                handle
            }
        };

        let slot = &mut self.verts[handle as usize];
        slot.set_position(slot.position().midpoint(incoming));
        handle
    }

    /// Releases one reference to the cell of the vertex currently stored at
    /// `handle`. The key is recomputed from the stored (blended) position.
    pub fn remove_vert_ref(&mut self, handle: Handle) {
        match self.verts.get(handle as usize) {
            Some(v) => {
                let pos = v.position();
                self.remove_vert_ref_at(pos);
            }
            None => self.sink.warn(PoolWarning::HandleOutOfRange {
                handle,
                len: self.verts.len(),
            }),
        }
    }

    /// Releases one reference to the cell containing `pos`. When the count
    /// reaches zero the cell is dropped and its handle is freed for reuse.
    pub fn remove_vert_ref_at(&mut self, pos: Vec3) {
        let key = self.config.key(pos);
        let Some(entry) = self.refs.get_mut(&key) else {
            self.sink.warn(PoolWarning::UnknownKey { key });
            return;
        };
        if entry.count == 0 {
            self.sink.warn(PoolWarning::RefCountUnderflow {
                key,
                handle: entry.handle,
            });
            return;
        }
        entry.count -= 1;
        if entry.count == 0 {
            let handle = entry.handle;
            self.refs.remove(&key);
            self.free.push(handle);
        }
    }

    /// All storage slots in handle order, freed slots included.
    #[inline]
    pub fn get_all(&self) -> &[V] {
        &self.verts
    }

    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&V> {
        self.verts.get(handle as usize)
    }

    /// Storage slots ever allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Occupied cells.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.refs.len()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn key_of(&self, pos: Vec3) -> CellKey {
        self.config.key(pos)
    }

    pub fn entry_at(&self, pos: Vec3) -> Option<PoolEntry> {
        self.refs.get(&self.config.key(pos)).copied()
    }

    pub fn handle_of(&self, pos: Vec3) -> Option<Handle> {
        self.entry_at(pos).map(|e| e.handle)
    }

    pub fn ref_count(&self, pos: Vec3) -> Option<RefCount> {
        self.entry_at(pos).map(|e| e.count)
    }

    #[inline]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_verts(self) -> Vec<V> {
        self.verts
    }
}
