use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::api::error::OrreryError;

/// Slice/stack counts of a generated solid.
///
/// Always at least [`Tessellation::MIN_SLICES`] × [`Tessellation::MIN_STACKS`];
/// smaller requests are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TessellationRepr", into = "TessellationRepr")]
pub struct Tessellation {
    slices: u32,
    stacks: u32,
}

/// Raw JSON form. A missing count falls back to the body sphere default.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct TessellationRepr {
    slices: u32,
    stacks: u32,
}

impl Default for TessellationRepr {
    fn default() -> Self {
        Tessellation::BODY_DEFAULT.into()
    }
}

impl From<TessellationRepr> for Tessellation {
    fn from(repr: TessellationRepr) -> Self {
        Tessellation::new(repr.slices, repr.stacks)
    }
}

impl From<Tessellation> for TessellationRepr {
    fn from(t: Tessellation) -> Self {
        TessellationRepr {
            slices: t.slices,
            stacks: t.stacks,
        }
    }
}

/// Which count the Up/Down keys change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TessellationAxis {
    Slices,
    Stacks,
}

impl TessellationAxis {
    pub fn toggled(self) -> Self {
        match self {
            TessellationAxis::Slices => TessellationAxis::Stacks,
            TessellationAxis::Stacks => TessellationAxis::Slices,
        }
    }
}

impl Tessellation {
    pub const MIN_SLICES: u32 = 3;
    pub const MIN_STACKS: u32 = 2;
    /// Sphere tessellation used for bodies unless configured otherwise.
    pub const BODY_DEFAULT: Tessellation = Tessellation {
        slices: 28,
        stacks: 24,
    };

    pub fn new(slices: u32, stacks: u32) -> Self {
        let clamped = Self {
            slices: slices.max(Self::MIN_SLICES),
            stacks: stacks.max(Self::MIN_STACKS),
        };
        if clamped.slices != slices || clamped.stacks != stacks {
            log::debug!(
                "tessellation {slices}x{stacks} clamped to {}x{}",
                clamped.slices,
                clamped.stacks
            );
        }
        clamped
    }

    pub fn slices(&self) -> u32 {
        self.slices
    }

    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    /// Step one count by `delta`, clamped to the minimum.
    pub fn adjust(self, axis: TessellationAxis, delta: i32) -> Self {
        let step = |value: u32| value.saturating_add_signed(delta);
        match axis {
            TessellationAxis::Slices => Self::new(step(self.slices), self.stacks),
            TessellationAxis::Stacks => Self::new(self.slices, step(self.stacks)),
        }
    }
}

/// Solid family a mesh handle is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshShape {
    /// Unit sphere.
    Sphere,
    /// Torus with unit major radius. The tube radius is stored as raw f32
    /// bits so the shape can key a hash map.
    Torus { tube_ratio_bits: u32 },
}

impl MeshShape {
    pub fn torus(tube_ratio: f32) -> Self {
        MeshShape::Torus {
            tube_ratio_bits: tube_ratio.to_bits(),
        }
    }

    /// Tube radius relative to the major radius; 0 for spheres.
    pub fn tube_ratio(&self) -> f32 {
        match self {
            MeshShape::Sphere => 0.0,
            MeshShape::Torus { tube_ratio_bits } => f32::from_bits(*tube_ratio_bits),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MeshShape::Sphere => "sphere",
            MeshShape::Torus { .. } => "torus",
        }
    }
}

/// Identity of a generated mesh. A change in either part is a different mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshKey {
    pub shape: MeshShape,
    pub tessellation: Tessellation,
}

impl MeshKey {
    pub fn sphere(tessellation: Tessellation) -> Self {
        Self {
            shape: MeshShape::Sphere,
            tessellation,
        }
    }

    pub fn torus(tube_ratio: f32, tessellation: Tessellation) -> Self {
        Self {
            shape: MeshShape::torus(tube_ratio),
            tessellation,
        }
    }
}

/// Backend mesh handles keyed by [`MeshKey`], built on first use.
///
/// When a build fails the error is logged once and the last handle
/// successfully resolved for the same shape keeps being returned, so a bad
/// tessellation change never leaves the scene without a mesh.
///
/// Every lookup stamps the entry with a use counter. Entries not used since
/// the last [`MeshCache::next_frame`] are stale and can be evicted with
/// [`MeshCache::evict_stale`] to make room for a new key.
#[derive(Debug)]
pub struct MeshCache<H> {
    entries: HashMap<MeshKey, CachedMesh<H>>,
    last_good: HashMap<MeshShape, MeshKey>,
    failed: HashSet<MeshKey>,
    uses: u64,
    frame_start: u64,
}

#[derive(Debug)]
struct CachedMesh<H> {
    handle: H,
    last_used: u64,
}

impl<H> MeshCache<H> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            last_good: HashMap::new(),
            failed: HashSet::new(),
            uses: 0,
            frame_start: 0,
        }
    }

    /// Start a new frame. Entries resolved before this call become stale
    /// until they are resolved again.
    pub fn next_frame(&mut self) {
        self.frame_start = self.uses + 1;
    }

    fn stamp(&mut self) -> u64 {
        self.uses += 1;
        self.uses
    }

    /// Handle for `key`, building it with `build` on a cache miss.
    ///
    /// Returns `None` only when the build fails and no handle of the same
    /// shape has ever been built.
    pub fn resolve<F>(&mut self, key: MeshKey, build: F) -> Option<&H>
    where
        F: FnOnce(&MeshKey) -> Result<H, OrreryError>,
    {
        let stamp = self.stamp();
        match self.entries.get_mut(&key) {
            Some(entry) => entry.last_used = stamp,
            None => {
                if self.failed.contains(&key) {
                    return self.fallback(&key);
                }
                match build(&key) {
                    Ok(handle) => {
                        log::debug!(
                            "built {} mesh {}x{}",
                            key.shape.kind(),
                            key.tessellation.slices(),
                            key.tessellation.stacks()
                        );
                        self.entries.insert(
                            key,
                            CachedMesh {
                                handle,
                                last_used: stamp,
                            },
                        );
                    }
                    Err(err) => {
                        log::warn!("{err}; keeping previous mesh");
                        self.failed.insert(key);
                        return self.fallback(&key);
                    }
                }
            }
        }
        self.last_good.insert(key.shape, key);
        self.get(&key)
    }

    fn fallback(&mut self, key: &MeshKey) -> Option<&H> {
        let previous = *self.last_good.get(&key.shape)?;
        let stamp = self.stamp();
        let entry = self.entries.get_mut(&previous)?;
        entry.last_used = stamp;
        Some(&entry.handle)
    }

    /// Remove the least recently used entry that has not been resolved in
    /// the current frame, handing its handle back for reuse.
    pub fn evict_stale(&mut self) -> Option<(MeshKey, H)> {
        let frame_start = self.frame_start;
        let stale = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.last_used < frame_start)
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| *key)?;
        let entry = self.entries.remove(&stale)?;
        if self.last_good.get(&stale.shape) == Some(&stale) {
            self.last_good.remove(&stale.shape);
        }
        log::debug!(
            "evicted {} mesh {}x{}",
            stale.shape.kind(),
            stale.tessellation.slices(),
            stale.tessellation.stacks()
        );
        Some((stale, entry.handle))
    }

    pub fn contains(&self, key: &MeshKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &MeshKey) -> Option<&H> {
        self.entries.get(key).map(|entry| &entry.handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MeshKey, &H)> {
        self.entries.iter().map(|(key, entry)| (key, &entry.handle))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_good.clear();
        self.failed.clear();
    }
}

impl<H> Default for MeshCache<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing(key: &MeshKey) -> Result<u32, OrreryError> {
        Err(OrreryError::MeshBuild {
            key: *key,
            reason: "out of memory".into(),
        })
    }

    #[test]
    fn tessellation_clamps_to_minimum() {
        let t = Tessellation::new(1, 0);
        assert_eq!((t.slices(), t.stacks()), (3, 2));
        assert_eq!(Tessellation::new(28, 24).slices(), 28);
    }

    #[test]
    fn adjust_steps_and_clamps() {
        let t = Tessellation::new(4, 3);
        assert_eq!(t.adjust(TessellationAxis::Slices, 1), Tessellation::new(5, 3));
        assert_eq!(t.adjust(TessellationAxis::Stacks, -1), Tessellation::new(4, 2));
        let floor = Tessellation::new(3, 2)
            .adjust(TessellationAxis::Slices, -1)
            .adjust(TessellationAxis::Stacks, -5);
        assert_eq!(floor, Tessellation::new(3, 2));
    }

    #[test]
    fn axis_toggles_between_slices_and_stacks() {
        assert_eq!(TessellationAxis::Slices.toggled(), TessellationAxis::Stacks);
        assert_eq!(TessellationAxis::Stacks.toggled(), TessellationAxis::Slices);
    }

    #[test]
    fn tessellation_round_trips_through_json() {
        let json = serde_json::to_string(&Tessellation::new(45, 2)).unwrap();
        assert_eq!(json, r#"{"slices":45,"stacks":2}"#);
        let clamped: Tessellation = serde_json::from_str(r#"{"slices":2,"stacks":1}"#).unwrap();
        assert_eq!(clamped, Tessellation::new(3, 2));
    }

    #[test]
    fn partial_tessellation_json_fills_in_defaults() {
        let t: Tessellation = serde_json::from_str(r#"{"slices":40}"#).unwrap();
        assert_eq!(t, Tessellation::new(40, 24));
        let t: Tessellation = serde_json::from_str("{}").unwrap();
        assert_eq!(t, Tessellation::BODY_DEFAULT);
    }

    #[test]
    fn torus_keys_differ_by_tube_ratio() {
        let t = Tessellation::new(45, 2);
        assert_ne!(MeshKey::torus(0.1, t), MeshKey::torus(0.2, t));
        assert_eq!(MeshKey::torus(0.1, t), MeshKey::torus(0.1, t));
        assert!((MeshShape::torus(0.25).tube_ratio() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn cache_builds_once_per_key() {
        let mut cache = MeshCache::new();
        let mut builds = 0;
        let key = MeshKey::sphere(Tessellation::new(28, 24));
        for _ in 0..3 {
            let handle = cache.resolve(key, |_| {
                builds += 1;
                Ok(7u32)
            });
            assert_eq!(handle, Some(&7));
        }
        assert_eq!(builds, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn tessellation_change_builds_a_new_handle() {
        let mut cache = MeshCache::new();
        let a = MeshKey::sphere(Tessellation::new(28, 24));
        let b = MeshKey::sphere(Tessellation::new(29, 24));
        assert_eq!(cache.resolve(a, |_| Ok(1u32)), Some(&1));
        assert_eq!(cache.resolve(b, |_| Ok(2u32)), Some(&2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failed_build_keeps_previous_handle() {
        let mut cache = MeshCache::new();
        let good = MeshKey::sphere(Tessellation::new(28, 24));
        let bad = MeshKey::sphere(Tessellation::new(500, 24));
        cache.resolve(good, |_| Ok(1u32));
        assert_eq!(cache.resolve(bad, failing), Some(&1));
        assert!(cache.get(&bad).is_none());

        // The failed key is not rebuilt on later frames.
        let handle = cache.resolve(bad, |_| panic!("rebuild attempted"));
        assert_eq!(handle, Some(&1));
    }

    #[test]
    fn failed_build_without_previous_handle_is_none() {
        let mut cache: MeshCache<u32> = MeshCache::new();
        let key = MeshKey::torus(0.15, Tessellation::new(45, 2));
        assert!(cache.resolve(key, failing).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn evict_stale_skips_entries_used_this_frame() {
        let mut cache = MeshCache::new();
        let old = MeshKey::sphere(Tessellation::new(28, 24));
        let star = MeshKey::sphere(Tessellation::new(4, 4));
        cache.resolve(old, |_| Ok(1u32));
        cache.resolve(star, |_| Ok(2u32));
        cache.next_frame();
        cache.resolve(star, |_| panic!("cached"));
        assert_eq!(cache.evict_stale(), Some((old, 1)));
        assert_eq!(cache.evict_stale(), None);
        assert!(!cache.contains(&old));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evict_stale_takes_least_recently_used_first() {
        let mut cache = MeshCache::new();
        let keys: Vec<_> = (10..13).map(|s| MeshKey::sphere(Tessellation::new(s, 24))).collect();
        for (i, key) in keys.iter().enumerate() {
            cache.resolve(*key, |_| Ok(i as u32));
            cache.next_frame();
        }
        cache.resolve(keys[0], |_| panic!("cached"));
        cache.next_frame();
        assert_eq!(cache.evict_stale().map(|(key, _)| key), Some(keys[1]));
        assert_eq!(cache.evict_stale().map(|(key, _)| key), Some(keys[2]));
    }

    #[test]
    fn fallback_never_crosses_shapes() {
        let mut cache = MeshCache::new();
        cache.resolve(MeshKey::sphere(Tessellation::new(8, 8)), |_| Ok(1u32));
        let ring = MeshKey::torus(0.15, Tessellation::new(45, 2));
        assert!(cache.resolve(ring, failing).is_none());
    }
}
