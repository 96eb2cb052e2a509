//! Location registry: the set of valid locations and their coordinates.
//!
//! Locations are interned into dense [`LocationIdx`] values in
//! **lexicographic order of identifier**.  The path finder breaks cost ties on
//! `LocationIdx`, which therefore breaks them on identifier.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest location.  Used
//! to snap a raw coordinate to the closest known city.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use wf_core::{GeoPoint, LocationId, LocationIdx};

use crate::{GraphError, GraphResult};

// ── Location ──────────────────────────────────────────────────────────────────

/// A named place with geographic coordinates.  A graph node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id:   LocationId,
    pub name: String,
    pub pos:  GeoPoint,
}

impl Location {
    /// A location whose display name is its identifier.
    pub fn new(id: impl Into<LocationId>, lat: f64, lon: f64) -> Self {
        let id = id.into();
        Self { name: id.as_str().to_owned(), id, pos: GeoPoint::new(lat, lon) }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Location) -> f64 {
        self.pos.distance_km(other.pos)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.pos)
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct LocationEntry {
    point: [f64; 2], // [lat, lon]
    idx:   LocationIdx,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough to rank
    /// candidates; use [`Location::distance_km`] for a real distance.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── LocationRegistry ──────────────────────────────────────────────────────────

/// Immutable set of locations, indexed both by identifier and by
/// [`LocationIdx`].
#[derive(Debug)]
pub struct LocationRegistry {
    /// Sorted by `id`.  Indexed by `LocationIdx`.
    locations:   Vec<Location>,
    by_id:       FxHashMap<LocationId, LocationIdx>,
    spatial_idx: RTree<LocationEntry>,
}

impl LocationRegistry {
    /// Validate and intern `records`.
    ///
    /// Identifiers are trimmed of surrounding whitespace and must be
    /// non-empty and unique.  Coordinates must be finite and in range.
    pub fn build(records: Vec<Location>) -> GraphResult<Self> {
        let mut locations = Vec::with_capacity(records.len());
        for mut loc in records {
            let trimmed = loc.id.as_str().trim();
            if trimmed.is_empty() {
                return Err(GraphError::EmptyLocationId);
            }
            if trimmed.len() != loc.id.as_str().len() {
                loc.id = LocationId::from(trimmed);
            }
            if loc.name.trim().is_empty() {
                loc.name = loc.id.as_str().to_owned();
            }
            if let Err(source) = GeoPoint::try_new(loc.pos.lat, loc.pos.lon) {
                return Err(GraphError::InvalidLocation { id: loc.id, source });
            }
            locations.push(loc);
        }

        locations.sort_by(|a, b| a.id.cmp(&b.id));
        if let Some(dup) = locations.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(GraphError::DuplicateLocation(dup[0].id.clone()));
        }

        let by_id = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (loc.id.clone(), LocationIdx(i as u32)))
            .collect();

        let entries: Vec<LocationEntry> = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| LocationEntry {
                point: [loc.pos.lat, loc.pos.lon],
                idx:   LocationIdx(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(Self { locations, by_id, spatial_idx })
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// `true` if `id` names a registered location.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Index of `id`, or `None` if it is not registered.
    #[inline]
    pub fn lookup(&self, id: &str) -> Option<LocationIdx> {
        self.by_id.get(id).copied()
    }

    /// Index of `id`, or [`GraphError::UnknownLocation`].
    pub fn resolve(&self, id: &str) -> GraphResult<LocationIdx> {
        self.lookup(id)
            .ok_or_else(|| GraphError::UnknownLocation(LocationId::from(id)))
    }

    /// The location at `idx`.
    ///
    /// # Panics
    /// Panics if `idx` was not issued by this registry.
    #[inline]
    pub fn get(&self, idx: LocationIdx) -> &Location {
        &self.locations[idx.index()]
    }

    /// All locations in lexicographic identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The location closest to `pos`.  `None` only if the registry is empty.
    pub fn nearest(&self, pos: GeoPoint) -> Option<LocationIdx> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.idx)
    }

    /// Up to `k` locations closest to `pos`, nearest first.
    pub fn k_nearest(&self, pos: GeoPoint, k: usize) -> Vec<LocationIdx> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.idx)
            .collect()
    }
}
