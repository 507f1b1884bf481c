//! The scene model: buildings, antennas, and the invariants tying them together.
//!
//! A [`Scene`] only ever holds a consistent set of entities. Every insertion
//! goes through [`Scene::add_building`] or [`Scene::add_antenna`], which
//! reject the new entity with a [`Conflict`] instead of storing it when it
//! would break one of the scene invariants:
//!
//! 1. No two buildings share an identifier.
//! 2. No two antennas share an identifier.
//! 3. No two building rectangles overlap (touching edges is allowed).
//! 4. No two antennas occupy the same point.
//!
//! Building and antenna identifiers live in independent namespaces.

use indexmap::IndexMap;
use log::trace;
use thiserror::Error;

use crate::{
    geometry::{Bounds, Point},
    identifier::Id,
};

/// An axis-aligned rectangular building centered at `(x, y)`.
///
/// The rectangle spans `[x - w, x + w] x [y - h, y + h]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    id: Id,
    center: Point,
    half_width: i32,
    half_height: i32,
}

impl Building {
    /// Creates a new building.
    ///
    /// `half_width` and `half_height` are expected to be strictly positive.
    pub fn new(id: Id, center: Point, half_width: i32, half_height: i32) -> Self {
        debug_assert!(half_width > 0 && half_height > 0);
        Self {
            id,
            center,
            half_width,
            half_height,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn half_width(&self) -> i32 {
        self.half_width
    }

    pub fn half_height(&self) -> i32 {
        self.half_height
    }

    /// The rectangle covered by this building.
    pub fn bounds(&self) -> Bounds {
        self.center.to_bounds(self.half_width, self.half_height)
    }

    /// Returns `true` if the interiors of the two buildings intersect.
    pub fn overlaps(&self, other: &Building) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

/// An antenna located at a point, with a coverage radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Antenna {
    id: Id,
    position: Point,
    range: i32,
}

impl Antenna {
    /// Creates a new antenna. `range` is expected to be strictly positive.
    pub fn new(id: Id, position: Point, range: i32) -> Self {
        debug_assert!(range > 0);
        Self {
            id,
            position,
            range,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn range(&self) -> i32 {
        self.range
    }

    /// The square `[x - r, x + r] x [y - r, y + r]` covered by this antenna.
    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(self.range, self.range)
    }

    /// Returns `true` if both antennas sit on the same point.
    pub fn same_position(&self, other: &Antenna) -> bool {
        self.position == other.position
    }
}

/// Reason an entity could not be added to a [`Scene`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("building identifier {0} is non unique")]
    DuplicateBuildingId(Id),

    #[error("antenna identifier {0} is non unique")]
    DuplicateAntennaId(Id),

    /// `existing` is the first stored building, in insertion order, that
    /// overlaps the rejected building `new`.
    #[error("buildings {existing} and {new} are overlapping")]
    OverlappingBuildings { existing: Id, new: Id },

    #[error("antennas {existing} and {new} have the same position")]
    CoincidentAntennas { existing: Id, new: Id },
}

/// A validated collection of buildings and antennas.
///
/// Both collections keep input order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    buildings: IndexMap<Id, Building>,
    antennas: IndexMap<Id, Antenna>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a building, or reports why it cannot be added.
    ///
    /// The identifier check runs before the overlap check.
    ///
    /// # Errors
    ///
    /// Returns [`Conflict::DuplicateBuildingId`] or
    /// [`Conflict::OverlappingBuildings`]; the scene is left unchanged.
    pub fn add_building(&mut self, building: Building) -> Result<(), Conflict> {
        if self.buildings.contains_key(building.id()) {
            return Err(Conflict::DuplicateBuildingId(building.id().clone()));
        }

        if let Some(existing) = self.buildings.values().find(|b| b.overlaps(&building)) {
            return Err(Conflict::OverlappingBuildings {
                existing: existing.id().clone(),
                new: building.id().clone(),
            });
        }

        trace!(id:% = building.id(); "Building added");
        self.buildings.insert(building.id().clone(), building);
        Ok(())
    }

    /// Adds an antenna, or reports why it cannot be added.
    ///
    /// # Errors
    ///
    /// Returns [`Conflict::DuplicateAntennaId`] or
    /// [`Conflict::CoincidentAntennas`]; the scene is left unchanged.
    pub fn add_antenna(&mut self, antenna: Antenna) -> Result<(), Conflict> {
        if self.antennas.contains_key(antenna.id()) {
            return Err(Conflict::DuplicateAntennaId(antenna.id().clone()));
        }

        if let Some(existing) = self.antennas.values().find(|a| a.same_position(&antenna)) {
            return Err(Conflict::CoincidentAntennas {
                existing: existing.id().clone(),
                new: antenna.id().clone(),
            });
        }

        trace!(id:% = antenna.id(); "Antenna added");
        self.antennas.insert(antenna.id().clone(), antenna);
        Ok(())
    }

    /// Buildings in insertion order.
    pub fn buildings(&self) -> impl ExactSizeIterator<Item = &Building> {
        self.buildings.values()
    }

    /// Antennas in insertion order.
    pub fn antennas(&self) -> impl ExactSizeIterator<Item = &Antenna> {
        self.antennas.values()
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.get(id)
    }

    pub fn antenna(&self, id: &str) -> Option<&Antenna> {
        self.antennas.get(id)
    }

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    pub fn antenna_count(&self) -> usize {
        self.antennas.len()
    }

    /// Returns `true` if the scene has neither buildings nor antennas.
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty() && self.antennas.is_empty()
    }

    /// The smallest box containing every building rectangle and every
    /// antenna coverage square, or `None` for an empty scene.
    pub fn bounding_box(&self) -> Option<Bounds> {
        self.buildings
            .values()
            .map(Building::bounds)
            .chain(self.antennas.values().map(Antenna::bounds))
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(id: &str, x: i32, y: i32, w: i32, h: i32) -> Building {
        Building::new(Id::new(id), Point::new(x, y), w, h)
    }

    fn antenna(id: &str, x: i32, y: i32, r: i32) -> Antenna {
        Antenna::new(Id::new(id), Point::new(x, y), r)
    }

    #[test]
    fn test_building_overlaps() {
        let a = building("A", 0, 0, 5, 5);
        let b = building("B", 5, 0, 5, 5);
        let c = building("C", 10, 0, 5, 5);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_antenna_same_position() {
        let a = antenna("a", 1, 2, 3);
        let b = antenna("b", 1, 2, 10);
        let c = antenna("c", 2, 1, 3);

        assert!(a.same_position(&b));
        assert!(!a.same_position(&c));
    }

    #[test]
    fn test_add_building_duplicate_id() {
        let mut scene = Scene::new();
        scene.add_building(building("A", 0, 0, 1, 1)).unwrap();

        let err = scene
            .add_building(building("A", 100, 100, 1, 1))
            .unwrap_err();
        assert_eq!(err, Conflict::DuplicateBuildingId(Id::new("A")));
        assert_eq!(err.to_string(), "building identifier A is non unique");
        assert_eq!(scene.building_count(), 1);
    }

    #[test]
    fn test_add_building_duplicate_checked_before_overlap() {
        let mut scene = Scene::new();
        scene.add_building(building("A", 0, 0, 5, 5)).unwrap();

        let err = scene.add_building(building("A", 0, 0, 5, 5)).unwrap_err();
        assert!(matches!(err, Conflict::DuplicateBuildingId(_)));
    }

    #[test]
    fn test_add_building_reports_first_overlap_in_insertion_order() {
        let mut scene = Scene::new();
        scene.add_building(building("west", -10, 0, 5, 5)).unwrap();
        scene.add_building(building("east", 10, 0, 5, 5)).unwrap();

        // Overlaps both; `west` was inserted first.
        let err = scene.add_building(building("mid", 0, 0, 8, 1)).unwrap_err();
        assert_eq!(
            err,
            Conflict::OverlappingBuildings {
                existing: Id::new("west"),
                new: Id::new("mid"),
            }
        );
        assert_eq!(err.to_string(), "buildings west and mid are overlapping");
        assert_eq!(scene.building_count(), 2);
    }

    #[test]
    fn test_add_antenna_coincident() {
        let mut scene = Scene::new();
        scene.add_antenna(antenna("a1", 0, 0, 1)).unwrap();
        scene.add_antenna(antenna("a2", 3, 3, 1)).unwrap();

        let err = scene.add_antenna(antenna("a3", 3, 3, 7)).unwrap_err();
        assert_eq!(
            err,
            Conflict::CoincidentAntennas {
                existing: Id::new("a2"),
                new: Id::new("a3"),
            }
        );
        assert_eq!(err.to_string(), "antennas a2 and a3 have the same position");
        assert_eq!(scene.antenna_count(), 2);
    }

    #[test]
    fn test_add_antenna_duplicate_id() {
        let mut scene = Scene::new();
        scene.add_antenna(antenna("a", 0, 0, 1)).unwrap();

        let err = scene.add_antenna(antenna("a", 0, 0, 1)).unwrap_err();
        assert_eq!(err, Conflict::DuplicateAntennaId(Id::new("a")));
        assert_eq!(err.to_string(), "antenna identifier a is non unique");
    }

    #[test]
    fn test_namespaces_are_independent() {
        let mut scene = Scene::new();
        scene.add_building(building("x", 0, 0, 1, 1)).unwrap();
        scene.add_antenna(antenna("x", 0, 0, 1)).unwrap();

        assert_eq!(scene.building_count(), 1);
        assert_eq!(scene.antenna_count(), 1);
        assert!(scene.building("x").is_some());
        assert!(scene.antenna("x").is_some());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut scene = Scene::new();
        scene.add_building(building("zebra", 0, 0, 1, 1)).unwrap();
        scene.add_building(building("apple", 10, 0, 1, 1)).unwrap();

        let ids: Vec<&str> = scene.buildings().map(|b| b.id().as_str()).collect();
        assert_eq!(ids, ["zebra", "apple"]);
    }

    #[test]
    fn test_bounding_box_empty() {
        assert!(Scene::new().is_empty());
        assert_eq!(Scene::new().bounding_box(), None);
    }

    #[test]
    fn test_bounding_box_single_building() {
        let mut scene = Scene::new();
        scene.add_building(building("B", 0, 0, 5, 5)).unwrap();

        let bounds = scene.bounding_box().unwrap();
        assert_eq!((bounds.min_x(), bounds.max_x()), (-5, 5));
        assert_eq!((bounds.min_y(), bounds.max_y()), (-5, 5));
    }

    #[test]
    fn test_bounding_box_includes_antenna_range() {
        let mut scene = Scene::new();
        scene.add_building(building("B", 0, 0, 1, 1)).unwrap();
        scene.add_antenna(antenna("a", 10, -3, 4)).unwrap();

        let bounds = scene.bounding_box().unwrap();
        assert_eq!((bounds.min_x(), bounds.max_x()), (-1, 14));
        assert_eq!((bounds.min_y(), bounds.max_y()), (-7, 1));
    }
}
