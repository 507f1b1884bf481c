//! Textual reports over a validated [`Scene`].
//!
//! Every report is written line by line, each line terminated by `\n`.

use std::{fmt, io::Write};

use kover_core::scene::{Antenna, Building, Scene};

/// The reports a scene can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// `bounding box [minX, maxX] x [minY, maxY]`
    BoundingBox,
    /// Summary line, then every building and antenna sorted by identifier.
    Description,
    /// One line counting buildings and antennas.
    Summary,
}

/// Write the requested report for `scene` to `out`.
pub fn write_report(kind: ReportKind, scene: &Scene, out: &mut impl Write) -> std::io::Result<()> {
    match kind {
        ReportKind::BoundingBox => write_bounding_box(scene, out),
        ReportKind::Description => write_description(scene, out),
        ReportKind::Summary => write_summary(scene, out),
    }
}

/// Write the bounding box of every building and antenna extent.
///
/// An empty scene has no bounding box and is reported as
/// `undefined (empty scene)`.
pub fn write_bounding_box(scene: &Scene, out: &mut impl Write) -> std::io::Result<()> {
    match scene.bounding_box() {
        Some(bounds) => writeln!(
            out,
            "bounding box [{}, {}] x [{}, {}]",
            bounds.min_x(),
            bounds.max_x(),
            bounds.min_y(),
            bounds.max_y()
        ),
        None => writeln!(out, "undefined (empty scene)"),
    }
}

/// Write the one-line scene summary.
pub fn write_summary(scene: &Scene, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", Summary(scene))
}

/// Write the summary followed by every building, then every antenna, each
/// group sorted by identifier.
pub fn write_description(scene: &Scene, out: &mut impl Write) -> std::io::Result<()> {
    write_summary(scene, out)?;

    let mut buildings: Vec<&Building> = scene.buildings().collect();
    buildings.sort_by(|a, b| a.id().cmp(b.id()));
    for building in buildings {
        let center = building.center();
        writeln!(
            out,
            "  building {} at {} {} with dimensions {} {}",
            building.id(),
            center.x(),
            center.y(),
            building.half_width(),
            building.half_height()
        )?;
    }

    let mut antennas: Vec<&Antenna> = scene.antennas().collect();
    antennas.sort_by(|a, b| a.id().cmp(b.id()));
    for antenna in antennas {
        let position = antenna.position();
        writeln!(
            out,
            "  antenna {} at {} {} with range {}",
            antenna.id(),
            position.x(),
            position.y(),
            antenna.range()
        )?;
    }

    Ok(())
}

/// `A scene with 2 buildings and 1 antenna`, or `An empty scene`.
struct Summary<'a>(&'a Scene);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buildings = self.0.building_count();
        let antennas = self.0.antenna_count();

        if buildings == 0 && antennas == 0 {
            return f.write_str("An empty scene");
        }

        f.write_str("A scene with ")?;
        if buildings > 0 {
            write!(f, "{buildings} building{}", plural(buildings))?;
            if antennas > 0 {
                f.write_str(" and ")?;
            }
        }
        if antennas > 0 {
            write!(f, "{antennas} antenna{}", plural(antennas))?;
        }
        Ok(())
    }
}

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}
