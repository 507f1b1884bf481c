//! Scene reader: the `begin scene` / `end scene` framing around content lines.

use log::{info, trace};

use kover_core::scene::Scene;

use crate::{
    builder::SceneBuilder,
    config::ParseConfig,
    error::{ParseError, Result, SceneErrorKind},
    line::SourceLine,
    span::Span,
};

/// Exact text of the first line of a scene.
pub const BEGIN_MARKER: &str = "begin scene";

/// Exact text of the line closing a scene.
pub const END_MARKER: &str = "end scene";

/// Split `source` into lines, numbered from 1.
///
/// Only `\n` terminates a line; any other character, including `\r`, is
/// part of the line text.
fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    source
        .split_inclusive('\n')
        .scan(0, |offset, raw| {
            let start = *offset;
            *offset += raw.len();
            Some((start, raw))
        })
        .enumerate()
        .map(|(index, (offset, raw))| {
            let text = raw.strip_suffix('\n').unwrap_or(raw);
            SourceLine::new(index + 1, text, offset)
        })
}

/// Read a complete scene from `source`.
///
/// The first line must be exactly [`BEGIN_MARKER`]. Content lines follow
/// until a line exactly equal to [`END_MARKER`]; anything after that line is
/// ignored. The first error aborts the read.
pub(crate) fn read_scene(source: &str, config: ParseConfig) -> Result<Scene> {
    let mut lines = source_lines(source);

    match lines.next() {
        Some(first) if first.text() == BEGIN_MARKER => {}
        Some(first) => {
            return Err(ParseError::new(SceneErrorKind::MissingBeginMarker)
                .with_label(first.span(), "expected `begin scene`"));
        }
        None => {
            return Err(ParseError::new(SceneErrorKind::MissingBeginMarker)
                .with_label(Span::new(0..0), "empty input"));
        }
    }

    let mut builder = SceneBuilder::new(config);
    for line in lines {
        trace!(line = line.number(), text = line.text(); "Reading line");

        if line.text() == END_MARKER {
            let scene = builder.finish();
            info!(
                buildings = scene.building_count(),
                antennas = scene.antenna_count(),
                lines = line.number();
                "Scene read"
            );
            return Ok(scene);
        }

        builder.process_line(&line)?;
    }

    let end = source.len();
    Err(ParseError::new(SceneErrorKind::MissingEndMarker)
        .with_label(Span::new(end..end), "input ends here"))
}
