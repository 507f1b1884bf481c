//! Scene builder: turns recognized lines into scene entities.
//!
//! For each line the builder checks the lexical form of every argument, in
//! argument order, builds the entity and hands it to the [`Scene`], which
//! enforces the cross-entity invariants. The first failure is returned and
//! the builder is not used any further.

use std::collections::HashMap;

use log::debug;

use kover_core::{
    geometry::Point,
    identifier::Id,
    scene::{Antenna, Building, Conflict, Scene},
};

use crate::{
    config::ParseConfig,
    error::{ParseError, Result, SceneErrorKind},
    lexical,
    line::{self, Keyword, RecognizedLine, SourceLine},
    span::{Span, Spanned},
};

/// Accumulates a scene one line at a time.
pub(crate) struct SceneBuilder {
    config: ParseConfig,
    scene: Scene,
    /// Line spans of accepted entities, for pointing at the other side of a conflict.
    building_spans: HashMap<Id, Span>,
    antenna_spans: HashMap<Id, Span>,
}

impl SceneBuilder {
    pub(crate) fn new(config: ParseConfig) -> Self {
        Self {
            config,
            scene: Scene::new(),
            building_spans: HashMap::new(),
            antenna_spans: HashMap::new(),
        }
    }

    /// Process one content line of the scene.
    pub(crate) fn process_line(&mut self, line: &SourceLine<'_>) -> Result<()> {
        let recognized = line::recognize(line, self.config.max_token_length())?;

        match recognized.keyword() {
            Keyword::Building => self.process_building(line, &recognized),
            Keyword::Antenna => self.process_antenna(line, &recognized),
        }
    }

    /// The finished scene.
    pub(crate) fn finish(self) -> Scene {
        self.scene
    }

    fn process_building(&mut self, line: &SourceLine<'_>, recognized: &RecognizedLine<'_>) -> Result<()> {
        let number = line.number();
        let [id, x, y, w, h] = recognized.args() else {
            return Err(ParseError::new(SceneErrorKind::WrongArgumentCount {
                line: number,
                keyword: Keyword::Building,
            }));
        };

        let id = identifier(id, number)?;
        let x = integer(x, number)?;
        let y = integer(y, number)?;
        let w = positive_integer(w, number)?;
        let h = positive_integer(h, number)?;

        let max = self.config.max_buildings();
        if self.scene.building_count() >= max {
            return Err(
                ParseError::new(SceneErrorKind::TooManyBuildings { line: number, max })
                    .with_label(line.span(), "one building too many"),
            );
        }

        self.scene
            .add_building(Building::new(id.clone(), Point::new(x, y), w, h))
            .map_err(|conflict| self.conflict_error(conflict, line.span()))?;

        debug!(id:% = id, x, y, w, h, line = number; "Building accepted");
        self.building_spans.insert(id, line.span());
        Ok(())
    }

    fn process_antenna(&mut self, line: &SourceLine<'_>, recognized: &RecognizedLine<'_>) -> Result<()> {
        let number = line.number();
        let [id, x, y, r] = recognized.args() else {
            return Err(ParseError::new(SceneErrorKind::WrongArgumentCount {
                line: number,
                keyword: Keyword::Antenna,
            }));
        };

        let id = identifier(id, number)?;
        let x = integer(x, number)?;
        let y = integer(y, number)?;
        let r = positive_integer(r, number)?;

        let max = self.config.max_antennas();
        if self.scene.antenna_count() >= max {
            return Err(
                ParseError::new(SceneErrorKind::TooManyAntennas { line: number, max })
                    .with_label(line.span(), "one antenna too many"),
            );
        }

        self.scene
            .add_antenna(Antenna::new(id.clone(), Point::new(x, y), r))
            .map_err(|conflict| self.conflict_error(conflict, line.span()))?;

        debug!(id:% = id, x, y, r, line = number; "Antenna accepted");
        self.antenna_spans.insert(id, line.span());
        Ok(())
    }

    /// Build the error for a rejected entity declared on the line at `span`.
    fn conflict_error(&self, conflict: Conflict, span: Span) -> ParseError {
        let (primary, related) = match &conflict {
            Conflict::DuplicateBuildingId(id) => (
                "duplicate definition".to_string(),
                self.building_spans
                    .get(id)
                    .map(|span| (*span, "first defined here".to_string())),
            ),
            Conflict::DuplicateAntennaId(id) => (
                "duplicate definition".to_string(),
                self.antenna_spans
                    .get(id)
                    .map(|span| (*span, "first defined here".to_string())),
            ),
            Conflict::OverlappingBuildings { existing, .. } => (
                format!("overlaps `{existing}`"),
                self.building_spans
                    .get(existing)
                    .map(|span| (*span, format!("`{existing}` is defined here"))),
            ),
            Conflict::CoincidentAntennas { existing, .. } => (
                format!("same position as `{existing}`"),
                self.antenna_spans
                    .get(existing)
                    .map(|span| (*span, format!("`{existing}` is defined here"))),
            ),
        };

        let mut err = ParseError::new(conflict.into());
        if let Some((related_span, message)) = related {
            err = err.with_secondary_label(related_span, message);
        }
        err.with_label(span, primary)
    }
}

fn identifier(token: &Spanned<&str>, line: usize) -> Result<Id> {
    if !lexical::is_valid_identifier(token) {
        return Err(ParseError::new(SceneErrorKind::InvalidIdentifier {
            line,
            token: token.to_string(),
        })
        .with_label(token.span(), "expected an identifier"));
    }
    Ok(Id::new(token))
}

fn integer(token: &Spanned<&str>, line: usize) -> Result<i32> {
    if !lexical::is_valid_integer(token) {
        return Err(ParseError::new(SceneErrorKind::InvalidInteger {
            line,
            token: token.to_string(),
        })
        .with_label(token.span(), "expected an integer"));
    }
    in_range(token, line)
}

fn positive_integer(token: &Spanned<&str>, line: usize) -> Result<i32> {
    if !lexical::is_valid_positive_integer(token) {
        return Err(ParseError::new(SceneErrorKind::InvalidPositiveInteger {
            line,
            token: token.to_string(),
        })
        .with_label(token.span(), "expected a positive integer"));
    }
    in_range(token, line)
}

/// Convert a lexically valid integer token.
fn in_range(token: &Spanned<&str>, line: usize) -> Result<i32> {
    token.parse::<i32>().map_err(|_| {
        ParseError::new(SceneErrorKind::IntegerOutOfRange {
            line,
            token: token.to_string(),
        })
        .with_label(token.span(), "does not fit in 32 bits")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(builder: &mut SceneBuilder, number: usize, text: &str) -> Result<()> {
        builder.process_line(&SourceLine::new(number, text, 0))
    }

    fn kind_of(text: &str) -> SceneErrorKind {
        let mut builder = SceneBuilder::new(ParseConfig::default());
        process(&mut builder, 2, text).unwrap_err().kind().clone()
    }

    fn invalid_identifier(token: &str) -> SceneErrorKind {
        SceneErrorKind::InvalidIdentifier {
            line: 2,
            token: token.to_string(),
        }
    }

    fn invalid_integer(token: &str) -> SceneErrorKind {
        SceneErrorKind::InvalidInteger {
            line: 2,
            token: token.to_string(),
        }
    }

    fn invalid_positive(token: &str) -> SceneErrorKind {
        SceneErrorKind::InvalidPositiveInteger {
            line: 2,
            token: token.to_string(),
        }
    }

    #[test]
    fn test_building_argument_order() {
        assert_eq!(kind_of("building 1B x y 0 0"), invalid_identifier("1B"));
        assert_eq!(kind_of("building B x y 0 0"), invalid_integer("x"));
        assert_eq!(kind_of("building B 1 y 0 0"), invalid_integer("y"));
        assert_eq!(kind_of("building B 1 2 0 0"), invalid_positive("0"));
        assert_eq!(kind_of("building B 1 2 3 -4"), invalid_positive("-4"));
    }

    #[test]
    fn test_antenna_argument_order() {
        assert_eq!(kind_of("antenna a-1 01 y 0"), invalid_identifier("a-1"));
        assert_eq!(kind_of("antenna a 01 y 0"), invalid_integer("01"));
        assert_eq!(kind_of("antenna a -0 -x 0"), invalid_integer("-x"));
        assert_eq!(kind_of("antenna a -0 0 05"), invalid_positive("05"));
    }

    #[test]
    fn test_out_of_range_integer() {
        assert_eq!(
            kind_of("building B 2147483648 0 1 1"),
            SceneErrorKind::IntegerOutOfRange {
                line: 2,
                token: "2147483648".to_string()
            }
        );
        assert_eq!(
            kind_of("antenna a 0 0 9999999999"),
            SceneErrorKind::IntegerOutOfRange {
                line: 2,
                token: "9999999999".to_string()
            }
        );
    }

    #[test]
    fn test_token_length_checked_before_range() {
        let line = "building B -3000000000 0 1 1";
        assert_eq!(
            kind_of(line),
            SceneErrorKind::TokenTooLong {
                line: 2,
                token: "-3000000000".to_string(),
                max: 10
            }
        );

        let mut builder = SceneBuilder::new(ParseConfig::new(11, 100, 100));
        let err = process(&mut builder, 2, line).unwrap_err();
        assert_eq!(
            err.kind(),
            &SceneErrorKind::IntegerOutOfRange {
                line: 2,
                token: "-3000000000".to_string()
            }
        );
    }

    #[test]
    fn test_accepts_extreme_coordinates() {
        // `-2147483648` is eleven characters long
        let mut builder = SceneBuilder::new(ParseConfig::new(11, 100, 100));
        process(&mut builder, 2, "building B -2147483648 2147483647 1 1").unwrap();
        process(&mut builder, 3, "antenna a -0 0 2147483647").unwrap();

        let scene = builder.finish();
        let building = scene.building("B").unwrap();
        assert_eq!(building.center(), Point::new(i32::MIN, i32::MAX));
        assert_eq!(scene.antenna("a").unwrap().position(), Point::new(0, 0));
    }

    #[test]
    fn test_overlap_error_labels_both_lines() {
        let mut builder = SceneBuilder::new(ParseConfig::default());
        builder
            .process_line(&SourceLine::new(2, "building A 0 0 5 5", 12))
            .unwrap();

        let err = builder
            .process_line(&SourceLine::new(3, "building B 5 0 5 5", 31))
            .unwrap_err();

        assert_eq!(err.to_string(), "buildings A and B are overlapping");
        let labels = err.diagnostic().labels();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].is_secondary());
        assert_eq!(labels[0].span(), Span::new(12..30));
        assert!(labels[1].is_primary());
        assert_eq!(labels[1].span(), Span::new(31..49));
    }

    #[test]
    fn test_duplicate_ids() {
        let mut builder = SceneBuilder::new(ParseConfig::default());
        process(&mut builder, 2, "building A 0 0 1 1").unwrap();
        process(&mut builder, 3, "antenna A 0 0 1").unwrap();

        let err = process(&mut builder, 4, "building A 50 50 1 1").unwrap_err();
        assert_eq!(err.to_string(), "building identifier A is non unique");

        let err = process(&mut builder, 4, "antenna A 9 9 1").unwrap_err();
        assert_eq!(err.to_string(), "antenna identifier A is non unique");
    }

    #[test]
    fn test_coincident_antennas() {
        let mut builder = SceneBuilder::new(ParseConfig::default());
        process(&mut builder, 2, "antenna first 4 4 1").unwrap();
        process(&mut builder, 3, "antenna other 0 0 1").unwrap();

        let err = process(&mut builder, 4, "antenna second 4 4 9").unwrap_err();
        assert_eq!(err.to_string(), "antennas first and second have the same position");
    }

    #[test]
    fn test_building_limit() {
        let mut builder = SceneBuilder::new(ParseConfig::new(10, 2, 100));
        process(&mut builder, 2, "building A 0 0 1 1").unwrap();
        process(&mut builder, 3, "building B 10 0 1 1").unwrap();

        let err = process(&mut builder, 4, "building C 20 0 1 1").unwrap_err();
        assert_eq!(
            err.kind(),
            &SceneErrorKind::TooManyBuildings { line: 4, max: 2 }
        );
    }

    #[test]
    fn test_antenna_limit() {
        let mut builder = SceneBuilder::new(ParseConfig::new(10, 100, 1));
        process(&mut builder, 2, "antenna a 0 0 1").unwrap();

        let err = process(&mut builder, 3, "antenna b 1 0 1").unwrap_err();
        assert_eq!(err.kind(), &SceneErrorKind::TooManyAntennas { line: 3, max: 1 });
    }
}
