//! Line grammar recognizer.
//!
//! A scene line is a keyword followed by a fixed number of arguments,
//! separated by runs of blanks (spaces and tabs). Leading and trailing
//! blanks are ignored:
//!
//! ```text
//! building ID X Y W H
//! antenna  ID X Y R
//! ```
//!
//! [`recognize`] splits a [`SourceLine`] into its keyword and arguments and
//! checks the arity. The arguments are returned untouched, with their spans;
//! checking their lexical form is left to the scene builder.

use std::fmt;

use winnow::{
    Parser as _,
    combinator::{preceded, repeat, terminated},
    error::{ContextError, ModalResult},
    stream::LocatingSlice,
    token::take_while,
};

use crate::{
    error::{ParseError, Result, SceneErrorKind},
    span::{Span, Spanned},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// The kind of entity a scene line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Building,
    Antenna,
}

impl Keyword {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "building" => Some(Keyword::Building),
            "antenna" => Some(Keyword::Antenna),
            _ => None,
        }
    }

    /// The keyword as written in a scene.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Building => "building",
            Keyword::Antenna => "antenna",
        }
    }

    /// Number of arguments following the keyword.
    pub fn arity(self) -> usize {
        match self {
            Keyword::Building => 5,
            Keyword::Antenna => 4,
        }
    }

    /// The line form, as shown in help messages.
    pub fn usage(self) -> &'static str {
        match self {
            Keyword::Building => "building ID X Y W H",
            Keyword::Antenna => "antenna ID X Y R",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of scene source, without its line terminator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceLine<'src> {
    number: usize,
    text: &'src str,
    offset: usize,
}

impl<'src> SourceLine<'src> {
    /// `offset` is the byte offset of the line start in the whole source.
    pub(crate) fn new(number: usize, text: &'src str, offset: usize) -> Self {
        Self {
            number,
            text,
            offset,
        }
    }

    /// 1-based line number.
    pub(crate) fn number(&self) -> usize {
        self.number
    }

    pub(crate) fn text(&self) -> &'src str {
        self.text
    }

    pub(crate) fn span(&self) -> Span {
        Span::new(self.offset..self.offset + self.text.len())
    }
}

/// A line whose keyword and arity have been checked.
#[derive(Debug)]
pub(crate) struct RecognizedLine<'src> {
    keyword: Keyword,
    args: Vec<Spanned<&'src str>>,
}

impl<'src> RecognizedLine<'src> {
    pub(crate) fn keyword(&self) -> Keyword {
        self.keyword
    }

    /// Exactly [`Keyword::arity`] arguments.
    pub(crate) fn args(&self) -> &[Spanned<&'src str>] {
        &self.args
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Parse zero or more blanks
fn blanks(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., is_blank).void().parse_next(input)
}

/// Parse one maximal run of non-blank characters, with its span in the line
fn word<'a>(input: &mut Input<'a>) -> IResult<(&'a str, std::ops::Range<usize>)> {
    take_while(1.., |c: char| !is_blank(c))
        .with_span()
        .parse_next(input)
}

/// Parse a whole line into its words
fn words<'a>(input: &mut Input<'a>) -> IResult<Vec<(&'a str, std::ops::Range<usize>)>> {
    terminated(repeat(0.., preceded(blanks, word)), blanks).parse_next(input)
}

/// Split a line into blank-separated tokens, with spans relative to the
/// whole source.
pub(crate) fn tokenize<'src>(line: &SourceLine<'src>) -> Vec<Spanned<&'src str>> {
    let mut input = LocatingSlice::new(line.text());
    // `words` accepts any input; a failure would only mean "no tokens".
    let words = words.parse_next(&mut input).unwrap_or_default();

    words
        .into_iter()
        .map(|(text, range)| Spanned::new(text, Span::new(range).offset_by(line.span().start())))
        .collect()
}

/// Recognize the keyword of a line and check its number of arguments.
///
/// Arguments longer than `max_token_length` characters are rejected.
///
/// # Errors
///
/// - [`SceneErrorKind::UnrecognizedLine`] for an empty line or an unknown keyword
/// - [`SceneErrorKind::WrongArgumentCount`] when the arity does not match
/// - [`SceneErrorKind::TokenTooLong`] for an over-long argument
pub(crate) fn recognize<'src>(
    line: &SourceLine<'src>,
    max_token_length: usize,
) -> Result<RecognizedLine<'src>> {
    let mut tokens = tokenize(line);

    let keyword = match tokens.first() {
        Some(first) => Keyword::from_token(first.inner()),
        None => None,
    };
    let Some(keyword) = keyword else {
        let span = tokens.first().map_or(line.span(), Spanned::span);
        return Err(
            ParseError::new(SceneErrorKind::UnrecognizedLine {
                line: line.number(),
            })
            .with_label(span, "expected `building` or `antenna`"),
        );
    };

    let args = tokens.split_off(1);
    if args.len() != keyword.arity() {
        return Err(ParseError::new(SceneErrorKind::WrongArgumentCount {
            line: line.number(),
            keyword,
        })
        .with_label(
            line.span(),
            format!(
                "expected {} arguments, found {}",
                keyword.arity(),
                args.len()
            ),
        ));
    }

    if let Some(token) = args
        .iter()
        .find(|token| token.chars().count() > max_token_length)
    {
        return Err(ParseError::new(SceneErrorKind::TokenTooLong {
            line: line.number(),
            token: token.inner().to_string(),
            max: max_token_length,
        })
        .with_label(token.span(), "token too long"));
    }

    Ok(RecognizedLine { keyword, args })
}
