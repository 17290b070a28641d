use std::sync::LazyLock;

use regex::Regex;

use crate::{prelude::{EngineError, ShapeKind}, utils::prelude::*};

static MOVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^(?<kind>[A-Za-z])(?<offset>[+-]?[0-9]+)$").expect("move pattern is a valid regex")
});

/// A single move token: a shape letter glued to the column its leftmost block drops into,
/// e.g. `I3` or `q0`. The offset may carry a sign; whether it fits the board is for the
/// board to decide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveString {
    pub repr: String,
    pub kind: ShapeKind,
    pub offset: isize,
}

fn invalid(s: &str, reason: impl Into<String>) -> Error {
    EngineError::InvalidMove { mv: s.to_owned(), reason: reason.into() }.into()
}

impl std::str::FromStr for MoveString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some(matches) = MOVE_PATTERN.captures(trimmed) else {
            return Err(invalid(s, "expected a shape letter followed by a column offset"));
        };

        let [kind_str, offset_str] = ["kind", "offset"].map(|group| {
            matches.name(group).map_or("", |m| m.as_str())
        });

        let kind = match kind_str.parse::<ShapeKind>() {
            Ok(kind) => kind,
            Err(e)   => {
                let reason = format!("no shape named {kind_str}");
                return Err(e.context(EngineError::InvalidMove { mv: s.to_owned(), reason }));
            }
        };
        let offset = offset_str.parse::<isize>().map_err(|e| invalid(s, format!("offset {offset_str}: {e}")))?;

        Ok(MoveString { repr: trimmed.to_owned(), kind, offset })
    }
}

impl MoveString {
    /// The canonical notation for the move.
    pub fn notate(&self) -> String {
        format!("{}{}", self.kind, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::MoveString;
    use crate::prelude::*;

    fn reason(s: &str) -> EngineError {
        let err = s.parse::<MoveString>().expect_err("parse unexpectedly succeeded");
        err.downcast_ref::<EngineError>().cloned().expect("error should carry an EngineError")
    }

    #[test]
    fn parses_letter_and_offset() -> Result<()> {
        let mv = "I3".parse::<MoveString>()?;
        assert_eq!((mv.kind, mv.offset), (ShapeKind::I, 3));

        let mv = "q0".parse::<MoveString>()?;
        assert_eq!((mv.kind, mv.offset), (ShapeKind::Q, 0));
        assert_eq!(mv.notate(), "Q0");

        let mv = " J12 ".parse::<MoveString>()?;
        assert_eq!((mv.kind, mv.offset, mv.repr.as_str()), (ShapeKind::J, 12, "J12"));
        Ok(())
    }

    #[test]
    fn signed_offsets_parse() -> Result<()> {
        assert_eq!("T-1".parse::<MoveString>()?.offset, -1);
        assert_eq!("T+4".parse::<MoveString>()?.offset, 4);
        Ok(())
    }

    #[test]
    fn malformed_tokens_are_invalid_moves() {
        for s in ["", "Q", "0", "QQ0", "Q 0", "Q0,", "Q1.5", "Q99999999999999999999999"] {
            assert!(matches!(reason(s), EngineError::InvalidMove { .. }), "{s:?}");
        }
    }

    #[test]
    fn unknown_letter_is_an_invalid_move() {
        let err = "X0".parse::<MoveString>().expect_err("parse unexpectedly succeeded");
        assert!(matches!(err.downcast_ref::<EngineError>(), Some(EngineError::InvalidMove { mv, .. }) if mv == "X0"));
        assert!(err.chain().any(|e| matches!(e.downcast_ref::<EngineError>(), Some(EngineError::UnknownShape { .. }))));
    }
}
