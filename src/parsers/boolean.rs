/// Which textual forms a boolean validator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanKind {
    /// Case insensitive `true`/`false` only.
    Plain,
    /// Case insensitive `true`/`false` plus the SQL literals `1`/`0`.
    Extended,
}

pub fn parse_boolean(kind: BooleanKind, value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    if kind == BooleanKind::Extended {
        match value {
            "1" => return Some(true),
            "0" => return Some(false),
            _ => {}
        }
    }
    None
}
