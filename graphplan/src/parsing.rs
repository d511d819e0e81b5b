//! Fact-file parser (§6, §4.5).
//!
//! The grammar never nests parentheses, so a line-oriented scanner is enough;
//! there is no need for a general s-expression reader. The parser only knows about
//! the three block headers and the `CARGO`/`ROCKET`/`PLACE` object-type
//! tags; turning `RawAtom`s into interned `Proposition`s (which requires
//! knowing the predicate names `at`/`in`/`has-fuel` and validating arity and
//! object types) is left to [`crate::problem::build_problem`].

use crate::error::ParseError;

/// A still-uninterned `( head arg1 arg2 ... )` line, with its 1-based source
/// line number for error reporting.
#[derive(Clone, Debug)]
pub struct RawAtom {
    pub head: String,
    pub args: Vec<String>,
    pub line: usize,
}

#[derive(Clone, Debug)]
pub struct ParsedProblem {
    pub cargos: Vec<String>,
    pub rockets: Vec<String>,
    pub places: Vec<String>,
    pub init: Vec<RawAtom>,
    pub goal: Vec<RawAtom>,
}

pub fn parse_problem_file(path: &std::path::Path) -> Result<ParsedProblem, ParseError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: display.clone(),
        source,
    })?;
    parse_problem_str(&text, &display)
}

pub fn parse_problem_str(text: &str, path: &str) -> Result<ParsedProblem, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut i = 0usize;

    expect_header(&lines, &mut i, "OBJECTS", path)?;
    let mut cargos = Vec::new();
    let mut rockets = Vec::new();
    let mut places = Vec::new();
    while i < lines.len() && !lines[i].trim().is_empty() {
        let line_no = i + 1;
        let atom = parse_inner_line(lines[i], path, line_no)?;
        if atom.args.len() != 1 {
            return Err(ParseError::WrongArity {
                path: path.to_string(),
                line: line_no,
                head: atom.head,
                expected: 1,
                got: atom.args.len(),
            });
        }
        match atom.args[0].as_str() {
            "CARGO" => cargos.push(atom.head),
            "ROCKET" => rockets.push(atom.head),
            "PLACE" => places.push(atom.head),
            other => {
                return Err(ParseError::UnknownObjectType {
                    path: path.to_string(),
                    line: line_no,
                    tpe: other.to_string(),
                })
            }
        }
        i += 1;
    }

    skip_blank(&lines, &mut i);
    expect_header(&lines, &mut i, "INIT", path)?;
    let init = parse_atom_block(&lines, &mut i, path)?;

    skip_blank(&lines, &mut i);
    expect_header(&lines, &mut i, "GOAL", path)?;
    let goal = parse_atom_block(&lines, &mut i, path)?;

    Ok(ParsedProblem {
        cargos,
        rockets,
        places,
        init,
        goal,
    })
}

fn skip_blank(lines: &[&str], i: &mut usize) {
    while *i < lines.len() && lines[*i].trim().is_empty() {
        *i += 1;
    }
}

fn expect_header(lines: &[&str], i: &mut usize, expected: &'static str, path: &str) -> Result<(), ParseError> {
    skip_blank(lines, i);
    match lines.get(*i) {
        Some(line) if line.trim() == expected => {
            *i += 1;
            Ok(())
        }
        Some(line) => Err(ParseError::ExpectedBlockHeader {
            path: path.to_string(),
            line: *i + 1,
            expected,
            found: line.trim().to_string(),
        }),
        None => Err(ParseError::MissingBlock {
            path: path.to_string(),
            block: expected,
        }),
    }
}

fn parse_atom_block(lines: &[&str], i: &mut usize, path: &str) -> Result<Vec<RawAtom>, ParseError> {
    let mut atoms = Vec::new();
    while *i < lines.len() && !lines[*i].trim().is_empty() {
        let line_no = *i + 1;
        atoms.push(parse_inner_line(lines[*i], path, line_no)?);
        *i += 1;
    }
    Ok(atoms)
}

/// Parses one `( head arg1 arg2 ... )` line.
fn parse_inner_line(line: &str, path: &str, line_no: usize) -> Result<RawAtom, ParseError> {
    let trimmed = line.trim();
    let malformed = || ParseError::MalformedLine {
        path: path.to_string(),
        line: line_no,
        text: trimmed.to_string(),
    };
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(malformed)?;
    let mut tokens = inner.split_whitespace();
    let head = tokens.next().ok_or_else(malformed)?.to_string();
    let args: Vec<String> = tokens.map(str::to_string).collect();
    Ok(RawAtom { head, args, line: line_no })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "OBJECTS\n\
( c1 CARGO )\n\
( r1 ROCKET )\n\
( p1 PLACE )\n\
( p2 PLACE )\n\
\n\
INIT\n\
( at c1 p1 )\n\
( at r1 p1 )\n\
( has-fuel r1 )\n\
\n\
GOAL\n\
( at c1 p2 )\n";

    #[test]
    fn parses_well_formed_file() {
        let parsed = parse_problem_str(SAMPLE, "<test>").unwrap();
        assert_eq!(parsed.cargos, vec!["c1"]);
        assert_eq!(parsed.rockets, vec!["r1"]);
        assert_eq!(parsed.places, vec!["p1", "p2"]);
        assert_eq!(parsed.init.len(), 3);
        assert_eq!(parsed.goal.len(), 1);
        assert_eq!(parsed.goal[0].head, "at");
        assert_eq!(parsed.goal[0].args, vec!["c1", "p2"]);
    }

    #[test]
    fn rejects_missing_block() {
        let bad = "OBJECTS\n( c1 CARGO )\n\nINIT\n( at c1 p1 )\n";
        let err = parse_problem_str(bad, "<test>").unwrap_err();
        assert!(matches!(err, ParseError::MissingBlock { block: "GOAL", .. }));
    }

    #[test]
    fn rejects_malformed_line() {
        let bad = "OBJECTS\nc1 CARGO\n\nINIT\n\nGOAL\n";
        let err = parse_problem_str(bad, "<test>").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn rejects_unknown_object_type() {
        let bad = "OBJECTS\n( c1 WIDGET )\n\nINIT\n\nGOAL\n";
        let err = parse_problem_str(bad, "<test>").unwrap_err();
        assert!(matches!(err, ParseError::UnknownObjectType { line: 2, .. }));
    }
}
