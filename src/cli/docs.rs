//! Documentation content for the atomsel CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Properties,
    Operators,
    Frames,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "properties" | "property" | "keywords" => Some(Self::Properties),
            "operators" | "ops" | "boolean" => Some(Self::Operators),
            "frames" | "frame" | "input" => Some(Self::Frames),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"ATOMSEL DOCUMENTATION

atomsel selects the atoms of a simulation frame matching a condition, such as
`name == O and index < 10`. Selections are compiled once and can be evaluated
against any number of frames.

DOCUMENTATION CATEGORIES

  syntax            Leaf predicates, grouping, and the full grammar
  properties        Every atom property a selection can test
  operators         Comparison operators and boolean connectives
  frames            JSON frame format read by 'atomsel check'

QUICK REFERENCE

  name == CA        Atom name
  index < 10        0-based atom index
  x >= 1.5          Position component (x, y, z)
  vx > 0            Velocity component (vx, vy, vz)
  not, and, or      Boolean connectives, in decreasing precedence
  ( ... )           Grouping

Run 'atomsel doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Properties) => Ok(PROPERTIES_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Frames) => Ok(FRAMES_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Selections

LEAF PREDICATES
  <keyword> <operator> <value>
    Every predicate compares one atom property against a literal.

    Examples:
      name == OW
      index >= 10
      z < -2.5

    Constraints:
      - Keywords and names are case-sensitive
      - Names are identifiers: letters, digits, underscores, not starting
        with a digit
      - Numbers may carry a sign and an exponent: -1, 0.5, 2e-3
      - type and resname also accept numeric labels: type == 45
      - A single = is the same operator as ==: name = OW

GROUPING
  ( <selection> )
    Parentheses override the default precedence.

    Example:
      not (name == H or name == O)

RESERVED WORDS
  and, or, not
    Cannot be used as atom names.

GRAMMAR
  selection := expr EOF
  expr      := and_expr ("or" and_expr)*
  and_expr  := unary ("and" unary)*
  unary     := "not" unary | primary
  primary   := "(" expr ")" | leaf
             | "and" unary unary | "or" unary unary
  leaf      := "name" eq IDENT
             | ("type" | "resname") eq (IDENT | NUMBER)
             | ("index" | "resid") relop INTEGER
             | ("x" | "y" | "z" | "vx" | "vy" | "vz" | "mass") relop NUMBER
             | "all" | "none"
  eq        := "==" | "=" | "!="
  relop     := eq | "<" | "<=" | ">" | ">="
"#;

const PROPERTIES_DOC: &str = r#"PROPERTIES - What a Selection Can Test

STRING PROPERTIES (== and != only)
  name        Atom name
  type        Atom type
  resname     Name of the residue containing the atom

NUMERIC PROPERTIES (all comparison operators)
  index       0-based position of the atom in the frame, integer below 2^64
  resid       Residue identifier, integer
  mass        Atom mass
  x, y, z     Position components, in angstrom
  vx, vy, vz  Velocity components

CONSTANTS
  all         Every atom
  none        No atom

MISSING DATA
  type, resname, resid, mass and velocities are optional in a frame.
  An atom without the value never matches. Selecting on a property that no
  atom of the frame provides is an error, never an empty match.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Comparison and Boolean

COMPARISON OPERATORS
  ==    Equal (a single = is accepted too)
  !=    Not equal
  <     Less than
  >     Greater than
  <=    Less than or equal
  >=    Greater than or equal

BOOLEAN CONNECTIVES
  not   Negation, binds tightest
  and   Conjunction
  or    Disjunction, binds loosest

  Repeated connectives associate to the left:

    name == H or name == O and index < 3
    // name == H or (name == O and index < 3)

  Prefix forms are accepted as well:

    and name == H index < 3
    // name == H and index < 3
"#;

const FRAMES_DOC: &str = r#"FRAMES - JSON Input for 'atomsel check'

FORMAT
  {"atoms": [
      {"name": "OW", "type": "O", "mass": 15.999,
       "residue": {"name": "WAT", "id": 1},
       "position": [0.0, 0.0, 0.0],
       "velocity": [0.1, 0.0, 0.0]}
  ]}

  Only "name" is required. Positions default to the origin.
  Either every atom has a "velocity" or none does.

EXAMPLE
  atomsel check 'name == OW and x > 0' --input '{"atoms": [...]}'
  => [0, 3, 6]
"#;
