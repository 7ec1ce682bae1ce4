/// The kind assigned to one word of source text.
///
/// Kinds are assigned by `Kind::of` with a fixed rule order; the first
/// rule that matches wins. Order matters: a label name could otherwise
/// coincide with another pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// All-uppercase alphabetic text, e.g. `SHOVE`. Whether the word is
    /// actually in the catalog is the engine's business, not the lexer's.
    Instruction,
    /// An optional leading `-` followed by ASCII digits, e.g. `-42`.
    IntLiteral,
    /// Text containing at least one `"`, e.g. `"two words"`.
    StrLiteral,
    /// One of the six relational operators accepted by `BOUNCE`.
    Comparator,
    /// A jump target operand beginning with `#`, e.g. `#LOOP`.
    LabelDef,
    /// A jump destination marker ending with `:`, e.g. `LOOP:`.
    LabelStart,
    /// Nothing else matched.
    Unknown,
}

impl Kind {
    /// Classify one word of source text.
    pub fn of(literal: &str) -> Kind {
        use Kind::*;
        if !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_uppercase()) {
            return Instruction;
        }
        if is_integer(literal) {
            return IntLiteral;
        }
        if literal.contains('"') {
            return StrLiteral;
        }
        if Relop::from_literal(literal).is_some() {
            return Comparator;
        }
        if literal.starts_with('#') {
            return LabelDef;
        }
        if literal.ends_with(':') {
            return LabelStart;
        }
        Unknown
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Instruction => write!(f, "INSTRUCTION"),
            IntLiteral => write!(f, "INT-LITERAL"),
            StrLiteral => write!(f, "STR-LITERAL"),
            Comparator => write!(f, "COMPARATOR"),
            LabelDef => write!(f, "LABEL-DEF"),
            LabelStart => write!(f, "LABEL-START"),
            Unknown => write!(f, "UNKNOWN"),
        }
    }
}

fn is_integer(literal: &str) -> bool {
    let digits = match literal.strip_prefix('-') {
        Some(rest) => rest,
        None => literal,
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// One whitespace-delimited word of source text and its kind.
///
/// Tokens are produced once by `lex` and never mutated afterwards; the
/// engine reads literals back out of them at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    literal: String,
    kind: Kind,
}

impl Token {
    pub fn new(literal: &str) -> Token {
        Token {
            literal: literal.to_string(),
            kind: Kind::of(literal),
        }
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn literal(&self) -> &str {
        &self.literal
    }
    /// The operand value, when this is an integer literal whose digits
    /// fit the machine word.
    pub fn integer(&self) -> Option<i64> {
        match self.kind {
            Kind::IntLiteral => self.literal.parse::<i64>().ok(),
            _ => None,
        }
    }
    /// The target name of a `#name` jump operand.
    pub fn label_target(&self) -> Option<&str> {
        match self.kind {
            Kind::LabelDef => self.literal.strip_prefix('#'),
            _ => None,
        }
    }
    /// The name of a `name:` destination marker.
    pub fn label_name(&self) -> Option<&str> {
        match self.kind {
            Kind::LabelStart => self.literal.strip_suffix(':'),
            _ => None,
        }
    }
    /// The literal as `YELL` shows it: enclosing quotes stripped from
    /// the ends, interior quotes kept.
    pub fn printable(&self) -> &str {
        self.literal.trim_matches('"')
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.literal)
    }
}

/// A relational operator, as `BOUNCE` tests the stack top against its
/// bound. A closed set; there is no other comparison machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relop {
    Equal,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    NotEqual,
}

impl Relop {
    pub fn from_literal(literal: &str) -> Option<Relop> {
        use Relop::*;
        match literal {
            "=" => Some(Equal),
            ">" => Some(Greater),
            "<" => Some(Less),
            ">=" => Some(GreaterEqual),
            "<=" => Some(LessEqual),
            "!=" => Some(NotEqual),
            _ => None,
        }
    }
    pub fn test(&self, left: i64, right: i64) -> bool {
        use Relop::*;
        match self {
            Equal => left == right,
            Greater => left > right,
            Less => left < right,
            GreaterEqual => left >= right,
            LessEqual => left <= right,
            NotEqual => left != right,
        }
    }
}

impl std::fmt::Display for Relop {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relop::*;
        match self {
            Equal => write!(f, "="),
            Greater => write!(f, ">"),
            Less => write!(f, "<"),
            GreaterEqual => write!(f, ">="),
            LessEqual => write!(f, "<="),
            NotEqual => write!(f, "!="),
        }
    }
}
