use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("break", TokenKind::Break);
        map.insert("case", TokenKind::Case);
        map.insert("chan", TokenKind::Chan);
        map.insert("const", TokenKind::Const);
        map.insert("continue", TokenKind::Continue);
        map.insert("default", TokenKind::Default);
        map.insert("defer", TokenKind::Defer);
        map.insert("else", TokenKind::Else);
        map.insert("fallthrough", TokenKind::Fallthrough);
        map.insert("for", TokenKind::For);
        map.insert("func", TokenKind::Func);
        map.insert("go", TokenKind::Go);
        map.insert("goto", TokenKind::Goto);
        map.insert("if", TokenKind::If);
        map.insert("import", TokenKind::Import);
        map.insert("interface", TokenKind::Interface);
        map.insert("map", TokenKind::Map);
        map.insert("package", TokenKind::Package);
        map.insert("range", TokenKind::Range);
        map.insert("return", TokenKind::Return);
        map.insert("select", TokenKind::Select);
        map.insert("struct", TokenKind::Struct);
        map.insert("switch", TokenKind::Switch);
        map.insert("type", TokenKind::Type);
        map.insert("var", TokenKind::Var);
        // Not keywords in the grammar, but reserved spellings all the same.
        map.insert("true", TokenKind::BoolLiteral);
        map.insert("false", TokenKind::BoolLiteral);
        map
    };
}

/// Symbol spellings in match-priority order: any spelling that is a prefix
/// of another comes after the longer one, so the first match is always the
/// longest (maximal munch).
pub const OPERATORS: &[(&str, TokenKind)] = &[
    ("<<=", TokenKind::ShiftLeftEquals),
    (">>=", TokenKind::ShiftRightEquals),
    ("...", TokenKind::Ellipsis),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    ("<=", TokenKind::LessEquals),
    (">=", TokenKind::GreaterEquals),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("<<", TokenKind::ShiftLeft),
    (">>", TokenKind::ShiftRight),
    ("&^", TokenKind::AndNot),
    ("<-", TokenKind::Arrow),
    (":=", TokenKind::DeclareAssign),
    ("+=", TokenKind::PlusEquals),
    ("-=", TokenKind::MinusEquals),
    ("*=", TokenKind::StarEquals),
    ("/=", TokenKind::SlashEquals),
    ("%=", TokenKind::PercentEquals),
    ("&=", TokenKind::AndEquals),
    ("|=", TokenKind::OrEquals),
    ("^=", TokenKind::XorEquals),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Dash),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("=", TokenKind::Assignment),
    ("!", TokenKind::Not),
    ("&", TokenKind::BitAnd),
    ("|", TokenKind::BitOr),
    ("^", TokenKind::BitXor),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    (";", TokenKind::Semicolon),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
    (":", TokenKind::Colon),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,

    IntLiteral,
    FloatLiteral,
    StringLiteral,
    RuneLiteral,
    BoolLiteral,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment,    // =
    DeclareAssign, // :=
    Equals,        // ==
    Not,           // !
    NotEquals,     // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Ellipsis,
    Semicolon,
    Colon,
    Comma,
    Arrow, // <-, channel send/receive

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,
    PercentEquals,
    AndEquals,
    OrEquals,
    XorEquals,
    ShiftLeftEquals,
    ShiftRightEquals,

    Plus,
    Dash,
    Slash,
    Star, // also dereference
    Percent,

    BitAnd, // also address-of
    BitOr,
    BitXor,
    AndNot, // &^
    ShiftLeft,
    ShiftRight,

    // Reserved
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} `{}` at line {}, column {}",
            self.kind, self.lexeme, self.position.line, self.position.column
        )
    }
}
