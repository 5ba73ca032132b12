use crate::expr::{Expr, Expression};

/// Literals whose textual form is the same in every target language.
pub trait LanguageAgnosticLiteral {
    fn string_representation(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(StringLiteral),
    Character(CharacterLiteral),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    Boolean(BooleanLiteral),
}

impl Literal {
    /// `None` for string and character literals, whose quoting is backend specific.
    pub fn as_language_agnostic(&self) -> Option<&dyn LanguageAgnosticLiteral> {
        match self {
            Literal::Integer(lit) => Some(lit as &dyn LanguageAgnosticLiteral),
            Literal::Float(lit) => Some(lit as &dyn LanguageAgnosticLiteral),
            Literal::Boolean(lit) => Some(lit as &dyn LanguageAgnosticLiteral),
            Literal::String(_) | Literal::Character(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterLiteral {
    pub value: char,
}

impl CharacterLiteral {
    pub fn new(value: char) -> Self {
        Self { value }
    }
}

impl Default for CharacterLiteral {
    fn default() -> Self {
        Self::new('\0')
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntegerLiteral {
    pub value: i64,
}

impl IntegerLiteral {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl LanguageAgnosticLiteral for IntegerLiteral {
    fn string_representation(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatLiteral {
    pub value: f64,
}

impl FloatLiteral {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl LanguageAgnosticLiteral for FloatLiteral {
    // Whole values keep a decimal point so they never read back as integers.
    fn string_representation(&self) -> String {
        let text = self.value.to_string();
        if self.value.is_finite() && !text.contains(['.', 'e', 'E']) {
            format!("{text}.0")
        } else {
            text
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BooleanLiteral {
    pub value: bool,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl LanguageAgnosticLiteral for BooleanLiteral {
    fn string_representation(&self) -> String {
        if self.value { "true" } else { "false" }.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    Static,
    #[default]
    Dynamic,
    InPlace,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayLiteralExpression {
    pub elements: Vec<Expr>,
    pub array_kind: ArrayKind,
}

impl ArrayLiteralExpression {
    pub fn new(elements: Vec<Expr>) -> Self {
        Self {
            elements,
            array_kind: ArrayKind::Dynamic,
        }
    }

    pub fn with_kind(mut self, array_kind: ArrayKind) -> Self {
        self.array_kind = array_kind;
        self
    }
}

/// Key/value pairs in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictionaryLiteralExpression {
    pub entries: Vec<(Expr, Expr)>,
}

impl DictionaryLiteralExpression {
    pub fn new(entries: Vec<(Expr, Expr)>) -> Self {
        Self { entries }
    }

    pub fn keys(&self) -> impl Iterator<Item = &Expr> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Expr> {
        self.entries.iter().map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TupleLiteralExpression {
    pub members: Vec<Expr>,
}

impl TupleLiteralExpression {
    pub fn new(members: Vec<Expr>) -> Self {
        Self { members }
    }
}

impl FromIterator<Expr> for TupleLiteralExpression {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Wraps a primitive value as a literal expression.
pub trait AsLiteralExpression {
    fn as_literal_expression(self) -> Expression;
}

impl AsLiteralExpression for i64 {
    fn as_literal_expression(self) -> Expression {
        Expression::Literal(Literal::Integer(IntegerLiteral::new(self)))
    }
}

impl AsLiteralExpression for f64 {
    fn as_literal_expression(self) -> Expression {
        Expression::Literal(Literal::Float(FloatLiteral::new(self)))
    }
}

impl AsLiteralExpression for bool {
    fn as_literal_expression(self) -> Expression {
        Expression::Literal(Literal::Boolean(BooleanLiteral::new(self)))
    }
}

impl AsLiteralExpression for char {
    fn as_literal_expression(self) -> Expression {
        Expression::Literal(Literal::Character(CharacterLiteral::new(self)))
    }
}

impl AsLiteralExpression for &str {
    fn as_literal_expression(self) -> Expression {
        Expression::Literal(Literal::String(StringLiteral::new(self)))
    }
}

impl AsLiteralExpression for String {
    fn as_literal_expression(self) -> Expression {
        Expression::Literal(Literal::String(StringLiteral::new(self)))
    }
}
