/// Represents a literal value in the language.
///
/// `LiteralValue` covers all constant values that can appear directly in
/// source code: `null`, booleans, the three numeric literal forms, strings,
/// and bytes. It is produced by the parser from literal tokens and converted
/// into a runtime [`Value`](crate::interpreter::value::core::Value) by the
/// evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `null` literal.
    Null,
    /// A boolean literal: `true` or `false`.
    Bool(bool),
    /// A signed integral literal such as `42` or `0x2A`.
    Int(i64),
    /// An unsigned integral literal such as `42u` or `0x2Au`.
    UInt(u64),
    /// A non-integral literal such as `3.14` or `1e-10`.
    Double(f64),
    /// A string literal, with escape sequences already decoded.
    String(String),
    /// A bytes literal, stored as decoded text.
    Bytes(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for LiteralValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// Method names that the parser classifies as macros.
///
/// The classification is purely lexical: a method call whose name appears in
/// this table is flagged as a macro at parse time, and its argument shape is
/// only validated when the call is evaluated.
pub const MACRO_METHODS: &[&str] = &["map", "filter", "all", "exists", "existsOne"];

/// Returns `true` when `name` is one of the macro method names.
///
/// ## Example
/// ```
/// use sieva::ast::is_macro_method;
///
/// assert!(is_macro_method("filter"));
/// assert!(!is_macro_method("startsWith"));
/// ```
#[must_use]
pub fn is_macro_method(name: &str) -> bool {
    MACRO_METHODS.contains(&name)
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of variants, one per grammar production. Nodes are
/// immutable once built and tree-owned: every child belongs exclusively to
/// its parent, with no sharing and no cycles. Each node carries the source
/// line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Ident {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Field selection (`operand.field`), or top-level selection when the
    /// operand is omitted (`.field`).
    ///
    /// With `test` set, the node is a presence test: absence of the field
    /// yields `false` instead of raising.
    Select {
        /// The expression being selected from, or `None` to select against
        /// the top-level variable bindings.
        operand: Option<Box<Self>>,
        /// The field name.
        field:   String,
        /// Whether this selection is a presence test.
        test:    bool,
        /// Line number in the source code.
        line:    usize,
    },
    /// Indexing (`operand[index]`).
    Index {
        /// The expression being indexed.
        operand: Box<Self>,
        /// The index expression.
        index:   Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A function or method call.
    ///
    /// With a target the call is a method call; without one it is a free
    /// function call. `is_macro` marks calls recognized as macros at parse
    /// time; their arguments are not evaluated eagerly.
    Call {
        /// The method-call target, or `None` for a free function call.
        target:   Option<Box<Self>>,
        /// The function or method name.
        name:     String,
        /// The ordered argument expressions.
        args:     Vec<Self>,
        /// Whether the call was classified as a macro at parse time.
        is_macro: bool,
        /// Line number in the source code.
        line:     usize,
    },
    /// List literal expression.
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Map literal expression.
    Map {
        /// Ordered key-expression/value-expression pairs.
        entries: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Struct literal expression, optionally tagged with a type name.
    Struct {
        /// The (possibly dot-qualified) type name, if any.
        type_name: Option<String>,
        /// Ordered field-name/value-expression pairs.
        fields:    Vec<(String, Self)>,
        /// Line number in the source code.
        line:      usize,
    },
    /// The generalized accumulator fold that the five macros specialize.
    ///
    /// No concrete syntax produces this node; it is reachable only through
    /// programmatic AST construction.
    Comprehension {
        /// The loop variable name, rebound to each range element.
        var:       String,
        /// The range expression; must evaluate to a list.
        range:     Box<Self>,
        /// The accumulator variable name.
        accu:      String,
        /// The accumulator's initializer expression.
        init:      Box<Self>,
        /// Per-element condition; the step only runs when it is `true`.
        condition: Box<Self>,
        /// The expression recomputing the accumulator.
        step:      Box<Self>,
        /// The result expression, evaluated against the final accumulator.
        result:    Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A unary operation.
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional ("ternary") expression: `condition ? then : otherwise`.
    Conditional {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use sieva::ast::Expr;
    ///
    /// let expr = Expr::Ident { name: "x".to_string(),
    ///                          line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Ident { line, .. }
            | Self::Select { line, .. }
            | Self::Index { line, .. }
            | Self::Call { line, .. }
            | Self::List { line, .. }
            | Self::Map { line, .. }
            | Self::Struct { line, .. }
            | Self::Comprehension { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Conditional { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, membership, and the
/// short-circuiting logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication or repetition (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Membership (`in`)
    In,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mod, Mul, NotEqual,
            Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            In => "in",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
