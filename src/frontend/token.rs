use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTag {
    Block,
    Input,
    Print,
    Set,
    While,
    If,
    Gt,
    Lt,
    Eq,
    And,
    Or,
    Not,
    Add,
    Sub,
    Mul,
    Div,
    True,
    False,
    Lp,
    Rp,
    Number,
    VariableId,
}

impl TokenTag {
    /// Map an upper-case keyword to its tag. Anything else is not a keyword.
    pub fn keyword(word: &str) -> Option<TokenTag> {
        let tag = match word {
            "BLOCK" => TokenTag::Block,
            "INPUT" => TokenTag::Input,
            "PRINT" => TokenTag::Print,
            "SET" => TokenTag::Set,
            "WHILE" => TokenTag::While,
            "IF" => TokenTag::If,
            "GT" => TokenTag::Gt,
            "LT" => TokenTag::Lt,
            "EQ" => TokenTag::Eq,
            "AND" => TokenTag::And,
            "OR" => TokenTag::Or,
            "NOT" => TokenTag::Not,
            "ADD" => TokenTag::Add,
            "SUB" => TokenTag::Sub,
            "MUL" => TokenTag::Mul,
            "DIV" => TokenTag::Div,
            "TRUE" => TokenTag::True,
            "FALSE" => TokenTag::False,
            _ => return None,
        };
        Some(tag)
    }

    /// Tags that may open a statement right after "(".
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            TokenTag::If | TokenTag::While | TokenTag::Print | TokenTag::Set | TokenTag::Input
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenTag::Block => "BLOCK",
            TokenTag::Input => "INPUT",
            TokenTag::Print => "PRINT",
            TokenTag::Set => "SET",
            TokenTag::While => "WHILE",
            TokenTag::If => "IF",
            TokenTag::Gt => "GT",
            TokenTag::Lt => "LT",
            TokenTag::Eq => "EQ",
            TokenTag::And => "AND",
            TokenTag::Or => "OR",
            TokenTag::Not => "NOT",
            TokenTag::Add => "ADD",
            TokenTag::Sub => "SUB",
            TokenTag::Mul => "MUL",
            TokenTag::Div => "DIV",
            TokenTag::True => "TRUE",
            TokenTag::False => "FALSE",
            TokenTag::Lp => "(",
            TokenTag::Rp => ")",
            TokenTag::Number => "NUMBER",
            TokenTag::VariableId => "VARIABLE_ID",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub tag: TokenTag,
    pub text: String,
}

impl Token {
    pub fn new(tag: TokenTag, text: impl Into<String>) -> Self {
        Self { tag, text: text.into() }
    }

    /// Token whose text is its own spelling (keywords and parentheses).
    pub fn symbol(tag: TokenTag) -> Self {
        Self::new(tag, tag.as_str())
    }

    pub fn number(value: i64) -> Self {
        Self::new(TokenTag::Number, value.to_string())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(TokenTag::VariableId, name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag, self.text)
    }
}
