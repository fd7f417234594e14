use std::fmt;

/// Declared type of a variable. Both are stored as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclType {
    Int,
    Float,
}

impl DeclType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "int" => Some(DeclType::Int),
            "float" => Some(DeclType::Float),
            _ => None,
        }
    }
}

impl fmt::Display for DeclType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeclType::Int => write!(f, "int"),
            DeclType::Float => write!(f, "float"),
        }
    }
}

/// Description produced for a line that compiled successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// `print("...")`: the unquoted literal
    Text(String),
    /// `print(name)`: the variable's current value
    Value { name: String, value: i32 },
    /// `int name = 10;`
    Assignment { ty: DeclType, name: String, value: i32 },
    /// Any other statement, without its trailing `;`
    Statement(String),
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Generated::Text(text) => write!(f, "{text}"),
            Generated::Value { value, .. } => write!(f, "{value}"),
            Generated::Assignment { name, value, .. } => {
                write!(f, "Variable '{name}' assigned value {value}")
            }
            Generated::Statement(stmt) => write!(f, "{stmt} executed successfully!"),
        }
    }
}
