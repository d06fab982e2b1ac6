use std::fmt;

/// Error codes for every ascript diagnostic.
///
/// Format: E#### where the first digit is the category:
/// - E1xxx: Parse errors
/// - E2xxx: Interpreter errors
/// - E3xxx: User errors
/// - E4xxx: Host errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parse Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unterminated string literal
    E1002,
    /// Invalid character in source
    E1003,
    /// Invalid number literal
    E1004,
    /// Wrong argument count for a built-in
    E1005,
    /// Function defined twice
    E1006,
    /// Unexpected end of input
    E1007,
    /// Token cannot start a value
    E1008,
    /// Source file could not be read
    E1009,

    // Interpreter Errors (E2xxx)
    /// Undefined variable
    E2001,
    /// Type mismatch in comparison, arithmetic or assignment
    E2002,
    /// Undefined function
    E2003,
    /// Wrong number of call arguments
    E2004,
    /// Call argument does not match the parameter type
    E2005,
    /// `break` outside a loop
    E2006,
    /// Variable declared twice in one scope
    E2007,
    /// Integer overflow
    E2008,
    /// Call depth limit exceeded
    E2009,
    /// Condition did not produce a boolean
    E2010,
    /// Invalid yield duration
    E2011,
    /// Return register read with no value in it
    E2012,
    /// Instance is not in a resumable state
    E2013,
    /// No instance with the given id
    E2014,
    /// Function already loaded
    E2015,
    /// Instance is not in a timed yield
    E2016,
    /// Jump to a block the function does not have
    E2017,

    // User Errors (E3xxx)
    /// Program called `fail`
    E3001,

    // Host Errors (E4xxx)
    /// Host rejected a request
    E4001,
}

impl ErrorCode {
    /// All defined error codes.
    pub const ALL: &[ErrorCode] = &[
        // Parse
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        // Interpreter
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E2010,
        ErrorCode::E2011,
        ErrorCode::E2012,
        ErrorCode::E2013,
        ErrorCode::E2014,
        ErrorCode::E2015,
        ErrorCode::E2016,
        ErrorCode::E2017,
        // User
        ErrorCode::E3001,
        // Host
        ErrorCode::E4001,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E2012 => "E2012",
            ErrorCode::E2013 => "E2013",
            ErrorCode::E2014 => "E2014",
            ErrorCode::E2015 => "E2015",
            ErrorCode::E2016 => "E2016",
            ErrorCode::E2017 => "E2017",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E4001 => "E4001",
        }
    }

    /// Check if this is a parse error (E1xxx range).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
                | ErrorCode::E1007
                | ErrorCode::E1008
                | ErrorCode::E1009
        )
    }

    /// Check if this is an interpreter error (E2xxx range).
    pub fn is_interpreter_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_user_error(&self) -> bool {
        matches!(self, ErrorCode::E3001)
    }

    pub fn is_host_error(&self) -> bool {
        matches!(self, ErrorCode::E4001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
