use std::fmt;

/// A display-only binder name. Never used for equality or variable lookup —
/// only de Bruijn indices decide binding structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub id: String,
}

impl Ident {
    pub fn new(id: impl Into<String>) -> Self {
        Ident { id: id.into() }
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Ident::new(s)
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Ident::new(s)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
