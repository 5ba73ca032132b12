use string_interner::DefaultSymbol;

/// Reference to a named type. Resolution happens outside the IR.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeReference {
    pub name: DefaultSymbol,
    pub generic_arguments: Vec<TypeReference>,
    pub nullable: bool,
}

impl TypeReference {
    pub fn named(name: DefaultSymbol) -> Self {
        Self {
            name,
            generic_arguments: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(name: DefaultSymbol, generic_arguments: Vec<TypeReference>) -> Self {
        Self {
            name,
            generic_arguments,
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
