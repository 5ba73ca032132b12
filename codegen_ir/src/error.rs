use string_interner::DefaultSymbol;

pub type IrResult<T> = Result<T, IrError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IrError {
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(DefaultSymbol),

    #[error("raw passthrough expression ({lines} line(s)) is not portable across backends")]
    NonPortable { lines: usize },
}
