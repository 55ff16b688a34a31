use thiserror::Error;

pub type GeomResult<T> = Result<T, GeomError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    #[error("Division by zero in {what}")]
    DivisionByZero { what: &'static str },
}
