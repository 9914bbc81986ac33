use std::fmt::Display;

use error_stack::Context;

use crate::validation::BookField;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum KernelError {
    Malformed,
    Invalid(BookField),
    NotFound,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Malformed => write!(f, "Request was malformed"),
            KernelError::Invalid(field) => write!(f, "Book was invalid because of {field}"),
            KernelError::NotFound => {
                write!(f, "There was an error, or Book at that ID does not exist")
            }
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
