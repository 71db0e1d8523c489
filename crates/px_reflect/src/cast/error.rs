use thiserror::Error;

/// Error returned when a runtime conversion fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CastError {
    /// No conversion exists between the two types.
    #[error("invalid cast from `{from}` to `{to}`")]
    InvalidCast {
        from: &'static str,
        to: &'static str,
    },
    /// The value does not fit in the target number type.
    #[error("value of type `{from}` is out of range for `{to}`")]
    Overflow {
        from: &'static str,
        to: &'static str,
    },
}
