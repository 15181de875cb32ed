/// Errors produced by the `catalog-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required field is absent, null, or falsy where truthiness is
    /// required.
    #[error("Missing required fields")]
    MissingFields,

    /// `price` is present and non-null but not a JSON number.
    #[error("Price must be a number")]
    PriceNotNumeric,
}
