/// Marker trait for types that form the support of a probability distribution.
///
/// The `Clone` bound enables copying support elements while iterating
/// over distributions.
pub trait Support: Clone {}

/// Advance counts and hit counts are plain indices.
impl Support for usize {}
