//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A stay
/// period `[check_in, check_out)` is one: two periods with the same bounds are
/// the same period, whichever booking they came from.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Nights(u32);
///
/// impl ValueObject for Nights {}
///
/// assert_eq!(Nights(2), Nights(2));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
