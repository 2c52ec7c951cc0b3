
use crate::dimensions::Dimensions;

/// Resolves the dimensions a capturer should deliver for a frame of size
/// `source` when the output is capped at `max`.
///
/// The source is aspect-fit into `max` and then rounded down to encode-safe
/// (even) dimensions. The result never exceeds `max` on an axis where `max`
/// is non-zero, and keeps the source aspect ratio within one pixel per axis.
///
/// A zero `source` resolves to [`Dimensions::ZERO`]. That value is not a valid
/// target and callers must keep treating the size as unresolved.
pub fn resolve_dimensions(source: Dimensions, max: Dimensions) -> Dimensions {
    source.aspect_fit(max).to_encode_safe()
}
