//! Wheel geometry: mapping between item indices and angles on the wheel.
//!
//! In the wheel's own frame slice `i` covers `[i * w, (i + 1) * w)` with
//! `w = 360 / segment_count`. The pointer sits at `POINTER_REFERENCE_DEG` in
//! that frame while the wheel is unrotated; turning the wheel clockwise by `a`
//! brings the point at `POINTER_REFERENCE_DEG - a` under it.

/// Pointer position in the unrotated wheel frame.
/// Must be re-derived if the pointer is mounted anywhere else.
pub const POINTER_REFERENCE_DEG: f64 = 90.0;

pub const FULL_TURN_DEG: f64 = 360.0;

/// Colors cycled over the slices, by index.
pub const PALETTE: [&str; 10] = [
    "#fde68a", "#fca5a5", "#93c5fd", "#a7f3d0", "#c7d2fe", "#fbcfe8", "#fcd34d", "#86efac",
    "#a5b4fc", "#fecaca",
];

const EMPTY_WHEEL_COLOR: &str = "#eee";
const SEPARATOR_WIDTH_DEG: f64 = 1.0;

const MIN_WHEEL_DIAMETER_PX: u32 = 320;
const MAX_WHEEL_DIAMETER_PX: u32 = 440;
const WHEEL_VIEWPORT_FRACTION: f64 = 0.6;

/// Number of slices drawn for a list of `item_count` items. An empty list still
/// renders as one placeholder slice.
#[inline]
pub fn segment_count_for(item_count: usize) -> usize {
    item_count.max(1)
}

#[inline]
pub fn degrees_per_segment(segment_count: usize) -> f64 {
    debug_assert!(segment_count > 0, "wheel needs at least one segment");
    FULL_TURN_DEG / segment_count as f64
}

/// Normalise an angle into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0; that case
/// folds back to 0.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Angular range `[start, end)` covered by slice `index`.
pub fn slice_bounds(index: usize, segment_count: usize) -> (f64, f64) {
    debug_assert!(index < segment_count, "slice index out of range");
    let per = degrees_per_segment(segment_count);
    let start = index as f64 * per;
    (start, start + per)
}

pub fn slice_center(index: usize, segment_count: usize) -> f64 {
    (index as f64 + 0.5) * degrees_per_segment(segment_count)
}

/// Rotation that puts the center of slice `index` under the pointer.
///
/// Only meaningful modulo 360; the planner adds whole turns on top of it.
pub fn target_rotation_for_index(
    index: usize,
    segment_count: usize,
    pointer_reference_deg: f64,
) -> f64 {
    pointer_reference_deg - slice_center(index, segment_count)
}

/// Index of the slice under the pointer once the wheel has been rotated by
/// `cumulative_angle` degrees.
///
/// Inverse of [`target_rotation_for_index`] up to whole turns:
///
/// ```
/// use lunch_roulette::geometry::{index_under_pointer, target_rotation_for_index, POINTER_REFERENCE_DEG};
///
/// let angle = target_rotation_for_index(2, 4, POINTER_REFERENCE_DEG) + 360.0 * 7.0;
/// assert_eq!(index_under_pointer(angle, 4, POINTER_REFERENCE_DEG), 2);
/// ```
pub fn index_under_pointer(
    cumulative_angle: f64,
    segment_count: usize,
    pointer_reference_deg: f64,
) -> usize {
    let normalized = normalize_degrees(cumulative_angle);
    let pointer_in_wheel_frame = normalize_degrees(pointer_reference_deg - normalized);
    let per = degrees_per_segment(segment_count);
    ((pointer_in_wheel_frame / per).floor() as usize) % segment_count
}

/// CSS background for a wheel with `item_count` slices.
///
/// One `conic-gradient` stop per slice, under a repeating gradient that draws
/// thin white separators at every slice boundary. CSS gradients start at
/// 12 o'clock, so both are turned by `-POINTER_REFERENCE_DEG` to put slice 0
/// where the pointer math expects it.
pub fn wheel_background(item_count: usize) -> String {
    if item_count == 0 {
        return EMPTY_WHEEL_COLOR.to_string();
    }

    let from = normalize_degrees(-POINTER_REFERENCE_DEG);
    let per = degrees_per_segment(item_count);
    let stops = (0..item_count)
        .map(|i| {
            let (start, end) = slice_bounds(i, item_count);
            format!("{} {}deg {}deg", PALETTE[i % PALETTE.len()], start, end)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let edge = (per - SEPARATOR_WIDTH_DEG).max(0.0);
    let separators = format!(
        "repeating-conic-gradient(from {from}deg, rgba(255,255,255,0) 0deg, \
         rgba(255,255,255,0) {edge}deg, rgba(255,255,255,0.9) {edge}deg, \
         rgba(255,255,255,0.9) {per}deg)"
    );
    format!("{separators}, conic-gradient(from {from}deg, {stops})")
}

/// Wheel diameter in pixels for a viewport `width` pixels wide.
pub fn wheel_diameter_for_viewport(width: f64) -> u32 {
    let scaled = (width * WHEEL_VIEWPORT_FRACTION).floor();
    if !scaled.is_finite() || scaled <= MIN_WHEEL_DIAMETER_PX as f64 {
        return MIN_WHEEL_DIAMETER_PX;
    }
    (scaled as u32).min(MAX_WHEEL_DIAMETER_PX)
}
