/// Outcome of checking whether content fits in the remaining column height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

// Small epsilon to absorb floating point inaccuracies.
const EPSILON: f32 = 0.01;

/// Centralized logic to check if content fits in the remaining space.
///
/// * `cursor_y`: The current Y position relative to the top of the column.
/// * `needed`: The height the content requires.
/// * `column_height`: The total usable height of the column.
pub fn check_fit(cursor_y: f32, needed: f32, column_height: f32) -> BreakAnalysis {
    let available = (column_height - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: needed > available + EPSILON,
        remaining_height: available,
    }
}

/// Whole lines of `line_height` that fit in `height`.
pub fn lines_that_fit(height: f32, line_height: f32) -> usize {
    if line_height <= 0.0 || height <= 0.0 {
        return 0;
    }
    ((height + EPSILON) / line_height).floor() as usize
}
