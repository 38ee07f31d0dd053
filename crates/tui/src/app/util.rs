/// Clamped cursor movement over a
/// list of `len` rows. Also pulls a
/// stale index back in range after
/// the list shrinks.
pub(crate) fn move_index(
  current: usize,
  len: usize,
  delta: i32
) -> usize {
  if len == 0 {
    return 0;
  }
  let last = len - 1;
  if delta >= 0 {
    current
      .saturating_add(delta as usize)
      .min(last)
  } else {
    current
      .saturating_sub(
        delta.unsigned_abs() as usize
      )
      .min(last)
  }
}
