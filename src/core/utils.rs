/// Returns the current id and advances the counter.
pub fn next_id(id: &mut u64) -> u64 {
    let out = *id;
    *id = id.wrapping_add(1);
    out
}
