/// Exclusive end of the ASCII digit run that begins at `start`.
///
/// Returns `start` itself when there is no digit at that position.
pub(crate) fn digit_run_end(s: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Offsets where both names carry a digit at the same position.
///
/// Each shared run contributes its start offset once, or twice when the two
/// leading digits differ, so positions where the number actually changes
/// weigh more in the episode vote. Scanning resumes after `a`'s run; a
/// shorter or longer run in `b` is not looked at.
pub(crate) fn locate_digit_offsets(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Vec<usize> {
    let (a, b) = (a.as_ref(), b.as_ref());
    let mut offsets = Vec::new();
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i].is_ascii_digit() && b[i].is_ascii_digit() {
            offsets.push(i);
            if a[i] != b[i] {
                offsets.push(i);
            }
            i = digit_run_end(a, i);
        } else {
            i += 1;
        }
    }
    offsets
}
