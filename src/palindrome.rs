// Two-ended palindrome check over any double-ended sequence.
// Comparison is exact: no case folding, no normalization, whitespace is significant.

/// Walk `items` from both ends at once, returning false on the first mismatch.
///
/// One element is taken from the front and one from the back per step, so the
/// walk stops after at most `len / 2` comparisons. The middle element of an
/// odd-length sequence is never compared.
pub fn is_palindrome_by<I>(items: I) -> bool
where
    I: DoubleEndedIterator,
    I::Item: PartialEq,
{
    let mut items = items;

    loop {
        let low = match items.next() {
            Some(item) => item,
            None => return true,
        };
        let high = match items.next_back() {
            Some(item) => item,
            // low was the middle element
            None => return true,
        };

        if low != high {
            return false;
        }
    }
}

/// Check whether `candidate` reads the same forward and backward, per `char`.
///
/// The empty string and any single character are palindromes.
pub fn is_palindrome(candidate: &str) -> bool {
    is_palindrome_by(candidate.chars())
}

/// Byte-wise variant for input that is not known to be UTF-8.
pub fn is_palindrome_bytes(candidate: &[u8]) -> bool {
    if candidate.is_empty() {
        return true;
    }

    let mut low = 0;
    let mut high = candidate.len() - 1;

    while low < high {
        if candidate[low] != candidate[high] {
            return false;
        }
        low += 1;
        high -= 1;
    }

    true
}

/// Check raw input the way it arrived on stdin or argv.
///
/// Valid UTF-8 is compared per `char`; anything else falls back to bytes so
/// every input still gets an answer.
pub fn is_palindrome_input(candidate: &[u8]) -> bool {
    match std::str::from_utf8(candidate) {
        Ok(text) => is_palindrome(text),
        Err(_) => is_palindrome_bytes(candidate),
    }
}
