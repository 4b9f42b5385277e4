//! String algorithms.
//!
//! All functions work on Unicode scalar values (`char`), so indices are
//! character positions rather than byte offsets.

/// Returns `true` if `s` reads the same forwards and backwards.
///
/// Characters are compared pairwise from both ends towards the middle.
/// Empty and single-character strings are palindromes.
///
/// # Examples
///
/// ```
/// use branchwork::is_palindrome;
///
/// assert!(is_palindrome("abcba"));
/// assert!(is_palindrome("0123210"));
/// assert!(!is_palindrome("qweqwe"));
/// ```
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Returns the index of the first occurrence of `letter` in `s`.
///
/// The comparison is case-sensitive. Returns `None` if `letter` does not occur.
///
/// # Examples
///
/// ```
/// use branchwork::index_of;
///
/// assert_eq!(index_of("qwerty", 'q'), Some(0));
/// assert_eq!(index_of("qwerty", 't'), Some(4));
/// assert_eq!(index_of("qwerty", 'Q'), None);
/// assert_eq!(index_of("qwerty", 'p'), None);
/// ```
#[must_use]
pub fn index_of(s: &str, letter: char) -> Option<usize> {
    s.chars().position(|c| c == letter)
}

/// Applies the odd/even interleave shuffle to `s` `iterations` times.
///
/// One shuffle step keeps the characters at even indices in order and moves
/// the characters at odd indices, also in order, to the end:
/// `"012345"` becomes `"024135"`.
///
/// The step is a fixed permutation of positions, so the result is computed by
/// decomposing it into cycles and rotating each cycle by `iterations`. This
/// takes time proportional to the string length no matter how large
/// `iterations` is.
///
/// # Examples
///
/// ```
/// use branchwork::shuffle_chars;
///
/// assert_eq!(shuffle_chars("012345", 1), "024135");
/// assert_eq!(shuffle_chars("012345", 2), "043215");
/// assert_eq!(shuffle_chars("qwerty", 3), "qrwtey");
/// ```
#[must_use]
pub fn shuffle_chars(s: &str, iterations: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut shuffled = chars.clone();
    let mut cycles = 0_usize;
    for_each_shuffle_cycle(chars.len(), |cycle| {
        cycles += 1;
        let shift = iterations % cycle.len();
        for (i, &from) in cycle.iter().enumerate() {
            shuffled[cycle[(i + shift) % cycle.len()]] = chars[from];
        }
    });
    log::trace!(
        "shuffled {} chars by {iterations} iterations across {cycles} cycles",
        chars.len()
    );
    shuffled.into_iter().collect()
}

/// Returns the number of shuffle steps after which a string of `len`
/// characters is back in its original order.
///
/// This is the order of the permutation performed by one step of
/// [`shuffle_chars`]: the least common multiple of its cycle lengths. It
/// depends on `len` only, never on the characters.
///
/// # Examples
///
/// ```
/// use branchwork::{shuffle_chars, shuffle_period};
///
/// assert_eq!(shuffle_period(6), 4);
/// assert_eq!(shuffle_chars("012345", shuffle_period(6)), "012345");
/// ```
#[must_use]
pub fn shuffle_period(len: usize) -> usize {
    let mut period = 1;
    for_each_shuffle_cycle(len, |cycle| {
        period = lcm(period, cycle.len());
    });
    log::debug!("shuffle period for {len} chars is {period}");
    period
}

/// Index that the character at `index` moves to after one shuffle step.
fn shuffle_target(len: usize, index: usize) -> usize {
    if index % 2 == 0 {
        index / 2
    } else {
        len.div_ceil(2) + index / 2
    }
}

fn for_each_shuffle_cycle<F>(len: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    let mut visited = vec![false; len];
    let mut cycle = Vec::new();
    for start in 0..len {
        if visited[start] {
            continue;
        }
        cycle.clear();
        let mut index = start;
        while !visited[index] {
            visited[index] = true;
            cycle.push(index);
            index = shuffle_target(len, index);
        }
        f(&cycle);
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}
