//! Consonant/vowel classification and the structural predicates built on it.
//!
//! All functions take the word as ASCII bytes. The letters `a`, `e`, `i`, `o`
//! and `u` are always vowels. `y` depends on its left neighbour: it is a
//! consonant at the start of a word or after a vowel, and a vowel after a
//! consonant. So in `toy` the `y` is a consonant, in `syzygy` every `y` is a
//! vowel.
//!
//! Any word can be written as `[C](VC)^m[V]`, where `C` is a maximal consonant
//! run and `V` a maximal vowel run. `m` is the *measure* and drives most of
//! the rule guards:
//!
//! ```text
//! m=0  tr, ee, tree, y, by
//! m=1  trouble, oats, trees, ivy
//! m=2  troubles, private, oaten, orrery
//! ```

/// Classification of every position, `true` meaning consonant.
///
/// Single left-to-right pass, so runs of `y` cost nothing extra.
fn consonants(word: &[u8]) -> impl Iterator<Item = bool> + '_ {
    let mut previous: Option<bool> = None;
    word.iter().map(move |&c| {
        let consonant = match c {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => previous.is_none_or(|prev_consonant| !prev_consonant),
            _ => true,
        };
        previous = Some(consonant);
        consonant
    })
}

/// Returns true if the character at `i` is a consonant.
///
/// Panics if `i` is out of bounds.
pub fn is_consonant(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => {
            // Walk back over the run of y's; the letter before it (if any)
            // fixes the first y, and each following y flips.
            let mut start = i;
            while start > 0 && word[start - 1] == b'y' {
                start -= 1;
            }
            let first = start == 0 || !is_consonant(word, start - 1);
            if (i - start) % 2 == 0 { first } else { !first }
        }
        _ => true,
    }
}

/// Returns true if the character at `i` is a vowel.
pub fn is_vowel(word: &[u8], i: usize) -> bool {
    !is_consonant(word, i)
}

/// Returns true if any position in `stem` is a vowel.
pub fn has_vowel(stem: &[u8]) -> bool {
    consonants(stem).any(|consonant| !consonant)
}

/// Computes the measure `m` of `stem`.
pub fn measure(stem: &[u8]) -> usize {
    let mut m = 0;
    let mut previous_vowel = false;

    for consonant in consonants(stem) {
        if consonant && previous_vowel {
            m += 1;
        }
        previous_vowel = !consonant;
    }

    m
}

/// Returns true if `word` ends consonant-vowel-consonant and the final
/// consonant is not `w`, `x` or `y`.
///
/// Used to keep or restore the silent `e` of words like `hope` and `file`.
pub fn ends_with_cvc(word: &[u8]) -> bool {
    let len = word.len();
    if len < 3 {
        return false;
    }

    is_consonant(word, len - 3)
        && is_vowel(word, len - 2)
        && is_consonant(word, len - 1)
        && !matches!(word[len - 1], b'w' | b'x' | b'y')
}

/// Returns true if the last two characters are the same consonant.
pub fn ends_with_double_consonant(word: &[u8]) -> bool {
    let len = word.len();
    len >= 2 && word[len - 1] == word[len - 2] && is_consonant(word, len - 1)
}
