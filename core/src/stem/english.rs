//! Porter (1980) suffix stripping, following the published reference
//! implementation (including its `bli -> ble` and `logi -> log` step 2 rules).
//!
//! A word is viewed as `[C](VC){m}[V]`; most rules only fire when the measure
//! `m` of the remaining stem is large enough.

use super::ends_with;

#[derive(Debug, Default, Clone, Copy)]
pub struct PorterStemmer;

const STEP2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

impl PorterStemmer {
    pub fn stem(&self, word: &str) -> String {
        let mut w: Vec<char> = word.chars().collect();
        if w.len() < 3 {
            return word.to_string();
        }
        step1a(&mut w);
        step1b(&mut w);
        step1c(&mut w);
        replace_first(&mut w, STEP2);
        replace_first(&mut w, STEP3);
        step4(&mut w);
        step5(&mut w);
        w.into_iter().collect()
    }
}

/// Consonant flags for every position, in one left-to-right pass.
/// `y` is a consonant at the start or after a vowel.
fn consonants(w: &[char]) -> Vec<bool> {
    let mut flags: Vec<bool> = Vec::with_capacity(w.len());
    for (i, &c) in w.iter().enumerate() {
        let cons = match c {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !flags[i - 1],
            _ => true,
        };
        flags.push(cons);
    }
    flags
}

/// Number of VC sequences in `w`.
fn measure(w: &[char]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for cons in consonants(w) {
        if cons && prev_vowel {
            m += 1;
        }
        prev_vowel = !cons;
    }
    m
}

fn has_vowel(w: &[char]) -> bool { consonants(w).contains(&false) }

fn ends_double_consonant(w: &[char]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && consonants(w)[n - 1]
}

/// Ends consonant-vowel-consonant, the last not `w`, `x` or `y`.
fn ends_cvc(w: &[char]) -> bool {
    let n = w.len();
    if n < 3 || matches!(w[n - 1], 'w' | 'x' | 'y') {
        return false;
    }
    let cons = consonants(w);
    cons[n - 1] && !cons[n - 2] && cons[n - 3]
}

/// Length of the stem left by removing `suffix`, if `w` ends with it.
fn stem_len(w: &[char], suffix: &str) -> Option<usize> {
    ends_with(w, suffix).then(|| w.len() - suffix.chars().count())
}

fn set_suffix(w: &mut Vec<char>, stem: usize, with: &str) {
    w.truncate(stem);
    w.extend(with.chars());
}

/// Applies the first rule whose suffix matches, if the stem has `m > 0`.
/// Later rules are not tried once a suffix has matched.
fn replace_first(w: &mut Vec<char>, rules: &[(&str, &str)]) {
    if let Some((stem, with)) = rules.iter().find_map(|(s, r)| stem_len(w, s).map(|n| (n, *r))) {
        if measure(&w[..stem]) > 0 {
            set_suffix(w, stem, with);
        }
    }
}

fn step1a(w: &mut Vec<char>) {
    if ends_with(w, "sses") || ends_with(w, "ies") {
        w.truncate(w.len() - 2);
    } else if ends_with(w, "s") && !ends_with(w, "ss") {
        w.pop();
    }
}

fn step1b(w: &mut Vec<char>) {
    if let Some(stem) = stem_len(w, "eed") {
        if measure(&w[..stem]) > 0 {
            w.pop();
        }
        return;
    }
    let Some(stem) = stem_len(w, "ed").or_else(|| stem_len(w, "ing")) else { return };
    if !has_vowel(&w[..stem]) {
        return;
    }
    w.truncate(stem);
    if ends_with(w, "at") || ends_with(w, "bl") || ends_with(w, "iz") {
        w.push('e');
    } else if ends_double_consonant(w) {
        if !matches!(w[w.len() - 1], 'l' | 's' | 'z') {
            w.pop();
        }
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push('e');
    }
}

fn step1c(w: &mut [char]) {
    let n = w.len();
    if ends_with(w, "y") && has_vowel(&w[..n - 1]) {
        w[n - 1] = 'i';
    }
}

fn step4(w: &mut Vec<char>) {
    let found = STEP4.iter().find_map(|s| {
        let stem = stem_len(w, s)?;
        if *s == "ion" && !(stem > 0 && matches!(w[stem - 1], 's' | 't')) {
            return None;
        }
        Some(stem)
    });
    if let Some(stem) = found {
        if measure(&w[..stem]) > 1 {
            w.truncate(stem);
        }
    }
}

fn step5(w: &mut Vec<char>) {
    if ends_with(w, "e") {
        let stem = &w[..w.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            w.pop();
        }
    }
    if ends_with(w, "l") && ends_double_consonant(w) && measure(w) > 1 {
        w.pop();
    }
}
