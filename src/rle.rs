//! Run-Length Codec
//!
//! Sequences in the table are stored in a compact digit+symbol form.
//!
//! ## Format
//! ```text
//! 3A2BC   →   AAABBC
//! │ │ └── literal symbol
//! │ └──── count 2, symbol B
//! └────── count 3, symbol A
//! ```
//!
//! - Counts are a single decimal digit (0-9); there are no multi-digit counts
//! - There is no escape: a digit is always a count
//! - A trailing digit with no symbol after it expands to nothing

/// Largest count a single run token can carry
pub const MAX_RUN: usize = 9;

/// Runs shorter than this are written literally by [`encode`]
const MIN_ENCODED_RUN: usize = 3;

/// Decode a run-length encoded string
///
/// A digit `d` followed by a symbol `c` expands to `c` repeated `d` times.
/// Every other character is copied through unchanged.
pub fn decode(encoded: &str) -> String {
    let mut decoded = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();

    while let Some(c) = chars.next() {
        match c.to_digit(10) {
            Some(count) => {
                if let Some(symbol) = chars.next() {
                    decoded.extend(std::iter::repeat(symbol).take(count as usize));
                }
            }
            None => decoded.push(c),
        }
    }

    decoded
}

/// Encode a string into run-length form
///
/// Runs of three or more become `<count><symbol>`; shorter runs are kept
/// literal. Runs longer than [`MAX_RUN`] are split into several tokens.
/// Input containing ASCII digits does not survive a round trip.
pub fn encode(decoded: &str) -> String {
    let mut encoded = String::with_capacity(decoded.len());
    let mut chars = decoded.chars().peekable();

    while let Some(symbol) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&symbol) {
            chars.next();
            run += 1;
        }

        while run > 0 {
            let chunk = run.min(MAX_RUN);
            push_run(&mut encoded, symbol, chunk);
            run -= chunk;
        }
    }

    encoded
}

fn push_run(out: &mut String, symbol: char, run: usize) {
    if run >= MIN_ENCODED_RUN {
        // run <= MAX_RUN, so this is always one digit
        out.push_str(&run.to_string());
        out.push(symbol);
    } else {
        out.extend(std::iter::repeat(symbol).take(run));
    }
}
