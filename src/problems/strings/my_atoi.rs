//! String to Integer (atoi) (LeetCode 8).
//!
//! Skip leading spaces, read an optional sign, then digits up to the first
//! non-digit. The value is clamped to the `i32` range; no digits gives 0.

use crate::traits::{Problem, Variant};

/// Single forward scan with overflow clamping before each push.
pub fn linear_scan(s: &str) -> i32 {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    // accumulate as a negative number: |i32::MIN| > i32::MAX
    let mut acc: i32 = 0;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i32::from(b - b'0');
        match acc.checked_mul(10).and_then(|v| v.checked_sub(digit)) {
            Some(v) => acc = v,
            None => return if negative { i32::MIN } else { i32::MAX },
        }
        i += 1;
    }
    if negative {
        acc
    } else {
        acc.checked_neg().unwrap_or(i32::MAX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Signed,
    Number,
    End,
}

impl State {
    fn next(self, c: char) -> State {
        match (self, c) {
            (State::Start, ' ') => State::Start,
            (State::Start, '+' | '-') => State::Signed,
            (State::Start | State::Signed | State::Number, '0'..='9') => State::Number,
            _ => State::End,
        }
    }
}

/// Explicit automaton: `Start -> Signed -> Number -> End`.
pub fn state_machine(s: &str) -> i32 {
    let mut state = State::Start;
    let mut sign = 1i64;
    let mut value = 0i64;
    for c in s.chars() {
        state = state.next(c);
        match state {
            State::Start => {}
            State::Signed => {
                if c == '-' {
                    sign = -1;
                }
            }
            State::Number => {
                let digit = i64::from(c as u8 - b'0');
                value = (value * 10 + digit).min(i64::from(i32::MAX) + 1);
            }
            State::End => break,
        }
    }
    (sign * value).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub struct MyAtoi;

impl Problem for MyAtoi {
    type Input = String;
    type Output = i32;
    const ID: u32 = 8;
    const SLUG: &'static str = "string-to-integer-atoi";
    const TITLE: &'static str = "String to Integer (atoi)";

    fn variants() -> Vec<Variant<String, i32>> {
        vec![
            Variant::new("linear_scan", |s: &String| linear_scan(s)),
            Variant::new("state_machine", |s: &String| state_machine(s)),
        ]
    }

    fn demo_cases() -> Vec<String> {
        [
            "42",
            "   -42",
            "4193 with words",
            "words and 987",
            "-91283472332",
            "91283472332",
            "+-12",
            "",
            "  +0 123",
            "-2147483648",
            "2147483648",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}
