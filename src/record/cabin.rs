//! Cabin token decoding.
//!
//! A cabin is written `deck/number/side`, e.g. `B/3/P`. Decoding never fails
//! outward: a token of any other shape becomes [`CabinToken::Malformed`] and
//! the record built from it is rejected later as incomplete.

/// Why a cabin token could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedCabin {
    /// The token did not split into exactly three `/`-separated parts.
    PartCount(usize),
    /// The deck is not a single ASCII letter.
    Deck,
    /// The number is not an integer.
    Number,
    /// The side is not a single ASCII letter.
    Side,
}

/// Result of decoding a cabin token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CabinToken {
    /// A well-formed `deck/number/side` triple.
    Parsed { deck: char, number: i64, side: char },
    /// The token had another shape.
    Malformed {
        token: String,
        reason: MalformedCabin,
    },
}

impl CabinToken {
    /// True for a well-formed triple.
    pub fn is_parsed(&self) -> bool {
        matches!(self, CabinToken::Parsed { .. })
    }

    /// Splits into `(deck, number, side)`; a malformed token yields all `None`.
    pub fn into_parts(self) -> (Option<char>, Option<i64>, Option<char>) {
        match self {
            CabinToken::Parsed { deck, number, side } => (Some(deck), Some(number), Some(side)),
            CabinToken::Malformed { .. } => (None, None, None),
        }
    }
}

/// Decodes a `deck/number/side` token.
pub fn decode(token: &str) -> CabinToken {
    let trimmed = token.trim();
    let malformed = |reason| CabinToken::Malformed {
        token: token.to_string(),
        reason,
    };

    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.len() != 3 {
        return malformed(MalformedCabin::PartCount(parts.len()));
    }

    let Some(deck) = single_letter(parts[0]) else {
        return malformed(MalformedCabin::Deck);
    };
    let Ok(number) = parts[1].parse::<i64>() else {
        return malformed(MalformedCabin::Number);
    };
    let Some(side) = single_letter(parts[2]) else {
        return malformed(MalformedCabin::Side);
    };

    CabinToken::Parsed { deck, number, side }
}

fn single_letter(part: &str) -> Option<char> {
    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}
