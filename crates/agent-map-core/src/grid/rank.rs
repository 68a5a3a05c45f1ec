use serde::{Deserialize, Serialize};

/// A score in a filled cell, always within `Rank::MIN..=Rank::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Sanitize text typed into a cell. Only a single digit 1-8 survives
    /// (surrounding whitespace aside); everything else means "empty".
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Self::new),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("rank {value} outside 1-8"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything a user can type or pick for a cell.
///
/// Conversion never fails: input that is not a valid rank becomes `None`,
/// which the grid stores as an empty cell.
pub trait CellInput {
    fn to_rank(&self) -> Option<Rank>;

    /// Deliberately empty input (clearing a cell), as opposed to a typo
    fn is_blank(&self) -> bool {
        false
    }
}

impl CellInput for &str {
    fn to_rank(&self) -> Option<Rank> {
        Rank::parse(self)
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl CellInput for String {
    fn to_rank(&self) -> Option<Rank> {
        Rank::parse(self)
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl CellInput for &String {
    fn to_rank(&self) -> Option<Rank> {
        Rank::parse(self)
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl CellInput for Rank {
    fn to_rank(&self) -> Option<Rank> {
        Some(*self)
    }
}

impl<T: CellInput> CellInput for Option<T> {
    fn to_rank(&self) -> Option<Rank> {
        self.as_ref().and_then(CellInput::to_rank)
    }

    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(CellInput::is_blank)
    }
}

macro_rules! impl_cell_input_for_int {
    ($($ty:ty),*) => {
        $(
            impl CellInput for $ty {
                fn to_rank(&self) -> Option<Rank> {
                    u8::try_from(*self).ok().and_then(Rank::new)
                }
            }
        )*
    };
}

impl_cell_input_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_parse_accepts_single_digits() {
        for n in 1..=8u8 {
            assert_eq!(Rank::parse(&n.to_string()), Rank::new(n));
        }
        assert_eq!(Rank::parse(" 3 ").map(Rank::value), Some(3));
    }

    #[test]
    fn test_rank_parse_rejects_everything_else() {
        for input in ["", " ", "0", "9", "-1", "abc", "05", "10", "3.0", "+4", "٣"] {
            assert_eq!(Rank::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_cell_input_numbers() {
        assert_eq!(5i64.to_rank().map(Rank::value), Some(5));
        assert_eq!(0u8.to_rank(), None);
        assert_eq!((-1i32).to_rank(), None);
        assert_eq!(9usize.to_rank(), None);
        assert_eq!(300u16.to_rank(), None);
        assert_eq!(Some("7").to_rank().map(Rank::value), Some(7));
        assert_eq!(None::<&str>.to_rank(), None);
    }

    #[test]
    fn test_cell_input_blank() {
        assert!("".is_blank());
        assert!("  ".is_blank());
        assert!(!"x".is_blank());
        assert!(None::<u8>.is_blank());
        assert!(!0u8.is_blank());
    }

    #[test]
    fn test_rank_serde() {
        let rank = Rank::new(4).unwrap();
        assert_eq!(serde_json::to_string(&rank).unwrap(), "4");
        assert!(serde_json::from_str::<Rank>("9").is_err());
    }
}
