/// Number of items on the HEXACO-100 form (q1..q100)
pub const ITEM_COUNT: usize = 100;

/// Column header for an item number, e.g. `7` -> `"q7"`
pub fn column_name(item: u8) -> String {
    format!("q{}", item)
}

/// A single response on the five-point scale.
///
/// Only 1..=5 can be constructed, so every downstream computation works on
/// in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Likert(u8);

impl Likert {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Likert(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Flip polarity: 1<->5, 2<->4, 3 stays put
    pub fn reversed(self) -> Self {
        Likert(Self::MIN + Self::MAX - self.0)
    }
}

impl From<Likert> for f64 {
    fn from(value: Likert) -> f64 {
        f64::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(1), "q1");
        assert_eq!(column_name(100), "q100");
    }

    #[test]
    fn test_likert_range() {
        assert!(Likert::new(0).is_none());
        assert!(Likert::new(6).is_none());
        for v in 1..=5 {
            assert_eq!(Likert::new(v).map(Likert::value), Some(v));
        }
    }

    #[test]
    fn test_reversed_is_six_minus_value() {
        for v in 1..=5u8 {
            let likert = Likert::new(v).unwrap();
            assert_eq!(likert.reversed().value(), 6 - v);
        }
    }

    #[test]
    fn test_reversed_is_involution() {
        for v in 1..=5u8 {
            let likert = Likert::new(v).unwrap();
            assert_eq!(likert.reversed().reversed(), likert);
        }
    }

    #[test]
    fn test_midpoint_fixed() {
        let mid = Likert::new(3).unwrap();
        assert_eq!(mid.reversed(), mid);
    }
}
