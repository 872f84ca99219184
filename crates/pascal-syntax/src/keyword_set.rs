use crate::Keyword;

/// A set of keywords, one bit per `Keyword` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordSet(u64);

impl KeywordSet {
    pub const EMPTY: Self = Self(0);

    const fn bit(keyword: Keyword) -> u64 {
        1 << keyword as u32
    }

    pub const fn new<const N: usize>(keywords: [Keyword; N]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < N {
            mask |= Self::bit(keywords[i]);
            i += 1;
        }
        Self(mask)
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(&self, keyword: Keyword) -> bool {
        self.0 & Self::bit(keyword) != 0
    }
}
