//! Fetch Generations
//!
//! Each reload bumps the generation; a response whose generation is no
//! longer the latest is dropped so a slow retry cannot overwrite a newer list.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchGeneration(u32);

impl FetchGeneration {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn is_current(self, latest: FetchGeneration) -> bool {
        self == latest
    }
}

impl std::fmt::Display for FetchGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
