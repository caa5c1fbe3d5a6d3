/// Position of the viewer within the dataset.
///
/// Transitions are total: every target index saturates to `[0, len - 1]`
/// instead of wrapping or failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerState {
    current_index: usize,
    len: usize,
}

impl ViewerState {
    /// Start at the first image. Returns `None` for an empty dataset.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            current_index: 0,
            len,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based index shown to the operator
    pub fn display_index(&self) -> usize {
        self.current_index + 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn goto(self, target: i64) -> Self {
        let last = i64::try_from(self.len - 1).unwrap_or(i64::MAX);
        let clamped = target.clamp(0, last);
        Self {
            // In range [0, len - 1], so the conversion cannot fail
            current_index: usize::try_from(clamped).unwrap_or(self.len - 1),
            len: self.len,
        }
    }

    pub fn next(self) -> Self {
        self.goto(self.position().saturating_add(1))
    }

    pub fn prev(self) -> Self {
        self.goto(self.position().saturating_sub(1))
    }

    fn position(&self) -> i64 {
        i64::try_from(self.current_index).unwrap_or(i64::MAX)
    }
}
