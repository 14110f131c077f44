use thiserror::Error;

/// Smallest range the dual-pivot partitioner accepts. Below this the five
/// sample positions would collide.
pub const MIN_DUAL_PIVOT_LEN: usize = 12;

/// Smallest insertion threshold. Single-pivot quicksort needs three distinct
/// sample positions.
pub const MIN_INSERTION_THRESHOLD: usize = 3;

/// Hard ceiling on `max_depth`; bounds native stack usage.
pub const MAX_DEPTH_LIMIT: usize = 256;

pub const DEFAULT_PARAMS: SortParams = SortParams {
    insertion_threshold: 47,
    quicksort_threshold: 286,
    max_depth: 64,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("insertion threshold {got} is below the minimum of {min}")]
    InsertionThresholdTooSmall { min: usize, got: usize },

    #[error("quicksort threshold {got} is below the minimum of {min}")]
    QuicksortThresholdTooSmall { min: usize, got: usize },

    #[error("quicksort threshold {quicksort} is below insertion threshold {insertion}")]
    ThresholdsOutOfOrder { insertion: usize, quicksort: usize },

    #[error("depth limit {got} exceeds the maximum of {max}")]
    DepthLimitTooLarge { max: usize, got: usize },
}

/// Tuning knobs for the adaptive sort.
///
/// - Ranges shorter than `insertion_threshold` are insertion sorted.
/// - Ranges shorter than `quicksort_threshold` use single-pivot quicksort.
/// - Everything else is split by the dual-pivot partitioner.
/// - Once recursion goes deeper than `max_depth`, the remaining range is heap sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortParams {
    insertion_threshold: usize,
    quicksort_threshold: usize,
    max_depth: usize,
}

impl Default for SortParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

impl SortParams {
    pub fn new(
        insertion_threshold: usize,
        quicksort_threshold: usize,
        max_depth: usize,
    ) -> Result<Self, ParamsError> {
        if insertion_threshold < MIN_INSERTION_THRESHOLD {
            return Err(ParamsError::InsertionThresholdTooSmall {
                min: MIN_INSERTION_THRESHOLD,
                got: insertion_threshold,
            });
        }
        if quicksort_threshold < MIN_DUAL_PIVOT_LEN {
            return Err(ParamsError::QuicksortThresholdTooSmall {
                min: MIN_DUAL_PIVOT_LEN,
                got: quicksort_threshold,
            });
        }
        if quicksort_threshold < insertion_threshold {
            return Err(ParamsError::ThresholdsOutOfOrder {
                insertion: insertion_threshold,
                quicksort: quicksort_threshold,
            });
        }
        if max_depth > MAX_DEPTH_LIMIT {
            return Err(ParamsError::DepthLimitTooLarge {
                max: MAX_DEPTH_LIMIT,
                got: max_depth,
            });
        }

        Ok(Self {
            insertion_threshold,
            quicksort_threshold,
            max_depth,
        })
    }

    pub fn with_insertion_threshold(self, insertion_threshold: usize) -> Result<Self, ParamsError> {
        Self::new(insertion_threshold, self.quicksort_threshold, self.max_depth)
    }

    pub fn with_quicksort_threshold(self, quicksort_threshold: usize) -> Result<Self, ParamsError> {
        Self::new(self.insertion_threshold, quicksort_threshold, self.max_depth)
    }

    pub fn with_max_depth(self, max_depth: usize) -> Result<Self, ParamsError> {
        Self::new(self.insertion_threshold, self.quicksort_threshold, max_depth)
    }

    /// Parameters that never reach the dual-pivot partitioner.
    pub(crate) const fn single_pivot_only(self) -> Self {
        Self {
            quicksort_threshold: usize::MAX,
            ..self
        }
    }

    #[inline]
    pub fn insertion_threshold(&self) -> usize {
        self.insertion_threshold
    }

    #[inline]
    pub fn quicksort_threshold(&self) -> usize {
        self.quicksort_threshold
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
