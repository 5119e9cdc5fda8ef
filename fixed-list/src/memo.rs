use crate::options::non_negative;
use crate::{ListConfig, VisibleRange, compute_range};

/// Which inputs invalidate a [`RangeMemo`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecomputePolicy {
    /// Recompute when the scroll offset or any geometry field (`items_count`, `item_height`,
    /// `viewport_height`, `overscan`) changes.
    #[default]
    AllInputs,
    /// Recompute only when the scroll offset or `items_count` changes.
    ///
    /// Changing `item_height`, `viewport_height` or `overscan` alone keeps serving the previously
    /// computed rows until the next scroll. Only `total_height` is refreshed on every call.
    OffsetAndCount,
}

#[derive(Clone, Copy, Debug)]
struct RangeInputs {
    scroll_offset: f64,
    items_count: usize,
    item_height: f64,
    viewport_height: f64,
    overscan: usize,
}

impl RangeInputs {
    fn capture(scroll_offset: f64, config: &ListConfig) -> Self {
        Self {
            scroll_offset: non_negative(scroll_offset),
            items_count: config.items_count,
            item_height: config.item_height,
            viewport_height: config.viewport_height,
            overscan: config.overscan,
        }
    }

    fn differs(&self, next: &Self, policy: RecomputePolicy) -> bool {
        // Bitwise so that a NaN input compares equal to itself.
        let offset_or_count = self.scroll_offset.to_bits() != next.scroll_offset.to_bits()
            || self.items_count != next.items_count;
        match policy {
            RecomputePolicy::OffsetAndCount => offset_or_count,
            RecomputePolicy::AllInputs => {
                offset_or_count
                    || self.item_height.to_bits() != next.item_height.to_bits()
                    || self.viewport_height.to_bits() != next.viewport_height.to_bits()
                    || self.overscan != next.overscan
            }
        }
    }
}

/// Caches the last [`VisibleRange`] and recomputes it only when a watched input changes.
///
/// Renderers typically ask for the range on every frame while the scroll offset changes far
/// less often; the memo turns those repeated asks into a comparison.
#[derive(Clone, Debug, Default)]
pub struct RangeMemo {
    policy: RecomputePolicy,
    cached: Option<(RangeInputs, VisibleRange)>,
    recomputes: u64,
}

impl RangeMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RecomputePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> RecomputePolicy {
        self.policy
    }

    /// Changes the policy and drops the cached range.
    pub fn set_policy(&mut self, policy: RecomputePolicy) {
        self.policy = policy;
        self.invalidate();
    }

    /// Forces the next [`Self::get`] to recompute.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Number of times the range was actually recomputed.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// The most recently computed range, if any.
    pub fn cached(&self) -> Option<&VisibleRange> {
        self.cached.as_ref().map(|(_, range)| range)
    }

    /// Returns the range for `scroll_offset`/`config`, recomputing only if the policy says the
    /// inputs changed since the last call.
    pub fn get(&mut self, scroll_offset: f64, config: &ListConfig) -> &VisibleRange {
        let inputs = RangeInputs::capture(scroll_offset, config);
        let policy = self.policy;
        if self
            .cached
            .as_ref()
            .is_none_or(|(prev, _)| prev.differs(&inputs, policy))
        {
            self.cached = None;
        }

        let recomputes = &mut self.recomputes;
        let (_, range) = self.cached.get_or_insert_with(|| {
            *recomputes += 1;
            ftrace!(
                scroll_offset = inputs.scroll_offset,
                items_count = inputs.items_count,
                "RangeMemo: recompute"
            );
            (inputs, compute_range(inputs.scroll_offset, config))
        });
        range.total_height = config.total_height();
        range
    }
}
