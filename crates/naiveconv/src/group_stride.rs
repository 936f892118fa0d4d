use crate::types::{Layout, SpatialDims};

/// Position of the group (G) stride once the channel stride is split into (G, C/G).
///
/// Strides are held in channel-major order for every layout, so for the
/// default layout the group stride always follows the batch stride. For
/// channel-last tensors the channel stride sits after the spatial strides
/// and the group stride follows W's position.
///
/// Stride `index - 1` is the channel stride that, divided by channels per
/// group, gives the per-group channel stride.
pub const fn group_stride_index(layout: Layout, dims: SpatialDims) -> usize {
    match (layout, dims) {
        (Layout::Nchw, _) => 1,
        (Layout::Nhwc, SpatialDims::Two) => 4,
        (Layout::Nhwc, SpatialDims::Three) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    #[test]
    fn default_layout_is_always_one() {
        assert_eq!(group_stride_index(Layout::Nchw, SpatialDims::Two), 1);
        assert_eq!(group_stride_index(Layout::Nchw, SpatialDims::Three), 1);
    }

    #[test]
    fn channel_last_tracks_spatial_rank() {
        assert_eq!(group_stride_index(Layout::Nhwc, SpatialDims::Two), 4);
        assert_eq!(group_stride_index(Layout::Nhwc, SpatialDims::Three), 5);
    }

    #[test]
    fn unknown_layout_is_rejected_before_indexing() {
        let err = "NCHWc8".parse::<Layout>().expect_err("blocked layout unsupported");
        assert_eq!(err, ResolveError::UnsupportedLayout("NCHWC8".into()));
    }
}
