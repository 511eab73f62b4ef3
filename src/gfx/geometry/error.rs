//! Error type shared by every surface generator.

use thiserror::Error;

/// Why a generator refused to produce a mesh.
///
/// Parameter problems are reported before any buffer is allocated, so an
/// `Err` never carries partially built geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A shape parameter is outside the range the generator can tessellate.
    #[error("invalid {shape} parameter `{parameter}`: {reason}")]
    InvalidParameter {
        shape: &'static str,
        parameter: &'static str,
        reason: String,
    },

    /// The requested tessellation does not fit in 32-bit indices.
    #[error("{shape} would need {count} vertices, more than a u32 index buffer can address")]
    TooManyVertices { shape: &'static str, count: u64 },

    /// A generated mesh broke one of the [`MeshData`](super::MeshData) invariants.
    #[error("mesh invariant violated: {0}")]
    InvariantViolation(String),
}

impl GeometryError {
    pub(crate) fn invalid(
        shape: &'static str,
        parameter: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        let error = Self::InvalidParameter {
            shape,
            parameter,
            reason: reason.into(),
        };
        log::warn!("{error}");
        error
    }
}

/// Smallest radius or extent a generator accepts.
pub const MIN_EXTENT: f32 = 1e-30;

/// Largest radius or extent a generator accepts.
pub const MAX_EXTENT: f32 = 1e30;

/// Most divisions along one parameter axis.
///
/// Parameter samples `i / n` stay several `f32` ulps apart up to this count,
/// so neighbouring vertices never collapse onto each other.
pub const MAX_SPLITS: u32 = 1 << 20;

/// Rejects radii and extents outside `[MIN_EXTENT, MAX_EXTENT]`, which also
/// rules out zero, negative and non-finite values.
pub(crate) fn require_positive(
    shape: &'static str,
    parameter: &'static str,
    value: f32,
) -> Result<(), GeometryError> {
    if (MIN_EXTENT..=MAX_EXTENT).contains(&value) {
        Ok(())
    } else {
        Err(GeometryError::invalid(
            shape,
            parameter,
            format!("must lie in [{MIN_EXTENT:e}, {MAX_EXTENT:e}], got {value}"),
        ))
    }
}

/// Rejects split counts below the structural minimum of a shape or above
/// [`MAX_SPLITS`].
pub(crate) fn require_splits(
    shape: &'static str,
    parameter: &'static str,
    value: u32,
    minimum: u32,
) -> Result<(), GeometryError> {
    if value < minimum {
        Err(GeometryError::invalid(
            shape,
            parameter,
            format!("needs at least {minimum} divisions, got {value}"),
        ))
    } else if value > MAX_SPLITS {
        Err(GeometryError::invalid(
            shape,
            parameter,
            format!("allows at most {MAX_SPLITS} divisions, got {value}"),
        ))
    } else {
        Ok(())
    }
}

/// Converts a vertex count computed in 64 bits into a buffer capacity,
/// failing when the last vertex could not be addressed by a `u32` index.
pub(crate) fn vertex_capacity(shape: &'static str, count: u64) -> Result<usize, GeometryError> {
    if count > u64::from(u32::MAX) {
        return Err(GeometryError::TooManyVertices { shape, count });
    }
    usize::try_from(count).map_err(|_| GeometryError::TooManyVertices { shape, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("quad", "width", 1.0).is_ok());
        assert!(require_positive("quad", "width", 0.0).is_err());
        assert!(require_positive("quad", "width", -2.0).is_err());
        assert!(require_positive("quad", "width", f32::NAN).is_err());
        assert!(require_positive("quad", "width", f32::INFINITY).is_err());
        assert!(require_positive("quad", "width", MIN_EXTENT).is_ok());
        assert!(require_positive("quad", "width", MAX_EXTENT).is_ok());
        assert!(require_positive("quad", "width", 1e-31).is_err());
        assert!(require_positive("quad", "width", 1e31).is_err());
        assert!(require_positive("quad", "width", f32::MIN_POSITIVE).is_err());
    }

    #[test]
    fn test_require_splits() {
        assert!(require_splits("sphere", "longitude_splits", 3, 3).is_ok());
        let err = require_splits("sphere", "longitude_splits", 2, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid sphere parameter `longitude_splits`: needs at least 3 divisions, got 2"
        );
        assert!(require_splits("quad", "vertical_split_count", MAX_SPLITS, 0).is_ok());
        assert!(matches!(
            require_splits("quad", "vertical_split_count", MAX_SPLITS + 1, 0),
            Err(GeometryError::InvalidParameter { parameter: "vertical_split_count", .. })
        ));
    }

    #[test]
    fn test_vertex_capacity_overflow() {
        assert_eq!(vertex_capacity("torus", 16).unwrap(), 16);
        assert!(matches!(
            vertex_capacity("torus", u64::from(u32::MAX) + 1),
            Err(GeometryError::TooManyVertices { count, .. }) if count == u64::from(u32::MAX) + 1
        ));
    }
}
