//! Rays, world-space boxes and precision conversions.

use glam::{DMat4, DVec3, Mat4, Vec3};

/// A half-line in world space, built fresh for every pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin in world space.
    pub origin: Vec3,
    /// Unit-length direction (zero if constructed from a zero vector).
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point reached after travelling `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box in world space.
///
/// Stored in f64 so box metrics and volumes keep full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the box.
    pub min: DVec3,
    /// Maximum corner of the box.
    pub max: DVec3,
}

impl BoundingBox {
    /// Create a new box ensuring min <= max per axis.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        debug_assert!(min.cmple(max).all(), "invalid bounding box: min > max");
        Self { min, max }
    }

    /// Degenerate box containing a single point.
    pub fn from_point(point: DVec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Minimal box enclosing `points`, or `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut points = points.into_iter();
        let mut bounds = Self::from_point(points.next()?);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grow the box so it contains `point`.
    pub fn extend(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Extents along each axis (width, height, depth).
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the box diagonal.
    pub fn diagonal(&self) -> f64 {
        self.size().length()
    }

    /// Product of the three extents.
    pub fn volume(&self) -> f64 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Slab test against `ray`.
    ///
    /// Returns the distance to the entry point, or to the exit point when the
    /// origin is inside the box.
    pub fn ray_intersection(&self, ray: &Ray) -> Option<f64> {
        let origin = ray.origin.as_dvec3();
        let direction = ray.direction.as_dvec3();

        let mut tmin = f64::NEG_INFINITY;
        let mut tmax = f64::INFINITY;
        for axis in 0..3 {
            let (o, d) = (origin[axis], direction[axis]);
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if d == 0.0 {
                // Parallel to this slab: inside it (faces included) or a miss.
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            tmin = tmin.max(t1.min(t2));
            tmax = tmax.min(t1.max(t2));
        }

        // Entire box is behind the origin
        if tmax < 0.0 || tmin > tmax {
            return None;
        }

        Some(if tmin < 0.0 { tmax } else { tmin })
    }
}

/// Promote a single-precision transform to f64.
pub fn widen(matrix: &Mat4) -> DMat4 {
    DMat4::from_cols_array(&matrix.to_cols_array().map(f64::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(DVec3::splat(-0.5), DVec3::splat(0.5))
    }

    #[test]
    fn ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.point_at(2.0), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn from_points_encloses_all() {
        let bounds = BoundingBox::from_points([
            DVec3::new(1.0, -2.0, 0.5),
            DVec3::new(-1.0, 3.0, 0.0),
            DVec3::new(0.0, 0.0, 2.0),
        ])
        .unwrap();

        assert_eq!(bounds.min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, DVec3::new(1.0, 3.0, 2.0));
        assert_eq!(bounds.size(), DVec3::new(2.0, 5.0, 2.0));
        assert_eq!(bounds.volume(), 20.0);
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn unit_box_metrics() {
        let bounds = unit_box();
        assert_eq!(bounds.volume(), 1.0);
        assert!((bounds.diagonal() - 3f64.sqrt()).abs() < 1e-12);
        assert_eq!(bounds.center(), DVec3::ZERO);
    }

    #[test]
    fn union_covers_both() {
        let a = unit_box();
        let b = BoundingBox::new(DVec3::new(1.0, 1.0, 1.0), DVec3::new(2.0, 2.0, 2.0));
        let joined = a.union(&b);
        assert_eq!(joined.min, DVec3::splat(-0.5));
        assert_eq!(joined.max, DVec3::splat(2.0));
    }

    #[test]
    fn slab_test_hits_and_misses() {
        let bounds = unit_box();

        let hit = bounds.ray_intersection(&Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::NEG_Z));
        assert!((hit.unwrap() - 1.5).abs() < 1e-6);

        let miss = bounds.ray_intersection(&Ray::new(Vec3::new(2.0, 0.0, 2.0), Vec3::NEG_Z));
        assert!(miss.is_none());

        let behind = bounds.ray_intersection(&Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::Z));
        assert!(behind.is_none());
    }

    #[test]
    fn slab_test_from_inside_returns_exit() {
        let hit = unit_box()
            .ray_intersection(&Ray::new(Vec3::ZERO, Vec3::X))
            .unwrap();
        assert!((hit - 0.5).abs() < 1e-6);
    }

    #[test]
    fn slab_test_keeps_rays_grazing_a_face() {
        // Origin on the x = 0 face, travelling parallel to it.
        let bounds = BoundingBox::new(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, 0.5, 3.0), Vec3::NEG_Z);
        let hit = bounds.ray_intersection(&ray).unwrap();
        assert!((hit - 3.0).abs() < 1e-6);

        let outside = Ray::new(Vec3::new(-0.001, 0.5, 3.0), Vec3::NEG_Z);
        assert!(bounds.ray_intersection(&outside).is_none());
    }

    #[test]
    fn widen_preserves_translation() {
        let matrix = Mat4::from_translation(Vec3::new(1.5, -2.0, 0.25));
        let wide = widen(&matrix);
        assert_eq!(wide.w_axis.truncate(), DVec3::new(1.5, -2.0, 0.25));
    }
}
