use super::Point2;

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if `point` lies inside the ring under the even-odd rule.
///
/// Points exactly on the boundary may be reported either way.
#[must_use]
pub fn point_in_ring(point: &Point2, ring: &[Point2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[j];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area(&unit_square()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        assert!((signed_area(&pts) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[Point2::new(0.0, 0.0)]).abs() < 1e-12);
        assert!(signed_area(&[]).abs() < 1e-12);
    }

    #[test]
    fn point_in_square() {
        let sq = unit_square();
        assert!(point_in_ring(&Point2::new(0.5, 0.5), &sq));
        assert!(!point_in_ring(&Point2::new(1.5, 0.5), &sq));
        assert!(!point_in_ring(&Point2::new(0.5, -0.1), &sq));
    }

    #[test]
    fn point_in_bowtie_uses_even_odd() {
        let bowtie = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(point_in_ring(&Point2::new(0.5, 1.0), &bowtie));
        assert!(point_in_ring(&Point2::new(1.5, 1.0), &bowtie));
        assert!(!point_in_ring(&Point2::new(1.0, 0.5), &bowtie));
        assert!(!point_in_ring(&Point2::new(1.0, 1.5), &bowtie));
    }
}
