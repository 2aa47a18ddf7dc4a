use super::Vector2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    pub fn check_collision(&self, other: &Rectangle) -> bool {
        (self.x < other.x + other.width && self.x + self.width > other.x)
            && (self.y < other.y + other.height && self.y + self.height > other.y)
    }

    /// Overlapping area of both rectangles, empty when they do not intersect.
    pub fn collision(&self, other: &Rectangle) -> Rectangle {
        let left = self.x.max(other.x);
        let right = (self.x + self.width).min(other.x + other.width);
        let top = self.y.max(other.y);
        let bottom = (self.y + self.height).min(other.y + other.height);

        if left < right && top < bottom {
            Rectangle::new(left, top, right - left, bottom - top)
        } else {
            Rectangle::default()
        }
    }

    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn check_collision_circle(&self, center: Vector2, radius: f32) -> bool {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        // raylib truncates the rectangle centre to whole pixels
        let dx = (center.x - (self.x + half_w) as i32 as f32).abs();
        let dy = (center.y - (self.y + half_h) as i32 as f32).abs();

        if dx > half_w + radius || dy > half_h + radius {
            return false;
        }
        if dx <= half_w || dy <= half_h {
            return true;
        }

        let corner_distance_sq = (dx - half_w).powi(2) + (dy - half_h).powi(2);
        corner_distance_sq <= radius * radius
    }
}

impl From<Rectangle> for ffi::Rectangle {
    #[inline]
    fn from(r: Rectangle) -> Self {
        ffi::Rectangle {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

impl From<ffi::Rectangle> for Rectangle {
    #[inline]
    fn from(r: ffi::Rectangle) -> Self {
        Rectangle::new(r.x, r.y, r.width, r.height)
    }
}

pub fn check_collision_circles(center1: Vector2, radius1: f32, center2: Vector2, radius2: f32) -> bool {
    center1.distance(center2) <= radius1 + radius2
}

pub fn check_collision_point_triangle(point: Vector2, p1: Vector2, p2: Vector2, p3: Vector2) -> bool {
    let denom = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
    let alpha = ((p2.y - p3.y) * (point.x - p3.x) + (p3.x - p2.x) * (point.y - p3.y)) / denom;
    let beta = ((p3.y - p1.y) * (point.x - p3.x) + (p1.x - p3.x) * (point.y - p3.y)) / denom;
    let gamma = 1.0 - alpha - beta;
    alpha > 0.0 && beta > 0.0 && gamma > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_rect() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        let c = Rectangle::new(20.0, 0.0, 1.0, 1.0);
        assert!(a.check_collision(&b));
        assert!(!a.check_collision(&c));
        assert_eq!(a.collision(&b), Rectangle::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a.collision(&c), Rectangle::default());
    }

    #[test]
    fn test_circle_rect_corner() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.check_collision_circle(Vector2::new(12.0, 5.0), 2.5));
        assert!(!r.check_collision_circle(Vector2::new(12.0, 12.0), 2.0));
        assert!(r.check_collision_circle(Vector2::new(12.0, 12.0), 3.0));
    }

    #[test]
    fn test_circle_rect_truncated_centre() {
        // Centre (1.5, 1.5) is taken as (1, 1)
        let r = Rectangle::new(0.0, 0.0, 3.0, 3.0);
        assert!(!r.check_collision_circle(Vector2::new(3.9, 1.5), 1.0));
        assert!(r.check_collision_circle(Vector2::new(3.4, 1.5), 1.0));
    }
}
