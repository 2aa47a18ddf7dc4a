use crate::math::{Vector3, Vector4};

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Color {
    pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    pub const DARKGRAY: Color = Color::rgb(80, 80, 80);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const GOLD: Color = Color::rgb(255, 203, 0);
    pub const ORANGE: Color = Color::rgb(255, 161, 0);
    pub const PINK: Color = Color::rgb(255, 109, 194);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const MAROON: Color = Color::rgb(190, 33, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const LIME: Color = Color::rgb(0, 158, 47);
    pub const DARKGREEN: Color = Color::rgb(0, 117, 44);
    pub const SKYBLUE: Color = Color::rgb(102, 191, 255);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const DARKBLUE: Color = Color::rgb(0, 82, 172);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);
    pub const VIOLET: Color = Color::rgb(135, 60, 190);
    pub const DARKPURPLE: Color = Color::rgb(112, 31, 126);
    pub const BEIGE: Color = Color::rgb(211, 176, 131);
    pub const BROWN: Color = Color::rgb(127, 106, 79);
    pub const DARKBROWN: Color = Color::rgb(76, 63, 47);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLANK: Color = Color::new(0, 0, 0, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::new(r, g, b, 255)
    }

    /// Looks up one of raylib's predefined colors by its lowercase name.
    pub fn named(name: &str) -> Option<Color> {
        let color = match name {
            "lightgray" => Color::LIGHTGRAY,
            "gray" => Color::GRAY,
            "darkgray" => Color::DARKGRAY,
            "yellow" => Color::YELLOW,
            "gold" => Color::GOLD,
            "orange" => Color::ORANGE,
            "pink" => Color::PINK,
            "red" => Color::RED,
            "maroon" => Color::MAROON,
            "green" => Color::GREEN,
            "lime" => Color::LIME,
            "darkgreen" => Color::DARKGREEN,
            "skyblue" => Color::SKYBLUE,
            "blue" => Color::BLUE,
            "darkblue" => Color::DARKBLUE,
            "purple" => Color::PURPLE,
            "violet" => Color::VIOLET,
            "darkpurple" => Color::DARKPURPLE,
            "beige" => Color::BEIGE,
            "brown" => Color::BROWN,
            "darkbrown" => Color::DARKBROWN,
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            "blank" => Color::BLANK,
            "magenta" => Color::MAGENTA,
            "raywhite" => Color::RAYWHITE,
            _ => return None,
        };
        Some(color)
    }

    /// `0xRRGGBBAA`.
    #[inline]
    pub fn to_int(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    #[inline]
    pub fn from_int(hex: u32) -> Self {
        let [r, g, b, a] = hex.to_be_bytes();
        Color { r, g, b, a }
    }

    pub fn normalize(self) -> Vector4 {
        Vector4::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }

    /// Inverse of [`Color::normalize`]; components are clamped to `[0, 1]`.
    pub fn from_normalized(v: Vector4) -> Self {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Color::new(channel(v.x), channel(v.y), channel(v.z), channel(v.w))
    }

    /// Hue in degrees, saturation and value in `[0, 1]`.
    pub fn to_hsv(self) -> Vector3 {
        let rgb = self.normalize();
        let min = rgb.x.min(rgb.y).min(rgb.z);
        let max = rgb.x.max(rgb.y).max(rgb.z);
        let delta = max - min;

        let mut hsv = Vector3::new(0.0, 0.0, max);
        if delta < 0.00001 {
            return hsv;
        }
        if max > 0.0 {
            hsv.y = delta / max;
        } else {
            hsv.x = f32::NAN;
            return hsv;
        }

        hsv.x = if rgb.x >= max {
            (rgb.y - rgb.z) / delta
        } else if rgb.y >= max {
            2.0 + (rgb.z - rgb.x) / delta
        } else {
            4.0 + (rgb.x - rgb.y) / delta
        };
        hsv.x *= 60.0;
        if hsv.x < 0.0 {
            hsv.x += 360.0;
        }
        hsv
    }

    /// Opaque color from hue (degrees), saturation and value.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let channel = |n: f32| {
            let k = (n + hue / 60.0).rem_euclid(6.0);
            let k = k.min(4.0 - k).clamp(0.0, 1.0);
            ((value - value * saturation * k) * 255.0) as u8
        };
        Color::rgb(channel(5.0), channel(3.0), channel(1.0))
    }

    /// Same color with alpha set to `alpha` in `[0, 1]`.
    pub fn fade(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Color {
            a: (255.0 * alpha) as u8,
            ..self
        }
    }
}

impl From<Color> for ffi::Color {
    #[inline]
    fn from(c: Color) -> Self {
        ffi::Color {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<ffi::Color> for Color {
    #[inline]
    fn from(c: ffi::Color) -> Self {
        Color::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_conversion() {
        assert_eq!(Color::RED.to_int(), 0xe62937ff);
        assert_eq!(Color::from_int(0xe62937ff), Color::RED);
    }

    #[test]
    fn test_hsv_round_trip() {
        for color in [Color::RED, Color::SKYBLUE, Color::GOLD, Color::WHITE, Color::BLACK] {
            let hsv = color.to_hsv();
            let back = Color::from_hsv(hsv.x, hsv.y, hsv.z);
            assert!((back.r as i32 - color.r as i32).abs() <= 1, "{color:?} -> {back:?}");
            assert!((back.g as i32 - color.g as i32).abs() <= 1, "{color:?} -> {back:?}");
            assert!((back.b as i32 - color.b as i32).abs() <= 1, "{color:?} -> {back:?}");
        }
    }

    #[test]
    fn test_fade() {
        assert_eq!(Color::WHITE.fade(0.5).a, 127);
        assert_eq!(Color::WHITE.fade(2.0).a, 255);
    }
}
