// Simple color struct, created from an unsigned 32 representing RRGGBBAA,
// plus the binary shade tag each particle gets at spawn

/// Which of the page's two tints a particle carries. Picked once at spawn,
/// never changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shade {
    Primary,
    Accent,
}

impl Shade {
    // Cyan: 34, 211, 238 || Red: 239, 68, 68
    pub fn color(self) -> Color {
        match self {
            Shade::Primary => Color::from_u32(0x22d3eeff),
            Shade::Accent => Color::from_u32(0xef4444ff),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    // Canvas fill/stroke styles want a CSS color string; opacity rides in
    // the alpha slot rather than the stored channel
    pub fn to_css(&self, opacity: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_unpacks_channels() {
        let color = Color::from_u32(0x22d3eeff);
        assert_eq!(color.r, 34);
        assert_eq!(color.g, 211);
        assert_eq!(color.b, 238);
        assert_eq!(color.a, 255);
    }

    #[test]
    fn shades_map_to_page_palette() {
        assert_eq!(Shade::Primary.color(), Color::from_u32(0x22d3eeff));
        assert_eq!(Shade::Accent.color(), Color::from_u32(0xef4444ff));
    }

    #[test]
    fn to_css_carries_opacity() {
        let css = Shade::Primary.color().to_css(0.375);
        assert_eq!(css, "rgba(34, 211, 238, 0.375)");
    }
}
