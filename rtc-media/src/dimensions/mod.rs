
use crate::rotation::VideoRotation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of a video frame in pixels.
///
/// A zero on either axis means the size is unknown, e.g. a capturer that has
/// not resolved its first frame yet. Use [`Dimensions::is_zero`] to check for
/// that before treating a value as a real frame size.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const ZERO: Dimensions = Dimensions::new(0, 0);

    // 16:9 presets
    pub const H90_169: Dimensions = Dimensions::new(160, 90);
    pub const H180_169: Dimensions = Dimensions::new(320, 180);
    pub const H216_169: Dimensions = Dimensions::new(384, 216);
    pub const H360_169: Dimensions = Dimensions::new(640, 360);
    pub const H540_169: Dimensions = Dimensions::new(960, 540);
    pub const H720_169: Dimensions = Dimensions::new(1280, 720);
    pub const H1080_169: Dimensions = Dimensions::new(1920, 1080);
    pub const H1440_169: Dimensions = Dimensions::new(2560, 1440);
    pub const H2160_169: Dimensions = Dimensions::new(3840, 2160);

    // 4:3 presets
    pub const H120_43: Dimensions = Dimensions::new(160, 120);
    pub const H180_43: Dimensions = Dimensions::new(240, 180);
    pub const H240_43: Dimensions = Dimensions::new(320, 240);
    pub const H360_43: Dimensions = Dimensions::new(480, 360);
    pub const H480_43: Dimensions = Dimensions::new(640, 480);
    pub const H540_43: Dimensions = Dimensions::new(720, 540);
    pub const H720_43: Dimensions = Dimensions::new(960, 720);
    pub const H1080_43: Dimensions = Dimensions::new(1440, 1080);
    pub const H1440_43: Dimensions = Dimensions::new(1920, 1440);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either axis is zero.
    pub const fn is_zero(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The longer of the two sides.
    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Width divided by height, or 0.0 when the height is unknown.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            0.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }

    /// Dimensions as seen after applying `rotation`: axes swap for 90° and 270°.
    pub fn rotated(&self, rotation: VideoRotation) -> Self {
        if rotation.is_quarter_turn() {
            Self::new(self.height, self.width)
        } else {
            *self
        }
    }

    /// Scales down to the largest size with the same aspect ratio that fits
    /// inside `bounds`.
    ///
    /// Never upscales. A zero axis in `bounds` leaves that axis unconstrained,
    /// so `bounds == ZERO` is a pass-through. A zero source yields
    /// [`Dimensions::ZERO`].
    ///
    /// The scale factor is `min(bounds.width / width, bounds.height / height)`
    /// and the scaled side is floored. It is evaluated with integer cross
    /// multiplication so that exact ratios such as 1920 -> 640 do not lose a
    /// pixel to floating point error.
    pub fn aspect_fit(&self, bounds: Dimensions) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let (sw, sh) = (u64::from(self.width), u64::from(self.height));
        let (bw, bh) = (u64::from(bounds.width), u64::from(bounds.height));

        let fits_width = bw == 0 || sw <= bw;
        let fits_height = bh == 0 || sh <= bh;
        if fits_width && fits_height {
            return *self;
        }

        // bw / sw <= bh / sh  <=>  bw * sh <= bh * sw
        let width_bound = bh == 0 || (bw != 0 && bw * sh <= bh * sw);
        if width_bound {
            Self::new(bw as u32, (sh * bw / sw) as u32)
        } else {
            Self::new((sw * bh / sh) as u32, bh as u32)
        }
    }

    /// Rounds both axes down to the encoder's alignment (even pixel counts).
    pub fn to_encode_safe(&self) -> Self {
        Self::new(self.width & !1, self.height & !1)
    }

    /// True when both axes already satisfy the encoder's alignment.
    pub fn is_encode_safe(&self) -> bool {
        self.width % 2 == 0 && self.height % 2 == 0
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
