/// A 4x4 transformation matrix stored in row-major order.
///
/// Wheels only ever translate, but the matrix form lets a backend hand the
/// value straight to a renderer that composes parent→child transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix data in row-major order: [row0, row1, row2, row3]
    pub data: [f32; 16],
}

impl Transform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, 0.0, // row 1
            0.0, 0.0, 1.0, 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ],
    };

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, x, // row 0
                0.0, 1.0, 0.0, y, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Vertical-only translation, the displacement applied to a wheel
    pub fn translate_y(y: f32) -> Self {
        Self::translate(0.0, y)
    }

    /// Translation component (tx, ty)
    pub fn translation(&self) -> (f32, f32) {
        (self.data[3], self.data[7])
    }
}
