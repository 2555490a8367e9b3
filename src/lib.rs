//! Small fixed-size vectors and matrices with shader-style swizzling.
//!
//! ```
//! use swizzle_math::{Vec3, Vec4};
//!
//! let mut color = Vec4::new(0.2, 0.4, 0.6, 1.0);
//! let bgr: Vec3 = color.bgr().read();
//! color.set_rgb(bgr * 0.5);
//! assert!(color.equals(Vec4::new(0.3, 0.2, 0.1, 1.0)));
//! ```

pub mod config;
pub mod error;
pub mod euler;
pub mod matrix;
pub mod num;
pub mod swizzle;
pub mod vector;

pub use config::Config;
pub use error::{Error, Result};
pub use euler::EulerAngles;
pub use matrix::{Mat2, Mat2x3, Mat2x4, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x2, Mat4x3, Matrix};
pub use num::{Float, Num, DEFAULT_ULPS};
pub use swizzle::{Components, Swizzle, SwizzleMut};
pub use vector::{Vec2, Vec3, Vec4, Vector};
