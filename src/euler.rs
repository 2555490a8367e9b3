use crate::matrix::Matrix;
use crate::num::{Float, Num};
use crate::vector::Vector;

/// Rotation given as pitch, yaw and roll: the angles about the x, y and z axes, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles<T>(T, T, T);

impl<T: Copy> EulerAngles<T> {
    pub const fn new(pitch: T, yaw: T, roll: T) -> Self {
        EulerAngles(pitch, yaw, roll)
    }

    #[inline]
    pub fn pitch(&self) -> T {
        self.0
    }

    #[inline]
    pub fn yaw(&self) -> T {
        self.1
    }

    #[inline]
    pub fn roll(&self) -> T {
        self.2
    }

    pub fn set_pitch(&mut self, pitch: T) {
        self.0 = pitch;
    }

    pub fn set_yaw(&mut self, yaw: T) {
        self.1 = yaw;
    }

    pub fn set_roll(&mut self, roll: T) {
        self.2 = roll;
    }
}

impl<T: Float> EulerAngles<T> {
    pub fn from_degrees(pitch: T, yaw: T, roll: T) -> Self {
        EulerAngles(pitch.to_radians(), yaw.to_radians(), roll.to_radians())
    }

    /// Homogeneous rotation applying roll first, then yaw, then pitch.
    pub fn to_rotation(self) -> Matrix<T, 4, 4> {
        Matrix::rotation_x(self.0) * Matrix::rotation_y(self.1) * Matrix::rotation_z(self.2)
    }
}

impl<T: Num> EulerAngles<T> {
    pub fn equals(&self, other: &Self) -> bool {
        Vector::from(*self).equals(Vector::from(*other))
    }
}

impl<T> From<Vector<T, 3>> for EulerAngles<T> {
    fn from(Vector([pitch, yaw, roll]): Vector<T, 3>) -> Self {
        EulerAngles(pitch, yaw, roll)
    }
}

impl<T> From<EulerAngles<T>> for Vector<T, 3> {
    fn from(EulerAngles(pitch, yaw, roll): EulerAngles<T>) -> Self {
        Vector([pitch, yaw, roll])
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn accessors_name_the_axes() {
        let mut angles = EulerAngles::new(0.1, 0.2, 0.3);
        assert_eq!((angles.pitch(), angles.yaw(), angles.roll()), (0.1, 0.2, 0.3));
        angles.set_yaw(-1.0);
        angles.set_roll(2.0);
        angles.set_pitch(0.5);
        assert_eq!(Vector::from(angles), Vector::<f64, 3>::new(0.5, -1.0, 2.0));
        assert_eq!(EulerAngles::from(Vector::<f64, 3>::new(0.5, -1.0, 2.0)), angles);
    }

    #[test]
    fn degrees_convert_to_radians() {
        let angles = EulerAngles::from_degrees(180.0, 90.0, 0.0);
        assert!(angles.equals(&EulerAngles::new(PI, FRAC_PI_2, 0.0)));
    }

    #[test]
    fn rotation_composes_axes_in_order() {
        let angles = EulerAngles::new(0.4, -1.1, 2.5);
        let expected = Matrix::rotation_x(0.4) * Matrix::rotation_y(-1.1) * Matrix::rotation_z(2.5);
        assert_eq!(angles.to_rotation(), expected);
    }

    #[test]
    fn single_axis_rotation() {
        let rotation = EulerAngles::new(0.0, 0.0, FRAC_PI_2).to_rotation();
        let v = rotation * Vector::<f64, 4>::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(v.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y(), 1.0);
        assert_relative_eq!(v.z(), 0.0);
    }
}
