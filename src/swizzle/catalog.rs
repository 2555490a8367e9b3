//! The generated set of named component accessors.
//!
//! Every `Vector<T, D>` exposes, for each alias group and each ordered tuple of one to four
//! indices below `D` (repetition allowed), an accessor spelled with that group's letters:
//! `x()`/`x_mut()`/`set_x()` for single components, and `zyx()`/`zyx_mut()`/`set_zyx()` returning
//! [`Swizzle`](super::Swizzle) and [`SwizzleMut`](super::SwizzleMut) views otherwise. A name never
//! mixes groups: `xg` does not exist.
//!
//! The accessors of arity 2 to 4 are listed in `Vector::<T, D>::SWIZZLES`.

use crate::num::Num;
use crate::vector::Vector;

/// One of the three naming schemes for vector components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AliasGroup {
    /// `x y z w`
    Position,
    /// `r g b a`
    Color,
    /// `s t p q`
    Texture,
}

impl AliasGroup {
    pub const ALL: [AliasGroup; 3] = [AliasGroup::Position, AliasGroup::Color, AliasGroup::Texture];

    /// Letters naming components 0 to 3.
    pub const fn letters(self) -> [char; 4] {
        match self {
            AliasGroup::Position => ['x', 'y', 'z', 'w'],
            AliasGroup::Color => ['r', 'g', 'b', 'a'],
            AliasGroup::Texture => ['s', 't', 'p', 'q'],
        }
    }

    pub fn index_of(self, letter: char) -> Option<usize> {
        self.letters().iter().position(|&l| l == letter)
    }

    /// The group whose letters spell all of `name`, if there is one.
    pub fn of(name: &str) -> Option<AliasGroup> {
        let first = name.chars().next()?;
        let group = Self::ALL.into_iter().find(|g| g.index_of(first).is_some())?;
        name.chars()
            .all(|c| group.index_of(c).is_some())
            .then_some(group)
    }
}

/// Description of one generated swizzle accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accessor {
    pub name: &'static str,
    pub group: AliasGroup,
    pub indices: &'static [usize],
}

impl Accessor {
    pub fn arity(&self) -> usize {
        self.indices.len()
    }
}

impl<T: Num> Vector<T, 2> {
    macros::swizzles!(2);
}

impl<T: Num> Vector<T, 3> {
    macros::swizzles!(3);
}

impl<T: Num> Vector<T, 4> {
    macros::swizzles!(4);
}
