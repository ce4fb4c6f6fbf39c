use std::ops::{Index, IndexMut, Not};

/// The boolean operation to apply to the subject and clip polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipOp {
    Union,
    Intersect,
    Subtract,
    Xor,
}

impl ClipOp {
    /// Combines "inside clip" and "inside subject" into "inside result".
    ///
    /// This is the only place where the four operations differ in the
    /// quadrant logic; subtract shares intersect's combinator because the
    /// clip operand's parity is inverted when the sweep starts.
    ///
    /// | op                   | combinator          |
    /// |----------------------|---------------------|
    /// | intersect, subtract  | `clip && subject`   |
    /// | xor                  | `clip != subject`   |
    /// | union                | `clip \|\| subject` |
    #[must_use]
    pub fn combine(self, in_clip: bool, in_subject: bool) -> bool {
        match self {
            ClipOp::Intersect | ClipOp::Subtract => in_clip && in_subject,
            ClipOp::Xor => in_clip != in_subject,
            ClipOp::Union => in_clip || in_subject,
        }
    }
}

/// Which input polygon an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Clip,
    Subject,
}

impl Operand {
    /// Both operands, clip first.
    pub const ALL: [Operand; 2] = [Operand::Clip, Operand::Subject];

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Operand::Clip => Operand::Subject,
            Operand::Subject => Operand::Clip,
        }
    }
}

/// A value tracked separately for the clip and subject operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerOperand<T> {
    pub clip: T,
    pub subject: T,
}

impl<T> PerOperand<T> {
    #[must_use]
    pub fn new(clip: T, subject: T) -> Self {
        Self { clip, subject }
    }

    /// Applies `f` to both values.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerOperand<U> {
        PerOperand {
            clip: f(self.clip),
            subject: f(self.subject),
        }
    }

    /// Combines matching values of `self` and `other` with `f`.
    #[must_use]
    pub fn zip_with<U, V>(self, other: PerOperand<U>, mut f: impl FnMut(T, U) -> V) -> PerOperand<V> {
        PerOperand {
            clip: f(self.clip, other.clip),
            subject: f(self.subject, other.subject),
        }
    }
}

impl PerOperand<bool> {
    /// Returns `true` if the flag is set for either operand.
    #[must_use]
    pub fn any(self) -> bool {
        self.clip || self.subject
    }
}

impl std::ops::BitXor for PerOperand<bool> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a != b)
    }
}

impl Not for PerOperand<bool> {
    type Output = Self;

    fn not(self) -> Self {
        self.map(|v| !v)
    }
}

impl<T> Index<Operand> for PerOperand<T> {
    type Output = T;

    fn index(&self, operand: Operand) -> &T {
        match operand {
            Operand::Clip => &self.clip,
            Operand::Subject => &self.subject,
        }
    }
}

impl<T> IndexMut<Operand> for PerOperand<T> {
    fn index_mut(&mut self, operand: Operand) -> &mut T {
        match operand {
            Operand::Clip => &mut self.clip,
            Operand::Subject => &mut self.subject,
        }
    }
}
