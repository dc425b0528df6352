use crate::math::element::Element;
use crate::math::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// True when `f` holds for every element. Stops at the first failure.
    pub fn all<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice().iter().all(|v| f(v))
    }

    /// True when `f` holds for at least one element. Stops at the first success.
    pub fn any<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice().iter().any(|v| f(v))
    }
}

pub fn positive<T: Element>(value: &T) -> bool {
    *value > T::zero()
}

pub fn negative<T: Element>(value: &T) -> bool {
    *value < T::zero()
}

pub fn non_negative<T: Element>(value: &T) -> bool {
    *value >= T::zero()
}

pub fn non_positive<T: Element>(value: &T) -> bool {
    *value <= T::zero()
}
