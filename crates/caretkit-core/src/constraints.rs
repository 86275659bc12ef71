//! Box constraints: the min/max size pair a parent hands to its child.

use kurbo::Size;

/// Size limits for a laid-out box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxConstraints {
    /// Smallest allowed size.
    pub min: Size,
    /// Largest allowed size.
    pub max: Size,
}

impl BoxConstraints {
    /// Create constraints from explicit bounds.
    pub fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Constraints that allow exactly one size.
    pub fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Keep the maximum, drop the minimum to zero.
    pub fn loosen(&self) -> Self {
        Self {
            min: Size::ZERO,
            max: self.max,
        }
    }

    /// Whether only a single size satisfies these constraints.
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    /// Clamp a size into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width.max(self.min.width)),
            size.height.clamp(self.min.height, self.max.height.max(self.min.height)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_then_loosen() {
        let c = BoxConstraints::tight(Size::new(300.0, 40.0)).loosen();
        assert_eq!(c.min, Size::ZERO);
        assert_eq!(c.max, Size::new(300.0, 40.0));
        assert!(!c.is_tight());
    }

    #[test]
    fn test_constrain() {
        let c = BoxConstraints::new(Size::new(10.0, 10.0), Size::new(100.0, 50.0));
        assert_eq!(c.constrain(Size::new(5.0, 80.0)), Size::new(10.0, 50.0));
        assert_eq!(c.constrain(Size::new(40.0, 20.0)), Size::new(40.0, 20.0));
    }
}
