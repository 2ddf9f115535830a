/// Two-operand arithmetic.
///
/// `lhs` is the deeper value and `rhs` the top, so `3;4;-` is `3 - 4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Sum,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        use Operation::*;
        match self {
            Sum => lhs + rhs,
            Subtract => lhs - rhs,
            Multiply => lhs * rhs,
            Divide => lhs / rhs,
            Power => lhs.powf(rhs),
        }
    }

    pub fn reciprocal(val: f64) -> f64 {
        1.0 / val
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_order() {
        assert_eq!(Operation::Subtract.apply(3.0, 4.0), -1.0);
        assert_eq!(Operation::Divide.apply(1.0, 4.0), 0.25);
        assert_eq!(Operation::Power.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::reciprocal(0.0), f64::INFINITY);
    }
}
