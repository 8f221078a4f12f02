/// Real number held on the stack
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Wrap a float, turning it into an integer if it has no fractional part.
    pub fn normalized(f: f64) -> Self {
        // i128::MAX as f64 rounds up to 2^127, so the upper bound is exclusive
        if f.is_finite() && f.fract() == 0.0 && f >= i128::MIN as f64 && f < i128::MAX as f64 {
            Number::Int(f as i128)
        } else {
            Number::Float(f)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    fn int_op(
        self,
        other: Number,
        checked: impl Fn(i128, i128) -> Option<i128>,
        float: impl Fn(f64, f64) -> f64,
    ) -> Number {
        use Number::*;
        match (self, other) {
            (Int(a), Int(b)) => match checked(a, b) {
                Some(c) => Int(c),
                None => Float(float(a as f64, b as f64)),
            },
            (a, b) => Float(float(a.as_f64(), b.as_f64())),
        }
    }
}

impl std::ops::Add for Number {
    type Output = Number;
    fn add(self, other: Number) -> Number {
        self.int_op(other, i128::checked_add, |a, b| a + b)
    }
}

impl std::ops::Sub for Number {
    type Output = Number;
    fn sub(self, other: Number) -> Number {
        self.int_op(other, i128::checked_sub, |a, b| a - b)
    }
}

impl std::ops::Mul for Number {
    type Output = Number;
    fn mul(self, other: Number) -> Number {
        self.int_op(other, i128::checked_mul, |a, b| a * b)
    }
}

/// True division; the quotient is always a float.
impl std::ops::Div for Number {
    type Output = Number;
    fn div(self, other: Number) -> Number {
        Number::Float(self.as_f64() / other.as_f64())
    }
}

impl std::cmp::PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        use Number::*;
        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl std::cmp::PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Int(i128::from(*other))
    }
}

impl std::cmp::PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on integral floats
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}
