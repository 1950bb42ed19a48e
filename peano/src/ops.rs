use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::{Error, Natural};

impl Natural {
    pub fn increment(self) -> Natural {
        Natural::successor(self)
    }
    pub fn increment_in_place(&mut self) {
        let n = std::mem::take(self);
        *self = n.increment();
    }
    /// Saturates at zero.
    pub fn decrement(self) -> Natural {
        self.into_predecessor().unwrap_or_default()
    }

    /// Truncating subtraction: yields zero whenever `rhs` exceeds `self`.
    pub fn subtract(self, rhs: &Natural) -> Natural {
        let mut minuend = self;
        for _ in rhs.chain().skip(1) {
            match minuend.into_predecessor() {
                Some(p) => minuend = p,
                None => return Natural::Zero,
            }
        }
        minuend
    }

    /// `rhs` added to itself `self` times.
    ///
    /// This is true multiplication, so `2 * 2 == 4`. A bare recursion on both
    /// predecessors at once would always bottom out at zero instead.
    pub fn multiply(self, rhs: &Natural) -> Natural {
        if rhs.is_zero() {
            return Natural::Zero;
        }
        let mut count = self;
        let mut product = Natural::Zero;
        while let Some(p) = count.into_predecessor() {
            product = rhs.clone() + product;
            count = p;
        }
        product
    }

    pub fn compare(&self, other: &Natural) -> Ordering {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Natural::Zero, Natural::Zero) => return Ordering::Equal,
                (Natural::Zero, Natural::Successor(_)) => return Ordering::Less,
                (Natural::Successor(_), Natural::Zero) => return Ordering::Greater,
                (Natural::Successor(x), Natural::Successor(y)) => {
                    a = x;
                    b = y;
                }
            }
        }
    }

    /// Floor division by repeated subtraction.
    ///
    /// A zero divisor is always an error, including `0 / 0`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub fn divide(self, rhs: &Natural) -> Result<Natural, Error> {
        if rhs.is_zero() {
            #[cfg(feature = "tracing")]
            debug!("Rejected division of {} by zero", self.to_u64());
            return Err(Error::division_by_zero(self));
        }
        let mut remainder = self;
        let mut quotient = Natural::Zero;
        while remainder.compare(rhs) != Ordering::Less {
            remainder = remainder.subtract(rhs);
            quotient = quotient.increment();
        }
        #[cfg(feature = "tracing")]
        trace!("Quotient: {}", quotient.to_u64());
        Ok(quotient)
    }
}

impl Add for Natural {
    type Output = Natural;

    /// Moves one unit at a time from `self` onto `rhs` until `self` runs out.
    fn add(self, rhs: Natural) -> Natural {
        let (mut a, mut b) = (self, rhs);
        loop {
            if a.is_zero() {
                return b;
            }
            if b.is_zero() {
                return a;
            }
            a = a.decrement();
            b = b.increment();
        }
    }
}
impl<'a> Add<&'a Natural> for &'a Natural {
    type Output = Natural;

    fn add(self, rhs: &'a Natural) -> Natural {
        self.clone() + rhs.clone()
    }
}
impl AddAssign for Natural {
    fn add_assign(&mut self, rhs: Natural) {
        *self = std::mem::take(self) + rhs;
    }
}

impl Sub for Natural {
    type Output = Natural;

    fn sub(self, rhs: Natural) -> Natural {
        self.subtract(&rhs)
    }
}
impl<'a> Sub<&'a Natural> for &'a Natural {
    type Output = Natural;

    fn sub(self, rhs: &'a Natural) -> Natural {
        self.clone().subtract(rhs)
    }
}
impl SubAssign for Natural {
    fn sub_assign(&mut self, rhs: Natural) {
        *self = std::mem::take(self).subtract(&rhs);
    }
}

impl Mul for Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        self.multiply(&rhs)
    }
}
impl<'a> Mul<&'a Natural> for &'a Natural {
    type Output = Natural;

    fn mul(self, rhs: &'a Natural) -> Natural {
        self.clone().multiply(rhs)
    }
}
impl MulAssign for Natural {
    fn mul_assign(&mut self, rhs: Natural) {
        *self = std::mem::take(self).multiply(&rhs);
    }
}

impl Div for Natural {
    type Output = Result<Natural, Error>;

    fn div(self, rhs: Natural) -> Result<Natural, Error> {
        self.divide(&rhs)
    }
}
impl<'a> Div<&'a Natural> for &'a Natural {
    type Output = Result<Natural, Error>;

    fn div(self, rhs: &'a Natural) -> Result<Natural, Error> {
        self.clone().divide(rhs)
    }
}

impl Sum for Natural {
    fn sum<I: Iterator<Item = Natural>>(iter: I) -> Natural {
        iter.fold(Natural::Zero, |acc, n| acc + n)
    }
}
impl Product for Natural {
    fn product<I: Iterator<Item = Natural>>(iter: I) -> Natural {
        iter.fold(Natural::one(), |acc, n| acc.multiply(&n))
    }
}
