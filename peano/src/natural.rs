use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A natural number in unary form: either zero or one more than another natural.
///
/// Values are never mutated through the public operations; every operation hands
/// back a new chain. `Clone`, `Drop`, equality, hashing and `Debug` all walk the
/// chain with a loop, so deep values never exhaust the stack.
pub enum Natural {
    Zero,
    Successor(Box<Natural>),
}
impl Natural {
    pub fn zero() -> Self {
        Natural::Zero
    }
    pub fn one() -> Self {
        Natural::successor(Natural::Zero)
    }
    pub fn successor(predecessor: Natural) -> Self {
        Natural::Successor(Box::new(predecessor))
    }
    pub fn is_zero(&self) -> bool {
        matches!(self, Natural::Zero)
    }
    /// The natural one less than this one, or `None` for zero.
    pub fn predecessor(&self) -> Option<&Natural> {
        match self {
            Natural::Zero => None,
            Natural::Successor(p) => Some(&**p),
        }
    }
    /// Consumes the value and returns its predecessor, or `None` for zero.
    pub fn into_predecessor(mut self) -> Option<Natural> {
        match &mut self {
            Natural::Zero => None,
            Natural::Successor(p) => Some(std::mem::take(&mut **p)),
        }
    }
    /// Number of `Successor` links, saturating at `u64::MAX`.
    pub fn to_u64(&self) -> u64 {
        self.chain().skip(1).fold(0u64, |n, _| n.saturating_add(1))
    }
    /// Structural equality against a value of any type. Anything that is not a
    /// `Natural` compares unequal.
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Natural>()
            .map_or(false, |other| self == other)
    }
    // self, then each predecessor down to and including zero
    pub(crate) fn chain(&self) -> impl Iterator<Item = &Natural> {
        std::iter::successors(Some(self), |n| n.predecessor())
    }
}

impl Default for Natural {
    fn default() -> Self {
        Natural::Zero
    }
}

impl Drop for Natural {
    fn drop(&mut self) {
        let mut link = match self {
            Natural::Zero => return,
            Natural::Successor(p) => std::mem::take(&mut **p),
        };
        // each replaced link holds only a boxed zero by the time it is dropped
        while let Natural::Successor(p) = &mut link {
            let next = std::mem::take(&mut **p);
            link = next;
        }
    }
}

impl Clone for Natural {
    fn clone(&self) -> Self {
        self.chain()
            .skip(1)
            .fold(Natural::Zero, |acc, _| Natural::successor(acc))
    }
}

impl PartialEq for Natural {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Natural::Zero, Natural::Zero) => return true,
                (Natural::Successor(x), Natural::Successor(y)) => {
                    a = x;
                    b = y;
                }
                _ => return false,
            }
        }
    }
}
impl Eq for Natural {}
impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Natural {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.compare(other)
    }
}

impl Hash for Natural {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_u64().hash(state)
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.to_u64();
        for _ in 0..depth {
            f.write_str("Successor(")?;
        }
        f.write_str("Zero")?;
        for _ in 0..depth {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl From<u64> for Natural {
    fn from(n: u64) -> Self {
        (0..n).fold(Natural::Zero, |acc, _| Natural::successor(acc))
    }
}

impl From<&Natural> for u64 {
    fn from(n: &Natural) -> Self {
        n.to_u64()
    }
}
