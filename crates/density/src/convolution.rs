use super::distribution::Distribution;
use adv_core::Probability;

impl Distribution {
    /// Distribution of the sum of two independent outcomes.
    ///
    /// The result has `self.len() + other.len() - 1` entries with
    /// `c[k] = Σ_{i+j=k} a[i]·b[j]`. Zero entries contribute nothing and are skipped.
    pub fn convolve(&self, other: &Self) -> Self {
        let a = self.masses();
        let b = other.masses();
        if a.is_empty() || b.is_empty() {
            return Self::from(Vec::new());
        }
        let mut c = vec![0.0 as Probability; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate().filter(|(_, x)| **x != 0.) {
            for (j, &y) in b.iter().enumerate().filter(|(_, y)| **y != 0.) {
                c[i + j] += x * y;
            }
        }
        Self::from(c)
    }
}

impl std::ops::Mul for &Distribution {
    type Output = Distribution;
    fn mul(self, rhs: Self) -> Self::Output {
        self.convolve(rhs)
    }
}

/// Folds left to right starting from the identity, so the rounding of a
/// given sequence is reproducible. An empty product is the identity.
impl std::iter::Product for Distribution {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::identity(), |ref acc, ref d| acc * d)
    }
}

impl<'a> std::iter::Product<&'a Distribution> for Distribution {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Self>,
    {
        iter.fold(Self::identity(), |ref acc, d| acc * d)
    }
}
