//! Lazy Cartesian product over per-position synonym candidates.

/// Iterator over every synonym substitution of a window.
///
/// Variants are produced on demand in lexicographic order of candidate
/// indices, the last position varying fastest, so callers can stop at the
/// first variant that matches without materialising the full product. The
/// product can grow exponentially with the window size; no cap is applied.
#[derive(Clone, Debug)]
pub struct SynonymVariants<'a> {
    positions: Vec<&'a [String]>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> SynonymVariants<'a> {
    /// Create a generator over the given per-position candidates.
    pub fn new(positions: Vec<&'a [String]>) -> Self {
        let exhausted = positions.iter().any(|candidates| candidates.is_empty());
        let indices = vec![0; positions.len()];

        SynonymVariants {
            positions,
            indices,
            exhausted,
        }
    }

    // Odometer increment; returns false once every combination was visited.
    fn advance(&mut self) -> bool {
        for slot in (0..self.indices.len()).rev() {
            self.indices[slot] += 1;
            if self.indices[slot] < self.positions[slot].len() {
                return true;
            }
            self.indices[slot] = 0;
        }
        false
    }
}

impl<'a> Iterator for SynonymVariants<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let variant = self
            .positions
            .iter()
            .zip(&self.indices)
            .map(|(candidates, &index)| candidates[index].as_str())
            .collect();

        if !self.advance() {
            self.exhausted = true;
        }

        Some(variant)
    }
}
