use crate::alphabet::Alphabet;
use crate::error::{PlainsightError, PsResult};
use fastrand::Rng;

/// A substitution key: a bijection over alphabet positions, stored as paired
/// forward/inverse arrays that are updated together so the bijection holds
/// by construction.
///
/// `forward[p]` is the ciphertext position a plaintext position `p` encodes
/// to; `inverse` is the reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Mapping {
    /// The identity substitution over an alphabet of `n` symbols.
    pub fn identity(n: usize) -> PsResult<Self> {
        if n < 2 {
            return Err(PlainsightError::AlphabetTooSmall(n));
        }
        let forward: Vec<usize> = (0..n).collect();
        Ok(Self {
            inverse: forward.clone(),
            forward,
        })
    }

    /// A uniformly random substitution: the ordered alphabet paired with a
    /// random permutation of itself.
    pub fn random(alphabet: &Alphabet, rng: &mut Rng) -> PsResult<Self> {
        let n = alphabet.len();
        let mut forward: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut forward);
        Self::from_forward(forward)
    }

    /// Builds a mapping from an explicit permutation of `0..n`. Rejects
    /// tables that are not bijections.
    pub fn from_forward(forward: Vec<usize>) -> PsResult<Self> {
        let n = forward.len();
        if n < 2 {
            return Err(PlainsightError::AlphabetTooSmall(n));
        }
        let mut inverse = vec![usize::MAX; n];
        for (p, &c) in forward.iter().enumerate() {
            if c >= n || inverse[c] != usize::MAX {
                return Err(PlainsightError::Config(format!(
                    "mapping table is not a permutation (slot {} -> {})",
                    p, c
                )));
            }
            inverse[c] = p;
        }
        Ok(Self { forward, inverse })
    }

    /// Builds a mapping by pairing the alphabet element-wise with a cipher
    /// alphabet string (same characters, reordered).
    pub fn from_cipher_alphabet(alphabet: &Alphabet, cipher_order: &str) -> PsResult<Self> {
        let forward = alphabet.index_text(cipher_order)?;
        if forward.len() != alphabet.len() {
            return Err(PlainsightError::Config(format!(
                "cipher alphabet has {} chars, expected {}",
                forward.len(),
                alphabet.len()
            )));
        }
        Self::from_forward(forward)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    #[inline(always)]
    pub fn encode_pos(&self, p: usize) -> usize {
        self.forward[p]
    }

    #[inline(always)]
    pub fn decode_pos(&self, c: usize) -> usize {
        self.inverse[c]
    }

    pub fn forward_table(&self) -> &[usize] {
        &self.forward
    }

    pub fn inverse_table(&self) -> &[usize] {
        &self.inverse
    }

    /// The mapping with key/value roles swapped.
    pub fn inverted(&self) -> Self {
        Self {
            forward: self.inverse.clone(),
            inverse: self.forward.clone(),
        }
    }

    /// Proposal move: picks two distinct positions uniformly at random
    /// without replacement and exchanges their mapped values. Returns a new
    /// mapping; the current one stays untouched so a rejected proposal can
    /// be discarded.
    pub fn swap_pair(&self, rng: &mut Rng) -> PsResult<Self> {
        let n = self.forward.len();
        if n < 2 {
            return Err(PlainsightError::AlphabetTooSmall(n));
        }
        let a = rng.usize(0..n);
        let mut b = rng.usize(0..n - 1);
        if b >= a {
            b += 1;
        }

        let mut next = self.clone();
        next.forward.swap(a, b);
        next.inverse[next.forward[a]] = a;
        next.inverse[next.forward[b]] = b;
        Ok(next)
    }

    /// Encodes `text`, replacing each character by its substitute. Fails on the
    /// first character outside the alphabet.
    pub fn encode(&self, alphabet: &Alphabet, text: &str) -> PsResult<String> {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            let p = alphabet.require(c)?;
            out.push(alphabet.char_at(self.forward[p]));
        }
        Ok(out)
    }

    /// Decodes `ciphertext`: encoding under the inverse table.
    pub fn decode(&self, alphabet: &Alphabet, ciphertext: &str) -> PsResult<String> {
        let mut out = String::with_capacity(ciphertext.len());
        for c in ciphertext.chars() {
            let p = alphabet.require(c)?;
            out.push(alphabet.char_at(self.inverse[p]));
        }
        Ok(out)
    }

    /// Renders the cipher alphabet this mapping produces, in alphabet order.
    pub fn cipher_alphabet(&self, alphabet: &Alphabet) -> String {
        self.forward
            .iter()
            .map(|&c| alphabet.char_at(c))
            .collect()
    }
}
