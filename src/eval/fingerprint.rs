use xxhash_rust::xxh3::Xxh3;

use crate::eval::evaluator::{ElementState, FrameState};

const XXH3_SEED: u64 = 0x5a7e_11ee_0c0f_fee5;

/// Stable 128-bit digest of a frame's visual state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Digest every element id and value of `state`, bit for bit.
///
/// The frame index is not part of the digest, so two frames that look identical share a
/// fingerprint.
pub fn fingerprint_frame(state: &FrameState) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u64(state.elements.len() as u64);
    for el in &state.elements {
        write_element(&mut h, el);
    }
    h.finish()
}

fn write_element(h: &mut StableHasher, el: &ElementState) {
    h.write_str(&el.id);
    h.write_u64(el.index as u64);

    let s = &el.state;
    h.write_f64(s.progress);
    h.write_f64(s.opacity);
    h.write_f64(s.scale);
    h.write_f64(s.translate.x);
    h.write_f64(s.translate.y);
    h.write_f64(s.rotation_deg);
    h.write_f64(s.extent);
    h.write_f64(s.extent_offset);
    match s.color {
        Some(c) => {
            h.write_u8(1);
            h.write_bytes(&[c.r, c.g, c.b, c.a]);
        }
        None => h.write_u8(0),
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
