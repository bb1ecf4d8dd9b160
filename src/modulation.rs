// src/modulation.rs

/// A read-only view of an input port.
///
/// This is intentionally lightweight:
/// - no ownership
/// - no allocation
/// - no dynamic dispatch
#[derive(Copy, Clone, Debug)]
pub enum ModSignal<'a> {
    /// Fixed value (unpatched port, constant offset)
    Constant(f32),

    /// One value per sample (audio-rate)
    Audio(&'a [f32]),
}

impl<'a> ModSignal<'a> {
    /// Input as seen by an unpatched jack.
    pub const UNPATCHED: ModSignal<'static> = ModSignal::Constant(0.0);

    /// Value at `frame`.
    ///
    /// Reading past the end of an audio buffer holds the last sample,
    /// and an empty buffer reads as 0 V.
    #[inline]
    pub fn value_audio(&self, frame: usize) -> f32 {
        match *self {
            ModSignal::Constant(v) => v,
            ModSignal::Audio(buf) => match buf.get(frame) {
                Some(&v) => v,
                None => buf.last().copied().unwrap_or(0.0),
            },
        }
    }
}

impl Default for ModSignal<'_> {
    fn default() -> Self {
        ModSignal::Constant(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_reads_same_everywhere() {
        let sig = ModSignal::Constant(1.5);
        assert_eq!(sig.value_audio(0), 1.5);
        assert_eq!(sig.value_audio(999), 1.5);
    }

    #[test]
    fn test_audio_reads_per_frame_and_holds_last() {
        let buf = [0.0, 0.5, -1.0];
        let sig = ModSignal::Audio(&buf);
        assert_eq!(sig.value_audio(1), 0.5);
        assert_eq!(sig.value_audio(7), -1.0);
        assert_eq!(ModSignal::Audio(&[]).value_audio(0), 0.0);
    }

    #[test]
    fn test_unpatched_is_zero_volts() {
        assert_eq!(ModSignal::UNPATCHED.value_audio(3), 0.0);
        assert_eq!(ModSignal::default().value_audio(3), 0.0);
    }
}
