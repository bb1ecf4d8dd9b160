// src/audio_buffer.rs

/// Borrowed planar sample storage: all of channel 0, then channel 1, ...
#[derive(Debug)]
pub struct AudioBuffer<'a> {
    pub channels: usize,
    pub frames: usize,
    pub data: &'a mut [f32],
}

impl<'a> AudioBuffer<'a> {
    /// Wrap existing data. Trailing samples that do not fill a whole
    /// frame are ignored.
    #[inline]
    pub fn new(data: &'a mut [f32], channels: usize) -> Self {
        let channels = channels.max(1);
        let frames = data.len() / channels;
        Self {
            channels,
            frames,
            data,
        }
    }

    /// Single-channel view over `data`.
    #[inline]
    pub fn mono(data: &'a mut [f32]) -> Self {
        Self::new(data, 1)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    #[inline]
    pub fn channel(&self, ch: usize) -> &[f32] {
        let start = ch * self.frames;
        &self.data[start..start + self.frames]
    }

    #[inline]
    pub fn channel_mut(&mut self, ch: usize) -> &mut [f32] {
        let start = ch * self.frames;
        &mut self.data[start..start + self.frames]
    }
}

/// Whether two sample regions share any memory. Empty regions never do.
///
/// Hosts handing over raw pointers may pass the same memory for input and
/// output; borrowing both as slices at once is only sound when this is false.
pub fn regions_overlap(a: *const f32, a_len: usize, b: *const f32, b_len: usize) -> bool {
    let size = std::mem::size_of::<f32>();
    let (a_start, b_start) = (a.addr(), b.addr());
    let a_end = a_start.saturating_add(a_len.saturating_mul(size));
    let b_end = b_start.saturating_add(b_len.saturating_mul(size));
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_layout() {
        let mut data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let mut buf = AudioBuffer::new(&mut data, 2);
        assert_eq!(buf.frames, 3);
        assert_eq!(buf.channel(1), &[4.0, 5.0, 6.0]);
        buf.channel_mut(0)[0] = 9.0;
        assert_eq!(buf.channel(0), &[9.0, 2.0, 3.0]);
        buf.clear();
        assert!(data.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_regions_overlap() {
        let data = [0.0_f32; 8];
        let base = data.as_ptr();
        let mid = data[4..].as_ptr();

        // in-place processing: same buffer for input and output
        assert!(regions_overlap(base, 8, base, 8));
        assert!(regions_overlap(base, 5, mid, 4));
        assert!(regions_overlap(mid, 4, base, 5));

        assert!(!regions_overlap(base, 4, mid, 4));
        assert!(!regions_overlap(mid, 4, base, 4));
        assert!(!regions_overlap(base, 0, base, 8));
    }
}
