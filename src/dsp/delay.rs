/// Circular delay line.
///
/// Capacity is fixed at construction so reads and writes never allocate.
/// Reads may land between samples; those are linearly interpolated.
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    pub fn with_capacity(samples: usize) -> Self {
        Self {
            buffer: vec![0.0; samples.max(2)],
            write_pos: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Sample written `delay` samples ago. `delay` is clamped to `1..capacity`.
    pub fn read(&self, delay: f32) -> f32 {
        let len = self.buffer.len();
        let delay = delay.clamp(1.0, (len - 1) as f32);
        let whole = delay.floor() as usize;
        let frac = delay - whole as f32;

        let newer = self.buffer[(self.write_pos + len - whole) % len];
        let older = self.buffer[(self.write_pos + len - whole - 1) % len];
        newer + (older - newer) * frac
    }

    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}
