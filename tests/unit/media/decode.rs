use super::*;

/// Hands out at most `step` bytes per read.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn read_full_gathers_short_reads() {
    let data: Vec<u8> = (0..10).collect();
    let mut r = Trickle {
        data: &data,
        step: 3,
    };
    let mut buf = [0u8; 6];
    assert_eq!(read_full(&mut r, &mut buf).unwrap(), 6);
    assert_eq!(buf, [0, 1, 2, 3, 4, 5]);

    let mut rest = [0u8; 6];
    assert_eq!(read_full(&mut r, &mut rest).unwrap(), 4);
    assert_eq!(&rest[..4], &[6, 7, 8, 9]);

    assert_eq!(read_full(&mut r, &mut rest).unwrap(), 0);
}
