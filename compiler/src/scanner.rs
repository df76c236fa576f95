use crate::pos::BytePos;

/// Packs two bytes into the `u16` that [`Scanner::peek_pair`] yields for them.
pub const fn pair(s: &[u8; 2]) -> u16 {
    u16::from_le_bytes(*s)
}

pub struct Scanner<'a> {
    pub pos: BytePos,
    line: usize,
    buf: &'a [u8],
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Scanner<'a> {
        Scanner {
            pos: BytePos::default(),
            line: 1,
            buf,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_at_end(&self) -> bool {
        self.pos.0 >= self.buf.len()
    }

    pub fn next(&mut self) -> Option<u8> {
        let next = self.peek();
        if let Some(b) = next {
            self.pos = self.pos.shift(1);
            if b == b'\n' {
                self.line += 1;
            }
        }

        next
    }

    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos.0).copied()
    }

    /// The next two bytes as one integer, if two remain.
    pub fn peek_pair(&self) -> Option<u16> {
        match self.buf.get(self.pos.0..self.pos.0 + 2) {
            Some(&[a, b]) => Some(u16::from_le_bytes([a, b])),
            _ => None,
        }
    }

    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.next();
        }
    }

    pub fn consume_while<F>(&mut self, f: F) -> &'a [u8]
    where
        F: Fn(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if f(b) {
                self.next();
            } else {
                break;
            }
        }

        self.slice(start, self.pos)
    }

    pub fn slice(&self, start: BytePos, end: BytePos) -> &'a [u8] {
        &self.buf[start.0..end.0]
    }

    #[cfg(test)]
    fn assert_next(&mut self, pos: usize, b: Option<u8>) {
        assert_eq!(self.pos.0, pos);
        assert_eq!(self.peek(), b);
        assert_eq!(self.next(), b);
    }
}
