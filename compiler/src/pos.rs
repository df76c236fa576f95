#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BytePos(pub usize);

impl BytePos {
    pub fn shift(self, n: usize) -> Self {
        BytePos(self.0 + n)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenMetadata {
    pub start_inclusive: BytePos,
    pub end_inclusive: BytePos,
    pub line: usize,
}

impl TokenMetadata {
    /// Number of bytes covered, both ends included.
    pub fn len(&self) -> usize {
        self.end_inclusive.0 + 1 - self.start_inclusive.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithTokenMetadata<T> {
    pub value: T,
    pub pos: TokenMetadata,
}

impl<T> WithTokenMetadata<T> {
    pub fn new(
        value: T,
        start_inclusive: BytePos,
        end_inclusive: BytePos,
        line: usize,
    ) -> WithTokenMetadata<T> {
        WithTokenMetadata {
            value,
            pos: TokenMetadata {
                start_inclusive,
                end_inclusive,
                line,
            },
        }
    }
}
