use crate::models::errors::RangeError;

/// Inclusive block bounds for a single `eth_getLogs` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWindow {
    pub from: u64,
    pub to: u64,
}

/// Splits `[from, end]` into consecutive windows of at most `batch_size` blocks.
///
/// Windows never overlap and the last one ends at `end`, so a range that is an
/// exact multiple of `batch_size` gets a trailing single-block `[end, end]` window.
/// An empty range (`from == end`) yields no windows.
#[derive(Debug, Clone)]
pub struct BlockWindows {
    cursor: u64,
    end: u64,
    batch_size: u64,
    exhausted: bool,
}

impl BlockWindows {
    pub fn new(from: u64, end: u64, batch_size: u64) -> Result<Self, RangeError> {
        if batch_size == 0 {
            return Err(RangeError::ZeroBatchSize);
        }
        if from > end {
            return Err(RangeError::InvalidRange { from, end });
        }

        Ok(Self {
            cursor: from,
            end,
            batch_size,
            exhausted: from == end,
        })
    }

    /// Blocks between the next window's start and the end of the scan.
    pub fn blocks_left(&self) -> u64 {
        if self.exhausted { 0 } else { self.end - self.cursor }
    }
}

impl Iterator for BlockWindows {
    type Item = BlockWindow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let to = self
            .cursor
            .saturating_add(self.batch_size - 1)
            .min(self.end);
        let window = BlockWindow {
            from: self.cursor,
            to,
        };

        if to == self.end {
            self.exhausted = true;
        } else {
            self.cursor = to + 1;
        }

        Some(window)
    }
}
