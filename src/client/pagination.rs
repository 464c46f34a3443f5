//! Pagination cursor codec
//!
//! The SendGrid API walks collections two incompatible ways: `limit`/`offset`
//! query parameters for most list endpoints, and an opaque `after_subuser_id`
//! handed back in response metadata for the per-teammate subuser access
//! endpoint. Both are folded into a single string continuation token; each
//! list operation declares which [`CursorStyle`] its token uses.

use serde::Serialize;

use crate::error::{Error, Result};

/// Rows requested per page. Upstream documents 500 as the maximum.
pub const PAGE_SIZE: usize = 500;

/// Which pagination scheme a list operation speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    /// Non-negative row offset
    Offset,
    /// Numeric subuser ID supplied by the previous response
    AfterId,
}

/// Decoded position within a paginated walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Offset(u64),
    AfterId(u64),
    /// No position: the start of an after-id walk, or an exhausted walk.
    None,
}

impl Cursor {
    /// Decode a continuation token for the given style.
    ///
    /// An empty token means "start of collection": offset zero for offset
    /// walks, no `after_subuser_id` for after-id walks.
    pub fn decode(style: CursorStyle, token: &str) -> Result<Self> {
        if token.is_empty() {
            return Ok(match style {
                CursorStyle::Offset => Cursor::Offset(0),
                CursorStyle::AfterId => Cursor::None,
            });
        }

        let value = token
            .parse::<u64>()
            .map_err(|_| Error::InvalidCursor(token.to_string()))?;

        Ok(match style {
            CursorStyle::Offset => Cursor::Offset(value),
            CursorStyle::AfterId => Cursor::AfterId(value),
        })
    }

    /// Encode as a continuation token; `None` encodes as the empty string.
    pub fn encode(&self) -> String {
        match self {
            Cursor::Offset(offset) => offset.to_string(),
            Cursor::AfterId(id) => id.to_string(),
            Cursor::None => String::new(),
        }
    }

    /// Cursor following a page of `fetched` rows read at `offset`.
    ///
    /// A short (or empty) page means the collection is exhausted. An offset
    /// that cannot advance without overflowing is an invalid cursor.
    pub fn next_offset(offset: u64, fetched: usize) -> Result<Self> {
        if fetched < PAGE_SIZE {
            return Ok(Cursor::None);
        }
        advance(offset, fetched)
    }

    /// Cursor following a page read at `offset` when only "full or not" is known.
    pub fn next_page(offset: u64, fetched: usize) -> Result<Self> {
        if fetched < PAGE_SIZE {
            return Ok(Cursor::None);
        }
        advance(offset, PAGE_SIZE)
    }

    /// Cursor from an upstream "next id" field; absent or zero means exhausted.
    pub fn after_id(next: Option<u64>) -> Self {
        match next {
            Some(id) if id != 0 => Cursor::AfterId(id),
            _ => Cursor::None,
        }
    }

    pub fn offset(&self) -> Option<u64> {
        match self {
            Cursor::Offset(offset) => Some(*offset),
            _ => None,
        }
    }

    pub fn after(&self) -> Option<u64> {
        match self {
            Cursor::AfterId(id) => Some(*id),
            _ => None,
        }
    }
}

fn advance(offset: u64, by: usize) -> Result<Cursor> {
    offset
        .checked_add(by as u64)
        .map(Cursor::Offset)
        .ok_or_else(|| Error::InvalidCursor(offset.to_string()))
}

/// One page of results plus the token for the next one.
///
/// An exhausted walk is always represented as no items and an empty token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: String,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next: Cursor) -> Self {
        // An empty page never points anywhere
        let next_token = if items.is_empty() {
            String::new()
        } else {
            next.encode()
        };
        Self { items, next_token }
    }

    /// A single page that completes the walk.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: String::new(),
        }
    }

    pub fn empty() -> Self {
        Self::last(Vec::new())
    }

    /// Page read at `offset`, advancing by the number of rows fetched.
    pub fn from_offset(items: Vec<T>, offset: u64) -> Result<Self> {
        let next = Cursor::next_offset(offset, items.len())?;
        Ok(Self::new(items, next))
    }

    pub fn is_last(&self) -> bool {
        self.next_token.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_token: self.next_token,
        }
    }
}
