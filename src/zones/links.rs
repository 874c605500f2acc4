//! Per-suit doubly-linked threads over the deal.
//!
//! Each suit gets one thread through its 13 cards in deal order, with a
//! head and a tail so it can be walked either way. Links are indices into
//! an arena rather than pointers. The view is built once per reset and is
//! read-only afterwards; move logic does not consult it.

use crate::core::card::{Card, N_SUITS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Link {
    card: Card,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Suit threads built from a deal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuitLinks {
    links: Vec<Link>,
    head: [Option<usize>; N_SUITS],
    tail: [Option<usize>; N_SUITS],
}

impl SuitLinks {
    /// Thread `cards` (in deal order) by suit.
    #[must_use]
    pub fn build(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut links = Self::default();

        for card in cards {
            let at = links.links.len();
            let suit = card.suit() as usize;
            let prev = links.tail[suit];

            links.links.push(Link { card, prev, next: None });

            match prev {
                Some(p) => links.links[p].next = Some(at),
                None => links.head[suit] = Some(at),
            }
            links.tail[suit] = Some(at);
        }

        links
    }

    /// First card of a suit in deal order.
    #[must_use]
    pub fn head(&self, suit: u8) -> Option<Card> {
        self.head[suit as usize].map(|i| self.links[i].card)
    }

    /// Last card of a suit in deal order.
    #[must_use]
    pub fn tail(&self, suit: u8) -> Option<Card> {
        self.tail[suit as usize].map(|i| self.links[i].card)
    }

    /// Walk a suit's thread from head to tail.
    #[must_use]
    pub fn iter(&self, suit: u8) -> SuitIter<'_> {
        SuitIter {
            links: self,
            at: self.head[suit as usize],
            forward: true,
        }
    }

    /// Walk a suit's thread from tail to head.
    #[must_use]
    pub fn iter_rev(&self, suit: u8) -> SuitIter<'_> {
        SuitIter {
            links: self,
            at: self.tail[suit as usize],
            forward: false,
        }
    }

    /// Total number of links (one per card threaded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Iterator over one suit's thread.
pub struct SuitIter<'a> {
    links: &'a SuitLinks,
    at: Option<usize>,
    forward: bool,
}

impl Iterator for SuitIter<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        let link = self.links.links[self.at?];
        self.at = if self.forward { link.next } else { link.prev };
        Some(link.card)
    }
}
