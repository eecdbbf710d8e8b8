use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::iter::FusedIterator;

use crate::cursor::PairCursor;
use crate::position::{ForwardPosition, IterPosition, SlicePosition};

/// 先頭と末尾の位置を取り出せる、前方向に走査可能なシーケンス。
pub trait Sequence {
    type Position: ForwardPosition;

    fn first_position(&self) -> Self::Position;

    /// 末尾の一つ先を指す位置
    fn last_position(&self) -> Self::Position;
}

impl<'a, T> Sequence for &'a [T] {
    type Position = SlicePosition<'a, T>;

    fn first_position(&self) -> SlicePosition<'a, T> {
        SlicePosition::first(*self)
    }

    fn last_position(&self) -> SlicePosition<'a, T> {
        SlicePosition::last(*self)
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Position = SlicePosition<'a, T>;

    fn first_position(&self) -> SlicePosition<'a, T> {
        SlicePosition::first(self.as_slice())
    }

    fn last_position(&self) -> SlicePosition<'a, T> {
        SlicePosition::last(self.as_slice())
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Position = SlicePosition<'a, T>;

    fn first_position(&self) -> SlicePosition<'a, T> {
        SlicePosition::first(self.as_slice())
    }

    fn last_position(&self) -> SlicePosition<'a, T> {
        SlicePosition::last(self.as_slice())
    }
}

impl<'a, T> Sequence for &'a VecDeque<T> {
    type Position = IterPosition<std::collections::vec_deque::Iter<'a, T>>;

    fn first_position(&self) -> Self::Position {
        IterPosition::first(self.iter())
    }

    fn last_position(&self) -> Self::Position {
        IterPosition::last(self.iter())
    }
}

impl<'a> Sequence for &'a str {
    type Position = IterPosition<std::str::Chars<'a>>;

    fn first_position(&self) -> Self::Position {
        IterPosition::first(self.chars())
    }

    fn last_position(&self) -> Self::Position {
        IterPosition::last(self.chars())
    }
}

impl<'a> Sequence for &'a String {
    type Position = IterPosition<std::str::Chars<'a>>;

    fn first_position(&self) -> Self::Position {
        IterPosition::first(self.chars())
    }

    fn last_position(&self) -> Self::Position {
        IterPosition::last(self.chars())
    }
}

impl<'a, T> Sequence for &'a LinkedList<T> {
    type Position = IterPosition<std::collections::linked_list::Iter<'a, T>>;

    fn first_position(&self) -> Self::Position {
        IterPosition::first(self.iter())
    }

    fn last_position(&self) -> Self::Position {
        IterPosition::last(self.iter())
    }
}

impl<'a, T> Sequence for &'a BTreeSet<T> {
    type Position = IterPosition<std::collections::btree_set::Iter<'a, T>>;

    fn first_position(&self) -> Self::Position {
        IterPosition::first(self.iter())
    }

    fn last_position(&self) -> Self::Position {
        IterPosition::last(self.iter())
    }
}

/// 任意の `Clone` なイテレータを `Sequence` として扱うラッパー。
///
/// `Sequence` が実装されていないコレクションは `Forward(c.iter())` で渡せる。
#[derive(Clone, Debug)]
pub struct Forward<I>(pub I);

impl<I: Iterator + Clone> Sequence for Forward<I> {
    type Position = IterPosition<I>;

    fn first_position(&self) -> IterPosition<I> {
        IterPosition::first(self.0.clone())
    }

    fn last_position(&self) -> IterPosition<I> {
        IterPosition::last(self.0.clone())
    }
}

/// シーケンスを隣接ペアの列として見るビュー。
///
/// 要素はコピーせず、先頭と末尾の位置だけを保持する。
/// 何度 `begin` / `iter` を呼んでも同じペアの列が得られる。
#[derive(Clone, Copy, Debug)]
pub struct PairView<P> {
    first: P,
    last: P,
}

impl<P: ForwardPosition> PairView<P> {
    pub fn new(first: P, last: P) -> Self {
        log::trace!("adjacent view constructed");
        PairView { first, last }
    }

    pub fn begin(&self) -> PairCursor<P> {
        PairCursor::new(self.first.clone(), self.last.clone())
    }

    /// 番兵となる終端カーソル。`first` には依存しない。
    pub fn end(&self) -> PairCursor<P> {
        PairCursor::new(self.last.clone(), self.last.clone())
    }

    /// ペアを一つも生まないかどうか（要素数が 0 または 1）
    pub fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }

    pub fn iter(&self) -> Pairs<P> {
        Pairs { cursor: self.begin(), end: self.end() }
    }
}

impl<P: ForwardPosition> IntoIterator for PairView<P> {
    type Item = (P::Item, P::Item);
    type IntoIter = Pairs<P>;

    fn into_iter(self) -> Pairs<P> {
        self.iter()
    }
}

impl<P: ForwardPosition> IntoIterator for &PairView<P> {
    type Item = (P::Item, P::Item);
    type IntoIter = Pairs<P>;

    fn into_iter(self) -> Pairs<P> {
        self.iter()
    }
}

/// `PairView` の隣接ペアを順に返すイテレータ。
///
/// 番兵と比較してから読み出すので、終端を越えて読むことはない。
#[derive(Clone, Debug)]
pub struct Pairs<P> {
    cursor: PairCursor<P>,
    end: PairCursor<P>,
}

impl<P: ForwardPosition> Iterator for Pairs<P> {
    type Item = (P::Item, P::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let pair = self.cursor.get();
        self.cursor.advance();
        Some(pair)
    }
}

impl<P: ForwardPosition> FusedIterator for Pairs<P> {}

/// 任意のシーケンスから `PairView` を作る。
///
/// 位置の型を呼び出し側が知らなくて済むように、直接 `PairView::new` を呼ぶ代わりにこちらを使う。
/// スライス、`Vec`、配列、`VecDeque`、`LinkedList`、`BTreeSet`、`str`、`String` はそのまま渡せる。
/// それ以外のコレクションは `Forward(c.iter())` で包む。
pub fn adjacent<S: Sequence>(seq: S) -> PairView<S::Position> {
    PairView::new(seq.first_position(), seq.last_position())
}
