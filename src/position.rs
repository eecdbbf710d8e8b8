use std::fmt;

/// 前方向にのみ進める位置（カーソル）。
///
/// シーケンスの中の一箇所を指す不透明な値で、複製・等値比較ができ、
/// 一歩ずつ前へ進めることができる。
pub trait ForwardPosition: Clone + PartialEq {
    /// `get` が返す要素の型。スライスの場合は要素への参照。
    type Item;

    /// 位置を一歩進める。終端を越えて進めてはいけない。
    fn advance(&mut self);

    /// 現在の位置にある要素を返す。終端位置で呼び出すとパニックする。
    fn get(&self) -> Self::Item;
}

/// 借用したスライスへのインデックス。
pub struct SlicePosition<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SlicePosition<'a, T> {
    pub fn first(slice: &'a [T]) -> Self {
        SlicePosition { slice, index: 0 }
    }

    /// 末尾の一つ先を指す位置
    pub fn last(slice: &'a [T]) -> Self {
        SlicePosition { slice, index: slice.len() }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

// derive だと T: Clone が要求されてしまうので手動で実装する
impl<T> Clone for SlicePosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

impl<T> PartialEq for SlicePosition<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.index == other.index
    }
}

impl<T> Eq for SlicePosition<'_, T> {}

impl<T> fmt::Debug for SlicePosition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlicePosition")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> ForwardPosition for SlicePosition<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) {
        debug_assert!(self.index < self.slice.len(), "advanced past the end of the slice");
        self.index += 1;
    }

    fn get(&self) -> &'a T {
        &self.slice[self.index]
    }
}

/// `Clone` なイテレータを前方向の位置として扱うためのラッパー。
///
/// 要素はどこにも保持しない。`get` のたびにイテレータを複製して先頭を読み出す。
/// `slice::Iter` のように要素が参照であれば、要素そのものはコピーされない。
///
/// 作っただけでは何も評価されない。ただし `advance` は内側のイテレータの `next` を呼ぶので、
/// `map` などのアダプタは読み飛ばした要素の分だけクロージャを実行する（値は捨てられる）。
/// 終端との比較でも、複製したイテレータの先頭を一つ覗く。
///
/// 位置同士の比較は、消費した要素数（オフセット）で行う。
/// 終端（`last`）とは、使い切った位置であればオフセットに関係なく等しい。
#[derive(Clone, Debug)]
pub struct IterPosition<I> {
    iter: I,
    offset: usize,
    end: bool,
}

impl<I: Iterator + Clone> IterPosition<I> {
    pub fn first(iter: I) -> Self {
        IterPosition { iter, offset: 0, end: false }
    }

    /// 終端を表す位置。イテレータは走査されない。
    pub fn last(iter: I) -> Self {
        IterPosition { iter, offset: 0, end: true }
    }

    pub fn is_exhausted(&self) -> bool {
        self.end || self.iter.clone().next().is_none()
    }
}

impl<I: Iterator + Clone> PartialEq for IterPosition<I> {
    fn eq(&self, other: &Self) -> bool {
        match (self.end, other.end) {
            (true, true) => true,
            (false, false) => self.offset == other.offset,
            (false, true) => self.is_exhausted(),
            (true, false) => other.is_exhausted(),
        }
    }
}

impl<I: Iterator + Clone> ForwardPosition for IterPosition<I> {
    type Item = I::Item;

    fn advance(&mut self) {
        debug_assert!(!self.end, "advanced the end position");
        let stepped = self.iter.next().is_some();
        debug_assert!(stepped, "advanced past the end of the iterator");
        self.offset += 1;
    }

    fn get(&self) -> I::Item {
        match self.iter.clone().next() {
            Some(item) if !self.end => item,
            _ => panic!("dereferenced an exhausted position"),
        }
    }
}
