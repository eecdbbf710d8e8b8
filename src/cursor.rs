use crate::position::ForwardPosition;

/// 隣接する2要素を指すカーソル。
///
/// `current` と、それより一歩先の `next` の二つの位置を持つ。
/// 終端（番兵）は `PairCursor::new(last, last)` で表される。
#[derive(Clone, Debug)]
pub struct PairCursor<P> {
    current: P,
    next: P,
}

impl<P: ForwardPosition> PairCursor<P> {
    /// `first == last`（空のシーケンス）の場合は `next` も `first` のままにする。
    pub fn new(first: P, last: P) -> Self {
        let next = if first == last {
            first.clone()
        } else {
            let mut next = first.clone();
            next.advance();
            next
        };
        PairCursor { current: first, next }
    }

    /// 両方の位置を一歩ずつ進める。番兵に達したカーソルを進めてはいけない。
    pub fn advance(&mut self) {
        self.current.advance();
        self.next.advance();
    }

    /// `(current の要素, next の要素)` を返す。呼び出すたびに位置から読み直す。
    pub fn get(&self) -> (P::Item, P::Item) {
        (self.current.get(), self.next.get())
    }
}

// next だけを比較する。current で比較すると要素が一つ余分に出てしまう
impl<P: PartialEq> PartialEq for PairCursor<P> {
    fn eq(&self, other: &Self) -> bool {
        self.next == other.next
    }
}

impl<P: Eq> Eq for PairCursor<P> {}
