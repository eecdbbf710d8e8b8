use crate::position::{IterPosition, SlicePosition};
use crate::view::PairView;

/// `adjacent_pairs()` メソッドをスライスで使えるようにするための拡張トレイト
pub trait AdjacentPairsExt<T> {
    fn adjacent_pairs(&self) -> PairView<SlicePosition<'_, T>>;
}

// すべてのスライス `[T]` に対して実装（`Vec<T>` からも deref で呼べる）
impl<T> AdjacentPairsExt<T> for [T] {
    fn adjacent_pairs(&self) -> PairView<SlicePosition<'_, T>> {
        PairView::new(SlicePosition::first(self), SlicePosition::last(self))
    }
}

/// `Clone` なイテレータから隣接ペアのビューを作る拡張トレイト
pub trait ForwardPairsExt: Iterator + Clone + Sized {
    fn forward_pairs(self) -> PairView<IterPosition<Self>>;
}

impl<I: Iterator + Clone> ForwardPairsExt for I {
    fn forward_pairs(self) -> PairView<IterPosition<Self>> {
        PairView::new(IterPosition::first(self.clone()), IterPosition::last(self))
    }
}
