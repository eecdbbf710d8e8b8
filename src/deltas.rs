use num_traits::CheckedSub;

use crate::error::{Error, Result};
use crate::view::adjacent;

/// 隣り合う要素の差 `values[i + 1] - values[i]` を順に返す。
///
/// 例えば絶対時刻（tick）の列をデルタ時間の列に変換するのに使う。
///
/// # トレイト境界
/// * `T: CheckedSub`: 差が表現できない場合（符号なし整数で値が減少した場合など）を検出するため。
///
/// 差が表現できないペアでは `Error::Unrepresentable` を返し、そのまま次のペアへ進む。
pub fn deltas<T>(values: &[T]) -> impl Iterator<Item = Result<T>> + '_
where
    T: CheckedSub,
{
    adjacent(values).into_iter().enumerate().map(|(index, (prev, next))| {
        next.checked_sub(prev).ok_or_else(|| {
            log::debug!("unrepresentable difference at index {}", index);
            Error::Unrepresentable { index }
        })
    })
}
