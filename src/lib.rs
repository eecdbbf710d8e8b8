//! 前方向に走査できるシーケンスを、隣り合う要素のペアの列として見るアダプタ。
//!
//! `[a, b, c, d]` -> `(a, b), (b, c), (c, d)`
//!
//! 要素のコピーは行わず、元のシーケンスの位置だけを保持する。
//! ペアは読み出されるたびに計算されるので、メモリ使用量は長さに依存しない。
//!
//! ```
//! use adjacent::adjacent;
//!
//! let data = [10, 20, 30, 40];
//! let view = adjacent(&data);
//!
//! // カーソルを直接使う場合
//! let mut cursor = view.begin();
//! let end = view.end();
//! while cursor != end {
//!     let (a, b) = cursor.get();
//!     assert_eq!(*b - *a, 10);
//!     cursor.advance();
//! }
//!
//! // イテレータとして使う場合
//! let pairs: Vec<_> = view.iter().map(|(a, b)| (*a, *b)).collect();
//! assert_eq!(pairs, vec![(10, 20), (20, 30), (30, 40)]);
//! ```

mod cursor;
mod deltas;
mod error;
mod ext;
mod position;
mod view;

pub use cursor::PairCursor;
pub use deltas::deltas;
pub use error::{Error, Result};
pub use ext::{AdjacentPairsExt, ForwardPairsExt};
pub use position::{ForwardPosition, IterPosition, SlicePosition};
pub use view::{adjacent, Forward, PairView, Pairs, Sequence};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works01() {
        println!("--- i32 の場合 ---");
        let data = [10, 20, 30, 40];
        for (a, b) in adjacent(&data) {
            println!("  ({}, {})", a, b);
        }
        let pairs: Vec<(i32, i32)> = adjacent(&data).iter().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(10, 20), (20, 30), (30, 40)]);

        println!("\n--- &str の場合 ---");
        let words = vec!["a", "b"];
        let pairs: Vec<_> = adjacent(&words).iter().collect();
        assert_eq!(pairs, vec![(&"a", &"b")]);
    }
}
