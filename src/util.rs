use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::error::Error;

/// Extra operations on `Enum` types for stepping through their variants in
/// declaration order
pub(crate) trait EnumExt: Enum + Copy {
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH.saturating_sub(1))
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize().checked_add(1)?;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }
}

impl<T: Enum + Copy> EnumExt for T {}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `Rect` of the given size centered within `area`.  If `size` is
/// larger than `area` in either dimension, the result is clipped to `area`.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Render an error and all of its sources as a single line of the form
/// `"outer: inner: innermost"`
pub(crate) fn error_chain(e: &dyn Error) -> String {
    let mut s = e.to_string();
    let mut source = e.source();
    while let Some(src) = source {
        s.push_str(": ");
        s.push_str(&src.to_string());
        source = src.source();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use thiserror::Error;

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Trio {
        First,
        Second,
        Third,
    }

    #[test]
    fn enum_ext_stepping() {
        assert_eq!(Trio::min(), Trio::First);
        assert_eq!(Trio::max(), Trio::Third);
        assert_eq!(Trio::First.next(), Some(Trio::Second));
        assert_eq!(Trio::Third.next(), None);
        assert_eq!(Trio::First.prev(), None);
        assert_eq!(Trio::Third.prev(), Some(Trio::Second));
        assert_eq!(
            Trio::iter().collect::<Vec<_>>(),
            [Trio::First, Trio::Second, Trio::Third]
        );
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 10), Rect::new(30, 7, 20, 10))]
    #[case(Rect::new(4, 2, 10, 6), Size::new(10, 6), Rect::new(4, 2, 10, 6))]
    #[case(Rect::new(0, 0, 44, 14), Size::new(22, 12), Rect::new(11, 1, 22, 12))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[derive(Debug, Error)]
    #[error("outer failure")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("inner failure")]
    struct Inner(#[source] std::io::Error);

    #[test]
    fn error_chain_joins_sources() {
        let e = Outer(Inner(std::io::Error::other("disk on fire")));
        assert_eq!(
            error_chain(&e),
            "outer failure: inner failure: disk on fire"
        );
    }
}
