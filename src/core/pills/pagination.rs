//! 分页状态

use super::packing::{Page, PillId};

/// 当前页需要显示的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVisibility {
    pub visible: Vec<PillId>,
    pub show_previous: bool,
    pub show_next: bool,
}

/// 分页状态
///
/// 页面只在重新布局时整体替换；翻页只改变当前页下标。
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    pages: Vec<Page>,
    current_page: usize,
    total_items: usize,
}

impl PaginationState {
    /// 创建新的分页状态
    pub fn new(pages: Vec<Page>) -> Self {
        let total_items = pages.iter().map(Vec::len).sum();
        Self {
            pages,
            current_page: 0,
            total_items,
        }
    }

    /// 获取当前页下标（从0开始）
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// 获取总页数
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// 上一页，返回是否发生了变化
    pub fn go_to_previous(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// 下一页，返回是否发生了变化
    pub fn go_to_next(&mut self) -> bool {
        if self.current_page + 1 < self.pages.len() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// 替换为新的分页结果，当前页下标收敛到新范围内
    pub fn replace_pages(&mut self, pages: Vec<Page>) {
        self.total_items = pages.iter().map(Vec::len).sum();
        self.pages = pages;
        self.current_page = self
            .current_page
            .min(self.pages.len().saturating_sub(1));
    }

    /// 计算当前页的可见性
    ///
    /// 不超过一页时退化为普通列表：全部显示，两个控件都移除。
    pub fn visibility(&self) -> PageVisibility {
        if self.pages.len() <= 1 {
            return PageVisibility {
                visible: (0..self.total_items).map(PillId).collect(),
                show_previous: false,
                show_next: false,
            };
        }

        PageVisibility {
            visible: self.pages[self.current_page].clone(),
            show_previous: self.current_page > 0,
            show_next: self.current_page + 1 < self.pages.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pages(sizes: &[usize]) -> Vec<Page> {
        let mut next = 0;
        sizes
            .iter()
            .map(|&size| {
                let page = (next..next + size).map(PillId).collect();
                next += size;
                page
            })
            .collect()
    }

    #[test]
    fn previous_is_floored_at_first_page() {
        let mut state = PaginationState::new(pages(&[2, 2]));
        assert!(!state.go_to_previous());
        assert_eq!(state.current_page(), 0);
    }

    #[test]
    fn next_is_capped_at_last_page() {
        let mut state = PaginationState::new(pages(&[2, 2]));
        assert!(state.go_to_next());
        assert!(!state.go_to_next());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn first_page_shows_only_next_control() {
        let state = PaginationState::new(pages(&[2, 2, 1]));
        let visibility = state.visibility();
        assert_eq!(visibility.visible, vec![PillId(0), PillId(1)]);
        assert!(!visibility.show_previous);
        assert!(visibility.show_next);
    }

    #[test]
    fn middle_page_shows_both_controls() {
        let mut state = PaginationState::new(pages(&[2, 2, 1]));
        state.go_to_next();
        let visibility = state.visibility();
        assert_eq!(visibility.visible, vec![PillId(2), PillId(3)]);
        assert!(visibility.show_previous);
        assert!(visibility.show_next);
    }

    #[test]
    fn last_page_shows_only_previous_control() {
        let mut state = PaginationState::new(pages(&[2, 2, 1]));
        state.go_to_next();
        state.go_to_next();
        let visibility = state.visibility();
        assert_eq!(visibility.visible, vec![PillId(4)]);
        assert!(visibility.show_previous);
        assert!(!visibility.show_next);
    }

    #[test]
    fn single_page_dissolves_into_plain_list() {
        let state = PaginationState::new(pages(&[3]));
        let visibility = state.visibility();
        assert_eq!(visibility.visible.len(), 3);
        assert!(!visibility.show_previous);
        assert!(!visibility.show_next);
    }

    #[test]
    fn shrinking_page_count_clamps_current_page() {
        let mut state = PaginationState::new(pages(&[1, 1, 1, 1]));
        state.go_to_next();
        state.go_to_next();
        state.go_to_next();
        state.replace_pages(pages(&[2, 2]));
        assert_eq!(state.current_page(), 1);
        state.replace_pages(pages(&[4]));
        assert_eq!(state.current_page(), 0);
        assert_eq!(state.visibility().visible.len(), 4);
    }

    #[test]
    fn growing_page_count_keeps_current_page() {
        let mut state = PaginationState::new(pages(&[2, 2]));
        state.go_to_next();
        state.replace_pages(pages(&[1, 1, 1, 1]));
        assert_eq!(state.current_page(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Previous,
        Next,
        Replace(Vec<usize>),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Previous),
            Just(Op::Next),
            prop::collection::vec(1usize..4, 1..6).prop_map(Op::Replace),
        ]
    }

    proptest! {
        #[test]
        fn current_page_stays_in_bounds(
            initial in prop::collection::vec(1usize..4, 1..6),
            ops in prop::collection::vec(op(), 0..40),
        ) {
            let mut state = PaginationState::new(pages(&initial));
            for op in ops {
                match op {
                    Op::Previous => { state.go_to_previous(); }
                    Op::Next => { state.go_to_next(); }
                    Op::Replace(sizes) => state.replace_pages(pages(&sizes)),
                }
                prop_assert!(state.current_page() < state.total_pages());
            }
        }
    }
}
