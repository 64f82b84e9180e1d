//! Pill 分页装箱算法
//!
//! 输入只有宽度，输出每页包含的 pill 序号，和具体的渲染表面无关。

/// pill 在容器中的序号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PillId(pub usize);

/// 一页：连续且非空的 pill 序列
pub type Page = Vec<PillId>;

/// 所有宽度之和加上它们之间的间距
pub fn total_width(widths: &[f64], gap: f64) -> f64 {
    widths.iter().sum::<f64>()
        + gap * widths.len().saturating_sub(1) as f64
}

/// 一次布局所需的全部测量值，单位与渲染表面一致
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PillMetrics {
    pub available_width: f64,
    pub gap: f64,
    pub control_width: f64,
    pub item_widths: Vec<f64>,
}

impl PillMetrics {
    pub fn pages(&self) -> Vec<Page> {
        compute_pages(
            &self.item_widths,
            self.available_width,
            self.gap,
            self.control_width,
        )
    }
}

/// 把 pill 分配到若干页
///
/// 全部放得下时只返回一页，不预留控件空间。否则从左到右贪心填充：
/// 第一页之后的每页预留“上一页”控件，后面还有 pill 时预留“下一页”控件，
/// 放不下预留时把末尾的 pill 退回队列，直到只剩一个为止。
/// 单个超宽的 pill 独占一页，不会被丢弃。
pub fn compute_pages(
    widths: &[f64],
    available_width: f64,
    gap: f64,
    control_width: f64,
) -> Vec<Page> {
    if widths.is_empty() {
        return Vec::new();
    }

    let available_width = available_width.max(0.0);
    if total_width(widths, gap) <= available_width {
        return vec![(0..widths.len()).map(PillId).collect()];
    }

    let mut pages: Vec<Page> = Vec::new();
    let mut index = 0;

    while index < widths.len() {
        let reserve_prev = if pages.is_empty() {
            0.0
        } else {
            control_width + gap
        };
        let available = available_width - reserve_prev;
        let mut page: Page = Vec::new();
        let mut used = 0.0;

        // 贪心填充
        while index < widths.len() {
            let width = widths[index];
            let next_gap = if page.is_empty() { 0.0 } else { gap };
            if used + next_gap + width > available {
                break;
            }
            page.push(PillId(index));
            used += next_gap + width;
            index += 1;
        }

        // 后面还有 pill：需要“下一页”控件，放不下就回退
        if index < widths.len() {
            let reserve_next = control_width
                + if page.is_empty() { 0.0 } else { gap };
            while page.len() > 1 && used + reserve_next > available {
                index -= 1;
                used -= widths[index] + gap;
                page.pop();
            }
        }

        if page.is_empty() {
            page.push(PillId(index));
            index += 1;
        }

        pages.push(page);
    }

    pages
}

/// 根据剩余宽度计算统一的 pill 内边距（单侧）
///
/// `text_widths` 是内边距清零后测得的内容宽度。
pub fn ideal_padding(
    text_widths: &[f64],
    available_width: f64,
    gap: f64,
    min_padding: f64,
) -> f64 {
    let total_text = total_width(text_widths, gap);
    let padding = ((available_width - total_text)
        / (2.0 * text_widths.len() as f64))
        .floor();
    if padding.is_finite() {
        padding.max(min_padding)
    } else {
        min_padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(pages: &[Page]) -> Vec<Vec<usize>> {
        pages
            .iter()
            .map(|page| page.iter().map(|id| id.0).collect())
            .collect()
    }

    fn page_width(page: &Page, widths: &[f64], gap: f64) -> f64 {
        let page_widths: Vec<f64> =
            page.iter().map(|id| widths[id.0]).collect();
        total_width(&page_widths, gap)
    }

    #[test]
    fn four_items_split_into_two_pages() {
        let pages = compute_pages(&[50.0; 4], 170.0, 10.0, 30.0);
        assert_eq!(ids(&pages), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn metrics_pack_like_compute_pages() {
        let metrics = PillMetrics {
            available_width: 170.0,
            gap: 10.0,
            control_width: 30.0,
            item_widths: vec![50.0; 4],
        };
        assert_eq!(ids(&metrics.pages()), vec![vec![0, 1], vec![2, 3]]);
        assert!(PillMetrics::default().pages().is_empty());
    }

    #[test]
    fn everything_fits_on_one_page() {
        let pages = compute_pages(&[50.0, 50.0, 50.0], 170.0, 10.0, 30.0);
        assert_eq!(ids(&pages), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn exact_fit_needs_no_controls() {
        // 3 * 50 + 2 * 10 == 170
        let pages = compute_pages(&[50.0; 3], 170.0, 10.0, 500.0);
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn empty_input_gives_no_pages() {
        assert!(compute_pages(&[], 100.0, 10.0, 30.0).is_empty());
    }

    #[test]
    fn oversized_item_gets_its_own_page() {
        let pages =
            compute_pages(&[40.0, 300.0, 40.0], 100.0, 10.0, 20.0);
        assert_eq!(ids(&pages), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn zero_width_container_keeps_every_item() {
        let pages = compute_pages(&[10.0, 20.0, 30.0], 0.0, 5.0, 5.0);
        assert_eq!(ids(&pages), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn negative_width_is_treated_as_zero() {
        let pages = compute_pages(&[10.0, 20.0], -50.0, 5.0, 5.0);
        assert_eq!(ids(&pages), vec![vec![0], vec![1]]);
    }

    #[test]
    fn backtracks_several_items_for_next_control() {
        // 第一页贪心能放 5 个（5*10+4*2=58），但预留 next(20+2) 后只剩 3 个
        let widths = [10.0; 8];
        let pages = compute_pages(&widths, 58.0, 2.0, 20.0);
        assert_eq!(ids(&pages)[0], vec![0, 1, 2]);
        assert!(page_width(&pages[0], &widths, 2.0) + 22.0 <= 58.0);
    }

    #[test]
    fn last_page_reserves_only_previous_control() {
        let widths = [50.0; 4];
        let pages = compute_pages(&widths, 170.0, 10.0, 30.0);
        let last = pages.last().unwrap();
        // 170 - (30 + 10) = 130 ≥ 110
        assert!(page_width(last, &widths, 10.0) + 40.0 <= 170.0);
    }

    #[test]
    fn padding_distributes_leftover_width() {
        // (200 - (20 + 30 + 2*5)) / (2 * 3) = 23.33 → 23
        let padding = ideal_padding(&[20.0, 30.0, 0.0], 200.0, 5.0, 6.0);
        assert_eq!(padding, 23.0);
    }

    #[test]
    fn padding_never_below_minimum() {
        assert_eq!(ideal_padding(&[100.0, 100.0], 150.0, 10.0, 6.0), 6.0);
    }

    #[test]
    fn padding_without_items_is_minimum() {
        assert_eq!(ideal_padding(&[], 150.0, 10.0, 6.0), 6.0);
    }

    proptest! {
        #[test]
        fn never_drops_or_reorders_items(
            widths in prop::collection::vec(1.0f64..120.0, 1..40),
            available in 0.0f64..400.0,
            gap in 0.0f64..12.0,
            control in 0.0f64..40.0,
        ) {
            let pages = compute_pages(&widths, available, gap, control);
            let flat: Vec<usize> =
                pages.iter().flatten().map(|id| id.0).collect();
            prop_assert_eq!(flat, (0..widths.len()).collect::<Vec<_>>());
            prop_assert!(pages.iter().all(|page| !page.is_empty()));
        }

        #[test]
        fn single_page_iff_everything_fits(
            widths in prop::collection::vec(1.0f64..120.0, 1..20),
            available in 0.0f64..800.0,
            gap in 0.0f64..12.0,
        ) {
            let pages = compute_pages(&widths, available, gap, 30.0);
            let fits = total_width(&widths, gap) <= available;
            prop_assert_eq!(pages.len() == 1, fits || widths.len() == 1);
        }

        #[test]
        fn multi_page_results_reserve_control_space(
            widths in prop::collection::vec(1.0f64..60.0, 2..30),
            available in 100.0f64..300.0,
            gap in 0.0f64..8.0,
            control in 1.0f64..30.0,
        ) {
            let pages = compute_pages(&widths, available, gap, control);
            prop_assume!(pages.len() > 1);
            let last = pages.len() - 1;
            for (i, page) in pages.iter().enumerate() {
                if page.len() == 1 {
                    continue;
                }
                let mut need = page_width(page, &widths, gap);
                if i > 0 {
                    need += control + gap;
                }
                if i < last {
                    need += control + gap;
                }
                prop_assert!(need <= available + 1e-9);
            }
        }
    }
}
