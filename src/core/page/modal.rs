//! 资料弹窗的开关状态

use tracing::debug;

/// 页面上的一组弹窗，按文档顺序登记
#[derive(Debug, Clone, Default)]
pub struct ModalStack {
    modals: Vec<(String, bool)>,
}

impl ModalStack {
    /// 登记弹窗，初始全部隐藏
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modals: ids.into_iter().map(|id| (id.into(), false)).collect(),
        }
    }

    fn slot(&mut self, id: &str) -> Option<&mut bool> {
        self.modals
            .iter_mut()
            .find(|(modal, _)| modal == id)
            .map(|(_, open)| open)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.modals.iter().any(|(modal, open)| modal == id && *open)
    }

    /// 有弹窗打开时页面主体禁止滚动
    pub fn body_locked(&self) -> bool {
        self.modals.iter().any(|(_, open)| *open)
    }

    /// 打开弹窗；未登记的 id 不做任何事
    pub fn open(&mut self, id: &str) -> bool {
        match self.slot(id) {
            Some(open) => {
                *open = true;
                true
            }
            None => {
                debug!(id, "unknown modal");
                false
            }
        }
    }

    /// 关闭弹窗，返回之前是否处于打开状态
    pub fn close(&mut self, id: &str) -> bool {
        match self.slot(id) {
            Some(open) => std::mem::replace(open, false),
            None => false,
        }
    }

    /// 点击弹窗区域：只有点在遮罩本身上才关闭
    pub fn backdrop_click(&mut self, id: &str, on_backdrop: bool) -> bool {
        on_backdrop && self.close(id)
    }

    /// Esc 键：关闭文档中第一个打开的弹窗，返回其 id
    pub fn escape(&mut self) -> Option<String> {
        let (id, open) = self.modals.iter_mut().find(|(_, open)| *open)?;
        *open = false;
        Some(id.clone())
    }
}
