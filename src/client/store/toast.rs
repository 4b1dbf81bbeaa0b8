use crate::model::record_list::Notice;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Notices waiting to be dismissed, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastState {
    /// Only the most recent toasts stay on screen
    const MAX_VISIBLE: usize = 4;

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, notice: Notice) {
        self.toasts.push(Toast {
            id: self.next_id,
            notice,
        });
        self.next_id = self.next_id.wrapping_add(1);

        if self.toasts.len() > Self::MAX_VISIBLE {
            self.toasts.remove(0);
        }
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut state = ToastState::default();
        state.push(Notice::success("a"));
        state.push(Notice::error("b"));

        let ids: Vec<u32> = state.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn oldest_toast_is_dropped_past_limit() {
        let mut state = ToastState::default();
        for i in 0..5 {
            state.push(Notice::success(format!("{}", i)));
        }

        assert_eq!(state.toasts().len(), 4);
        assert_eq!(state.toasts()[0].notice.message, "1");
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut state = ToastState::default();
        state.push(Notice::success("a"));
        state.push(Notice::success("b"));

        state.dismiss(0);

        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].notice.message, "b");
    }
}
